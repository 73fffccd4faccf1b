pub mod judge;
pub mod replay;
pub mod validate;
