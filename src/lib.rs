pub mod api;
pub mod config;
pub mod error;
pub mod judgment;
// cmd and reports belong to the binary crate (main.rs).
