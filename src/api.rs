use crate::config::Configuration;
use crate::error::HsResult;
use crate::judgment::{engine, JudgmentDisplay, ScoringEvent};
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

/// The shared state a host keeps for judging cuts while the configuration
/// may be reloaded underneath it.
///
/// Every evaluation works on an `Arc` snapshot taken up front, so a reload
/// swaps whole configurations and never exposes a half-replaced one.
#[derive(Default)]
pub struct HitScoreState {
    config: RwLock<Option<Arc<Configuration>>>,
}

impl HitScoreState {
    pub fn new(config: Configuration) -> Self {
        Self {
            config: RwLock::new(Some(Arc::new(config))),
        }
    }

    /// Service: Load a configuration file and make it current.
    ///
    /// On error the previous configuration stays in place.
    pub fn load_config<P: AsRef<Path>>(&self, path: P) -> HsResult<()> {
        let config = Configuration::load_from_file(path)?;
        self.replace_config(config);
        Ok(())
    }

    pub fn replace_config(&self, config: Configuration) -> Option<Arc<Configuration>> {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        info!("API: Replacing active configuration");
        guard.replace(Arc::new(config))
    }

    pub fn clear_config(&self) -> Option<Arc<Configuration>> {
        let mut guard = self.config.write().unwrap_or_else(PoisonError::into_inner);
        guard.take()
    }

    pub fn snapshot(&self) -> Option<Arc<Configuration>> {
        self.config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Service: Judge one event against the current configuration.
    ///
    /// Without a loaded configuration nothing is displayed.
    pub fn judge(&self, event: &ScoringEvent) -> HsResult<Option<JudgmentDisplay>> {
        match self.snapshot() {
            Some(config) => engine::evaluate(&config, event),
            None => Ok(None),
        }
    }
}
