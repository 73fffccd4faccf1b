pub mod color;
pub mod engine;
pub mod loader;
pub mod table;
pub mod template;
pub mod types;

pub use self::table::JudgmentTable;
pub use self::types::{
    ChainHeadScores, ChainLinkDisplay, ChainLinkScores, CutScores, Judgment, JudgmentDisplay,
    JudgmentSegment, RawCut, Rgba, ScoringEvent, ScoringType, TimeDependenceJudgmentSegment,
};
use crate::config::Configuration;
use crate::error::HsResult;
use rayon::prelude::*;
use std::sync::Arc;

/// Evaluates scoring events against one immutable configuration snapshot.
#[derive(Debug, Clone)]
pub struct JudgmentService {
    config: Arc<Configuration>,
}

impl JudgmentService {
    pub fn new(config: Arc<Configuration>) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Final judgment for a completed cut.
    pub fn judge(&self, event: &ScoringEvent) -> HsResult<Option<JudgmentDisplay>> {
        engine::evaluate(&self.config, event)
    }

    /// Judgment shown while the swing is still in progress, assuming
    /// `assumed_after` for the after-cut score.
    ///
    /// Yields nothing unless `doIntermediateUpdates` is enabled.
    pub fn judge_intermediate(
        &self,
        event: &ScoringEvent,
        assumed_after: i32,
    ) -> HsResult<Option<JudgmentDisplay>> {
        if !self.config.do_intermediate_updates {
            return Ok(None);
        }

        let event = match *event {
            ScoringEvent::Normal(cut) => ScoringEvent::Normal(CutScores {
                assumed_after: Some(assumed_after),
                ..cut
            }),
            ScoringEvent::SliderHead(cut) => ScoringEvent::SliderHead(CutScores {
                assumed_after: Some(assumed_after),
                ..cut
            }),
            ScoringEvent::SliderTail(cut) => ScoringEvent::SliderTail(CutScores {
                assumed_after: Some(assumed_after),
                ..cut
            }),
            other => other,
        };

        engine::evaluate(&self.config, &event)
    }

    /// Evaluates independent events in parallel; results keep input order.
    pub fn judge_all(&self, events: &[ScoringEvent]) -> Vec<HsResult<Option<JudgmentDisplay>>> {
        events
            .par_iter()
            .map(|event| engine::evaluate(&self.config, event))
            .collect()
    }
}
