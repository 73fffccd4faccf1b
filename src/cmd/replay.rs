use crate::reports::{self, ReplayRow};
use clap::Args;
use hitscore::error::HsResult;
use hitscore::judgment::loader::load_cuts_from_file;
use hitscore::judgment::{JudgmentService, ScoringEvent};
use tracing::{info, warn};

#[derive(Args, Debug, Clone)]
pub struct ReplayArgs {
    /// CSV cut log with a header row.
    #[arg(long)]
    pub cuts: String,

    /// Print one JSON object per cut instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ReplayArgs, service: &JudgmentService) -> HsResult<()> {
    let cuts = load_cuts_from_file(&args.cuts)?;
    info!("🎬 Replaying {} cuts from {}", cuts.len(), args.cuts);

    // Rows with an unknown scoring type are reported, not dropped.
    let mut events = Vec::with_capacity(cuts.len());
    let mut rows = Vec::with_capacity(cuts.len());
    for (i, cut) in cuts.iter().enumerate() {
        match ScoringEvent::try_from(cut) {
            Ok(event) => {
                events.push((i, event));
                rows.push(ReplayRow::pending(i + 1, cut.scoring_type.clone()));
            }
            Err(e) => {
                warn!("Cut {}: {}", i + 1, e);
                rows.push(ReplayRow::failed(i + 1, cut.scoring_type.clone(), e.to_string()));
            }
        }
    }

    let only_events: Vec<ScoringEvent> = events.iter().map(|(_, e)| *e).collect();
    let results = service.judge_all(&only_events);

    for ((i, _), result) in events.iter().zip(results) {
        match result {
            Ok(display) => rows[*i].display = display,
            Err(e) => {
                warn!("Cut {}: {}", i + 1, e);
                rows[*i].error = Some(e.to_string());
            }
        }
    }

    if args.json {
        for row in &rows {
            println!("{}", serde_json::to_string(row)?);
        }
    } else {
        reports::print_replay_report(&rows);
    }
    Ok(())
}
