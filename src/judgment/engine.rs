use super::template::{expand, CutDirectives, Directives};
use super::types::{
    time_dependence, ChainHeadScores, ChainLinkScores, CutScores, JudgmentDisplay, ScoringEvent,
};
use crate::config::{Configuration, DisplayMode};
use crate::error::HsResult;
use tracing::{debug, warn};

/// Turns one scoring event into display text and color.
///
/// Returns `Ok(None)` for events that leave the display untouched, including
/// intermediate cuts when `doIntermediateUpdates` is off.
pub fn evaluate(config: &Configuration, event: &ScoringEvent) -> HsResult<Option<JudgmentDisplay>> {
    if event.is_intermediate() && !config.do_intermediate_updates {
        debug!("Intermediate updates disabled; skipping {}", event.scoring_type());
        return Ok(None);
    }

    let display = match event {
        ScoringEvent::Normal(cut) | ScoringEvent::SliderHead(cut) | ScoringEvent::SliderTail(cut) => {
            Some(judge_normal(config, cut)?)
        }
        ScoringEvent::BurstSliderHead(head) => Some(judge_chain_head(config, head)?),
        ScoringEvent::BurstSliderElement(link) => judge_chain_link(config, link),
        ScoringEvent::Ignore | ScoringEvent::NoScore => None,
    };

    if let Some(d) = &display {
        debug!(
            "Judged {} -> {:?} {}",
            event.scoring_type(),
            d.text,
            d.color
        );
    }

    Ok(display)
}

fn judge_normal(config: &Configuration, cut: &CutScores) -> HsResult<JudgmentDisplay> {
    let after = cut.after_score();
    let total = cut.total()?;
    let matched = config.judgments.judge(total)?;

    let directives = CutDirectives {
        config,
        score: total,
        max_cut_score: cut.max_cut_score,
        time_dependence: time_dependence(cut.cut_normal_z),
        before: Some(cut.before),
        accuracy: Some(cut.accuracy),
        after: Some(after),
    };

    Ok(JudgmentDisplay {
        text: assemble_text(config.display_mode, &matched.judgment.text, total, &directives),
        color: matched.color,
    })
}

fn judge_chain_head(config: &Configuration, head: &ChainHeadScores) -> HsResult<JudgmentDisplay> {
    let total = head.total()?;
    let matched = config.chain_head_table().judge(total)?;

    let directives = CutDirectives {
        config,
        score: total,
        max_cut_score: head.max_cut_score,
        time_dependence: time_dependence(head.cut_normal_z),
        before: Some(head.before),
        accuracy: Some(head.accuracy),
        after: None,
    };

    Ok(JudgmentDisplay {
        text: assemble_text(config.display_mode, &matched.judgment.text, total, &directives),
        color: matched.color,
    })
}

fn judge_chain_link(config: &Configuration, link: &ChainLinkScores) -> Option<JudgmentDisplay> {
    let Some(chain_link) = config.chain_link_display.as_ref() else {
        warn!("No chainLinkDisplay configured; leaving burst slider element untouched");
        return None;
    };

    let total = link.fixed_cut_score;
    let directives = CutDirectives {
        config,
        score: total,
        max_cut_score: link.max_cut_score,
        time_dependence: time_dependence(link.cut_normal_z),
        before: None,
        accuracy: None,
        after: None,
    };

    Some(JudgmentDisplay {
        text: assemble_text(config.display_mode, &chain_link.text, total, &directives),
        color: chain_link.color,
    })
}

fn assemble_text<D: Directives>(mode: DisplayMode, text: &str, score: i32, directives: &D) -> String {
    match mode {
        DisplayMode::Format => expand(text, directives),
        DisplayMode::TextOnly => text.to_string(),
        DisplayMode::Numeric => score.to_string(),
        DisplayMode::ScoreOnTop => format!("{}\n{}\n", score, text),
        DisplayMode::Default => format!("{}\n{}\n", text, score),
    }
}
