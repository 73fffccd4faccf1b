use crate::reports;
use clap::Args;
use hitscore::error::HsResult;
use hitscore::judgment::{JudgmentService, RawCut, ScoringEvent};

#[derive(Args, Debug, Clone)]
pub struct JudgeArgs {
    /// normal, sliderHead, sliderTail, burstSliderHead, burstSliderElement, ignore, noScore
    #[arg(short = 't', long = "type", default_value = "normal")]
    pub scoring_type: String,

    #[arg(short, long, default_value_t = 0)]
    pub before: i32,
    #[arg(short, long, default_value_t = 0)]
    pub after: i32,
    #[arg(short = 'A', long, default_value_t = 0)]
    pub accuracy: i32,

    #[arg(short = 'z', long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub cut_normal_z: f32,

    #[arg(long, default_value_t = 115)]
    pub max_cut_score: i32,
    #[arg(long, default_value_t = 20)]
    pub fixed_cut_score: i32,

    /// Judge as an intermediate update with this after-cut score.
    #[arg(long)]
    pub assumed_after: Option<i32>,

    #[arg(long, default_value_t = false)]
    pub json: bool,
}

impl JudgeArgs {
    fn to_raw_cut(&self) -> RawCut {
        RawCut {
            scoring_type: self.scoring_type.clone(),
            before: self.before,
            after: self.after,
            accuracy: self.accuracy,
            cut_normal_z: self.cut_normal_z,
            max_cut_score: self.max_cut_score,
            fixed_cut_score: self.fixed_cut_score,
            assumed_after: None,
        }
    }
}

pub fn run(args: JudgeArgs, service: &JudgmentService) -> HsResult<()> {
    let event = ScoringEvent::try_from(args.to_raw_cut())?;

    let display = match args.assumed_after {
        Some(assumed) => service.judge_intermediate(&event, assumed)?,
        None => service.judge(&event)?,
    };

    if args.json {
        println!("{}", serde_json::to_string(&display)?);
    } else {
        reports::print_judgment(event.scoring_type(), display.as_ref());
    }
    Ok(())
}
