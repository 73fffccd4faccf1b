use crate::reports;
use clap::Args;
use hitscore::error::HsResult;
use hitscore::judgment::JudgmentService;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    /// Also print the segment tables used by %B, %C, %A and %T.
    #[arg(short, long, default_value_t = false)]
    pub segments: bool,
}

pub fn run(args: ValidateArgs, service: &JudgmentService) -> HsResult<()> {
    let config = service.config();

    println!("\n🔎 === CONFIGURATION AUDIT === 🔎");
    reports::print_settings(config);
    reports::print_judgment_table("Judgments", &config.judgments);

    match &config.chain_head_judgments {
        Some(table) => reports::print_judgment_table("Chain Head Judgments", table),
        None => println!("\nChain Head Judgments: (using Judgments)"),
    }

    if let Some(link) = &config.chain_link_display {
        reports::print_chain_link(link);
    }

    if args.segments {
        reports::print_segment_table(
            "Before Cut Angle Judgments",
            config.before_cut_angle_judgments.as_deref(),
        );
        reports::print_segment_table("Accuracy Judgments", config.accuracy_judgments.as_deref());
        reports::print_segment_table(
            "After Cut Angle Judgments",
            config.after_cut_angle_judgments.as_deref(),
        );
        reports::print_time_segment_table(config.time_dependence_judgments.as_deref());
    }

    println!("\n✅ Configuration is valid.");
    Ok(())
}
