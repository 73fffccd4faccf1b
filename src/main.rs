use clap::{Parser, Subcommand};
use hitscore::config::Configuration;
use hitscore::judgment::JudgmentService;
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(
        global = true,
        short,
        long,
        default_value = "HitScoreVisualizerConfig.json"
    )]
    config: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Validate(cmd::validate::ValidateArgs),
    Judge(cmd::judge::JudgeArgs),
    Replay(cmd::replay::ReplayArgs),
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("📂 Loading Configuration: {}", cli.config);
    let config = Configuration::load_from_file(&cli.config).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING CONFIGURATION: {}", e);
        process::exit(1);
    });

    let service = JudgmentService::new(Arc::new(config));

    let result = match cli.command {
        Commands::Validate(args) => cmd::validate::run(args, &service),
        Commands::Judge(args) => cmd::judge::run(args, &service),
        Commands::Replay(args) => cmd::replay::run(args, &service),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
