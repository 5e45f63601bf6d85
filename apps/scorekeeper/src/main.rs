//! Scorekeeper CLI - Zung Jung score card calculator.
//!
//! Lists the scoring catalogue and replays recorded game scripts into a
//! score sheet.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use scorekeeper::domain::Category;
use scorekeeper::{telemetry, AppConfig, AppError, GameScript, ScoreCatalogue};
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Zung Jung mahjong score card calculator")]
struct Args {
    /// Enable verbose logging (overrides SCOREKEEPER_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// House-rules catalogue JSON (defaults to the Zung Jung table)
    #[arg(long, global = true)]
    catalogue: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List hand patterns and bonuses with their points
    Catalogue {
        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
    /// Replay a game script and print the score sheet
    Replay {
        /// Path to the JSON game script
        script: PathBuf,

        #[arg(long, default_value = "text")]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let args = Args::parse();

    let mut config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(2);
        }
    };
    if args.verbose {
        config.log_filter = "debug".to_string();
    }
    telemetry::init_tracing(&config);

    if let Err(e) = run(&args, &config) {
        error!(code = %e.code(), "{e}");
        eprintln!("❌ [{}] {e}", e.code());
        std::process::exit(1);
    }
}

fn run(args: &Args, config: &AppConfig) -> Result<(), AppError> {
    let catalogue = load_catalogue(args.catalogue.as_deref())?;

    match &args.command {
        Command::Catalogue { format } => print_catalogue(&catalogue, *format),
        Command::Replay { script, format } => {
            let script = GameScript::load(script)?;
            let service = scorekeeper::replay(config, catalogue, &script)?;
            let sheet = service.sheet();
            match format {
                OutputFormat::Text => print!("{sheet}"),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&sheet)?),
            }
            Ok(())
        }
    }
}

fn load_catalogue(path: Option<&Path>) -> Result<ScoreCatalogue, AppError> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading catalogue");
            let json = std::fs::read_to_string(path)?;
            Ok(ScoreCatalogue::from_json(&json)?)
        }
        None => Ok(ScoreCatalogue::zung_jung()),
    }
}

fn print_catalogue(catalogue: &ScoreCatalogue, format: OutputFormat) -> Result<(), AppError> {
    if let OutputFormat::Json = format {
        println!("{}", serde_json::to_string_pretty(catalogue)?);
        return Ok(());
    }

    for category in Category::PATTERN_CATEGORIES {
        let mut patterns = catalogue.patterns_in(category).peekable();
        if patterns.peek().is_none() {
            continue;
        }
        println!("{}", category.heading());
        for pattern in patterns {
            println!("  {:<36}{:>5} pts", pattern.label(), pattern.points);
        }
    }
    println!("{}", Category::Bonuses.heading());
    for bonus in catalogue.bonuses() {
        println!("  {:<36}{:>5} pts", bonus.name, bonus.points);
    }
    Ok(())
}
