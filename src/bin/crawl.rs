//! Command-line driver: load a layout file, run the dungeon, print the report.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use dungeon_crawl::{
    DungeonConfig, DungeonEngine, DungeonError, DungeonLayout, GameRng, RunReport, StepOutcome,
};

#[derive(Parser, Debug)]
#[command(name = "crawl", about = "Run a random-walk dungeon crawl")]
struct Args {
    /// Dungeon layout JSON file
    #[arg(default_value = "dungeon.json")]
    layout: PathBuf,

    /// RNG seed (random if omitted)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Give up after this many steps instead of walking until the last room
    #[arg(long)]
    max_steps: Option<u64>,

    /// Do not mark rooms visited after interacting with them
    #[arg(long)]
    no_mark_visited: bool,
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Dungeon(#[from] DungeonError),
    #[error("no exit reached after {0} steps")]
    StepLimit(u64),
    #[error("could not encode report: {0}")]
    Encode(serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "run failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let text = std::fs::read_to_string(&args.layout).map_err(|source| CliError::Read {
        path: args.layout.clone(),
        source,
    })?;
    let layout = DungeonLayout::from_json(&text)?;

    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), path = %args.layout.display(), "loaded layout");

    let config = DungeonConfig::default().with_mark_visited(!args.no_mark_visited);
    let mut engine = DungeonEngine::from_layout(&layout, config, rng)?;

    let report = match args.max_steps {
        Some(limit) => run_bounded(&mut engine, limit)?,
        None => engine.run()?,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(CliError::Encode)?;
        println!("{json}");
    } else {
        print!("{report}");
    }
    Ok(())
}

fn run_bounded(engine: &mut DungeonEngine, limit: u64) -> Result<RunReport, CliError> {
    engine.start_game();
    for _ in 0..limit {
        if engine.advance()? == StepOutcome::Finished {
            return Ok(engine.end_game()?);
        }
    }
    warn!(
        limit,
        score = engine.player().score(),
        rng = ?engine.rng().state(),
        "step limit reached"
    );
    Err(CliError::StepLimit(limit))
}
