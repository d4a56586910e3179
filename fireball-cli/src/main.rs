mod display;
mod fetch;
mod import;
mod session;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::display::{display_analysis, display_fetched, display_import_summary, display_no_data, display_suggestions};
use crate::fetch::HttpDrawSource;
use crate::session::{Session, run_session};
use fireball_core::analysis::DrawHistoryAnalyzer;
use fireball_core::config::{AnalyzerConfig, FireballPool, load_config};
use fireball_core::source::DrawSource;

const MAX_COMBINATIONS: u64 = 1000;

#[derive(Parser)]
#[command(name = "fireball", about = "Illinois Pick 3 Fireball tracker")]
struct Cli {
    /// JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for reproducible suggestions
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive session (default)
    Session {
        /// CSV file to preload (columns: date, main, fireball)
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Digit frequencies and hot/cold digits of a CSV history
    Stats {
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Hot and cold combinations from a CSV history
    Suggest {
        #[arg(short, long)]
        file: PathBuf,

        /// Combinations per column
        #[arg(short = 'n', long, value_parser = clap::builder::RangedU64ValueParser::<usize>::new().range(1..=MAX_COMBINATIONS))]
        count: Option<usize>,

        /// Fireball digits used by the cold combinations
        #[arg(long)]
        cold_fireballs: Option<FireballPool>,
    },

    /// Fetch and print the latest draw
    Fetch,

    /// Print the effective configuration
    Config,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalyzerConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    match cli.command.unwrap_or(Command::Session { file: None }) {
        Command::Session { file } => {
            let mut session = open_session(config, file.as_deref())?;
            run_session(&mut session)
        }
        Command::Stats { file } => {
            let session = open_session(config, Some(file.as_path()))?;
            cmd_stats(&session);
            Ok(())
        }
        Command::Suggest {
            file,
            count,
            cold_fireballs,
        } => {
            if let Some(n) = count {
                config.combinations = n;
            }
            if let Some(pool) = cold_fireballs {
                config.cold_fireball_pool = pool;
            }
            let mut session = open_session(config, Some(file.as_path()))?;
            cmd_suggest(&mut session)
        }
        Command::Fetch => cmd_fetch(&config),
        Command::Config => {
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
    }
}

fn open_session(config: AnalyzerConfig, file: Option<&Path>) -> Result<Session> {
    let source = HttpDrawSource::from_config(&config.source)?;
    let mut session = Session::new(DrawHistoryAnalyzer::new(config), Box::new(source));
    if let Some(path) = file {
        let result = session.import(path)?;
        display_import_summary(&result);
    }
    Ok(session)
}

fn cmd_stats(session: &Session) {
    match session.analyze() {
        Some(analysis) => display_analysis(&analysis, session.history().len()),
        None => display_no_data(),
    }
}

fn cmd_suggest(session: &mut Session) -> Result<()> {
    match session.suggest()? {
        Some(suggestions) => display_suggestions(&suggestions),
        None => display_no_data(),
    }
    Ok(())
}

fn cmd_fetch(config: &AnalyzerConfig) -> Result<()> {
    let source = HttpDrawSource::from_config(&config.source)?;
    match source.fetch_latest() {
        Ok(draw) => display_fetched(&draw),
        Err(e) => {
            log::warn!("{}: {}", source.name(), e);
            println!("Fetch failed. Site layout may have changed. ({e})");
        }
    }
    Ok(())
}
