use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rand::rngs::StdRng;

use crate::display::{display_draws, display_fetched, display_import_summary};
use crate::import::{ImportResult, export_csv, import_csv};
use fireball_core::analysis::{Analysis, DrawHistoryAnalyzer, seeded_rng};
use fireball_core::error::FetchError;
use fireball_core::history::DrawHistory;
use fireball_core::models::{DrawRecord, SuggestionSet};
use fireball_core::source::{DrawSource, fetch_into};

/// One user session: the in-memory history plus what operates on it.
/// Everything is dropped with the session.
pub struct Session {
    history: DrawHistory,
    analyzer: DrawHistoryAnalyzer,
    source: Box<dyn DrawSource>,
    rng: StdRng,
}

impl Session {
    pub fn new(analyzer: DrawHistoryAnalyzer, source: Box<dyn DrawSource>) -> Self {
        let rng = seeded_rng(analyzer.config().seed);
        Self {
            history: DrawHistory::new(),
            analyzer,
            source,
            rng,
        }
    }

    pub fn history(&self) -> &DrawHistory {
        &self.history
    }

    pub fn analyzer(&self) -> &DrawHistoryAnalyzer {
        &self.analyzer
    }

    pub fn add(&mut self, date: &str, main: &str, fireball: &str) -> Result<DrawRecord> {
        let draw = DrawRecord::new(date, main, fireball)?;
        let history = std::mem::take(&mut self.history);
        self.history = self.analyzer.record_draw(history, draw.clone());
        log::info!("added draw {} on '{}'", draw, draw.date());
        Ok(draw)
    }

    pub fn import(&mut self, path: &Path) -> Result<ImportResult> {
        import_csv(&mut self.history, path)
    }

    pub fn export(&self, path: &Path) -> Result<usize> {
        export_csv(&self.history, path)
    }

    pub fn fetch(&mut self) -> Result<DrawRecord, FetchError> {
        fetch_into(self.source.as_ref(), &mut self.history)
    }

    pub fn analyze(&self) -> Option<Analysis> {
        self.analyzer.analyze(&self.history)
    }

    pub fn suggest(&mut self) -> Result<Option<SuggestionSet>> {
        Ok(self.analyzer.suggest(&self.history, &mut self.rng)?)
    }
}

#[derive(Debug, PartialEq)]
enum SessionCommand {
    Add,
    Import,
    Export,
    Fetch,
    History,
    Stats,
    Suggest,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<SessionCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "add" | "a" => Some(SessionCommand::Add),
        "2" | "import" | "load" => Some(SessionCommand::Import),
        "3" | "export" | "save" => Some(SessionCommand::Export),
        "4" | "fetch" | "f" => Some(SessionCommand::Fetch),
        "5" | "history" | "hist" | "h" => Some(SessionCommand::History),
        "6" | "stats" | "s" => Some(SessionCommand::Stats),
        "7" | "suggest" | "sug" => Some(SessionCommand::Suggest),
        "?" | "help" | "menu" => Some(SessionCommand::Help),
        "8" | "quit" | "q" | "exit" => Some(SessionCommand::Quit),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Pick 3 Fireball tracker ──");
    println!("  1. add      Add a draw");
    println!("  2. import   Import draws from CSV (date, main, fireball)");
    println!("  3. export   Export history to CSV");
    println!("  4. fetch    Fetch the latest draw");
    println!("  5. history  Show recent draws");
    println!("  6. stats    Digit frequencies");
    println!("  7. suggest  Hot / cold combinations");
    println!("  8. quit     Quit");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;
    if read == 0 {
        anyhow::bail!("end of input");
    }
    Ok(input.trim().to_string())
}

fn prompt_with_default(msg: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}] : ", msg, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

fn cmd_add_interactive(session: &mut Session) -> Result<()> {
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();
    let date = prompt_with_default("Date", &today)?;
    let main = prompt("Main 3-digit (e.g. 278) : ")?;
    let fireball = prompt("Fireball (0-9) : ")?;

    match session.add(&date, &main, &fireball) {
        Ok(draw) => println!("Draw added: {}", draw),
        Err(e) => println!("Invalid input, try again ({e})."),
    }
    Ok(())
}

fn cmd_import_interactive(session: &mut Session) -> Result<()> {
    let path = PathBuf::from(prompt("CSV file : ")?);
    let result = session.import(&path)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_export_interactive(session: &Session) -> Result<()> {
    let path = PathBuf::from(prompt_with_default("Output file", "fireball_history.csv")?);
    let n = session.export(&path)?;
    println!("{} draws written to {}", n, path.display());
    Ok(())
}

fn cmd_fetch_interactive(session: &mut Session) {
    match session.fetch() {
        Ok(draw) => display_fetched(&draw),
        Err(e) => println!("Fetch failed. Site layout may have changed. ({e})"),
    }
}

fn cmd_history_interactive(session: &Session) -> Result<()> {
    let default = session.analyzer().config().history_rows.to_string();
    let n: usize = prompt_with_default("Number of draws", &default)?
        .parse()
        .context("Invalid number")?;
    display_draws(session.history().last_n(n));
    Ok(())
}

pub fn run_session(session: &mut Session) -> Result<()> {
    println!("Illinois Pick 3 Fireball tracker. History lives only as long as this session.");
    display_menu();

    loop {
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.is_empty() {
            continue;
        }

        let outcome = match parse_command(&input) {
            Some(SessionCommand::Quit) => {
                println!("Bye!");
                break;
            }
            Some(SessionCommand::Help) => {
                display_menu();
                Ok(())
            }
            Some(SessionCommand::Add) => cmd_add_interactive(session),
            Some(SessionCommand::Import) => cmd_import_interactive(session),
            Some(SessionCommand::Export) => cmd_export_interactive(session),
            Some(SessionCommand::Fetch) => {
                cmd_fetch_interactive(session);
                Ok(())
            }
            Some(SessionCommand::History) => cmd_history_interactive(session),
            Some(SessionCommand::Stats) => {
                super::cmd_stats(session);
                Ok(())
            }
            Some(SessionCommand::Suggest) => super::cmd_suggest(session),
            None => {
                println!("Unknown command: '{}'. Type a number (1-8) or a command name, '?' for help.", input);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("Error: {e:#}");
        }
    }

    Ok(())
}
