//! Navitoir Control - CLI for the Navitoir command engine
//!
//! Runs an interactive session or single utterances against the engine,
//! persisting accessibility and theme settings between runs.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use navitoir_shared::{ControlState, Locale, Navitoir, SettingsStore};
use navitoirctl::{render, repl, ContentRegistry, JsonFileStore, NavitoirConfig, Session};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "navitoirctl")]
#[command(about = "Navitoir - site navigation and accessibility commands", long_about = None)]
#[command(version)]
struct Cli {
    /// Response language (en, de)
    #[arg(long, global = true)]
    locale: Option<String>,

    /// Config file (default: ~/.config/navitoir/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Debug logging on stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Repl,

    /// Process one utterance
    Say {
        /// Utterance words
        #[arg(required = true)]
        text: Vec<String>,

        /// Release deferred steps without waiting for their delays
        #[arg(long)]
        no_delay: bool,
    },

    /// Show saved accessibility and theme settings
    State,

    /// Delete saved settings
    Reset,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NAVITOIR_LOG").unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = NavitoirConfig::load(cli.config.as_deref())?;
    config.apply_env()?;
    let locale: Locale = match &cli.locale {
        Some(raw) => raw.parse().context("Invalid --locale")?,
        None => config.locale,
    };
    debug!("Locale {}, timing {:?}", locale, config.timing);

    let store = JsonFileStore::new(config.settings_file()?);

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Repl => {
            let content = ContentRegistry::from_config(&config)?;
            let mut session = start_session(&config, store, locale)?;
            repl::run(&mut session, &content)
        }
        Commands::Say { text, no_delay } => {
            let content = ContentRegistry::from_config(&config)?;
            let mut session = start_session(&config, store, locale)?;
            repl::print_turn(&mut session, &content, &text.join(" "), !no_delay)
        }
        Commands::State => {
            match store
                .load()
                .with_context(|| format!("Failed to read {}", store.path().display()))?
            {
                Some(settings) => {
                    for line in render::settings_lines(&settings, locale) {
                        println!("{}", line);
                    }
                }
                None => println!(
                    "{}",
                    locale.pick("No saved settings.", "Keine gespeicherten Einstellungen.")
                ),
            }
            Ok(())
        }
        Commands::Reset => {
            let removed = store
                .clear()
                .with_context(|| format!("Failed to remove {}", store.path().display()))?;
            if removed {
                println!("Removed {}", store.path().display());
            } else {
                println!("Nothing to reset.");
            }
            Ok(())
        }
    }
}

fn start_session(
    config: &NavitoirConfig,
    store: JsonFileStore,
    locale: Locale,
) -> Result<Session<JsonFileStore>> {
    let engine = Navitoir::new(config.registry()?, ControlState::default(), config.timing);
    Session::start(engine, store, locale)
}
