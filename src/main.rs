mod cli;
mod config;
mod display;
mod editor;
mod error;
mod models;
mod renderer;
mod storage;

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use crate::cli::Mode;
use crate::config::Config;
use crate::editor::Editor;
use crate::error::{JournalError, Result};

#[derive(Parser)]
#[command(name = "journal-down")]
#[command(version)]
#[command(about = "Keep a dated markdown journal and open today's page", long_about = None)]
struct Cli {
    /// Mode words: nothing to write today's entry, `open [YYYY-MM-DD]`, or `help`
    #[arg(value_name = "WORDS")]
    words: Vec<String>,

    /// Path to config file
    #[arg(short, long, env = "JOURNAL_DOWN_CONFIG")]
    config: Option<PathBuf>,

    /// Journal storage root (overrides config)
    #[arg(long)]
    root: Option<PathBuf>,

    /// IANA timezone such as America/Los_Angeles (overrides config)
    #[arg(long)]
    timezone: Option<String>,

    /// Editor command (overrides config and $VISUAL/$EDITOR)
    #[arg(long)]
    editor: Option<String>,

    /// Write a default config file and exit
    #[arg(long)]
    init_config: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        println!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let explicit = cli.config.is_some();
    let config_path = cli.config.clone().unwrap_or_else(config::default_path);

    if cli.init_config {
        return cli::config::init(&config_path);
    }

    // Date validation runs before the configuration is read
    let mode = Mode::from_args(&cli.words)?;

    cli::dispatch(mode, || {
        let config = resolve_config(&cli, &config_path, explicit)?;
        debug!(?config, path = %config_path.display(), "Configuration loaded");

        let editor: Box<dyn Editor> = Box::new(config.editor());
        Ok((config, editor))
    })
}

/// Load the config file and apply command-line overrides
fn resolve_config(cli: &Cli, path: &std::path::Path, explicit: bool) -> Result<Config> {
    let mut config = if explicit {
        config::load(path)?
    } else {
        config::load_or_default(path)?
    };

    if let Some(root) = &cli.root {
        config.storage_root = root.clone();
    }
    if let Some(timezone) = &cli.timezone {
        config.timezone = Some(timezone.clone());
    }
    if let Some(editor) = &cli.editor {
        config.editor = Some(editor.clone());
    }

    if config.storage_root.as_os_str().is_empty() {
        return Err(JournalError::Config(
            "storage_root must not be empty".to_string(),
        ));
    }

    Ok(config)
}
