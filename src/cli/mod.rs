//! Command-line interface module
//!
//! Runs the mode picked from the raw argument words:
//! - default: write today's time entry and open the file
//! - open [DATE]: open an existing journal without writing
//! - help: print usage text
//!
//! `config` holds the `--init-config` handler.

pub mod config;
pub mod help;
pub mod mode;
pub mod open;
pub mod write;

pub use mode::Mode;

use tracing::debug;

use crate::config::Config;
use crate::editor::Editor;
use crate::error::Result;

/// Run a mode to completion.
///
/// `setup` loads the configuration and editor; help never calls it.
pub fn dispatch<F>(mode: Mode, setup: F) -> Result<()>
where
    F: FnOnce() -> Result<(Config, Box<dyn Editor>)>,
{
    debug!(?mode, "Dispatching");

    match mode {
        Mode::Help => {
            help::show();
            Ok(())
        }
        Mode::Open { date } => {
            let (config, editor) = setup()?;
            let today = config.now()?.date();
            open::run(&config, editor.as_ref(), date, today)
        }
        Mode::Write => {
            let (config, editor) = setup()?;
            let now = config.now()?;
            write::run(&config, editor.as_ref(), now).map(|_| ())
        }
    }
}
