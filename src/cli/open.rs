use chrono::NaiveDate;
use tracing::info;

use crate::config::Config;
use crate::editor::Editor;
use crate::error::{JournalError, Result};
use crate::models::{JournalDate, JournalPath};

/// Open an existing journal without writing to it
pub fn run(
    config: &Config,
    editor: &dyn Editor,
    date: Option<JournalDate>,
    today: NaiveDate,
) -> Result<()> {
    let target = date.unwrap_or_else(|| JournalDate::new(today));
    let journal_path = JournalPath::resolve(&config.storage_root, target);
    let file = journal_path.file();

    if !file.is_file() {
        return Err(JournalError::JournalNotFound {
            date: date.map(|d| d.to_string()),
        });
    }

    info!(path = %file.display(), "Opening journal");
    editor.open(file)
}
