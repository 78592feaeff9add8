use chrono::{Local, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::editor::{self, ShellEditor};
use crate::error::{JournalError, Result};

/// Journal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding the year/month/day journal tree
    pub storage_root: PathBuf,

    /// IANA timezone for dates and times (system local time when unset)
    pub timezone: Option<String>,

    /// Editor command used to open journal files
    pub editor: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        let storage_root = dirs::home_dir()
            .map(|home| home.join("Journal"))
            .unwrap_or_else(|| PathBuf::from("./Journal"));

        Self {
            storage_root,
            timezone: None,
            editor: None,
        }
    }
}

impl Config {
    /// Parse the configured timezone, if any
    pub fn tz(&self) -> Result<Option<Tz>> {
        self.timezone
            .as_deref()
            .map(|name| {
                name.parse::<Tz>()
                    .map_err(|_| JournalError::InvalidTimezone(name.to_string()))
            })
            .transpose()
    }

    /// Current wall-clock time in the configured timezone
    pub fn now(&self) -> Result<NaiveDateTime> {
        Ok(match self.tz()? {
            Some(tz) => Utc::now().with_timezone(&tz).naive_local(),
            None => Local::now().naive_local(),
        })
    }

    /// Editor that opens journal files for this configuration
    pub fn editor(&self) -> ShellEditor {
        editor::resolve(self.editor.as_deref())
    }
}
