use std::path::PathBuf;

use thiserror::Error;

/// Journal error types
#[derive(Error, Debug)]
pub enum JournalError {
    #[error("Storage location does not exist: {}", .0.display())]
    StorageUnavailable(PathBuf),

    #[error("Cannot write to storage location: {}", .0.display())]
    StoragePermission(PathBuf),

    #[error("Could not create {level} directory '{}': {source}", path.display())]
    DirectoryCreateFailed {
        level: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not create new markdown file '{}': {source}", path.display())]
    FileCreateFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Could not open existing markdown file '{}': {source}", path.display())]
    FileAppendFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid date '{0}'. Please use the format: YYYY-MM-DD like 2017-09-10.")]
    InvalidDate(String),

    #[error("{}", not_found_message(.date.as_deref()))]
    JournalNotFound { date: Option<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown timezone '{0}'. Use an IANA name like America/Los_Angeles.")]
    InvalidTimezone(String),

    #[error("Could not launch editor '{editor}': {source}")]
    EditorLaunch {
        editor: String,
        source: std::io::Error,
    },

    #[error("Editor '{editor}' exited with {status}")]
    EditorFailed {
        editor: String,
        status: std::process::ExitStatus,
    },

    #[error("Journal path is not valid UTF-8: {}", .0.display())]
    UnsupportedPath(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl JournalError {
    /// Process exit code reported for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            JournalError::InvalidDate(_) => 2,
            JournalError::StorageUnavailable(_) | JournalError::StoragePermission(_) => 3,
            JournalError::DirectoryCreateFailed { .. }
            | JournalError::FileCreateFailed { .. }
            | JournalError::FileAppendFailed { .. } => 4,
            JournalError::JournalNotFound { .. } => 5,
            JournalError::Config(_)
            | JournalError::InvalidTimezone(_)
            | JournalError::EditorLaunch { .. }
            | JournalError::EditorFailed { .. }
            | JournalError::UnsupportedPath(_)
            | JournalError::TomlParse(_) => 6,
            JournalError::Io(_) => 1,
        }
    }
}

fn not_found_message(date: Option<&str>) -> String {
    match date {
        Some(date) => format!(
            "Could not find that journal file. There is no journal file for {}.",
            date
        ),
        None => "Could not find today's journal file. Please re-run this without the \"open\" command to create a new journal for today.".to_string(),
    }
}

/// Result type for journal operations
pub type Result<T> = std::result::Result<T, JournalError>;
