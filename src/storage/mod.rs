//! Journal file storage
//!
//! Creates the year/month directories and the day's markdown file under the
//! storage root, then appends time entries to it. Files are never rewritten
//! once created.

use chrono::NaiveTime;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{JournalError, Result};
use crate::models::{JournalDate, JournalPath};
use crate::renderer::{render_header, render_time_entry};

/// Check that the storage root exists and this process can write to it.
pub fn ensure_storage_writable(root: &Path) -> Result<()> {
    match fs::metadata(root) {
        Ok(metadata) if metadata.is_dir() => {}
        _ => return Err(JournalError::StorageUnavailable(root.to_path_buf())),
    }

    if !is_writable(root) {
        return Err(JournalError::StoragePermission(root.to_path_buf()));
    }

    Ok(())
}

/// Ask the kernel whether the calling user may write to `path`
#[cfg(unix)]
fn is_writable(path: &Path) -> bool {
    rustix::fs::access(path, rustix::fs::Access::WRITE_OK).is_ok()
}

#[cfg(not(unix))]
fn is_writable(path: &Path) -> bool {
    fs::metadata(path).is_ok_and(|m| !m.permissions().readonly())
}

/// Create a single directory level if it is missing.
pub fn ensure_directory(path: &Path, level: &'static str) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder
        .create(path)
        .map_err(|source| JournalError::DirectoryCreateFailed {
            level,
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), level, "Created directory");
    Ok(())
}

/// Create the journal file with its date header if it does not exist yet.
///
/// Returns `true` when the file was created by this call.
pub fn ensure_file_with_header(path: &Path, date: JournalDate) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        // Another invocation created it between the check and the open
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(source) => {
            return Err(JournalError::FileCreateFailed {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    file.write_all(render_header(date).as_bytes())
        .map_err(|source| JournalError::FileCreateFailed {
            path: path.to_path_buf(),
            source,
        })?;

    info!(path = %path.display(), "Created journal file");
    Ok(true)
}

/// Append a time subheading to an existing journal file.
pub fn append_time_entry(path: &Path, time: NaiveTime) -> Result<()> {
    let append_failed = |source| JournalError::FileAppendFailed {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(append_failed)?;

    file.write_all(render_time_entry(time).as_bytes())
        .map_err(append_failed)?;

    debug!(path = %path.display(), time = %time, "Appended time entry");
    Ok(())
}

/// Run the full write sequence for one day: storage check, year directory,
/// month directory, header, then time entry. The first failure stops it.
pub fn prepare_day(
    root: &Path,
    date: JournalDate,
    time: NaiveTime,
) -> Result<JournalPath> {
    ensure_storage_writable(root)?;

    let journal_path = JournalPath::resolve(root, date);
    ensure_directory(journal_path.year_dir(), "year")?;
    ensure_directory(journal_path.month_dir(), "month")?;
    ensure_file_with_header(journal_path.file(), date)?;
    append_time_entry(journal_path.file(), time)?;

    Ok(journal_path)
}
