use std::path::{Path, PathBuf};

use super::date::JournalDate;

/// Location of one day's journal under the storage root:
/// `<root>/<YYYY>/<MM>/<YYYY>-<MM>-<DD>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalPath {
    year_dir: PathBuf,
    month_dir: PathBuf,
    file: PathBuf,
}

impl JournalPath {
    /// Resolve the path for a date. The root is used as given.
    pub fn resolve(root: &Path, date: JournalDate) -> Self {
        let year = format!("{:04}", date.year());
        let month = format!("{:02}", date.month());
        let filename = format!("{}-{}-{:02}.md", year, month, date.day());

        let year_dir = root.join(&year);
        let month_dir = year_dir.join(&month);
        let file = month_dir.join(filename);

        Self {
            year_dir,
            month_dir,
            file,
        }
    }

    pub fn year_dir(&self) -> &Path {
        &self.year_dir
    }

    pub fn month_dir(&self) -> &Path {
        &self.month_dir
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}
