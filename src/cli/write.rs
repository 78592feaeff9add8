use chrono::NaiveDateTime;
use std::path::PathBuf;
use tracing::info;

use crate::config::Config;
use crate::editor::Editor;
use crate::error::Result;
use crate::models::JournalDate;
use crate::storage;

/// Add a time entry to the journal for `now`, creating it if needed, then
/// open it in the editor
pub fn run(config: &Config, editor: &dyn Editor, now: NaiveDateTime) -> Result<PathBuf> {
    let date = JournalDate::new(now.date());
    let journal_path = storage::prepare_day(&config.storage_root, date, now.time())?;
    let file = journal_path.file().to_path_buf();

    info!(path = %file.display(), "Journal entry written");

    editor.open(&file)?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::testing::RecordingEditor;
    use chrono::NaiveDate;
    use std::fs;
    use tempfile::TempDir;

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 9, 10)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn config(root: &std::path::Path) -> Config {
        Config {
            storage_root: root.to_path_buf(),
            timezone: None,
            editor: None,
        }
    }

    #[test]
    fn test_first_write_of_the_day() {
        let temp = TempDir::new().unwrap();
        let editor = RecordingEditor::default();

        let file = run(&config(temp.path()), &editor, at(21, 4)).unwrap();

        assert_eq!(file, temp.path().join("2017/09/2017-09-10.md"));
        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "# September 10th, 2017 - Sunday\n\n\n## 9:04 pm\n\n"
        );
        assert_eq!(*editor.opened.borrow(), vec![file]);
    }

    #[test]
    fn test_second_write_keeps_header() {
        let temp = TempDir::new().unwrap();
        let editor = RecordingEditor::default();
        let config = config(temp.path());

        run(&config, &editor, at(9, 0)).unwrap();
        let file = run(&config, &editor, at(17, 45)).unwrap();

        assert_eq!(
            fs::read_to_string(&file).unwrap(),
            "# September 10th, 2017 - Sunday\n\n\n## 9:00 am\n\n\n\n## 5:45 pm\n\n"
        );
        assert_eq!(editor.opened.borrow().len(), 2);
    }

    #[test]
    fn test_existing_file_without_header_is_appended() {
        let temp = TempDir::new().unwrap();
        let editor = RecordingEditor::default();
        let dir = temp.path().join("2017/09");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("2017-09-10.md"), "# Custom title\n").unwrap();

        let file = run(&config(temp.path()), &editor, at(10, 10)).unwrap();

        assert_eq!(
            fs::read_to_string(file).unwrap(),
            "# Custom title\n\n\n## 10:10 am\n\n"
        );
    }
}
