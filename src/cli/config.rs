use std::path::Path;
use tracing::info;

use crate::config::{self, Config};
use crate::error::Result;

/// Write a default configuration file at `path`
pub fn init(path: &Path) -> Result<()> {
    if path.exists() {
        println!("Configuration file already exists at: {}", path.display());
        println!("Remove it first if you want to reinitialize.");
        return Ok(());
    }

    let config = Config::default();
    config::save(&config, path)?;
    info!(path = %path.display(), "Created default configuration");

    println!("Configuration file created: {}", path.display());
    println!("\nNext steps:");
    println!(
        "1. Edit {} to set your journal folder, timezone and editor",
        path.display()
    );
    println!(
        "2. Make sure {} exists, then run 'journal-down'",
        config.storage_root.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_default() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("journal-down").join("config.toml");

        init(&path).unwrap();

        assert_eq!(config::load(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_init_keeps_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.toml");
        fs::write(&path, "storage_root = \"/mine\"\n").unwrap();

        init(&path).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "storage_root = \"/mine\"\n"
        );
    }
}
