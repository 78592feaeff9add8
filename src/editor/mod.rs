//! Editor launcher
//!
//! Opens a journal file in an editor. GUI editors and the platform opener run
//! detached; terminal editors taken from `$VISUAL`/`$EDITOR` share this
//! process's terminal and are waited on.

use std::path::Path;
use std::process::{Command, Stdio};
use tracing::info;

use crate::error::{JournalError, Result};

/// Characters a POSIX shell would otherwise interpret in a file path
const SHELL_SPECIAL: &[char] = &[
    ' ', '\t', '~', '\'', '"', '\\', '$', '&', ';', '(', ')', '|', '<', '>', '*', '?', '!', '`',
    '{', '}', '[', ']', '#',
];

/// Backslash-escape shell metacharacters in a path.
///
/// A newline cannot be backslash-escaped (that is a line continuation), so it
/// is emitted single-quoted instead. Paths that are not valid UTF-8 are
/// rejected rather than lossily converted.
pub fn escape_path(path: &Path) -> Result<String> {
    let raw = path
        .to_str()
        .ok_or_else(|| JournalError::UnsupportedPath(path.to_path_buf()))?;
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '\n' => escaped.push_str("'\n'"),
            c if SHELL_SPECIAL.contains(&c) => {
                escaped.push('\\');
                escaped.push(c);
            }
            c => escaped.push(c),
        }
    }

    Ok(escaped)
}

/// Something that can show a journal file to the user
pub trait Editor {
    fn open(&self, path: &Path) -> Result<()>;
}

/// How the editor process relates to this one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Launch {
    /// Own window, streams detached, not waited on
    Detached,
    /// Inherits the terminal and is waited on
    Foreground,
}

/// Runs `<editor> <escaped path>` through `sh -c`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellEditor {
    command: String,
    launch: Launch,
}

impl ShellEditor {
    pub fn detached(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            launch: Launch::Detached,
        }
    }

    pub fn foreground(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            launch: Launch::Foreground,
        }
    }

    /// The shell command line used to open a path
    pub fn command_line(&self, path: &Path) -> Result<String> {
        Ok(format!("{} {}", self.command, escape_path(path)?))
    }
}

impl Editor for ShellEditor {
    fn open(&self, path: &Path) -> Result<()> {
        let command_line = self.command_line(path)?;
        let mut command = Command::new("sh");
        command.arg("-c").arg(&command_line);

        let launch_failed = |source| JournalError::EditorLaunch {
            editor: self.command.clone(),
            source,
        };

        match self.launch {
            Launch::Detached => {
                // The child is not waited on; its exit status is never observed.
                command
                    .stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null())
                    .spawn()
                    .map_err(launch_failed)?;
                info!(command = %command_line, "Launched editor");
            }
            Launch::Foreground => {
                let status = command.status().map_err(launch_failed)?;
                if !status.success() {
                    return Err(JournalError::EditorFailed {
                        editor: self.command.clone(),
                        status,
                    });
                }
                info!(command = %command_line, "Editor closed");
            }
        }

        Ok(())
    }
}

/// Pick the editor: the configured command runs detached, `$VISUAL` then
/// `$EDITOR` run in the foreground, otherwise the platform opener.
pub fn resolve(configured: Option<&str>) -> ShellEditor {
    let non_empty = |v: &String| !v.trim().is_empty();

    if let Some(editor) = configured.map(str::to_string).filter(non_empty) {
        return ShellEditor::detached(editor);
    }

    std::env::var("VISUAL")
        .ok()
        .filter(non_empty)
        .or_else(|| std::env::var("EDITOR").ok().filter(non_empty))
        .map(ShellEditor::foreground)
        .unwrap_or_else(|| ShellEditor::detached(default_opener()))
}

fn default_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}
