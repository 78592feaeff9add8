//! Colour support detection

use std::io::IsTerminal;

/// Environment switches that decide whether styled output is wanted
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ColorEnv {
    pub no_color: bool,
    pub clicolor_force: Option<String>,
    pub clicolor: Option<String>,
}

impl ColorEnv {
    pub fn from_process() -> Self {
        Self {
            no_color: std::env::var_os("NO_COLOR").is_some(),
            clicolor_force: std::env::var("CLICOLOR_FORCE").ok(),
            clicolor: std::env::var("CLICOLOR").ok(),
        }
    }

    /// `NO_COLOR` beats `CLICOLOR_FORCE`, which beats `CLICOLOR=0`, which
    /// beats the TTY check.
    pub fn wants_color(&self, is_tty: bool) -> bool {
        if self.no_color {
            return false;
        }
        if self.clicolor_force.as_deref().is_some_and(|v| v != "0") {
            return true;
        }
        if self.clicolor.as_deref() == Some("0") {
            return false;
        }
        is_tty
    }
}

/// Whether stdout should receive styled markdown
pub fn should_use_colors() -> bool {
    ColorEnv::from_process().wants_color(std::io::stdout().is_terminal())
}
