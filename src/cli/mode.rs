use crate::error::Result;
use crate::models::JournalDate;

/// What one invocation does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Print usage text only
    Help,
    /// Open an existing journal, today's unless a date was given
    Open { date: Option<JournalDate> },
    /// Write a time entry into today's journal, then open it
    Write,
}

impl Mode {
    /// Pick the mode from raw argument words.
    ///
    /// `help` anywhere wins over `open`. In open mode every word shaped like
    /// a date is validated and the last one is used.
    pub fn from_args(args: &[String]) -> Result<Self> {
        if args.iter().any(|a| a == "help") {
            return Ok(Mode::Help);
        }

        if !args.iter().any(|a| a == "open") {
            return Ok(Mode::Write);
        }

        let mut date = None;
        for arg in args.iter().filter(|a| JournalDate::looks_like_literal(a)) {
            date = Some(JournalDate::parse_literal(arg)?);
        }

        Ok(Mode::Open { date })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JournalError;

    fn words(args: &[&str]) -> Vec<String> {
        args.iter().map(|a| a.to_string()).collect()
    }

    #[test]
    fn test_no_args_is_write() {
        assert_eq!(Mode::from_args(&[]).unwrap(), Mode::Write);
    }

    #[test]
    fn test_unknown_words_are_write() {
        assert_eq!(
            Mode::from_args(&words(&["2017-09-10", "today"])).unwrap(),
            Mode::Write
        );
    }

    #[test]
    fn test_help_anywhere() {
        assert_eq!(Mode::from_args(&words(&["help"])).unwrap(), Mode::Help);
        assert_eq!(
            Mode::from_args(&words(&["open", "help"])).unwrap(),
            Mode::Help
        );
        assert_eq!(
            Mode::from_args(&words(&["open", "2017-02-30", "help"])).unwrap(),
            Mode::Help
        );
    }

    #[test]
    fn test_help_is_case_sensitive() {
        assert_eq!(Mode::from_args(&words(&["HELP"])).unwrap(), Mode::Write);
        assert_eq!(
            Mode::from_args(&words(&["Open"])).unwrap(),
            Mode::Write
        );
    }

    #[test]
    fn test_open_today() {
        assert_eq!(
            Mode::from_args(&words(&["open"])).unwrap(),
            Mode::Open { date: None }
        );
    }

    #[test]
    fn test_open_with_date_in_any_position() {
        let expected = Mode::Open {
            date: JournalDate::from_ymd(2017, 9, 10),
        };
        assert_eq!(
            Mode::from_args(&words(&["open", "2017-09-10"])).unwrap(),
            expected
        );
        assert_eq!(
            Mode::from_args(&words(&["2017-09-10", "open"])).unwrap(),
            expected
        );
    }

    #[test]
    fn test_open_last_date_wins() {
        assert_eq!(
            Mode::from_args(&words(&["open", "2017-09-10", "2017-9-11"])).unwrap(),
            Mode::Open {
                date: JournalDate::from_ymd(2017, 9, 11)
            }
        );
    }

    #[test]
    fn test_open_invalid_date() {
        let err = Mode::from_args(&words(&["open", "2017-02-30"])).unwrap_err();
        assert!(matches!(err, JournalError::InvalidDate(_)));
    }

    #[test]
    fn test_open_ignores_non_date_words() {
        assert_eq!(
            Mode::from_args(&words(&["open", "2017/09/10", "yesterday"])).unwrap(),
            Mode::Open { date: None }
        );
    }
}
