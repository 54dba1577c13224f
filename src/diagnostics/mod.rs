//! Diagnostic reporting for header validation
//!
//! The validator never prints anything itself; it hands each complaint to a
//! Reporter. In verbose mode the complaint goes out through the logging
//! subscriber as a warning and is recorded for later inspection. In silent
//! mode nothing is emitted or recorded, and only the accept/reject outcome
//! of the validation remains observable.

use std::fmt;

use tracing::warn;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode {
    Verbose,
    Silent,
}

/// One human-readable complaint about a header. Most diagnostics point at a
/// specific line; follow-on hints (examples of valid values) carry no line
/// number.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Diagnostic {
    pub line: Option<usize>,
    pub text: String,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(number) => write!(f, "line {}: {}", number, self.text),
            None => write!(f, "{}", self.text),
        }
    }
}

#[derive(Debug)]
pub struct Reporter {
    mode: Mode,
    emitted: Vec<Diagnostic>,
}

impl Reporter {
    pub fn new(mode: Mode) -> Reporter {
        Reporter {
            mode,
            emitted: Vec::new(),
        }
    }

    pub fn verbose() -> Reporter {
        Reporter::new(Mode::Verbose)
    }

    pub fn silent() -> Reporter {
        Reporter::new(Mode::Silent)
    }

    /// Emit one diagnostic, in check order. Line numbers are 1-based.
    pub fn warn<S>(&mut self, line: Option<usize>, text: S)
    where
        S: Into<String>,
    {
        if self.mode == Mode::Silent {
            return;
        }

        let diagnostic = Diagnostic {
            line,
            text: text.into(),
        };

        warn!("{}", diagnostic);

        self.emitted
            .push(diagnostic);
    }

    /// The diagnostics emitted so far, oldest first.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.emitted
    }
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn formatting() {
        let diagnostic = Diagnostic {
            line: Some(6),
            text: "should be a blank // comment".to_string(),
        };
        assert_eq!(
            diagnostic.to_string(),
            "line 6: should be a blank // comment"
        );

        let diagnostic = Diagnostic {
            line: None,
            text: "an example valid date is: 2022-12-31".to_string(),
        };
        assert_eq!(diagnostic.to_string(), "an example valid date is: 2022-12-31");
    }

    #[test]
    fn verbose_records_in_order() {
        let mut reporter = Reporter::verbose();
        reporter.warn(Some(1), "first");
        reporter.warn(None, "second");

        let emitted = reporter.diagnostics();
        assert_eq!(emitted.len(), 2);
        assert_eq!(emitted[0].line, Some(1));
        assert_eq!(emitted[0].text, "first");
        assert_eq!(emitted[1].line, None);
    }

    #[test]
    fn silent_records_nothing() {
        let mut reporter = Reporter::silent();
        reporter.warn(Some(1), "unwanted");
        assert!(reporter
            .diagnostics()
            .is_empty());
    }
}
