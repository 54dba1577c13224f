//! Validation pipeline for submission headers

use std::path::Path;

use tracing::debug;

use crate::diagnostics::Reporter;
use crate::header::{HeaderRecord, LoadError};

mod validator;

/// Read a submission and return an owned String. We pass that ownership back
/// to the caller so that the HeaderRecord produced by parse_header() below
/// can borrow from it for as long as needed.
pub fn load(filename: &Path) -> Result<String, LoadError> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => {
                    Err(LoadError::NotFound(filename.to_path_buf()))
                }
                kind => Err(LoadError::Unreadable(filename.to_path_buf(), kind)),
            }
        }
    }
}

/// Validate the header at the top of the given source text. On success the
/// result holds the seven validated fields; on any rejection the result is
/// None and the reason has already gone out through the reporter.
pub fn parse_header<'i>(
    content: &'i str,
    reporter: &mut Reporter,
) -> Option<HeaderRecord<'i>> {
    let result = validator::validate(content, reporter);

    match &result {
        Some(record) => {
            debug!("accepted header from {}", record.github);
        }
        None => {
            debug!("header rejected");
        }
    }

    result
}

/// What a keyword lookup can produce: the whole record when no keyword was
/// given, or a single field's value.
#[derive(Debug, Eq, PartialEq)]
pub enum Lookup<'i> {
    Record(HeaderRecord<'i>),
    Field(&'i str),
}

/// Thin accessor over the validation outcome. Returns None when validation
/// fails or the keyword is not one of the record's fields; no validation
/// logic of its own.
pub fn lookup<'i>(content: &'i str, keyword: Option<&str>) -> Option<Lookup<'i>> {
    let mut reporter = Reporter::verbose();
    let record = parse_header(content, &mut reporter)?;

    match keyword {
        None => Some(Lookup::Record(record)),
        Some(keyword) => record
            .get(keyword)
            .map(Lookup::Field),
    }
}
