//! Types representing a validated submission header

use serde::Serialize;

/// The metadata extracted from an accepted header. Every value is the
/// whitespace-trimmed text of its field line, and every value is non-empty.
/// The date line is checked during validation but not retained here; the
/// grading pipeline keys its records off the other seven fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct HeaderRecord<'i> {
    pub name: &'i str,
    pub class: &'i str,
    pub email: &'i str,
    pub github: &'i str,
    pub asgt: &'i str,
    pub partners: &'i str,
    pub comment: &'i str,
}

impl<'i> HeaderRecord<'i> {
    /// Look a field up by its keyword. Only the seven keys actually present
    /// in the record are recognized; anything else returns None.
    pub fn get(&self, keyword: &str) -> Option<&'i str> {
        match keyword {
            "name" => Some(self.name),
            "class" => Some(self.class),
            "email" => Some(self.email),
            "github" => Some(self.github),
            "asgt" => Some(self.asgt),
            "partners" => Some(self.partners),
            "comment" => Some(self.comment),
            _ => None,
        }
    }
}
