//! Output generation for accepted headers
//!
//! Two presentations of a validated record: a human-readable summary for the
//! terminal, and JSON for whatever records the grading outcome downstream.

use tinytemplate::{format_unescaped, TinyTemplate};

use crate::header::HeaderRecord;

static TEMPLATE: &'static str = r#"Header accepted.

    Name        {name}
    Class       {class}
    Email       {email}
    GitHub      {github}
    Assignment  {asgt}
    Partners    {partners}

{comment}
"#;

pub fn render_summary(record: &HeaderRecord) -> String {
    let mut tt = TinyTemplate::new();
    tt.set_default_formatter(&format_unescaped);
    tt.add_template("summary", TEMPLATE)
        .unwrap();

    tt.render("summary", record)
        .unwrap()
}

pub fn render_json(record: &HeaderRecord) -> String {
    serde_json::to_string_pretty(record).unwrap()
}

#[cfg(test)]
mod check {
    use super::*;

    fn record() -> HeaderRecord<'static> {
        HeaderRecord {
            name: "Ada Lovelace",
            class: "CPSC 120-01",
            email: "alovelace@fullerton.edu",
            github: "@AdaLovelace",
            asgt: "Lab 00-00",
            partners: "Partners: @Babbage",
            comment: "Computes things.",
        }
    }

    #[test]
    fn summary_lists_every_field() {
        let summary = render_summary(&record());

        assert!(summary.contains("Ada Lovelace"));
        assert!(summary.contains("CPSC 120-01"));
        assert!(summary.contains("alovelace@fullerton.edu"));
        assert!(summary.contains("@AdaLovelace"));
        assert!(summary.contains("Lab 00-00"));
        assert!(summary.contains("Partners: @Babbage"));
        assert!(summary.contains("Computes things."));
    }

    #[test]
    fn json_round_trips_the_keys() {
        let json = render_json(&record());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["class"], "CPSC 120-01");
        assert_eq!(value["partners"], "Partners: @Babbage");
        assert_eq!(
            value
                .as_object()
                .unwrap()
                .len(),
            7
        );
    }
}
