use jiff::civil::Date;

use crate::diagnostics::Reporter;
use crate::header::HeaderRecord;

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

/// Every line of the header is a comment starting with this marker.
const MARKER: &str = "//";

/// A header shorter than this cannot contain all of the required fields.
const MINIMUM_LINES: usize = 10;

// The fixed positions of the fields within the header, 1-based. Lines 6 and
// 9 are blank comment separators and carry no field.
const NAME_LINE: usize = 1;
const CLASS_LINE: usize = 2;
const DATE_LINE: usize = 3;
const EMAIL_LINE: usize = 4;
const GITHUB_LINE: usize = 5;
const ASSIGNMENT_LINE: usize = 7;
const PARTNERS_LINE: usize = 8;
const COMMENT_LINE: usize = 10;

/// The contiguous run of comment lines found at the top of a submission,
/// kept in two views. The original lines are consulted only by the final
/// whitespace audit; all other checks work on the trimmed view so that the
/// student hears about substantive problems before cosmetic ones.
struct Block<'i> {
    original: Vec<&'i str>,
    trimmed: Vec<&'i str>,
}

impl<'i> Block<'i> {
    /// Take the maximal prefix of lines which, after removing leading
    /// whitespace, start with the comment marker. Stops at the first line
    /// that does not; an empty result is not itself an error.
    fn extract(lines: &[&'i str]) -> Block<'i> {
        let original: Vec<&'i str> = lines
            .iter()
            .copied()
            .take_while(|line| {
                line.trim_start()
                    .starts_with(MARKER)
            })
            .collect();

        let trimmed = original
            .iter()
            .map(|line| line.trim())
            .collect();

        Block { original, trimmed }
    }

    fn len(&self) -> usize {
        self.trimmed
            .len()
    }

    fn is_empty(&self) -> bool {
        self.trimmed
            .is_empty()
    }

    /// One trimmed line, by 1-based position.
    fn line(&self, number: usize) -> &'i str {
        self.trimmed[number - 1]
    }
}

/// Run the full validation cascade over the given source text. The stages
/// run in a fixed order and the first unmet requirement rejects the header;
/// the reason goes to the reporter, never into the return value.
pub(crate) fn validate<'i>(
    content: &'i str,
    reporter: &mut Reporter,
) -> Option<HeaderRecord<'i>> {
    let lines: Vec<&'i str> = content
        .lines()
        .collect();

    if lines.is_empty() {
        reporter.warn(None, "header missing because source file is empty");
        return None;
    }

    let first = lines[0];
    if first
        .trim()
        .is_empty()
    {
        reporter.warn(
            Some(1),
            "expected a // comment holding a header, but found whitespace instead",
        );
        return None;
    }

    let block = Block::extract(&lines);

    if block.is_empty() {
        reporter.warn(
            Some(1),
            format!(
                "expected a // comment holding a header, but instead found: {}",
                first
            ),
        );
        return None;
    }

    if block.len() < MINIMUM_LINES {
        reporter.warn(
            Some(block.len() + 1),
            format!("header is only {} lines long", block.len()),
        );
        reporter.warn(
            None,
            format!(
                "a header must be at least {} lines long to contain all required information",
                MINIMUM_LINES
            ),
        );
        return None;
    }

    if !check_blank_separator(&block, 6, "GitHub username", reporter) {
        return None;
    }
    if !check_blank_separator(&block, 9, "Partners", reporter) {
        return None;
    }

    // Extract all eight fields eagerly; a failed extraction has already
    // explained itself at its own line.
    let name = extract_field(&block, NAME_LINE, "name", reporter);
    let class = extract_field(&block, CLASS_LINE, "class", reporter);
    let date = extract_field(&block, DATE_LINE, "date", reporter);
    let email = extract_field(&block, EMAIL_LINE, "email", reporter);
    let github = extract_field(&block, GITHUB_LINE, "GitHub", reporter);
    let assignment = extract_field(&block, ASSIGNMENT_LINE, "assignment", reporter);
    let partners = extract_field(&block, PARTNERS_LINE, "Partners:", reporter);
    let comment = extract_field(&block, COMMENT_LINE, "comment", reporter);

    let (name, class, date, email, github, assignment, partners, comment) =
        match (name, class, date, email, github, assignment, partners, comment) {
            (
                Some(name),
                Some(class),
                Some(date),
                Some(email),
                Some(github),
                Some(assignment),
                Some(partners),
                Some(comment),
            ) => (name, class, date, email, github, assignment, partners, comment),
            _ => return None,
        };

    if !name
        .chars()
        .any(char::is_alphabetic)
    {
        reporter.warn(Some(NAME_LINE), "does not resemble a name");
        reporter.warn(None, "a name is expected to have at least one letter");
        return None;
    }

    if !is_section_number(class) {
        reporter.warn(Some(CLASS_LINE), "does not resemble a class section number");
        reporter.warn(None, "an example valid class section number is: 120L-01");
        return None;
    }

    if !is_calendar_date(date) {
        reporter.warn(
            Some(DATE_LINE),
            "does not resemble a date in YYYY-MM-DD format",
        );
        reporter.warn(None, "an example valid date is: 2022-12-31");
        return None;
    }

    if !is_email_address(email) {
        reporter.warn(Some(EMAIL_LINE), "does not resemble an email address");
        reporter.warn(
            None,
            "an example email address is: adalovelace@csu.fullerton.edu",
        );
        return None;
    }
    if !is_campus_email(email) {
        reporter.warn(Some(EMAIL_LINE), "email address is not CSUF-issued");
        reporter.warn(
            None,
            "use your CSUF-issued email ending in @csu.fullerton.edu or @fullerton.edu",
        );
        reporter.warn(
            None,
            "an example email address is: adalovelace@csu.fullerton.edu",
        );
        return None;
    }

    if !is_github_username(github) {
        reporter.warn(
            Some(GITHUB_LINE),
            "does not resemble a GitHub username starting with @",
        );
        reporter.warn(None, "an example GitHub username is: @AdaLovelace");
        return None;
    }

    if !is_assignment_number(assignment) {
        reporter.warn(
            Some(ASSIGNMENT_LINE),
            "does not resemble a Lab assignment number",
        );
        reporter.warn(None, "an example lab assignment number is: Lab 01-02");
        return None;
    }

    if !check_partners(partners, reporter) {
        return None;
    }

    if !comment
        .chars()
        .any(char::is_alphabetic)
    {
        reporter.warn(
            Some(COMMENT_LINE),
            "does not resemble a descriptive comment",
        );
        reporter.warn(
            None,
            "a descriptive comment is expected to have at least one letter",
        );
        return None;
    }

    if !audit_whitespace(&block, reporter) {
        return None;
    }

    Some(HeaderRecord {
        name,
        class,
        email,
        github,
        asgt: assignment,
        partners,
        comment,
    })
}

/// Lines 6 and 9 must be bare // comments separating the field groups.
fn check_blank_separator(
    block: &Block,
    line_number: usize,
    previous_field: &str,
    reporter: &mut Reporter,
) -> bool {
    if block.line(line_number) != MARKER {
        reporter.warn(
            Some(line_number),
            format!(
                "should be a blank // comment after the {}",
                previous_field
            ),
        );
        return false;
    }
    true
}

/// Pull one field's value out of its line: the marker must be followed by a
/// single space and then non-empty text. Each way this can go wrong gets its
/// own diagnostic at the field's line.
fn extract_field<'i>(
    block: &Block<'i>,
    line_number: usize,
    name: &str,
    reporter: &mut Reporter,
) -> Option<&'i str> {
    let line = block.line(line_number);

    if line == MARKER {
        reporter.warn(
            Some(line_number),
            format!("should contain {}, but it is missing", name),
        );
        return None;
    }

    let remainder = &line[MARKER.len()..];
    if !remainder.starts_with(' ') {
        reporter.warn(
            Some(line_number),
            format!("there must be a space between {} and {}", MARKER, name),
        );
        return None;
    }

    let value = remainder.trim();
    if value.is_empty() {
        reporter.warn(Some(line_number), format!("{} field is empty", name));
        return None;
    }

    Some(value)
}

/// The Partners field lists the pair-programming partners by GitHub
/// username. Having none, or having more than two, is worth a warning but
/// not a rejection; a username that fails the syntax rules always rejects.
fn check_partners(partners: &str, reporter: &mut Reporter) -> bool {
    let remainder = match partners.strip_prefix("Partners:") {
        Some(remainder) => remainder,
        None => {
            reporter.warn(Some(PARTNERS_LINE), "does not contain a Partners: list");
            return false;
        }
    };

    let usernames: Vec<&str> = remainder
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if usernames.is_empty() {
        reporter.warn(
            Some(PARTNERS_LINE),
            "partners list is empty; expected you to have a pair-programming partner",
        );
        // not a rejection; life happens
    }
    if usernames.len() > 2 {
        reporter.warn(
            Some(PARTNERS_LINE),
            format!(
                "expected only one or two partners, but you have {}",
                usernames.len()
            ),
        );
        // likewise tolerated
    }

    for username in usernames {
        if !is_github_username(username) {
            reporter.warn(
                Some(PARTNERS_LINE),
                format!(
                    "partner \"{}\" does not resemble a GitHub username starting with @",
                    username
                ),
            );
            reporter.warn(None, "an example GitHub username is: @AdaLovelace");
            return false;
        }
    }

    true
}

/// The strict whitespace check comes last, over the original unstripped
/// lines, so that feedback about the content of the header always precedes
/// feedback about its formatting.
fn audit_whitespace(block: &Block, reporter: &mut Reporter) -> bool {
    for (index, line) in block
        .original
        .iter()
        .enumerate()
    {
        if *line != line.trim_start() {
            reporter.warn(
                Some(index + 1),
                "unexpected leading whitespace; delete whitespace before //",
            );
            return false;
        }
        if *line != line.trim_end() {
            reporter.warn(
                Some(index + 1),
                "unexpected trailing whitespace; delete whitespace at the end of the line",
            );
            return false;
        }
    }
    true
}

fn is_section_number(content: &str) -> bool {
    let re = regex!(r"^(?i)CPSC\s\d{3}[A-Z]?-\d{1,2}$");
    re.is_match(content)
}

/// A date is acceptable when it has the strict YYYY-MM-DD shape and names a
/// real calendar day; 2022-13-40 has the right shape but no month 13.
fn is_calendar_date(content: &str) -> bool {
    let re = regex!(r"^\d{4}-\d{2}-\d{2}$");
    if !re.is_match(content) {
        return false;
    }

    content
        .parse::<Date>()
        .is_ok()
}

// any domain whatsoever
fn is_email_address(content: &str) -> bool {
    let re = regex!(r"^\w+[.\-_0-9\w]*@.+$");
    re.is_match(content)
}

// restricted to the campus domains
fn is_campus_email(content: &str) -> bool {
    let re = regex!(r"^(?i)\w+[.\-_0-9\w]*@(?:csu\.)?fullerton\.edu$");
    re.is_match(content)
}

/// GitHub usernames are 1 to 39 characters after the @, alphanumeric, with
/// hyphens permitted singly between alphanumerics; never leading, trailing,
/// or doubled. The same rule applies to each entry in the Partners list.
fn is_github_username(content: &str) -> bool {
    let handle = match content.strip_prefix('@') {
        Some(handle) => handle,
        None => return false,
    };

    if handle.is_empty() || handle.len() > 39 {
        return false;
    }

    let re = regex!(r"^[a-zA-Z0-9]+(?:-[a-zA-Z0-9]+)*$");
    re.is_match(handle)
}

fn is_assignment_number(content: &str) -> bool {
    let re = regex!(r"^(?i)Lab \d\d-\d\d$");
    re.is_match(content)
}
