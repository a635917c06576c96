use tracing::debug;

use crate::core::record::{MemberRecord, ResultRecord};
use crate::core::roster::{MemberRoster, ParseStats, ResultRoster, Roster};
use crate::names::normalize::has_name_token;

/// First-field values that mark a column header line
const HEADER_FIELDS: &[&str] = &[
    "bib",
    "place",
    "name",
    "first",
    "first name",
    "first_name",
    "full name",
    "full_name",
    "member",
    "runner",
];

const FIRST_NAME_COLUMNS: &[&str] = &["first", "first name", "first_name", "given", "given name"];
const LAST_NAME_COLUMNS: &[&str] = &["last", "last name", "last_name", "surname"];
const FULL_NAME_COLUMNS: &[&str] = &["name", "full name", "full_name", "member", "runner"];
const CITY_COLUMNS: &[&str] = &["city", "town", "hometown"];

/// Result fields that are never a city even though they are alphabetic
const GENDER_FIELDS: &[&str] = &["m", "f", "x", "male", "female", "nonbinary", "non-binary"];

/// Field separator, detected once per roster and applied to every line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Tab,
    Comma,
    /// Runs of whitespace; no column structure
    Whitespace,
}

impl Delimiter {
    /// Tab wins over comma, comma over whitespace
    #[must_use]
    pub fn detect(text: &str) -> Self {
        if text.contains('\t') {
            Self::Tab
        } else if text.contains(',') {
            Self::Comma
        } else {
            Self::Whitespace
        }
    }

    fn split(self, line: &str) -> Vec<&str> {
        match self {
            Self::Tab => line.split('\t').map(str::trim).collect(),
            Self::Comma => line.split(',').map(str::trim).collect(),
            Self::Whitespace => line.split_whitespace().collect(),
        }
    }
}

/// Where the name is found in a delimited line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NameColumns {
    Full(usize),
    Split { first: usize, last: usize },
}

/// Field roles of a roster, shared by the member and result parsers so the
/// same line always yields the same name and city
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Layout {
    /// Columns named by a header line
    Columns {
        name: NameColumns,
        city: Option<usize>,
    },
    /// No usable header; roles are inferred per line
    Inferred,
}

impl Layout {
    fn from_header(fields: &[&str]) -> Self {
        let column = |names: &[&str]| {
            fields
                .iter()
                .position(|f| names.contains(&f.to_lowercase().as_str()))
        };

        let name = match (
            column(FIRST_NAME_COLUMNS),
            column(LAST_NAME_COLUMNS),
            column(FULL_NAME_COLUMNS),
        ) {
            (Some(first), Some(last), _) => NameColumns::Split { first, last },
            (_, _, Some(full)) => NameColumns::Full(full),
            _ => return Self::Inferred,
        };
        Self::Columns {
            name,
            city: column(CITY_COLUMNS),
        }
    }
}

/// Name, city, and leftover fields of one line, before they become a record
#[derive(Debug, Default, PartialEq)]
struct LineFields {
    name: String,
    city: Option<String>,
    metadata: Vec<String>,
}

/// Parse a membership roster.
///
/// Accepted shapes per line: `Name[, City[, ...]]` or `First, Last, City[, ...]`
/// with tab or comma delimiters, or a whitespace-separated name with no city.
/// Lines without a usable name are skipped and counted in
/// [`ParseStats::malformed`]; parsing never fails.
#[must_use]
pub fn parse_members_text(text: &str) -> MemberRoster {
    let roster = parse_lines(text, |fields, index, line_number| {
        let mut record = MemberRecord::new(fields.name, index).at_line(line_number);
        if let Some(city) = fields.city {
            record = record.with_city(city);
        }
        record
    });
    debug!(
        records = roster.stats.records,
        malformed = roster.stats.malformed,
        blank = roster.stats.blank,
        "parsed member roster"
    );
    roster
}

/// Parse race results.
///
/// Lines are read exactly like member lines; fields that are neither the
/// name nor the city (bib, gender, division, time) are kept as metadata in
/// input order.
#[must_use]
pub fn parse_results_text(text: &str) -> ResultRoster {
    let roster = parse_lines(text, |fields, index, line_number| {
        let mut record = ResultRecord::new(fields.name, index)
            .at_line(line_number)
            .with_metadata(fields.metadata);
        if let Some(city) = fields.city {
            record = record.with_city(city);
        }
        record
    });
    debug!(
        records = roster.stats.records,
        malformed = roster.stats.malformed,
        blank = roster.stats.blank,
        "parsed result roster"
    );
    roster
}

fn parse_lines<R>(text: &str, build: impl Fn(LineFields, usize, usize) -> R) -> Roster<R> {
    let delimiter = Delimiter::detect(text);
    let mut layout = Layout::Inferred;
    let mut stats = ParseStats::default();
    let mut records = Vec::new();
    let mut first_data_line = true;

    for (i, raw) in split_lines(text).enumerate() {
        stats.lines += 1;
        let line = raw.trim();
        if line.is_empty() {
            stats.blank += 1;
            continue;
        }
        if is_comment(line) {
            stats.comments += 1;
            continue;
        }

        // Leading tabs mark empty columns, so only spaces are trimmed before splitting
        let fields = delimiter.split(raw.trim_matches(' '));

        // Check if first non-empty/non-comment line is a header
        if first_data_line {
            first_data_line = false;
            let first = fields.first().map(|s| s.to_lowercase()).unwrap_or_default();
            if HEADER_FIELDS.contains(&first.as_str()) {
                stats.header_skipped = true;
                if delimiter != Delimiter::Whitespace {
                    layout = Layout::from_header(&fields);
                }
                continue;
            }
        }

        // Line numbers are 1-based for user friendliness
        let line_number = i + 1;

        if let Some(line_fields) = extract_fields(&fields, delimiter, layout) {
            records.push(build(line_fields, records.len(), line_number));
        } else {
            stats.malformed += 1;
            debug!(line_number, "skipping line with no name token");
        }
    }

    stats.records = records.len();
    Roster::new(records, stats)
}

/// `#` followed by anything but a letter or digit; `#12` is a bib, not a comment
fn is_comment(line: &str) -> bool {
    let mut chars = line.chars();
    chars.next() == Some('#') && !chars.next().is_some_and(char::is_alphanumeric)
}

/// Split on `\n`, `\r\n`, or a lone `\r`
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_terminator('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .flat_map(|l| l.split('\r'))
}

fn extract_fields(fields: &[&str], delimiter: Delimiter, layout: Layout) -> Option<LineFields> {
    let extracted = match (delimiter, layout) {
        (Delimiter::Whitespace, _) => extract_whitespace(fields)?,
        (_, Layout::Columns { name, city }) => extract_columns(fields, name, city),
        (_, Layout::Inferred) => extract_inferred(fields)?,
    };
    has_name_token(&extracted.name).then_some(extracted)
}

fn extract_columns(fields: &[&str], name: NameColumns, city: Option<usize>) -> LineFields {
    let field = |i: usize| fields.get(i).copied().unwrap_or_default();
    let (name, name_columns) = match name {
        NameColumns::Full(i) => (field(i).to_string(), vec![i]),
        NameColumns::Split { first, last } => {
            (format!("{} {}", field(first), field(last)), vec![first, last])
        }
    };

    LineFields {
        name: collapse_whitespace(&name),
        city: city.and_then(|i| non_empty(field(i))),
        metadata: fields
            .iter()
            .enumerate()
            .filter(|(i, f)| !name_columns.contains(i) && Some(*i) != city && !f.is_empty())
            .map(|(_, f)| (*f).to_string())
            .collect(),
    }
}

/// Without a header: the first field holding a name token starts the name.
/// When it and the next field are single words and a city follows, the two
/// are read as first and last name (`Ann, Lee, Kent`); otherwise the field is
/// the whole name (`Ann Lee, Kent, WA`). The next city-like field is the city.
fn extract_inferred(fields: &[&str]) -> Option<LineFields> {
    let name_at = fields.iter().position(|f| has_name_token(f))?;
    let split_name = is_single_word(fields[name_at])
        && fields.get(name_at + 1).is_some_and(|f| is_single_word(f))
        && fields.get(name_at + 2).is_some_and(|f| looks_like_city(f));
    let name_end = if split_name { name_at + 2 } else { name_at + 1 };

    let city_at = fields
        .iter()
        .enumerate()
        .skip(name_end)
        .find(|(_, f)| looks_like_city(f))
        .map(|(i, _)| i);

    Some(LineFields {
        name: collapse_whitespace(&fields[name_at..name_end].join(" ")),
        city: city_at.and_then(|i| non_empty(fields[i])),
        metadata: fields
            .iter()
            .enumerate()
            .filter(|(i, f)| {
                !(name_at..name_end).contains(i) && Some(*i) != city_at && !f.is_empty()
            })
            .map(|(_, f)| (*f).to_string())
            .collect(),
    })
}

/// The name is the run of word tokens starting at the first name token, minus
/// trailing single letters (usually a gender column). No city.
fn extract_whitespace(fields: &[&str]) -> Option<LineFields> {
    let name_at = fields.iter().position(|f| has_name_token(f))?;
    let mut end = fields[name_at..]
        .iter()
        .position(|f| !is_name_word(f))
        .map_or(fields.len(), |p| name_at + p)
        .max(name_at + 1);
    while end > name_at + 1 && fields[end - 1].chars().count() == 1 {
        end -= 1;
    }

    Some(LineFields {
        name: fields[name_at..end].join(" "),
        city: None,
        metadata: fields[..name_at]
            .iter()
            .chain(&fields[end..])
            .map(|f| (*f).to_string())
            .collect(),
    })
}

fn is_name_word(field: &str) -> bool {
    field
        .chars()
        .all(|c| c.is_alphabetic() || matches!(c, '\'' | '.' | '-' | '\u{2019}'))
}

fn is_single_word(field: &str) -> bool {
    !field.contains(char::is_whitespace) && has_name_token(field) && is_name_word(field)
}

fn looks_like_city(field: &str) -> bool {
    has_name_token(field)
        && !field.chars().any(|c| c.is_ascii_digit())
        && !GENDER_FIELDS.contains(&field.to_lowercase().as_str())
}

fn non_empty(field: &str) -> Option<String> {
    let field = collapse_whitespace(field);
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
