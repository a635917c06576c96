use serde::Serialize;

/// A single entry from the membership roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRecord {
    /// Name as written in the roster, whitespace collapsed
    pub full_name: String,

    /// Home city, if the roster carries one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Position among the parsed members
    pub source_index: usize,

    /// 1-based line in the input text
    pub line_number: usize,
}

impl MemberRecord {
    pub fn new(full_name: impl Into<String>, source_index: usize) -> Self {
        Self {
            full_name: full_name.into(),
            city: None,
            source_index,
            line_number: source_index + 1,
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }
}

/// A single line from the race results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRecord {
    /// Name as recorded by the timing company
    pub name_as_recorded: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,

    /// Position among the parsed results
    pub source_index: usize,

    /// 1-based line in the input text
    pub line_number: usize,

    /// Remaining fields of the line (bib, gender, division, time, ...) in input order
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub metadata: Vec<String>,
}

impl ResultRecord {
    pub fn new(name_as_recorded: impl Into<String>, source_index: usize) -> Self {
        Self {
            name_as_recorded: name_as_recorded.into(),
            city: None,
            source_index,
            line_number: source_index + 1,
            metadata: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    #[must_use]
    pub fn at_line(mut self, line_number: usize) -> Self {
        self.line_number = line_number;
        self
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Vec<String>) -> Self {
        self.metadata = metadata;
        self
    }
}

/// Common view over both record kinds, used by the report to list unmatched
/// records and render them
pub trait RosterEntry {
    fn name(&self) -> &str;
    fn city(&self) -> Option<&str>;
    fn source_index(&self) -> usize;
    fn line_number(&self) -> usize;
}

impl RosterEntry for MemberRecord {
    fn name(&self) -> &str {
        &self.full_name
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn source_index(&self) -> usize {
        self.source_index
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}

impl RosterEntry for ResultRecord {
    fn name(&self) -> &str {
        &self.name_as_recorded
    }

    fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    fn source_index(&self) -> usize {
        self.source_index
    }

    fn line_number(&self) -> usize {
        self.line_number
    }
}
