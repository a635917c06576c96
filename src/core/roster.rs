use serde::Serialize;

use crate::core::record::{MemberRecord, ResultRecord};

/// Line accounting for one parsed roster
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParseStats {
    /// Total lines seen, including blank ones
    pub lines: usize,

    /// Lines that produced a record
    pub records: usize,

    pub blank: usize,

    pub comments: usize,

    /// Column header line recognised and skipped
    pub header_skipped: bool,

    /// Non-blank lines with no extractable name token
    pub malformed: usize,
}

/// An ordered list of parsed records together with how the text was consumed
#[derive(Debug, Clone, Serialize)]
pub struct Roster<R> {
    pub records: Vec<R>,
    pub stats: ParseStats,
}

pub type MemberRoster = Roster<MemberRecord>;
pub type ResultRoster = Roster<ResultRecord>;

impl<R> Roster<R> {
    #[must_use]
    pub fn new(records: Vec<R>, stats: ParseStats) -> Self {
        Self { records, stats }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<R> Default for Roster<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            stats: ParseStats::default(),
        }
    }
}
