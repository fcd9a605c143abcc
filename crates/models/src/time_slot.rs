use chrono::NaiveTime;
use serde::Serialize;

/// Wire format for times of day ("09:00")
pub const TIME_FORMAT: &str = "%H:%M";

/// A half-open `[begin, end)` interval within a single day.
///
/// `begin` is not required to precede `end`; the pair is stored as given and
/// only interpreted by the conflict predicate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeSlot {
    pub begin: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn new(begin: NaiveTime, end: NaiveTime) -> Self {
        Self { begin, end }
    }

    /// Parses two "HH:MM" strings into a slot.
    /// # Returns
    /// `Some(TimeSlot)` if both strings parse, with no ordering requirement
    pub fn from_strings(begin: &str, end: &str) -> Option<Self> {
        let begin = NaiveTime::parse_from_str(begin, TIME_FORMAT).ok()?;
        let end = NaiveTime::parse_from_str(end, TIME_FORMAT).ok()?;

        Some(Self { begin, end })
    }

    /// Whether this slot conflicts with an already-accepted slot.
    ///
    /// A conflict exists when this slot's begin falls inside
    /// `[other.begin, other.end)`, or its end falls inside
    /// `(other.begin, other.end]`. A slot that strictly contains `other`
    /// without either bound landing inside it is not reported as a
    /// conflict; callers of this predicate inherit that asymmetry.
    pub fn conflicts_with(&self, other: &TimeSlot) -> bool {
        (self.begin >= other.begin && self.begin < other.end)
            || (self.end > other.begin && self.end <= other.end)
    }
}
