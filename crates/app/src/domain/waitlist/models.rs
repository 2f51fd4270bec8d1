//! Waitlist Models

use jiff::Timestamp;
use serde::Serialize;

/// Lifecycle status of a waitlist entry.
///
/// Transitions are one-directional: `WAITING` → `ASSIGNING` → `SEATED`.
/// Soft deletion is tracked separately through `deleted_at` and leaves the
/// status column at whatever value it last had.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntryStatus {
    Waiting,
    Assigning,
    Seated,
}

impl EntryStatus {
    /// The stored column representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Waiting => "WAITING",
            Self::Assigning => "ASSIGNING",
            Self::Seated => "SEATED",
        }
    }

    /// Parse a stored column value.
    #[must_use]
    pub fn from_column(value: &str) -> Option<Self> {
        match value {
            "WAITING" => Some(Self::Waiting),
            "ASSIGNING" => Some(Self::Assigning),
            "SEATED" => Some(Self::Seated),
            _ => None,
        }
    }
}

/// Narrowing filter for active listings.
///
/// Active listings only ever contain `WAITING` and `ASSIGNING` entries; this
/// filter optionally restricts them to one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Waiting,
    Assigning,
}

impl StatusFilter {
    /// The status this filter selects.
    #[must_use]
    pub fn status(self) -> EntryStatus {
        match self {
            Self::Waiting => EntryStatus::Waiting,
            Self::Assigning => EntryStatus::Assigning,
        }
    }
}

/// Waitlist Entry Model
#[derive(Debug, Clone)]
pub struct Entry {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub seats: i64,
    pub notes: Option<String>,
    pub status: EntryStatus,
    /// Creation instant; the canonical ordering key for all listings.
    pub requesttime: Timestamp,
    pub requested_at: Option<Timestamp>,
    pub assigned_at: Option<Timestamp>,
    pub seated_at: Option<Timestamp>,
    pub deleted_at: Option<Timestamp>,
}

/// New Waitlist Entry Model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub name: String,
    pub phone: String,
    pub seats: i64,
    pub notes: Option<String>,
}

/// Strip everything from a raw phone string except decimal digits and `+`.
///
/// Applied once at creation time; the stored value is the normalized form.
#[must_use]
pub fn normalize_phone(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}
