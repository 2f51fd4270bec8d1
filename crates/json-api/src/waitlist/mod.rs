//! Waitlist handlers.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use waitline_app::{domain::waitlist::models::Entry, timestamps};

pub(crate) mod assign;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod errors;
pub(crate) mod index;
pub(crate) mod seat;
pub(crate) mod snapshot;

/// Waitlist Entry Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct EntryResponse {
    /// Entry identifier
    pub id: i64,

    /// Party name
    pub name: String,

    /// Normalized phone number
    pub phone: String,

    /// Party size
    pub seats: i64,

    /// Free-text notes
    pub notes: Option<String>,

    /// Lifecycle status (WAITING, ASSIGNING or SEATED)
    pub status: String,

    /// Creation time, UTC `YYYY-MM-DD HH:MM:SS`
    pub requesttime: String,

    /// First request time, set at creation
    pub requested_at: Option<String>,

    /// Latest table-assignment time
    pub assigned_at: Option<String>,

    /// First seating time
    pub seated_at: Option<String>,
}

impl From<Entry> for EntryResponse {
    fn from(entry: Entry) -> Self {
        Self {
            id: entry.id,
            name: entry.name,
            phone: entry.phone,
            seats: entry.seats,
            notes: entry.notes,
            status: entry.status.as_str().to_string(),
            requesttime: timestamps::format_utc(entry.requesttime),
            requested_at: entry.requested_at.map(timestamps::format_utc),
            assigned_at: entry.assigned_at.map(timestamps::format_utc),
            seated_at: entry.seated_at.map(timestamps::format_utc),
        }
    }
}
