//! Live Panel Snapshot Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use waitline_app::{
    domain::waitlist::models::{Entry, EntryStatus},
    timestamps,
};

use crate::{extensions::*, state::State, waitlist::errors::into_status_error};

/// Upper bound on rows handed to the live panel.
const SNAPSHOT_LIMIT: usize = 100;

/// Live Panel Entry
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct SnapshotEntry {
    /// Entry identifier
    pub id: i64,

    /// Party name
    pub name: String,

    /// Normalized phone number
    pub phone: String,

    /// Party size
    pub seats: i64,

    /// Lifecycle status (WAITING or ASSIGNING)
    pub status: String,

    /// Creation time, UTC `YYYY-MM-DD HH:MM:SS`
    pub requesttime: String,

    /// Latest table-assignment time
    pub assigned_at: Option<String>,

    /// Instant the panel's wait timer counts from, UTC with `Z` suffix.
    ///
    /// The assignment time once a table is being assigned, otherwise the
    /// original request time.
    pub timer_start_utc: String,
}

impl From<Entry> for SnapshotEntry {
    fn from(entry: Entry) -> Self {
        let timer_start = match (entry.status, entry.assigned_at) {
            (EntryStatus::Assigning, Some(assigned_at)) => assigned_at,
            _ => entry.requesttime,
        };

        Self {
            id: entry.id,
            name: entry.name,
            phone: entry.phone,
            seats: entry.seats,
            status: entry.status.as_str().to_string(),
            requesttime: timestamps::format_utc(entry.requesttime),
            assigned_at: entry.assigned_at.map(timestamps::format_utc),
            timer_start_utc: format!("{}Z", timestamps::format_utc(timer_start)),
        }
    }
}

/// Live Panel Snapshot Handler
///
/// Active entries for the public live-updating panel.
#[endpoint(
    tags("waitlist"),
    summary = "Live Waitlist Snapshot",
    responses(
        (status_code = StatusCode::OK, description = "Active entries"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<SnapshotEntry>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entries = state
        .app
        .waitlist
        .list_active(None)
        .await
        .map_err(into_status_error)?;

    Ok(Json(
        entries
            .into_iter()
            .take(SNAPSHOT_LIMIT)
            .map(SnapshotEntry::from)
            .collect(),
    ))
}
