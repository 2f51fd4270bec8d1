//! Status Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use waitline_app::domain::settings::{DISPLAY_MODE_KEY, DISPLAY_MODE_OPEN};

use crate::{auth::session, display, extensions::*, state::State, waitlist};

/// Status Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct StatusResponse {
    /// Liveness flag, always `true` when the handler runs
    pub ok: bool,

    /// Non-deleted waitlist entries across all statuses
    pub waitlist_count: i64,

    /// Current public display mode
    pub display_mode: String,

    /// Whether the caller's session carries the admin capability
    pub is_admin: bool,
}

/// Status Handler
///
/// Health probe and lightweight dashboard feed in one.
#[endpoint(
    tags("status"),
    summary = "Service Status",
    responses(
        (status_code = StatusCode::OK, description = "Service status"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<StatusResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let waitlist_count = state
        .app
        .waitlist
        .count_entries()
        .await
        .map_err(waitlist::errors::into_status_error)?;

    let display_mode = state
        .app
        .settings
        .get_setting(DISPLAY_MODE_KEY, DISPLAY_MODE_OPEN)
        .await
        .map_err(display::errors::into_status_error)?;

    Ok(Json(StatusResponse {
        ok: true,
        waitlist_count,
        display_mode,
        is_admin: session::is_admin(depot),
    }))
}
