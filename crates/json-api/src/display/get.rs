//! Display Mode Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use waitline_app::domain::settings::{DISPLAY_MODE_KEY, DISPLAY_MODE_OPEN};

use crate::{display::errors::into_status_error, extensions::*, state::State};

/// Display Mode Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct DisplayModeResponse {
    /// Current public display mode, `open` or `waitlist`
    pub display_mode: String,
}

/// Display Mode Handler
///
/// Current mode of the public-facing display. Falls back to `open` when the
/// setting was never written.
#[endpoint(
    tags("display"),
    summary = "Display Mode",
    responses(
        (status_code = StatusCode::OK, description = "Current display mode"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<DisplayModeResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let display_mode = state
        .app
        .settings
        .get_setting(DISPLAY_MODE_KEY, DISPLAY_MODE_OPEN)
        .await
        .map_err(into_status_error)?;

    Ok(Json(DisplayModeResponse { display_mode }))
}
