//! Start Display Handler

use std::sync::Arc;

use salvo::prelude::*;

use waitline_app::domain::settings::{DISPLAY_MODE_KEY, DISPLAY_MODE_WAITLIST};

use crate::{display::errors::into_status_error, extensions::*, state::State};

/// Start Display Handler
///
/// Switches the public display to the live waitlist view.
#[endpoint(
    tags("display"),
    summary = "Show Live Waitlist",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Display switched to the waitlist"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin login required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .settings
        .set_setting(DISPLAY_MODE_KEY, DISPLAY_MODE_WAITLIST)
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
