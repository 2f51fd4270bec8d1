//! Assign Table Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, state::State, waitlist::errors::into_status_error};

/// Assign Table Handler
///
/// Moves an entry to ASSIGNING and restamps the assignment time. Repeating
/// the call restamps again; unknown or deleted entries are ignored.
#[endpoint(
    tags("waitlist"),
    summary = "Assign Table",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Entry assigned"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin login required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .waitlist
        .assign(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
