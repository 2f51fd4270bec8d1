//! Delete Waitlist Entry Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{extensions::*, state::State, waitlist::errors::into_status_error};

/// Delete Waitlist Entry Handler
///
/// Soft-deletes an entry; the row stays in storage with a deletion stamp and
/// drops out of every listing. Unknown or already deleted entries are ignored.
#[endpoint(
    tags("waitlist"),
    summary = "Remove Waitlist Entry",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Entry removed"),
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
        .soft_delete(id.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}
