//! Admin Waitlist Listing Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use waitline_app::domain::waitlist::models::StatusFilter;

use crate::{
    extensions::*,
    state::State,
    waitlist::{EntryResponse, errors::into_status_error},
};

/// Admin Waitlist Listing Handler
///
/// All non-deleted entries ordered by request time. The optional `status`
/// query parameter narrows the result to one of the active statuses.
#[endpoint(
    tags("waitlist"),
    summary = "List Waitlist Entries",
    responses(
        (status_code = StatusCode::OK, description = "Entries"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status filter"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Admin login required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    status: QueryParam<String, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<EntryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let filter = parse_filter(status.into_inner().as_deref())?;

    let entries = match filter {
        Some(filter) => state.app.waitlist.list_active(Some(filter)).await,
        None => state.app.waitlist.list_all().await,
    }
    .map_err(into_status_error)?;

    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

fn parse_filter(status: Option<&str>) -> Result<Option<StatusFilter>, StatusError> {
    match status {
        None => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("waiting") => Ok(Some(StatusFilter::Waiting)),
        Some(value) if value.eq_ignore_ascii_case("assigning") => Ok(Some(StatusFilter::Assigning)),
        Some(_) => Err(StatusError::bad_request().brief("Unknown status filter")),
    }
}
