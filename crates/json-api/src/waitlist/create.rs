//! Create Waitlist Entry Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use waitline_app::domain::waitlist::models::NewEntry;

use crate::{
    extensions::*,
    state::State,
    waitlist::{EntryResponse, errors::into_status_error},
};

/// Create Waitlist Entry Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateEntryRequest {
    /// Party name
    pub name: String,

    /// Phone number; normalized to digits and `+` before storage
    pub phone: String,

    /// Party size, must be positive
    pub seats: i64,

    /// Free-text notes
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateEntryRequest> for NewEntry {
    fn from(request: CreateEntryRequest) -> Self {
        NewEntry {
            name: request.name,
            phone: request.phone,
            seats: request.seats,
            notes: request.notes,
        }
    }
}

/// Create Waitlist Entry Handler
#[endpoint(
    tags("waitlist"),
    summary = "Join Waitlist",
    responses(
        (status_code = StatusCode::CREATED, description = "Entry created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Validation failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateEntryRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<EntryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entry = state
        .app
        .waitlist
        .create_entry(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/waitlist/{}", entry.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(entry.into()))
}
