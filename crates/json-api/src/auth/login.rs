//! Admin Login Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use crate::{
    auth::{errors::into_status_error, session},
    extensions::DepotExt,
    state::State,
};

/// Admin Login Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct LoginRequest {
    /// Admin PIN
    pub pin: String,
}

/// Admin Login Handler
///
/// Grants the session the admin capability when the PIN matches the stored
/// salted hash. Failure is generic on purpose.
#[endpoint(
    tags("auth"),
    summary = "Admin Login",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Logged in"),
        (status_code = StatusCode::UNAUTHORIZED, description = "Invalid PIN"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<LoginRequest>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let valid = state
        .app
        .auth
        .verify_pin(&json.into_inner().pin)
        .await
        .map_err(into_status_error)?;

    if !valid {
        return Err(StatusError::unauthorized().brief("Invalid PIN"));
    }

    session::grant_admin(depot)?;

    Ok(StatusCode::NO_CONTENT)
}
