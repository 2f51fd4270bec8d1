//! Admin Logout Handler

use salvo::prelude::*;

use crate::auth::session;

/// Admin Logout Handler
///
/// Revokes the session's admin capability. Succeeds whether or not the
/// session was ever logged in.
#[endpoint(
    tags("auth"),
    summary = "Admin Logout",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Logged out"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<StatusCode, StatusError> {
    session::revoke_admin(depot);

    Ok(StatusCode::NO_CONTENT)
}
