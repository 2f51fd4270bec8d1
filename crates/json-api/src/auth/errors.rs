//! Auth Errors

use salvo::http::StatusError;
use tracing::error;

use waitline_app::auth::AuthServiceError;

pub(crate) fn into_status_error(error: AuthServiceError) -> StatusError {
    match error {
        AuthServiceError::Sql(source) => {
            error!("failed to verify admin pin: {source}");

            StatusError::internal_server_error()
        }
    }
}
