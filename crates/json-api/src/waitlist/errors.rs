//! Waitlist Errors

use salvo::http::StatusError;
use tracing::error;

use waitline_app::domain::waitlist::WaitlistServiceError;

pub(crate) fn into_status_error(error: WaitlistServiceError) -> StatusError {
    match error {
        WaitlistServiceError::MissingName => {
            StatusError::bad_request().brief("Name must not be empty")
        }
        WaitlistServiceError::MissingPhone => {
            StatusError::bad_request().brief("Phone must contain at least one digit")
        }
        WaitlistServiceError::InvalidSeats => {
            StatusError::bad_request().brief("Seats must be greater than zero")
        }
        WaitlistServiceError::Sql(source) => {
            error!("waitlist storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
