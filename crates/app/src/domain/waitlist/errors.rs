//! Waitlist service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaitlistServiceError {
    #[error("name must not be empty")]
    MissingName,

    #[error("phone must contain at least one digit")]
    MissingPhone,

    #[error("seats must be greater than zero")]
    InvalidSeats,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for WaitlistServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
