//! Settings service errors.

use sqlx::Error;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsServiceError {
    #[error("storage error")]
    Sql(#[source] Error),

    #[error("failed to hash admin pin")]
    PinHash(#[from] argon2::password_hash::Error),
}

impl From<Error> for SettingsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}
