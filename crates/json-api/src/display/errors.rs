//! Display Errors

use salvo::http::StatusError;
use tracing::error;

use waitline_app::domain::settings::SettingsServiceError;

pub(crate) fn into_status_error(error: SettingsServiceError) -> StatusError {
    match error {
        SettingsServiceError::Sql(source) => {
            error!("settings storage error: {source}");

            StatusError::internal_server_error()
        }
        SettingsServiceError::PinHash(source) => {
            error!("pin hashing error: {source}");

            StatusError::internal_server_error()
        }
    }
}
