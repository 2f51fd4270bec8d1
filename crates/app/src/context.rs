//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AuthService, SqliteAuthService},
    database::{self, Db},
    domain::{
        settings::{SettingsService, SettingsServiceError, SqliteSettingsService},
        waitlist::{SqliteWaitlistService, WaitlistService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to seed settings")]
    Settings(#[source] SettingsServiceError),
}

#[derive(Clone)]
pub struct AppContext {
    pub waitlist: Arc<dyn WaitlistService>,
    pub settings: Arc<dyn SettingsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// Creates missing tables and seeds the well-known settings, so it is
    /// safe to call on every process start.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting, schema creation or settings seeding
    /// fails.
    pub async fn from_database_url(url: &str, admin_pin: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::init_schema(&pool)
            .await
            .map_err(AppInitError::Database)?;

        let db = Db::new(pool);

        let settings = SqliteSettingsService::new(db.clone());

        settings
            .ensure_defaults(admin_pin)
            .await
            .map_err(AppInitError::Settings)?;

        Ok(Self {
            waitlist: Arc::new(SqliteWaitlistService::new(db.clone())),
            settings: Arc::new(settings),
            auth: Arc::new(SqliteAuthService::new(db)),
        })
    }
}
