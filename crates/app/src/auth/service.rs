//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use tracing::warn;

use crate::{
    auth::{errors::AuthServiceError, pin},
    database::Db,
    domain::settings::{ADMIN_PIN_HASH_KEY, SqliteSettingsRepository},
};

#[derive(Debug, Clone)]
pub struct SqliteAuthService {
    db: Db,
    settings: SqliteSettingsRepository,
}

impl SqliteAuthService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            settings: SqliteSettingsRepository::new(),
        }
    }
}

#[async_trait]
impl AuthService for SqliteAuthService {
    async fn verify_pin(&self, pin_attempt: &str) -> Result<bool, AuthServiceError> {
        let mut tx = self.db.begin().await?;

        let stored = self.settings.get(&mut tx, ADMIN_PIN_HASH_KEY).await?;

        tx.commit().await?;

        let Some(hash) = stored.filter(|hash| !hash.is_empty()) else {
            return Ok(false);
        };

        match pin::verify_pin_hash(&hash, pin_attempt) {
            Ok(valid) => Ok(valid),
            Err(error) => {
                warn!("stored admin pin hash is unusable: {error}");

                Ok(false)
            }
        }
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a PIN attempt against the stored salted hash.
    ///
    /// Any failure mode the caller could probe (unknown key, empty hash,
    /// mismatch) collapses into `Ok(false)`.
    async fn verify_pin(&self, pin_attempt: &str) -> Result<bool, AuthServiceError>;
}
