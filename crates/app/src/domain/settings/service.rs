//! Settings service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    auth::pin,
    database::Db,
    domain::settings::{
        ADMIN_PIN_HASH_KEY, errors::SettingsServiceError, repository::SqliteSettingsRepository,
    },
};

#[derive(Debug, Clone)]
pub struct SqliteSettingsService {
    db: Db,
    repository: SqliteSettingsRepository,
}

impl SqliteSettingsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteSettingsRepository::new(),
        }
    }

    /// Seed the well-known settings, once.
    ///
    /// Safe to run on every startup: `display_mode` defaults to `open` only
    /// when the key is absent, and `admin_pin_hash` is derived from the
    /// configured PIN only when currently absent or empty. An existing hash
    /// is never regenerated.
    ///
    /// # Errors
    ///
    /// Returns an error when a statement fails or PIN hashing fails.
    pub async fn ensure_defaults(&self, admin_pin: &str) -> Result<(), SettingsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.ensure_display_default(&mut tx).await?;

        let current = self.repository.get(&mut tx, ADMIN_PIN_HASH_KEY).await?;

        if current.is_none_or(|hash| hash.is_empty()) {
            let hash = pin::hash_pin(admin_pin)?;

            self.repository.set(&mut tx, ADMIN_PIN_HASH_KEY, &hash).await?;

            info!("seeded admin pin hash");
        }

        tx.commit().await?;

        Ok(())
    }
}

#[async_trait]
impl SettingsService for SqliteSettingsService {
    async fn get_setting(&self, key: &str, default: &str) -> Result<String, SettingsServiceError> {
        let mut tx = self.db.begin().await?;

        let value = self.repository.get(&mut tx, key).await?;

        tx.commit().await?;

        Ok(match value {
            Some(value) if !value.is_empty() => value,
            _ => default.to_string(),
        })
    }

    async fn set_setting(&self, key: &str, value: &str) -> Result<(), SettingsServiceError> {
        let mut tx = self.db.begin().await?;

        self.repository.set(&mut tx, key, value).await?;

        tx.commit().await?;

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait SettingsService: Send + Sync {
    /// Stored value for `key`, or `default` when absent, NULL or empty.
    async fn get_setting(&self, key: &str, default: &str) -> Result<String, SettingsServiceError>;

    /// Upsert `key` to `value`. No versioning, no history.
    async fn set_setting(&self, key: &str, value: &str) -> Result<(), SettingsServiceError>;
}
