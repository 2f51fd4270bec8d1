//! Settings Repository

use sqlx::{Sqlite, Transaction, query, query_scalar};

const GET_SETTING_SQL: &str = include_str!("sql/get_setting.sql");
const UPSERT_SETTING_SQL: &str = include_str!("sql/upsert_setting.sql");
const ENSURE_DISPLAY_DEFAULT_SQL: &str = include_str!("sql/ensure_display_default.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteSettingsRepository;

impl SqliteSettingsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Raw stored value; `None` when the key is absent or the value is NULL.
    pub(crate) async fn get(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        let value = query_scalar::<Sqlite, Option<String>>(GET_SETTING_SQL)
            .bind(key)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(value.flatten())
    }

    /// Last-writer-wins upsert.
    pub(crate) async fn set(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        key: &str,
        value: &str,
    ) -> Result<(), sqlx::Error> {
        query(UPSERT_SETTING_SQL)
            .bind(key)
            .bind(value)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Insert the `display_mode = open` default unless the key already exists.
    pub(crate) async fn ensure_display_default(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<(), sqlx::Error> {
        query(ENSURE_DISPLAY_DEFAULT_SQL).execute(&mut **tx).await?;

        Ok(())
    }
}
