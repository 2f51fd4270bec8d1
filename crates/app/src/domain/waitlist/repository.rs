//! Waitlist Repository

use jiff::Timestamp;
use sqlx::{FromRow, Row, Sqlite, Transaction, query, query_as, query_scalar, sqlite::SqliteRow};

use crate::{
    domain::waitlist::models::{Entry, EntryStatus, NewEntry},
    timestamps,
};

const CREATE_ENTRY_SQL: &str = include_str!("sql/create_entry.sql");
const ASSIGN_ENTRY_SQL: &str = include_str!("sql/assign_entry.sql");
const SEAT_ENTRY_SQL: &str = include_str!("sql/seat_entry.sql");
const SOFT_DELETE_ENTRY_SQL: &str = include_str!("sql/soft_delete_entry.sql");
const LIST_ACTIVE_SQL: &str = include_str!("sql/list_active.sql");
const LIST_ALL_SQL: &str = include_str!("sql/list_all.sql");
const COUNT_ENTRIES_SQL: &str = include_str!("sql/count_entries.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct SqliteWaitlistRepository;

impl SqliteWaitlistRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_entry(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        entry: &NewEntry,
        now: &str,
    ) -> Result<Entry, sqlx::Error> {
        query_as::<Sqlite, Entry>(CREATE_ENTRY_SQL)
            .bind(&entry.name)
            .bind(&entry.phone)
            .bind(entry.seats)
            .bind(entry.notes.as_deref())
            .bind(now)
            .bind(now)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn assign(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        now: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = query(ASSIGN_ENTRY_SQL)
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn seat(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        now: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = query(SEAT_ENTRY_SQL)
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn soft_delete(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        now: &str,
    ) -> Result<u64, sqlx::Error> {
        let result = query(SOFT_DELETE_ENTRY_SQL)
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(result.rows_affected())
    }

    pub(crate) async fn list_active(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
        filter: Option<EntryStatus>,
    ) -> Result<Vec<Entry>, sqlx::Error> {
        let filter = filter.map(EntryStatus::as_str);

        query_as::<Sqlite, Entry>(LIST_ACTIVE_SQL)
            .bind(filter)
            .bind(filter)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_all(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<Vec<Entry>, sqlx::Error> {
        query_as::<Sqlite, Entry>(LIST_ALL_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn count_entries(
        &self,
        tx: &mut Transaction<'_, Sqlite>,
    ) -> Result<i64, sqlx::Error> {
        query_scalar::<Sqlite, i64>(COUNT_ENTRIES_SQL)
            .fetch_one(&mut **tx)
            .await
    }
}

fn decode_timestamp(index: &str, value: &str) -> sqlx::Result<Timestamp> {
    timestamps::parse_utc(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: index.to_string(),
        source: Box::new(e),
    })
}

fn decode_optional_timestamp(index: &str, value: Option<String>) -> sqlx::Result<Option<Timestamp>> {
    value
        .map(|v| decode_timestamp(index, &v))
        .transpose()
}

impl<'r> FromRow<'r, SqliteRow> for Entry {
    fn from_row(row: &'r SqliteRow) -> sqlx::Result<Self> {
        let status_column: String = row.try_get("status")?;

        let status = EntryStatus::from_column(&status_column).ok_or_else(|| {
            sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: format!("unknown waitlist status {status_column:?}").into(),
            }
        })?;

        let requesttime: String = row.try_get("requesttime")?;

        Ok(Self {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            phone: row.try_get("phone")?,
            seats: row.try_get("seats")?,
            notes: row.try_get("notes")?,
            status,
            requesttime: decode_timestamp("requesttime", &requesttime)?,
            requested_at: decode_optional_timestamp("requested_at", row.try_get("requested_at")?)?,
            assigned_at: decode_optional_timestamp("assigned_at", row.try_get("assigned_at")?)?,
            seated_at: decode_optional_timestamp("seated_at", row.try_get("seated_at")?)?,
            deleted_at: decode_optional_timestamp("deleted_at", row.try_get("deleted_at")?)?,
        })
    }
}
