//! Waitlist service.

use async_trait::async_trait;
use mockall::automock;
use tracing::debug;

use crate::{
    database::Db,
    domain::waitlist::{
        errors::WaitlistServiceError,
        models::{Entry, NewEntry, StatusFilter, normalize_phone},
        repository::SqliteWaitlistRepository,
    },
    timestamps,
};

#[derive(Debug, Clone)]
pub struct SqliteWaitlistService {
    db: Db,
    repository: SqliteWaitlistRepository,
}

impl SqliteWaitlistService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: SqliteWaitlistRepository::new(),
        }
    }
}

#[async_trait]
impl WaitlistService for SqliteWaitlistService {
    async fn create_entry(&self, entry: NewEntry) -> Result<Entry, WaitlistServiceError> {
        let name = entry.name.trim().to_string();
        let phone = normalize_phone(&entry.phone);
        let notes = entry.notes.map(|notes| notes.trim().to_string());

        if name.is_empty() {
            return Err(WaitlistServiceError::MissingName);
        }

        if phone.is_empty() {
            return Err(WaitlistServiceError::MissingPhone);
        }

        if entry.seats <= 0 {
            return Err(WaitlistServiceError::InvalidSeats);
        }

        let entry = NewEntry {
            name,
            phone,
            seats: entry.seats,
            notes,
        };

        let now = timestamps::now_utc_string();

        let mut tx = self.db.begin().await?;

        let created = self.repository.create_entry(&mut tx, &entry, &now).await?;

        tx.commit().await?;

        Ok(created)
    }

    async fn assign(&self, id: i64) -> Result<(), WaitlistServiceError> {
        let now = timestamps::now_utc_string();

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.assign(&mut tx, id, &now).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            debug!("assign on missing or deleted waitlist entry {id}");
        }

        Ok(())
    }

    async fn seat(&self, id: i64) -> Result<(), WaitlistServiceError> {
        let now = timestamps::now_utc_string();

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.seat(&mut tx, id, &now).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            debug!("seat on missing or deleted waitlist entry {id}");
        }

        Ok(())
    }

    async fn soft_delete(&self, id: i64) -> Result<(), WaitlistServiceError> {
        let now = timestamps::now_utc_string();

        let mut tx = self.db.begin().await?;

        let rows_affected = self.repository.soft_delete(&mut tx, id, &now).await?;

        tx.commit().await?;

        if rows_affected == 0 {
            debug!("soft delete on missing or deleted waitlist entry {id}");
        }

        Ok(())
    }

    async fn list_active(
        &self,
        filter: Option<StatusFilter>,
    ) -> Result<Vec<Entry>, WaitlistServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self
            .repository
            .list_active(&mut tx, filter.map(StatusFilter::status))
            .await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn list_all(&self) -> Result<Vec<Entry>, WaitlistServiceError> {
        let mut tx = self.db.begin().await?;

        let entries = self.repository.list_all(&mut tx).await?;

        tx.commit().await?;

        Ok(entries)
    }

    async fn count_entries(&self) -> Result<i64, WaitlistServiceError> {
        let mut tx = self.db.begin().await?;

        let count = self.repository.count_entries(&mut tx).await?;

        tx.commit().await?;

        Ok(count)
    }
}

#[automock]
#[async_trait]
pub trait WaitlistService: Send + Sync {
    /// Validate and insert a new entry with status `WAITING`.
    ///
    /// The phone number is normalized before storage; `requesttime` and
    /// `requested_at` are both set to the current UTC instant.
    async fn create_entry(&self, entry: NewEntry) -> Result<Entry, WaitlistServiceError>;

    /// Move an entry to `ASSIGNING`, stamping `assigned_at` every time.
    ///
    /// A missing or soft-deleted id is a silent no-op.
    async fn assign(&self, id: i64) -> Result<(), WaitlistServiceError>;

    /// Move an entry to `SEATED`; `seated_at` keeps its first value.
    ///
    /// A missing or soft-deleted id is a silent no-op.
    async fn seat(&self, id: i64) -> Result<(), WaitlistServiceError>;

    /// Mark an entry deleted, excluding it from every listing from now on.
    ///
    /// A missing or already-deleted id is a silent no-op.
    async fn soft_delete(&self, id: i64) -> Result<(), WaitlistServiceError>;

    /// Non-deleted `WAITING`/`ASSIGNING` entries ordered by request time.
    async fn list_active(
        &self,
        filter: Option<StatusFilter>,
    ) -> Result<Vec<Entry>, WaitlistServiceError>;

    /// All non-deleted entries ordered by request time, any status.
    async fn list_all(&self) -> Result<Vec<Entry>, WaitlistServiceError>;

    /// Number of non-deleted entries.
    async fn count_entries(&self) -> Result<i64, WaitlistServiceError>;
}

#[cfg(test)]
mod tests {
    use sqlx::query;
    use testresult::TestResult;

    use crate::{domain::waitlist::models::EntryStatus, test::db::TestDb};

    use super::*;

    async fn make_service() -> (TestDb, SqliteWaitlistService) {
        let db = TestDb::new().await;
        let service = SqliteWaitlistService::new(db.db());

        (db, service)
    }

    fn new_entry(name: &str, phone: &str, seats: i64) -> NewEntry {
        NewEntry {
            name: name.to_string(),
            phone: phone.to_string(),
            seats,
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_create_entry_starts_waiting_with_matching_timestamps() -> TestResult {
        let (_db, service) = make_service().await;

        let entry = service.create_entry(new_entry("Alice", "555-1234", 2)).await?;

        assert_eq!(entry.status, EntryStatus::Waiting);
        assert_eq!(entry.seats, 2);
        assert_eq!(entry.phone, "5551234");
        assert_eq!(entry.requested_at, Some(entry.requesttime));
        assert_eq!(entry.assigned_at, None);
        assert_eq!(entry.seated_at, None);
        assert_eq!(entry.deleted_at, None);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_entry_rejects_empty_name() -> TestResult {
        let (_db, service) = make_service().await;

        let result = service.create_entry(new_entry("   ", "555", 2)).await;

        assert!(matches!(result, Err(WaitlistServiceError::MissingName)));
        assert_eq!(service.count_entries().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_entry_rejects_phone_without_digits() -> TestResult {
        let (_db, service) = make_service().await;

        let result = service.create_entry(new_entry("Alice", "call me", 2)).await;

        assert!(matches!(result, Err(WaitlistServiceError::MissingPhone)));
        assert_eq!(service.count_entries().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_create_entry_rejects_non_positive_seats() -> TestResult {
        let (_db, service) = make_service().await;

        let result = service.create_entry(new_entry("Alice", "555", 0)).await;

        assert!(matches!(result, Err(WaitlistServiceError::InvalidSeats)));
        assert_eq!(service.count_entries().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_full_lifecycle_scenario() -> TestResult {
        let (db, service) = make_service().await;

        let entry = service.create_entry(new_entry("Alice", "555-1234", 2)).await?;

        service.assign(entry.id).await?;

        let assigned = find(&service, entry.id).await?;

        assert_eq!(assigned.status, EntryStatus::Assigning);
        assert!(assigned.assigned_at.is_some());

        service.seat(entry.id).await?;

        let seated = find(&service, entry.id).await?;

        assert_eq!(seated.status, EntryStatus::Seated);
        assert!(seated.seated_at.is_some());

        // Repeat seat call must not move the original seating time.
        backdate(&db, entry.id, "seated_at", "2020-01-01 00:00:00").await?;
        service.seat(entry.id).await?;

        let reseated = find(&service, entry.id).await?;

        assert_eq!(
            reseated.seated_at,
            Some(crate::timestamps::parse_utc("2020-01-01 00:00:00")?)
        );

        service.soft_delete(entry.id).await?;

        assert!(service.list_all().await?.is_empty());
        assert!(service.list_active(None).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_assign_restamps_assigned_at_every_time() -> TestResult {
        let (db, service) = make_service().await;

        let entry = service.create_entry(new_entry("Bob", "555", 4)).await?;

        service.assign(entry.id).await?;
        backdate(&db, entry.id, "assigned_at", "2020-01-01 00:00:00").await?;

        service.assign(entry.id).await?;

        let assigned = find(&service, entry.id).await?;
        let backdated = crate::timestamps::parse_utc("2020-01-01 00:00:00")?;

        assert_ne!(assigned.assigned_at, Some(backdated));

        Ok(())
    }

    #[tokio::test]
    async fn test_transitions_on_deleted_entry_are_no_ops() -> TestResult {
        let (_db, service) = make_service().await;

        let entry = service.create_entry(new_entry("Cara", "555", 3)).await?;

        service.soft_delete(entry.id).await?;

        service.assign(entry.id).await?;
        service.seat(entry.id).await?;
        service.soft_delete(entry.id).await?;

        assert!(service.list_all().await?.is_empty());
        assert!(service.list_active(None).await?.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_transitions_on_unknown_id_are_no_ops() -> TestResult {
        let (_db, service) = make_service().await;

        service.assign(999).await?;
        service.seat(999).await?;
        service.soft_delete(999).await?;

        assert_eq!(service.count_entries().await?, 0);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_active_excludes_seated_and_deleted() -> TestResult {
        let (_db, service) = make_service().await;

        let waiting = service.create_entry(new_entry("Waiting", "1", 1)).await?;
        let assigning = service.create_entry(new_entry("Assigning", "2", 1)).await?;
        let seated = service.create_entry(new_entry("Seated", "3", 1)).await?;
        let deleted = service.create_entry(new_entry("Deleted", "4", 1)).await?;

        service.assign(assigning.id).await?;
        service.seat(seated.id).await?;
        service.soft_delete(deleted.id).await?;

        let active = service.list_active(None).await?;
        let active_ids: Vec<i64> = active.iter().map(|e| e.id).collect();

        assert_eq!(active_ids, vec![waiting.id, assigning.id]);

        let only_waiting = service.list_active(Some(StatusFilter::Waiting)).await?;

        assert_eq!(only_waiting.len(), 1);
        assert_eq!(only_waiting[0].id, waiting.id);

        let only_assigning = service.list_active(Some(StatusFilter::Assigning)).await?;

        assert_eq!(only_assigning.len(), 1);
        assert_eq!(only_assigning[0].id, assigning.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_all_orders_by_request_time_not_insertion() -> TestResult {
        let (db, service) = make_service().await;

        let first = service.create_entry(new_entry("First", "1", 1)).await?;
        let second = service.create_entry(new_entry("Second", "2", 1)).await?;

        // Push the first insert after the second chronologically.
        backdate(&db, first.id, "requesttime", "2031-01-01 00:00:00").await?;
        backdate(&db, second.id, "requesttime", "2030-01-01 00:00:00").await?;

        let all = service.list_all().await?;
        let ids: Vec<i64> = all.iter().map(|e| e.id).collect();

        assert_eq!(ids, vec![second.id, first.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_same_second_arrivals_keep_insertion_order() -> TestResult {
        let (db, service) = make_service().await;

        let first = service.create_entry(new_entry("First", "1", 1)).await?;
        let second = service.create_entry(new_entry("Second", "2", 1)).await?;
        let third = service.create_entry(new_entry("Third", "3", 1)).await?;

        // Exact timestamp tie; a mixed-status queue must still come back in
        // arrival order rather than whatever order the status index yields.
        for id in [first.id, second.id, third.id] {
            backdate(&db, id, "requesttime", "2030-01-01 00:00:00").await?;
        }

        service.assign(second.id).await?;

        let active_ids: Vec<i64> = service
            .list_active(None)
            .await?
            .iter()
            .map(|e| e.id)
            .collect();

        assert_eq!(active_ids, vec![first.id, second.id, third.id]);

        let all_ids: Vec<i64> = service.list_all().await?.iter().map(|e| e.id).collect();

        assert_eq!(all_ids, vec![first.id, second.id, third.id]);

        Ok(())
    }

    #[tokio::test]
    async fn test_count_entries_ignores_deleted() -> TestResult {
        let (_db, service) = make_service().await;

        let kept = service.create_entry(new_entry("Kept", "1", 1)).await?;
        let gone = service.create_entry(new_entry("Gone", "2", 1)).await?;

        service.seat(kept.id).await?;
        service.soft_delete(gone.id).await?;

        assert_eq!(service.count_entries().await?, 1);

        Ok(())
    }

    async fn find(service: &SqliteWaitlistService, id: i64) -> TestResult<Entry> {
        let entry = service
            .list_all()
            .await?
            .into_iter()
            .find(|entry| entry.id == id)
            .expect("entry not in list_all");

        Ok(entry)
    }

    async fn backdate(db: &TestDb, id: i64, column: &str, value: &str) -> TestResult {
        let sql = format!("UPDATE waitlist SET {column} = ? WHERE id = ?");

        query(&sql).bind(value).bind(id).execute(db.pool()).await?;

        Ok(())
    }
}
