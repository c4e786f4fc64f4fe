use chrono::{DateTime, Utc};
use sqlx::{Sqlite, SqlitePool, Transaction};
use tracing::instrument;

use crate::modules::lifecycle::model::{CascadeRefs, EntityKind};
use crate::utils::errors::AppError;

/// Single authority for moving records between active and soft-deleted state.
///
/// No other code in the crate writes `is_deleted` or `deleted_at`. Every
/// multi-row effect (cascade delete, cascade restore, reference validation
/// followed by a write) runs inside one transaction, so a reader never
/// observes a parent marked deleted while some of its students are still
/// active.
pub struct LifecycleService;

impl LifecycleService {
    /// Soft-deletes an active record, cascading to its active students when
    /// the record is a parent or class.
    ///
    /// Fails with `NotFound` when the record is absent or already deleted;
    /// the active-only guard in the UPDATE means a repeated delete can never
    /// re-apply the cascade.
    #[instrument(skip(db))]
    pub async fn soft_delete(db: &SqlitePool, kind: EntityKind, id: i64) -> Result<(), AppError> {
        let mut tx = db.begin().await?;
        let now = Utc::now();

        let sql = format!(
            "UPDATE {} SET is_deleted = 1, deleted_at = ?, updated_at = ? \
             WHERE id = ? AND is_deleted = 0",
            kind.table()
        );
        let result = sqlx::query(&sql)
            .bind(now)
            .bind(now)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!(
                "{} not found or already deleted",
                kind.label()
            )));
        }

        if let Some(refs) = kind.cascade_refs() {
            let cascade = format!(
                "UPDATE students SET is_deleted = 1, deleted_at = ?, updated_at = ? \
                 WHERE {} = ? AND is_deleted = 0",
                refs.own_fk
            );
            sqlx::query(&cascade)
                .bind(now)
                .bind(now)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    /// Restores a soft-deleted record.
    ///
    /// Restoring an already-active record succeeds without touching anything;
    /// `NotFound` is reserved for rows that do not exist at all. A student
    /// restore is refused while its parent or class is still deleted; a
    /// parent/class restore cascades to its soft-deleted students, skipping
    /// any whose other dependency has not been restored yet.
    #[instrument(skip(db))]
    pub async fn restore(db: &SqlitePool, kind: EntityKind, id: i64) -> Result<(), AppError> {
        let mut tx = db.begin().await?;
        let now = Utc::now();

        let sql = format!("SELECT is_deleted FROM {} WHERE id = ?", kind.table());
        let is_deleted: bool = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} not found", kind.label())))?;

        if !is_deleted {
            return Ok(());
        }

        match kind.cascade_refs() {
            None => Self::restore_student(&mut tx, id, now).await?,
            Some(refs) => Self::restore_with_cascade(&mut tx, kind, id, refs, now).await?,
        }

        tx.commit().await?;
        Ok(())
    }

    async fn restore_student(
        tx: &mut Transaction<'_, Sqlite>,
        id: i64,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let (parent_id, class_id): (Option<i64>, Option<i64>) =
            sqlx::query_as("SELECT parent_id, class_id FROM students WHERE id = ?")
                .bind(id)
                .fetch_one(&mut **tx)
                .await?;

        if let Some(parent_id) = parent_id
            && !Self::is_active(tx, "parents", parent_id).await?
        {
            return Err(AppError::DependencyNotRestorable(format!(
                "Cannot restore student while parent {} is deleted",
                parent_id
            )));
        }

        if let Some(class_id) = class_id
            && !Self::is_active(tx, "classes", class_id).await?
        {
            return Err(AppError::DependencyNotRestorable(format!(
                "Cannot restore student while class {} is deleted",
                class_id
            )));
        }

        sqlx::query("UPDATE students SET is_deleted = 0, deleted_at = NULL, updated_at = ? WHERE id = ?")
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    async fn restore_with_cascade(
        tx: &mut Transaction<'_, Sqlite>,
        kind: EntityKind,
        id: i64,
        refs: CascadeRefs,
        now: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let sql = format!(
            "UPDATE {} SET is_deleted = 0, deleted_at = NULL, updated_at = ? WHERE id = ?",
            kind.table()
        );
        sqlx::query(&sql).bind(now).bind(id).execute(&mut **tx).await?;

        // Bring back this record's soft-deleted students, but only those whose
        // other reference is null or points at an active row.
        let cascade = format!(
            "UPDATE students SET is_deleted = 0, deleted_at = NULL, updated_at = ? \
             WHERE {own_fk} = ? AND is_deleted = 1 \
               AND ({other_fk} IS NULL OR {other_fk} IN \
                    (SELECT id FROM {other_table} WHERE is_deleted = 0))",
            own_fk = refs.own_fk,
            other_fk = refs.other_fk,
            other_table = refs.other_table,
        );
        sqlx::query(&cascade)
            .bind(now)
            .bind(id)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    /// Checks that a student's prospective references resolve to active rows.
    ///
    /// Runs inside the caller's transaction so the check and the subsequent
    /// insert/update commit or roll back together.
    pub async fn validate_references(
        tx: &mut Transaction<'_, Sqlite>,
        parent_id: Option<i64>,
        class_id: Option<i64>,
    ) -> Result<(), AppError> {
        if let Some(parent_id) = parent_id
            && !Self::is_active(tx, "parents", parent_id).await?
        {
            return Err(AppError::InvalidReference(format!(
                "Parent {} not found or deleted",
                parent_id
            )));
        }

        if let Some(class_id) = class_id
            && !Self::is_active(tx, "classes", class_id).await?
        {
            return Err(AppError::InvalidReference(format!(
                "Class {} not found or deleted",
                class_id
            )));
        }

        Ok(())
    }

    async fn is_active(
        tx: &mut Transaction<'_, Sqlite>,
        table: &str,
        id: i64,
    ) -> Result<bool, AppError> {
        let sql = format!("SELECT id FROM {} WHERE id = ? AND is_deleted = 0", table);
        let found: Option<i64> = sqlx::query_scalar(&sql)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await?;

        Ok(found.is_some())
    }
}
