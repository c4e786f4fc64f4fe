use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::lifecycle::{EntityKind, LifecycleService};
use crate::modules::parents::model::{CreateParentDto, Parent, UpdateParentDto};
use crate::utils::errors::AppError;
use crate::utils::update::UpdateMode;

const PARENT_COLUMNS: &str =
    "id, name, phone_number, is_deleted, deleted_at, created_at, updated_at";

pub struct ParentService;

impl ParentService {
    #[instrument(skip(db, dto))]
    pub async fn create_parent(db: &SqlitePool, dto: CreateParentDto) -> Result<Parent, AppError> {
        validate_phone_number(&dto.phone_number)?;
        Self::check_phone_available(db, &dto.phone_number, None).await?;

        let parent = sqlx::query_as::<_, Parent>(&format!(
            "INSERT INTO parents (name, phone_number, created_at) VALUES (?, ?, ?) \
             RETURNING {PARENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.phone_number)
        .bind(Utc::now())
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::DuplicatePhoneNumber(format!(
                    "Phone number {} already belongs to an active parent",
                    dto.phone_number
                ));
            }
            AppError::from(e)
        })?;

        Ok(parent)
    }

    #[instrument(skip(db))]
    pub async fn get_parents(db: &SqlitePool) -> Result<Vec<Parent>, AppError> {
        let parents = sqlx::query_as::<_, Parent>(&format!(
            "SELECT {PARENT_COLUMNS} FROM parents WHERE is_deleted = 0 ORDER BY id DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(parents)
    }

    #[instrument(skip(db))]
    pub async fn get_parent_by_id(db: &SqlitePool, id: i64) -> Result<Parent, AppError> {
        let parent = sqlx::query_as::<_, Parent>(&format!(
            "SELECT {PARENT_COLUMNS} FROM parents WHERE id = ? AND is_deleted = 0"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Parent not found or deleted".to_string()))?;

        Ok(parent)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_parent(
        db: &SqlitePool,
        id: i64,
        dto: UpdateParentDto,
        mode: UpdateMode,
    ) -> Result<Parent, AppError> {
        let existing = Self::get_parent_by_id(db, id).await?;

        if mode == UpdateMode::Full {
            if dto.name.is_none() {
                return Err(AppError::MissingRequiredField("name is required".to_string()));
            }
            if dto.phone_number.is_none() {
                return Err(AppError::MissingRequiredField(
                    "phone_number is required".to_string(),
                ));
            }
        }

        if let Some(phone_number) = &dto.phone_number {
            validate_phone_number(phone_number)?;
            Self::check_phone_available(db, phone_number, Some(id)).await?;
        }

        let name = dto.name.unwrap_or(existing.name);
        let phone_number = dto.phone_number.unwrap_or(existing.phone_number);

        let parent = sqlx::query_as::<_, Parent>(&format!(
            "UPDATE parents SET name = ?, phone_number = ?, updated_at = ? \
             WHERE id = ? AND is_deleted = 0 \
             RETURNING {PARENT_COLUMNS}"
        ))
        .bind(&name)
        .bind(&phone_number)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(parent)
    }

    #[instrument(skip(db))]
    pub async fn delete_parent(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        LifecycleService::soft_delete(db, EntityKind::Parent, id).await
    }

    #[instrument(skip(db))]
    pub async fn restore_parent(db: &SqlitePool, id: i64) -> Result<Parent, AppError> {
        LifecycleService::restore(db, EntityKind::Parent, id).await?;
        Self::get_parent_by_id(db, id).await
    }

    /// Uniqueness is scoped to active parents; a soft-deleted parent does not
    /// block its number from being reused.
    async fn check_phone_available(
        db: &SqlitePool,
        phone_number: &str,
        exclude_id: Option<i64>,
    ) -> Result<(), AppError> {
        let taken: Option<i64> = match exclude_id {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT id FROM parents WHERE phone_number = ? AND id != ? AND is_deleted = 0",
                )
                .bind(phone_number)
                .bind(id)
                .fetch_optional(db)
                .await?
            }
            None => {
                sqlx::query_scalar(
                    "SELECT id FROM parents WHERE phone_number = ? AND is_deleted = 0",
                )
                .bind(phone_number)
                .fetch_optional(db)
                .await?
            }
        };

        if taken.is_some() {
            return Err(AppError::DuplicatePhoneNumber(format!(
                "Phone number {} already belongs to an active parent",
                phone_number
            )));
        }

        Ok(())
    }
}

/// Iranian mobile format: 11 digits starting with 09.
fn validate_phone_number(phone_number: &str) -> Result<(), AppError> {
    let valid = phone_number.len() == 11
        && phone_number.starts_with("09")
        && phone_number.chars().all(|c| c.is_ascii_digit());

    if !valid {
        return Err(AppError::Validation(
            "phone_number must be an 11-digit number starting with 09".to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate_phone_number;

    #[test]
    fn accepts_well_formed_mobile_numbers() {
        assert!(validate_phone_number("09123456789").is_ok());
        assert!(validate_phone_number("09999999999").is_ok());
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(validate_phone_number("9123456789").is_err()); // missing leading 0
        assert!(validate_phone_number("0912345678").is_err()); // too short
        assert!(validate_phone_number("091234567890").is_err()); // too long
        assert!(validate_phone_number("0912345678a").is_err()); // non-digit
        assert!(validate_phone_number("08123456789").is_err()); // wrong prefix
    }
}
