use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::classes::model::{Class, CreateClassDto, UpdateClassDto};
use crate::modules::lifecycle::{EntityKind, LifecycleService};
use crate::utils::errors::AppError;
use crate::utils::update::UpdateMode;

const CLASS_COLUMNS: &str =
    "id, name, teacher_name, is_deleted, deleted_at, created_at, updated_at";

pub struct ClassService;

impl ClassService {
    #[instrument(skip(db, dto))]
    pub async fn create_class(db: &SqlitePool, dto: CreateClassDto) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "INSERT INTO classes (name, teacher_name, created_at) VALUES (?, ?, ?) \
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(&dto.teacher_name)
        .bind(Utc::now())
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn get_classes(db: &SqlitePool) -> Result<Vec<Class>, AppError> {
        let classes = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE is_deleted = 0 ORDER BY id DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(classes)
    }

    #[instrument(skip(db))]
    pub async fn get_class_by_id(db: &SqlitePool, id: i64) -> Result<Class, AppError> {
        let class = sqlx::query_as::<_, Class>(&format!(
            "SELECT {CLASS_COLUMNS} FROM classes WHERE id = ? AND is_deleted = 0"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Class not found or deleted".to_string()))?;

        Ok(class)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_class(
        db: &SqlitePool,
        id: i64,
        dto: UpdateClassDto,
        mode: UpdateMode,
    ) -> Result<Class, AppError> {
        let existing = Self::get_class_by_id(db, id).await?;

        if mode == UpdateMode::Full {
            if dto.name.is_none() {
                return Err(AppError::MissingRequiredField("name is required".to_string()));
            }
            if dto.teacher_name.is_none() {
                return Err(AppError::MissingRequiredField(
                    "teacher_name is required".to_string(),
                ));
            }
        }

        let name = dto.name.unwrap_or(existing.name);
        let teacher_name = dto.teacher_name.unwrap_or(existing.teacher_name);

        let class = sqlx::query_as::<_, Class>(&format!(
            "UPDATE classes SET name = ?, teacher_name = ?, updated_at = ? \
             WHERE id = ? AND is_deleted = 0 \
             RETURNING {CLASS_COLUMNS}"
        ))
        .bind(&name)
        .bind(&teacher_name)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(db)
        .await?;

        Ok(class)
    }

    #[instrument(skip(db))]
    pub async fn delete_class(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        LifecycleService::soft_delete(db, EntityKind::Class, id).await
    }

    #[instrument(skip(db))]
    pub async fn restore_class(db: &SqlitePool, id: i64) -> Result<Class, AppError> {
        LifecycleService::restore(db, EntityKind::Class, id).await?;
        Self::get_class_by_id(db, id).await
    }
}
