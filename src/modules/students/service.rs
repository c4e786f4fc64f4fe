use chrono::Utc;
use sqlx::SqlitePool;
use tracing::instrument;

use crate::modules::lifecycle::{EntityKind, LifecycleService};
use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use crate::utils::errors::AppError;
use crate::utils::update::UpdateMode;

const STUDENT_COLUMNS: &str = "id, name, age, grade, parent_id, class_id, is_deleted, \
                               deleted_at, created_at, updated_at";

pub struct StudentService;

impl StudentService {
    /// Reference validation and the insert share one transaction, so a
    /// concurrent parent/class deletion cannot slip between the check and
    /// the row appearing.
    #[instrument(skip(db, dto))]
    pub async fn create_student(
        db: &SqlitePool,
        dto: CreateStudentDto,
    ) -> Result<Student, AppError> {
        let mut tx = db.begin().await?;

        LifecycleService::validate_references(&mut tx, dto.parent_id, dto.class_id).await?;

        let student = sqlx::query_as::<_, Student>(&format!(
            "INSERT INTO students (name, age, grade, parent_id, class_id, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&dto.name)
        .bind(dto.age)
        .bind(dto.grade)
        .bind(dto.parent_id)
        .bind(dto.class_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn get_students(db: &SqlitePool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE is_deleted = 0 ORDER BY id DESC"
        ))
        .fetch_all(db)
        .await?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student_by_id(db: &SqlitePool, id: i64) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = ? AND is_deleted = 0"
        ))
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found or deleted".to_string()))?;

        Ok(student)
    }

    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &SqlitePool,
        id: i64,
        dto: UpdateStudentDto,
        mode: UpdateMode,
    ) -> Result<Student, AppError> {
        let mut tx = db.begin().await?;

        let existing = sqlx::query_as::<_, Student>(&format!(
            "SELECT {STUDENT_COLUMNS} FROM students WHERE id = ? AND is_deleted = 0"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Student not found or deleted".to_string()))?;

        if mode == UpdateMode::Full {
            if dto.name.is_none() {
                return Err(AppError::MissingRequiredField("name is required".to_string()));
            }
            if dto.age.is_none() {
                return Err(AppError::MissingRequiredField("age is required".to_string()));
            }
            if dto.grade.is_none() {
                return Err(AppError::MissingRequiredField("grade is required".to_string()));
            }
        }

        let parent_id = match dto.parent_id {
            Some(value) => value,
            None => existing.parent_id,
        };
        let class_id = match dto.class_id {
            Some(value) => value,
            None => existing.class_id,
        };

        // Only the references the caller actually changed get re-checked.
        LifecycleService::validate_references(
            &mut tx,
            if dto.parent_id.is_some() { parent_id } else { None },
            if dto.class_id.is_some() { class_id } else { None },
        )
        .await?;

        let name = dto.name.unwrap_or(existing.name);
        let age = dto.age.unwrap_or(existing.age);
        let grade = dto.grade.unwrap_or(existing.grade);

        let student = sqlx::query_as::<_, Student>(&format!(
            "UPDATE students SET name = ?, age = ?, grade = ?, parent_id = ?, class_id = ?, \
             updated_at = ? \
             WHERE id = ? AND is_deleted = 0 \
             RETURNING {STUDENT_COLUMNS}"
        ))
        .bind(&name)
        .bind(age)
        .bind(grade)
        .bind(parent_id)
        .bind(class_id)
        .bind(Utc::now())
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn delete_student(db: &SqlitePool, id: i64) -> Result<(), AppError> {
        LifecycleService::soft_delete(db, EntityKind::Student, id).await
    }

    #[instrument(skip(db))]
    pub async fn restore_student(db: &SqlitePool, id: i64) -> Result<Student, AppError> {
        LifecycleService::restore(db, EntityKind::Student, id).await?;
        Self::get_student_by_id(db, id).await
    }
}
