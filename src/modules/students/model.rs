use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Students reference their parent and class by id only; responses stay flat
/// instead of embedding the related records.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub age: i64,
    pub grade: i64,
    pub parent_id: Option<i64>,
    pub class_id: Option<i64>,
    pub is_deleted: bool,
    pub deleted_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateStudentDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: String,
    #[validate(range(min = 6, max = 18, message = "age must be between 6 and 18"))]
    pub age: i64,
    #[validate(range(min = 1, max = 12, message = "grade must be between 1 and 12"))]
    pub grade: i64,
    pub parent_id: Option<i64>,
    pub class_id: Option<i64>,
}

/// `parent_id`/`class_id` use a double `Option` so a PATCH can distinguish
/// "leave the reference alone" (absent) from "detach it" (explicit null).
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateStudentDto {
    #[validate(length(min = 1, max = 100, message = "name must be 1-100 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 6, max = 18, message = "age must be between 6 and 18"))]
    pub age: Option<i64>,
    #[validate(range(min = 1, max = 12, message = "grade must be between 1 and 12"))]
    pub grade: Option<i64>,
    #[serde(default, deserialize_with = "crate::utils::serde::double_option")]
    pub parent_id: Option<Option<i64>>,
    #[serde(default, deserialize_with = "crate::utils::serde::double_option")]
    pub class_id: Option<Option<i64>>,
}
