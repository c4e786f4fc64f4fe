use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_student, delete_student, get_student_by_id, get_students, restore_student,
    update_student_full, update_student_partial,
};

pub fn init_students_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_student).get(get_students))
        .route(
            "/{id}",
            get(get_student_by_id)
                .put(update_student_full)
                .patch(update_student_partial)
                .delete(delete_student),
        )
        .route("/{id}/restore", post(restore_student))
}
