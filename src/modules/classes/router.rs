use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_class, delete_class, get_class_by_id, get_classes, restore_class, update_class_full,
    update_class_partial,
};

pub fn init_classes_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_class).get(get_classes))
        .route(
            "/{id}",
            get(get_class_by_id)
                .put(update_class_full)
                .patch(update_class_partial)
                .delete(delete_class),
        )
        .route("/{id}/restore", post(restore_class))
}
