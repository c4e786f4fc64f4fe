use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_parent, delete_parent, get_parent_by_id, get_parents, restore_parent,
    update_parent_full, update_parent_partial,
};

pub fn init_parents_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_parent).get(get_parents))
        .route(
            "/{id}",
            get(get_parent_by_id)
                .put(update_parent_full)
                .patch(update_parent_partial)
                .delete(delete_parent),
        )
        .route("/{id}/restore", post(restore_parent))
}
