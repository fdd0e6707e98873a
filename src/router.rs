use axum::Router;
use axum::routing::{get, patch, post};

use crate::db::TodoStorage;
use crate::handlers::todos;

#[derive(Clone)]
pub struct TodoState {
    pub storage: TodoStorage,
}

impl TodoState {
    pub fn new(storage: TodoStorage) -> Self {
        Self { storage }
    }
}

pub fn todo_router(state: TodoState) -> Router {
    Router::new()
        .route("/", get(todos::list_todos))
        .route("/todos", post(todos::create_todo))
        .route("/todos/{id}/edit", get(todos::edit_todo))
        .route(
            "/todos/{id}",
            patch(todos::update_todo).delete(todos::delete_todo),
        )
        .route("/todos/{id}/toggle", post(todos::toggle_todo))
        .route("/todos/completed", post(todos::clear_completed))
        .with_state(state)
}
