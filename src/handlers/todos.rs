use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::debug;

use crate::db::models::{Filter, Todo};
use crate::error::TodoError;
use crate::middleware::ResponseMode;
use crate::render;
use crate::router::TodoState;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub filter: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub title: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct MethodOverride {
    #[serde(rename = "_method", default)]
    pub method: Option<String>,
}

/// JSON shape shared by every list-returning operation.
#[derive(Debug, Serialize)]
pub struct TodoPage {
    pub todos: Vec<Todo>,
    pub active_count: i64,
}

pub async fn list_todos(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Query(params): Query<ListParams>,
) -> Result<Response, TodoError> {
    let filter = Filter::parse(params.filter.as_deref());
    let todos = state.storage.list(filter).await?;
    let active_count = state.storage.count_active().await?;

    Ok(match mode {
        ResponseMode::Fragment => {
            Html(render::todo_list_content(&todos, filter, active_count)).into_response()
        }
        ResponseMode::Navigate => {
            Html(render::todo_page(&todos, filter, active_count)).into_response()
        }
        ResponseMode::Json => Json(TodoPage { todos, active_count }).into_response(),
    })
}

pub async fn create_todo(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Form(form): Form<TodoForm>,
) -> Result<Response, TodoError> {
    if form.title.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    let todo = state.storage.insert(&form.title).await?;
    debug!(id = todo.id, "created todo");

    Ok(match mode {
        ResponseMode::Fragment => {
            let todos = state.storage.list(Filter::All).await?;
            let active_count = state.storage.count_active().await?;
            (
                StatusCode::CREATED,
                Html(render::todo_list_content(&todos, Filter::All, active_count)),
            )
                .into_response()
        }
        ResponseMode::Navigate => Redirect::to("/").into_response(),
        ResponseMode::Json => (StatusCode::CREATED, Json(todo)).into_response(),
    })
}

pub async fn edit_todo(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Path(id): Path<i64>,
) -> Result<Response, TodoError> {
    let todo = state.storage.get(id).await?;
    Ok(if mode.wants_html() {
        Html(render::todo_edit(&todo)).into_response()
    } else {
        Json(todo).into_response()
    })
}

pub async fn update_todo(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Path(id): Path<i64>,
    Form(form): Form<TodoForm>,
) -> Result<Response, TodoError> {
    if form.title.is_empty() {
        return Err(TodoError::EmptyTitle);
    }
    state.storage.update_title(id, &form.title).await?;

    Ok(match mode {
        ResponseMode::Fragment => {
            let todo = state.storage.get(id).await?;
            Html(render::todo_item(&todo)).into_response()
        }
        ResponseMode::Navigate => Redirect::to("/").into_response(),
        ResponseMode::Json => {
            let todo = state.storage.get(id).await?;
            Json(todo).into_response()
        }
    })
}

pub async fn delete_todo(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Path(id): Path<i64>,
) -> Result<Response, TodoError> {
    state.storage.delete(id).await?;
    debug!(id, "deleted todo");
    refreshed_list(&state, mode).await
}

pub async fn toggle_todo(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Path(id): Path<i64>,
) -> Result<Response, TodoError> {
    let todo = state.storage.toggle(id).await?;
    debug!(id = todo.id, completed = todo.completed, "toggled todo");
    refreshed_list(&state, mode).await
}

/// `POST /todos/completed` only acts when the form carries the
/// `_method=DELETE` override; anything else falls through to 404.
pub async fn clear_completed(
    State(state): State<TodoState>,
    mode: ResponseMode,
    Form(form): Form<MethodOverride>,
) -> Result<Response, TodoError> {
    if form.method.as_deref() != Some("DELETE") {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "unsupported method override"})),
        )
            .into_response());
    }
    let removed = state.storage.delete_completed().await?;
    debug!(removed, "cleared completed todos");
    refreshed_list(&state, mode).await
}

/// Mutations answer with the refreshed unfiltered list, except full-page
/// form posts, which bounce back to the list view.
async fn refreshed_list(state: &TodoState, mode: ResponseMode) -> Result<Response, TodoError> {
    if mode == ResponseMode::Navigate {
        return Ok(Redirect::to("/").into_response());
    }
    let todos = state.storage.list(Filter::All).await?;
    let active_count = state.storage.count_active().await?;
    Ok(match mode {
        ResponseMode::Fragment => {
            Html(render::todo_list_content(&todos, Filter::All, active_count)).into_response()
        }
        _ => Json(TodoPage { todos, active_count }).into_response(),
    })
}
