//! User handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::User;

use super::crud::{self, Confirmation, Resource};
use crate::api::extractors::{JsonBody, RecordId};
use crate::api::AppState;

const USER: Resource = Resource {
    name: "user",
    created: "successfully created a new user",
    updated: "successfully updated user",
    deleted: "successfully deleted user",
};

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/", get(list_users).post(create_user))
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List all users
#[utoipa::path(
    get,
    path = "/users/",
    tag = "Users",
    responses(
        (status = 200, description = "Every user, ordered by id", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    crud::list(state.users.as_ref()).await
}

/// Get user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "One-element array holding the user", body = Vec<User>),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Vec<User>>> {
    crud::fetch(state.users.as_ref(), id).await
}

/// Create user with a client-supplied id
#[utoipa::path(
    post,
    path = "/users/",
    tag = "Users",
    request_body = User,
    responses(
        (status = 200, description = "User created", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body or missing field"),
        (status = 409, description = "Duplicate id or dangling reference")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<User>,
) -> AppResult<Confirmation> {
    crud::create(state.users.as_ref(), USER, payload).await
}

/// Replace every field of a user, the id included
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "Current user id")
    ),
    request_body = User,
    responses(
        (status = 201, description = "User updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body, missing field or bad id"),
        (status = 404, description = "User not found"),
        (status = 409, description = "New id already taken or dangling reference")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<User>,
) -> AppResult<Confirmation> {
    crud::replace(state.users.as_ref(), USER, id, payload).await
}

/// Delete user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User id")
    ),
    responses(
        (status = 201, description = "User deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User is still referenced")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Confirmation> {
    crud::remove(state.users.as_ref(), USER, id).await
}
