//! Order handlers.
//!
//! Dates travel as `MM/DD/YYYY` text in both directions.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::Order;

use super::crud::{self, Confirmation, Resource};
use crate::api::extractors::{JsonBody, RecordId};
use crate::api::AppState;

const ORDER: Resource = Resource {
    name: "order",
    created: "successfully added a new order",
    updated: "successfully updated order",
    deleted: "successfully deleted order",
};

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/orders/", get(list_orders).post(create_order))
        .route("/orders", get(list_orders).post(create_order))
        .route(
            "/orders/:id",
            get(get_order).put(update_order).delete(delete_order),
        )
}

/// List all orders
#[utoipa::path(
    get,
    path = "/orders/",
    tag = "Orders",
    responses(
        (status = 200, description = "Every order, ordered by id", body = Vec<Order>)
    )
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    crud::list(state.orders.as_ref()).await
}

/// Get order by id
#[utoipa::path(
    get,
    path = "/orders/{id}",
    tag = "Orders",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 200, description = "One-element array holding the order", body = Vec<Order>),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn get_order(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Vec<Order>>> {
    crud::fetch(state.orders.as_ref(), id).await
}

/// Create order with a client-supplied id
#[utoipa::path(
    post,
    path = "/orders/",
    tag = "Orders",
    request_body = Order,
    responses(
        (status = 200, description = "Order created", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body or missing field"),
        (status = 409, description = "Duplicate id or dangling reference")
    )
)]
pub async fn create_order(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Order>,
) -> AppResult<Confirmation> {
    crud::create(state.orders.as_ref(), ORDER, payload).await
}

/// Replace every field of an order, the id included.
///
/// Renaming an order's id carries its offers along (`ON UPDATE CASCADE`).
#[utoipa::path(
    put,
    path = "/orders/{id}",
    tag = "Orders",
    params(
        ("id" = i32, Path, description = "Current order id")
    ),
    request_body = Order,
    responses(
        (status = 201, description = "Order updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body, missing field or bad id"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "New id already taken or dangling reference")
    )
)]
pub async fn update_order(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<Order>,
) -> AppResult<Confirmation> {
    crud::replace(state.orders.as_ref(), ORDER, id, payload).await
}

/// Delete order
#[utoipa::path(
    delete,
    path = "/orders/{id}",
    tag = "Orders",
    params(
        ("id" = i32, Path, description = "Order id")
    ),
    responses(
        (status = 201, description = "Order deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is still referenced")
    )
)]
pub async fn delete_order(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Confirmation> {
    crud::remove(state.orders.as_ref(), ORDER, id).await
}
