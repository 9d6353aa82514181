//! Offer handlers.

use axum::{extract::State, response::Json, routing::get, Router};

use common::AppResult;
use domain::Offer;

use super::crud::{self, Confirmation, Resource};
use crate::api::extractors::{JsonBody, RecordId};
use crate::api::AppState;

const OFFER: Resource = Resource {
    name: "offer",
    created: "successfully added a new offer",
    updated: "successfully updated offer",
    deleted: "successfully deleted offer",
};

pub fn offer_routes() -> Router<AppState> {
    Router::new()
        .route("/offers/", get(list_offers).post(create_offer))
        .route("/offers", get(list_offers).post(create_offer))
        .route(
            "/offers/:id",
            get(get_offer).put(update_offer).delete(delete_offer),
        )
}

/// List all offers
#[utoipa::path(
    get,
    path = "/offers/",
    tag = "Offers",
    responses(
        (status = 200, description = "Every offer, ordered by id", body = Vec<Offer>)
    )
)]
pub async fn list_offers(State(state): State<AppState>) -> AppResult<Json<Vec<Offer>>> {
    crud::list(state.offers.as_ref()).await
}

/// Get offer by id
#[utoipa::path(
    get,
    path = "/offers/{id}",
    tag = "Offers",
    params(
        ("id" = i32, Path, description = "Offer id")
    ),
    responses(
        (status = 200, description = "One-element array holding the offer", body = Vec<Offer>),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Offer not found")
    )
)]
pub async fn get_offer(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Json<Vec<Offer>>> {
    crud::fetch(state.offers.as_ref(), id).await
}

/// Create offer
#[utoipa::path(
    post,
    path = "/offers/",
    tag = "Offers",
    request_body = Offer,
    responses(
        (status = 200, description = "Offer created", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body or missing field"),
        (status = 409, description = "Duplicate id or dangling reference")
    )
)]
pub async fn create_offer(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<Offer>,
) -> AppResult<Confirmation> {
    crud::create(state.offers.as_ref(), OFFER, payload).await
}

/// Replace an offer
#[utoipa::path(
    put,
    path = "/offers/{id}",
    tag = "Offers",
    params(
        ("id" = i32, Path, description = "Current offer id")
    ),
    request_body = Offer,
    responses(
        (status = 201, description = "Offer updated", body = String, content_type = "text/plain"),
        (status = 400, description = "Malformed body, missing field or bad id"),
        (status = 404, description = "Offer not found"),
        (status = 409, description = "New id already taken or dangling reference")
    )
)]
pub async fn update_offer(
    State(state): State<AppState>,
    RecordId(id): RecordId,
    JsonBody(payload): JsonBody<Offer>,
) -> AppResult<Confirmation> {
    crud::replace(state.offers.as_ref(), OFFER, id, payload).await
}

/// Delete offer
#[utoipa::path(
    delete,
    path = "/offers/{id}",
    tag = "Offers",
    params(
        ("id" = i32, Path, description = "Offer id")
    ),
    responses(
        (status = 201, description = "Offer deleted", body = String, content_type = "text/plain"),
        (status = 400, description = "Id is not an integer"),
        (status = 404, description = "Offer not found"),
        (status = 409, description = "Offer is still referenced")
    )
)]
pub async fn delete_offer(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> AppResult<Confirmation> {
    crud::remove(state.offers.as_ref(), OFFER, id).await
}
