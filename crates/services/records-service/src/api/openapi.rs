//! OpenAPI documentation, served as JSON at `/api-docs/openapi.json`.

use axum::response::Json;
use utoipa::OpenApi;

use crate::api::handlers::{offer_handler, order_handler, user_handler};
use domain::{Offer, Order, User};

/// OpenAPI documentation for the records service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Records Service",
        version = "0.1.0",
        description = "Create, read, replace and delete users, orders and offers"
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user,
        user_handler::create_user,
        user_handler::update_user,
        user_handler::delete_user,
        order_handler::list_orders,
        order_handler::get_order,
        order_handler::create_order,
        order_handler::update_order,
        order_handler::delete_order,
        offer_handler::list_offers,
        offer_handler::get_offer,
        offer_handler::create_offer,
        offer_handler::update_offer,
        offer_handler::delete_offer,
    ),
    components(schemas(User, Order, Offer)),
    tags(
        (name = "Users", description = "Customers and executors"),
        (name = "Orders", description = "Work placed by customers"),
        (name = "Offers", description = "Executor bids on orders")
    )
)]
pub struct ApiDoc;

/// Serve the generated document.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
