//! HTTP request handlers.

pub mod crud;
pub mod health_handler;
pub mod offer_handler;
pub mod order_handler;
pub mod user_handler;

pub use health_handler::health_routes;
pub use offer_handler::offer_routes;
pub use order_handler::order_routes;
pub use user_handler::user_routes;
