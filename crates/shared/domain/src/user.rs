//! User record.

use serde::{Deserialize, Serialize};

/// A person that places orders (customer) or fulfils them (executor).
///
/// Every field is required on create and replace; `id` is assigned by the
/// client, not by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Unique user identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    #[cfg_attr(feature = "openapi", schema(example = "Ivan"))]
    pub first_name: String,
    #[cfg_attr(feature = "openapi", schema(example = "Petrov"))]
    pub last_name: String,
    #[cfg_attr(feature = "openapi", schema(example = 34))]
    pub age: i32,
    #[cfg_attr(feature = "openapi", schema(example = "ivan@example.com"))]
    pub email: String,
    /// Free-form role label, e.g. "customer" or "executor"
    #[cfg_attr(feature = "openapi", schema(example = "customer"))]
    pub role: String,
    #[cfg_attr(feature = "openapi", schema(example = "+79990000001"))]
    pub phone: String,
}
