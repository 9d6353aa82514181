//! Offer record.

use serde::{Deserialize, Serialize};

/// An executor's bid on an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Offer {
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i32,
    /// References `User::id`
    pub executor_id: i32,
    /// References `Order::id`
    pub order_id: i32,
}
