//! Domain layer - Core record types and value objects.
//!
//! This crate contains the three record types exposed by the service and
//! the date format they share. No infrastructure dependencies.

pub mod constants;
pub mod dates;
pub mod error;
pub mod offer;
pub mod order;
pub mod user;

pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use offer::Offer;
pub use order::Order;
pub use user::User;
