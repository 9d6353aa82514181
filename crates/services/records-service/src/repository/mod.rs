//! Repository layer for data access.
//!
//! One generic store serves all three tables; see [`RecordStore`].

pub mod entities;
mod record_store;

pub use record_store::{insert_all, RecordRepository, RecordStore};

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use record_store::MockRecordRepository;

use domain::{Offer, Order, User};

/// Store for the `user` table
pub type UserStore = RecordStore<entities::user::ActiveModel>;

/// Store for the `order` table
pub type OrderStore = RecordStore<entities::order::ActiveModel>;

/// Store for the `offer` table
pub type OfferStore = RecordStore<entities::offer::ActiveModel>;

/// Repository handles as seen by the API layer
pub type UserRepository = dyn RecordRepository<User>;
pub type OrderRepository = dyn RecordRepository<Order>;
pub type OfferRepository = dyn RecordRepository<Offer>;
