//! Domain-level constants.

// =============================================================================
// Dates
// =============================================================================

/// Textual date format used on the wire and in seed files (month/day/year)
pub const DATE_FORMAT: &str = "%m/%d/%Y";

// =============================================================================
// Seed files
// =============================================================================

/// File holding the seed users
pub const USERS_SEED_FILE: &str = "users.json";

/// File holding the seed orders
pub const ORDERS_SEED_FILE: &str = "orders.json";

/// File holding the seed offers
pub const OFFERS_SEED_FILE: &str = "offers.json";
