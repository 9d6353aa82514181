//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain records.

pub mod offer;
pub mod order;
pub mod user;

use sea_orm::EntityTrait;

/// A table keyed by a single client-assigned integer `id` column.
pub trait KeyedTable: EntityTrait {
    fn id_column() -> Self::Column;
}

impl KeyedTable for user::Entity {
    fn id_column() -> Self::Column {
        user::Column::Id
    }
}

impl KeyedTable for order::Entity {
    fn id_column() -> Self::Column {
        order::Column::Id
    }
}

impl KeyedTable for offer::Entity {
    fn id_column() -> Self::Column {
        offer::Column::Id
    }
}
