//! Offer database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Offer;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "offer")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub order_id: i32,
    pub executor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Offer {
    fn from(model: Model) -> Self {
        Offer {
            id: model.id,
            executor_id: model.executor_id,
            order_id: model.order_id,
        }
    }
}

impl From<Offer> for ActiveModel {
    fn from(offer: Offer) -> Self {
        ActiveModel {
            id: Set(offer.id),
            order_id: Set(offer.order_id),
            executor_id: Set(offer.executor_id),
        }
    }
}
