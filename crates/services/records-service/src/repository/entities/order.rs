//! Order database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Order;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "order")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub start_date: Date,
    pub end_date: Date,
    pub price: i32,
    pub customer_id: i32,
    pub executor_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Order {
            id: model.id,
            name: model.name,
            description: model.description,
            start_date: model.start_date,
            end_date: model.end_date,
            price: model.price,
            customer_id: model.customer_id,
            executor_id: model.executor_id,
        }
    }
}

impl From<Order> for ActiveModel {
    fn from(order: Order) -> Self {
        ActiveModel {
            id: Set(order.id),
            name: Set(order.name),
            description: Set(order.description),
            start_date: Set(order.start_date),
            end_date: Set(order.end_date),
            price: Set(order.price),
            customer_id: Set(order.customer_id),
            executor_id: Set(order.executor_id),
        }
    }
}
