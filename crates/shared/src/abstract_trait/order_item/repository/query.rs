use crate::{errors::RepositoryError, model::order_item::OrderItemModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderItemQueryRepository = Arc<dyn OrderItemQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderItemQueryRepositoryTrait {
    /// Active line items of an order, ordered by `order_item_id`.
    async fn find_order_item_by_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderItemModel>, RepositoryError>;
}
