use crate::{errors::RepositoryError, model::order::OrderModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryRepository = Arc<dyn OrderQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryRepositoryTrait {
    async fn find_by_id(&self, order_id: i32) -> Result<OrderModel, RepositoryError>;
}
