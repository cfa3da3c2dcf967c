use crate::{
    abstract_trait::order::repository::query::OrderQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::order::OrderModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct OrderQueryRepository {
    db: ConnectionPool,
}

impl OrderQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderQueryRepositoryTrait for OrderQueryRepository {
    async fn find_by_id(&self, order_id: i32) -> Result<OrderModel, RepositoryError> {
        sqlx::query_as::<_, OrderModel>(
            r#"
            SELECT
                order_id,
                merchant_id,
                cashier_id,
                total_price,
                created_at,
                updated_at,
                deleted_at
            FROM orders
            WHERE order_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(order_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if !matches!(e, sqlx::Error::RowNotFound) {
                error!("❌ Failed to fetch order {order_id}: {e:?}");
            }
            RepositoryError::from(e)
        })
    }
}
