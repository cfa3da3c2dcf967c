use crate::{
    abstract_trait::order_item::repository::query::OrderItemQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::order_item::OrderItemModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct OrderItemQueryRepository {
    db: ConnectionPool,
}

impl OrderItemQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OrderItemQueryRepositoryTrait for OrderItemQueryRepository {
    async fn find_order_item_by_order(
        &self,
        order_id: i32,
    ) -> Result<Vec<OrderItemModel>, RepositoryError> {
        let items = sqlx::query_as::<_, OrderItemModel>(
            r#"
            SELECT
                order_item_id,
                order_id,
                product_id,
                quantity,
                price,
                created_at,
                updated_at,
                deleted_at
            FROM order_items
            WHERE order_id = $1 AND deleted_at IS NULL
            ORDER BY order_item_id
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch items of order {order_id}: {e:?}");
            RepositoryError::from(e)
        })?;

        info!("Fetched {} items for order {order_id}", items.len());

        Ok(items)
    }
}
