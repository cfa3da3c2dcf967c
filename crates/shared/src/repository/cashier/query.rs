use crate::{
    abstract_trait::cashier::repository::query::CashierQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::cashier::CashierModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct CashierQueryRepository {
    db: ConnectionPool,
}

impl CashierQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CashierQueryRepositoryTrait for CashierQueryRepository {
    async fn find_by_id(&self, cashier_id: i32) -> Result<CashierModel, RepositoryError> {
        sqlx::query_as::<_, CashierModel>(
            r#"
            SELECT
                cashier_id,
                merchant_id,
                user_id,
                name,
                created_at,
                updated_at,
                deleted_at
            FROM cashiers
            WHERE cashier_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(cashier_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if !matches!(e, sqlx::Error::RowNotFound) {
                error!("❌ Failed to fetch cashier {cashier_id}: {e:?}");
            }
            RepositoryError::from(e)
        })
    }
}
