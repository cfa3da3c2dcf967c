use crate::{
    abstract_trait::transaction::repository::query::TransactionQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_by_id(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError> {
        sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT
                transaction_id,
                order_id,
                cashier_id,
                merchant_id,
                payment_method,
                amount,
                payment_status,
                created_at,
                updated_at,
                deleted_at
            FROM transactions
            WHERE transaction_id = $1
            "#,
        )
        .bind(transaction_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if !matches!(e, sqlx::Error::RowNotFound) {
                error!("❌ Failed to fetch transaction {transaction_id}: {e:?}");
            }
            RepositoryError::from(e)
        })
    }
}
