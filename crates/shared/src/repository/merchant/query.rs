use crate::{
    abstract_trait::merchant::repository::query::MerchantQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::merchant::MerchantModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct MerchantQueryRepository {
    db: ConnectionPool,
}

impl MerchantQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl MerchantQueryRepositoryTrait for MerchantQueryRepository {
    async fn find_by_id(&self, merchant_id: i32) -> Result<MerchantModel, RepositoryError> {
        sqlx::query_as::<_, MerchantModel>(
            r#"
            SELECT
                merchant_id,
                user_id,
                name,
                description,
                status,
                created_at,
                updated_at,
                deleted_at
            FROM merchants
            WHERE merchant_id = $1 AND deleted_at IS NULL
            "#,
        )
        .bind(merchant_id)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if !matches!(e, sqlx::Error::RowNotFound) {
                error!("❌ Failed to fetch merchant {merchant_id}: {e:?}");
            }
            RepositoryError::from(e)
        })
    }
}
