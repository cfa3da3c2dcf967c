use crate::{
    abstract_trait::transaction::repository::command::TransactionCommandRepositoryTrait,
    config::ConnectionPool,
    domain::requests::{CreateTransactionRecordRequest, UpdateTransactionRecordRequest},
    errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn create(
        &self,
        req: &CreateTransactionRecordRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, TransactionModel>(
            r#"
            INSERT INTO transactions (
                order_id,
                cashier_id,
                merchant_id,
                payment_method,
                amount,
                payment_status,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, CURRENT_TIMESTAMP, CURRENT_TIMESTAMP)
            RETURNING
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
            "#,
        )
        .bind(req.order_id)
        .bind(req.cashier_id)
        .bind(req.merchant_id)
        .bind(&req.payment_method)
        .bind(req.amount)
        .bind(req.payment_status.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during transaction creation: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn update(
        &self,
        req: &UpdateTransactionRecordRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, TransactionModel>(
            r#"
            UPDATE transactions
            SET
                order_id = $2,
                cashier_id = $3,
                merchant_id = $4,
                payment_method = $5,
                amount = $6,
                payment_status = $7,
                updated_at = CURRENT_TIMESTAMP
            WHERE transaction_id = $1 AND deleted_at IS NULL
            RETURNING
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
            "#,
        )
        .bind(req.transaction_id)
        .bind(req.order_id)
        .bind(req.cashier_id)
        .bind(req.merchant_id)
        .bind(&req.payment_method)
        .bind(req.amount)
        .bind(req.payment_status.as_str())
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during transaction update: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn trashed(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, TransactionModel>(
            r#"
            UPDATE transactions
            SET deleted_at = CURRENT_TIMESTAMP
            WHERE transaction_id = $1 AND deleted_at IS NULL
            RETURNING
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
            "#,
        )
        .bind(transaction_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during soft delete (trash): {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn restore(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let record = sqlx::query_as::<_, TransactionModel>(
            r#"
            UPDATE transactions
            SET deleted_at = NULL
            WHERE transaction_id = $1 AND deleted_at IS NOT NULL
            RETURNING
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
            "#,
        )
        .bind(transaction_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during restore: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(record)
    }

    async fn delete_permanent(&self, transaction_id: i32) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE transaction_id = $1 AND deleted_at IS NOT NULL
            "#,
        )
        .bind(transaction_id)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during permanent delete: {e:?}");
            RepositoryError::from(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(true)
    }

    async fn restore_all(&self) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            UPDATE transactions
            SET deleted_at = NULL
            WHERE deleted_at IS NOT NULL
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during restore all: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<bool, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query(
            r#"
            DELETE FROM transactions
            WHERE deleted_at IS NOT NULL
            "#,
        )
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Database error during delete all permanent: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(result.rows_affected() > 0)
    }
}
