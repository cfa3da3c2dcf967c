use crate::{
    domain::requests::{CreateTransactionRecordRequest, UpdateTransactionRecordRequest},
    errors::RepositoryError,
    model::transaction::TransactionModel,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionCommandRepository =
    Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    async fn create(
        &self,
        req: &CreateTransactionRecordRequest,
    ) -> Result<TransactionModel, RepositoryError>;
    /// Only active (non-trashed) rows are updated.
    async fn update(
        &self,
        req: &UpdateTransactionRecordRequest,
    ) -> Result<TransactionModel, RepositoryError>;
    async fn trashed(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError>;
    async fn restore(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError>;
    async fn delete_permanent(&self, transaction_id: i32) -> Result<bool, RepositoryError>;
    async fn restore_all(&self) -> Result<bool, RepositoryError>;
    async fn delete_all(&self) -> Result<bool, RepositoryError>;
}
