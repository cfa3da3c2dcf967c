use crate::{errors::RepositoryError, model::transaction::TransactionModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    /// Finds a transaction whether or not it is trashed.
    async fn find_by_id(&self, transaction_id: i32) -> Result<TransactionModel, RepositoryError>;
}
