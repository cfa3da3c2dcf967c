use crate::{
    abstract_trait::transaction::repository::query::DynTransactionQueryRepository,
    errors::{RepositoryError, TransactionError},
    model::transaction::TransactionModel,
};
use tracing::{error, warn};

/// Rejects updates of trashed transactions and of those whose payment already
/// settled.
pub struct ImmutabilityGuard {
    query: DynTransactionQueryRepository,
}

impl ImmutabilityGuard {
    pub fn new(query: DynTransactionQueryRepository) -> Self {
        Self { query }
    }

    pub async fn ensure_mutable(
        &self,
        transaction_id: i32,
    ) -> Result<TransactionModel, TransactionError> {
        let existing = self.query.find_by_id(transaction_id).await.map_err(|e| {
            TransactionError::from_lookup(e, || {
                TransactionError::TransactionNotFound(transaction_id)
            })
        })?;

        check_mutable(&existing)?;

        Ok(existing)
    }
}

fn check_mutable(existing: &TransactionModel) -> Result<(), TransactionError> {
    let transaction_id = existing.transaction_id;

    if existing.deleted_at.is_some() {
        warn!("Rejecting update of trashed transaction {transaction_id}");
        return Err(TransactionError::TransactionNotFound(transaction_id));
    }

    let status = existing.status().map_err(|e| {
        error!("Transaction {transaction_id} has an unreadable status: {e}");
        TransactionError::Persistence(RepositoryError::Custom(format!(
            "transaction {transaction_id}: {e}"
        )))
    })?;

    if status.is_terminal() {
        warn!("Rejecting update of transaction {transaction_id} in terminal status {status}");
        return Err(TransactionError::PaymentStatusImmutable {
            transaction_id,
            status,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::transaction::PaymentStatus;

    fn transaction(status: &str) -> TransactionModel {
        TransactionModel {
            transaction_id: 5,
            order_id: 1,
            cashier_id: 1,
            merchant_id: 1,
            payment_method: "cash".into(),
            amount: 1_110,
            payment_status: status.into(),
            created_at: None,
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn terminal_statuses_are_frozen() {
        for status in ["paid", "refunded"] {
            let err = check_mutable(&transaction(status)).unwrap_err();
            assert!(matches!(
                err,
                TransactionError::PaymentStatusImmutable {
                    transaction_id: 5,
                    ..
                }
            ));
        }
    }

    #[test]
    fn open_statuses_may_change() {
        for status in ["pending", "success", "failed"] {
            assert!(check_mutable(&transaction(status)).is_ok(), "{status}");
        }
        assert_eq!(transaction("success").status(), Ok(PaymentStatus::Success));
    }

    #[test]
    fn trashed_transaction_is_not_found() {
        let mut trashed = transaction("success");
        trashed.deleted_at = Some(chrono::Utc::now().naive_utc());

        let err = check_mutable(&trashed).unwrap_err();
        assert!(matches!(err, TransactionError::TransactionNotFound(5)));
    }

    #[test]
    fn unreadable_status_fails_closed() {
        let err = check_mutable(&transaction("settled")).unwrap_err();
        assert!(matches!(
            err,
            TransactionError::Persistence(RepositoryError::Custom(_))
        ));
    }
}
