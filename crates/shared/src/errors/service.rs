use crate::errors::transaction::TransactionError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::RepositoryError;

    #[test]
    fn repository_failures_reach_callers_as_transaction_errors() {
        let err: ServiceError =
            TransactionError::Persistence(RepositoryError::Custom("connection reset".into()))
                .into();

        assert!(matches!(
            err,
            ServiceError::Transaction(TransactionError::Persistence(_))
        ));
        assert_eq!(
            err.to_string(),
            "Transaction error: persistence failure: Custom error: connection reset"
        );
    }
}
