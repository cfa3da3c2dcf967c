use crate::{errors::repository::RepositoryError, model::transaction::PaymentStatus};
use std::fmt;
use thiserror::Error;

/// Coarse classification used for logging and metrics labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Validation,
    BusinessRule,
    Persistence,
    Overflow,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::Validation => "validation",
            ErrorKind::BusinessRule => "business_rule",
            ErrorKind::Persistence => "persistence",
            ErrorKind::Overflow => "overflow",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("cashier {0} not found")]
    CashierNotFound(i32),

    #[error("merchant {0} not found")]
    MerchantNotFound(i32),

    #[error("order {0} not found")]
    OrderNotFound(i32),

    #[error("transaction {0} not found")]
    TransactionNotFound(i32),

    #[error("order {0} has no items")]
    EmptyOrderItems(i32),

    #[error("order {order_id} has items with non-positive quantity: {order_item_ids:?}")]
    InvalidOrderItemQuantity {
        order_id: i32,
        order_item_ids: Vec<i32>,
    },

    #[error("insufficient payment: tendered {tendered}, required {total}")]
    InsufficientPayment { tendered: i64, total: i64 },

    #[error("transaction {transaction_id} is {status} and can no longer be modified")]
    PaymentStatusImmutable {
        transaction_id: i32,
        status: PaymentStatus,
    },

    #[error("order total does not fit the amount column")]
    AmountOverflow,

    #[error("persistence failure: {0}")]
    Persistence(#[source] RepositoryError),
}

impl TransactionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TransactionError::CashierNotFound(_)
            | TransactionError::MerchantNotFound(_)
            | TransactionError::OrderNotFound(_)
            | TransactionError::TransactionNotFound(_) => ErrorKind::NotFound,
            TransactionError::EmptyOrderItems(_)
            | TransactionError::InvalidOrderItemQuantity { .. } => ErrorKind::Validation,
            TransactionError::InsufficientPayment { .. }
            | TransactionError::PaymentStatusImmutable { .. } => ErrorKind::BusinessRule,
            TransactionError::AmountOverflow => ErrorKind::Overflow,
            TransactionError::Persistence(_) => ErrorKind::Persistence,
        }
    }

    /// Maps a lookup failure: `NotFound` becomes `not_found`, anything else is a
    /// persistence failure.
    pub fn from_lookup(
        err: RepositoryError,
        not_found: impl FnOnce() -> TransactionError,
    ) -> TransactionError {
        match err {
            RepositoryError::NotFound => not_found(),
            other => TransactionError::Persistence(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_not_found_maps_to_given_variant() {
        let err = TransactionError::from_lookup(RepositoryError::NotFound, || {
            TransactionError::OrderNotFound(9)
        });
        assert!(matches!(err, TransactionError::OrderNotFound(9)));
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn lookup_other_failure_is_persistence() {
        let err = TransactionError::from_lookup(RepositoryError::Custom("boom".into()), || {
            TransactionError::OrderNotFound(9)
        });
        assert!(matches!(err, TransactionError::Persistence(_)));
        assert_eq!(err.kind(), ErrorKind::Persistence);
    }

    #[test]
    fn kinds_cover_business_rules() {
        let insufficient = TransactionError::InsufficientPayment {
            tendered: 1,
            total: 2,
        };
        let immutable = TransactionError::PaymentStatusImmutable {
            transaction_id: 1,
            status: PaymentStatus::Paid,
        };
        assert_eq!(insufficient.kind(), ErrorKind::BusinessRule);
        assert_eq!(immutable.kind(), ErrorKind::BusinessRule);
        assert_eq!(
            TransactionError::EmptyOrderItems(3).kind(),
            ErrorKind::Validation
        );
        assert_eq!(TransactionError::AmountOverflow.kind(), ErrorKind::Overflow);
    }
}
