use crate::model::transaction::PaymentStatus;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct CreateTransactionRequest {
    #[validate(range(min = 1, message = "order_id must be positive"))]
    pub order_id: i32,
    #[validate(range(min = 1, message = "cashier_id must be positive"))]
    pub cashier_id: i32,
    /// Ignored: the merchant is always resolved through the cashier.
    #[serde(default)]
    pub merchant_id: Option<i32>,
    #[validate(length(min = 1, message = "payment_method is required"))]
    pub payment_method: String,
    #[validate(range(min = 0, message = "amount must not be negative"))]
    pub amount: i64,
}

#[derive(Debug, Deserialize, Serialize, Validate, Clone)]
pub struct UpdateTransactionRequest {
    #[validate(range(min = 1, message = "transaction_id must be positive"))]
    pub transaction_id: i32,
    #[validate(range(min = 1, message = "order_id must be positive"))]
    pub order_id: i32,
    #[validate(range(min = 1, message = "cashier_id must be positive"))]
    pub cashier_id: i32,
    /// Ignored: the merchant is always resolved through the cashier.
    #[serde(default)]
    pub merchant_id: Option<i32>,
    #[validate(length(min = 1, message = "payment_method is required"))]
    pub payment_method: String,
    #[validate(range(min = 0, message = "amount must not be negative"))]
    pub amount: i64,
}

/// Row handed to the repository once the pipeline has settled every field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTransactionRecordRequest {
    pub order_id: i32,
    pub cashier_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTransactionRecordRequest {
    pub transaction_id: i32,
    pub order_id: i32,
    pub cashier_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub payment_status: PaymentStatus,
}
