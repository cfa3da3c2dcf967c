use crate::model::transaction::TransactionModel;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub id: i32,
    pub order_id: i32,
    pub cashier_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub payment_status: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponseDeleteAt {
    pub id: i32,
    pub order_id: i32,
    pub cashier_id: i32,
    pub merchant_id: i32,
    pub payment_method: String,
    pub amount: i64,
    pub payment_status: String,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
    #[serde(rename = "deleted_at")]
    pub deleted_at: Option<String>,
}

// model to response
impl From<TransactionModel> for TransactionResponse {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.transaction_id,
            order_id: model.order_id,
            cashier_id: model.cashier_id,
            merchant_id: model.merchant_id,
            payment_method: model.payment_method,
            amount: model.amount,
            payment_status: model.payment_status,
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
        }
    }
}

impl From<TransactionModel> for TransactionResponseDeleteAt {
    fn from(model: TransactionModel) -> Self {
        Self {
            id: model.transaction_id,
            order_id: model.order_id,
            cashier_id: model.cashier_id,
            merchant_id: model.merchant_id,
            payment_method: model.payment_method,
            amount: model.amount,
            payment_status: model.payment_status,
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
            deleted_at: model.deleted_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::responses::ApiResponse;
    use chrono::NaiveDate;

    fn model() -> TransactionModel {
        let created = NaiveDate::from_ymd_opt(2025, 1, 2)
            .and_then(|d| d.and_hms_opt(10, 30, 0))
            .unwrap();
        TransactionModel {
            transaction_id: 9,
            order_id: 11,
            cashier_id: 3,
            merchant_id: 7,
            payment_method: "cash".into(),
            amount: 27_750,
            payment_status: "success".into(),
            created_at: Some(created),
            updated_at: None,
            deleted_at: None,
        }
    }

    #[test]
    fn response_serializes_with_transaction_id_as_id() {
        let response = ApiResponse::success("ok", TransactionResponse::from(model()));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "success");
        assert_eq!(json["data"]["id"], 9);
        assert_eq!(json["data"]["amount"], 27_750);
        assert_eq!(json["data"]["created_at"], "2025-01-02 10:30:00");
        assert!(json["data"]["updated_at"].is_null());
    }

    #[test]
    fn trashed_response_carries_deleted_at() {
        let mut trashed = model();
        trashed.deleted_at = trashed.created_at;

        let response = TransactionResponseDeleteAt::from(trashed);

        assert_eq!(response.deleted_at.as_deref(), Some("2025-01-02 10:30:00"));
    }
}
