use crate::{
    abstract_trait::{
        cashier::repository::query::DynCashierQueryRepository,
        merchant::repository::query::DynMerchantQueryRepository,
        order::repository::query::DynOrderQueryRepository,
    },
    errors::TransactionError,
    model::{cashier::CashierModel, merchant::MerchantModel, order::OrderModel},
};

/// Cashier together with the merchant it belongs to.
#[derive(Debug, Clone)]
pub struct ResolvedParty {
    pub cashier: CashierModel,
    pub merchant: MerchantModel,
}

impl ResolvedParty {
    pub fn merchant_id(&self) -> i32 {
        self.merchant.merchant_id
    }
}

/// Read-only lookups of the entities a transaction points at.
pub struct ReferenceResolver {
    cashier_query: DynCashierQueryRepository,
    merchant_query: DynMerchantQueryRepository,
    order_query: DynOrderQueryRepository,
}

impl ReferenceResolver {
    pub fn new(
        cashier_query: DynCashierQueryRepository,
        merchant_query: DynMerchantQueryRepository,
        order_query: DynOrderQueryRepository,
    ) -> Self {
        Self {
            cashier_query,
            merchant_query,
            order_query,
        }
    }

    /// Resolves the cashier, then the merchant named by the cashier record.
    pub async fn resolve_party(&self, cashier_id: i32) -> Result<ResolvedParty, TransactionError> {
        let cashier = self
            .cashier_query
            .find_by_id(cashier_id)
            .await
            .map_err(|e| {
                TransactionError::from_lookup(e, || TransactionError::CashierNotFound(cashier_id))
            })?;

        let merchant_id = cashier.merchant_id;
        let merchant = self
            .merchant_query
            .find_by_id(merchant_id)
            .await
            .map_err(|e| {
                TransactionError::from_lookup(e, || TransactionError::MerchantNotFound(merchant_id))
            })?;

        Ok(ResolvedParty { cashier, merchant })
    }

    pub async fn resolve_order(&self, order_id: i32) -> Result<OrderModel, TransactionError> {
        self.order_query.find_by_id(order_id).await.map_err(|e| {
            TransactionError::from_lookup(e, || TransactionError::OrderNotFound(order_id))
        })
    }
}
