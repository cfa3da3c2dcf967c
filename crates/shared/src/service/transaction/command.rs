use crate::{
    abstract_trait::{
        cashier::repository::query::DynCashierQueryRepository,
        merchant::repository::query::DynMerchantQueryRepository,
        observer::DynObserver,
        order::repository::query::DynOrderQueryRepository,
        order_item::repository::query::DynOrderItemQueryRepository,
        transaction::{
            repository::{
                command::DynTransactionCommandRepository, query::DynTransactionQueryRepository,
            },
            service::command::TransactionCommandServiceTrait,
        },
    },
    domain::{
        requests::{
            CreateTransactionRecordRequest, CreateTransactionRequest,
            UpdateTransactionRecordRequest, UpdateTransactionRequest,
        },
        responses::{ApiResponse, TransactionResponse, TransactionResponseDeleteAt},
    },
    errors::{ErrorKind, RepositoryError, ServiceError, TransactionError, format_validation_errors},
    model::transaction::TransactionModel,
    service::transaction::{
        guard::ImmutabilityGuard,
        order_items::OrderItemAggregator,
        pricing::{Settlement, calculate_tax, reconcile_payment},
        reference::{ReferenceResolver, ResolvedParty},
        stage::PipelineStage,
    },
    utils::{Method, TracingContext},
};
use anyhow::Result;
use async_trait::async_trait;
use opentelemetry::KeyValue;
use tracing::{error, info, warn};
use validator::Validate;

pub struct TransactionCommandServiceDeps {
    pub cashier_query: DynCashierQueryRepository,
    pub merchant_query: DynMerchantQueryRepository,
    pub order_query: DynOrderQueryRepository,
    pub order_item_query: DynOrderItemQueryRepository,
    pub query: DynTransactionQueryRepository,
    pub command: DynTransactionCommandRepository,
    pub observer: DynObserver,
}

pub struct TransactionCommandService {
    references: ReferenceResolver,
    order_items: OrderItemAggregator,
    guard: ImmutabilityGuard,
    command: DynTransactionCommandRepository,
    observer: DynObserver,
}

impl TransactionCommandService {
    pub fn new(deps: TransactionCommandServiceDeps) -> Self {
        let TransactionCommandServiceDeps {
            cashier_query,
            merchant_query,
            order_query,
            order_item_query,
            query,
            command,
            observer,
        } = deps;

        Self {
            references: ReferenceResolver::new(cashier_query, merchant_query, order_query),
            order_items: OrderItemAggregator::new(order_item_query),
            guard: ImmutabilityGuard::new(query),
            command,
            observer,
        }
    }

    fn enter(&self, ctx: &TracingContext, stage: PipelineStage) {
        self.observer.event(
            ctx,
            "pipeline stage",
            vec![KeyValue::new("stage", stage.as_str())],
        );
    }

    fn fail(&self, ctx: &TracingContext, method: Method, err: TransactionError) -> ServiceError {
        let message = format!("[{}] {err}", err.kind());
        match err.kind() {
            ErrorKind::Persistence | ErrorKind::Overflow => error!("{message}"),
            _ => warn!("{message}"),
        }
        self.observer.complete_error(ctx, method, &message);
        ServiceError::Transaction(err)
    }

    fn warn_ignored_merchant(party: &ResolvedParty, requested: Option<i32>) {
        if let Some(requested) = requested.filter(|id| *id != party.merchant_id()) {
            warn!(
                "Ignoring requested merchant {requested}; cashier {} belongs to merchant {}",
                party.cashier.cashier_id,
                party.merchant_id()
            );
        }
    }

    /// Aggregating, computing and reconciling: everything between reference
    /// resolution and the write.
    async fn settle(
        &self,
        ctx: &TracingContext,
        order_id: i32,
        tendered: i64,
    ) -> Result<Settlement, TransactionError> {
        self.enter(ctx, PipelineStage::Aggregating);
        let lines = self.order_items.aggregate(order_id).await?;

        self.enter(ctx, PipelineStage::Computing);
        let breakdown = calculate_tax(&lines)?;
        info!(
            "Order {order_id}: subtotal={} tax={} total={}",
            breakdown.subtotal, breakdown.tax, breakdown.total
        );

        self.enter(ctx, PipelineStage::Reconciling);
        reconcile_payment(tendered, breakdown.total)
    }

    async fn run_create(
        &self,
        ctx: &TracingContext,
        req: &CreateTransactionRequest,
    ) -> Result<TransactionModel, TransactionError> {
        self.enter(ctx, PipelineStage::Validating);
        let party = self.references.resolve_party(req.cashier_id).await?;
        Self::warn_ignored_merchant(&party, req.merchant_id);
        self.references.resolve_order(req.order_id).await?;

        let settlement = self.settle(ctx, req.order_id, req.amount).await?;

        self.enter(ctx, PipelineStage::Persisting);
        let record = CreateTransactionRecordRequest {
            order_id: req.order_id,
            cashier_id: req.cashier_id,
            merchant_id: party.merchant_id(),
            payment_method: req.payment_method.clone(),
            amount: settlement.amount,
            payment_status: settlement.status,
        };

        self.command
            .create(&record)
            .await
            .map_err(TransactionError::Persistence)
    }

    async fn run_update(
        &self,
        ctx: &TracingContext,
        req: &UpdateTransactionRequest,
    ) -> Result<TransactionModel, TransactionError> {
        self.enter(ctx, PipelineStage::Validating);
        let party = self.references.resolve_party(req.cashier_id).await?;
        Self::warn_ignored_merchant(&party, req.merchant_id);
        self.guard.ensure_mutable(req.transaction_id).await?;
        self.references.resolve_order(req.order_id).await?;

        let settlement = self.settle(ctx, req.order_id, req.amount).await?;

        self.enter(ctx, PipelineStage::Persisting);
        let record = UpdateTransactionRecordRequest {
            transaction_id: req.transaction_id,
            order_id: req.order_id,
            cashier_id: req.cashier_id,
            merchant_id: party.merchant_id(),
            payment_method: req.payment_method.clone(),
            amount: settlement.amount,
            payment_status: settlement.status,
        };

        self.command
            .update(&record)
            .await
            .map_err(|e| Self::lookup_error(req.transaction_id, e))
    }

    fn lookup_error(transaction_id: i32, err: RepositoryError) -> TransactionError {
        TransactionError::from_lookup(err, || {
            TransactionError::TransactionNotFound(transaction_id)
        })
    }
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    async fn create(
        &self,
        req: &CreateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!(
            "Creating transaction for order_id={} cashier_id={}",
            req.order_id, req.cashier_id
        );

        let method = Method::Post;
        let tracing_ctx = self.observer.start(
            "create_transaction",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "create"),
                KeyValue::new("order_id", i64::from(req.order_id)),
                KeyValue::new("cashier_id", i64::from(req.cashier_id)),
            ],
        );

        let transaction = match self.run_create(&tracing_ctx, req).await {
            Ok(transaction) => transaction,
            Err(e) => return Err(self.fail(&tracing_ctx, method, e)),
        };

        self.enter(&tracing_ctx, PipelineStage::Done);
        self.observer.complete_success(
            &tracing_ctx,
            method,
            &format!(
                "Transaction {} created with amount {}",
                transaction.transaction_id, transaction.amount
            ),
        );

        Ok(ApiResponse::success(
            "Transaction created successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn update(
        &self,
        req: &UpdateTransactionRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let errors = format_validation_errors(&validation_errors);
            error!("Validation failed: {errors:?}");
            return Err(ServiceError::Validation(errors));
        }

        info!("Updating transaction id={}", req.transaction_id);

        let method = Method::Put;
        let tracing_ctx = self.observer.start(
            "update_transaction",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "update"),
                KeyValue::new("transaction_id", i64::from(req.transaction_id)),
                KeyValue::new("order_id", i64::from(req.order_id)),
                KeyValue::new("cashier_id", i64::from(req.cashier_id)),
            ],
        );

        let transaction = match self.run_update(&tracing_ctx, req).await {
            Ok(transaction) => transaction,
            Err(e) => return Err(self.fail(&tracing_ctx, method, e)),
        };

        self.enter(&tracing_ctx, PipelineStage::Done);
        self.observer.complete_success(
            &tracing_ctx,
            method,
            &format!(
                "Transaction {} updated with amount {}",
                transaction.transaction_id, transaction.amount
            ),
        );

        Ok(ApiResponse::success(
            "Transaction updated successfully",
            TransactionResponse::from(transaction),
        ))
    }

    async fn trashed(
        &self,
        transaction_id: i32,
    ) -> Result<ApiResponse<TransactionResponseDeleteAt>, ServiceError> {
        info!("Trashing transaction id={transaction_id}");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start(
            "trash_transaction",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "trash"),
                KeyValue::new("transaction_id", i64::from(transaction_id)),
            ],
        );

        match self.command.trashed(transaction_id).await {
            Ok(transaction) => {
                self.observer.complete_success(
                    &tracing_ctx,
                    method,
                    &format!("Transaction {transaction_id} trashed"),
                );
                Ok(ApiResponse::success(
                    "Transaction trashed successfully",
                    TransactionResponseDeleteAt::from(transaction),
                ))
            }
            Err(e) => Err(self.fail(&tracing_ctx, method, Self::lookup_error(transaction_id, e))),
        }
    }

    async fn restore(
        &self,
        transaction_id: i32,
    ) -> Result<ApiResponse<TransactionResponseDeleteAt>, ServiceError> {
        info!("Restoring transaction id={transaction_id}");

        let method = Method::Put;
        let tracing_ctx = self.observer.start(
            "restore_transaction",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "restore"),
                KeyValue::new("transaction_id", i64::from(transaction_id)),
            ],
        );

        match self.command.restore(transaction_id).await {
            Ok(transaction) => {
                self.observer.complete_success(
                    &tracing_ctx,
                    method,
                    &format!("Transaction {transaction_id} restored"),
                );
                Ok(ApiResponse::success(
                    "Transaction restored successfully",
                    TransactionResponseDeleteAt::from(transaction),
                ))
            }
            Err(e) => Err(self.fail(&tracing_ctx, method, Self::lookup_error(transaction_id, e))),
        }
    }

    async fn delete_permanent(
        &self,
        transaction_id: i32,
    ) -> Result<ApiResponse<bool>, ServiceError> {
        info!("Permanently deleting transaction id={transaction_id}");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start(
            "delete_transaction_permanent",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "delete_permanent"),
                KeyValue::new("transaction_id", i64::from(transaction_id)),
            ],
        );

        match self.command.delete_permanent(transaction_id).await {
            Ok(_) => {
                self.observer.complete_success(
                    &tracing_ctx,
                    method,
                    &format!("Transaction {transaction_id} permanently deleted"),
                );
                Ok(ApiResponse::success("Transaction permanently deleted", true))
            }
            Err(e) => Err(self.fail(&tracing_ctx, method, Self::lookup_error(transaction_id, e))),
        }
    }

    async fn restore_all(&self) -> Result<ApiResponse<bool>, ServiceError> {
        info!("Restoring all trashed transactions");

        let method = Method::Put;
        let tracing_ctx = self.observer.start(
            "restore_all_transactions",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "restore_all"),
            ],
        );

        match self.command.restore_all().await {
            Ok(restored_any) => {
                self.observer.complete_success(
                    &tracing_ctx,
                    method,
                    &format!("All trashed transactions restored (any: {restored_any})"),
                );
                Ok(ApiResponse::success(
                    "All transactions restored successfully",
                    true,
                ))
            }
            Err(e) => Err(self.fail(&tracing_ctx, method, TransactionError::Persistence(e))),
        }
    }

    async fn delete_all(&self) -> Result<ApiResponse<bool>, ServiceError> {
        info!("Permanently deleting all trashed transactions");

        let method = Method::Delete;
        let tracing_ctx = self.observer.start(
            "delete_all_transactions_permanent",
            vec![
                KeyValue::new("component", "transaction"),
                KeyValue::new("operation", "delete_all"),
            ],
        );

        match self.command.delete_all().await {
            Ok(deleted_any) => {
                self.observer.complete_success(
                    &tracing_ctx,
                    method,
                    &format!("All trashed transactions deleted (any: {deleted_any})"),
                );
                Ok(ApiResponse::success(
                    "All transactions permanently deleted",
                    true,
                ))
            }
            Err(e) => Err(self.fail(&tracing_ctx, method, TransactionError::Persistence(e))),
        }
    }
}
