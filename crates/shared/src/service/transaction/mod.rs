mod command;
mod guard;
mod order_items;
mod pricing;
mod reference;
mod stage;

pub use self::command::{TransactionCommandService, TransactionCommandServiceDeps};
pub use self::guard::ImmutabilityGuard;
pub use self::order_items::{OrderItemAggregator, OrderLine, validate_order_items};
pub use self::pricing::{
    Settlement, TAX_RATE_PERCENT, TaxBreakdown, calculate_tax, reconcile_payment,
};
pub use self::reference::{ReferenceResolver, ResolvedParty};
pub use self::stage::PipelineStage;
