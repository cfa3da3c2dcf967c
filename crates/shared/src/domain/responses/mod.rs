mod api;
mod transaction;

pub use self::api::ApiResponse;
pub use self::transaction::{TransactionResponse, TransactionResponseDeleteAt};
