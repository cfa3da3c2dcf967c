mod repository;
mod service;
mod transaction;
mod validate;

pub use self::repository::RepositoryError;
pub use self::service::ServiceError;
pub use self::transaction::{ErrorKind, TransactionError};
pub use self::validate::format_validation_errors;
