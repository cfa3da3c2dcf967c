pub mod transaction;

pub use self::transaction::{
    CreateTransactionRecordRequest, CreateTransactionRequest, UpdateTransactionRecordRequest,
    UpdateTransactionRequest,
};
