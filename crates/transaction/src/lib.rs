pub mod config;
pub mod di;
pub mod metrics;
pub mod state;
