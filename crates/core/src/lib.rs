pub mod client;
pub mod config;
pub mod error;
pub mod types;

pub use client::{GenerationClient, GenerationRequest, SYSTEM_ADDRESS};
pub use config::AiServerConfig;
pub use error::GenerationError;
pub use types::transaction::{Transaction, TransactionConfig};
