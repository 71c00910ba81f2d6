use alloy::primitives::{Address, B256, Bytes, U256};
use eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// The ledger transaction whose fields seed a generation request.
#[derive(Clone)]
pub struct Transaction {
    pub hash: B256,
    pub to: Option<Address>,
    pub nonce: u64,
    pub value: U256,
    pub data: Bytes,
}

/// On-disk form of a transaction, all fields as strings. An empty `to`
/// means the transaction has no recipient.
#[derive(Serialize, Deserialize)]
pub struct TransactionConfig {
    pub hash: String,
    pub to: String,
    pub nonce: u64,
    pub value: String,
    pub data: String,
}

impl TransactionConfig {
    pub fn from_file(file_path: &str) -> Result<Self> {
        let file_content = fs::read_to_string(file_path)?;
        let config: TransactionConfig = serde_json::from_str(&file_content)?;
        Ok(config)
    }

    pub fn to_transaction(&self) -> Result<Transaction> {
        let to = if self.to.is_empty() {
            None
        } else {
            Some(self.to.parse::<Address>()?)
        };

        Ok(Transaction {
            hash: self.hash.parse::<B256>()?,
            to,
            nonce: self.nonce,
            value: self.value.parse::<U256>()?,
            data: self.data.parse::<Bytes>()?,
        })
    }
}
