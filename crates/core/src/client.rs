use alloy::primitives::{Address, address};
use log::debug;
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};

use crate::config::AiServerConfig;
use crate::error::GenerationError;
use crate::types::transaction::Transaction;

/// Protocol-defined sender recorded on every generation request. Never
/// derived from the transaction.
pub const SYSTEM_ADDRESS: Address = address!("0xfffffffffffffffffffffffffffffffffffffffe");

const GENERATE_PATH: &str = "/generate";
const LOOKUP_PATH: &str = "/getGenerated";

/// Payload POSTed to the generation endpoint. All fields are strings on the
/// wire; `to` is empty when the transaction has no recipient.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub hash: String,
    pub from: String,
    pub to: String,
    pub nonce: String,
    pub value: String,
    pub data: String,
}

impl GenerationRequest {
    pub fn from_transaction(tx: &Transaction) -> Self {
        Self {
            hash: format!("0x{}", hex::encode(tx.hash)),
            from: SYSTEM_ADDRESS.to_string(),
            to: tx.to.map(|to| to.to_string()).unwrap_or_default(),
            nonce: tx.nonce.to_string(),
            // The wire format only carries the low 64 bits of the value.
            value: tx.value.wrapping_to::<u64>().to_string(),
            data: String::from_utf8_lossy(&tx.data).into_owned(),
        }
    }
}

#[derive(Deserialize)]
struct GenerationResponse {
    data: Vec<GenerationEntry>,
}

#[derive(Deserialize)]
struct GenerationEntry {
    text: String,
}

#[derive(Serialize)]
struct LookupRequest<'a> {
    hash: &'a str,
}

/// Client for the AI generation server. Stateless between calls; safe to
/// share across tasks.
pub struct GenerationClient {
    http: reqwest::Client,
    config: AiServerConfig,
}

impl GenerationClient {
    pub fn new(config: AiServerConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn from_env() -> Self {
        Self::new(AiServerConfig::from_env())
    }

    /// Ask the AI server to generate an inscription for `tx`. Returns the
    /// text of the first entry in the response.
    pub async fn generate(&self, tx: &Transaction) -> Result<String, GenerationError> {
        let url = format!("{}{}", self.config.base_url, GENERATE_PATH);
        let payload = GenerationRequest::from_transaction(tx);
        let json_data = serde_json::to_string(&payload).map_err(GenerationError::Encode)?;

        debug!("requesting inscription for {} from {}", payload.hash, url);

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(json_data)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Network(e)
                }
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(GenerationError::UnexpectedStatus(status));
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GenerationError::Timeout
            } else {
                GenerationError::Network(e)
            }
        })?;

        let result: GenerationResponse =
            serde_json::from_str(&body).map_err(GenerationError::Decode)?;

        match result.data.into_iter().next() {
            Some(entry) => Ok(entry.text),
            None => Err(GenerationError::EmptyResult),
        }
    }

    /// Fetch the inscription previously generated for `tx_hash`. The body is
    /// returned verbatim, whatever the status code.
    pub async fn get_generated(&self, tx_hash: &str) -> Result<String, GenerationError> {
        let url = format!("{}{}", self.config.base_url, LOOKUP_PATH);
        let json_data = serde_json::to_string(&LookupRequest { hash: tx_hash })
            .map_err(GenerationError::Encode)?;

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(json_data)
            .send()
            .await
            .map_err(GenerationError::Network)?;

        debug!("lookup response status: {}", response.status());

        response.text().await.map_err(GenerationError::Network)
    }
}
