use dotenv::dotenv;
use std::env;
use std::time::Duration;

/// Full base URL of the AI server, e.g. `http://10.0.0.5:3000`.
pub const URL_ENV_VAR: &str = "AI_SERVER_URL";
/// Host half of the endpoint when no full URL is configured.
pub const HOST_ENV_VAR: &str = "AI_SERVER_IP";
/// Port half of the endpoint when no full URL is configured.
pub const PORT_ENV_VAR: &str = "AI_SERVER_PORT";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: &str = "3000";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the AI server lives and how long a generation call may take.
/// Resolved once, at client construction, never re-read per call.
#[derive(Debug, Clone)]
pub struct AiServerConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl AiServerConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Resolve the endpoint from the environment. A full `AI_SERVER_URL`
    /// wins; otherwise the host/port pair is read with documented defaults.
    pub fn from_env() -> Self {
        dotenv().ok(); // Load environment variables from .env file

        Self::new(resolve_base_url(
            env::var(URL_ENV_VAR).ok(),
            env::var(HOST_ENV_VAR).ok(),
            env::var(PORT_ENV_VAR).ok(),
        ))
    }
}

impl Default for AiServerConfig {
    fn default() -> Self {
        Self::new(resolve_base_url(None, None, None))
    }
}

fn resolve_base_url(url: Option<String>, host: Option<String>, port: Option<String>) -> String {
    if let Some(url) = url {
        return url;
    }

    let host = host.unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = port.unwrap_or_else(|| DEFAULT_PORT.to_string());
    format!("http://{}:{}", host, port)
}
