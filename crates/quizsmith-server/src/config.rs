//! Environment-backed server configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_REGION: &str = "us-east-1";
// Converse requires an inference-profile ID, not a bare model ID.
const DEFAULT_MODEL_ID: &str = "us.anthropic.claude-3-5-haiku-20241022-v1:0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub region: String,
    pub model_id: String,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to defaults.
    /// AWS credentials come from the default provider chain.
    pub fn from_env() -> Self {
        Self {
            bind_addr: env_or("QUIZSMITH_BIND_ADDR", DEFAULT_BIND_ADDR),
            region: env_or("AWS_REGION", DEFAULT_REGION),
            model_id: env_or("QUIZSMITH_MODEL_ID", DEFAULT_MODEL_ID),
        }
    }
}

fn env_or(var: &str, default: &str) -> String {
    std::env::var(var).unwrap_or_else(|_| default.to_string())
}
