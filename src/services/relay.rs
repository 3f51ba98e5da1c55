// src/services/relay.rs
use tracing::{info, warn};

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::message::ChatResponse;
use crate::rules::{FALLBACK_REPLY, SYSTEM_PROMPT};
use crate::services::gemini::GeminiClient;

/// Forwards one chat message upstream and reshapes the answer.
///
/// Failures never leave this type: the caller always gets a `ChatResponse`,
/// with an empty reply when the upstream could not be used.
#[derive(Debug, Clone)]
pub struct ChatRelay {
    client: GeminiClient,
}

impl ChatRelay {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            client: GeminiClient::new(config)?,
        })
    }

    pub async fn handle_chat(&self, message: &str) -> ChatResponse {
        match self.client.generate(SYSTEM_PROMPT, message).await {
            Ok(text) if text.trim().is_empty() => {
                info!("upstream reply was blank, using fallback");
                ChatResponse::new(FALLBACK_REPLY)
            }
            Ok(text) => ChatResponse::new(text),
            Err(err) => {
                warn!(error = %err, "upstream call failed, replying silently");
                ChatResponse::silent()
            }
        }
    }
}
