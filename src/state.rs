// src/state.rs
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::error::RelayError;
use crate::services::relay::ChatRelay;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub relay: ChatRelay,
}

impl AppState {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        Ok(Self {
            relay: ChatRelay::new(config)?,
        })
    }
}
