use std::collections::HashMap;

use crate::error::ChemBotError;
use super::request::CompoundRequest;

/// Session attribute holding the request waiting for a confirmed retry.
pub const LAST_REQUEST_KEY: &str = "lastConfirmedRequest";

/// Strict state delta. This is the ONLY way session state mutates.
#[derive(Debug, Clone)]
pub enum StateDelta {
    /// Overwrites any previously pending request.
    PendingRetryStored(CompoundRequest),
    /// The pending request was read at turn start and is no longer pending.
    PendingRetryConsumed,
}

/// Session attributes of one turn. Owned by the platform; the core reads them
/// at turn start and hands them back at turn end.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    attributes: HashMap<String, String>,
    // Number of deltas applied this turn
    version: u64,
}

impl SessionState {
    pub fn new(attributes: Option<HashMap<String, String>>) -> Self {
        Self {
            attributes: attributes.unwrap_or_default(),
            version: 0,
        }
    }

    /// A missing or empty attribute means nothing is pending.
    pub fn pending_request(&self) -> Result<Option<CompoundRequest>, ChemBotError> {
        match self.attributes.get(LAST_REQUEST_KEY) {
            Some(raw) if !raw.is_empty() => CompoundRequest::from_session_value(raw)
                .map(Some)
                .map_err(|source| ChemBotError::SessionDecode {
                    key: LAST_REQUEST_KEY.to_string(),
                    source,
                }),
            _ => Ok(None),
        }
    }

    pub fn reduce(&mut self, delta: StateDelta) -> Result<(), ChemBotError> {
        match delta {
            StateDelta::PendingRetryStored(request) => {
                let raw = request.to_session_value().map_err(|source| ChemBotError::SessionDecode {
                    key: LAST_REQUEST_KEY.to_string(),
                    source,
                })?;
                self.attributes.insert(LAST_REQUEST_KEY.to_string(), raw);
            }
            StateDelta::PendingRetryConsumed => {
                self.attributes.remove(LAST_REQUEST_KEY);
            }
        }
        self.version += 1;
        Ok(())
    }

    #[cfg(test)]
    fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn into_attributes(self) -> HashMap<String, String> {
        self.attributes
    }
}
