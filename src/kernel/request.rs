use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::event::SlotName;
use super::properties::{PropertyAliasResolver, ResolvedProperty};

/// A compound lookup as collected from the slots of one turn.
///
/// Serialized into the session when a retry is pending; absent fields are
/// left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CompoundRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identifier_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_criteria: Option<String>,
    #[serde(default, rename = "PropertyToRetrieve", skip_serializing_if = "Option::is_none")]
    pub property_phrase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment: Option<String>,
    #[serde(default, rename = "FailedInPreviousExecution")]
    pub failed_previously: bool,
}

impl CompoundRequest {
    pub fn from_slots(slots: &HashMap<String, Option<String>>) -> Self {
        let get = |slot: SlotName| slots.get(slot.as_str()).and_then(|v| v.clone());
        Self {
            identifier_type: get(SlotName::IdType),
            search_criteria: get(SlotName::CompoundToSearch),
            property_phrase: get(SlotName::PropertyToSearch),
            attachment: get(SlotName::Attachments).map(|a| a.to_lowercase()),
            failed_previously: false,
        }
    }

    pub fn identifier_type(&self) -> &str {
        self.identifier_type.as_deref().unwrap_or("")
    }

    pub fn search_criteria(&self) -> &str {
        self.search_criteria.as_deref().unwrap_or("")
    }

    pub fn property_phrase(&self) -> &str {
        self.property_phrase.as_deref().unwrap_or("")
    }

    pub fn attachment(&self) -> Option<&str> {
        self.attachment.as_deref()
    }

    /// Identifier type, property and search criteria are all non-empty.
    pub fn has_required_fields(&self) -> bool {
        !self.identifier_type().is_empty()
            && !self.property_phrase().is_empty()
            && !self.search_criteria().is_empty()
    }

    pub fn resolved_property(&self, aliases: &PropertyAliasResolver) -> Option<ResolvedProperty> {
        aliases.resolve(self.property_phrase())
    }

    pub fn to_session_value(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_session_value(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
