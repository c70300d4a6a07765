use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::intent::types::DialogAction;

pub const INTENT_COMPOUND_INFO: &str = "ChemicalCompoundInformation";
pub const INTENT_BOT_HELP: &str = "ChemBotHelpInformation";

/// Slots of the compound information intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotName {
    IdType,
    PropertyToSearch,
    CompoundToSearch,
    Attachments,
}

impl SlotName {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlotName::IdType => "IdType",
            SlotName::PropertyToSearch => "PropertyToSearch",
            SlotName::CompoundToSearch => "CompoundToSearch",
            SlotName::Attachments => "Attachments",
        }
    }
}

/// Slot of the help intent.
pub const SLOT_HELP_CRITERIA: &str = "helpCriteria";

/// Platform confirmation token. Only "confirmed" (any case) confirms; null,
/// missing and unknown tokens read as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>")]
pub enum ConfirmationStatus {
    #[default]
    None,
    Confirmed,
    Denied,
}

impl From<Option<String>> for ConfirmationStatus {
    fn from(token: Option<String>) -> Self {
        match token.as_deref().map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("confirmed") => ConfirmationStatus::Confirmed,
            Some(t) if t.eq_ignore_ascii_case("denied") => ConfirmationStatus::Denied,
            _ => ConfirmationStatus::None,
        }
    }
}

impl ConfirmationStatus {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, ConfirmationStatus::Confirmed)
    }
}

/// One conversational turn, slots already extracted by the platform.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TurnEvent {
    pub intent_name: String,
    #[serde(default)]
    pub slots: HashMap<String, Option<String>>,
    #[serde(default)]
    pub confirmation_status: ConfirmationStatus,
    #[serde(default)]
    pub session_attributes: Option<HashMap<String, String>>,
    #[serde(default)]
    pub user_id: String,
}

impl TurnEvent {
    pub fn new(intent_name: &str) -> Self {
        Self {
            intent_name: intent_name.to_string(),
            ..Default::default()
        }
    }

    pub fn with_slot(mut self, name: &str, value: &str) -> Self {
        self.slots.insert(name.to_string(), Some(value.to_string()));
        self
    }

    pub fn with_confirmation(mut self, status: ConfirmationStatus) -> Self {
        self.confirmation_status = status;
        self
    }

    pub fn with_session(mut self, attributes: HashMap<String, String>) -> Self {
        self.session_attributes = Some(attributes);
        self
    }

    /// Raw slot value; absent and explicitly-null slots are both `None`.
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).and_then(|v| v.as_deref())
    }
}

/// What goes back to the platform at the end of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TurnResponse {
    pub session_attributes: HashMap<String, String>,
    pub dialog_action: DialogAction,
}

/// Written in place of a `TurnResponse` when a line cannot be answered, so
/// callers still get one line back per line sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnError {
    pub error: String,
}

impl TurnError {
    pub fn new(error: impl ToString) -> Self {
        Self { error: error.to_string() }
    }
}
