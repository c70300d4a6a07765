use serde::{Deserialize, Serialize};

use crate::kernel::event::SlotName;
use crate::kernel::request::CompoundRequest;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FulfillmentState {
    Fulfilled,
    Failed,
}

/// Link attached to a reply. At least one of the two links is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttachmentDescriptor {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_link: Option<String>,
}

impl AttachmentDescriptor {
    pub fn image(title: &str, link: String) -> Self {
        Self { title: title.to_string(), image_link: Some(link), file_link: None }
    }

    pub fn file(title: &str, link: String) -> Self {
        Self { title: title.to_string(), image_link: None, file_link: Some(link) }
    }
}

/// The single decision of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DialogAction {
    Close {
        fulfillment_state: FulfillmentState,
        message: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        attachments: Vec<AttachmentDescriptor>,
    },
    ElicitSlot {
        slot_to_elicit: SlotName,
        message: String,
    },
    /// Ends the turn, not the conversation: the next turn answers the prompt.
    ConfirmIntent {
        pending_request: CompoundRequest,
        message: String,
    },
}

impl DialogAction {
    pub fn fulfilled(message: String, attachments: Vec<AttachmentDescriptor>) -> Self {
        DialogAction::Close {
            fulfillment_state: FulfillmentState::Fulfilled,
            message,
            attachments,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        DialogAction::Close {
            fulfillment_state: FulfillmentState::Failed,
            message: message.into(),
            attachments: Vec::new(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            DialogAction::Close { message, .. }
            | DialogAction::ElicitSlot { message, .. }
            | DialogAction::ConfirmIntent { message, .. } => message,
        }
    }

    pub fn is_fulfilled(&self) -> bool {
        matches!(
            self,
            DialogAction::Close { fulfillment_state: FulfillmentState::Fulfilled, .. }
        )
    }
}
