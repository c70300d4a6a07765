use serde::{Deserialize, Serialize};

use crate::kernel::event::SlotName;
use crate::kernel::intent::types::{DialogAction, FulfillmentState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntentKind {
    CompoundInfo,
    Help,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    Fulfilled,
    Failed,
    ElicitSlot,
    ConfirmRetry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TelemetryEvent {
    TurnCompleted {
        intent: IntentKind,
        action: ActionKind,
        elicited: Option<SlotName>,
        attachments: usize,
    },
    UnsupportedIntent,
}

impl From<&DialogAction> for ActionKind {
    fn from(action: &DialogAction) -> Self {
        match action {
            DialogAction::Close { fulfillment_state: FulfillmentState::Fulfilled, .. } => ActionKind::Fulfilled,
            DialogAction::Close { fulfillment_state: FulfillmentState::Failed, .. } => ActionKind::Failed, // Content STRIPPED
            DialogAction::ElicitSlot { .. } => ActionKind::ElicitSlot,
            DialogAction::ConfirmIntent { .. } => ActionKind::ConfirmRetry, // Request STRIPPED
        }
    }
}

impl TelemetryEvent {
    pub fn turn(intent: IntentKind, action: &DialogAction) -> Self {
        let (elicited, attachments) = match action {
            DialogAction::ElicitSlot { slot_to_elicit, .. } => (Some(*slot_to_elicit), 0),
            DialogAction::Close { attachments, .. } => (None, attachments.len()),
            DialogAction::ConfirmIntent { .. } => (None, 0),
        };
        TelemetryEvent::TurnCompleted {
            intent,
            action: ActionKind::from(action),
            elicited,
            attachments,
        }
    }
}
