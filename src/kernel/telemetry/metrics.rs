use std::collections::VecDeque;

use super::event::{ActionKind, IntentKind, TelemetryEvent};
use crate::kernel::event::SlotName;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TelemetrySnapshot {
    pub turns: u64,
    pub help_turns: u64,
    pub unsupported_intents: u64,
    pub action_stats: ActionStats,
    pub elicit_stats: ElicitStats,
    pub attachments_sent: u64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActionStats {
    pub fulfilled: u64,
    pub failed: u64,
    pub elicited: u64,
    pub retry_prompts: u64,
    /// fulfilled / (fulfilled + failed), 0 when nothing closed yet
    pub success_ratio: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElicitStats {
    pub id_type: u64,
    pub property: u64,
    pub search_criteria: u64,
}

pub fn compute_snapshot(events: &VecDeque<TelemetryEvent>) -> TelemetrySnapshot {
    let mut snap = TelemetrySnapshot::default();

    for event in events {
        match event {
            TelemetryEvent::TurnCompleted { intent, action, elicited, attachments } => {
                snap.turns += 1;
                if *intent == IntentKind::Help {
                    snap.help_turns += 1;
                }
                snap.attachments_sent += *attachments as u64;
                match action {
                    ActionKind::Fulfilled => snap.action_stats.fulfilled += 1,
                    ActionKind::Failed => snap.action_stats.failed += 1,
                    ActionKind::ElicitSlot => snap.action_stats.elicited += 1,
                    ActionKind::ConfirmRetry => snap.action_stats.retry_prompts += 1,
                }
                match elicited {
                    Some(SlotName::IdType) => snap.elicit_stats.id_type += 1,
                    Some(SlotName::PropertyToSearch) => snap.elicit_stats.property += 1,
                    Some(SlotName::CompoundToSearch) => snap.elicit_stats.search_criteria += 1,
                    Some(SlotName::Attachments) | None => {}
                }
            }
            TelemetryEvent::UnsupportedIntent => snap.unsupported_intents += 1,
        }
    }

    let closed = snap.action_stats.fulfilled + snap.action_stats.failed;
    if closed > 0 {
        snap.action_stats.success_ratio = snap.action_stats.fulfilled as f64 / closed as f64;
    }

    snap
}
