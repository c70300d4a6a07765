mod common;

use std::collections::HashMap;

use chembot::config::ChemBotConfig;
use chembot::error::ChemBotError;
use chembot::kernel::event::{TurnEvent, INTENT_BOT_HELP, INTENT_COMPOUND_INFO, SLOT_HELP_CRITERIA};
use chembot::kernel::intent::help::{
    HELP_CRITERIA_CHEMICAL_PROPERTIES, HELP_CRITERIA_FLASH_CARD, HELP_CRITERIA_ID_TYPE, HELP_CRITERIA_SEARCH_CRITERIA,
};
use chembot::kernel::intent::types::DialogAction;
use chembot::kernel::telemetry::event::{IntentKind, TelemetryEvent};
use chembot::kernel::telemetry::recorder::TelemetryRecorder;
use chembot::Reactor;

use common::StubService;

fn reactor(service: StubService) -> Reactor {
    Reactor::new(&ChemBotConfig::default(), Box::new(service))
}

fn help(topic: &str) -> TurnEvent {
    TurnEvent::new(INTENT_BOT_HELP).with_slot(SLOT_HELP_CRITERIA, topic)
}

#[tokio::test]
async fn test_compound_intent_is_dispatched() {
    let reactor = reactor(StubService::payload(common::glucose_weight()));
    let event = TurnEvent::new(INTENT_COMPOUND_INFO)
        .with_slot("IdType", "name")
        .with_slot("PropertyToSearch", "molecular weight")
        .with_slot("CompoundToSearch", "glucose");

    let response = reactor.handle_turn(event).await.expect("supported intent");

    assert!(response.dialog_action.is_fulfilled());
    assert!(response.dialog_action.message().contains("180.16 g/mol"));
}

#[tokio::test]
async fn test_unsupported_intent_is_an_error() {
    let reactor = reactor(StubService::payload(common::glucose_weight()));

    let result = reactor.handle_turn(TurnEvent::new("OrderPizza")).await;

    match result {
        Err(ChemBotError::UnsupportedIntent(name)) => assert_eq!(name, "OrderPizza"),
        other => panic!("Expected UnsupportedIntent, got {:?}", other),
    }
}

#[tokio::test]
async fn test_help_topics() {
    let reactor = reactor(StubService::payload(common::glucose_weight()));

    let props = reactor.handle_turn(help(HELP_CRITERIA_CHEMICAL_PROPERTIES)).await.unwrap();
    assert!(props.dialog_action.is_fulfilled());
    assert!(props.dialog_action.message().starts_with("*ChemBot Help*\n"));
    assert!(props.dialog_action.message().contains("(_MolecularWeight_)"));

    let ids = reactor.handle_turn(help(HELP_CRITERIA_ID_TYPE)).await.unwrap();
    for id_type in ["cid", "name", "smiles", "inchikey"] {
        assert!(ids.dialog_action.message().contains(&format!("_{}_\n", id_type)));
    }

    let search = reactor.handle_turn(help(HELP_CRITERIA_SEARCH_CRITERIA)).await.unwrap();
    assert!(search.dialog_action.message().contains("acetic acid"));

    let card = reactor.handle_turn(help(HELP_CRITERIA_FLASH_CARD)).await.unwrap();
    assert!(card.dialog_action.message().contains("SDF"));
}

#[tokio::test]
async fn test_help_fallbacks() {
    let reactor = reactor(StubService::payload(common::glucose_weight()));

    let unknown = reactor.handle_turn(help("Cooking")).await.unwrap();
    assert_eq!(
        unknown.dialog_action,
        DialogAction::failed("It was not possible to process your help request for Cooking.\n")
    );

    // Topics match exactly.
    let lowercase = reactor.handle_turn(help("flash card")).await.unwrap();
    assert!(!lowercase.dialog_action.is_fulfilled());

    let empty = reactor.handle_turn(TurnEvent::new(INTENT_BOT_HELP)).await.unwrap();
    assert_eq!(
        empty.dialog_action,
        DialogAction::failed("It was not possible to process your help request.\n")
    );
}

#[tokio::test]
async fn test_help_keeps_session() {
    let reactor = reactor(StubService::payload(common::glucose_weight()));
    let session = HashMap::from([("lastConfirmedRequest".to_string(), "{}".to_string())]);

    let response = reactor
        .handle_turn(help(HELP_CRITERIA_ID_TYPE).with_session(session.clone()))
        .await
        .unwrap();

    assert_eq!(response.session_attributes, session);
}

#[tokio::test]
async fn test_telemetry_snapshot_over_turns() {
    let reactor = reactor(StubService::payload(common::glucose_flash_card()));
    let mut recorder = TelemetryRecorder::new();

    let turns = vec![
        TurnEvent::new(INTENT_COMPOUND_INFO)
            .with_slot("IdType", "name")
            .with_slot("PropertyToSearch", "flash card")
            .with_slot("CompoundToSearch", "glucose"),
        TurnEvent::new(INTENT_COMPOUND_INFO)
            .with_slot("IdType", "nickname")
            .with_slot("PropertyToSearch", "mw")
            .with_slot("CompoundToSearch", "glucose"),
        help("Cooking"),
        TurnEvent::new("OrderPizza"),
    ];

    for event in turns {
        let kind = Reactor::intent_kind(&event.intent_name);
        match (kind, reactor.handle_turn(event).await) {
            (Some(intent), Ok(response)) => recorder.record(TelemetryEvent::turn(intent, &response.dialog_action)),
            _ => recorder.record(TelemetryEvent::UnsupportedIntent),
        }
    }

    let snap = recorder.snapshot();
    println!("{:?}", snap);

    assert_eq!(recorder.len(), 4);
    assert_eq!(snap.turns, 3);
    assert_eq!(snap.help_turns, 1);
    assert_eq!(snap.unsupported_intents, 1);
    assert_eq!(snap.action_stats.fulfilled, 1);
    assert_eq!(snap.action_stats.failed, 1);
    assert_eq!(snap.action_stats.elicited, 1);
    assert_eq!(snap.elicit_stats.id_type, 1);
    assert_eq!(snap.attachments_sent, 3);
    assert!((snap.action_stats.success_ratio - 0.5).abs() < f64::EPSILON);

    recorder.clear();
    assert!(recorder.is_empty());
}

#[test]
fn test_intent_kind_lookup() {
    assert_eq!(Reactor::intent_kind(INTENT_COMPOUND_INFO), Some(IntentKind::CompoundInfo));
    assert_eq!(Reactor::intent_kind(INTENT_BOT_HELP), Some(IntentKind::Help));
    assert_eq!(Reactor::intent_kind("chemicalcompoundinformation"), None);
}
