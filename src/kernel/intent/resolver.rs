use tracing::{error, info, warn};

use crate::config::ChemBotConfig;
use crate::kernel::event::{TurnEvent, TurnResponse};
use crate::kernel::properties::{PropertyAliasResolver, ResolvedProperty};
use crate::kernel::request::CompoundRequest;
use crate::kernel::state::{SessionState, StateDelta};
use crate::services::pubchem::classifier::MESSAGE_GENERIC_REQUEST_ERROR;
use crate::services::pubchem::{
    AttachmentResolver, CompoundService, ResponseFormatterChain, RetryClassifier, ServiceOutcome,
};

use super::types::DialogAction;
use super::validator::RequestValidator;

pub const ERROR_TALK_TO_YOU: &str = "I did not understand the request. Talk to you soon.";

/// Decides the action of one compound-information turn.
///
/// Order of business:
/// 1. A pending retry in the session wins: re-run it on "Confirmed", otherwise say goodbye.
/// 2. Otherwise validate the fresh slots and elicit the first bad one.
/// 3. Call the service once and map the outcome to Close / ConfirmIntent.
pub struct DialogStateResolver {
    aliases: PropertyAliasResolver,
    valid_id_types: Vec<String>,
    classifier: RetryClassifier,
    formatter: ResponseFormatterChain,
    attachments: AttachmentResolver,
}

impl DialogStateResolver {
    pub fn new(config: &ChemBotConfig) -> Self {
        Self {
            aliases: PropertyAliasResolver::new(),
            valid_id_types: config.valid_id_types.clone(),
            classifier: RetryClassifier::new(),
            formatter: ResponseFormatterChain::new(),
            attachments: AttachmentResolver::new(&config.pubchem_domain),
        }
    }

    pub async fn resolve(&self, service: &dyn CompoundService, event: &TurnEvent) -> TurnResponse {
        let mut session = SessionState::new(event.session_attributes.clone());
        let action = self.decide(service, event, &mut session).await;
        TurnResponse {
            session_attributes: session.into_attributes(),
            dialog_action: action,
        }
    }

    async fn decide(&self, service: &dyn CompoundService, event: &TurnEvent, session: &mut SessionState) -> DialogAction {
        let mut request = CompoundRequest::from_slots(&event.slots);

        let pending = match session.pending_request() {
            Ok(pending) => pending,
            Err(e) => {
                warn!("Dropping unreadable pending request: {}", e);
                self.apply(session, StateDelta::PendingRetryConsumed);
                None
            }
        };

        if let Some(last) = pending.filter(|r| r.failed_previously) {
            self.apply(session, StateDelta::PendingRetryConsumed);
            if !event.confirmation_status.is_confirmed() {
                info!("Pending retry declined ({:?})", event.confirmation_status);
                return DialogAction::failed(ERROR_TALK_TO_YOU);
            }
            info!("Retrying persisted request, fresh slots ignored");
            request = last;
        }

        let validator = RequestValidator::new(&self.aliases, self.valid_id_types.iter().map(String::as_str).collect());
        let validation = validator.resolve(&request);
        info!(
            "Has required fields: {}, Has valid values: {}",
            request.has_required_fields(),
            validation.is_ok()
        );

        let property = match validation {
            Ok(property) => property,
            Err(violation) => {
                info!("Slot {} is invalid: {}", violation.slot.as_str(), violation.message);
                return DialogAction::ElicitSlot {
                    slot_to_elicit: violation.slot,
                    message: violation.message,
                };
            }
        };

        let outcome = self.execute(service, &request, &property).await;
        self.log_outcome(event, &outcome);
        self.respond(session, request, &property, outcome)
    }

    async fn execute(
        &self,
        service: &dyn CompoundService,
        request: &CompoundRequest,
        property: &ResolvedProperty,
    ) -> ServiceOutcome {
        let search = request.search_criteria();
        let id_type = request.identifier_type();
        let result = match property {
            ResolvedProperty::Synonyms => service.fetch_synonyms(search, id_type).await,
            other => service.fetch_properties(search, id_type, &other.canonical_names()).await,
        };
        self.classifier.classify(result)
    }

    fn respond(
        &self,
        session: &mut SessionState,
        request: CompoundRequest,
        property: &ResolvedProperty,
        outcome: ServiceOutcome,
    ) -> DialogAction {
        match outcome {
            ServiceOutcome::Success(payload) => {
                let mut normalized = self.formatter.format(&payload);
                normalized.attachments = self.attachments.resolve(
                    &normalized.compound_id,
                    request.attachment(),
                    property.is_bundle(),
                );
                DialogAction::fulfilled(
                    format!("*CID*: _{}_\n{}", normalized.compound_id, normalized.text),
                    normalized.attachments,
                )
            }
            ServiceOutcome::Busy { message, .. } => {
                let pending = CompoundRequest { failed_previously: true, ..request };
                if !self.apply(session, StateDelta::PendingRetryStored(pending.clone())) {
                    return DialogAction::failed(MESSAGE_GENERIC_REQUEST_ERROR);
                }
                DialogAction::ConfirmIntent {
                    pending_request: pending,
                    message,
                }
            }
            // Fatal: the session is left as it was.
            ServiceOutcome::NotFound { message, .. } | ServiceOutcome::OtherError { message, .. } => {
                DialogAction::failed(message)
            }
        }
    }

    fn apply(&self, session: &mut SessionState, delta: StateDelta) -> bool {
        match session.reduce(delta) {
            Ok(()) => true,
            Err(e) => {
                error!("Session update failed: {}", e);
                false
            }
        }
    }

    fn log_outcome(&self, event: &TurnEvent, outcome: &ServiceOutcome) {
        match outcome {
            ServiceOutcome::Success(_) => info!("User Id: {}, Response from PubChem Successful!", event.user_id),
            other => warn!(
                "User Id: {}, Error: {}, Detail: {}",
                event.user_id,
                other.user_message().unwrap_or_default(),
                other.detail().unwrap_or_default()
            ),
        }
    }
}
