use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use super::event::{TurnEvent, TurnResponse, INTENT_BOT_HELP, INTENT_COMPOUND_INFO, SLOT_HELP_CRITERIA};
use super::intent::{DialogStateResolver, HelpChain};
use super::telemetry::event::IntentKind;
use crate::config::ChemBotConfig;
use crate::error::ChemBotError;
use crate::services::pubchem::{CompoundService, PubChemClient, ServiceError};

/// Entry point for one conversational turn: routes by intent name.
///
/// Holds no per-conversation state. Everything that must survive a turn
/// travels in the session attributes of the event and the response.
pub struct Reactor {
    service: Box<dyn CompoundService>,
    resolver: DialogStateResolver,
    help: HelpChain,
}

impl Reactor {
    pub fn new(config: &ChemBotConfig, service: Box<dyn CompoundService>) -> Self {
        Self {
            service,
            resolver: DialogStateResolver::new(config),
            help: HelpChain::new(config.valid_id_types.clone()),
        }
    }

    /// Reactor backed by the live PubChem REST API.
    pub fn with_pubchem(config: &ChemBotConfig) -> Result<Self, ServiceError> {
        let client = PubChemClient::new(config)?;
        Ok(Self::new(config, Box::new(client)))
    }

    pub fn intent_kind(intent_name: &str) -> Option<IntentKind> {
        match intent_name {
            INTENT_COMPOUND_INFO => Some(IntentKind::CompoundInfo),
            INTENT_BOT_HELP => Some(IntentKind::Help),
            _ => None,
        }
    }

    pub async fn handle_turn(&self, event: TurnEvent) -> Result<TurnResponse, ChemBotError> {
        let span = info_span!("turn", turn_id = %Uuid::new_v4(), user_id = %event.user_id);
        self.dispatch(event).instrument(span).await
    }

    async fn dispatch(&self, event: TurnEvent) -> Result<TurnResponse, ChemBotError> {
        match Self::intent_kind(&event.intent_name) {
            Some(IntentKind::CompoundInfo) => Ok(self.resolver.resolve(self.service.as_ref(), &event).await),
            Some(IntentKind::Help) => {
                let topic = event.slot(SLOT_HELP_CRITERIA);
                info!("Help requested for {:?}", topic);
                Ok(TurnResponse {
                    dialog_action: self.help.compose(topic).into_action(),
                    session_attributes: event.session_attributes.unwrap_or_default(),
                })
            }
            None => Err(ChemBotError::UnsupportedIntent(event.intent_name)),
        }
    }
}
