use thiserror::Error;
use tracing::debug;

use crate::kernel::event::SlotName;
use crate::kernel::properties::{PropertyAliasResolver, ResolvedProperty};
use crate::kernel::request::CompoundRequest;

pub const ERROR_ID_NOT_SUPPORTED: &str =
    "We currently do not support {} as a valid Identifier Type. Can you try again?";
pub const ERROR_PROPERTY_NOT_SUPPORTED: &str =
    "We currently do not support {} as a valid Chemical Property to search. Can you try again?";
pub const ERROR_SEARCH_CRITERIA_EMPTY: &str = "The search criteria cannot be empty. Please try again.";

/// The one slot a turn must re-ask for, with the prompt to ask it with.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SlotViolation {
    pub slot: SlotName,
    pub message: String,
}

impl SlotViolation {
    fn new(slot: SlotName, template: &str, raw: &str) -> Self {
        Self { slot, message: template.replacen("{}", raw, 1) }
    }
}

pub struct RequestValidator<'a> {
    aliases: &'a PropertyAliasResolver,
    valid_id_types: Vec<&'a str>,
}

impl<'a> RequestValidator<'a> {
    pub fn new(aliases: &'a PropertyAliasResolver, valid_id_types: Vec<&'a str>) -> Self {
        Self { aliases, valid_id_types }
    }

    /// Checks identifier type, then property, then search criteria, and stops
    /// at the first failure.
    pub fn validate(&self, request: &CompoundRequest) -> Result<(), SlotViolation> {
        self.resolve(request).map(|_| ())
    }

    /// Same checks as `validate`, handing back the resolved property on success.
    pub fn resolve(&self, request: &CompoundRequest) -> Result<ResolvedProperty, SlotViolation> {
        let id_type = request.identifier_type();
        if id_type.is_empty() || !self.valid_id_types.contains(&id_type) {
            return Err(SlotViolation::new(SlotName::IdType, ERROR_ID_NOT_SUPPORTED, id_type));
        }

        let property = match request.resolved_property(self.aliases) {
            Some(p) => p,
            None => {
                return Err(SlotViolation::new(
                    SlotName::PropertyToSearch,
                    ERROR_PROPERTY_NOT_SUPPORTED,
                    request.property_phrase(),
                ))
            }
        };

        if request.search_criteria().is_empty() {
            return Err(SlotViolation {
                slot: SlotName::CompoundToSearch,
                message: ERROR_SEARCH_CRITERIA_EMPTY.to_string(),
            });
        }

        debug!("Request accepted: {:?}", property);
        Ok(property)
    }
}
