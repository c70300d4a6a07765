use super::types::DialogAction;
use crate::kernel::properties::PROPERTY_CATALOG;

pub const HELP_CRITERIA_CHEMICAL_PROPERTIES: &str = "Chemical Properties";
pub const HELP_CRITERIA_SEARCH_CRITERIA: &str = "Search Criteria";
pub const HELP_CRITERIA_ID_TYPE: &str = "ID Type";
pub const HELP_CRITERIA_FLASH_CARD: &str = "Flash Card";

pub const TEXT_REQUEST_NOT_PROCESSED: &str = "It was not possible to process your help request";
const TEXT_HELP_TITLE: &str = "*ChemBot Help*";

/// Outcome of a help lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpResponse {
    pub successful: bool,
    pub text: String,
}

impl HelpResponse {
    pub fn into_action(self) -> DialogAction {
        if self.successful {
            DialogAction::fulfilled(self.text, Vec::new())
        } else {
            DialogAction::failed(self.text)
        }
    }
}

type Composer = fn(&HelpChain) -> String;

/// Static help topics, matched exactly and in order, with a fixed fallback.
pub struct HelpChain {
    topics: Vec<(&'static str, Composer)>,
    id_types: Vec<String>,
}

impl HelpChain {
    pub fn new(id_types: Vec<String>) -> Self {
        Self {
            topics: vec![
                (HELP_CRITERIA_CHEMICAL_PROPERTIES, compose_chemical_properties as Composer),
                (HELP_CRITERIA_ID_TYPE, compose_id_types),
                (HELP_CRITERIA_SEARCH_CRITERIA, compose_search_criteria),
                (HELP_CRITERIA_FLASH_CARD, compose_flash_card),
            ],
            id_types,
        }
    }

    pub fn compose(&self, topic: Option<&str>) -> HelpResponse {
        let topic = match topic {
            Some(t) if !t.is_empty() => t,
            _ => {
                return HelpResponse {
                    successful: false,
                    text: format!("{}.\n", TEXT_REQUEST_NOT_PROCESSED),
                }
            }
        };

        match self.topics.iter().find(|(name, _)| *name == topic) {
            Some((_, composer)) => HelpResponse {
                successful: true,
                text: composer(self),
            },
            None => HelpResponse {
                successful: false,
                text: format!("{} for {}.\n", TEXT_REQUEST_NOT_PROCESSED, topic),
            },
        }
    }
}

fn with_header(intro: &str) -> String {
    format!("{}\n{}\n", TEXT_HELP_TITLE, intro)
}

fn compose_chemical_properties(_: &HelpChain) -> String {
    let mut text = with_header(
        "ChemBot allows you to retrieve chemical properties from a compound by querying PubChem Web services.",
    );
    text.push_str("ChemBot supports the following Chemical Property requests:\n");
    for info in PROPERTY_CATALOG {
        text.push_str(&format!("{} (_{}_).\n", info.label, info.canonical));
    }
    text.push_str("To retrieve more information you can try attaching the SDF file during the request.\n");
    text
}

fn compose_id_types(chain: &HelpChain) -> String {
    let mut text = with_header("ChemBot uses the PubChem web services to execute exact searches.");
    text.push_str("ChemBot supports the following identifiers as search criteria:\n");
    for id_type in &chain.id_types {
        text.push_str(&format!("_{}_\n", id_type));
    }
    text
}

fn compose_search_criteria(_: &HelpChain) -> String {
    let mut text = with_header(
        "Use compound names, Cid and other values supported by the different Identifier types in PubChem.",
    );
    text.push_str("Some examples: glucose, 2662, acetic acid, CC(=O)O, etc.\n");
    text
}

fn compose_flash_card(_: &HelpChain) -> String {
    let mut text = with_header("Flash Card is a quick summary of important compound properties.");
    text.push_str("The cards contain the image structure, a link to the SDF file and a small set of chemical properties.\n");
    text.push_str("Do not hesitate to download SDF file to explore all the information in the compound.\n");
    text
}
