//! Turns a PubChem JSON payload into reply text.
//!
//! The chain is an ordered list of shape formatters, each keyed on the
//! top-level member it understands. Unknown members fall through to an
//! empty result so that upstream schema drift yields no text instead of a
//! failed turn.

use serde_json::{Map, Value};
use tracing::warn;

use crate::kernel::intent::types::AttachmentDescriptor;
use crate::kernel::properties::property_info;

pub const PROPERTY_TABLE: &str = "PropertyTable";
pub const INFORMATION_LIST: &str = "InformationList";
pub const SYNONYMS_HEADER: &str = "Synonyms:";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedResponse {
    /// Empty when the payload never named a compound.
    pub compound_id: String,
    pub text: String,
    pub attachments: Vec<AttachmentDescriptor>,
}

impl NormalizedResponse {
    fn merge(&mut self, other: NormalizedResponse) {
        if !other.compound_id.is_empty() {
            self.compound_id = other.compound_id;
        }
        self.text.push_str(&other.text);
        self.attachments.extend(other.attachments);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeFormatter {
    /// `{"PropertyTable": {"Properties": [{"CID": .., "<Property>": ..}]}}`
    PropertyTable,
    /// `{"InformationList": {"Information": [{"CID": .., "Synonym": [..]}]}}`
    InformationList,
}

impl ShapeFormatter {
    pub fn handles(&self, key: &str) -> bool {
        match self {
            ShapeFormatter::PropertyTable => key == PROPERTY_TABLE,
            ShapeFormatter::InformationList => key == INFORMATION_LIST,
        }
    }

    pub fn format(&self, fragment: &Value) -> NormalizedResponse {
        match self {
            ShapeFormatter::PropertyTable => format_property_table(fragment),
            ShapeFormatter::InformationList => format_information_list(fragment),
        }
    }
}

pub struct ResponseFormatterChain {
    formatters: Vec<ShapeFormatter>,
}

impl ResponseFormatterChain {
    pub fn new() -> Self {
        Self {
            formatters: vec![ShapeFormatter::PropertyTable, ShapeFormatter::InformationList],
        }
    }

    /// Formats every top-level member in payload order and merges the results.
    pub fn format(&self, payload: &Value) -> NormalizedResponse {
        let mut result = NormalizedResponse::default();
        match payload.as_object() {
            Some(members) => {
                for (key, fragment) in members {
                    result.merge(self.format_member(key, fragment));
                }
            }
            None => warn!("PubChem payload is not an object, nothing to format"),
        }
        result
    }

    /// First formatter that handles `key` wins; otherwise an empty response.
    pub fn format_member(&self, key: &str, fragment: &Value) -> NormalizedResponse {
        match self.formatters.iter().find(|f| f.handles(key)) {
            Some(formatter) => formatter.format(fragment),
            None => {
                warn!("Unrecognized PubChem response shape '{}'", key);
                NormalizedResponse::default()
            }
        }
    }
}

impl Default for ResponseFormatterChain {
    fn default() -> Self {
        Self::new()
    }
}

fn is_id_field(name: &str) -> bool {
    name.eq_ignore_ascii_case("CID")
}

fn render_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Records of a nested list: the first array member of `fragment`.
fn records(fragment: &Value) -> &[Value] {
    fragment
        .as_object()
        .and_then(|members| members.values().find_map(Value::as_array))
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn format_property_table(fragment: &Value) -> NormalizedResponse {
    let mut result = NormalizedResponse::default();
    // Only the first row is shown, in the order the service returned its columns.
    let Some(row) = records(fragment).first().and_then(Value::as_object) else {
        return result;
    };

    for (name, value) in row {
        if is_id_field(name) {
            result.compound_id = render_scalar(value);
            continue;
        }
        result.text.push_str(&property_line(name, value));
    }
    result
}

fn property_line(name: &str, value: &Value) -> String {
    let rendered = render_scalar(value);
    match property_info(name) {
        Some(info) => match info.unit {
            Some(unit) => format!("*{}*: {} {}\n", info.label, rendered, unit),
            None => format!("*{}*: {}\n", info.label, rendered),
        },
        None => {
            warn!("No label for PubChem property '{}'", name);
            format!("*{}*: {}\n", name, rendered)
        }
    }
}

fn format_information_list(fragment: &Value) -> NormalizedResponse {
    let mut result = NormalizedResponse::default();
    for entry in records(fragment).iter().filter_map(Value::as_object) {
        format_information_entry(entry, &mut result);
    }
    result
}

fn format_information_entry(entry: &Map<String, Value>, result: &mut NormalizedResponse) {
    for (name, value) in entry {
        match value {
            Value::Array(items) => {
                result.text.push_str(SYNONYMS_HEADER);
                result.text.push('\n');
                for item in items {
                    result.text.push_str(&render_scalar(item));
                    result.text.push('\n');
                }
            }
            scalar if is_id_field(name) => result.compound_id = render_scalar(scalar),
            _ => {}
        }
    }
}
