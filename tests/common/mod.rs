#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use chembot::services::pubchem::{CompoundService, ServiceError};

#[derive(Debug, Clone)]
pub enum Canned {
    Payload(Value),
    Status(u16),
    Garbage,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub endpoint: &'static str,
    pub search: String,
    pub id_type: String,
    pub properties: Vec<String>,
}

/// In-memory PubChem: answers every call with the same canned response and
/// records what it was asked.
pub struct StubService {
    response: Canned,
    pub calls: Arc<Mutex<Vec<Call>>>,
}

impl StubService {
    pub fn new(response: Canned) -> Self {
        Self {
            response,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn payload(value: Value) -> Self {
        Self::new(Canned::Payload(value))
    }

    pub fn status(code: u16) -> Self {
        Self::new(Canned::Status(code))
    }

    pub fn recorded(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn answer(&self, call: Call) -> Result<Value, ServiceError> {
        self.calls.lock().unwrap().push(call);
        match &self.response {
            Canned::Payload(v) => Ok(v.clone()),
            Canned::Status(code) => Err(ServiceError::status(*code)),
            Canned::Garbage => Err(serde_json::from_str::<Value>("<html>").unwrap_err().into()),
        }
    }
}

#[async_trait]
impl CompoundService for StubService {
    async fn fetch_properties(
        &self,
        search_criteria: &str,
        identifier_type: &str,
        properties: &[&str],
    ) -> Result<Value, ServiceError> {
        self.answer(Call {
            endpoint: "property",
            search: search_criteria.to_string(),
            id_type: identifier_type.to_string(),
            properties: properties.iter().map(|p| p.to_string()).collect(),
        })
    }

    async fn fetch_synonyms(&self, search_criteria: &str, identifier_type: &str) -> Result<Value, ServiceError> {
        self.answer(Call {
            endpoint: "synonyms",
            search: search_criteria.to_string(),
            id_type: identifier_type.to_string(),
            properties: Vec::new(),
        })
    }
}

pub fn glucose_weight() -> Value {
    json!({
        "PropertyTable": {
            "Properties": [
                { "CID": 5793, "MolecularWeight": "180.16" }
            ]
        }
    })
}

pub fn glucose_synonyms() -> Value {
    json!({
        "InformationList": {
            "Information": [
                {
                    "CID": 5793,
                    "Synonym": ["D-Glucose", "glucose", "Dextrose", "D-Glucose"]
                }
            ]
        }
    })
}

pub fn glucose_flash_card() -> Value {
    json!({
        "PropertyTable": {
            "Properties": [
                {
                    "CID": 5793,
                    "MolecularFormula": "C6H12O6",
                    "MolecularWeight": "180.16",
                    "CanonicalSMILES": "C(C1C(C(C(C(O1)O)O)O)O)O",
                    "IsomericSMILES": "C([C@@H]1[C@H]([C@@H]([C@H](C(O1)O)O)O)O)O",
                    "InChI": "InChI=1S/C6H12O6/c7-1-2-3(8)4(9)5(10)6(11)12-2/h2-11H,1H2/t2-,3-,4+,5-,6?/m1/s1",
                    "IUPACName": "(3R,4S,5S,6R)-6-(hydroxymethyl)oxane-2,3,4,5-tetrol",
                    "XLogP": -2.6,
                    "ExactMass": "180.06338810",
                    "MonoisotopicMass": "180.06338810"
                }
            ]
        }
    })
}
