use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::Value;
use tracing::debug;

use super::{CompoundService, ServiceError};
use crate::config::ChemBotConfig;

#[derive(Clone)]
pub struct PubChemClient {
    client: Client,
    rest_root: String,
}

impl PubChemClient {
    pub fn new(config: &ChemBotConfig) -> Result<Self, ServiceError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            client,
            rest_root: config.rest_root(),
        })
    }

    /// `<rest root>compound/<id type>/<search>/<tail...>`, every segment percent-encoded.
    fn compound_url(&self, identifier_type: &str, search_criteria: &str, tail: &[&str]) -> Result<Url, ServiceError> {
        let mut url = Url::parse(&self.rest_root).map_err(|e| ServiceError::Url(e.to_string()))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ServiceError::Url(format!("{} cannot be a base", self.rest_root)))?;
            segments.pop_if_empty();
            segments.extend(["compound", identifier_type, search_criteria]);
            segments.extend(tail);
        }
        Ok(url)
    }

    async fn get_json(&self, url: Url) -> Result<Value, ServiceError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header("Connection", "close")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(ServiceError::status(response.status().as_u16()));
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl CompoundService for PubChemClient {
    async fn fetch_properties(
        &self,
        search_criteria: &str,
        identifier_type: &str,
        properties: &[&str],
    ) -> Result<Value, ServiceError> {
        let joined = properties.join(",");
        let url = self.compound_url(identifier_type, search_criteria, &["property", &joined, "json"])?;
        self.get_json(url).await
    }

    async fn fetch_synonyms(&self, search_criteria: &str, identifier_type: &str) -> Result<Value, ServiceError> {
        let url = self.compound_url(identifier_type, search_criteria, &["synonyms", "json"])?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_segment_encoded() {
        let client = PubChemClient::new(&ChemBotConfig::default()).unwrap();
        let url = client
            .compound_url("name", "acetic acid", &["property", "MolecularWeight,XLogP", "json"])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/acetic%20acid/property/MolecularWeight,XLogP/json"
        );

        let url = client.compound_url("smiles", "C/C=C/C", &["synonyms", "json"]).unwrap();
        assert!(url.as_str().contains("/compound/smiles/C%2FC=C%2FC/synonyms/json"));
    }
}
