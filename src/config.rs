use std::time::Duration;

use crate::error::ChemBotError;

pub const DEFAULT_PUBCHEM_DOMAIN: &str = "https://pubchem.ncbi.nlm.nih.gov/";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Identifier types PubChem accepts for an exact compound lookup.
pub const DEFAULT_ID_TYPES: &[&str] = &["cid", "name", "smiles", "inchikey", "sid", "aid"];

#[derive(Debug, Clone)]
pub struct ChemBotConfig {
    /// Public site root. Record pages hang off it, the REST API lives under `rest/pug/`.
    pub pubchem_domain: String,
    pub request_timeout: Duration,
    pub valid_id_types: Vec<String>,
}

impl Default for ChemBotConfig {
    fn default() -> Self {
        Self {
            pubchem_domain: DEFAULT_PUBCHEM_DOMAIN.to_string(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            valid_id_types: DEFAULT_ID_TYPES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ChemBotConfig {
    /// Reads `CHEMBOT_PUBCHEM_DOMAIN`, `CHEMBOT_TIMEOUT_MS` and `CHEMBOT_ID_TYPES`,
    /// keeping the default for anything unset.
    pub fn from_env() -> Result<Self, ChemBotError> {
        let mut config = Self::default();

        if let Ok(domain) = std::env::var("CHEMBOT_PUBCHEM_DOMAIN") {
            config.pubchem_domain = normalize_domain(&domain);
        }

        if let Ok(raw) = std::env::var("CHEMBOT_TIMEOUT_MS") {
            let ms: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| ChemBotError::Config {
                var: "CHEMBOT_TIMEOUT_MS",
                reason: e.to_string(),
            })?;
            config.request_timeout = Duration::from_millis(ms);
        }

        if let Ok(raw) = std::env::var("CHEMBOT_ID_TYPES") {
            let types: Vec<String> = raw
                .split(',')
                .map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
                .collect();
            if types.is_empty() {
                return Err(ChemBotError::Config {
                    var: "CHEMBOT_ID_TYPES",
                    reason: "no identifier types listed".to_string(),
                });
            }
            config.valid_id_types = types;
        }

        Ok(config)
    }

    /// `<domain>rest/pug/`
    pub fn rest_root(&self) -> String {
        format!("{}rest/pug/", self.pubchem_domain)
    }
}

fn normalize_domain(domain: &str) -> String {
    let trimmed = domain.trim();
    if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{}/", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rest_root() {
        let config = ChemBotConfig::default();
        assert_eq!(config.rest_root(), "https://pubchem.ncbi.nlm.nih.gov/rest/pug/");
        assert_eq!(config.valid_id_types.len(), 6);
    }

    #[test]
    fn domain_gets_trailing_slash() {
        assert_eq!(normalize_domain(" http://localhost:9000 "), "http://localhost:9000/");
        assert_eq!(normalize_domain("http://localhost:9000/"), "http://localhost:9000/");
    }
}
