use thiserror::Error;

/// Crate-level failures. Everything the user can recover from is a
/// `DialogAction`, not one of these.
#[derive(Debug, Error)]
pub enum ChemBotError {
    #[error("intent with name {0} not supported")]
    UnsupportedIntent(String),

    #[error("session attribute `{key}` does not hold a valid request: {source}")]
    SessionDecode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid configuration value for {var}: {reason}")]
    Config { var: &'static str, reason: String },
}
