pub mod config;
pub mod error;
pub mod kernel;
pub mod services;

// Re-exports for the binary and integration tests
pub use config::ChemBotConfig;
pub use error::ChemBotError;
pub use kernel::reactor::Reactor;
