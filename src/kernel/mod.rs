pub mod event;
pub mod intent;
pub mod properties;
pub mod reactor;
pub mod request;
pub mod state;
pub mod telemetry;
