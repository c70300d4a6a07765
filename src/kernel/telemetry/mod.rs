//! Turn telemetry.
//!
//! # SAFETY INVARIANT
//! Telemetry is a READ-ONLY side-effect layer.
//! It must **NEVER** be read inside decision logic (resolver, validator or formatters).
//!
//! # PRIVACY INVARIANT
//! Events never carry user content: no slot values, compound names or reply text.
//! Only kinds, slot names and counts.

pub mod event;
pub mod metrics;
pub mod recorder;
