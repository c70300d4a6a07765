pub mod help;
pub mod resolver;
pub mod types;
pub mod validator;

pub use help::{HelpChain, HelpResponse};
pub use resolver::DialogStateResolver;
pub use types::{AttachmentDescriptor, DialogAction, FulfillmentState};
pub use validator::{RequestValidator, SlotViolation};
