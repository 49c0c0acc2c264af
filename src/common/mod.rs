pub mod commands;
pub mod events;
pub mod payload;
pub mod types;

pub use commands::ChatCommand;
pub use events::{ChatEvent, DispatchOutcome};
pub use payload::{FALLBACK_TEXT, IncomingPayload, OutgoingPayload};
pub use types::{ChatMessage, Sender};
