use crate::common::{ChatMessage, DispatchOutcome};
use crate::ui::surface::ChatSurface;

use super::backend::ChatBackend;

/// Bot-labelled notice rendered for any failed exchange.
pub const ERROR_TEXT: &str =
    "System Error: cannot connect to the chatbot service. Ensure the backend is running.";

/// Sends user messages to the backend and turns the result into a bot message.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    backend: ChatBackend,
}

impl Dispatcher {
    pub fn new(backend: ChatBackend) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &ChatBackend {
        &self.backend
    }

    /// Local half of a dispatch: trim the input, echo it as a user message
    /// and clear the field. Returns `None` (and touches nothing) when the
    /// trimmed input is empty or there is no input field.
    pub fn take_outgoing<S: ChatSurface + ?Sized>(surface: &mut S) -> Option<String> {
        let raw = surface.read_input()?;
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let text = text.to_string();
        surface.append_message(ChatMessage::user(text.clone()));
        surface.clear_input();
        Some(text)
    }

    /// Network half of a dispatch. Never fails: errors become [`ERROR_TEXT`].
    pub async fn reply_for(&self, text: &str) -> (ChatMessage, DispatchOutcome) {
        match self.backend.exchange(text).await {
            Ok(payload) => (
                ChatMessage::bot(payload.reply_text()),
                DispatchOutcome::Succeeded,
            ),
            Err(err) => {
                log::error!("API communication error ({:?}): {err}", err.kind());
                (ChatMessage::bot(ERROR_TEXT), DispatchOutcome::Failed)
            }
        }
    }

    /// Full dispatch against a single surface.
    pub async fn send_message<S: ChatSurface + ?Sized>(&self, surface: &mut S) -> DispatchOutcome {
        let Some(text) = Self::take_outgoing(surface) else {
            return DispatchOutcome::Aborted;
        };

        let (reply, outcome) = self.reply_for(&text).await;
        surface.append_message(reply);
        outcome
    }
}
