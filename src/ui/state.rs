use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent, ChatMessage, DispatchOutcome};
use crate::network::ERROR_TEXT;

use super::surface::{ChatSurface, InputField, Transcript};

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub transcript: Transcript,
    pub input: InputField,
    /// Dispatches sent to the worker whose outcome has not arrived yet.
    pub in_flight: usize,
    pub last_outcome: Option<DispatchOutcome>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::mounted(),
            input: InputField::mounted(),
            in_flight: 0,
            last_outcome: None,
        }
    }

    pub fn apply_event(&mut self, event: ChatEvent) {
        match event {
            ChatEvent::MessageReceived(message) => self.transcript.push(message),
            ChatEvent::DispatchSettled(outcome) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                self.last_outcome = Some(outcome);
            }
        }
    }

    /// Hands already-echoed text to the worker. If the worker cannot take it
    /// (queue full or gone), the dispatch fails here with the usual bot notice.
    /// Returns whether the text was queued.
    pub fn queue(&mut self, commands: &mpsc::Sender<ChatCommand>, text: String) -> bool {
        match commands.try_send(ChatCommand::SendMessage(text)) {
            Ok(()) => {
                self.in_flight += 1;
                true
            }
            Err(err) => {
                log::error!("Failed to send command to worker: {err}");
                self.append_message(ChatMessage::bot(ERROR_TEXT));
                self.last_outcome = Some(DispatchOutcome::Failed);
                false
            }
        }
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight > 0
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSurface for AppState {
    fn append_message(&mut self, message: ChatMessage) {
        self.transcript.push(message);
    }

    fn read_input(&self) -> Option<String> {
        self.input.value().map(str::to_string)
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }
}
