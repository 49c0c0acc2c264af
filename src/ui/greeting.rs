use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::common::{ChatEvent, ChatMessage};

/// Schedules the one-off welcome message.
///
/// Nothing is scheduled when the surface has no input field. The greeting
/// is local only and never reaches the backend.
pub fn schedule_greeting(
    has_input: bool,
    text: String,
    delay: Duration,
    events: mpsc::Sender<ChatEvent>,
) -> Option<JoinHandle<()>> {
    if !has_input {
        log::debug!("No input field mounted; skipping greeting");
        return None;
    }

    Some(tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if let Err(err) = events
            .send(ChatEvent::MessageReceived(ChatMessage::bot(text)))
            .await
        {
            log::warn!("Failed to deliver greeting: {err}");
        }
    }))
}
