use serde::{Deserialize, Serialize};

/// Shown when the backend answers successfully but without usable text.
pub const FALLBACK_TEXT: &str = "No response received from the bot.";

/// Body of the POST sent to the backend.
#[derive(Debug, Clone, Serialize)]
pub struct OutgoingPayload<'a> {
    pub message: &'a str,
}

/// Body returned by the backend on success. `response` may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IncomingPayload {
    #[serde(default)]
    pub response: Option<String>,
}

impl IncomingPayload {
    /// Reply text to render, falling back when `response` is absent, null or empty.
    pub fn reply_text(&self) -> &str {
        match self.response.as_deref() {
            Some(text) if !text.is_empty() => text,
            _ => FALLBACK_TEXT,
        }
    }
}
