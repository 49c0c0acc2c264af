use crate::common::{ChatMessage, Sender};

/// What the dispatcher needs from whatever is showing the conversation.
pub trait ChatSurface {
    /// Appends one entry to the transcript. No-op when the transcript is not mounted.
    fn append_message(&mut self, message: ChatMessage);

    /// Current raw input, or `None` when there is no input field.
    fn read_input(&self) -> Option<String>;

    fn clear_input(&mut self);

    fn has_input(&self) -> bool {
        self.read_input().is_some()
    }

    fn display(&mut self, text: &str, sender: Sender) {
        self.append_message(ChatMessage::new(text, sender));
    }
}

/// Append-only message log backing the chat area.
#[derive(Debug, Default)]
pub struct Transcript {
    entries: Option<Vec<ChatMessage>>,
    scroll_pending: bool,
}

impl Transcript {
    pub fn mounted() -> Self {
        Self {
            entries: Some(Vec::new()),
            scroll_pending: false,
        }
    }

    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn is_mounted(&self) -> bool {
        self.entries.is_some()
    }

    pub fn push(&mut self, message: ChatMessage) {
        let Some(entries) = self.entries.as_mut() else {
            log::debug!("Transcript not mounted; dropping {:?} message", message.sender);
            return;
        };
        entries.push(message);
        self.scroll_pending = true;
    }

    pub fn messages(&self) -> &[ChatMessage] {
        self.entries.as_deref().unwrap_or_default()
    }

    pub fn clear(&mut self) {
        if let Some(entries) = self.entries.as_mut() {
            entries.clear();
        }
        self.scroll_pending = false;
    }

    /// Returns whether the view should jump to the newest entry, resetting the flag.
    pub fn take_scroll_request(&mut self) -> bool {
        std::mem::take(&mut self.scroll_pending)
    }
}

/// Single-line text box the user types into.
#[derive(Debug, Default)]
pub struct InputField {
    value: Option<String>,
}

impl InputField {
    pub fn mounted() -> Self {
        Self {
            value: Some(String::new()),
        }
    }

    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Mutable buffer for the text edit widget.
    pub fn buffer_mut(&mut self) -> Option<&mut String> {
        self.value.as_mut()
    }

    pub fn set(&mut self, text: impl Into<String>) {
        if let Some(value) = self.value.as_mut() {
            *value = text.into();
        }
    }

    pub fn clear(&mut self) {
        if let Some(value) = self.value.as_mut() {
            value.clear();
        }
    }
}
