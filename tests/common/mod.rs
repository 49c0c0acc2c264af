#![allow(dead_code)]

use reqwest::Url;

use rust_qa_chat::common::{ChatMessage, Sender};
use rust_qa_chat::network::{ChatBackend, Dispatcher};
use rust_qa_chat::ui::ChatSurface;

/// In-memory surface recording every rendered message.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub rendered: Vec<ChatMessage>,
    pub input: Option<String>,
    pub clears: usize,
}

impl FakeSurface {
    pub fn with_input(text: &str) -> Self {
        Self {
            input: Some(text.to_string()),
            ..Self::default()
        }
    }

    pub fn without_input() -> Self {
        Self::default()
    }

    pub fn rendered_pairs(&self) -> Vec<(String, Sender)> {
        self.rendered
            .iter()
            .map(|message| (message.text.clone(), message.sender))
            .collect()
    }
}

impl ChatSurface for FakeSurface {
    fn append_message(&mut self, message: ChatMessage) {
        self.rendered.push(message);
    }

    fn read_input(&self) -> Option<String> {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        if let Some(input) = self.input.as_mut() {
            input.clear();
        }
        self.clears += 1;
    }
}

pub fn dispatcher_for(url: &str) -> Dispatcher {
    Dispatcher::new(ChatBackend::new(Url::parse(url).unwrap()))
}

/// Endpoint on a port nothing listens on.
pub fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{port}/chat")
}
