use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;

use crate::common::{ChatEvent, ChatMessage};
use crate::config::AppConfig;
use crate::network::Dispatcher;
use crate::ui::greeting::schedule_greeting;
use crate::ui::surface::ChatSurface;

/// Line-oriented surface: the transcript is `out`, the input is the last line read.
pub struct ConsoleSurface<W: Write> {
    out: W,
    pending: Option<String>,
}

impl<W: Write> ConsoleSurface<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            pending: Some(String::new()),
        }
    }

    pub fn set_input(&mut self, line: String) {
        if let Some(pending) = self.pending.as_mut() {
            *pending = line;
        }
    }

    /// Called once stdin is exhausted.
    pub fn close_input(&mut self) {
        self.pending = None;
    }

    pub fn apply_event(&mut self, event: ChatEvent) {
        if let ChatEvent::MessageReceived(message) = event {
            self.append_message(message);
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ChatSurface for ConsoleSurface<W> {
    fn append_message(&mut self, message: ChatMessage) {
        let written = writeln!(self.out, "{}> {}", message.sender.label(), message.text)
            .and_then(|_| self.out.flush());
        if let Err(err) = written {
            log::warn!("Failed to write to console: {err}");
        }
    }

    fn read_input(&self) -> Option<String> {
        self.pending.clone()
    }

    fn clear_input(&mut self) {
        if let Some(pending) = self.pending.as_mut() {
            pending.clear();
        }
    }
}

/// Reads lines from `input` until EOF, dispatching each one.
///
/// A greeting still pending at EOF is waited for and printed before returning.
pub async fn run<R, W>(
    dispatcher: &Dispatcher,
    config: &AppConfig,
    input: R,
    out: W,
) -> std::io::Result<ConsoleSurface<W>>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut surface = ConsoleSurface::new(out);
    let (event_tx, mut event_rx) = mpsc::channel(8);
    schedule_greeting(
        surface.has_input(),
        config.greeting.clone(),
        config.greeting_delay(),
        event_tx,
    );

    let mut lines = input.lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => {
                    surface.set_input(line);
                    let outcome = dispatcher.send_message(&mut surface).await;
                    log::debug!("Dispatch finished: {outcome:?}");
                }
                None => break,
            },
            Some(event) = event_rx.recv() => surface.apply_event(event),
        }
    }

    // stdin có thể hết trước khi lời chào tới (input qua pipe)
    while let Some(event) = event_rx.recv().await {
        surface.apply_event(event);
    }

    surface.close_input();
    Ok(surface)
}
