use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent};

use super::dispatcher::Dispatcher;

/// Background worker: nhận lệnh từ UI, gọi backend, trả sự kiện lên UI.
///
/// Commands are handled one at a time, so replies arrive in send order.
pub struct ChatClient {
    dispatcher: Dispatcher,
    event_sender: mpsc::Sender<ChatEvent>,
    command_receiver: mpsc::Receiver<ChatCommand>,
}

impl ChatClient {
    pub fn new(
        dispatcher: Dispatcher,
        event_sender: mpsc::Sender<ChatEvent>,
        command_receiver: mpsc::Receiver<ChatCommand>,
    ) -> Self {
        Self {
            dispatcher,
            event_sender,
            command_receiver,
        }
    }

    /// Runs until the UI drops its command sender.
    pub async fn run(mut self) {
        log::info!(
            "Chat worker started for {}",
            self.dispatcher.backend().endpoint()
        );

        while let Some(command) = self.command_receiver.recv().await {
            self.handle_command(command).await;
        }

        log::info!("Chat worker stopped");
    }

    async fn handle_command(&mut self, command: ChatCommand) {
        match command {
            ChatCommand::SendMessage(text) => {
                let (reply, outcome) = self.dispatcher.reply_for(&text).await;

                if let Err(err) = self
                    .event_sender
                    .send(ChatEvent::MessageReceived(reply))
                    .await
                {
                    log::warn!("Failed to deliver reply to UI: {err}");
                }
                if let Err(err) = self
                    .event_sender
                    .send(ChatEvent::DispatchSettled(outcome))
                    .await
                {
                    log::warn!("Failed to deliver dispatch outcome to UI: {err}");
                }
            }
        }
    }
}
