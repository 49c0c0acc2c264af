use std::time::Duration;

use eframe::egui;
use tokio::sync::mpsc;

use crate::common::{ChatCommand, ChatEvent};
use crate::config::AppConfig;
use crate::network::Dispatcher;

use super::components::{
    chat_area, input_bar,
    status_bar::{self, StatusActions},
};
use super::greeting::schedule_greeting;
use super::state::AppState;
use super::surface::ChatSurface;

/// How often the window polls the worker channel while idle.
const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(50);

pub struct ChatApp {
    state: AppState,
    command_sender: mpsc::Sender<ChatCommand>,
    event_receiver: mpsc::Receiver<ChatEvent>,
}

impl ChatApp {
    /// Must be called inside a tokio runtime context; the greeting timer is spawned here.
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        command_sender: mpsc::Sender<ChatCommand>,
        event_sender: mpsc::Sender<ChatEvent>,
        event_receiver: mpsc::Receiver<ChatEvent>,
    ) -> Self {
        let state = AppState::new();

        schedule_greeting(
            state.has_input(),
            config.greeting.clone(),
            config.greeting_delay(),
            event_sender,
        );

        Self {
            state,
            command_sender,
            event_receiver,
        }
    }

    fn handle_chat_events(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.state.apply_event(event);
        }
    }

    fn dispatch_input(&mut self) {
        let Some(text) = Dispatcher::take_outgoing(&mut self.state) else {
            return;
        };

        self.state.queue(&self.command_sender, text);
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_chat_events();

        egui::TopBottomPanel::bottom("input_bar").show(ctx, |ui| {
            ui.add_space(4.0);
            if input_bar::render(ui, &mut self.state.input) {
                self.dispatch_input();
            }
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Q&A Chat");
            let actions: StatusActions = status_bar::render(ui, &self.state);
            if actions.clear_transcript {
                self.state.transcript.clear();
            }
            ui.separator();
            chat_area::render(ui, &mut self.state.transcript);
        });

        ctx.request_repaint_after(EVENT_POLL_INTERVAL);
    }
}
