use eframe::egui;

use crate::common::{ChatMessage, Sender};
use crate::ui::surface::Transcript;

const USER_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 180, 255);
const BOT_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 220, 150);

pub fn render(ui: &mut egui::Ui, transcript: &mut Transcript) {
    if !transcript.is_mounted() {
        return;
    }
    let scroll_to_latest = transcript.take_scroll_request();

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in transcript.messages() {
                render_message(ui, message);
            }

            // Kéo xuống tin nhắn mới nhất
            if scroll_to_latest {
                ui.scroll_to_cursor(Some(egui::Align::BOTTOM));
            }
        });
}

fn render_message(ui: &mut egui::Ui, message: &ChatMessage) {
    let (layout, color) = match message.sender {
        Sender::User => (egui::Layout::right_to_left(egui::Align::TOP), USER_COLOR),
        Sender::Bot => (egui::Layout::left_to_right(egui::Align::TOP), BOT_COLOR),
    };

    ui.with_layout(layout, |ui| {
        ui.colored_label(color, format!("{}:", message.sender.label()));
        ui.add(egui::Label::new(&message.text).wrap());
        ui.label(egui::RichText::new(message.rendered_at.format("%H:%M").to_string()).weak());
    });
}
