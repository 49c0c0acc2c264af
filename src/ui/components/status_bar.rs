use eframe::egui;

use crate::common::DispatchOutcome;
use crate::ui::state::AppState;

#[derive(Default)]
pub struct StatusActions {
    pub clear_transcript: bool,
}

pub fn render(ui: &mut egui::Ui, state: &AppState) -> StatusActions {
    let mut actions = StatusActions::default();

    ui.horizontal(|ui| {
        if state.is_waiting() {
            ui.spinner();
            ui.label(egui::RichText::new("Waiting for reply...").weak());
        } else if state.last_outcome == Some(DispatchOutcome::Failed) {
            ui.colored_label(egui::Color32::LIGHT_RED, "Last message failed");
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("Clear").clicked() {
                actions.clear_transcript = true;
            }
        });
    });

    actions
}
