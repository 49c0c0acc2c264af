use eframe::egui;

use crate::ui::surface::InputField;

/// Returns `true` when the user commits the line with Enter.
pub fn render(ui: &mut egui::Ui, input: &mut InputField) -> bool {
    let Some(buffer) = input.buffer_mut() else {
        return false;
    };

    let mut commit = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(buffer)
                .hint_text("Ask a question and press Enter")
                .desired_width(f32::INFINITY),
        );

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            commit = true;
            response.request_focus();
        }
    });

    commit
}
