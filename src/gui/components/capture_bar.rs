// src/gui/components/capture_bar.rs

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Capture:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.capture_text)
                .hint_text("session.har or bodies.jsonl")
                .font(egui::TextStyle::Monospace),
        );
        let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

        if ui.button("Load").clicked() || submitted {
            actions::load(app);
        }
    });
}
