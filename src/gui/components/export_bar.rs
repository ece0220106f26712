// src/gui/components/export_bar.rs

use eframe::egui;
use crate::{config::options::Quoting, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Output dir + quoting ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.state.gui.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.state.gui.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.state.gui.out_dir_text);
        }

        let export = &mut app.state.options.export;
        let before = export.quoting;
        ui.label("Quoting:");
        ui.selectable_value(&mut export.quoting, Quoting::Always, "Always");
        ui.selectable_value(&mut export.quoting, Quoting::Minimal, "Minimal");
        if export.quoting != before {
            logf!("UI: Quoting → {:?}", export.quoting);
        }
    });

    // --- Export + status ---
    ui.horizontal(|ui| {
        let can_export = !app.tracker.current_session().is_empty();
        if ui.add_enabled(can_export, egui::Button::new("Export")).clicked() {
            actions::export(app);
        }

        ui.label(format!("Status: {}", app.status_text()));
    });
}
