// src/gui/components/session_panel.rs
//
// The popup view: query, result count, and the active filters.
// Purely a view over the tracker's current session.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};
use crate::{gui::app::App, specs::filters};

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let view = app.tracker.current_session();

    if view.is_empty() {
        ui.centered_and_justified(|ui| {
            ui.label(RichText::new("No search results captured yet").weak());
        });
        return;
    }

    ui.horizontal(|ui| {
        ui.label("Query:");
        ui.label(RichText::new(view.query).strong());
    });
    ui.horizontal(|ui| {
        ui.label("Results:");
        ui.label(RichText::new(view.results.len().to_string()).strong());
    });

    ui.separator();

    if view.modifiers.is_empty() {
        ui.label(RichText::new("No filters").weak());
        return;
    }

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::auto().at_least(140.0).resizable(true))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut header| {
            header.col(|ui| { ui.strong("Filter"); });
            header.col(|ui| { ui.strong("Value"); });
        })
        .body(|mut body| {
            for (code, value) in view.modifiers.iter() {
                body.row(20.0, |mut row| {
                    row.col(|ui| { ui.label(filters::label(code)); });
                    row.col(|ui| { ui.label(value); });
                });
            }
        });
}
