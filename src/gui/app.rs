// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{consts::APP_TITLE, state::AppState},
    tracker::SearchTracker,
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // the one live search; components only borrow views of it
    pub tracker: SearchTracker,

    // status line (progress sinks write here)
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        logf!("Init: out_dir={}", state.options.export.out_dir().display());
        Self {
            state,
            tracker: SearchTracker::new(),
            status: Arc::new(Mutex::new(s!("Load a capture to begin"))),
        }
    }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        if let Ok(mut s) = self.status.lock() {
            *s = msg.into();
        }
    }

    pub fn status_text(&self) -> String {
        self.status.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("capture").show(ctx, |ui| {
            crate::gui::components::capture_bar::draw(ui, self);
        });

        egui::TopBottomPanel::bottom("export").show(ctx, |ui| {
            crate::gui::components::export_bar::draw(ui, self);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            crate::gui::components::session_panel::draw(ui, self);
        });
    }
}
