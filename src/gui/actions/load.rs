// src/gui/actions/load.rs
use std::path::PathBuf;

use crate::{gui::{app::App, progress::GuiProgress}, runner};

/// Replay the capture named in the text field into a fresh session.
pub fn load(app: &mut App) {
    let text = app.state.gui.capture_text.trim();
    if text.is_empty() {
        app.status("No capture file given");
        logd!("Load: Clicked with an empty path");
        return;
    }
    app.state.options.capture.path = PathBuf::from(crate::file::normalize_separators(text));

    // a new capture is a new tab as far as the tracker is concerned
    app.tracker.clear();

    logf!("Load: Begin {}", app.state.options.capture.path.display());
    let mut prog = GuiProgress::new(app.status.clone());
    match runner::replay(&app.state.options.capture, &mut app.tracker, Some(&mut prog)) {
        Ok(summary) => {
            let view = app.tracker.current_session();
            logf!(
                "Load: OK events={} queued={} results={}",
                summary.events, summary.queued, view.results.len()
            );
            if summary.flush.skipped > 0 {
                app.status(format!(
                    "Loaded {} result(s); {} response(s) skipped (see log)",
                    view.results.len(), summary.flush.skipped
                ));
            } else {
                app.status(format!("Loaded {} result(s)", view.results.len()));
            }
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            app.status(format!("Load error: {e}"));
        }
    }
}
