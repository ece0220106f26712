// src/gui/actions/export.rs
use crate::{export, gui::app::App};

pub fn export(app: &mut App) {
    // apply the typed directory first (mutates app) before borrowing the session
    if app.state.gui.out_dir_dirty {
        app.state.options.export.set_dir(&app.state.gui.out_dir_text);
        logf!("Export: Out dir set → {}", app.state.options.export.out_dir().display());
        app.state.gui.out_dir_dirty = false;
    }

    let status_msg = match export::export_session(app.tracker.current_session(), &app.state.options.export) {
        Ok(paths) => {
            let listed: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
            logf!("Export: OK count={} files={}", paths.len(), listed.join(", "));
            format!("Exported {}", listed.join(" and "))
        }
        Err(e) => {
            loge!("Export: Error: {}", e);
            format!("Export error: {e}")
        }
    };

    app.status(status_msg);
}
