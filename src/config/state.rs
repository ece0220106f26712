// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: u32,
    pub window_h: u32,

    /// Capture path as typed; applied to options on Load
    pub capture_text: String,
    /// Output dir as typed; applied to options on Export
    pub out_dir_text: String,
    pub out_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 520,
            window_h: 420,
            capture_text: s!(),
            out_dir_text: s!(),
            out_dir_dirty: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl Default for AppState {
    fn default() -> Self {
        let options = AppOptions::default();
        let gui = GuiState {
            capture_text: options.capture.path.to_string_lossy().into_owned(),
            out_dir_text: options.export.out_dir().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
