// src/config/options.rs
use std::path::{ Path, PathBuf };
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub capture: CaptureOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            capture: CaptureOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CaptureFormat {
    /// HTTP Archive saved from the browser's network panel
    Har,
    /// One raw response body per line
    JsonLines,
}

impl CaptureFormat {
    /// `.har` → Har, anything else → JsonLines.
    pub fn detect(path: &Path) -> Self {
        let is_har = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("har"))
            .unwrap_or(false);
        if is_har { CaptureFormat::Har } else { CaptureFormat::JsonLines }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaptureOptions {
    pub path: PathBuf,
    /// None → pick from the file extension
    pub format: Option<CaptureFormat>,
    /// Substring a request URL must contain to count as the search page
    pub host: String,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::new(),
            format: None,
            host: s!(TARGET_HOST),
        }
    }
}

impl CaptureOptions {
    pub fn resolved_format(&self) -> CaptureFormat {
        self.format.unwrap_or_else(|| CaptureFormat::detect(&self.path))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Quoting {
    /// Every cell wrapped in quotes, contents left as-is
    Always,
    /// Quote only cells that need it, doubling inner quotes
    Minimal,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    out_dir: PathBuf,
    pub quoting: Quoting,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            quoting: Quoting::Always,
        }
    }
}

impl ExportOptions {
    pub fn out_dir(&self) -> &Path { &self.out_dir }

    /// Parse GUI/CLI text into the output directory. Blank text keeps the current one.
    pub fn set_dir(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() { return; }
        self.out_dir = PathBuf::from(crate::file::normalize_separators(s));
    }

    /// `<dir>/<slug>.csv` and `<dir>/<slug>-info.csv`
    pub fn paths_for(&self, slug: &str) -> (PathBuf, PathBuf) {
        let results = self.out_dir.join(join!(slug, ".", EXPORT_EXT));
        let info = self.out_dir.join(join!(slug, INFO_SUFFIX, ".", EXPORT_EXT));
        (results, info)
    }
}
