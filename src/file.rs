// src/file.rs

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::config::options::ExportOptions;
use crate::export::ExportBundle;

/// Write `<slug>.csv` and `<slug>-info.csv` into the export directory.
/// Returns the paths written, results file first.
pub fn write_export(
    export: &ExportOptions,
    bundle: &ExportBundle,
) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    ensure_directory(export.out_dir())?;

    let (results_path, info_path) = export.paths_for(&bundle.slug);

    fs::write(&results_path, bundle.results_csv(export))?;
    logd!("Export: Wrote {}", results_path.display());

    fs::write(&info_path, bundle.info_csv(export))?;
    logd!("Export: Wrote {}", info_path.display());

    Ok(vec![results_path, info_path])
}

pub fn normalize_separators(p: &str) -> String {
    let sep = std::path::MAIN_SEPARATOR;
    p.chars().map(|c| if c=='/'||c=='\\' { sep } else { c }).collect()
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if dir.as_os_str().is_empty() { return Ok(()); }
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}
