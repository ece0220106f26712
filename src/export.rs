// src/export.rs
//! Session → the two export files' contents.
//!
//! `<slug>.csv` holds one row per page hit; `<slug>-info.csv` records when the
//! export happened, the query, and every active filter under its display label.

use std::error::Error;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::config::options::ExportOptions;
use crate::core::sanitize::slug;
use crate::specs::{filters, results};
use crate::tracker::SessionView;
use crate::{csv, file};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportBundle {
    pub slug: String,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub info: Vec<Vec<String>>,
}

impl ExportBundle {
    pub fn results_csv(&self, export: &ExportOptions) -> String {
        csv::to_export_string(Some(self.headers.as_slice()), &self.rows, export.quoting)
    }

    pub fn info_csv(&self, export: &ExportOptions) -> String {
        csv::to_export_string(None, &self.info, export.quoting)
    }
}

/// Fails when there is nothing to export: no results, or no query to name the files after.
pub fn build(view: SessionView<'_>, today: NaiveDate) -> Result<ExportBundle, Box<dyn Error>> {
    if view.results.is_empty() {
        return Err("Nothing to export (no results captured)".into());
    }
    if view.query.is_empty() {
        return Err("Nothing to export (search has no query)".into());
    }

    Ok(ExportBundle {
        slug: slug(view.query),
        headers: results::headers(),
        rows: results::rows(view.results),
        info: info_rows(view, today),
    })
}

pub fn info_rows(view: SessionView<'_>, today: NaiveDate) -> Vec<Vec<String>> {
    let mut out = vec![
        vec![s!("Date of search"), results::format_date(today)],
        vec![s!("Search query"), s!(view.query)],
    ];
    for (code, value) in view.modifiers.iter() {
        out.push(vec![s!(filters::label(code)), s!(value)]);
    }
    out
}

/// Build and write both files for the live session. Returns the paths written.
pub fn export_session(view: SessionView<'_>, export: &ExportOptions) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let today = Local::now().date_naive();
    let bundle = build(view, today)?;
    logf!(
        "Export: Begin slug={:?}, rows={}, info={}",
        bundle.slug, bundle.rows.len(), bundle.info.len()
    );
    file::write_export(export, &bundle)
}
