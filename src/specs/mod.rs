// src/specs/mod.rs
//! # Response "specs" module
//!
//! Knowledge of the **iSeek search response layout** lives here: which JSON
//! fields carry the lecture data, and how filter codes map to the labels the
//! search page shows.
//!
//! ## What lives here
//! - **Result shaping**: each result record is a grouped hit with a
//!   `doclist.docs[]` array, one doc per matching page. `results` turns those
//!   into export rows (one row per page hit).
//! - **Filter labels**: `filters` translates codes like `coursename_s`.
//!
//! ## What does **not** live here
//! - **Session tracking**: `tracker` owns which results belong together.
//! - **Files and quoting**: `csv` / `file` decide how rows hit the disk.
//!
//! ## Conventions
//! - Missing or oddly-typed fields render as empty cells; a record never fails
//!   the export.
//! - Column shapes are fixed (see `results::HEADERS`).
pub mod filters;
pub mod results;
