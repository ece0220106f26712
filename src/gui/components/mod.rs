// src/gui/components/mod.rs
pub mod capture_bar;
pub mod export_bar;
pub mod session_panel;
