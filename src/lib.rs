// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod core;
pub mod specs;
pub mod tracker;

pub mod capture;
pub mod cli;
pub mod csv;
pub mod export;
pub mod file;
pub mod gui;
pub mod intercept;
pub mod progress;
pub mod runner;
