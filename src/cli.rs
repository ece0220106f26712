// src/cli.rs
use std::{error::Error, path::PathBuf};

use crate::config::options::{AppOptions, CaptureFormat, Quoting};
use crate::export;
use crate::progress::Progress;
use crate::runner;
use crate::specs::filters;
use crate::tracker::SearchTracker;

pub struct CliArgs {
    pub options: AppOptions,
    pub summary_only: bool,
}

pub enum Parsed {
    Run(CliArgs),
    Help,
}

pub fn help() -> &'static str {
    include_str!("cli_help.txt")
}

/// Parse arguments (program name already skipped).
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Parsed, Box<dyn Error>> {
    let mut options = AppOptions::default();
    let mut summary_only = false;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "-c" | "--capture" => {
                options.capture.path = PathBuf::from(args.next().ok_or("Missing capture file")?); }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                options.capture.format = Some(match v.to_ascii_lowercase().as_str() {
                    "har" => CaptureFormat::Har,
                    "jsonl" | "json" => CaptureFormat::JsonLines,
                    other => return Err(format!("Unknown format: {}", other).into()),
                });}
            "--host" => options.capture.host = args.next().ok_or("Missing value for --host")?,
            "-o" | "--out" => options.export.set_dir(&args.next().ok_or("Missing output directory")?),
            "--quoting" => {
                let v = args.next().ok_or("Missing value for --quoting")?;
                options.export.quoting = match v.to_ascii_lowercase().as_str() {
                    "always" => Quoting::Always,
                    "minimal" => Quoting::Minimal,
                    other => return Err(format!("Unknown quoting: {}", other).into()),
                };}
            "--summary" => summary_only = true,
            "-h" | "--help" => return Ok(Parsed::Help),
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if options.capture.path.as_os_str().is_empty() {
        return Err("Specify --capture <file>".into());
    }
    Ok(Parsed::Run(CliArgs { options, summary_only }))
}

/// Prints progress lines to stderr.
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) { self.total = total; }
    fn log(&mut self, msg: &str) { eprintln!("{msg}"); }
    fn item_done(&mut self, _request_id: &str) { self.done += 1; }
    fn finish(&mut self) { eprintln!("Processed {}/{} response(s)", self.done, self.total); }
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn Error>> {
    let CliArgs { options, summary_only } = args;

    let mut tracker = SearchTracker::new();
    let mut progress = CliProgress { total: 0, done: 0 };
    let summary = runner::replay(&options.capture, &mut tracker, Some(&mut progress))?;
    logf!("CLI: Replay {:?}", summary);

    let view = tracker.current_session();
    println!("Query: {}", view.query);
    println!("Results: {}", view.results.len());
    for (code, value) in view.modifiers.iter() {
        println!("  {}: {}", filters::label(code), value);
    }

    if summary_only {
        return Ok(());
    }

    for path in export::export_session(view, &options.export)? {
        println!("Wrote {}", path.display());
    }
    Ok(())
}
