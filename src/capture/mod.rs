// src/capture/mod.rs
//! Offline stand-ins for the browser: a saved capture replays as network
//! events plus a body store the interceptor fetches from.

pub mod har;
pub mod jsonl;

use std::{collections::HashMap, error::Error, fs};

use crate::config::options::{CaptureFormat, CaptureOptions};
use crate::intercept::{BodySource, NetworkEvent};

/// Events in capture order plus the bodies keyed by request id.
#[derive(Debug, Default)]
pub struct Capture {
    pub events: Vec<NetworkEvent>,
    bodies: HashMap<String, String>,
}

impl Capture {
    pub fn new() -> Self { Self::default() }

    pub fn push(&mut self, event: NetworkEvent, body: Option<String>) {
        if let Some(b) = body {
            self.bodies.insert(event.request_id.clone(), b);
        }
        self.events.push(event);
    }

    pub fn len(&self) -> usize { self.events.len() }

    pub fn is_empty(&self) -> bool { self.events.is_empty() }
}

impl BodySource for Capture {
    /// Each body can be fetched once, like a devtools response buffer.
    fn response_body(&mut self, request_id: &str) -> Result<String, Box<dyn Error>> {
        self.bodies
            .remove(request_id)
            .ok_or_else(|| format!("No response body captured for request {request_id}").into())
    }
}

/// Read the capture named by `opts` from disk.
pub fn load(opts: &CaptureOptions) -> Result<Capture, Box<dyn Error>> {
    if opts.path.as_os_str().is_empty() {
        return Err("No capture file given".into());
    }
    let text = fs::read_to_string(&opts.path)
        .map_err(|e| format!("Cannot read {}: {e}", opts.path.display()))?;

    let format = opts.resolved_format();
    logf!("Capture: Loading {} as {:?}", opts.path.display(), format);

    let capture = match format {
        CaptureFormat::Har => har::parse(&text, &opts.host)?,
        CaptureFormat::JsonLines => jsonl::parse(&text),
    };
    logf!("Capture: {} event(s)", capture.len());
    Ok(capture)
}
