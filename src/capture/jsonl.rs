// src/capture/jsonl.rs
// One raw response body per line; blank lines ignored.
// Every line is treated as an XHR response from the search page.

use super::Capture;
use crate::config::consts::XHR_RESOURCE_TYPE;
use crate::intercept::NetworkEvent;

pub fn parse(text: &str) -> Capture {
    let mut capture = Capture::new();
    for (ix, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() { continue; }
        let id = (ix + 1).to_string();
        capture.push(
            NetworkEvent::response_received(id, XHR_RESOURCE_TYPE, ""),
            Some(s!(line)),
        );
    }
    capture
}
