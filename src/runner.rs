// src/runner.rs
use std::error::Error;

use crate::{
    capture,
    config::options::CaptureOptions,
    intercept::{FlushSummary, Interceptor},
    progress::Progress,
    tracker::SearchTracker,
};

/// What a replay saw and did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ReplaySummary {
    pub events: usize,
    pub queued: usize,
    pub flush: FlushSummary,
}

/// Replay a saved capture into `tracker`: every event goes through the
/// interceptor, then all queued bodies are fetched in one flush.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn replay(
    opts: &CaptureOptions,
    tracker: &mut SearchTracker,
    progress: Option<&mut dyn Progress>,
) -> Result<ReplaySummary, Box<dyn Error>> {
    let mut capture = capture::load(opts)?;
    let mut interceptor = Interceptor::new();

    let queued = capture
        .events
        .iter()
        .filter(|ev| interceptor.on_network_event(ev))
        .count();
    logf!("Replay: events={} queued={}", capture.len(), queued);

    let flush = interceptor.flush(&mut capture, tracker, progress);

    Ok(ReplaySummary { events: capture.len(), queued, flush })
}
