// src/intercept.rs
//! Network-interception adapter.
//!
//! Mirrors what a devtools-protocol client sees: `Network.responseReceived`
//! events arrive first, bodies are fetched later in one go. XHR responses are
//! queued by request id, then [`Interceptor::flush`] pulls each body from a
//! [`BodySource`], reduces it to a [`Payload`] and feeds the tracker.
//!
//! Nothing here is fatal. A body that cannot be fetched or parsed is logged
//! and skipped, the same way the tracker drops pages it cannot place.

use std::error::Error;

use serde_json::Value;

use crate::config::consts::{RESPONSE_RECEIVED, XHR_RESOURCE_TYPE};
use crate::progress::Progress;
use crate::tracker::{Outcome, Payload, SearchTracker};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkEvent {
    pub method: String,
    pub request_id: String,
    pub resource_type: String,
    pub url: String,
}

impl NetworkEvent {
    pub fn response_received(request_id: impl Into<String>, resource_type: &str, url: &str) -> Self {
        Self {
            method: s!(RESPONSE_RECEIVED),
            request_id: request_id.into(),
            resource_type: s!(resource_type),
            url: s!(url),
        }
    }
}

/// Where response bodies come from once a request is known to be interesting.
pub trait BodySource {
    fn response_body(&mut self, request_id: &str) -> Result<String, Box<dyn Error>>;
}

/// Is `url` the search tool? Plain case-insensitive substring match on `host`.
pub fn is_search_page(url: &str, host: &str) -> bool {
    url.to_lowercase().contains(&host.to_lowercase())
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlushSummary {
    pub fetched: usize,
    pub skipped: usize,
    pub appended: usize,
    pub resets: usize,
}

#[derive(Debug, Default)]
pub struct Interceptor {
    pending: Vec<String>,
}

impl Interceptor {
    pub fn new() -> Self { Self::default() }

    /// Queue XHR responses for body fetching. Returns whether the event was queued.
    pub fn on_network_event(&mut self, event: &NetworkEvent) -> bool {
        let wanted = event.method == RESPONSE_RECEIVED
            && event.resource_type.eq_ignore_ascii_case(XHR_RESOURCE_TYPE);
        if wanted {
            self.pending.push(event.request_id.clone());
        }
        wanted
    }

    pub fn pending(&self) -> usize { self.pending.len() }

    /// Fetch every queued body in arrival order and hand the search ones to `tracker`.
    pub fn flush(
        &mut self,
        source: &mut dyn BodySource,
        tracker: &mut SearchTracker,
        mut progress: Option<&mut dyn Progress>,
    ) -> FlushSummary {
        let queue = std::mem::take(&mut self.pending);
        let mut summary = FlushSummary::default();

        if let Some(p) = progress.as_deref_mut() {
            p.begin(queue.len());
        }

        for request_id in queue {
            match fetch_payload(source, &request_id) {
                Ok(Some(payload)) => {
                    summary.fetched += 1;
                    let obs = tracker.observe(payload);
                    if obs.reset { summary.resets += 1; }
                    if let Outcome::Appended { count } = obs.outcome {
                        summary.appended += count;
                    }
                }
                Ok(None) => {
                    summary.fetched += 1;
                    logd!("Intercept: {} is not a search response", request_id);
                }
                Err(e) => {
                    summary.skipped += 1;
                    loge!("Intercept: {}: {}", request_id, e);
                    if let Some(p) = progress.as_deref_mut() {
                        p.log(&format!("Skipped {request_id}: {e}"));
                    }
                }
            }
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(&request_id);
            }
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        logf!(
            "Intercept: Flushed fetched={} skipped={} appended={} resets={}",
            summary.fetched, summary.skipped, summary.appended, summary.resets
        );
        summary
    }
}

fn fetch_payload(source: &mut dyn BodySource, request_id: &str) -> Result<Option<Payload>, Box<dyn Error>> {
    let text = source.response_body(request_id)?;
    let body: Value = serde_json::from_str(&text)?;
    Ok(payload_from_body(&body))
}

/// Reduce a search response body to a payload. `None` when it has no `params` object.
pub fn payload_from_body(body: &Value) -> Option<Payload> {
    let params = body.get("params")?.as_object()?;

    let query = params
        .get("q")
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_default();

    let modifier_tokens = params
        .get("ivArr")
        .and_then(Value::as_array)
        .map(|arr| arr.iter().filter_map(Value::as_str).map(String::from).collect())
        .unwrap_or_default();

    let results = body
        .get("data")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();

    Some(Payload {
        query,
        modifier_tokens,
        offset: parse_count(params.get("off")),
        page_size: parse_count(params.get("num")),
        results,
    })
}

/// Non-negative integer, from a number or a numeric string. Decimal fractions truncate;
/// exponents and anything past `u64` are unknown.
fn parse_count(v: Option<&Value>) -> Option<u64> {
    let n = match v? {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() { return Some(u); }
            n.as_f64()?
        }
        Value::String(s) => {
            let s = s.trim();
            if let Ok(u) = s.parse::<u64>() { return Some(u); }
            if !s.contains('.') || s.contains(['e', 'E']) { return None; }
            s.parse::<f64>().ok()?
        }
        _ => return None,
    };
    (n.is_finite() && n >= 0.0 && n < u64::MAX as f64).then(|| n.trunc() as u64)
}
