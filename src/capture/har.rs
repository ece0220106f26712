// src/capture/har.rs
// HTTP Archive (HAR 1.2) as saved by browser devtools.
// Only the fields needed to replay responses are read.

use std::error::Error;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::Deserialize;

use super::Capture;
use crate::intercept::{is_search_page, NetworkEvent};

#[derive(Deserialize)]
struct Har {
    log: HarLog,
}

#[derive(Deserialize)]
struct HarLog {
    #[serde(default)]
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    request: Request,
    #[serde(default)]
    response: Response,
    #[serde(rename = "_resourceType", default)]
    resource_type: Option<String>,
}

#[derive(Deserialize)]
struct Request {
    url: String,
    #[serde(default)]
    headers: Vec<Header>,
}

#[derive(Deserialize)]
struct Header {
    name: String,
    value: String,
}

#[derive(Deserialize, Default)]
struct Response {
    #[serde(default)]
    content: Content,
}

#[derive(Deserialize, Default)]
struct Content {
    text: Option<String>,
    encoding: Option<String>,
}

impl Entry {
    /// Chrome and Firefox record `_resourceType`; otherwise infer XHR from the request header.
    fn resource_type(&self) -> &str {
        if let Some(t) = self.resource_type.as_deref() {
            return t;
        }
        let is_xhr = self.request.headers.iter().any(|h| {
            h.name.eq_ignore_ascii_case("x-requested-with")
                && h.value.eq_ignore_ascii_case("XMLHttpRequest")
        });
        if is_xhr { "XHR" } else { "Other" }
    }

    fn body(&self) -> Result<Option<String>, Box<dyn Error>> {
        let Some(text) = self.response.content.text.as_deref() else {
            return Ok(None);
        };
        match self.response.content.encoding.as_deref() {
            Some(enc) if enc.eq_ignore_ascii_case("base64") => {
                let bytes = STANDARD.decode(text.trim())?;
                Ok(Some(String::from_utf8(bytes)?))
            }
            _ => Ok(Some(s!(text))),
        }
    }
}

/// Entries whose URL is not on `host` are left out entirely.
pub fn parse(text: &str, host: &str) -> Result<Capture, Box<dyn Error>> {
    let har: Har = serde_json::from_str(text)?;
    let mut capture = Capture::new();

    for (ix, entry) in har.log.entries.iter().enumerate() {
        if !is_search_page(&entry.request.url, host) { continue; }

        let id = ix.to_string();
        let body = match entry.body() {
            Ok(b) => b,
            Err(e) => {
                loge!("Capture: HAR entry {} has an undecodable body: {}", ix, e);
                None
            }
        };
        capture.push(
            NetworkEvent::response_received(id, entry.resource_type(), &entry.request.url),
            body,
        );
    }
    Ok(capture)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intercept::BodySource;
    use serde_json::json;

    #[test]
    fn entries_off_host_are_skipped_and_types_resolved() {
        let har = json!({ "log": { "entries": [
            { "request": { "url": "https://cdn.example/app.js" },
              "response": { "content": { "text": "x" } } },
            { "_resourceType": "xhr",
              "request": { "url": "https://embed.iseek.example/q" },
              "response": { "content": { "text": "{}" } } },
            { "request": { "url": "https://embed.iseek.example/q2",
                           "headers": [{ "name": "X-Requested-With", "value": "XMLHttpRequest" }] },
              "response": { "content": { "text": "e30=", "encoding": "base64" } } }
        ]}});
        let mut c = parse(&har.to_string(), "iseek").unwrap();
        assert_eq!(c.len(), 2);
        assert_eq!(c.events[0].request_id, "1");
        assert_eq!(c.events[0].resource_type, "xhr");
        assert_eq!(c.events[1].resource_type, "XHR");
        assert_eq!(c.response_body("2").unwrap(), "{}");
    }

    #[test]
    fn entry_without_body_has_nothing_to_fetch() {
        let har = json!({ "log": { "entries": [
            { "request": { "url": "https://iseek/q" }, "response": { "content": {} } }
        ]}});
        let mut c = parse(&har.to_string(), "iseek").unwrap();
        assert_eq!(c.len(), 1);
        assert!(c.response_body("0").is_err());
    }

    #[test]
    fn malformed_har_is_an_error() {
        assert!(parse("{\"nope\": 1}", "iseek").is_err());
    }
}
