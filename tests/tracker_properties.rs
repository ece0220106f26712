// tests/tracker_properties.rs
//
// Session tracking behavior through the public API only.
//
use iseek_export::tracker::{Outcome, Payload, SearchTracker};
use serde_json::{json, Value};

fn batch(tag: &str, n: usize) -> Vec<Value> {
    (0..n).map(|i| json!({ "id": format!("{tag}{i}") })).collect()
}

fn payload(q: &str, mods: &[&str], off: u64, num: u64, results: Vec<Value>) -> Payload {
    Payload {
        query: q.to_string(),
        modifier_tokens: mods.iter().map(|m| m.to_string()).collect(),
        offset: Some(off),
        page_size: Some(num),
        results,
    }
}

#[test]
fn permuted_modifiers_keep_the_session() {
    let mut t = SearchTracker::new();
    t.observe(payload("heart", &["b:2", "a:1", "c:3"], 0, 10, batch("p", 10)));
    let obs = t.observe(payload("heart", &["c:3", "b:2", "a:1"], 10, 10, batch("q", 10)));

    assert!(!obs.reset);
    assert_eq!(t.current_session().results.len(), 20);
    // filters keep the order of the payload that started the session
    let keys: Vec<&str> = t.current_session().modifiers.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
}

#[test]
fn changed_query_or_filters_reset() {
    let mut t = SearchTracker::new();
    t.observe(payload("heart", &["a:1"], 0, 10, batch("p", 10)));
    t.observe(payload("heart", &["a:1"], 10, 10, batch("p", 10)));
    assert_eq!(t.next_expected_offset(), 20);

    // different query: old offset 20 is not honoured, 0 is
    let obs = t.observe(payload("lung", &["a:1"], 20, 10, batch("x", 10)));
    assert!(obs.reset);
    assert!(matches!(obs.outcome, Outcome::Dropped { expected: 0, got: Some(20) }));
    assert!(t.current_session().results.is_empty());

    t.observe(payload("lung", &["a:1"], 0, 10, batch("l", 4)));
    assert_eq!(t.current_session().query, "lung");
    assert_eq!(t.current_session().results, batch("l", 4).as_slice());

    // different filter set, same query
    let obs = t.observe(payload("lung", &["a:2"], 0, 10, batch("m", 3)));
    assert!(obs.reset);
    assert_eq!(t.current_session().results.len(), 3);
    assert_eq!(t.current_session().modifiers.get("a"), Some("2"));
}

#[test]
fn offsets_gate_appends() {
    let mut t = SearchTracker::new();
    t.observe(payload("q", &[], 0, 25, batch("a", 25)));
    assert_eq!(t.next_expected_offset(), 25);

    // skip ahead: dropped, nothing moves
    let obs = t.observe(payload("q", &[], 50, 25, batch("c", 25)));
    assert_eq!(obs.outcome, Outcome::Dropped { expected: 25, got: Some(50) });
    assert_eq!(t.current_session().results.len(), 25);
    assert_eq!(t.next_expected_offset(), 25);

    // the expected page: appended in order
    let obs = t.observe(payload("q", &[], 25, 25, batch("b", 7)));
    assert_eq!(obs.outcome, Outcome::Appended { count: 7 });
    assert_eq!(t.next_expected_offset(), 50);
    assert_eq!(t.current_session().results[25], json!({ "id": "b0" }));
}

#[test]
fn duplicate_keys_merge() {
    let mut t = SearchTracker::new();
    t.observe(payload("q", &["a:1", "a:2"], 0, 1, batch("x", 1)));
    assert_eq!(t.current_session().modifiers.get("a"), Some("1, 2"));
    assert_eq!(t.current_session().modifiers.len(), 1);
}

#[test]
fn redelivered_page_appends_once() {
    let mut t = SearchTracker::new();
    let page = payload("q", &[], 0, 10, batch("x", 10));
    t.observe(page.clone());
    let obs = t.observe(page);

    assert!(!obs.reset);
    assert!(matches!(obs.outcome, Outcome::Dropped { .. }));
    assert_eq!(t.current_session().results.len(), 10);
}

#[test]
fn blank_search_accumulates() {
    let mut t = SearchTracker::new();
    t.observe(payload("", &[], 0, 10, batch("a", 10)));
    let view = t.current_session();
    assert_eq!(view.query, "");
    assert!(view.modifiers.is_empty());
    assert_eq!(view.results.len(), 10);

    let obs = t.observe(payload("", &[], 10, 10, batch("b", 10)));
    assert!(!obs.reset);
    assert_eq!(t.current_session().results.len(), 20);
}
