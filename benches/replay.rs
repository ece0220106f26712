// benches/replay.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};
use serde_json::{json, Value};

use iseek_export::{
    intercept::payload_from_body,
    tracker::{Payload, SearchTracker},
};

fn sample_pages(pages: usize, per_page: usize) -> Vec<Payload> {
    (0..pages)
        .filter_map(|p| {
            let data: Vec<Value> = (0..per_page)
                .map(|i| json!({ "doclist": { "docs": [{ "title_t": format!("Lecture {p}-{i}"), "page_number_i": i }] } }))
                .collect();
            let body = json!({
                "params": {
                    "q": "heart failure",
                    "ivArr": ["group_ss:\"MS2\"", "coursename_s:\"Cardio\"", "group_ss:\"MS1\""],
                    "off": (p * per_page).to_string(),
                    "num": per_page,
                },
                "data": data,
            });
            payload_from_body(&body)
        })
        .collect()
}

fn bench_observe(c: &mut Criterion) {
    let pages = sample_pages(40, 25);

    c.bench_function("observe_in_order", |b| {
        b.iter(|| {
            let mut t = SearchTracker::new();
            for p in pages.iter().cloned() {
                t.observe(black_box(p));
            }
            black_box(t.current_session().results.len())
        })
    });

    c.bench_function("observe_redelivered", |b| {
        b.iter(|| {
            let mut t = SearchTracker::new();
            for p in pages.iter().flat_map(|p| [p.clone(), p.clone()]) {
                t.observe(black_box(p));
            }
            black_box(t.current_session().results.len())
        })
    });
}

criterion_group!(benches, bench_observe);
criterion_main!(benches);
