//! Benchmarks for episode normalization and URL classification.
//!
//! Run with: `cargo bench --bench normalize_bench`

use audiothek::audiothek::playlist::assemble;
use audiothek::{classify, normalize_episode};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};

const URLS: &[&str] = &[
    "https://www.ardaudiothek.de/episode/die-profis/philosophie-meditation-und-die-aufloesung-des-ichs/radioeins/10525879/",
    "https://www.ardaudiothek.de/sendung/korridore-mystery-horror-serie/12187357/",
    "https://www.ardaudiothek.de/sammlung/was-gibt-s-zu-essen-mythen-und-fakten-zur-guten-ernaehrung/56081830/",
    "https://www.ardaudiothek.de/suche/termite/",
    "https://example.com/page",
];

fn node(i: usize) -> Value {
    json!({
        "id": i.to_string(),
        "title": format!("Folge {i}"),
        "description": "Beschreibung",
        "audios": [{"url": format!("https://media.example.de/{i}.mp3"), "downloadUrl": null}],
        "image": {"url1X1": "https://img.example.de/{width}/x.jpg"},
        "duration": 1800,
        "publishDate": "2022-05-21T07:40:00Z",
        "programSet": {
            "title": "Korridore",
            "publicationService": {"organizationName": "SWR", "genre": "Hörspiel"}
        }
    })
}

fn bench_normalize(c: &mut Criterion) {
    let single = node(1);
    c.bench_function("normalize_episode", |b| {
        b.iter(|| normalize_episode(black_box(&single)));
    });

    let nodes: Vec<Value> = (0..200)
        .map(|i| if i % 10 == 0 { json!({"id": i.to_string()}) } else { node(i) })
        .collect();
    c.bench_function("assemble_200_nodes", |b| {
        b.iter(|| assemble(black_box(&nodes)));
    });
}

fn bench_classify(c: &mut Criterion) {
    c.bench_function("classify_urls", |b| {
        b.iter(|| {
            for url in URLS {
                black_box(classify(black_box(url), "ardaudiothek.de"));
            }
        });
    });
}

criterion_group!(benches, bench_normalize, bench_classify);
criterion_main!(benches);
