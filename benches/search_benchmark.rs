use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use sift::{Document, SearchEngine};

const WORDS: &[&str] = &["the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "quiet", "browse"];

/// Helper to create test documents
fn create_test_document(id: u64, content_size: usize) -> Document {
    let mut rng = rand::thread_rng();
    let content: String = (0..content_size)
        .map(|_| WORDS[rng.gen_range(0..WORDS.len())])
        .collect::<Vec<_>>()
        .join(" ");

    Document::new()
        .with_text("title", &format!("Document {}", id))
        .with_text("content", &content)
}

fn build_engine(doc_count: u64) -> SearchEngine<u64, Document> {
    let mut engine = SearchEngine::new();
    engine.add_field("title").unwrap();
    engine.add_field("content").unwrap();
    for id in 0..doc_count {
        engine.add(id, &create_test_document(id, 100)).unwrap();
    }
    engine
}

/// Benchmark single document insertion
fn bench_single_insert(c: &mut Criterion) {
    let mut engine = build_engine(0);

    c.bench_function("single_document_insert", |b| {
        let mut id = 0;
        b.iter(|| {
            let doc = create_test_document(id, 100);
            engine.add(id, &doc).unwrap();
            id += 1;
        });
    });
}

/// Benchmark search performance over growing collections
fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for doc_count in [100u64, 1_000, 10_000].iter() {
        let engine = build_engine(*doc_count);
        group.bench_with_input(BenchmarkId::new("exact", doc_count), doc_count, |b, _| {
            b.iter(|| black_box(engine.search("quick fox").unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("prefix", doc_count), doc_count, |b, _| {
            b.iter(|| black_box(engine.search("qu bro").unwrap()));
        });
    }
    group.finish();
}

/// Benchmark remove + vacuum of half the collection
fn bench_vacuum(c: &mut Criterion) {
    c.bench_function("vacuum_half_of_1000", |b| {
        b.iter_batched(
            || {
                let mut engine = build_engine(1_000);
                for id in (0..1_000u64).step_by(2) {
                    engine.remove(&id).unwrap();
                }
                engine
            },
            |mut engine| black_box(engine.vacuum().unwrap()),
            criterion::BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_single_insert, bench_search, bench_vacuum);
criterion_main!(benches);
