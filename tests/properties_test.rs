use std::collections::HashMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sift::{Analyzer, Document, SearchEngine};

const VOCABULARY: &[&str] = &[
    "rust", "rusty", "search", "searching", "index", "indexer", "query", "engine",
    "token", "tokenizer", "filter", "score", "posting", "vacuum", "tomb", "tombstone",
];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..12);
    (0..len)
        .map(|_| *VOCABULARY.choose(rng).unwrap())
        .collect::<Vec<_>>()
        .join(" ")
}

struct Corpus {
    engine: SearchEngine<u32, Document>,
    docs: HashMap<u32, Document>,
}

fn random_corpus(seed: u64, count: u32) -> Corpus {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut engine: SearchEngine<u32, Document> = SearchEngine::new();
    engine.add_field("title").unwrap();
    engine.add_field("body").unwrap();

    let mut docs = HashMap::new();
    for id in 0..count {
        let doc = Document::new()
            .with_text("title", &random_text(&mut rng))
            .with_text("body", &random_text(&mut rng));
        engine.add(id, &doc).unwrap();
        docs.insert(id, doc);
    }
    Corpus { engine, docs }
}

fn expected_lengths(docs: &HashMap<u32, Document>, live: impl Fn(u32) -> bool) -> Vec<u64> {
    let analyzer = Analyzer::standard();
    let mut sums = vec![0u64; 2];
    for (id, doc) in docs {
        if !live(*id) {
            continue;
        }
        for (field, name) in ["title", "body"].iter().enumerate() {
            let text = doc.get_field(name).map(|v| v.as_text().into_owned()).unwrap_or_default();
            sums[field] += analyzer.analyze(&text).len() as u64;
        }
    }
    sums
}

fn field_sums(engine: &SearchEngine<u32, Document>) -> Vec<u64> {
    ["title", "body"]
        .iter()
        .map(|name| engine.field_stats(name).unwrap().sum_lengths)
        .collect()
}

#[test]
fn length_accounting_is_conserved_across_vacuum() {
    let Corpus { mut engine, docs } = random_corpus(7, 60);
    let removed: Vec<u32> = (0..60u32).filter(|id| id % 3 == 0).collect();
    for id in &removed {
        engine.remove(id).unwrap();
    }

    // Before vacuum the sums still include removed documents
    assert_eq!(field_sums(&engine), expected_lengths(&docs, |_| true));
    assert_eq!(engine.size(), 40);

    engine.vacuum().unwrap();
    let live = |id: u32| !removed.contains(&id);
    assert_eq!(field_sums(&engine), expected_lengths(&docs, live));
    assert_eq!(field_sums(&engine), engine.recount_lengths());
    for name in ["title", "body"] {
        let stats = engine.field_stats(name).unwrap();
        assert!((stats.avg_length - stats.sum_lengths as f64 / 40.0).abs() < 1e-12);
    }
}

#[test]
fn vacuum_twice_equals_vacuum_once() {
    let Corpus { mut engine, .. } = random_corpus(11, 40);
    for id in (0..40u32).step_by(4) {
        engine.remove(&id).unwrap();
    }
    engine.vacuum().unwrap();
    let stats = engine.stats();
    let hits = engine.search("rust index").unwrap();

    let second = engine.vacuum().unwrap();
    assert_eq!(second.purged_documents, 0);
    assert_eq!(second.purged_postings, 0);
    assert_eq!(engine.stats(), stats);
    assert_eq!(engine.search("rust index").unwrap(), hits);
}

#[test]
fn tombstoned_documents_never_surface() {
    let Corpus { mut engine, .. } = random_corpus(23, 50);
    let mut rng = StdRng::seed_from_u64(99);
    let mut removed = Vec::new();
    for id in 0..50u32 {
        if rng.gen_bool(0.4) {
            engine.remove(&id).unwrap();
            removed.push(id);
        }
    }
    assert_eq!(engine.size(), 50 - removed.len());

    for query in VOCABULARY.iter().chain(["r", "s t", "tomb index"].iter()) {
        for hit in engine.search(query).unwrap() {
            assert!(!removed.contains(&hit.id), "query {:?} returned removed {}", query, hit.id);
        }
    }
}

#[test]
fn extension_results_share_the_prefix() {
    let Corpus { engine, .. } = random_corpus(5, 30);
    for prefix in ["r", "rust", "search", "tomb", "t", "zzz", "indexer"] {
        let extended = engine.extend_term(prefix);
        assert!(extended.iter().all(|term| term.starts_with(prefix)));
        assert!(extended.windows(2).all(|pair| pair[0] < pair[1]));
        if engine.index().lookup(prefix).is_some() {
            assert_eq!(extended.first().map(String::as_str), Some(prefix));
        }
    }
}

#[test]
fn higher_term_frequency_never_scores_lower() {
    let mut engine: SearchEngine<u32, Document> = SearchEngine::new();
    engine.add_field("body").unwrap();
    engine.add(1, &Document::new().with_text("body", "rust memory safety")).unwrap();
    engine.add(2, &Document::new().with_text("body", "rust rust memory safety")).unwrap();
    engine.add(3, &Document::new().with_text("body", "unrelated words here")).unwrap();

    let hits = engine.search("rust").unwrap();
    let score = |id: u32| hits.iter().find(|hit| hit.id == id).unwrap().score;
    assert!(score(2) >= score(1));
}

#[test]
fn repeated_searches_are_identical() {
    let Corpus { engine, .. } = random_corpus(31, 80);
    for query in ["rust", "search engine", "to", "posting vacuum tombstone"] {
        let first = engine.search(query).unwrap();
        for _ in 0..5 {
            assert_eq!(engine.search(query).unwrap(), first);
        }
        assert!(first.windows(2).all(|pair| {
            pair[0].score > pair[1].score || (pair[0].score == pair[1].score && pair[0].key < pair[1].key)
        }));
    }
}
