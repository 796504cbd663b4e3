pub mod core;
pub mod analysis;
pub mod index;
pub mod scoring;
pub mod search;

pub use crate::analysis::analyzer::Analyzer;
pub use crate::analysis::filter::TermFilter;
pub use crate::analysis::tokenizer::Tokenizer;
pub use crate::core::config::Config;
pub use crate::core::engine::{FieldOptions, SearchEngine};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::shared::SharedEngine;
pub use crate::core::types::{DocKey, Document, FieldSource, FieldValue};
pub use crate::scoring::bm25::Bm25Params;
pub use crate::search::results::{SearchHit, SearchOptions};

/*
┌──────────────────────────────── SIFT STRUCT ARCHITECTURE ────────────────────────────────┐
│                                                                                          │
│  struct SearchEngine<I, D>                                                               │
│  • config: Config                   // BM25 k1/b, expansion penalty, default boost       │
│  • analyzer: Analyzer               // Tokenizer + TermFilter                            │
│  • fields: Vec<Field<D>>            // name, boost, getter (registration order)          │
│  • index: InvertedIndex<I>                                                               │
│        │                                                                                 │
│        ├── postings: PostingsStore                                                       │
│        │     └── TermDictionary<TermPostings>  // BTreeMap, prefix range walks           │
│        │           └── fields: Vec<PostingList> // (DocKey, term_freq) sorted by key     │
│        ├── field_stats: FieldStatistics        // sum_lengths / avg_length per field     │
│        └── registry: DocumentRegistry<I>                                                 │
│              • live: HashMap<I, DocKey>                                                  │
│              • entries: Vec<Option<DocEntry>>   // key -> id + field lengths             │
│              • tombstones: TombstoneSet         // RoaringBitmap of removed keys         │
│                                                                                          │
│  add    : analyze fields -> register key -> postings + field_stats                       │
│  remove : live map -> tombstone (postings untouched)                                     │
│  search : analyze -> expand each term -> BM25 over live postings -> sort                 │
│  vacuum : purge postings -> drop entries -> subtract lengths -> recompute averages       │
│                                                                                          │
│  struct SharedEngine<I, D> = Arc<RwLock<SearchEngine<I, D>>>                             │
└──────────────────────────────────────────────────────────────────────────────────────────┘
*/
