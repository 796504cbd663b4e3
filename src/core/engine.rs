use std::borrow::Borrow;
use std::fmt::Debug;
use std::hash::Hash;
use log::debug;
use crate::analysis::analyzer::Analyzer;
use crate::core::config::{validate_boost, Config};
use crate::core::error::{Error, Result};
use crate::core::stats::{FieldReport, IndexStats};
use crate::core::types::{FieldIndex, FieldSource};
use crate::index::indexer::{index_document, Field, FieldGetter};
use crate::index::inverted::{InvertedIndex, VacuumSummary};
use crate::index::stats::FieldStats;
use crate::search::expansion::{extend_term, query_to_terms};
use crate::search::query::{execute, QueryContext};
use crate::search::results::{SearchHit, SearchOptions};

/// Per-field registration options.
pub struct FieldOptions<D> {
    pub boost: Option<f64>,
    /// Custom accessor; defaults to reading the field by name.
    pub getter: Option<FieldGetter<D>>,
}

impl<D> Default for FieldOptions<D> {
    fn default() -> Self {
        FieldOptions {
            boost: None,
            getter: None,
        }
    }
}

impl<D> FieldOptions<D> {
    pub fn boost(mut self, boost: f64) -> Self {
        self.boost = Some(boost);
        self
    }

    pub fn getter<F>(mut self, getter: F) -> Self
    where
        F: Fn(&D) -> Option<String> + Send + Sync + 'static,
    {
        self.getter = Some(Box::new(getter));
        self
    }
}

/// Full-text search engine over documents of type `D` identified by `I`.
///
/// Documents are never stored: `add` indexes the registered fields and keeps
/// only the id. Removal is lazy; call `vacuum` to reclaim postings.
pub struct SearchEngine<I, D> {
    config: Config,
    analyzer: Analyzer,
    fields: Vec<Field<D>>,
    boosts: Vec<f64>,
    index: InvertedIndex<I>,
}

impl<I, D> SearchEngine<I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    /// Engine with default configuration and the standard analyzer.
    pub fn new() -> Self {
        SearchEngine {
            config: Config::default(),
            analyzer: Analyzer::standard(),
            fields: Vec::new(),
            boosts: Vec::new(),
            index: InvertedIndex::new(0),
        }
    }

    pub fn with_config(config: Config, analyzer: Analyzer) -> Result<Self> {
        config.validate()?;
        Ok(SearchEngine {
            config,
            analyzer,
            fields: Vec::new(),
            boosts: Vec::new(),
            index: InvertedIndex::new(0),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Registers a field read by `getter`. Must precede the first `add`.
    pub fn add_field_getter<F>(&mut self, name: &str, getter: F, boost: Option<f64>) -> Result<FieldIndex>
    where
        F: Fn(&D) -> Option<String> + Send + Sync + 'static,
    {
        self.register_field(name, Box::new(getter), boost)
    }

    fn register_field(&mut self, name: &str, getter: FieldGetter<D>, boost: Option<f64>) -> Result<FieldIndex> {
        if self.fields.iter().any(|field| field.name == name) {
            return Err(Error::configuration(format!("field '{}' is already registered", name)));
        }
        let boost = boost.unwrap_or(self.config.default_boost);
        validate_boost(boost)?;

        let index = self
            .index
            .add_field()
            .map_err(|e| Error::configuration(format!("cannot register field '{}': {}", name, e.context)))?;
        self.fields.push(Field {
            name: name.to_string(),
            boost,
            getter,
        });
        self.boosts.push(boost);
        debug!("registered field '{}' at index {} with boost {}", name, index, boost);
        Ok(index)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.name.as_str())
    }

    pub fn field_index(&self, name: &str) -> Option<FieldIndex> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Indexes `document` under `id`. Fails if `id` is already live.
    pub fn add(&mut self, id: I, document: &D) -> Result<()> {
        if self.fields.is_empty() {
            return Err(Error::configuration("register at least one field before adding documents"));
        }
        let key = index_document(&mut self.index, id, document, &self.fields, &self.analyzer)?;
        debug!("indexed document as key {:?}", key);
        Ok(())
    }

    /// Tombstones `id`; postings are reclaimed by `vacuum`.
    pub fn remove<Q>(&mut self, id: &Q) -> Result<()>
    where
        I: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let key = self.index.remove(id)?;
        debug!("tombstoned document {:?} (key {:?})", id, key);
        Ok(())
    }

    pub fn search(&self, query: &str) -> Result<Vec<SearchHit<I>>> {
        self.search_with(query, &SearchOptions::default())
    }

    pub fn search_with(&self, query: &str, options: &SearchOptions) -> Result<Vec<SearchHit<I>>> {
        let params = match options.bm25 {
            Some(params) => {
                params.validate()?;
                params
            }
            None => self.config.bm25,
        };
        let ctx = QueryContext {
            boosts: &self.boosts,
            params,
            expansion_penalty: self.config.expansion_penalty,
            expand_prefixes: options.expand_prefixes,
        };
        execute(&self.index, &self.analyzer, &ctx, query, options.limit)
    }

    /// Indexed terms starting with `term`. `term` is used as is, without analysis.
    pub fn extend_term(&self, term: &str) -> Vec<String> {
        extend_term(&self.index, term)
    }

    pub fn query_to_terms(&self, query: &str) -> Vec<String> {
        query_to_terms(&self.index, &self.analyzer, query)
    }

    pub fn vacuum(&mut self) -> Result<VacuumSummary> {
        self.index.vacuum()
    }

    /// Live documents.
    pub fn size(&self) -> usize {
        self.index.size()
    }

    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    pub fn contains<Q>(&self, id: &Q) -> bool
    where
        I: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains(id)
    }

    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn tombstone_count(&self) -> usize {
        self.index.tombstone_count()
    }

    pub fn field_stats(&self, name: &str) -> Option<FieldStats> {
        self.field_index(name)
            .and_then(|field| self.index.field_stats(field))
            .copied()
    }

    /// Live documents containing `term` in field `name`. `term` is not analyzed.
    pub fn doc_frequency(&self, term: &str, name: &str) -> usize {
        self.field_index(name)
            .map(|field| self.index.doc_frequency(term, field))
            .unwrap_or(0)
    }

    pub fn stats(&self) -> IndexStats {
        let fields = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let stats = self.index.field_stats(index).copied().unwrap_or_default();
                FieldReport {
                    name: field.name.clone(),
                    boost: field.boost,
                    sum_lengths: stats.sum_lengths,
                    avg_length: stats.avg_length,
                }
            })
            .collect();

        IndexStats {
            live_documents: self.index.size(),
            tombstoned_documents: self.index.tombstone_count(),
            term_count: self.index.term_count(),
            fields,
        }
    }

    /// Per-field length sums recomputed from scratch, for consistency checks.
    pub fn recount_lengths(&self) -> Vec<u64> {
        self.index.recount_lengths()
    }

    pub fn index(&self) -> &InvertedIndex<I> {
        &self.index
    }
}

impl<I, D> SearchEngine<I, D>
where
    I: Eq + Hash + Clone + Debug,
    D: FieldSource + 'static,
{
    /// Registers a field read by name with the default boost.
    pub fn add_field(&mut self, name: &str) -> Result<FieldIndex> {
        self.add_field_with(name, FieldOptions::default())
    }

    pub fn add_field_with(&mut self, name: &str, options: FieldOptions<D>) -> Result<FieldIndex> {
        let getter: FieldGetter<D> = match options.getter {
            Some(getter) => getter,
            None => {
                let field_name = name.to_string();
                Box::new(move |doc: &D| doc.field_text(&field_name).map(|text| text.into_owned()))
            }
        };
        self.register_field(name, getter, options.boost)
    }
}

impl<I, D> Default for SearchEngine<I, D>
where
    I: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        SearchEngine::new()
    }
}

impl<I: Debug, D> Debug for SearchEngine<I, D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("config", &self.config)
            .field("analyzer", &self.analyzer)
            .field("fields", &self.fields)
            .field("index", &self.index)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Document;

    fn engine() -> SearchEngine<String, Document> {
        let mut engine = SearchEngine::new();
        engine.add_field("content").unwrap();
        engine
    }

    fn doc(content: &str) -> Document {
        Document::new().with_text("content", content)
    }

    #[test]
    fn add_requires_fields() {
        let mut engine: SearchEngine<u32, Document> = SearchEngine::new();
        assert!(engine.add(1, &doc("x")).unwrap_err().is_configuration());
    }

    #[test]
    fn field_registration_closes_after_first_add() {
        let mut engine = engine();
        engine.add("1".to_string(), &doc("x")).unwrap();
        assert!(engine.add_field("title").unwrap_err().is_configuration());
        assert_eq!(engine.field_count(), 1);
    }

    #[test]
    fn duplicate_field_names_are_rejected() {
        let mut engine = engine();
        assert!(engine.add_field("content").unwrap_err().is_configuration());
    }

    #[test]
    fn invalid_boost_is_rejected() {
        let mut engine: SearchEngine<u32, Document> = SearchEngine::new();
        let err = engine.add_field_with("x", FieldOptions::default().boost(-1.0)).unwrap_err();
        assert_eq!(err.kind, crate::core::error::ErrorKind::InvalidArgument);
        assert_eq!(engine.field_count(), 0);
    }

    #[test]
    fn duplicate_and_unknown_ids() {
        let mut engine = engine();
        engine.add("1".to_string(), &doc("a b")).unwrap();
        assert!(engine.add("1".to_string(), &doc("c")).unwrap_err().is_duplicate());
        assert_eq!(engine.field_stats("content").unwrap().sum_lengths, 2);
        assert!(engine.remove("2").unwrap_err().is_unknown_document());
        engine.remove("1").unwrap();
        assert!(engine.remove("1").unwrap_err().is_unknown_document());
    }

    #[test]
    fn custom_getter_and_boost() {
        let mut engine: SearchEngine<u32, (String, String)> = SearchEngine::new();
        engine.add_field_getter("title", |d: &(String, String)| Some(d.0.clone()), Some(2.0)).unwrap();
        engine.add_field_getter("body", |d: &(String, String)| Some(d.1.clone()), None).unwrap();
        engine.add(1, &("rust".to_string(), "go".to_string())).unwrap();
        engine.add(2, &("go".to_string(), "rust".to_string())).unwrap();

        let hits = engine.search("rust").unwrap();
        assert_eq!(hits.iter().map(|h| h.id).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(engine.stats().fields[0].boost, 2.0);
    }

    #[test]
    fn search_options_override_defaults() {
        let mut engine = engine();
        engine.add("1".to_string(), &doc("car")).unwrap();
        engine.add("2".to_string(), &doc("cart")).unwrap();

        assert_eq!(engine.search("car").unwrap().len(), 2);
        assert_eq!(engine.search_with("car", &SearchOptions::default().exact()).unwrap().len(), 1);
        assert_eq!(engine.search_with("car", &SearchOptions::default().with_limit(1)).unwrap().len(), 1);

        let bad = SearchOptions { bm25: Some(crate::scoring::bm25::Bm25Params::new(1.2, 2.0)), ..SearchOptions::default() };
        assert!(engine.search_with("car", &bad).is_err());
    }

    #[test]
    fn stats_report_tombstones() {
        let mut engine = engine();
        engine.add("1".to_string(), &doc("a b c")).unwrap();
        engine.add("2".to_string(), &doc("a")).unwrap();
        engine.remove("1").unwrap();

        let stats = engine.stats();
        assert_eq!(stats.live_documents, 1);
        assert_eq!(stats.tombstoned_documents, 1);
        assert!(stats.needs_vacuum());
        assert_eq!(stats.fields[0].sum_lengths, 4);

        engine.vacuum().unwrap();
        let stats = engine.stats();
        assert!(!stats.needs_vacuum());
        assert_eq!(stats.fields[0].sum_lengths, 1);
        assert_eq!(stats.term_count, 1);
        let json = serde_json::to_string(&stats).unwrap();
        assert!(json.contains("\"live_documents\":1"));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config { expansion_penalty: 2.0, ..Config::default() };
        assert!(SearchEngine::<u32, Document>::with_config(config, Analyzer::standard()).is_err());
    }
}
