use std::fmt::Debug;
use std::hash::Hash;
use log::trace;
use crate::analysis::analyzer::Analyzer;
use crate::index::inverted::InvertedIndex;

/// A query term together with one indexed term it reaches.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedTerm {
    pub term: String,
    /// True when `term` equals the query term.
    pub exact: bool,
}

/// Indexed terms starting with an already-filtered `term`, `term` itself included.
pub fn extend_term<I>(index: &InvertedIndex<I>, term: &str) -> Vec<String>
where
    I: Eq + Hash + Clone + Debug,
{
    index.expand(term)
}

/// Expansion of one query term, tagged exact or prefix.
/// With `expand_prefixes` off only the exact term is returned, if indexed.
pub fn expand_query_term<I>(index: &InvertedIndex<I>, term: &str, expand_prefixes: bool) -> Vec<ExpandedTerm>
where
    I: Eq + Hash + Clone + Debug,
{
    if !expand_prefixes {
        return match index.lookup(term) {
            Some(_) => vec![ExpandedTerm { term: term.to_string(), exact: true }],
            None => Vec::new(),
        };
    }

    let expanded: Vec<ExpandedTerm> = index
        .expand(term)
        .into_iter()
        .map(|candidate| {
            let exact = candidate == term;
            ExpandedTerm { term: candidate, exact }
        })
        .collect();
    trace!("query term {:?} expanded to {} terms", term, expanded.len());
    expanded
}

/// Analyzes `query` and expands every resulting term, concatenated in token order.
pub fn query_to_terms<I>(index: &InvertedIndex<I>, analyzer: &Analyzer, query: &str) -> Vec<String>
where
    I: Eq + Hash + Clone + Debug,
{
    analyzer
        .analyze(query)
        .iter()
        .flat_map(|term| extend_term(index, term))
        .collect()
}
