use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use crate::analysis::analyzer::Analyzer;
use crate::core::error::{Error, Result};
use crate::core::types::DocKey;
use crate::index::inverted::InvertedIndex;
use crate::scoring::bm25::{idf, Bm25Params, Bm25Scorer, FieldNorm};
use crate::search::expansion::expand_query_term;
use crate::search::results::{rank_order, SearchHit};

/// Everything the ranking needs besides the index itself.
#[derive(Debug, Clone, Copy)]
pub struct QueryContext<'a> {
    /// One boost per registered field.
    pub boosts: &'a [f64],
    pub params: Bm25Params,
    /// Weight of terms reached through prefix expansion.
    pub expansion_penalty: f64,
    pub expand_prefixes: bool,
}

/// Scores live documents against already-filtered query terms.
///
/// Every query term is expanded to the indexed terms it prefixes. Each
/// expanded term adds, per field, `boost * idf * BM25(tf)` to every live
/// document holding it, scaled by the expansion penalty unless it is the
/// query term itself. Document counts and average lengths are taken over
/// live documents only. Result is sorted by descending score, then key.
pub fn rank<I>(index: &InvertedIndex<I>, ctx: &QueryContext<'_>, terms: &[String]) -> Result<Vec<(DocKey, f64)>>
where
    I: Eq + Hash + Clone + Debug,
{
    let field_count = index.field_count();
    if ctx.boosts.len() != field_count {
        return Err(Error::invalid_argument(format!(
            "expected {} field boosts, got {}",
            field_count,
            ctx.boosts.len()
        )));
    }

    let total_docs = index.size();
    if total_docs == 0 || terms.is_empty() {
        return Ok(Vec::new());
    }

    let avg_lengths: Vec<f64> = (0..field_count)
        .map(|field| index.live_avg_field_length(field))
        .collect();
    let tombstones = index.tombstones();
    let mut scores: HashMap<DocKey, f64> = HashMap::new();

    for query_term in terms {
        for expanded in expand_query_term(index, query_term, ctx.expand_prefixes) {
            let Some(term_postings) = index.lookup(&expanded.term) else {
                continue;
            };
            let weight = if expanded.exact { 1.0 } else { ctx.expansion_penalty };

            for (field, &boost) in ctx.boosts.iter().enumerate() {
                let Some(list) = term_postings.field(field) else {
                    continue;
                };
                let doc_freq = list.live_doc_freq(tombstones);
                if doc_freq == 0 {
                    continue;
                }
                let scorer = Bm25Scorer::new(ctx.params, boost * weight, idf(total_docs, doc_freq));

                for posting in list.iter_live(tombstones) {
                    let field_length = index.field_length(posting.key, field).ok_or_else(|| {
                        Error::internal(format!(
                            "posting of term {:?} references unregistered key {:?}",
                            expanded.term, posting.key
                        ))
                    })?;
                    let norm = FieldNorm {
                        field_length: f64::from(field_length),
                        avg_field_length: avg_lengths[field],
                    };
                    *scores.entry(posting.key).or_insert(0.0) += scorer.score(posting.term_freq, norm);
                }
            }
        }
    }

    let mut ranked: Vec<(DocKey, f64)> = scores.into_iter().filter(|&(_, score)| score > 0.0).collect();
    ranked.sort_by(|a, b| rank_order(*a, *b));
    Ok(ranked)
}

/// Analyzes `query`, ranks, and maps keys back to external ids.
pub fn execute<I>(
    index: &InvertedIndex<I>,
    analyzer: &Analyzer,
    ctx: &QueryContext<'_>,
    query: &str,
    limit: Option<usize>,
) -> Result<Vec<SearchHit<I>>>
where
    I: Eq + Hash + Clone + Debug,
{
    let terms = analyzer.analyze(query);
    let mut ranked = rank(index, ctx, &terms)?;
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    ranked
        .into_iter()
        .map(|(key, score)| {
            let id = index
                .resolve(key)
                .ok_or_else(|| Error::internal(format!("scored key {:?} has no document id", key)))?;
            Ok(SearchHit { id: id.clone(), key, score })
        })
        .collect()
}
