use std::collections::BTreeMap;
use std::fmt::Debug;
use std::hash::Hash;
use crate::analysis::analyzer::Analyzer;
use crate::core::error::Result;
use crate::core::types::DocKey;
use crate::index::inverted::InvertedIndex;

/// Extracts a field's raw text from a caller document.
pub type FieldGetter<D> = Box<dyn Fn(&D) -> Option<String> + Send + Sync>;

/// A registered field: accessor plus ranking boost.
pub struct Field<D> {
    pub name: String,
    pub boost: f64,
    pub getter: FieldGetter<D>,
}

impl<D> std::fmt::Debug for Field<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("boost", &self.boost)
            .finish()
    }
}

/// Term counts of one field of one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzedField {
    pub term_freqs: BTreeMap<String, u32>,
    /// Number of terms that survived filtering.
    pub length: u32,
}

impl AnalyzedField {
    pub fn from_terms<T: AsRef<str>>(terms: &[T]) -> Self {
        let mut field = AnalyzedField::default();
        for term in terms {
            *field.term_freqs.entry(term.as_ref().to_string()).or_insert(0) += 1;
            field.length += 1;
        }
        field
    }
}

/// Analyzes every field of `document` in registration order.
/// A field whose getter yields nothing is indexed as empty.
pub fn analyze_document<D>(document: &D, fields: &[Field<D>], analyzer: &Analyzer) -> Vec<AnalyzedField> {
    fields
        .iter()
        .map(|field| match (field.getter)(document) {
            Some(text) => AnalyzedField::from_terms(&analyzer.analyze(&text)),
            None => AnalyzedField::default(),
        })
        .collect()
}

/// Runs the indexing pipeline for one document and returns its new key.
pub fn index_document<I, D>(
    index: &mut InvertedIndex<I>,
    id: I,
    document: &D,
    fields: &[Field<D>],
    analyzer: &Analyzer,
) -> Result<DocKey>
where
    I: Eq + Hash + Clone + Debug,
{
    // Fail before spending time on analysis
    index.check_absent(&id)?;
    let analyzed = analyze_document(document, fields, analyzer);
    index.insert(id, analyzed)
}
