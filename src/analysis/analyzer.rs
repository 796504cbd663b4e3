use crate::analysis::filter::{FilterChain, TermFilter};
use crate::analysis::filters::lowercase::LowercaseFilter;
use crate::analysis::filters::stemmer::StemmerFilter;
use crate::analysis::filters::stopword::StopWordFilter;
use crate::analysis::tokenizer::{StandardTokenizer, Tokenizer};

/// Text analysis pipeline: tokenize, then filter every token.
pub struct Analyzer {
    pub tokenizer: Box<dyn Tokenizer>,
    pub filter: Box<dyn TermFilter>,
}

impl Analyzer {
    pub fn new(tokenizer: Box<dyn Tokenizer>, filter: Box<dyn TermFilter>) -> Self {
        Analyzer { tokenizer, filter }
    }

    /// Terms of `text` in token order, discarded tokens dropped.
    pub fn analyze(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .iter()
            .map(|token| self.filter.filter(token))
            .filter(|term| !term.is_empty())
            .collect()
    }

    /// Unicode word tokenizer with lowercasing.
    pub fn standard() -> Self {
        Analyzer::new(Box::new(StandardTokenizer::default()), Box::new(LowercaseFilter))
    }

    /// Lowercasing, English stop words and Porter2 stemming.
    pub fn english() -> Self {
        let chain = FilterChain::new()
            .add_filter(Box::new(LowercaseFilter))
            .add_filter(Box::new(StopWordFilter::english()))
            .add_filter(Box::new(StemmerFilter::english()));
        Analyzer::new(Box::new(StandardTokenizer::default()), Box::new(chain))
    }
}

impl Default for Analyzer {
    fn default() -> Self {
        Analyzer::standard()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field("filter", &self.filter.name())
            .finish()
    }
}
