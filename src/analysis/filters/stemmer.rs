use rust_stemmers::{Algorithm, Stemmer};
use crate::analysis::filter::TermFilter;

pub struct StemmerFilter {
    pub algorithm: Algorithm,
    stemmer: Stemmer,
}

impl StemmerFilter {
    pub fn new(algorithm: Algorithm) -> Self {
        StemmerFilter {
            algorithm,
            stemmer: Stemmer::create(algorithm),
        }
    }

    pub fn english() -> Self {
        StemmerFilter::new(Algorithm::English)
    }
}

impl TermFilter for StemmerFilter {
    fn filter(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }

    fn name(&self) -> &str {
        "stemmer"
    }
}
