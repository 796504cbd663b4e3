use crate::analysis::filter::TermFilter;

pub struct LowercaseFilter;

impl TermFilter for LowercaseFilter {
    fn filter(&self, token: &str) -> String {
        token.to_lowercase()
    }

    fn name(&self) -> &str {
        "lowercase"
    }
}
