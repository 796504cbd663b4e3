/// Normalizes one token into an indexable term. An empty result discards the token.
pub trait TermFilter: Send + Sync {
    fn filter(&self, token: &str) -> String;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> TermFilter for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn filter(&self, token: &str) -> String {
        self(token)
    }
}

/// Applies filters in order, stopping as soon as one discards the token.
#[derive(Default)]
pub struct FilterChain {
    pub filters: Vec<Box<dyn TermFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        FilterChain { filters: Vec::new() }
    }

    pub fn add_filter(mut self, filter: Box<dyn TermFilter>) -> Self {
        self.filters.push(filter);
        self
    }
}

impl TermFilter for FilterChain {
    fn filter(&self, token: &str) -> String {
        let mut term = token.to_string();
        for filter in &self.filters {
            term = filter.filter(&term);
            if term.is_empty() {
                break;
            }
        }
        term
    }

    fn name(&self) -> &str {
        "chain"
    }
}
