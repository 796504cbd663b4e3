use unicode_segmentation::UnicodeSegmentation;

/// Splits raw text into an ordered sequence of tokens.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;

    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> Tokenizer for F
where
    F: Fn(&str) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, text: &str) -> Vec<String> {
        self(text)
    }
}

/// Standard Unicode tokenizer
#[derive(Debug, Clone)]
pub struct StandardTokenizer {
    pub max_token_length: usize,
}

impl Default for StandardTokenizer {
    fn default() -> Self {
        StandardTokenizer {
            max_token_length: 255,
        }
    }
}

impl Tokenizer for StandardTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        // Use unicode_segmentation to split into words
        text.unicode_words()
            .filter(|word| word.len() <= self.max_token_length)
            .map(str::to_string)
            .collect()
    }

    fn name(&self) -> &str {
        "standard"
    }
}

/// Splits on Unicode whitespace only; punctuation stays attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct WhitespaceTokenizer;

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace().map(str::to_string).collect()
    }

    fn name(&self) -> &str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_splits_on_word_boundaries() {
        let tokens = StandardTokenizer::default().tokenize("Hello, world! It's 2024.");
        assert_eq!(tokens, vec!["Hello", "world", "It's", "2024"]);
    }

    #[test]
    fn standard_drops_overlong_tokens() {
        let tokenizer = StandardTokenizer { max_token_length: 3 };
        assert_eq!(tokenizer.tokenize("ab abcd abc"), vec!["ab", "abc"]);
    }

    #[test]
    fn whitespace_keeps_punctuation() {
        assert_eq!(WhitespaceTokenizer.tokenize(" a,b  c "), vec!["a,b", "c"]);
        assert!(WhitespaceTokenizer.tokenize("   ").is_empty());
    }

    #[test]
    fn closures_are_tokenizers() {
        let split_commas = |text: &str| text.split(',').map(str::to_string).collect::<Vec<_>>();
        assert_eq!(split_commas.tokenize("x,y"), vec!["x", "y"]);
        assert_eq!(Tokenizer::name(&split_commas), "custom");
    }
}
