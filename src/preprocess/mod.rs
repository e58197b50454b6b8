pub mod normalizer;
pub mod stemmer;
pub mod stop_words;

use std::sync::Arc;

use crate::{
    config::VsmConfig,
    preprocess::{
        stemmer::Stemmer,
        stop_words::{StopWords, MIN_TOKEN_LEN},
    },
};

/// Preprocessor
/// Turns raw text into the token list a document is vectorized from.
///
/// normalize -> tokenize -> stop word filter -> stem each token
///
/// # Examples
/// ```
/// use std::sync::Arc;
/// use vsm_similarity::{Preprocessor, StopWords, SnowballStemmer};
///
/// let stop_words: StopWords = ["the", "on"].into_iter().collect();
/// let pre = Preprocessor::new(Arc::new(stop_words), Box::new(SnowballStemmer::english()), 2);
/// assert_eq!(pre.preprocess("The cat sat on the mat"), vec!["cat", "sat", "mat"]);
/// ```
#[derive(Debug)]
pub struct Preprocessor {
    stop_words: Arc<StopWords>,
    stemmer: Box<dyn Stemmer>,
    min_token_len: usize,
}

impl Preprocessor {
    /// Create a new Preprocessor
    ///
    /// # Arguments
    /// * `stop_words` - shared stop word set
    /// * `stemmer` - stemming algorithm
    /// * `min_token_len` - shorter tokens are dropped before stemming, at least `MIN_TOKEN_LEN`
    pub fn new(stop_words: Arc<StopWords>, stemmer: Box<dyn Stemmer>, min_token_len: usize) -> Self {
        Self {
            stop_words,
            stemmer,
            min_token_len: min_token_len.max(MIN_TOKEN_LEN),
        }
    }

    pub fn from_config(stop_words: Arc<StopWords>, config: &VsmConfig) -> Self {
        Self::new(stop_words, config.stemmer.build(), config.min_token_len)
    }

    /// Preprocess one document
    ///
    /// # Arguments
    /// * `text` - raw text
    ///
    /// # Returns
    /// * `Vec<String>` - stemmed tokens in document order, duplicates kept
    pub fn preprocess(&self, text: &str) -> Vec<String> {
        let tokens = normalizer::normalize_tokens(text);
        self.stop_words
            .filter(tokens, self.min_token_len)
            .iter()
            .map(|token| self.stemmer.stem(token))
            .collect()
    }

    #[inline]
    pub fn stop_words(&self) -> &Arc<StopWords> {
        &self.stop_words
    }

    #[inline]
    pub fn min_token_len(&self) -> usize {
        self.min_token_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preprocess::stemmer::{NoopStemmer, SnowballStemmer};

    fn preprocessor(stop: &[&str]) -> Preprocessor {
        let stop_words: StopWords = stop.iter().collect();
        Preprocessor::new(Arc::new(stop_words), Box::new(SnowballStemmer::english()), 2)
    }

    #[test]
    fn full_pipeline_in_order() {
        let pre = preprocessor(&["the", "on"]);
        assert_eq!(pre.preprocess("The cat sat on the mat"), vec!["cat", "sat", "mat"]);
    }

    #[test]
    fn stop_words_match_before_stemming() {
        // "running" is not a stop word even though it stems to one
        let pre = preprocessor(&["run"]);
        assert_eq!(pre.preprocess("run running"), vec!["run"]);
    }

    #[test]
    fn punctuation_splits_identifiers() {
        let pre = preprocessor(&["public", "void"]);
        assert_eq!(
            pre.preprocess("public void addClass(int x){ classes.add(x); }"),
            vec!["addclass", "int", "class", "add"]
        );
    }

    #[test]
    fn duplicates_are_kept() {
        let pre = Preprocessor::new(Arc::new(StopWords::new()), Box::new(NoopStemmer), 2);
        assert_eq!(pre.preprocess("go go gadget go"), vec!["go", "go", "gadget", "go"]);
    }

    #[test]
    fn empty_text_is_valid() {
        let pre = preprocessor(&["the"]);
        assert!(pre.preprocess("").is_empty());
        assert!(pre.preprocess("   the  a ! 7").is_empty());
    }

    #[test]
    fn min_token_len_is_configurable() {
        let pre = Preprocessor::new(Arc::new(StopWords::new()), Box::new(NoopStemmer), 4);
        assert_eq!(pre.preprocess("the cat jumped"), vec!["jumped"]);
        assert_eq!(pre.min_token_len(), 4);
    }

    #[test]
    fn single_letters_are_dropped_for_any_min_token_len() {
        for min_len in [0, 1] {
            let pre = Preprocessor::new(Arc::new(StopWords::new()), Box::new(NoopStemmer), min_len);
            assert_eq!(pre.min_token_len(), MIN_TOKEN_LEN);
            assert_eq!(pre.preprocess("a b cat x"), vec!["cat"]);
        }
    }
}
