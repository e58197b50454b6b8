use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub use crate::preprocess::{
    stemmer::StemmerKind,
    stop_words::{StopWordSource, MIN_TOKEN_LEN},
};

/// What a similarity query returns when a document has no weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDocumentPolicy {
    /// similarity is 0.0
    #[default]
    Zero,
    /// `VsmError::UndefinedSimilarity`
    Error,
}

/// VectorSpaceModel configuration
///
/// Defaults:
/// - Java keyword stop words
/// - tokens shorter than 2 chars dropped
/// - English Snowball stemming
/// - empty documents score 0.0
/// - raw TF cosine when IDF zeroes out both documents of a pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VsmConfig {
    pub stop_words: StopWordSource,
    pub min_token_len: usize,
    pub stemmer: StemmerKind,
    pub empty_document: EmptyDocumentPolicy,
    /// use raw term frequencies when IDF zeroes out both documents
    pub tf_fallback: bool,
}

impl Default for VsmConfig {
    fn default() -> Self {
        Self {
            stop_words: StopWordSource::default(),
            min_token_len: MIN_TOKEN_LEN,
            stemmer: StemmerKind::default(),
            empty_document: EmptyDocumentPolicy::default(),
            tf_fallback: true,
        }
    }
}

impl VsmConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stop_words(mut self, source: StopWordSource) -> Self {
        self.stop_words = source;
        self
    }

    pub fn with_stop_words_file<P: Into<PathBuf>>(self, path: P) -> Self {
        self.with_stop_words(StopWordSource::Path(path.into()))
    }

    /// values below `MIN_TOKEN_LEN` are raised to it
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len.max(MIN_TOKEN_LEN);
        self
    }

    pub fn with_stemmer(mut self, stemmer: StemmerKind) -> Self {
        self.stemmer = stemmer;
        self
    }

    pub fn with_empty_document(mut self, policy: EmptyDocumentPolicy) -> Self {
        self.empty_document = policy;
        self
    }

    pub fn with_tf_fallback(mut self, tf_fallback: bool) -> Self {
        self.tf_fallback = tf_fallback;
        self
    }
}
