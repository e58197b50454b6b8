use std::fmt::Debug;

use rust_stemmers::Algorithm;
use serde::{Deserialize, Serialize};

/// Reduces a normalized token to its root
/// must be a pure function of the token
pub trait Stemmer: Debug + Send + Sync {
    fn stem(&self, token: &str) -> String;
}

/// English Snowball (Porter2) stemmer
/// every call runs on a fresh snowball environment, no state is shared between tokens
pub struct SnowballStemmer {
    stemmer: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            stemmer: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("algorithm", &"English")
            .finish()
    }
}

impl Stemmer for SnowballStemmer {
    #[inline]
    fn stem(&self, token: &str) -> String {
        self.stemmer.stem(token).into_owned()
    }
}

/// leaves tokens untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStemmer;

impl Stemmer for NoopStemmer {
    #[inline]
    fn stem(&self, token: &str) -> String {
        token.to_string()
    }
}

/// Stemmer selection for `VsmConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StemmerKind {
    #[default]
    Porter,
    None,
}

impl StemmerKind {
    pub fn build(self) -> Box<dyn Stemmer> {
        match self {
            StemmerKind::Porter => Box::new(SnowballStemmer::english()),
            StemmerKind::None => Box::new(NoopStemmer),
        }
    }
}
