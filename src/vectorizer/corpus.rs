use indexmap::IndexMap;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{preprocess::Preprocessor, vectorizer::term::TermFrequency};

/// One preprocessed document
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    /// stemmed tokens in document order
    pub tokens: Vec<String>,
    /// term counts of `tokens`
    pub freq: TermFrequency,
}

impl Document {
    pub fn new(tokens: Vec<String>) -> Self {
        let freq = TermFrequency::from_terms(&tokens);
        Self { tokens, freq }
    }

    /// no surviving tokens
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

/// Preprocessed, immutable document collection
/// keeps the document frequency of every term for IDF
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    documents: IndexMap<String, Document>,
    /// number of documents containing each term
    #[serde(with = "indexmap::map::serde_seq")]
    doc_freq: IndexMap<Box<str>, u64>,
}

impl Corpus {
    /// Preprocess every raw document
    ///
    /// # Arguments
    /// * `raw` - (name, raw text) pairs; a repeated name keeps the last text
    /// * `preprocessor` - text pipeline
    pub fn build<I, K, V>(raw: I, preprocessor: &Preprocessor) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        Self::from_tokens(raw.into_iter().map(|(name, text)| {
            let name: String = name.into();
            let tokens = preprocessor.preprocess(text.as_ref());
            trace!("preprocessed document {:?} into {} tokens", name, tokens.len());
            (name, tokens)
        }))
    }

    /// Build from already preprocessed token lists
    pub fn from_tokens<I, K>(docs: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let mut documents = IndexMap::new();
        for (name, tokens) in docs {
            documents.insert(name.into(), Document::new(tokens));
        }
        let mut doc_freq: IndexMap<Box<str>, u64> = IndexMap::new();
        for doc in documents.values() {
            for term in doc.freq.term_set_ref_str() {
                *doc_freq.entry(term.into()).or_insert(0) += 1;
            }
        }
        Self { documents, doc_freq }
    }
}

impl Corpus {
    /// N
    #[inline]
    pub fn doc_num(&self) -> u64 {
        self.documents.len() as u64
    }

    /// df(term), 0 if no document contains it
    #[inline]
    pub fn doc_freq(&self, term: &str) -> u64 {
        self.doc_freq.get(term).copied().unwrap_or(0)
    }

    /// number of distinct terms across all documents
    #[inline]
    pub fn vocab_size(&self) -> usize {
        self.doc_freq.len()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Document> {
        self.documents.get(name)
    }

    #[inline]
    pub fn contains_doc(&self, name: &str) -> bool {
        self.documents.contains_key(name)
    }

    /// names in insertion order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.documents.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
        self.documents.iter().map(|(name, doc)| (name.as_str(), doc))
    }

    /// (term, df) over the whole vocabulary
    pub fn vocabulary(&self) -> impl Iterator<Item = (&str, u64)> {
        self.doc_freq.iter().map(|(term, &df)| (term.as_ref(), df))
    }
}
