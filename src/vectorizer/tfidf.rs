use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::vectorizer::{corpus::{Corpus, Document}, term::TermVector};

/// TF-IDF weighting strategy
/// plug a different one into `VectorSpaceModel<E>`
pub trait TfIdfEngine {
    /// term frequency weight
    ///
    /// # Arguments
    /// * `count` - occurrences of the term in the document
    /// * `term_sum` - document length in tokens
    fn tf(count: u64, term_sum: u64) -> f64;

    /// inverse document frequency weight
    ///
    /// # Arguments
    /// * `doc_num` - N, documents in the corpus
    /// * `doc_freq` - df, documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// weight(term, document, corpus) computed from scratch
    #[inline]
    fn weight(term: &str, doc: &Document, corpus: &Corpus) -> f64 {
        Self::tf(doc.freq.term_count(term), doc.freq.term_sum())
            * Self::idf(corpus.doc_num(), corpus.doc_freq(term))
    }
}

/// Default engine
/// tf = raw count
/// idf = ln(N / df), 0 when df == 0
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl TfIdfEngine for DefaultTfIdfEngine {
    #[inline]
    fn tf(count: u64, _term_sum: u64) -> f64 {
        count as f64
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        if doc_freq == 0 || doc_num == 0 {
            return 0.0;
        }
        (doc_num as f64 / doc_freq as f64).ln()
    }
}

/// IDF per vocabulary term
/// the corpus never changes after construction, so this is computed once
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdfCache {
    #[serde(with = "indexmap::map::serde_seq")]
    idf: IndexMap<Box<str>, f64>,
    /// N at computation time
    pub doc_num: u64,
}

impl IdfCache {
    pub fn build<E: TfIdfEngine>(corpus: &Corpus) -> Self {
        let doc_num = corpus.doc_num();
        let idf = corpus
            .vocabulary()
            .map(|(term, df)| (Box::<str>::from(term), E::idf(doc_num, df)))
            .collect();
        Self { idf, doc_num }
    }

    /// idf of a term, 0 for terms outside the vocabulary
    #[inline]
    pub fn idf(&self, term: &str) -> f64 {
        self.idf.get(term).copied().unwrap_or(0.0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.idf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.idf.is_empty()
    }

    /// TF-IDF vector of one document
    /// one entry per distinct token
    pub fn vectorize<E: TfIdfEngine>(&self, doc: &Document) -> TermVector {
        let term_sum = doc.freq.term_sum();
        let mut vec = TermVector::with_capacity(doc.freq.term_num());
        for (term, count) in doc.freq.iter() {
            vec.insert(term, E::tf(count, term_sum) * self.idf(term));
        }
        vec
    }
}
