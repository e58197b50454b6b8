pub mod compare;
pub mod corpus;
pub mod term;
pub mod tfidf;

use std::{marker::PhantomData, sync::Arc};

use log::{debug, warn};

use crate::{
    config::{EmptyDocumentPolicy, VsmConfig},
    error::{Result, VsmError},
    preprocess::{stop_words::StopWords, Preprocessor},
    vectorizer::{
        compare::{Compare, DefaultCompare},
        corpus::{Corpus, Document},
        term::TermVector,
        tfidf::{DefaultTfIdfEngine, IdfCache, TfIdfEngine},
    },
};

/// VectorSpaceModel
/// Preprocesses a fixed corpus once and answers TF-IDF cosine similarity queries
/// between any two of its documents.
///
/// `VectorSpaceModel<E>` has one generic parameter:
/// - `E`: TF-IDF weighting engine (default `DefaultTfIdfEngine`)
#[derive(Debug)]
pub struct VectorSpaceModel<E = DefaultTfIdfEngine>
where
    E: TfIdfEngine,
{
    /// preprocessed documents and document frequencies
    corpus: Corpus,
    /// idf per vocabulary term
    idf_cache: IdfCache,
    preprocessor: Preprocessor,
    config: VsmConfig,
    _marker: PhantomData<E>,
}

impl<E> VectorSpaceModel<E>
where
    E: TfIdfEngine,
{
    /// Create a new VectorSpaceModel
    /// loads the configured stop word source and preprocesses every document
    ///
    /// # Arguments
    /// * `documents` - (name, raw text) pairs
    /// * `config` - model configuration
    ///
    /// # Returns
    /// * `Result<Self>` - configuration error if the stop words cannot be loaded
    pub fn new<I, K, V>(documents: I, config: VsmConfig) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let stop_words = Arc::new(config.stop_words.load()?);
        Ok(Self::with_stop_words(documents, stop_words, config))
    }

    /// Create a new VectorSpaceModel with an already loaded stop word set
    /// `config.stop_words` is ignored
    pub fn with_stop_words<I, K, V>(documents: I, stop_words: Arc<StopWords>, config: VsmConfig) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let preprocessor = Preprocessor::from_config(stop_words, &config);
        let corpus = Corpus::build(documents, &preprocessor);
        let idf_cache = IdfCache::build::<E>(&corpus);
        debug!(
            "vector space model ready: {} documents, {} terms, {} stop words",
            corpus.doc_num(),
            corpus.vocab_size(),
            preprocessor.stop_words().len()
        );
        Self {
            corpus,
            idf_cache,
            preprocessor,
            config,
            _marker: PhantomData,
        }
    }

    fn document(&self, name: &str) -> Result<&Document> {
        self.corpus.get(name).ok_or_else(|| VsmError::not_found(name))
    }

    /// TF-IDF vector of a document
    ///
    /// # Arguments
    /// * `name` - document name
    ///
    /// # Returns
    /// * `Result<TermVector>` - one weight per distinct token
    pub fn vectorize(&self, name: &str) -> Result<TermVector> {
        let doc = self.document(name)?;
        Ok(self.idf_cache.vectorize::<E>(doc))
    }

    /// TF-IDF weight of one term in a document
    /// 0 for terms the document does not contain
    pub fn weight(&self, term: &str, name: &str) -> Result<f64> {
        let doc = self.document(name)?;
        Ok(E::weight(term, doc, &self.corpus))
    }

    /// Cosine similarity of two documents' TF-IDF vectors
    ///
    /// # Arguments
    /// * `a` - first document name
    /// * `b` - second document name
    ///
    /// # Returns
    /// * `Result<f64>` - in [0, 1] for the default engine
    ///
    /// An empty document is handled by `VsmConfig::empty_document`.
    /// If IDF zeroes out both documents, raw term frequencies are compared instead
    /// when `VsmConfig::tf_fallback` is on. If it zeroes out only one of them,
    /// that document is handled like an empty one.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let doc_a = self.document(a)?;
        let doc_b = self.document(b)?;
        for (name, doc) in [(a, doc_a), (b, doc_b)] {
            if doc.is_empty() {
                return self.undefined(name);
            }
        }

        let vec_a = self.idf_cache.vectorize::<E>(doc_a);
        let vec_b = self.idf_cache.vectorize::<E>(doc_b);
        if let Some(sim) = DefaultCompare::cosine_similarity(&vec_a, &vec_b) {
            return Ok(sim);
        }

        let zero_a = vec_a.norm() <= 0.0;
        let zero_b = vec_b.norm() <= 0.0;
        if zero_a && zero_b && self.config.tf_fallback {
            debug!("idf weights vanish for {:?} and {:?}, comparing raw term frequencies", a, b);
            let sim = DefaultCompare::cosine_similarity(&TermVector::from(&doc_a.freq), &TermVector::from(&doc_b.freq));
            return Ok(sim.unwrap_or(0.0));
        }
        self.undefined(if zero_a { a } else { b })
    }

    fn undefined(&self, name: &str) -> Result<f64> {
        match self.config.empty_document {
            EmptyDocumentPolicy::Zero => {
                warn!("document {:?} has no weighted terms, similarity defined as 0", name);
                Ok(0.0)
            }
            EmptyDocumentPolicy::Error => Err(VsmError::UndefinedSimilarity { name: name.to_string() }),
        }
    }
}

/// Accessors
impl<E> VectorSpaceModel<E>
where
    E: TfIdfEngine,
{
    /// preprocessed tokens of a document
    pub fn tokens(&self, name: &str) -> Result<&[String]> {
        Ok(&self.document(name)?.tokens)
    }

    #[inline]
    pub fn contains_doc(&self, name: &str) -> bool {
        self.corpus.contains_doc(name)
    }

    #[inline]
    pub fn doc_num(&self) -> usize {
        self.corpus.doc_num() as usize
    }

    pub fn document_names(&self) -> impl Iterator<Item = &str> {
        self.corpus.names()
    }

    #[inline]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    #[inline]
    pub fn idf_cache(&self) -> &IdfCache {
        &self.idf_cache
    }

    #[inline]
    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }

    #[inline]
    pub fn stop_words(&self) -> &Arc<StopWords> {
        self.preprocessor.stop_words()
    }

    #[inline]
    pub fn config(&self) -> &VsmConfig {
        &self.config
    }
}
