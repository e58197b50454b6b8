//! This crate scores document similarity with a TF-IDF Vector Space Model.

pub mod config;
pub mod error;
pub mod preprocess;
pub mod vectorizer;

/// Vector Space Model
/// The top-level struct of this crate.
/// It preprocesses a fixed corpus once at construction and computes the cosine
/// similarity of any two of its documents' TF-IDF vectors.
///
/// Internally, it holds:
/// - The preprocessed corpus (token list and term counts per document)
/// - Document frequency of every term
/// - An IDF cache computed once from the corpus
/// - The preprocessing pipeline and its shared stop word set
///
/// `VectorSpaceModel<E>` has the following generic parameter:
/// - `E`: TF-IDF calculation engine type (default `DefaultTfIdfEngine`)
///
/// # Examples
/// ```
/// use vsm_similarity::{StopWordSource, VectorSpaceModel, VsmConfig};
///
/// let config = VsmConfig::new().with_stop_words(StopWordSource::Inline("the\non".into()));
/// let vsm: VectorSpaceModel = VectorSpaceModel::new(
///     [("A", "The cat sat on the mat"), ("B", "The cat sat on the mat")],
///     config,
/// ).unwrap();
/// assert!((vsm.similarity("A", "B").unwrap() - 1.0).abs() < 1e-9);
/// ```
pub use vectorizer::VectorSpaceModel;

/// Configuration for `VectorSpaceModel`
/// stop word source, minimum token length, stemmer, empty document policy
pub use config::{EmptyDocumentPolicy, VsmConfig};

/// Error type and result alias
pub use error::{Result, VsmError};

/// Preprocessing pipeline
/// normalize -> tokenize -> stop word filter -> stem
pub use preprocess::Preprocessor;

/// Stop word set and its sources
/// - `JavaKeywords`: built-in Java keyword list
/// - `English`: English list of the `stop-words` crate
/// - `Path` / `Inline`: newline delimited lists
pub use preprocess::stop_words::{StopWordSource, StopWords, MIN_TOKEN_LEN};

/// Stemming
/// `SnowballStemmer` is the English Snowball (Porter2) algorithm.
pub use preprocess::stemmer::{NoopStemmer, SnowballStemmer, Stemmer, StemmerKind};

/// Preprocessed corpus
/// Stores token lists per document and the number of documents each term appears in.
/// It is the base data for IDF calculation.
pub use vectorizer::corpus::{Corpus, Document};

/// Term Frequency and Term Vector
/// - `TermFrequency`: occurrence count of each term in a document
/// - `TermVector`: weight per distinct term, produced per query
pub use vectorizer::term::{TermFrequency, TermVector};

/// TF IDF Calculation Engine Trait
/// `DefaultTfIdfEngine` computes raw count × ln(N / df), with idf 0 when df is 0.
pub use vectorizer::tfidf::{DefaultTfIdfEngine, IdfCache, TfIdfEngine};

/// Vector comparison
pub use vectorizer::compare::{Compare, DefaultCompare};
