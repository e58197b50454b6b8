use std::{collections::HashSet, fs::File, io::{BufRead, BufReader}, path::{Path, PathBuf}};

use log::debug;
use serde::{Deserialize, Serialize};
use stop_words::LANGUAGE;

use crate::error::{Result, VsmError};

/// Single-character tokens never survive filtering
pub const MIN_TOKEN_LEN: usize = 2;

/// Java keywords, one per line
const JAVA_KEYWORDS: &str = include_str!("../../resources/java_keywords.txt");

/// StopWords struct
/// Immutable set of lowercase tokens excluded from every document.
/// Built once and shared (`Arc<StopWords>`) by the model and its preprocessor.
///
/// # Examples
/// ```
/// use vsm_similarity::StopWords;
/// let stop_words = StopWords::parse("the\non\n").unwrap();
/// assert!(stop_words.contains("the"));
/// assert_eq!(
///     stop_words.filter(vec!["the".into(), "cat".into(), "a".into()], 2),
///     vec!["cat".to_string()]
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopWords {
    words: HashSet<String>,
}

/// Loading
impl StopWords {
    /// empty set, filtering only drops short tokens
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a newline delimited list
    ///
    /// # Arguments
    /// * `reader` - line oriented source
    ///
    /// # Returns
    /// * `Result<StopWords>` - `VsmError::Config` on unreadable or malformed lines
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(|e| {
                VsmError::config(format!("stop word line {} is unreadable: {}", idx + 1, e))
            })?;
            if let Some(word) = parse_line(&line, idx + 1)? {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// Read a newline delimited file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| VsmError::StopWordsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let stop_words = Self::from_reader(BufReader::new(file))?;
        debug!("loaded {} stop words from {}", stop_words.len(), path.display());
        Ok(stop_words)
    }

    /// Parse newline delimited text
    pub fn parse(text: &str) -> Result<Self> {
        let mut words = HashSet::new();
        for (idx, line) in text.lines().enumerate() {
            if let Some(word) = parse_line(line, idx + 1)? {
                words.insert(word);
            }
        }
        Ok(Self { words })
    }

    /// built-in Java keyword list
    pub fn java_keywords() -> Self {
        JAVA_KEYWORDS
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    /// English list of the `stop-words` crate
    pub fn english() -> Self {
        stop_words::get(LANGUAGE::English).iter().collect()
    }
}

/// Lookup and filtering
impl StopWords {
    #[inline]
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Keep tokens that are not stop words and at least `min_len` long
    /// order is preserved, `min_len` below `MIN_TOKEN_LEN` is raised to it
    ///
    /// # Arguments
    /// * `tokens` - normalized tokens
    /// * `min_len` - minimum token length in bytes
    ///
    /// # Returns
    /// * `Vec<String>` - subsequence of `tokens`
    #[inline]
    pub fn filter(&self, mut tokens: Vec<String>, min_len: usize) -> Vec<String> {
        let min_len = min_len.max(MIN_TOKEN_LEN);
        tokens.retain(|token| token.len() >= min_len && !self.contains(token));
        tokens
    }
}

impl<T> FromIterator<T> for StopWords
where
    T: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            words: iter
                .into_iter()
                .filter_map(|word| admit(word.as_ref()))
                .collect(),
        }
    }
}

/// blank and `#` lines are skipped
fn parse_line(line: &str, line_no: usize) -> Result<Option<String>> {
    let word = line.trim();
    if word.is_empty() || word.starts_with('#') {
        return Ok(None);
    }
    if word.chars().any(char::is_whitespace) {
        return Err(VsmError::config(format!(
            "stop word line {} holds more than one token: {:?}",
            line_no, word
        )));
    }
    Ok(admit(word))
}

/// Lowercased entry, or `None` if it holds anything but ASCII letters.
/// Normalized tokens are letters only, so such an entry could never match.
fn admit(word: &str) -> Option<String> {
    if !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic()) {
        return Some(word.to_ascii_lowercase());
    }
    debug!("skipping stop word {:?}, it can never match a normalized token", word);
    None
}

/// Where the stop word set comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StopWordSource {
    /// no stop words
    Empty,
    /// built-in Java keyword list
    #[default]
    JavaKeywords,
    /// `stop-words` crate English list
    English,
    /// newline delimited file
    Path(PathBuf),
    /// newline delimited text
    Inline(String),
}

impl StopWordSource {
    /// Resolve the source into a stop word set
    pub fn load(&self) -> Result<StopWords> {
        let stop_words = match self {
            StopWordSource::Empty => StopWords::new(),
            StopWordSource::JavaKeywords => StopWords::java_keywords(),
            StopWordSource::English => StopWords::english(),
            StopWordSource::Path(path) => StopWords::from_path(path)?,
            StopWordSource::Inline(text) => StopWords::parse(text)?,
        };
        debug!("stop word source {:?} resolved to {} words", self.kind(), stop_words.len());
        Ok(stop_words)
    }

    fn kind(&self) -> &'static str {
        match self {
            StopWordSource::Empty => "empty",
            StopWordSource::JavaKeywords => "java_keywords",
            StopWordSource::English => "english",
            StopWordSource::Path(_) => "path",
            StopWordSource::Inline(_) => "inline",
        }
    }
}
