use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Counts how often each term occurs in one document.
/// Terms keep first-occurrence order.
///
/// # Examples
/// ```
/// use vsm_similarity::TermFrequency;
/// let mut term_freq = TermFrequency::new();
/// term_freq.add_term("cat");
/// term_freq.add_term("mat");
/// term_freq.add_term("cat");
///
/// assert_eq!(term_freq.term_count("cat"), 2);
/// assert_eq!(term_freq.term_sum(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a token list
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        let mut freq = Self::new();
        freq.add_terms(terms);
        freq
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        if let Some(count) = self.term_count.get_mut(term) {
            *count += 1;
        } else {
            self.term_count.insert(term.to_string(), 1);
        }
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - Slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Statistics
impl TermFrequency {
    /// raw occurrence count, 0 if absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// total number of terms including duplicates
    #[inline]
    pub fn term_sum(&self) -> u64 {
        self.total_term_count
    }

    /// number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// distinct terms in first-occurrence order
    #[inline]
    pub fn term_set_ref_str(&self) -> Vec<&str> {
        self.term_count.keys().map(String::as_str).collect()
    }

    /// (term, count) in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}

/// TermVector struct
/// Weight per distinct term of one document.
/// Built per query, never cached by the model.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    #[serde(with = "indexmap::map::serde_seq")]
    weights: IndexMap<String, f64>,
}

impl TermVector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            weights: IndexMap::with_capacity(capacity),
        }
    }

    /// set the weight of a term, replacing any previous one
    #[inline]
    pub fn insert(&mut self, term: &str, weight: f64) {
        self.weights.insert(term.to_string(), weight);
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<f64> {
        self.weights.get(term).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(term, &weight)| (term.as_str(), weight))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.weights.keys().map(String::as_str)
    }

    /// Euclidean norm over all of this vector's terms
    #[inline]
    pub fn norm(&self) -> f64 {
        self.weights.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Dot product, only shared terms contribute
    /// products are summed in term order so `a.dot(b)` and `b.dot(a)` are bit-identical
    pub fn dot(&self, other: &TermVector) -> f64 {
        let (small, large) = if self.len() <= other.len() { (self, other) } else { (other, self) };
        let mut products: Vec<(&str, f64)> = small
            .weights
            .iter()
            .filter_map(|(term, &w)| large.weights.get(term).map(|&o| (term.as_str(), w * o)))
            .collect();
        products.sort_unstable_by(|a, b| a.0.cmp(b.0));
        products.into_iter().map(|(_, p)| p).sum()
    }
}

impl From<&TermFrequency> for TermVector {
    /// raw counts as weights
    fn from(freq: &TermFrequency) -> Self {
        let mut vec = TermVector::with_capacity(freq.term_num());
        for (term, count) in freq.iter() {
            vec.insert(term, count as f64);
        }
        vec
    }
}

impl<'a> FromIterator<(&'a str, f64)> for TermVector {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut vec = TermVector::new();
        for (term, weight) in iter {
            vec.insert(term, weight);
        }
        vec
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_duplicates_and_keeps_first_occurrence_order() {
        let freq = TermFrequency::from_terms(&["mat", "cat", "mat", "sat", "mat"]);
        assert_eq!(freq.term_count("mat"), 3);
        assert_eq!(freq.term_count("cat"), 1);
        assert_eq!(freq.term_count("dog"), 0);
        assert_eq!(freq.term_sum(), 5);
        assert_eq!(freq.term_num(), 3);
        assert_eq!(freq.term_set_ref_str(), vec!["mat", "cat", "sat"]);
    }

    #[test]
    fn empty_frequency() {
        let freq = TermFrequency::from_terms::<&str>(&[]);
        assert!(freq.is_empty());
        assert_eq!(freq.term_sum(), 0);
    }

    #[test]
    fn norm_and_dot() {
        let a: TermVector = [("x", 3.0), ("y", 4.0)].into_iter().collect();
        let b: TermVector = [("y", 2.0), ("z", 7.0)].into_iter().collect();
        assert!((a.norm() - 5.0).abs() < 1e-12);
        assert!((a.dot(&b) - 8.0).abs() < 1e-12);
        assert!((b.dot(&a) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn dot_is_bit_identical_in_both_directions() {
        // same terms, opposite insertion order, magnitudes that round differently per order
        let a: TermVector = [("p", 1e16), ("q", 0.1), ("r", -1e16), ("s", 0.3), ("t", 0.7)]
            .into_iter()
            .collect();
        let b: TermVector = [("t", 0.9), ("s", 1.1), ("r", 1.0), ("q", 0.2), ("p", 1.0)]
            .into_iter()
            .collect();
        assert_eq!(a.dot(&b).to_bits(), b.dot(&a).to_bits());
    }

    #[test]
    fn insert_replaces_weight() {
        let mut vec = TermVector::new();
        vec.insert("x", 1.0);
        vec.insert("x", 2.5);
        assert_eq!(vec.len(), 1);
        assert_eq!(vec.get("x"), Some(2.5));
        assert_eq!(vec.get("y"), None);
    }

    #[test]
    fn raw_counts_from_frequency() {
        let freq = TermFrequency::from_terms(&["a", "b", "a"]);
        let vec = TermVector::from(&freq);
        assert_eq!(vec.get("a"), Some(2.0));
        assert_eq!(vec.get("b"), Some(1.0));
        assert_eq!(vec.terms().collect::<Vec<_>>(), vec!["a", "b"]);
    }
}
