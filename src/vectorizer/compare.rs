use num::Float;

use crate::vectorizer::term::TermVector;

/// Vector comparison over sparse term vectors
pub trait Compare {
    /// cos(θ) = Σ(a_i * b_i) / (||a|| * ||b||)
    /// `None` when either norm is zero
    fn cosine_similarity(vec: &TermVector, other: &TermVector) -> Option<f64>;
}

#[derive(Debug)]
pub struct DefaultCompare;

impl Compare for DefaultCompare {
    #[inline]
    fn cosine_similarity(vec: &TermVector, other: &TermVector) -> Option<f64> {
        cosine(vec.dot(other), vec.norm(), other.norm())
    }
}

/// dot / (norm_a * norm_b) clamped to [-1, 1]
/// rounding can push identical vectors slightly above 1
#[inline]
pub fn cosine<N: Float>(dot: N, norm_a: N, norm_b: N) -> Option<N> {
    let denom = norm_a * norm_b;
    if denom <= N::zero() || !denom.is_finite() {
        return None;
    }
    Some(num::clamp(dot / denom, -N::one(), N::one()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec(pairs: &[(&str, f64)]) -> TermVector {
        pairs.iter().copied().collect()
    }

    #[test]
    fn identical_vectors_score_one() {
        let a = vec(&[("cat", 0.7), ("mat", 1.3), ("sat", 0.1)]);
        let sim = DefaultCompare::cosine_similarity(&a, &a.clone()).unwrap();
        assert!((sim - 1.0).abs() < 1e-9);
        assert!(sim <= 1.0);
    }

    #[test]
    fn norms_use_each_full_term_set() {
        let a = vec(&[("x", 1.0), ("y", 1.0)]);
        let b = vec(&[("x", 1.0), ("z", 1.0)]);
        let sim = DefaultCompare::cosine_similarity(&a, &b).unwrap();
        assert!((sim - 0.5).abs() < 1e-12);
    }

    #[test]
    fn disjoint_vectors_score_zero() {
        let a = vec(&[("appl", 0.69)]);
        let b = vec(&[("banana", 0.69)]);
        assert_eq!(DefaultCompare::cosine_similarity(&a, &b), Some(0.0));
        assert_eq!(a.dot(&b), 0.0);
    }

    #[test]
    fn zero_norm_is_undefined() {
        let a = vec(&[("x", 0.0)]);
        let b = vec(&[("x", 1.0)]);
        assert_eq!(DefaultCompare::cosine_similarity(&a, &b), None);
        assert_eq!(DefaultCompare::cosine_similarity(&TermVector::new(), &b), None);
    }

    #[test]
    fn generic_over_float_width() {
        assert_eq!(cosine(2.0f32, 1.0, 2.0), Some(1.0));
        assert_eq!(cosine(0.0f64, 0.0, 3.0), None);
    }
}
