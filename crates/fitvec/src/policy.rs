//! Strategy selectors for the fuzzy algebra.
//!
//! Fuzzy set theory leaves the t-norm family, the count aggregation, and
//! the distance metric open to choice. Each
//! [`FuzzyVector`](crate::FuzzyVector) carries its own [`FuzzyPolicy`]
//! naming the variant in effect; for binary operations the left operand's
//! policy governs and is inherited by the result.

use serde::{Deserialize, Serialize};

/// Triangular norm family used for union and intersection.
///
/// Only [`TNorm::Min`] is implemented; selecting any other family fails
/// with [`FitError::UnsupportedTNorm`](crate::FitError::UnsupportedTNorm).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TNorm {
    /// Gödel t-norm: intersection = min, union = max.
    Min,
    /// Product t-norm (probabilistic interpretation).
    Product,
    /// Łukasiewicz t-norm (bounded arithmetic).
    Lukasiewicz,
}

impl Default for TNorm {
    fn default() -> Self {
        TNorm::Min
    }
}

/// Aggregation used for the scalar count (cardinality) of a vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountPolicy {
    /// `c(A) = sum(a_i)`. Zero for the empty vector.
    Sum,
    /// `c(A) = a_0 * a_1 * ... * a_n`. Undefined for the empty vector.
    Product,
}

impl Default for CountPolicy {
    fn default() -> Self {
        CountPolicy::Sum
    }
}

/// Metric used for the distance between two vectors.
///
/// Only [`DistanceMetric::L1`] is implemented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DistanceMetric {
    /// L1 (Hamming-style): count of the element-wise absolute difference.
    L1,
    /// Euclidean.
    L2,
}

impl Default for DistanceMetric {
    fn default() -> Self {
        DistanceMetric::L1
    }
}

/// Per-vector strategy configuration.
///
/// # Example
///
/// ```
/// use fitvec::{CountPolicy, FuzzyPolicy, FuzzyVector};
///
/// let policy = FuzzyPolicy::default().with_count(CountPolicy::Product);
/// let a = FuzzyVector::with_policy(vec![0.5, 0.2, 1.0], policy)?;
/// assert!((a.count()? - 0.1).abs() < 1e-9);
/// # Ok::<(), fitvec::FitError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FuzzyPolicy {
    /// T-norm family for union/intersection.
    pub tnorm: TNorm,
    /// Count aggregation for cardinality.
    pub count: CountPolicy,
    /// Distance metric.
    pub distance: DistanceMetric,
}

impl FuzzyPolicy {
    /// Replaces the t-norm family.
    pub fn with_tnorm(mut self, tnorm: TNorm) -> Self {
        self.tnorm = tnorm;
        self
    }

    /// Replaces the count aggregation.
    pub fn with_count(mut self, count: CountPolicy) -> Self {
        self.count = count;
        self
    }

    /// Replaces the distance metric.
    pub fn with_distance(mut self, distance: DistanceMetric) -> Self {
        self.distance = distance;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy() {
        let policy = FuzzyPolicy::default();
        assert_eq!(policy.tnorm, TNorm::Min);
        assert_eq!(policy.count, CountPolicy::Sum);
        assert_eq!(policy.distance, DistanceMetric::L1);
    }

    #[test]
    fn test_with_builders() {
        let policy = FuzzyPolicy::default()
            .with_tnorm(TNorm::Product)
            .with_count(CountPolicy::Product)
            .with_distance(DistanceMetric::L2);
        assert_eq!(policy.tnorm, TNorm::Product);
        assert_eq!(policy.count, CountPolicy::Product);
        assert_eq!(policy.distance, DistanceMetric::L2);
    }
}
