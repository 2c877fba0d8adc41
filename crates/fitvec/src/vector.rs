//! The fit vector value type and its algebra.

use std::fmt;
use std::ops::{Add, Index, Mul, Not, Range, Sub};

use crate::policy::{CountPolicy, DistanceMetric, FuzzyPolicy, TNorm};
use crate::{FitError, Result};

/// A discrete fuzzy set: a fixed-length membership vector with every
/// element in `[0, 1]`.
///
/// Immutable after construction; every operation returns a new vector or
/// a scalar. Union, intersection, distance, and complement are also
/// available as operators on references:
///
/// | Operation    | Method                | Operator        |
/// |--------------|-----------------------|-----------------|
/// | Union        | [`union`]             | `&a + &b`       |
/// | Intersection | [`intersection`]      | `&a * &b`       |
/// | Distance     | [`distance`]          | `&a - &b`       |
/// | Complement   | [`complement`]        | `!&a`           |
///
/// Subsethood has no operator form (`<` must return `bool` in Rust), so it
/// is exposed only as [`subsethood`].
///
/// [`union`]: FuzzyVector::union
/// [`intersection`]: FuzzyVector::intersection
/// [`distance`]: FuzzyVector::distance
/// [`complement`]: FuzzyVector::complement
/// [`subsethood`]: FuzzyVector::subsethood
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyVector {
    values: Vec<f64>,
    policy: FuzzyPolicy,
}

impl FuzzyVector {
    /// Creates a fit vector under the default policy.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidValue`] if any element lies outside
    /// `[0, 1]` (NaN is rejected as well).
    ///
    /// # Example
    ///
    /// ```
    /// use fitvec::FuzzyVector;
    ///
    /// let a = FuzzyVector::new(vec![0.0, 1.0, 0.5])?;
    /// assert_eq!(a.len(), 3);
    ///
    /// assert!(FuzzyVector::new(vec![1.5, 0.9]).is_err());
    /// assert!(FuzzyVector::new(vec![0.5, -0.5]).is_err());
    /// # Ok::<(), fitvec::FitError>(())
    /// ```
    pub fn new(values: impl Into<Vec<f64>>) -> Result<Self> {
        Self::with_policy(values, FuzzyPolicy::default())
    }

    /// Creates a fit vector carrying an explicit policy.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::InvalidValue`] if any element lies outside
    /// `[0, 1]`.
    pub fn with_policy(values: impl Into<Vec<f64>>, policy: FuzzyPolicy) -> Result<Self> {
        let values = values.into();
        if values.iter().any(|v| !(0.0..=1.0).contains(v)) {
            return Err(FitError::InvalidValue(values));
        }
        Ok(Self { values, policy })
    }

    /// The all-zeros vector (the empty fuzzy set) of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            values: vec![0.0; len],
            policy: FuzzyPolicy::default(),
        }
    }

    /// The all-ones vector (the whole universe) of the given length.
    pub fn ones(len: usize) -> Self {
        Self {
            values: vec![1.0; len],
            policy: FuzzyPolicy::default(),
        }
    }

    /// Returns the same membership values evaluated under a different
    /// policy.
    pub fn under_policy(&self, policy: FuzzyPolicy) -> Self {
        Self {
            values: self.values.clone(),
            policy,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The raw membership values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The policy this vector evaluates under.
    pub fn policy(&self) -> FuzzyPolicy {
        self.policy
    }

    /// Iterates over the membership values in order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied()
    }

    /// Scalar count (cardinality) of the vector.
    ///
    /// Under [`CountPolicy::Sum`] this is the sum of all elements (zero
    /// for the empty vector). Under [`CountPolicy::Product`] it is the
    /// left fold of multiplication starting from the first element.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::Undefined`] for the product count of an empty
    /// vector.
    pub fn count(&self) -> Result<f64> {
        match self.policy.count {
            CountPolicy::Sum => Ok(self.values.iter().sum()),
            CountPolicy::Product => {
                let (first, rest) = self
                    .values
                    .split_first()
                    .ok_or(FitError::Undefined("product count of an empty vector"))?;
                Ok(rest.iter().fold(*first, |acc, v| acc * v))
            }
        }
    }

    /// Distance to another vector of the same length.
    ///
    /// Under [`DistanceMetric::L1`] this is the count of the element-wise
    /// absolute-difference vector; with the default sum count that is the
    /// Hamming-style distance `sum(|a_i - b_i|)`.
    ///
    /// # Errors
    ///
    /// [`FitError::LengthMismatch`] for unequal lengths,
    /// [`FitError::UnsupportedDistance`] for a metric other than L1.
    pub fn distance(&self, other: &FuzzyVector) -> Result<f64> {
        self.check_len(other)?;
        match self.policy.distance {
            DistanceMetric::L1 => self.zip_with(other, |a, b| (a - b).abs()).count(),
            metric => Err(FitError::UnsupportedDistance(metric)),
        }
    }

    /// Fuzzy union: element-wise maximum under the `Min` t-norm.
    ///
    /// # Errors
    ///
    /// [`FitError::LengthMismatch`] for unequal lengths,
    /// [`FitError::UnsupportedTNorm`] for an unimplemented t-norm family.
    pub fn union(&self, other: &FuzzyVector) -> Result<FuzzyVector> {
        self.check_len(other)?;
        match self.policy.tnorm {
            TNorm::Min => Ok(self.zip_with(other, f64::max)),
            norm => Err(FitError::UnsupportedTNorm(norm)),
        }
    }

    /// Fuzzy intersection: element-wise minimum under the `Min` t-norm.
    ///
    /// # Errors
    ///
    /// Same as [`union`](FuzzyVector::union).
    pub fn intersection(&self, other: &FuzzyVector) -> Result<FuzzyVector> {
        self.check_len(other)?;
        match self.policy.tnorm {
            TNorm::Min => Ok(self.zip_with(other, f64::min)),
            norm => Err(FitError::UnsupportedTNorm(norm)),
        }
    }

    /// Fuzzy complement: element-wise `1 - x`. Infallible; the result
    /// stays in `[0, 1]`.
    pub fn complement(&self) -> FuzzyVector {
        self.map(|v| 1.0 - v)
    }

    /// Degree to which `self` is a fuzzy subset of `other`:
    /// `c(A ∩ B) / c(A)`.
    ///
    /// # Errors
    ///
    /// [`FitError::LengthMismatch`] for unequal lengths,
    /// [`FitError::Undefined`] when `c(A)` is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use fitvec::FuzzyVector;
    ///
    /// let a = FuzzyVector::new(vec![0.3, 0.6, 0.4, 0.2])?;
    /// let b = FuzzyVector::new(vec![0.4, 0.5, 0.4, 0.7])?;
    /// assert!((a.subsethood(&b)? - 1.4 / 1.5).abs() < 1e-9);
    /// # Ok::<(), fitvec::FitError>(())
    /// ```
    pub fn subsethood(&self, other: &FuzzyVector) -> Result<f64> {
        let numerator = self.intersection(other)?.count()?;
        let denominator = self.count()?;
        if denominator == 0.0 {
            return Err(FitError::Undefined("subsethood of a zero-count vector"));
        }
        Ok(numerator / denominator)
    }

    /// Nearest vertex of the fuzzy hypercube: element-wise `round(x)`.
    pub fn near(&self) -> FuzzyVector {
        self.map(f64::round)
    }

    /// Farthest vertex of the fuzzy hypercube: element-wise
    /// `1 - round(x)`.
    pub fn far(&self) -> FuzzyVector {
        self.map(|v| 1.0 - v.round())
    }

    /// Ratio entropy of the vector: `c(A ∩ ~A) / c(A ∪ ~A)`.
    ///
    /// Zero at the vertices of the hypercube, maximal (1.0) at the
    /// midpoint where every element is 0.5.
    ///
    /// # Errors
    ///
    /// [`FitError::Undefined`] when the denominator count is zero (the
    /// empty vector under the sum count).
    pub fn fuzziness(&self) -> Result<f64> {
        let complement = self.complement();
        let numerator = self.intersection(&complement)?.count()?;
        let denominator = self.union(&complement)?.count()?;
        if denominator == 0.0 {
            return Err(FitError::Undefined("fuzziness of a zero-count union"));
        }
        Ok(numerator / denominator)
    }

    fn check_len(&self, other: &FuzzyVector) -> Result<()> {
        if self.len() != other.len() {
            return Err(FitError::LengthMismatch {
                expected: self.len(),
                actual: other.len(),
            });
        }
        Ok(())
    }

    // Element-wise combination. Every combiner used keeps [0, 1] closed,
    // so the range check does not rerun.
    fn zip_with(&self, other: &FuzzyVector, f: impl Fn(f64, f64) -> f64) -> FuzzyVector {
        let values = self
            .values
            .iter()
            .zip(&other.values)
            .map(|(&a, &b)| f(a, b))
            .collect();
        FuzzyVector {
            values,
            policy: self.policy,
        }
    }

    fn map(&self, f: impl Fn(f64) -> f64) -> FuzzyVector {
        FuzzyVector {
            values: self.values.iter().map(|&v| f(v)).collect(),
            policy: self.policy,
        }
    }
}

/// Renders as comma-separated values to two decimal places, e.g.
/// `(0.30,0.60,0.40,0.20)`.
impl fmt::Display for FuzzyVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{v:.2}")?;
        }
        write!(f, ")")
    }
}

impl Index<usize> for FuzzyVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.values[index]
    }
}

/// Slicing returns raw values, not a new `FuzzyVector`.
impl Index<Range<usize>> for FuzzyVector {
    type Output = [f64];

    fn index(&self, index: Range<usize>) -> &[f64] {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a FuzzyVector {
    type Item = f64;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter().copied()
    }
}

/// Union.
impl Add for &FuzzyVector {
    type Output = Result<FuzzyVector>;

    fn add(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

/// Intersection.
impl Mul for &FuzzyVector {
    type Output = Result<FuzzyVector>;

    fn mul(self, rhs: Self) -> Self::Output {
        self.intersection(rhs)
    }
}

/// Distance.
impl Sub for &FuzzyVector {
    type Output = Result<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.distance(rhs)
    }
}

/// Distance against a scalar extreme: `0.0` stands for the all-zeros
/// vector of matching length and `1.0` for the all-ones vector. Any other
/// scalar fails with [`FitError::InvalidScalar`].
impl Sub<f64> for &FuzzyVector {
    type Output = Result<f64>;

    fn sub(self, rhs: f64) -> Self::Output {
        let rhs = if rhs == 0.0 {
            FuzzyVector::zeros(self.len())
        } else if rhs == 1.0 {
            FuzzyVector::ones(self.len())
        } else {
            return Err(FitError::InvalidScalar(rhs));
        };
        self.distance(&rhs)
    }
}

/// Complement.
impl Not for &FuzzyVector {
    type Output = FuzzyVector;

    fn not(self) -> FuzzyVector {
        self.complement()
    }
}
