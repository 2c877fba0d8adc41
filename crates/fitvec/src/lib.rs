//! Discrete fuzzy-set algebra over fit vectors.
//!
//! A fit vector is a fixed-length membership vector with every element in
//! `[0, 1]`. This crate provides the algebraic operations of fuzzy set
//! theory over such vectors:
//!
//! - **Union / intersection**: element-wise max/min under the `Min` t-norm
//! - **Complement**: element-wise `1 - x`
//! - **Distance**: L1 (Hamming-style) distance between two vectors
//! - **Count**: scalar cardinality, as a sum or product of elements
//! - **Subsethood**: degree to which one vector is contained in another
//! - **Fuzziness**: ratio entropy, maximal at the midpoint of the hypercube
//!
//! Strategy selection (t-norm family, count aggregation, distance metric)
//! is carried per-instance in a [`FuzzyPolicy`], so vectors with different
//! policies coexist without shared global state.
//!
//! # Example
//!
//! ```
//! use fitvec::FuzzyVector;
//!
//! let a = FuzzyVector::new(vec![0.3, 0.6, 0.4, 0.2])?;
//! let b = FuzzyVector::new(vec![0.4, 0.5, 0.4, 0.7])?;
//!
//! // Union and intersection via operators or named methods.
//! let union = (&a + &b)?;
//! assert_eq!(union.values(), &[0.4, 0.6, 0.4, 0.7]);
//!
//! // L1 distance: |0.1| + |0.1| + |0.0| + |0.5| = 0.7
//! let d = (&a - &b)?;
//! assert!((d - 0.7).abs() < 1e-9);
//!
//! // Degree to which A is a fuzzy subset of B.
//! let s = a.subsethood(&b)?;
//! assert!((s - 1.4 / 1.5).abs() < 1e-9);
//! # Ok::<(), fitvec::FitError>(())
//! ```

mod policy;
mod vector;

pub use policy::{CountPolicy, DistanceMetric, FuzzyPolicy, TNorm};
pub use vector::FuzzyVector;

use thiserror::Error;

/// Error type for fit-vector operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FitError {
    /// Construction was given an element outside `[0, 1]`.
    #[error("fit vector values must be in [0, 1]: got {0:?}")]
    InvalidValue(Vec<f64>),

    /// Binary operation over vectors of unequal length.
    #[error("length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// A scalar distance operand other than the literal 0 or 1.
    #[error("scalar operand must be the literal 0 or 1, got {0}")]
    InvalidScalar(f64),

    /// The configured t-norm family has no implementation.
    #[error("t-norm {0:?} is not implemented")]
    UnsupportedTNorm(TNorm),

    /// The configured distance metric has no implementation.
    #[error("distance metric {0:?} is not implemented")]
    UnsupportedDistance(DistanceMetric),

    /// The result is arithmetically undefined (division by a zero count,
    /// product count of an empty vector).
    #[error("undefined result: {0}")]
    Undefined(&'static str),
}

/// Result type for fit-vector operations.
pub type Result<T> = std::result::Result<T, FitError>;
