//! Collect all traits and other exports here.

pub use crate::matching_pursuit::{OrthogonalMatchingPursuit, SparseApproximation};
pub use crate::pseudo_inverse::{PseudoInverse, DEFAULT_RCOND};
pub use crate::random_matrix::RandomMatrix;
pub use crate::types::{c32, c64, ConjMatVec, MatVec, RelDiff, Result, RustyPursuitError};
