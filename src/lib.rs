//! Greedy sparse approximation of signals over a dictionary of basis vectors.
//!
//! The central routine is Orthogonal Matching Pursuit, available for `f32`, `f64`,
//! `c32` and `c64` through the [`OrthogonalMatchingPursuit`] trait:
//!
//! ```no_run
//! use ndarray::array;
//! use rusty_pursuit::prelude::*;
//!
//! let dictionary = array![[-0.707_f32, 0.8, 0.0], [0.707, 0.6, -1.0]];
//! let signal = array![1.65_f32, -0.25];
//!
//! let result = f32::omp(dictionary.view(), signal.view(), 2).unwrap();
//! assert_eq!(result.indices, vec![0, 1]);
//! ```
pub mod matching_pursuit;
pub mod prelude;
pub mod pseudo_inverse;
pub mod random_matrix;
pub mod types;

pub use matching_pursuit::{OrthogonalMatchingPursuit, SparseApproximation};
pub use pseudo_inverse::{PseudoInverse, DEFAULT_RCOND};
pub use random_matrix::RandomMatrix;
pub use types::{c32, c64, RelDiff, Result, RustyPursuitError, Scalar};
