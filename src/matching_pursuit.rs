//! Orthogonal Matching Pursuit
//!
//! Given a dictionary $D\in\mathbb{C}^{m\times n}$ whose columns are candidate basis vectors
//! and a signal $y\in\mathbb{C}^m$, Orthogonal Matching Pursuit greedily builds a support
//! $\Lambda$ of $L$ columns. In each step the column with the largest projection
//! $|d_j^Hr|$ onto the current residue $r$ is added to $\Lambda$, the coefficients are
//! re-fitted as $\alpha = D_\Lambda^+y$ and the residue is updated to $r = y - D_\Lambda\alpha$.
//!
//! The loop always runs for exactly $L$ iterations. Ties in the projection are resolved in
//! favour of the lowest column index, and a column is never selected twice.

use crate::pseudo_inverse::{PseudoInverse, DEFAULT_RCOND};
use crate::types::{ConjMatVec, MatVec, Result, RustyPursuitError, Scalar};
use itertools::Itertools;
use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};
use ndarray_linalg::Norm;

/// Result of a sparse approximation.
#[derive(Clone, Debug)]
pub struct SparseApproximation<A: Scalar> {
    /// The approximation $D_\Lambda\alpha$ of the signal.
    pub approximation: Array1<A>,
    /// Dictionary column indices in the order in which they were selected.
    pub indices: Vec<usize>,
    /// Least-squares coefficients, ordered like `indices`.
    pub coefficients: Array1<A>,
    /// Signal minus approximation.
    pub residue: Array1<A>,
    /// l2 norm of the residue after each iteration.
    pub residual_norms: Vec<A::Real>,
}

impl<A: Scalar> SparseApproximation<A> {
    /// Number of selected bases.
    pub fn sparsity(&self) -> usize {
        self.indices.len()
    }

    /// Dimension of the approximated signal.
    pub fn nrows(&self) -> usize {
        self.approximation.len()
    }

    /// Split into (approximation, indices, coefficients, residue).
    pub fn into_parts(self) -> (Array1<A>, Vec<usize>, Array1<A>, Array1<A>) {
        (
            self.approximation,
            self.indices,
            self.coefficients,
            self.residue,
        )
    }

    /// Gather the selected columns of `dictionary` in selection order.
    pub fn selected_bases(&self, dictionary: ArrayView2<A>) -> Array2<A> {
        dictionary.select(Axis(1), &self.indices)
    }

    /// Scatter the coefficients into a vector of length `ncols` that is zero
    /// outside of the selected support.
    ///
    /// # Panics
    ///
    /// Panics if a selected column index is not smaller than `ncols`.
    pub fn dense_coefficients(&self, ncols: usize) -> Array1<A> {
        assert!(
            self.indices.iter().all(|&index| index < ncols),
            "`ncols` is smaller than a selected column index."
        );

        let mut dense = Array1::<A>::zeros(ncols);
        for (&index, &coeff) in self.indices.iter().zip(self.coefficients.iter()) {
            dense[index] = coeff;
        }
        dense
    }

    /// Apply the sparse representation to a dictionary, i.e. compute $D_\Lambda\alpha$.
    pub fn apply_dictionary(&self, dictionary: ArrayView2<A>) -> Array1<A> {
        self.selected_bases(dictionary).dot(&self.coefficients)
    }
}

impl<A: Scalar + ndarray_linalg::Lapack> SparseApproximation<A> {
    /// l2 norm of the final residue.
    pub fn residual_norm(&self) -> A::Real {
        self.residue.norm_l2()
    }
}

pub trait OrthogonalMatchingPursuit
where
    Self: PseudoInverse,
{
    /// Approximate `signal` by `iterations` columns of `dictionary`.
    ///
    /// Uses the default pseudo-inverse cutoff `DEFAULT_RCOND`.
    fn omp(
        dictionary: ArrayView2<Self>,
        signal: ArrayView1<Self>,
        iterations: usize,
    ) -> Result<SparseApproximation<Self>> {
        Self::omp_with_rcond(dictionary, signal, iterations, DEFAULT_RCOND)
    }

    /// Approximate `signal` by `iterations` columns of `dictionary`.
    ///
    /// # Arguments
    ///
    /// * `dictionary`: The (m, n) dictionary. Columns are the candidate bases.
    /// * `signal`: The signal of length m.
    /// * `iterations`: Number of bases to select. Require `1 <= iterations <= n`.
    /// * `rcond`: Relative singular value cutoff of the least-squares re-fit.
    ///
    /// # Errors
    ///
    /// * `EmptyDictionary` if the dictionary has no rows or no columns. A signal of
    ///   dimension zero has nothing to approximate.
    /// * `DimensionMismatch` if `signal` does not have one entry per dictionary row.
    /// * `InvalidIterationCount` if `iterations` is zero or exceeds the number of columns.
    /// * `InvalidTolerance` if `rcond` lies outside of `[0, 1)`.
    /// * `LinalgError` if the SVD of the re-fit fails.
    fn omp_with_rcond(
        dictionary: ArrayView2<Self>,
        signal: ArrayView1<Self>,
        iterations: usize,
        rcond: f64,
    ) -> Result<SparseApproximation<Self>> {
        let (nrows, ncols) = dictionary.dim();

        if nrows == 0 || ncols == 0 {
            return Err(RustyPursuitError::EmptyDictionary);
        }
        if signal.len() != nrows {
            return Err(RustyPursuitError::DimensionMismatch {
                rows: nrows,
                signal_len: signal.len(),
            });
        }
        if iterations == 0 || iterations > ncols {
            return Err(RustyPursuitError::InvalidIterationCount { iterations, ncols });
        }
        if !(0.0..1.0).contains(&rcond) {
            return Err(RustyPursuitError::InvalidTolerance(rcond));
        }

        let mut residue = signal.to_owned();
        let mut working = dictionary.to_owned();
        let mut selected = Array2::<Self>::zeros((nrows, iterations));
        let mut is_selected = vec![false; ncols];
        let mut indices = Vec::<usize>::with_capacity(iterations);
        let mut coefficients = Array1::<Self>::zeros(0);
        let mut residual_norms = Vec::with_capacity(iterations);

        for iteration in 0..iterations {
            let projections = working.conj_matvec(residue.view());

            let index = select_basis(projections.view(), &is_selected)
                .ok_or(RustyPursuitError::InvalidIterationCount { iterations, ncols })?;

            selected
                .column_mut(iteration)
                .assign(&dictionary.column(index));
            working.column_mut(index).fill(num::zero());
            is_selected[index] = true;
            indices.push(index);

            let support = selected.slice(s![.., ..=iteration]);
            coefficients = Self::pinv_with_rcond(support, rcond)?.dot(&signal);
            residue = &signal - &support.matvec(coefficients.view());

            let residual_norm = residue.norm_l2();
            log::debug!(
                "OMP iteration {}: selected column {} with projection {}, residual norm {}",
                iteration,
                index,
                projections[index].abs(),
                residual_norm
            );
            residual_norms.push(residual_norm);
        }

        debug_assert!(indices.iter().all_unique());

        let approximation = selected.matvec(coefficients.view());

        Ok(SparseApproximation {
            approximation,
            indices,
            coefficients,
            residue,
            residual_norms,
        })
    }
}

impl OrthogonalMatchingPursuit for f32 {}
impl OrthogonalMatchingPursuit for f64 {}
impl OrthogonalMatchingPursuit for ndarray_linalg::c32 {}
impl OrthogonalMatchingPursuit for ndarray_linalg::c64 {}

/// Index of the largest projection modulus among the columns not yet selected.
///
/// The first index attaining the maximum wins. Returns `None` if every column
/// has already been selected.
fn select_basis<A: Scalar>(projections: ArrayView1<A>, is_selected: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, A::Real)> = None;

    for (index, (&projection, &taken)) in projections.iter().zip(is_selected).enumerate() {
        if taken {
            continue;
        }
        let magnitude = projection.abs();
        match best {
            Some((_, current)) if magnitude <= current => (),
            _ => best = Some((index, magnitude)),
        }
    }

    best.map(|(index, _)| index)
}
