//! Moore-Penrose pseudo-inverse computed from a thin SVD.
//!
//! Let $A = U\Sigma V^H$ be the thin SVD of $A\in\mathbb{C}^{m\times n}$ with singular values
//! $\sigma_1\geq\sigma_2\geq\dots\geq\sigma_k$, $k=\min(m, n)$. The pseudo-inverse is
//! $A^+ = V\Sigma^+U^H$, where $\Sigma^+$ inverts every $\sigma_i > \text{rcond}\cdot\sigma_1$
//! and sets the remaining entries to zero. $A^+$ is defined for any shape and rank, and
//! $x = A^+b$ is the minimum norm solution of $\min_x \|Ax - b\|_2$.

use crate::types::{Result, RustyPursuitError, Scalar};
use num::Float;
use ndarray::{Array2, ArrayView2, Axis, Zip};
use ndarray_linalg::{JobSvd, Lapack, SVDDCInto};

/// Default relative cutoff for small singular values.
pub const DEFAULT_RCOND: f64 = 1E-15;

pub trait PseudoInverse
where
    Self: Scalar + Lapack,
{
    /// Compute the pseudo-inverse with the default cutoff `DEFAULT_RCOND`.
    fn pinv(arr: ArrayView2<Self>) -> Result<Array2<Self>> {
        Self::pinv_with_rcond(arr, DEFAULT_RCOND)
    }

    /// Compute the pseudo-inverse of an (m, n) matrix.
    ///
    /// Returns an (n, m) matrix. Singular values not larger than `rcond` times the
    /// largest singular value are treated as zero.
    ///
    /// # Arguments
    ///
    /// * `arr`: The matrix to invert.
    /// * `rcond`: Relative cutoff. Require `0 <= rcond < 1`.
    fn pinv_with_rcond(arr: ArrayView2<Self>, rcond: f64) -> Result<Array2<Self>> {
        if !(0.0..1.0).contains(&rcond) {
            return Err(RustyPursuitError::InvalidTolerance(rcond));
        }

        let (m, n) = arr.dim();
        if m == 0 || n == 0 {
            return Ok(Array2::<Self>::zeros((n, m)));
        }

        let (u, s, vt) = match arr.to_owned().svddc_into(JobSvd::Some)? {
            (Some(u), s, Some(vt)) => (u, s, vt),
            _ => return Err(RustyPursuitError::SVDError),
        };

        let sigma_max = s
            .iter()
            .fold(<Self::Real as num::Zero>::zero(), |acc, &item| acc.max(item));
        let cutoff = Self::real(rcond) * sigma_max;

        // Scale the rows of U^H by the inverted singular values.
        let mut u_h = u.t().map(|item| item.conj());
        Zip::from(u_h.axis_iter_mut(Axis(0)))
            .and(s.view())
            .for_each(|mut row, &sigma| {
                let scale = if sigma > cutoff {
                    Self::from_real(sigma.recip())
                } else {
                    num::zero()
                };
                row.map_inplace(|item| *item *= scale);
            });

        Ok(vt.t().map(|item| item.conj()).dot(&u_h))
    }
}

impl PseudoInverse for f32 {}
impl PseudoInverse for f64 {}
impl PseudoInverse for ndarray_linalg::c32 {}
impl PseudoInverse for ndarray_linalg::c64 {}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::random_matrix::RandomMatrix;
    use ndarray::array;
    use ndarray_linalg::OperationNorm;

    macro_rules! pinv_penrose_tests {

        ($($name:ident: $scalar:ty, $dim:expr, $tol:expr,)*) => {

            $(

        #[test]
        fn $name() {
            let m = $dim.0;
            let n = $dim.1;

            let mut rng = rand::thread_rng();
            let mat = <$scalar>::random_gaussian((m, n), &mut rng);

            let pinv = <$scalar>::pinv(mat.view()).unwrap();

            assert_eq!(pinv.dim(), (n, m));

            // First Penrose condition: A A^+ A = A
            let diff = mat.dot(&pinv).dot(&mat) - &mat;
            assert!(diff.opnorm_fro().unwrap() / mat.opnorm_fro().unwrap() < $tol);

            // Second Penrose condition: A^+ A A^+ = A^+
            let diff = pinv.dot(&mat).dot(&pinv) - &pinv;
            assert!(diff.opnorm_fro().unwrap() / pinv.opnorm_fro().unwrap() < $tol);

            // A A^+ is Hermitian.
            let proj = mat.dot(&pinv);
            let diff = proj.t().map(|item| item.conj()) - &proj;
            assert!(diff.opnorm_fro().unwrap() < $tol);
        }

            )*

        }
    }

    macro_rules! pinv_rank_deficient_tests {

        ($($name:ident: $scalar:ty, $dim:expr, $tol:expr,)*) => {

            $(

        #[test]
        fn $name() {
            let m = $dim.0;
            let n = $dim.1;

            let mut rng = rand::thread_rng();
            let mut mat = <$scalar>::random_gaussian((m, n), &mut rng);

            // Duplicate the first column to make the matrix rank deficient.
            let first = mat.column(0).to_owned();
            mat.column_mut(n - 1).assign(&first);

            let pinv = <$scalar>::pinv_with_rcond(mat.view(), 1E-5).unwrap();

            let diff = mat.dot(&pinv).dot(&mat) - &mat;
            assert!(diff.opnorm_fro().unwrap() / mat.opnorm_fro().unwrap() < $tol);
            assert!(pinv.iter().all(|item| item.is_finite()));
        }

            )*

        }
    }

    pinv_penrose_tests! {
        test_pinv_penrose_f32_thin: f32, (40, 10), 1E-4,
        test_pinv_penrose_c32_thin: ndarray_linalg::c32, (40, 10), 1E-4,
        test_pinv_penrose_f64_thin: f64, (40, 10), 1E-10,
        test_pinv_penrose_c64_thin: ndarray_linalg::c64, (40, 10), 1E-10,
        test_pinv_penrose_f32_thick: f32, (10, 40), 1E-4,
        test_pinv_penrose_c32_thick: ndarray_linalg::c32, (10, 40), 1E-4,
        test_pinv_penrose_f64_thick: f64, (10, 40), 1E-10,
        test_pinv_penrose_c64_thick: ndarray_linalg::c64, (10, 40), 1E-10,
    }

    pinv_rank_deficient_tests! {
        test_pinv_rank_deficient_f32: f32, (20, 8), 1E-4,
        test_pinv_rank_deficient_c32: ndarray_linalg::c32, (20, 8), 1E-4,
        test_pinv_rank_deficient_f64: f64, (20, 8), 1E-10,
        test_pinv_rank_deficient_c64: ndarray_linalg::c64, (20, 8), 1E-10,
    }

    #[test]
    fn test_pinv_of_single_column_is_scaled_transpose() {
        let col = array![[3.0_f64], [4.0]];

        let pinv = f64::pinv(col.view()).unwrap();

        assert_eq!(pinv.dim(), (1, 2));
        assert!((pinv[[0, 0]] - 3.0 / 25.0).abs() < 1E-14);
        assert!((pinv[[0, 1]] - 4.0 / 25.0).abs() < 1E-14);
    }

    #[test]
    fn test_pinv_of_zero_matrix_is_zero() {
        let mat = Array2::<f64>::zeros((3, 2));

        let pinv = f64::pinv(mat.view()).unwrap();

        assert_eq!(pinv, Array2::<f64>::zeros((2, 3)));
    }

    #[test]
    fn test_pinv_of_empty_matrix() {
        let mat = Array2::<f32>::zeros((3, 0));

        let pinv = f32::pinv(mat.view()).unwrap();

        assert_eq!(pinv.dim(), (0, 3));
    }

    #[test]
    fn test_pinv_rejects_invalid_rcond() {
        let mat = array![[1.0_f64, 0.0], [0.0, 1.0]];

        assert!(matches!(
            f64::pinv_with_rcond(mat.view(), 1.5),
            Err(RustyPursuitError::InvalidTolerance(_))
        ));
        assert!(matches!(
            f64::pinv_with_rcond(mat.view(), -1.0),
            Err(RustyPursuitError::InvalidTolerance(_))
        ));
    }
}
