//! Generation of random dictionaries and sparse test signals for various types

use ndarray::{Array1, Array2, ArrayView2, Axis};
use ndarray_linalg::{JobSvd, Lapack, Norm, SVDDCInto, Scalar};
use num::complex::Complex;
use num::traits::cast::cast;
use num::Float;
use rand::Rng;
use rand_distr::{Distribution, Normal};

pub trait RandomMatrix
where
    Self: Scalar + Lapack,
{
    /// Generate a random Gaussian matrix.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self>;

    /// Generate a random matrix with orthonormal columns.
    ///
    /// This function creates a normally distributed (m, n) random matrix
    /// and returns the left singular vectors of it. Requires m >= n.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the number of rows and columns.
    /// * `rng`: The random number generator to use.
    fn random_orthogonal_matrix<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Self> {
        assert!(
            dimension.0 >= dimension.1,
            "Matrix must have at least as many rows as columns."
        );

        let mat = Self::random_gaussian(dimension, rng);

        let (u, _, _) = mat
            .svddc_into(JobSvd::Some)
            .expect("`random_orthogonal_matrix`: SVD computation failed.");
        u.expect("`random_orthogonal_matrix`: SVD returned no left singular vectors.")
    }

    /// Generate a random dictionary whose columns have unit l2 norm.
    ///
    /// # Arguments
    ///
    /// * `dimension`: Tuple (rows, cols) specifying the signal dimension and the number of bases.
    /// * `rng`: The random number generator to use.
    fn random_normalized_dictionary<R: Rng>(
        dimension: (usize, usize),
        rng: &mut R,
    ) -> Array2<Self> {
        let mut mat = Self::random_gaussian(dimension, rng);

        for mut col in mat.axis_iter_mut(Axis(1)) {
            let norm = Self::from_real(col.norm_l2());
            col.map_inplace(|item| *item /= norm);
        }

        mat
    }

    /// Synthesize a signal from `sparsity` randomly chosen columns of a dictionary.
    ///
    /// The coefficients have modulus between one and roughly four so that no selected
    /// column is negligible. Returns the signal, the support in increasing order and
    /// the coefficients belonging to the support.
    ///
    /// # Arguments
    ///
    /// * `dictionary`: The (m, n) dictionary.
    /// * `sparsity`: Number of columns used. Require `sparsity <= n`.
    /// * `rng`: The random number generator to use.
    fn random_sparse_signal<R: Rng>(
        dictionary: ArrayView2<Self>,
        sparsity: usize,
        rng: &mut R,
    ) -> (Array1<Self>, Vec<usize>, Array1<Self>) {
        assert!(
            sparsity <= dictionary.ncols(),
            "`sparsity` must not exceed the number of dictionary columns."
        );

        let mut support = rand::seq::index::sample(rng, dictionary.ncols(), sparsity).into_vec();
        support.sort_unstable();

        let mut coefficients = Self::random_gaussian((sparsity, 1), rng)
            .index_axis_move(Axis(1), 0);
        coefficients.map_inplace(|item| {
            let modulus = item.abs();
            *item *= Self::from_real((modulus + Self::real(1.0)) / modulus);
        });

        let signal = dictionary.select(Axis(1), &support).dot(&coefficients);

        (signal, support, coefficients)
    }
}

impl RandomMatrix for f64 {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<f64> {
        random_gaussian_real::<f64, R>(dimension, rng)
    }
}

impl RandomMatrix for f32 {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<f32> {
        random_gaussian_real::<f32, R>(dimension, rng)
    }
}

impl RandomMatrix for Complex<f64> {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Complex<f64>> {
        random_gaussian_complex::<f64, R>(dimension, rng)
    }
}

impl RandomMatrix for Complex<f32> {
    fn random_gaussian<R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<Complex<f32>> {
        random_gaussian_complex::<f32, R>(dimension, rng)
    }
}

fn random_gaussian_real<T: Float, R: Rng>(dimension: (usize, usize), rng: &mut R) -> Array2<T> {
    let mut mat = Array2::<T>::zeros(dimension);
    let normal = Normal::new(0.0, 1.0).unwrap();
    mat.map_inplace(|item| *item = cast::<f64, T>(normal.sample(rng)).unwrap());
    mat
}

fn random_gaussian_complex<T: Float, R: Rng>(
    dimension: (usize, usize),
    rng: &mut R,
) -> Array2<Complex<T>> {
    let mut mat = Array2::<Complex<T>>::zeros(dimension);
    let normal = Normal::new(0.0, 1.0).unwrap();
    mat.map_inplace(|item| {
        let re = cast::<f64, T>(normal.sample(rng)).unwrap();
        let im = cast::<f64, T>(normal.sample(rng)).unwrap();
        *item = Complex::new(re, im);
    });
    mat
}
