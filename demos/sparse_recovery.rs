// Recover a sparse signal from a random dictionary and print the convergence of the residual.

use rusty_pursuit::prelude::*;

pub fn main() -> Result<()> {
    let m = 200;
    let n = 500;
    let sparsity = 10;

    let mut rng = rand::thread_rng();

    // A dictionary of normalized Gaussian columns is incoherent with high probability.
    let dictionary = f64::random_normalized_dictionary((m, n), &mut rng);

    // Build a signal from `sparsity` random columns.
    let (signal, support, _) = f64::random_sparse_signal(dictionary.view(), sparsity, &mut rng);

    let result = f64::omp(dictionary.view(), signal.view(), sparsity)?;

    for (iteration, norm) in result.residual_norms.iter().enumerate() {
        println!("Iteration {:2}: residual norm {:1.2E}", iteration, norm);
    }

    let mut found = result.indices.clone();
    found.sort_unstable();

    println!("Support recovered: {}", found == support);
    println!(
        "The relative difference of the approximation and the signal is {:1.2E}",
        f64::rel_diff_l2(result.approximation.view(), signal.view())
    );

    Ok(())
}
