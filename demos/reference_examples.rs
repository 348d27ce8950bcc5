//! Run Orthogonal Matching Pursuit on two small textbook problems.
//!
//! Both problems are taken from K. Usman, "Introduction to Orthogonal Matching Pursuit", 2017.

use ndarray::{array, Array1, Array2};
use rusty_pursuit::prelude::*;

fn run(name: &str, dictionary: Array2<f32>, signal: Array1<f32>, iterations: usize) -> Result<()> {
    let (approximation, indices, coefficients, residue) =
        f32::omp(dictionary.view(), signal.view(), iterations)?.into_parts();

    println!("{}", name);
    println!("Sa\n {}", approximation);
    println!("SIndices\n {:?}", indices);
    println!("alpha\n {}", coefficients);
    println!("r\n {}\n", residue.sum());

    Ok(())
}

pub fn main() -> Result<()> {
    let iterations = 2;

    run(
        "Example 1",
        array![[-0.707, 0.8, 0.0], [0.707, 0.6, -1.0]],
        array![1.65, -0.25],
        iterations,
    )?;

    run(
        "Example 2",
        array![
            [-0.9428, 0.268, 0.9535, 0.4082],
            [-0.2357, 0.3578, -0.286, -0.4082],
            [0.2357, 0.894, -0.0953, -0.8165]
        ],
        array![2.7, 0.1, 4.5],
        iterations,
    )?;

    Ok(())
}
