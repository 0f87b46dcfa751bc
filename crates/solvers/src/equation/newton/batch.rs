use rayon::prelude::*;

use tangent_core::Function;

use super::{Config, Error, Solution, solve_unobserved};

/// Runs independent Newton solves from each initial guess in parallel.
///
/// Each run owns its own trace; results come back in the order of `guesses`.
/// A non-finite guess only fails its own slot.
pub fn solve_batch<F, D>(
    f: &F,
    f_prime: &D,
    guesses: &[f64],
    config: &Config,
) -> Vec<Result<Solution, Error>>
where
    F: Function + Sync,
    D: Function + Sync,
{
    guesses
        .par_iter()
        .map(|&x0| solve_unobserved(f, f_prime, x0, config))
        .collect()
}
