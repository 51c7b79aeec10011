//! Expected-information scoring for guess selection.
//!
//! A guess is worth as much as the surprise in the feedback it draws. For
//! each pool word we histogram the feedback codes it would receive across
//! the remaining candidates and take the Shannon entropy of that
//! distribution; the next guess is the pool word with the most bits.

use std::collections::HashMap;

use rayon::prelude::*;

use crate::feedback::FeedbackCode;

/// Pools larger than this are scored in parallel. Each worker reduces its
/// share of the pool to a local best; the locals merge after the join.
pub const PARALLEL_CUTOFF: usize = 1000;

/// Shannon entropy, in bits, of the feedback distribution `guess` induces
/// over `candidates`.
pub fn entropy_bits(guess: &str, candidates: &[String]) -> f64 {
    let mut histogram: HashMap<FeedbackCode, usize> = HashMap::new();
    for solution in candidates {
        *histogram
            .entry(FeedbackCode::score(guess, solution))
            .or_insert(0) += 1;
    }

    let total = candidates.len() as f64;
    histogram
        .values()
        .map(|&count| {
            let probability = count as f64 / total;
            -probability * probability.log2()
        })
        .sum()
}

/// The pool word with the highest expected information against `candidates`,
/// together with its score. Ties go to the earlier pool position, so results
/// stay stable across runs and thread counts. `None` when either list is
/// empty.
pub fn best_guess<'a>(pool: &'a [String], candidates: &[String]) -> Option<(&'a str, f64)> {
    if candidates.is_empty() {
        return None;
    }

    let best = if pool.len() > PARALLEL_CUTOFF {
        pool.par_iter()
            .enumerate()
            .map(|(index, word)| (index, entropy_bits(word, candidates)))
            .reduce_with(prefer_higher)
    } else {
        pool.iter()
            .enumerate()
            .map(|(index, word)| (index, entropy_bits(word, candidates)))
            .reduce(prefer_higher)
    };

    best.map(|(index, bits)| (pool[index].as_str(), bits))
}

/// Keep the higher score; on equal scores keep the earlier pool position.
fn prefer_higher(a: (usize, f64), b: (usize, f64)) -> (usize, f64) {
    if b.1 > a.1 || (b.1 == a.1 && b.0 < a.0) { b } else { a }
}
