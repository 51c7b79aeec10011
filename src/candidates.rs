//! Pruning of the working candidate list.
//!
//! Four independent passes, each dropping words that fail one predicate. The
//! pass order only affects how much work the later passes see, not the
//! result.

use crate::WORD_LENGTH;
use crate::constraints::ConstraintState;

/// Remove every candidate inconsistent with the current constraints. The
/// list only ever shrinks.
pub fn prune(candidates: &mut Vec<String>, constraints: &ConstraintState) {
    drop_excluded_letters(candidates, constraints.must_exclude());
    drop_missing_letters(candidates, constraints.must_include());
    drop_forbidden_positions(candidates, constraints.forbidden_positions());
    drop_fixed_mismatches(candidates, constraints.fixed_positions());
}

/// Exclusion pass: no word may contain a letter known absent.
fn drop_excluded_letters(candidates: &mut Vec<String>, excluded: &[u8]) {
    candidates.retain(|word| !excluded.iter().any(|letter| word.as_bytes().contains(letter)));
}

/// Inclusion pass: every word must contain all letters known present.
fn drop_missing_letters(candidates: &mut Vec<String>, included: &[u8]) {
    candidates.retain(|word| included.iter().all(|letter| word.as_bytes().contains(letter)));
}

/// Forbidden-position pass: a present letter cannot sit where it already
/// scored yellow.
fn drop_forbidden_positions(candidates: &mut Vec<String>, forbidden: &[(usize, u8)]) {
    candidates.retain(|word| {
        !forbidden
            .iter()
            .any(|&(position, letter)| word.as_bytes()[position] == letter)
    });
}

/// Fixed-position pass: every confirmed position must match.
fn drop_fixed_mismatches(candidates: &mut Vec<String>, fixed: &[Option<u8>; WORD_LENGTH]) {
    candidates.retain(|word| {
        fixed.iter().enumerate().all(|(position, slot)| match slot {
            Some(letter) => word.as_bytes()[position] == *letter,
            None => true,
        })
    });
}
