//! Position rules for a user's bookmark set.
//!
//! Positions are 0-based display ranks. After a reindex the caller's rows hold
//! exactly `0..n-1`; appends take `max + 1`.

use std::collections::HashSet;

use crate::ValidationError;

/// Position for a bookmark appended after the current maximum.
#[must_use]
pub fn next_position(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |max| max.saturating_add(1))
}

/// Reject a submitted order that could not describe a permutation.
///
/// There is no length cap: a full permutation of any bookmark set is valid.
///
/// # Errors
/// `DuplicateId` for a repeated id.
pub fn validate_order(ids: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(ids.len());
    for id in ids {
        if !seen.insert(id.as_str()) {
            return Err(ValidationError::DuplicateId(id.clone()));
        }
    }
    Ok(())
}

/// Compute the new position of every row the caller owns.
///
/// `current` is the caller's ids in current display order; `submitted` is the
/// client's desired order. Submitted ids the caller does not own are ignored.
/// Owned ids missing from the submission follow the submitted ones, keeping
/// their previous relative order. For a full permutation of `current` the
/// result is `submitted[i] -> i`.
#[must_use]
pub fn plan_reindex(current: &[String], submitted: &[String]) -> Vec<(String, i32)> {
    let owned: HashSet<&str> = current.iter().map(String::as_str).collect();
    let mut placed: HashSet<&str> = HashSet::with_capacity(current.len());
    let mut order: Vec<&str> = Vec::with_capacity(current.len());

    for id in submitted {
        if owned.contains(id.as_str()) && placed.insert(id.as_str()) {
            order.push(id);
        }
    }
    for id in current {
        if placed.insert(id.as_str()) {
            order.push(id);
        }
    }

    order
        .into_iter()
        .zip(0_i32..)
        .map(|(id, position)| (id.to_owned(), position))
        .collect()
}
