//! Channel simulation: flipping chosen or random codeword bits.

use super::encoder::Codeword;
use crate::error::{Error, Result};
use crate::gf2::BitVector;
use rand::seq::index;
use rand::Rng;
use std::collections::HashSet;

/// Flips the bits at the given 0-indexed positions
///
/// # Arguments
///
/// * `codeword` - Word to corrupt
/// * `positions` - Distinct positions in `0..n`
///
/// # Returns
///
/// The received word β′ = β ⊕ e
///
/// # Errors
///
/// - [`Error::InvalidPosition`] if a position is not below n
/// - [`Error::DuplicatePosition`] if a position is listed twice
pub fn inject_errors(codeword: &Codeword, positions: &[usize]) -> Result<BitVector> {
    let length = codeword.len();
    let mut seen = HashSet::with_capacity(positions.len());
    let mut received = codeword.bits().clone();

    for &position in positions {
        if position >= length {
            return Err(Error::InvalidPosition { position, length });
        }
        if !seen.insert(position) {
            return Err(Error::DuplicatePosition(position));
        }
        received.flip(position);
    }

    Ok(received)
}

/// Like [`inject_errors`], but refuses more than `t` positions
///
/// # Errors
///
/// Returns [`Error::ExceedsCapability`] if `positions` is longer than `t`,
/// otherwise the errors of [`inject_errors`]
pub fn inject_errors_within(
    codeword: &Codeword,
    positions: &[usize],
    t: usize,
) -> Result<BitVector> {
    if positions.len() > t {
        return Err(Error::ExceedsCapability {
            errors: positions.len(),
            capability: t,
        });
    }
    inject_errors(codeword, positions)
}

/// Flips `count` distinct positions chosen uniformly at random
///
/// # Returns
///
/// The received word and the flipped positions in ascending order
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `count` exceeds the codeword length
pub fn inject_random_errors<R: Rng + ?Sized>(
    codeword: &Codeword,
    count: usize,
    rng: &mut R,
) -> Result<(BitVector, Vec<usize>)> {
    let length = codeword.len();
    if count > length {
        return Err(Error::invalid(format!(
            "Cannot flip {} distinct bits of a {}-bit word",
            count, length
        )));
    }

    let mut positions = index::sample(rng, length, count).into_vec();
    positions.sort_unstable();
    let received = inject_errors(codeword, &positions)?;
    Ok((received, positions))
}

/// Checks a hand-supplied received word against the codeword it came from
///
/// # Returns
///
/// The number of differing positions
///
/// # Errors
///
/// - [`Error::LengthMismatch`] if the lengths differ
/// - [`Error::ExceedsCapability`] if more than `t` positions differ
pub fn check_received(codeword: &Codeword, received: &BitVector, t: usize) -> Result<usize> {
    if received.len() != codeword.len() {
        return Err(Error::LengthMismatch {
            expected: codeword.len(),
            actual: received.len(),
        });
    }

    let errors = codeword
        .bits()
        .iter()
        .zip(received.iter())
        .filter(|(a, b)| a != b)
        .count();
    if errors > t {
        return Err(Error::ExceedsCapability {
            errors,
            capability: t,
        });
    }
    Ok(errors)
}
