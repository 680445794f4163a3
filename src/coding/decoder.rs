//! Syndrome decoding.
//!
//! Parity-check codes look the syndrome up among the columns of H and flip
//! the matching position. Cyclic and BCH codes use the Meggitt search: the
//! received word is rotated left one position at a time until its syndrome
//! has weight at most t, at which point the syndrome itself is the error
//! pattern of the rotated word. XOR-ing it away and rotating back yields the
//! corrected word.
//!
//! The Meggitt search corrects every pattern of at most t errors that fits in
//! a cyclic window of r positions. With more than t errors it may stop at a
//! wrong codeword and still report [`DecodeStatus::Corrected`]; callers that
//! know the transmitted word can check with [`DecodeResult::verify_against`].

use super::encoder::{extract_information, Codeword};
use super::generator::{Generator, GeneratorPolynomial};
use super::parity::MatrixGenerator;
use crate::error::{Error, Result};
use crate::gf2::{poly, BitVector};
use log::{debug, trace};

/// Outcome of decoding a received word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeStatus {
    /// The syndrome was zero; the word is returned unchanged
    NoError,
    /// A correction was applied
    Corrected,
    /// No rotation brought the syndrome weight down to t; the word is returned unchanged
    Uncorrectable,
    /// The syndrome matches no column of H; the word is returned unchanged
    UndeterminedError,
}

/// Whether a decoded word equals the transmitted one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// Decoded word and codeword agree
    Matches,
    /// Decoded word differs at these 0-indexed positions
    Mismatch { differing: Vec<usize> },
}

/// Decoded word plus the bookkeeping of how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeResult {
    corrected: BitVector,
    status: DecodeStatus,
    syndrome: BitVector,
    shifts: usize,
    error_positions: Vec<usize>,
}

impl DecodeResult {
    /// The decoded word
    pub fn corrected(&self) -> &BitVector {
        &self.corrected
    }

    /// Unwraps the decoded word
    pub fn into_corrected(self) -> BitVector {
        self.corrected
    }

    /// Decoding outcome
    pub fn status(&self) -> DecodeStatus {
        self.status
    }

    /// Syndrome of the received word before any rotation
    pub fn syndrome(&self) -> &BitVector {
        &self.syndrome
    }

    /// Left rotations performed by the Meggitt search; 0 for matrix codes
    pub fn shifts(&self) -> usize {
        self.shifts
    }

    /// 0-indexed positions flipped by the correction, ascending
    pub fn error_positions(&self) -> &[usize] {
        &self.error_positions
    }

    /// Information bits of the decoded word
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if `generator` belongs to a different code length
    pub fn information(&self, generator: &Generator) -> Result<BitVector> {
        extract_information(&self.corrected, generator)
    }

    /// Compares the decoded word with the transmitted codeword
    pub fn verify_against(&self, original: &Codeword) -> Verification {
        let differing = differing_positions(&self.corrected, original.bits());
        if differing.is_empty() {
            Verification::Matches
        } else {
            Verification::Mismatch { differing }
        }
    }
}

fn differing_positions(a: &BitVector, b: &BitVector) -> Vec<usize> {
    a.iter()
        .zip(b.iter())
        .enumerate()
        .filter_map(|(i, (x, y))| (x != y).then_some(i))
        .collect()
}

/// Decodes a received word
///
/// # Arguments
///
/// * `received` - Word of length n, possibly corrupted
/// * `generator` - Generator of the code the word belongs to
/// * `t` - Meggitt weight threshold; parity-check codes always correct one error and ignore it
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the word is not n bits long. Failure
/// to correct is reported through [`DecodeStatus`], not as an error.
pub fn decode(received: &BitVector, generator: &Generator, t: usize) -> Result<DecodeResult> {
    let n = generator.parameters().n();
    if received.len() != n {
        return Err(Error::LengthMismatch {
            expected: n,
            actual: received.len(),
        });
    }

    let syndrome = generator.syndrome(received)?;
    if syndrome.is_zero() {
        debug!("syndrome is zero, no error");
        return Ok(DecodeResult {
            corrected: received.clone(),
            status: DecodeStatus::NoError,
            syndrome,
            shifts: 0,
            error_positions: Vec::new(),
        });
    }

    let result = match generator {
        Generator::Matrix(matrix) => decode_matrix(received, matrix, syndrome),
        Generator::Polynomial(g) => decode_meggitt(received, g, syndrome, t)?,
    };
    debug!(
        "decoded with status {:?}, syndrome {}, flipped {:?}",
        result.status, result.syndrome, result.error_positions
    );
    Ok(result)
}

fn decode_matrix(
    received: &BitVector,
    matrix: &MatrixGenerator,
    syndrome: BitVector,
) -> DecodeResult {
    match matrix.column_position(&syndrome) {
        Some(position) => {
            let mut corrected = received.clone();
            corrected.flip(position);
            DecodeResult {
                corrected,
                status: DecodeStatus::Corrected,
                syndrome,
                shifts: 0,
                error_positions: vec![position],
            }
        }
        None => DecodeResult {
            corrected: received.clone(),
            status: DecodeStatus::UndeterminedError,
            syndrome,
            shifts: 0,
            error_positions: Vec::new(),
        },
    }
}

fn decode_meggitt(
    received: &BitVector,
    g: &GeneratorPolynomial,
    syndrome: BitVector,
    t: usize,
) -> Result<DecodeResult> {
    let n = received.len();
    for shift in 0..n {
        let rotated = poly::rotate_left(received, shift);
        let current = if shift == 0 {
            syndrome.clone()
        } else {
            g.syndrome(&rotated)?
        };
        trace!("shift {}: syndrome {} (weight {})", shift, current, current.weight());

        if current.weight() <= t {
            let fixed = poly::xor_add(&rotated, &current);
            let corrected = poly::rotate_right(&fixed, shift);
            let error_positions = differing_positions(received, &corrected);
            return Ok(DecodeResult {
                corrected,
                status: DecodeStatus::Corrected,
                syndrome,
                shifts: shift,
                error_positions,
            });
        }
    }

    Ok(DecodeResult {
        corrected: received.clone(),
        status: DecodeStatus::Uncorrectable,
        syndrome,
        shifts: n,
        error_positions: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::encoder::encode;
    use crate::coding::generator::select_generator;
    use crate::coding::inject::inject_errors;
    use crate::coding::params::resolve_parameters;

    fn bits(text: &str) -> BitVector {
        BitVector::parse(text).unwrap()
    }

    #[test]
    fn test_no_error() {
        let generator = select_generator(&resolve_parameters(4, None).unwrap()).unwrap();
        let beta = encode(&bits("1011"), &generator).unwrap();
        let result = decode(beta.bits(), &generator, 1).unwrap();
        assert_eq!(result.status(), DecodeStatus::NoError);
        assert_eq!(result.corrected(), beta.bits());
        assert!(result.error_positions().is_empty());
        assert_eq!(result.verify_against(&beta), Verification::Matches);
    }

    #[test]
    fn test_matrix_single_error() {
        let generator = select_generator(&resolve_parameters(4, None).unwrap()).unwrap();
        let beta = encode(&bits("1011"), &generator).unwrap();
        let received = inject_errors(&beta, &[2]).unwrap();
        let result = decode(&received, &generator, 1).unwrap();
        assert_eq!(result.status(), DecodeStatus::Corrected);
        assert_eq!(result.error_positions(), &[2]);
        assert_eq!(result.corrected(), beta.bits());
        assert_eq!(result.information(&generator).unwrap(), bits("1011"));
    }

    #[test]
    fn test_matrix_undetermined_error() {
        // Columns 3 and 9 sum to 10, which is not a column of the (9, 5) code
        let generator = select_generator(&resolve_parameters(5, None).unwrap()).unwrap();
        let beta = encode(&bits("11001"), &generator).unwrap();
        let received = inject_errors(&beta, &[0, 4]).unwrap();
        let result = decode(&received, &generator, 1).unwrap();
        assert_eq!(result.status(), DecodeStatus::UndeterminedError);
        assert_eq!(result.syndrome().to_string(), "1010");
        assert_eq!(result.corrected(), &received);
        assert_eq!(
            result.verify_against(&beta),
            Verification::Mismatch {
                differing: vec![0, 4]
            }
        );
    }

    #[test]
    fn test_meggitt_single_error() {
        let generator = select_generator(&resolve_parameters(4, Some(1)).unwrap()).unwrap();
        let beta = encode(&bits("1011"), &generator).unwrap();
        let received = inject_errors(&beta, &[0]).unwrap();
        let result = decode(&received, &generator, 1).unwrap();
        assert_eq!(result.status(), DecodeStatus::Corrected);
        assert_eq!(result.shifts(), 1);
        assert_eq!(result.error_positions(), &[0]);
        assert_eq!(result.corrected(), beta.bits());
    }

    #[test]
    fn test_meggitt_every_single_error() {
        let generator = select_generator(&resolve_parameters(4, Some(1)).unwrap()).unwrap();
        let beta = encode(&bits("0110"), &generator).unwrap();
        for p in 0..7 {
            let received = inject_errors(&beta, &[p]).unwrap();
            let result = decode(&received, &generator, 1).unwrap();
            assert_eq!(result.status(), DecodeStatus::Corrected, "p = {}", p);
            assert_eq!(result.corrected(), beta.bits(), "p = {}", p);
        }
    }

    #[test]
    fn test_meggitt_double_error() {
        let generator = select_generator(&resolve_parameters(7, Some(2)).unwrap()).unwrap();
        let beta = encode(&bits("1100101"), &generator).unwrap();
        let received = inject_errors(&beta, &[1, 12]).unwrap();
        let result = decode(&received, &generator, 2).unwrap();
        assert_eq!(result.status(), DecodeStatus::Corrected);
        assert_eq!(result.error_positions(), &[1, 12]);
        assert_eq!(result.information(&generator).unwrap(), bits("1100101"));
    }

    #[test]
    fn test_meggitt_uncorrectable() {
        // With a zero threshold no rotation of a non-codeword qualifies
        let generator = select_generator(&resolve_parameters(4, Some(1)).unwrap()).unwrap();
        let beta = encode(&bits("1011"), &generator).unwrap();
        let received = inject_errors(&beta, &[3]).unwrap();
        let result = decode(&received, &generator, 0).unwrap();
        assert_eq!(result.status(), DecodeStatus::Uncorrectable);
        assert_eq!(result.shifts(), 7);
        assert_eq!(result.corrected(), &received);
    }

    #[test]
    fn test_length_mismatch() {
        let generator = select_generator(&resolve_parameters(4, Some(1)).unwrap()).unwrap();
        assert_eq!(
            decode(&bits("101100"), &generator, 1),
            Err(Error::LengthMismatch {
                expected: 7,
                actual: 6
            })
        );
    }
}
