//! Systematic encoding.
//!
//! - Matrix form: β = α · G
//! - Polynomial form: β = α·x^r + (α·x^r mod g), the remainder filling the low r bits
//!
//! In both forms the information bits appear unchanged in the codeword, so
//! [`extract_information`] can read them back without any decoding.

use super::generator::Generator;
use super::params::CodeParameters;
use crate::error::{Error, Result};
use crate::gf2::{poly, BitVector};
use std::fmt::{Display, Formatter};

/// An encoded word of length n. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Codeword(BitVector);

impl Codeword {
    /// Borrows the codeword bits
    pub fn bits(&self) -> &BitVector {
        &self.0
    }

    /// Unwraps the codeword bits
    pub fn into_bits(self) -> BitVector {
        self.0
    }

    /// Codeword length n
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the codeword is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<BitVector> for Codeword {
    fn as_ref(&self) -> &BitVector {
        &self.0
    }
}

impl From<Codeword> for BitVector {
    fn from(codeword: Codeword) -> Self {
        codeword.0
    }
}

impl Display for Codeword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Checks the caller's word length and left-pads it to k
fn prepare_information(info: &BitVector, params: &CodeParameters) -> Result<BitVector> {
    if info.len() != params.info_len() {
        return Err(Error::LengthMismatch {
            expected: params.info_len(),
            actual: info.len(),
        });
    }
    Ok(info.left_pad(params.k()))
}

/// Encodes an information word
///
/// The word must be `info_len` bits long; BCH words shorter than the
/// tabulated k are left-padded with zeros first.
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the word has the wrong length
pub fn encode(info: &BitVector, generator: &Generator) -> Result<Codeword> {
    let params = generator.parameters();
    let alpha = prepare_information(info, params)?;

    let beta = match generator {
        Generator::Matrix(matrix) => matrix.generator_matrix().vector_mul(&alpha)?,
        Generator::Polynomial(g) => {
            let shifted = poly::multiply_by_x_pow_r(&alpha, params.r());
            let remainder = poly::mod_divide(&shifted, g.polynomial())?;
            poly::xor_add(&shifted, &remainder)
        }
    };

    Ok(Codeword(beta))
}

/// Reads the information bits back out of a codeword, dropping any table padding
///
/// # Errors
///
/// Returns [`Error::LengthMismatch`] if the word is not n bits long
pub fn extract_information(codeword: &BitVector, generator: &Generator) -> Result<BitVector> {
    let params = generator.parameters();
    if codeword.len() != params.n() {
        return Err(Error::LengthMismatch {
            expected: params.n(),
            actual: codeword.len(),
        });
    }

    let info: BitVector = match generator {
        Generator::Matrix(matrix) => matrix
            .information_positions()
            .iter()
            .map(|&p| codeword.bit(p))
            .collect(),
        Generator::Polynomial(_) => codeword.slice(0..params.k()),
    };
    Ok(info.slice(params.padding()..params.k()))
}
