//! Parity-check matrix construction for single-error-correcting codes.
//!
//! Each codeword position carries an r-bit column of H. Information positions
//! hold the binary representations of the numbers 1..=n that are not powers of
//! two (the A block), check positions hold the unit columns (the identity
//! block). Because every column is distinct and non-zero, the syndrome of a
//! single-bit error equals exactly one column and so names the error position.
//!
//! Two layouts are supported:
//!
//! - [`ColumnLayout::Systematic`]: H = [A | E]; codewords are the information
//!   bits followed by the check bits and G = [E_k | Aᵀ]
//! - [`ColumnLayout::Interleaved`]: column j of H is the binary form of j, so
//!   check bits sit at the power-of-two positions and the syndrome read as a
//!   number is the 1-indexed error position

use super::params::CodeParameters;
use crate::error::{Error, Result};
use crate::gf2::{BitMatrix, BitVector};
use log::debug;
use serde::{Deserialize, Serialize};

/// Order of the columns of the parity-check matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLayout {
    /// A block first, identity block last
    #[default]
    Systematic,
    /// Column j is the binary form of j
    Interleaved,
}

/// A parity-check code: H, G and the position bookkeeping that links them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixGenerator {
    params: CodeParameters,
    layout: ColumnLayout,
    /// r × n parity-check matrix
    parity_check: BitMatrix,
    /// n × r transpose of H, used for syndromes
    parity_check_t: BitMatrix,
    /// k × n generator matrix
    generator: BitMatrix,
    /// 0-indexed codeword positions carrying information bits, in order
    info_positions: Vec<usize>,
    /// 0-indexed codeword positions carrying check bits, in row order of the identity block
    check_positions: Vec<usize>,
}

impl MatrixGenerator {
    /// Builds H and G for the resolved parameters
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the parameters do not admit exactly
    /// k non-power-of-two columns below 2^r
    pub fn new(params: &CodeParameters, layout: ColumnLayout) -> Result<Self> {
        let (k, r, n) = (params.k(), params.r(), params.n());
        if r == 0 || r >= usize::BITS as usize || n >= 1 << r {
            return Err(Error::invalid(format!(
                "{} check bits cannot label {} positions",
                r, n
            )));
        }

        let info_values: Vec<usize> = (1..=n).filter(|j| !j.is_power_of_two()).collect();
        if info_values.len() != k {
            return Err(Error::invalid(format!(
                "n = {} leaves {} information columns, expected k = {}",
                n,
                info_values.len(),
                k
            )));
        }

        // Column value of every position, plus which positions carry information
        let (values, info_positions, check_positions): (Vec<usize>, Vec<usize>, Vec<usize>) =
            match layout {
                ColumnLayout::Systematic => {
                    let mut values = info_values;
                    values.extend((0..r).map(|row| 1 << (r - 1 - row)));
                    (values, (0..k).collect(), (k..n).collect())
                }
                ColumnLayout::Interleaved => {
                    let values: Vec<usize> = (1..=n).collect();
                    let info = (0..n).filter(|&p| !values[p].is_power_of_two()).collect();
                    // Identity row m has its 1 at the bit of weight 2^(r-1-m)
                    let check = (0..r).map(|m| (1 << (r - 1 - m)) - 1).collect();
                    (values, info, check)
                }
            };

        let columns: Vec<BitVector> = values
            .iter()
            .map(|&value| BitVector::from_u64(value as u64, r))
            .collect();
        let parity_check = BitMatrix::from_columns(&columns)?;

        // G row i: a 1 at the i-th information position and that position's
        // H column spread over the check positions, so G · Hᵀ = 0
        let mut generator = BitMatrix::zeros(k, n);
        for (i, &p) in info_positions.iter().enumerate() {
            generator.set(i, p, true);
            for (m, &q) in check_positions.iter().enumerate() {
                generator.set(i, q, parity_check.get(m, p));
            }
        }

        debug!(
            "built {:?} parity-check code: n = {}, k = {}, r = {}",
            layout, n, k, r
        );

        Ok(MatrixGenerator {
            params: *params,
            layout,
            parity_check_t: parity_check.transpose(),
            parity_check,
            generator,
            info_positions,
            check_positions,
        })
    }

    /// Resolved parameters
    pub fn parameters(&self) -> &CodeParameters {
        &self.params
    }

    /// Column layout
    pub fn layout(&self) -> ColumnLayout {
        self.layout
    }

    /// The r × n parity-check matrix H
    pub fn parity_check_matrix(&self) -> &BitMatrix {
        &self.parity_check
    }

    /// The k × n generator matrix G
    pub fn generator_matrix(&self) -> &BitMatrix {
        &self.generator
    }

    /// 0-indexed positions of the information bits
    pub fn information_positions(&self) -> &[usize] {
        &self.info_positions
    }

    /// 0-indexed positions of the check bits
    pub fn check_positions(&self) -> &[usize] {
        &self.check_positions
    }

    /// Syndrome β · Hᵀ of a received word
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the word is not n bits long
    pub fn syndrome(&self, received: &BitVector) -> Result<BitVector> {
        self.parity_check_t.vector_mul(received)
    }

    /// 0-indexed position whose H column equals `syndrome`
    pub fn column_position(&self, syndrome: &BitVector) -> Option<usize> {
        (0..self.parity_check.col_count()).find(|&c| self.parity_check.column(c) == *syndrome)
    }

    /// Whether G · Hᵀ is the zero matrix
    pub fn is_orthogonal(&self) -> bool {
        self.generator
            .mul(&self.parity_check_t)
            .map(|product| product.is_zero())
            .unwrap_or(false)
    }
}
