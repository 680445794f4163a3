//! Fixed-length bit vectors.
//!
//! [`BitVector`] is the single data carrier of the crate: information words,
//! codewords, polynomials and syndromes are all bit vectors. Storage is a
//! `BitVec<u8, Msb0>`, so index 0 is the leftmost (most significant) bit.

use crate::error::{Error, Result};
use bitvec::prelude::*;
use std::fmt::{Debug, Display, Formatter};
use std::ops::Range;
use std::str::FromStr;

/// An ordered, fixed-length sequence of bits.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct BitVector {
    bits: BitVec<u8, Msb0>,
}

impl BitVector {
    /// Creates an all-zero vector of the given length
    pub fn zeros(len: usize) -> Self {
        BitVector {
            bits: bitvec![u8, Msb0; 0; len],
        }
    }

    /// Creates a vector of the given length with a single set bit
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `position >= len`
    pub fn unit(len: usize, position: usize) -> Result<Self> {
        if position >= len {
            return Err(Error::InvalidPosition {
                position,
                length: len,
            });
        }
        let mut unit = Self::zeros(len);
        unit.set(position, true);
        Ok(unit)
    }

    /// Parses a string of `'0'` and `'1'` characters
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] on the first character that is not a binary digit
    pub fn parse(text: &str) -> Result<Self> {
        text.chars()
            .enumerate()
            .map(|(i, c)| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(Error::invalid(format!(
                    "'{}' at position {} is not a binary digit",
                    other, i
                ))),
            })
            .collect()
    }

    /// Builds a vector from the low `width` bits of `value`, most significant first
    pub fn from_u64(value: u64, width: usize) -> Self {
        (0..width)
            .map(|i| {
                let shift = width - 1 - i;
                shift < 64 && (value >> shift) & 1 == 1
            })
            .collect()
    }

    /// Builds a vector from a slice of booleans
    pub fn from_bools(bits: &[bool]) -> Self {
        bits.iter().copied().collect()
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the vector holds no bits at all
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the bit at `index`, or `None` when out of range
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.get(index).map(|bit| *bit)
    }

    /// Returns the bit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range
    pub fn bit(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Sets the bit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits.set(index, value);
    }

    /// Inverts the bit at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range
    pub fn flip(&mut self, index: usize) {
        let value = self.bits[index];
        self.bits.set(index, !value);
    }

    /// Hamming weight: the number of set bits
    pub fn weight(&self) -> usize {
        self.bits.count_ones()
    }

    /// Whether no bit is set (true for the empty vector)
    pub fn is_zero(&self) -> bool {
        self.bits.not_any()
    }

    /// Index of the leftmost set bit
    pub fn first_one(&self) -> Option<usize> {
        self.bits.first_one()
    }

    /// Iterates over the bits from left to right
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().by_vals()
    }

    /// Iterates over the indices of set bits from left to right
    pub fn ones(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// Copies out a sub-range of bits
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds
    pub fn slice(&self, range: Range<usize>) -> Self {
        BitVector {
            bits: self.bits[range].to_bitvec(),
        }
    }

    /// Appends `other` after the bits of `self`
    pub fn concat(&self, other: &BitVector) -> Self {
        let mut bits = self.bits.clone();
        bits.extend_from_bitslice(&other.bits);
        BitVector { bits }
    }

    /// Left-pads with zeros up to `len` bits; longer vectors are returned unchanged
    pub fn left_pad(&self, len: usize) -> Self {
        if len <= self.len() {
            return self.clone();
        }
        Self::zeros(len - self.len()).concat(self)
    }

    /// Rotates left by `by` positions (taken modulo the length)
    pub fn rotated_left(&self, by: usize) -> Self {
        let mut rotated = self.clone();
        if !self.is_empty() {
            rotated.bits.rotate_left(by % self.len());
        }
        rotated
    }

    /// Rotates right by `by` positions (taken modulo the length)
    pub fn rotated_right(&self, by: usize) -> Self {
        let mut rotated = self.clone();
        if !self.is_empty() {
            rotated.bits.rotate_right(by % self.len());
        }
        rotated
    }

    /// Copies the bits into a `Vec<bool>`
    pub fn to_bools(&self) -> Vec<bool> {
        self.iter().collect()
    }

    /// Borrows the underlying bit slice
    pub fn as_bitslice(&self) -> &BitSlice<u8, Msb0> {
        &self.bits
    }
}

impl FromIterator<bool> for BitVector {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        BitVector {
            bits: iter.into_iter().collect(),
        }
    }
}

impl From<BitVec<u8, Msb0>> for BitVector {
    fn from(bits: BitVec<u8, Msb0>) -> Self {
        BitVector { bits }
    }
}

impl FromStr for BitVector {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse(text)
    }
}

impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "BitVector({})", self)
    }
}
