//! Polynomial arithmetic over GF(2).
//!
//! Operands are [`BitVector`]s read as polynomials with the leftmost bit as
//! the highest-degree coefficient. Addition is XOR, multiplication is
//! carry-less, and the only division offered is the remainder of binary long
//! division, which is all the encoder and decoder need.
//!
//! # Examples
//!
//! ```
//! use gf2codes::gf2::{poly, BitVector};
//!
//! let g = BitVector::parse("1011").unwrap(); // x^3 + x + 1
//! let x7_plus_1 = poly::x_pow_n_plus_one(7);
//! assert!(poly::mod_divide(&x7_plus_1, &g).unwrap().is_zero());
//! ```

use super::bits::BitVector;
use crate::error::{Error, Result};

/// Adds two polynomials (bitwise XOR after left-zero-padding the shorter one).
///
/// The result has `max(a.len(), b.len())` bits.
pub fn xor_add(a: &BitVector, b: &BitVector) -> BitVector {
    let len = a.len().max(b.len());
    let a = a.left_pad(len);
    let b = b.left_pad(len);
    a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect()
}

/// Carry-less product of two polynomials.
///
/// The result has `a.len() + b.len() - 1` bits, leading zeros included.
/// Multiplying by an empty vector yields an empty vector.
pub fn multiply(a: &BitVector, b: &BitVector) -> BitVector {
    if a.is_empty() || b.is_empty() {
        return BitVector::zeros(0);
    }

    // With MSB-first indexing, term i of `a` times term j of `b` lands on i + j
    let mut product = BitVector::zeros(a.len() + b.len() - 1);
    for i in a.ones() {
        for j in b.ones() {
            product.flip(i + j);
        }
    }
    product
}

/// Remainder of binary long division of `dividend` by `divisor`.
///
/// Leading zeros of the divisor are ignored. The remainder is left-zero-padded
/// to one bit less than the stripped divisor, so dividing by a degree-r
/// polynomial always yields exactly r bits.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] if the divisor has no set bit
pub fn mod_divide(dividend: &BitVector, divisor: &BitVector) -> Result<BitVector> {
    let divisor = trim_leading_zeros(divisor);
    if divisor.is_empty() {
        return Err(Error::DivisionByZero);
    }

    let width = divisor.len() - 1;
    if dividend.len() < divisor.len() {
        return Ok(dividend.left_pad(width));
    }

    let mut remainder = dividend.clone();
    let steps = dividend.len() - divisor.len() + 1;
    for i in 0..steps {
        if remainder.bit(i) {
            for j in divisor.ones() {
                remainder.flip(i + j);
            }
        }
    }

    Ok(remainder.slice(dividend.len() - width..dividend.len()))
}

/// Hamming weight (number of non-zero coefficients)
pub fn weight(a: &BitVector) -> usize {
    a.weight()
}

/// Rotates left by one position (multiplication by x modulo x^n + 1)
pub fn shift_left_cyclic(a: &BitVector) -> BitVector {
    a.rotated_left(1)
}

/// Rotates right by one position, undoing [`shift_left_cyclic`]
pub fn shift_right_cyclic(a: &BitVector) -> BitVector {
    a.rotated_right(1)
}

/// Rotates left by `m` positions
pub fn rotate_left(a: &BitVector, m: usize) -> BitVector {
    a.rotated_left(m)
}

/// Rotates right by `m` positions
pub fn rotate_right(a: &BitVector, m: usize) -> BitVector {
    a.rotated_right(m)
}

/// Multiplies by x^r by appending `r` zero bits (no reduction)
pub fn multiply_by_x_pow_r(a: &BitVector, r: usize) -> BitVector {
    a.concat(&BitVector::zeros(r))
}

/// The polynomial x^n + 1 as an (n + 1)-bit vector
pub fn x_pow_n_plus_one(n: usize) -> BitVector {
    let mut poly = BitVector::zeros(n + 1);
    poly.flip(0);
    poly.flip(n);
    poly
}

/// Removes leading zero coefficients; the zero polynomial becomes empty
pub fn trim_leading_zeros(a: &BitVector) -> BitVector {
    match a.first_one() {
        Some(first) => a.slice(first..a.len()),
        None => BitVector::zeros(0),
    }
}

/// Degree of the polynomial, `None` for the zero polynomial
pub fn degree(a: &BitVector) -> Option<usize> {
    a.first_one().map(|first| a.len() - 1 - first)
}
