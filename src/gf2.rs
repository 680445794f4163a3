//! Arithmetic over the binary field GF(2).
//!
//! Everything in the coding layer is built from the primitives in this module:
//!
//! - [`BitVector`]: fixed-length bit sequences, index 0 = most significant bit
//! - [`poly`]: polynomial arithmetic on bit vectors (XOR-add, carry-less
//!   multiply, mod-2 long division, cyclic shifts)
//! - [`BitMatrix`]: dense binary matrices for parity-check constructions
//! - [`ExtensionField`]: GF(2^h), used to derive minimal polynomials
//!
//! # Polynomial convention
//!
//! A bit vector read as a polynomial has its leftmost bit as the highest
//! degree coefficient, so `1011` is `x^3 + x + 1`. Operands of different
//! length are aligned by left-padding with zeros, never by right-padding.

pub mod bits;
pub mod field;
pub mod matrix;
pub mod poly;

pub use bits::BitVector;
pub use field::ExtensionField;
pub use matrix::BitMatrix;
