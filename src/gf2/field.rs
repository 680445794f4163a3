//! The extension field GF(2^h).
//!
//! BCH generators are products of minimal polynomials of powers of a primitive
//! element α of GF(2^h). The coding layer normally reads those polynomials from
//! a fixed table; this module derives them from first principles so the table
//! can be checked and extended past the field degrees it covers.
//!
//! Field elements are stored as `u32` bit patterns over the polynomial basis,
//! with exponent/logarithm tables for multiplication.

use super::bits::BitVector;
use crate::error::{Error, Result};

/// Smallest field degree supported
pub const MIN_FIELD_DEGREE: usize = 2;

/// Largest field degree with a built-in primitive polynomial
pub const MAX_FIELD_DEGREE: usize = 10;

/// Primitive polynomials for h = 2..=10, bit i holding the coefficient of x^i.
///
/// These are the P1(x) entries of the tabulated minimal
/// polynomials, so derived and tabulated tables agree.
const PRIMITIVE_POLYNOMIALS: [u32; MAX_FIELD_DEGREE - MIN_FIELD_DEGREE + 1] = [
    0b111,           // x^2 + x + 1
    0b1011,          // x^3 + x + 1
    0b10011,         // x^4 + x + 1
    0b100101,        // x^5 + x^2 + 1
    0b1000011,       // x^6 + x + 1
    0b10001001,      // x^7 + x^3 + 1
    0b100011101,     // x^8 + x^4 + x^3 + x^2 + 1
    0b1000010001,    // x^9 + x^4 + 1
    0b10000001001,   // x^10 + x^3 + 1
];

/// GF(2^h) built over a primitive polynomial.
#[derive(Debug, Clone)]
pub struct ExtensionField {
    /// Field degree h
    degree: usize,
    /// Multiplicative group order 2^h - 1
    order: usize,
    /// Primitive polynomial, bit i = coefficient of x^i
    primitive: u32,
    /// exp[i] = α^i
    exp: Vec<u32>,
    /// log[α^i] = i; entry 0 is unused
    log: Vec<usize>,
}

impl ExtensionField {
    /// Creates GF(2^h) using the built-in primitive polynomial for `degree`
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `degree` is outside 2..=10
    pub fn new(degree: usize) -> Result<Self> {
        if !(MIN_FIELD_DEGREE..=MAX_FIELD_DEGREE).contains(&degree) {
            return Err(Error::invalid(format!(
                "Field degree must be between {} and {}, got {}",
                MIN_FIELD_DEGREE, MAX_FIELD_DEGREE, degree
            )));
        }
        Self::with_primitive(degree, PRIMITIVE_POLYNOMIALS[degree - MIN_FIELD_DEGREE])
    }

    /// Creates GF(2^h) over a caller-supplied primitive polynomial
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the polynomial does not have degree
    /// `degree` or is not primitive
    pub fn with_primitive(degree: usize, primitive: u32) -> Result<Self> {
        if degree == 0 || degree > 16 || primitive >> degree != 1 {
            return Err(Error::invalid(format!(
                "Polynomial {:#b} does not have degree {}",
                primitive, degree
            )));
        }

        let order = (1usize << degree) - 1;
        let mut exp = vec![0u32; order];
        let mut log = vec![usize::MAX; order + 1];

        let mut element: u32 = 1;
        for (i, slot) in exp.iter_mut().enumerate() {
            if log[element as usize] != usize::MAX {
                return Err(Error::invalid(format!(
                    "Polynomial {:#b} is not primitive: x has order {}",
                    primitive, i
                )));
            }
            *slot = element;
            log[element as usize] = i;

            element <<= 1;
            if element >> degree & 1 == 1 {
                element ^= primitive;
            }
        }

        Ok(ExtensionField {
            degree,
            order,
            primitive,
            exp,
            log,
        })
    }

    /// Field degree h
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Order of the multiplicative group, 2^h - 1
    pub fn order(&self) -> usize {
        self.order
    }

    /// The primitive polynomial as a bit vector (highest degree first)
    pub fn primitive_polynomial(&self) -> BitVector {
        BitVector::from_u64(u64::from(self.primitive), self.degree + 1)
    }

    /// α^i
    pub fn alpha_pow(&self, i: usize) -> u32 {
        self.exp[i % self.order]
    }

    /// Product of two field elements
    pub fn mul(&self, a: u32, b: u32) -> u32 {
        if a == 0 || b == 0 {
            return 0;
        }
        let sum = self.log[a as usize] + self.log[b as usize];
        self.exp[sum % self.order]
    }

    /// The cyclotomic coset of `i`: {i, 2i, 4i, ...} modulo 2^h - 1, in generation order
    pub fn cyclotomic_coset(&self, i: usize) -> Vec<usize> {
        let start = i % self.order;
        let mut coset = vec![start];
        let mut next = (start * 2) % self.order;
        while next != start {
            coset.push(next);
            next = (next * 2) % self.order;
        }
        coset
    }

    /// Minimal polynomial of α^i over GF(2), highest degree first.
    ///
    /// Computed as the product of (x + α^j) over the cyclotomic coset of `i`;
    /// the coefficients of that product always lie in GF(2).
    pub fn minimal_polynomial(&self, i: usize) -> BitVector {
        // coefficients[d] is the coefficient of x^d
        let mut coefficients: Vec<u32> = vec![1];
        for j in self.cyclotomic_coset(i) {
            let root = self.alpha_pow(j);
            let mut next = vec![0u32; coefficients.len() + 1];
            for (d, &c) in coefficients.iter().enumerate() {
                next[d + 1] ^= c;
                next[d] ^= self.mul(c, root);
            }
            coefficients = next;
        }
        coefficients.iter().rev().map(|&c| c != 0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gf2::poly;

    #[test]
    fn test_field_tables() {
        let field = ExtensionField::new(3).unwrap();
        assert_eq!(field.order(), 7);
        assert_eq!(field.primitive_polynomial().to_string(), "1011");
        // α^3 = α + 1 under x^3 + x + 1
        assert_eq!(field.alpha_pow(3), 0b011);
        assert_eq!(field.alpha_pow(7), 1);
        assert_eq!(field.mul(field.alpha_pow(4), field.alpha_pow(5)), field.alpha_pow(2));
        assert_eq!(field.mul(0, 5), 0);
    }

    #[test]
    fn test_rejects_bad_polynomials() {
        assert!(ExtensionField::new(1).is_err());
        assert!(ExtensionField::new(11).is_err());
        // x^4 + x^3 + x^2 + x + 1 is irreducible but not primitive
        assert!(ExtensionField::with_primitive(4, 0b11111).is_err());
        // wrong degree
        assert!(ExtensionField::with_primitive(4, 0b1011).is_err());
    }

    #[test]
    fn test_builtin_polynomials_are_primitive() {
        for degree in MIN_FIELD_DEGREE..=MAX_FIELD_DEGREE {
            assert!(ExtensionField::new(degree).is_ok(), "h = {}", degree);
        }
    }

    #[test]
    fn test_cyclotomic_cosets() {
        let field = ExtensionField::new(4).unwrap();
        assert_eq!(field.cyclotomic_coset(1), vec![1, 2, 4, 8]);
        assert_eq!(field.cyclotomic_coset(3), vec![3, 6, 12, 9]);
        assert_eq!(field.cyclotomic_coset(5), vec![5, 10]);

        let field = ExtensionField::new(5).unwrap();
        let coset = field.cyclotomic_coset(5);
        assert!(coset.contains(&9));
    }

    #[test]
    fn test_minimal_polynomials() {
        let field = ExtensionField::new(4).unwrap();
        assert_eq!(field.minimal_polynomial(1).to_string(), "10011");
        assert_eq!(field.minimal_polynomial(3).to_string(), "11111");
        assert_eq!(field.minimal_polynomial(5).to_string(), "111");
        assert_eq!(field.minimal_polynomial(7).to_string(), "11001");

        let field = ExtensionField::new(3).unwrap();
        assert_eq!(field.minimal_polynomial(3).to_string(), "1101");
    }

    #[test]
    fn test_minimal_polynomial_divides_x_pow_order_plus_one() {
        let field = ExtensionField::new(6).unwrap();
        let modulus = poly::x_pow_n_plus_one(field.order());
        for i in (1..field.order()).step_by(2) {
            let m = field.minimal_polynomial(i);
            assert!(
                poly::mod_divide(&modulus, &m).unwrap().is_zero(),
                "P{} does not divide x^63 + 1",
                i
            );
        }
    }
}
