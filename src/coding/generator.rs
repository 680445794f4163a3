//! Generator selection.
//!
//! Turns resolved [`CodeParameters`] into the object the encoder and decoder
//! work with: a parity-check matrix pair for parity-check codes, or a
//! generator polynomial g(x) for cyclic and BCH codes.
//!
//! # Cyclic search
//!
//! Candidates are enumerated by increasing degree starting at r, and within a
//! degree in ascending numeric order. Only polynomials with a non-zero
//! constant term are considered, since x never divides x^n + 1. A candidate is
//! accepted when its weight is at least d0 = max(3, 2t + 1), it divides
//! x^n + 1 for n = k + degree, and no non-zero codeword of the code it
//! generates weighs less than d0. If no candidate of degree r qualifies the
//! search widens degree by degree, re-deriving n each time, up to the
//! configured maximum.
//!
//! # BCH construction
//!
//! With h = ⌈log2(n + 1)⌉, the generator is the product of the minimal
//! polynomials P_1, P_3, ..., P_{2s-1} of GF(2^h), in increasing index order.
//! Indices from the same cyclotomic coset share a minimal polynomial, which
//! enters the product only once.

use super::params::{ceil_log2, CodeKind, CodeParameters};
use super::parity::{ColumnLayout, MatrixGenerator};
use super::tables::DesignTables;
use crate::config::EngineConfig;
use crate::error::{Error, Result};
use crate::gf2::{poly, BitVector};
use log::{debug, trace};

/// A generator polynomial together with the parameters it was selected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorPolynomial {
    params: CodeParameters,
    /// g(x), highest degree first, leading bit set
    poly: BitVector,
}

impl GeneratorPolynomial {
    /// Wraps a polynomial for the given parameters
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidInput`] if g has a leading zero or its degree is not r
    /// - [`Error::InvalidInput`] if g does not divide x^n + 1
    pub fn new(params: CodeParameters, poly: BitVector) -> Result<Self> {
        if poly.first_one() != Some(0) || poly.len() != params.r() + 1 {
            return Err(Error::invalid(format!(
                "Generator {} must have degree r = {} with a leading one",
                poly,
                params.r()
            )));
        }
        let closure = poly::mod_divide(&poly::x_pow_n_plus_one(params.n()), &poly)?;
        if !closure.is_zero() {
            return Err(Error::invalid(format!(
                "Generator {} does not divide x^{} + 1",
                poly,
                params.n()
            )));
        }
        Ok(GeneratorPolynomial { params, poly })
    }

    /// Parameters of the code this polynomial generates
    pub fn parameters(&self) -> &CodeParameters {
        &self.params
    }

    /// g(x) as a bit vector
    pub fn polynomial(&self) -> &BitVector {
        &self.poly
    }

    /// Degree of g(x), equal to r
    pub fn degree(&self) -> usize {
        self.poly.len() - 1
    }

    /// Syndrome of a received word: its remainder modulo g(x)
    ///
    /// # Errors
    ///
    /// Propagates [`Error::DivisionByZero`], which valid generators never trigger
    pub fn syndrome(&self, received: &BitVector) -> Result<BitVector> {
        poly::mod_divide(received, &self.poly)
    }
}

/// The two shapes a code's generator can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generator {
    /// Parity-check code defined by H and G
    Matrix(MatrixGenerator),
    /// Cyclic or BCH code defined by g(x)
    Polynomial(GeneratorPolynomial),
}

impl Generator {
    /// Parameters of the generated code
    pub fn parameters(&self) -> &CodeParameters {
        match self {
            Generator::Matrix(matrix) => matrix.parameters(),
            Generator::Polynomial(poly) => poly.parameters(),
        }
    }

    /// Syndrome of a received word
    ///
    /// # Errors
    ///
    /// Returns [`Error::LengthMismatch`] if the word is not n bits long
    pub fn syndrome(&self, received: &BitVector) -> Result<BitVector> {
        let n = self.parameters().n();
        if received.len() != n {
            return Err(Error::LengthMismatch {
                expected: n,
                actual: received.len(),
            });
        }
        match self {
            Generator::Matrix(matrix) => matrix.syndrome(received),
            Generator::Polynomial(poly) => poly.syndrome(received),
        }
    }

    /// The generator polynomial, if this is a polynomial code
    pub fn polynomial(&self) -> Option<&GeneratorPolynomial> {
        match self {
            Generator::Polynomial(poly) => Some(poly),
            Generator::Matrix(_) => None,
        }
    }

    /// The matrix pair, if this is a parity-check code
    pub fn matrix(&self) -> Option<&MatrixGenerator> {
        match self {
            Generator::Matrix(matrix) => Some(matrix),
            Generator::Polynomial(_) => None,
        }
    }
}

/// Selects generators using injected tables and configuration.
#[derive(Debug, Clone, Copy)]
pub struct GeneratorSelector<'a> {
    tables: &'a DesignTables,
    max_degree: usize,
    layout: ColumnLayout,
}

impl<'a> GeneratorSelector<'a> {
    /// Creates a selector over the given tables and settings
    pub fn new(tables: &'a DesignTables, config: &EngineConfig) -> Self {
        GeneratorSelector {
            tables,
            max_degree: config.max_generator_degree,
            layout: config.column_layout,
        }
    }

    /// Selects the generator for resolved parameters
    ///
    /// # Errors
    ///
    /// - [`Error::NoGeneratorFound`] if the cyclic search is exhausted
    /// - [`Error::MissingMinimalPolynomial`] if a BCH factor is not tabulated
    /// - [`Error::InvalidInput`] if the parameters are internally inconsistent
    pub fn select(&self, params: &CodeParameters) -> Result<Generator> {
        match params.kind() {
            CodeKind::ParityCheck => MatrixGenerator::new(params, self.layout).map(Generator::Matrix),
            CodeKind::Cyclic => self.search_cyclic(params).map(Generator::Polynomial),
            CodeKind::Bch => self.bch_product(params).map(Generator::Polynomial),
        }
    }

    fn search_cyclic(&self, params: &CodeParameters) -> Result<GeneratorPolynomial> {
        let min_weight = params.design_distance().max(3);
        for degree in params.r()..=self.max_degree {
            let n = params.k() + degree;
            let modulus = poly::x_pow_n_plus_one(n);
            for candidate in candidates(degree) {
                if candidate.weight() < min_weight {
                    continue;
                }
                if !poly::mod_divide(&modulus, &candidate)?.is_zero() {
                    continue;
                }
                if !has_minimum_distance(&candidate, n, min_weight)? {
                    trace!(
                        "{} divides x^{} + 1 but its code has a codeword lighter than {}",
                        candidate,
                        n,
                        min_weight
                    );
                    continue;
                }
                debug!(
                    "selected cyclic generator {} for n = {}, k = {} (distance >= {})",
                    candidate,
                    n,
                    params.k(),
                    min_weight
                );
                return GeneratorPolynomial::new(params.with_redundancy(degree), candidate);
            }
            trace!("no generator of degree {} qualifies for n = {}", degree, n);
        }

        Err(Error::NoGeneratorFound {
            k: params.k(),
            max_degree: self.max_degree,
        })
    }

    fn bch_product(&self, params: &CodeParameters) -> Result<GeneratorPolynomial> {
        let s = params.s().unwrap_or(params.t());
        let h = ceil_log2(params.n() + 1);
        let table = self.tables.minimal_polynomials();

        let mut factors: Vec<&BitVector> = Vec::new();
        let mut product = BitVector::from_u64(1, 1);
        for index in (1..2 * s).step_by(2) {
            let factor = table
                .get(h, index)
                .ok_or(Error::MissingMinimalPolynomial { h, index })?;
            if factors.contains(&factor) {
                trace!("P{}(x) repeats an earlier factor", index);
                continue;
            }
            product = poly::multiply(&product, factor);
            factors.push(factor);
        }

        let product = poly::trim_leading_zeros(&product);
        if product.len() != params.r() + 1 {
            return Err(Error::invalid(format!(
                "Minimal polynomials for h = {}, s = {} multiply to degree {}, expected r = {}",
                h,
                s,
                product.len().saturating_sub(1),
                params.r()
            )));
        }

        debug!(
            "BCH generator for (n = {}, k = {}, s = {}): {} from {} factors",
            params.n(),
            params.k(),
            s,
            product,
            factors.len()
        );
        GeneratorPolynomial::new(*params, product)
    }
}

/// Degree-`degree` polynomials with leading and constant terms set, in ascending order
fn candidates(degree: usize) -> impl Iterator<Item = BitVector> {
    let inner = degree.saturating_sub(1);
    (0..1u64 << inner).map(move |middle| {
        let value = if degree == 0 { 1 } else { (1 << degree) | (middle << 1) | 1 };
        BitVector::from_u64(value, degree + 1)
    })
}

/// Whether every non-zero codeword of the length-`n` cyclic code generated by
/// `g` weighs at least `distance`
///
/// The code is closed under rotation, so a light codeword exists iff one
/// exists with bit 0 set. Words are built from bit 0 plus up to
/// `distance - 2` later positions, and a word is a codeword iff the XOR of its
/// positions' syndromes vanishes.
fn has_minimum_distance(g: &BitVector, n: usize, distance: usize) -> Result<bool> {
    if distance <= 1 || n == 0 {
        return Ok(true);
    }
    let syndromes = (0..n)
        .map(|j| poly::mod_divide(&BitVector::unit(n, j)?, g))
        .collect::<Result<Vec<_>>>()?;
    Ok(!reaches_zero(&syndromes[1..], &syndromes[0], distance - 2))
}

fn reaches_zero(rest: &[BitVector], syndrome: &BitVector, extra: usize) -> bool {
    if syndrome.is_zero() {
        return true;
    }
    if extra == 0 {
        return false;
    }
    rest.iter().enumerate().any(|(j, next)| {
        reaches_zero(&rest[j + 1..], &poly::xor_add(syndrome, next), extra - 1)
    })
}

/// Selects the generator for `params` using the built-in tables and default settings
///
/// # Errors
///
/// See [`GeneratorSelector::select`]
pub fn select_generator(params: &CodeParameters) -> Result<Generator> {
    GeneratorSelector::new(DesignTables::standard(), &EngineConfig::default()).select(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coding::params::{resolve, resolve_parameters, CodeSpec};
    use crate::config::MinimalPolynomialSource;

    fn cyclic(k: usize, t: usize) -> Result<Generator> {
        let params = resolve(CodeSpec::Cyclic { k, t }, DesignTables::standard())?;
        select_generator(&params)
    }

    fn bch(k: usize, s: usize, source: MinimalPolynomialSource) -> Result<Generator> {
        let tables = DesignTables::load(source)?;
        let config = EngineConfig::default().with_minimal_polynomials(source);
        let params = resolve(CodeSpec::Bch { k, s }, tables)?;
        GeneratorSelector::new(tables, &config).select(&params)
    }

    #[test]
    fn test_candidates_order() {
        let degree3: Vec<String> = candidates(3).map(|c| c.to_string()).collect();
        assert_eq!(degree3, vec!["1001", "1011", "1101", "1111"]);
        let degree1: Vec<String> = candidates(1).map(|c| c.to_string()).collect();
        assert_eq!(degree1, vec!["11"]);
    }

    #[test]
    fn test_cyclic_7_4() {
        let generator = cyclic(4, 1).unwrap();
        let g = generator.polynomial().unwrap();
        assert_eq!(g.polynomial().to_string(), "1011");
        assert_eq!((g.parameters().n(), g.parameters().r()), (7, 3));
    }

    #[test]
    fn test_cyclic_search_widens() {
        // 111000111 divides x^12 + 1 but its code holds weight-4 words
        let generator = cyclic(4, 2).unwrap();
        let g = generator.polynomial().unwrap();
        assert_eq!(g.polynomial().to_string(), "10110001011");
        assert_eq!((g.parameters().n(), g.parameters().k(), g.parameters().r()), (14, 4, 10));
        assert!(has_minimum_distance(g.polynomial(), 14, 5).unwrap());
    }

    #[test]
    fn test_minimum_distance() {
        let bits = |text: &str| BitVector::parse(text).unwrap();
        // (7, 4) Hamming code
        assert!(has_minimum_distance(&bits("1011"), 7, 3).unwrap());
        assert!(!has_minimum_distance(&bits("1011"), 7, 4).unwrap());
        // x^3 + x + 1 divides x^7 + 1, so the length-14 code holds x^7 + 1
        assert!(!has_minimum_distance(&bits("1011"), 14, 3).unwrap());
        // Weight 6, yet the length-12 code has distance 4
        assert!(!has_minimum_distance(&bits("111000111"), 12, 5).unwrap());
        assert!(has_minimum_distance(&bits("111000111"), 12, 4).unwrap());
        // (15, 7) BCH code has distance 5
        assert!(has_minimum_distance(&bits("111010001"), 15, 5).unwrap());
        assert!(!has_minimum_distance(&bits("111010001"), 15, 6).unwrap());
    }

    #[test]
    fn test_cyclic_search_exhausted() {
        let params = resolve(CodeSpec::Cyclic { k: 4, t: 2 }, DesignTables::standard()).unwrap();
        let config = EngineConfig::default().with_max_generator_degree(6);
        let result = GeneratorSelector::new(DesignTables::standard(), &config).select(&params);
        assert_eq!(
            result,
            Err(Error::NoGeneratorFound {
                k: 4,
                max_degree: 6
            })
        );
    }

    #[test]
    fn test_selected_generators_divide_x_pow_n_plus_one() {
        for k in 1..=11 {
            let generator = cyclic(k, 1).unwrap();
            let g = generator.polynomial().unwrap();
            let n = g.parameters().n();
            assert_eq!(n, k + g.degree());
            let rem = poly::mod_divide(&poly::x_pow_n_plus_one(n), g.polynomial()).unwrap();
            assert!(rem.is_zero(), "k = {}", k);
            assert!(g.polynomial().weight() >= 3);
        }
    }

    #[test]
    fn test_bch_7_4() {
        let generator = bch(4, 1, MinimalPolynomialSource::Tabulated).unwrap();
        let g = generator.polynomial().unwrap();
        assert_eq!(g.polynomial().to_string(), "1011");
        assert_eq!(g.parameters().s(), Some(1));
    }

    #[test]
    fn test_bch_15_7() {
        let generator = bch(7, 2, MinimalPolynomialSource::Tabulated).unwrap();
        // (x^4 + x + 1)(x^4 + x^3 + x^2 + x + 1)
        assert_eq!(generator.polynomial().unwrap().polynomial().to_string(), "111010001");
    }

    #[test]
    fn test_bch_repeated_factor_counted_once() {
        // P9 = P5 in GF(32), so (31, 11) has degree 20 rather than 25
        let generator = bch(11, 5, MinimalPolynomialSource::Tabulated).unwrap();
        assert_eq!(generator.polynomial().unwrap().degree(), 20);
    }

    #[test]
    fn test_bch_missing_minimal_polynomial() {
        assert_eq!(
            bch(6, 7, MinimalPolynomialSource::Tabulated),
            Err(Error::MissingMinimalPolynomial { h: 5, index: 13 })
        );
        assert_eq!(
            bch(71, 9, MinimalPolynomialSource::Tabulated),
            Err(Error::MissingMinimalPolynomial { h: 7, index: 15 })
        );
    }

    #[test]
    fn test_bch_long_codes_tabulated() {
        let generator = bch(100, 1, MinimalPolynomialSource::Tabulated).unwrap();
        let g = generator.polynomial().unwrap();
        assert_eq!(g.polynomial().to_string(), "10001001");
        assert_eq!(g.parameters().n(), 127);

        let generator = bch(199, 7, MinimalPolynomialSource::Tabulated).unwrap();
        let g = generator.polynomial().unwrap();
        assert_eq!((g.parameters().n(), g.degree()), (255, 56));
    }

    #[test]
    fn test_bch_derived_covers_every_design() {
        let tables = DesignTables::load(MinimalPolynomialSource::Derived).unwrap();
        for design in tables.designs() {
            let generator = bch(design.k, design.s, MinimalPolynomialSource::Derived)
                .unwrap_or_else(|e| panic!("{:?}: {}", design, e));
            let g = generator.polynomial().unwrap();
            assert_eq!(g.parameters().n(), design.n);
            assert_eq!(g.degree(), design.r, "{:?}", design);
        }
    }

    #[test]
    fn test_parity_check_selects_matrix() {
        let generator = select_generator(&resolve_parameters(4, None).unwrap()).unwrap();
        assert!(generator.matrix().is_some());
        assert!(generator.polynomial().is_none());
    }

    #[test]
    fn test_generator_polynomial_validation() {
        let params = resolve_parameters(4, Some(1)).unwrap();
        assert!(GeneratorPolynomial::new(params, BitVector::parse("1011").unwrap()).is_ok());
        assert!(GeneratorPolynomial::new(params, BitVector::parse("1111").unwrap()).is_err());
        assert!(GeneratorPolynomial::new(params, BitVector::parse("0101").unwrap()).is_err());
        assert!(GeneratorPolynomial::new(params, BitVector::parse("10011").unwrap()).is_err());
    }
}
