//! Static design data for BCH codes.
//!
//! Two tables drive BCH construction:
//!
//! - the design table of (n, k, r, s) quadruples, used by the parameter resolver
//! - the minimal polynomials P_i(x) of GF(2^h), used by the generator selector
//!
//! Both are immutable once loaded. [`DesignTables::standard`] and
//! [`DesignTables::load`] build them on first use and hand out `'static`
//! references afterwards.

use crate::config::MinimalPolynomialSource;
use crate::error::Result;
use crate::gf2::field::{ExtensionField, MIN_FIELD_DEGREE};
use crate::gf2::BitVector;
use log::debug;
use std::collections::HashMap;
use std::sync::OnceLock;

/// One row of the BCH design table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BchDesign {
    /// Codeword length
    pub n: usize,
    /// Information length
    pub k: usize,
    /// Number of check bits, always `n - k`
    pub r: usize,
    /// Guaranteed number of correctable errors
    pub s: usize,
}

const fn design(n: usize, k: usize, s: usize) -> BchDesign {
    BchDesign { n, k, r: n - k, s }
}

/// Primitive narrow-sense BCH codes of length 7 through 255, in lookup order
const BCH_DESIGNS: &[BchDesign] = &[
    design(7, 4, 1),
    design(15, 11, 1),
    design(15, 7, 2),
    design(15, 5, 3),
    design(31, 26, 1),
    design(31, 21, 2),
    design(31, 16, 3),
    design(31, 11, 5),
    design(31, 6, 7),
    design(63, 57, 1),
    design(63, 51, 2),
    design(63, 45, 3),
    design(63, 39, 4),
    design(63, 36, 5),
    design(63, 30, 6),
    design(63, 24, 7),
    design(63, 18, 10),
    design(63, 16, 11),
    design(63, 10, 13),
    design(63, 7, 15),
    design(127, 120, 1),
    design(127, 113, 2),
    design(127, 106, 3),
    design(127, 99, 4),
    design(127, 92, 5),
    design(127, 85, 6),
    design(127, 78, 7),
    design(127, 71, 9),
    design(127, 64, 10),
    design(127, 57, 11),
    design(127, 50, 13),
    design(127, 43, 14),
    design(127, 36, 15),
    design(127, 29, 21),
    design(127, 22, 23),
    design(127, 15, 27),
    design(127, 8, 31),
    design(255, 247, 1),
    design(255, 239, 2),
    design(255, 231, 3),
    design(255, 223, 4),
    design(255, 215, 5),
    design(255, 207, 6),
    design(255, 199, 7),
];

/// Minimal polynomials P_i(x) as (h, i, coefficients highest degree first)
const TABULATED_MINIMAL_POLYNOMIALS: &[(usize, usize, &str)] = &[
    (2, 1, "111"),
    (3, 1, "1011"),
    (3, 3, "1101"),
    (4, 1, "10011"),
    (4, 3, "11111"),
    (4, 5, "111"),
    (4, 7, "11001"),
    (5, 1, "100101"),
    (5, 3, "111101"),
    (5, 5, "110111"),
    (5, 7, "101111"),
    (5, 9, "110111"),
    (5, 11, "111011"),
    (6, 1, "1000011"),
    (6, 3, "1010111"),
    (6, 5, "1100111"),
    (6, 7, "1001001"),
    (6, 9, "1101"),
    (6, 11, "1101101"),
    (7, 1, "10001001"),
    (7, 3, "10001111"),
    (7, 5, "10011101"),
    (7, 7, "11110111"),
    (7, 9, "10111111"),
    (7, 11, "11010101"),
    (7, 13, "10000011"),
    (7, 19, "11001011"),
    (7, 21, "11100101"),
    (8, 1, "100011101"),
    (8, 3, "101110111"),
    (8, 5, "111110011"),
    (8, 7, "101101001"),
    (8, 9, "110111101"),
    (8, 11, "111100111"),
    (8, 13, "100101011"),
    (8, 15, "111010111"),
    (8, 17, "10011"),
    (8, 19, "101100101"),
    (8, 21, "110001011"),
    (8, 23, "101100011"),
    (8, 25, "100011011"),
    (8, 27, "100111111"),
    (8, 37, "101011111"),
    (8, 43, "111000011"),
    (8, 45, "100111001"),
    (8, 51, "11111"),
    (9, 1, "1000010001"),
    (9, 3, "1001011001"),
    (9, 5, "1100110001"),
    (9, 7, "1010011001"),
    (9, 9, "1100010011"),
    (9, 11, "1000101101"),
    (9, 13, "1001110111"),
    (9, 15, "1101100001"),
    (9, 17, "1011011011"),
    (9, 19, "1110000101"),
    (9, 21, "1000010111"),
    (9, 23, "1111101001"),
    (9, 25, "1111100011"),
    (9, 27, "1110001111"),
    (9, 29, "1101101011"),
    (9, 35, "1100000001"),
    (9, 37, "1001101111"),
    (9, 39, "1111001101"),
    (9, 41, "1101110011"),
    (9, 43, "1111001011"),
    (9, 45, "1001111101"),
    (9, 51, "1111010101"),
    (9, 53, "1010010101"),
    (9, 55, "1010111101"),
    (10, 1, "10000001001"),
    (10, 3, "10000001111"),
    (10, 5, "10100001101"),
    (10, 7, "11111111001"),
    (10, 9, "10010101111"),
    (10, 11, "10000110101"),
    (10, 13, "10001101111"),
    (10, 15, "10110101011"),
    (10, 17, "11101001101"),
    (10, 19, "10111111011"),
    (10, 21, "11111101011"),
    (10, 23, "10000011011"),
    (10, 25, "10100100011"),
    (10, 27, "11101111011"),
    (10, 29, "10100110001"),
    (10, 31, "11000100011"),
    (10, 33, "111101"),
    (10, 35, "11000010011"),
    (10, 37, "11101100011"),
    (10, 39, "10001000111"),
    (10, 41, "10111100101"),
    (10, 43, "10100011001"),
    (10, 45, "11000110001"),
    (10, 47, "11001111111"),
    (10, 49, "11101010101"),
    (10, 51, "10101100111"),
    (10, 53, "10110001111"),
    (10, 55, "11100101011"),
    (10, 57, "11001010001"),
    (10, 59, "11100111001"),
    (10, 67, "11101010101"),
    (10, 69, "10111000001"),
];

/// Minimal polynomials keyed by field degree h and index i.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MinimalPolynomialTable {
    entries: HashMap<(usize, usize), BitVector>,
}

impl MinimalPolynomialTable {
    /// The fixed table covering h = 2..=10
    pub fn tabulated() -> Self {
        let entries = TABULATED_MINIMAL_POLYNOMIALS
            .iter()
            .map(|&(h, i, coefficients)| {
                let poly = coefficients.bytes().map(|b| b == b'1').collect();
                ((h, i), poly)
            })
            .collect();
        MinimalPolynomialTable { entries }
    }

    /// Derives every odd-index minimal polynomial for h = 2..=`max_degree`
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidInput`] if `max_degree` exceeds the
    /// degrees with a built-in primitive polynomial
    pub fn derived(max_degree: usize) -> Result<Self> {
        let mut entries = HashMap::new();
        for h in MIN_FIELD_DEGREE..=max_degree {
            let field = ExtensionField::new(h)?;
            for i in (1..field.order()).step_by(2) {
                if entries.contains_key(&(h, i)) {
                    continue;
                }
                let poly = field.minimal_polynomial(i);
                for j in field.cyclotomic_coset(i) {
                    if j % 2 == 1 {
                        entries.insert((h, j), poly.clone());
                    }
                }
            }
        }
        debug!(
            "derived {} minimal polynomials up to h = {}",
            entries.len(),
            max_degree
        );
        Ok(MinimalPolynomialTable { entries })
    }

    /// P_index(x) for field degree `h`
    pub fn get(&self, h: usize, index: usize) -> Option<&BitVector> {
        self.entries.get(&(h, index))
    }

    /// Number of (h, i) entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over ((h, i), P_i) pairs in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&(usize, usize), &BitVector)> {
        self.entries.iter()
    }
}

/// Read-only configuration data injected into the resolver and the selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignTables {
    /// BCH designs in lookup order
    designs: Vec<BchDesign>,
    minimal_polynomials: MinimalPolynomialTable,
}

impl DesignTables {
    /// Builds tables from explicit data; designs are searched in the order given
    pub fn new(designs: Vec<BchDesign>, minimal_polynomials: MinimalPolynomialTable) -> Self {
        DesignTables {
            designs,
            minimal_polynomials,
        }
    }

    /// The built-in design table with tabulated minimal polynomials
    pub fn standard() -> &'static DesignTables {
        static STANDARD: OnceLock<DesignTables> = OnceLock::new();
        STANDARD.get_or_init(|| {
            DesignTables::new(BCH_DESIGNS.to_vec(), MinimalPolynomialTable::tabulated())
        })
    }

    /// The built-in design table with minimal polynomials from `source`
    ///
    /// # Errors
    ///
    /// Propagates failures from deriving the minimal polynomials
    pub fn load(source: MinimalPolynomialSource) -> Result<&'static DesignTables> {
        match source {
            MinimalPolynomialSource::Tabulated => Ok(Self::standard()),
            MinimalPolynomialSource::Derived => {
                static DERIVED: OnceLock<DesignTables> = OnceLock::new();
                if let Some(tables) = DERIVED.get() {
                    return Ok(tables);
                }
                let max_degree = Self::max_field_degree(BCH_DESIGNS);
                let tables = DesignTables::new(
                    BCH_DESIGNS.to_vec(),
                    MinimalPolynomialTable::derived(max_degree)?,
                );
                Ok(DERIVED.get_or_init(|| tables))
            }
        }
    }

    /// All designs in lookup order
    pub fn designs(&self) -> &[BchDesign] {
        &self.designs
    }

    /// The minimal polynomial table
    pub fn minimal_polynomials(&self) -> &MinimalPolynomialTable {
        &self.minimal_polynomials
    }

    /// First design, in table order, with at least `k` information bits
    /// correcting at least `s` errors
    pub fn find_design(&self, k: usize, s: usize) -> Option<&BchDesign> {
        self.designs.iter().find(|d| d.k >= k && d.s >= s)
    }

    fn max_field_degree(designs: &[BchDesign]) -> usize {
        designs
            .iter()
            .map(|d| super::params::ceil_log2(d.n + 1))
            .max()
            .unwrap_or(MIN_FIELD_DEGREE)
    }
}
