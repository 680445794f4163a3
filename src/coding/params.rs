//! Parameter resolution: from a requested code to (n, k, r[, s]).
//!
//! Parity-check and plain cyclic codes take the minimal redundancy allowed by
//! the Hamming bound for single-error correction,
//!
//! ```text
//! r = ⌈log2(k + 1 + ⌈log2(k + 1)⌉)⌉,    n = k + r
//! ```
//!
//! BCH codes are looked up in the design table instead. When the caller's k
//! is shorter than the tabulated one, the information word is left-padded
//! with zeros to the table's k; [`CodeParameters::info_len`] remembers the
//! caller's length so decoded information can be un-padded.

use super::tables::DesignTables;
use crate::error::{Error, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// The family a code belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    /// Single-error-correcting code defined by a parity-check matrix
    ParityCheck,
    /// Cyclic code with a searched generator polynomial
    Cyclic,
    /// BCH code whose generator is a product of minimal polynomials
    Bch,
}

/// A request for a code: the family plus its sizing inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CodeSpec {
    /// Hamming-style parity-check code for `k` information bits
    ParityCheck { k: usize },
    /// Cyclic code for `k` information bits correcting `t` errors
    Cyclic { k: usize, t: usize },
    /// Tabulated BCH code for at least `k` information bits correcting at least `s` errors
    Bch { k: usize, s: usize },
}

impl CodeSpec {
    /// Information length requested by the caller
    pub fn k(&self) -> usize {
        match *self {
            CodeSpec::ParityCheck { k } | CodeSpec::Cyclic { k, .. } | CodeSpec::Bch { k, .. } => k,
        }
    }

    /// Family of the requested code
    pub fn kind(&self) -> CodeKind {
        match self {
            CodeSpec::ParityCheck { .. } => CodeKind::ParityCheck,
            CodeSpec::Cyclic { .. } => CodeKind::Cyclic,
            CodeSpec::Bch { .. } => CodeKind::Bch,
        }
    }
}

/// Resolved, mutually consistent code dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CodeParameters {
    kind: CodeKind,
    /// Information bits per codeword (after any table padding)
    k: usize,
    /// Check bits per codeword
    r: usize,
    /// Codeword length, always `k + r`
    n: usize,
    /// Tabulated BCH capability
    s: Option<usize>,
    /// Errors the decoder will try to correct
    t: usize,
    /// Information bits supplied by the caller, at most `k`
    info_len: usize,
}

impl CodeParameters {
    /// Code family
    pub fn kind(&self) -> CodeKind {
        self.kind
    }

    /// Information length k
    pub fn k(&self) -> usize {
        self.k
    }

    /// Redundancy r
    pub fn r(&self) -> usize {
        self.r
    }

    /// Codeword length n
    pub fn n(&self) -> usize {
        self.n
    }

    /// BCH capability s, `None` for other families
    pub fn s(&self) -> Option<usize> {
        self.s
    }

    /// Correction capability t used by the decoder
    pub fn t(&self) -> usize {
        self.t
    }

    /// Design distance d0 = 2t + 1
    pub fn design_distance(&self) -> usize {
        2 * self.t + 1
    }

    /// Information length supplied by the caller
    pub fn info_len(&self) -> usize {
        self.info_len
    }

    /// Zero bits prepended to each information word to reach k
    pub fn padding(&self) -> usize {
        self.k - self.info_len
    }

    /// Code rate k / n
    pub fn rate(&self) -> f64 {
        self.k as f64 / self.n as f64
    }

    /// Same code with a different redundancy, re-deriving n
    pub(crate) fn with_redundancy(&self, r: usize) -> Self {
        CodeParameters {
            r,
            n: self.k + r,
            ..*self
        }
    }
}

/// ⌈log2(x)⌉ in exact integer arithmetic; `ceil_log2(0)` and `ceil_log2(1)` are 0
pub fn ceil_log2(x: usize) -> usize {
    if x <= 1 {
        0
    } else {
        (usize::BITS - (x - 1).leading_zeros()) as usize
    }
}

/// Minimal redundancy of a single-error-correcting code with `k` information bits
pub fn hamming_redundancy(k: usize) -> usize {
    ceil_log2(k + 1 + ceil_log2(k + 1))
}

/// Resolves a code request against the design tables
///
/// # Errors
///
/// - [`Error::InvalidInput`] if k is zero or a capability is zero
/// - [`Error::NoSuitableParameters`] if no BCH design covers the request
pub fn resolve(spec: CodeSpec, tables: &DesignTables) -> Result<CodeParameters> {
    let k = spec.k();
    if k == 0 {
        return Err(Error::invalid("Information length must be positive"));
    }

    let params = match spec {
        CodeSpec::ParityCheck { k } => {
            let r = hamming_redundancy(k);
            CodeParameters {
                kind: CodeKind::ParityCheck,
                k,
                r,
                n: k + r,
                s: None,
                t: 1,
                info_len: k,
            }
        }
        CodeSpec::Cyclic { k, t } => {
            if t == 0 {
                return Err(Error::invalid("Correction capability must be positive"));
            }
            let r = hamming_redundancy(k);
            CodeParameters {
                kind: CodeKind::Cyclic,
                k,
                r,
                n: k + r,
                s: None,
                t,
                info_len: k,
            }
        }
        CodeSpec::Bch { k, s } => {
            if s == 0 {
                return Err(Error::invalid("Correction capability must be positive"));
            }
            let design = tables
                .find_design(k, s)
                .ok_or(Error::NoSuitableParameters { k, s })?;
            CodeParameters {
                kind: CodeKind::Bch,
                k: design.k,
                r: design.r,
                n: design.n,
                s: Some(design.s),
                t: design.s,
                info_len: k,
            }
        }
    };

    debug!(
        "resolved {:?}: n = {}, k = {}, r = {}, t = {}",
        spec, params.n, params.k, params.r, params.t
    );
    Ok(params)
}

/// Resolves a parity-check code (`s == None`) or a BCH code (`s == Some(_)`)
/// against the built-in tables
///
/// # Errors
///
/// See [`resolve`]
pub fn resolve_parameters(k: usize, s: Option<usize>) -> Result<CodeParameters> {
    let spec = match s {
        None => CodeSpec::ParityCheck { k },
        Some(s) => CodeSpec::Bch { k, s },
    };
    resolve(spec, DesignTables::standard())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ceil_log2() {
        assert_eq!(ceil_log2(0), 0);
        assert_eq!(ceil_log2(1), 0);
        assert_eq!(ceil_log2(2), 1);
        assert_eq!(ceil_log2(5), 3);
        assert_eq!(ceil_log2(8), 3);
        assert_eq!(ceil_log2(9), 4);
        assert_eq!(ceil_log2(1 << 20), 20);
    }

    #[test]
    fn test_hamming_redundancy() {
        // (k, r) pairs of the classic shortened Hamming codes
        let expected = [(1, 2), (2, 3), (4, 3), (5, 4), (11, 4), (12, 5), (26, 5), (57, 6), (120, 7)];
        for (k, r) in expected {
            assert_eq!(hamming_redundancy(k), r, "k = {}", k);
        }
    }

    #[test]
    fn test_resolve_parity_check() {
        let params = resolve_parameters(4, None).unwrap();
        assert_eq!(params.kind(), CodeKind::ParityCheck);
        assert_eq!((params.n(), params.k(), params.r()), (7, 4, 3));
        assert_eq!(params.t(), 1);
        assert_eq!(params.s(), None);
        assert_eq!(params.design_distance(), 3);
        assert_eq!(params.padding(), 0);
    }

    #[test]
    fn test_resolve_cyclic() {
        let params = resolve(CodeSpec::Cyclic { k: 4, t: 2 }, DesignTables::standard()).unwrap();
        assert_eq!((params.n(), params.k(), params.r()), (7, 4, 3));
        assert_eq!(params.design_distance(), 5);
        assert!(resolve(CodeSpec::Cyclic { k: 4, t: 0 }, DesignTables::standard()).is_err());
    }

    #[test]
    fn test_resolve_bch() {
        let params = resolve_parameters(4, Some(1)).unwrap();
        assert_eq!(params.kind(), CodeKind::Bch);
        assert_eq!((params.n(), params.k(), params.r()), (7, 4, 3));
        assert_eq!(params.s(), Some(1));
        assert_eq!(params.t(), 1);

        let params = resolve_parameters(6, Some(2)).unwrap();
        assert_eq!((params.n(), params.k(), params.r()), (15, 7, 8));
        assert_eq!(params.info_len(), 6);
        assert_eq!(params.padding(), 1);
    }

    #[test]
    fn test_resolve_bch_without_design() {
        assert_eq!(
            resolve_parameters(250, Some(1)),
            Err(Error::NoSuitableParameters { k: 250, s: 1 })
        );
        assert_eq!(
            resolve_parameters(4, Some(40)),
            Err(Error::NoSuitableParameters { k: 4, s: 40 })
        );
        assert!(matches!(
            resolve_parameters(4, Some(0)),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_empty_word() {
        assert!(matches!(
            resolve_parameters(0, None),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_with_redundancy() {
        let params = resolve(CodeSpec::Cyclic { k: 4, t: 2 }, DesignTables::standard()).unwrap();
        let widened = params.with_redundancy(8);
        assert_eq!((widened.n(), widened.k(), widened.r()), (12, 4, 8));
        assert_eq!(widened.t(), 2);
    }
}
