//! Linear block codes over GF(2).
//!
//! The pipeline runs leaf-first:
//!
//! 1. [`params`] resolves a [`CodeSpec`] into (n, k, r[, s])
//! 2. [`generator`] selects H/G for parity-check codes or g(x) for cyclic and BCH codes
//! 3. [`encoder`] produces systematic codewords
//! 4. [`inject`] simulates the channel
//! 5. [`decoder`] corrects received words and reports a [`DecodeStatus`]
//!
//! [`Code`] wraps the whole pipeline and [`CodeCache`] memoises it.
//!
//! # Examples
//!
//! ```
//! use gf2codes::coding::{BlockCode, Code, CodeSpec, DecodeStatus};
//! use gf2codes::gf2::BitVector;
//!
//! let code = Code::new(CodeSpec::Bch { k: 7, s: 2 })?;
//! let info = BitVector::parse("1100101")?;
//! let mut received = code.encode(&info)?.into_bits();
//! received.flip(3);
//! received.flip(9);
//!
//! let result = code.decode(&received)?;
//! assert_eq!(result.status(), DecodeStatus::Corrected);
//! assert_eq!(code.information(result.corrected())?, info);
//! # Ok::<(), gf2codes::Error>(())
//! ```

use crate::error::Result;
use crate::gf2::BitVector;

/// Common interface of every block code
pub trait BlockCode {
    /// Resolved dimensions of the code
    fn parameters(&self) -> &CodeParameters;

    /// Encodes an information word into a codeword
    fn encode(&self, info: &BitVector) -> Result<Codeword>;

    /// Decodes a received word, correcting errors where possible
    fn decode(&self, received: &BitVector) -> Result<DecodeResult>;

    /// Number of errors the decoder attempts to correct
    fn correction_capability(&self) -> usize {
        self.parameters().t()
    }
}

pub mod cache;
pub mod code;
pub mod decoder;
pub mod encoder;
pub mod generator;
pub mod inject;
pub mod params;
pub mod parity;
pub mod tables;

pub use cache::CodeCache;
pub use code::Code;
pub use decoder::{decode, DecodeResult, DecodeStatus, Verification};
pub use encoder::{encode, extract_information, Codeword};
pub use generator::{select_generator, Generator, GeneratorPolynomial, GeneratorSelector};
pub use inject::{check_received, inject_errors, inject_errors_within, inject_random_errors};
pub use params::{resolve, resolve_parameters, CodeKind, CodeParameters, CodeSpec};
pub use parity::{ColumnLayout, MatrixGenerator};
pub use tables::{BchDesign, DesignTables, MinimalPolynomialTable};
