//! Forward error correction over GF(2).
//!
//! `gf2codes` builds and runs three families of binary linear block codes:
//!
//! - single-error-correcting parity-check (Hamming-style) codes
//! - cyclic codes with a searched generator polynomial
//! - BCH codes whose generator is a product of minimal polynomials
//!
//! All of them are systematic: the information bits appear verbatim in every
//! codeword. Decoding is syndrome based, by column lookup for parity-check
//! codes and by the Meggitt rotation search for polynomial codes.
//!
//! # Examples
//!
//! ```
//! use gf2codes::{decode, encode, inject_errors, resolve_parameters, select_generator};
//! use gf2codes::{BitVector, DecodeStatus};
//!
//! let params = resolve_parameters(4, None)?;
//! assert_eq!((params.n(), params.k(), params.r()), (7, 4, 3));
//!
//! let generator = select_generator(&params)?;
//! let codeword = encode(&BitVector::parse("1011")?, &generator)?;
//! assert_eq!(codeword.to_string(), "1011010");
//!
//! let received = inject_errors(&codeword, &[5])?;
//! let result = decode(&received, &generator, params.t())?;
//! assert_eq!(result.status(), DecodeStatus::Corrected);
//! assert_eq!(result.corrected(), codeword.bits());
//! # Ok::<(), gf2codes::Error>(())
//! ```

pub mod coding;
pub mod config;
pub mod error;
pub mod gf2;

pub use coding::{
    decode, encode, inject_errors, resolve_parameters, select_generator, BlockCode, Code,
    CodeCache, CodeSpec, Codeword, DecodeResult, DecodeStatus, Generator,
};
pub use config::EngineConfig;
pub use error::{Error, Result};
pub use gf2::BitVector;
