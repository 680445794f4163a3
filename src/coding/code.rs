//! A resolved code bundling parameters and generator.
//!
//! [`Code`] runs the whole construction pipeline once (configuration check,
//! table loading, parameter resolution, generator selection) and then encodes
//! and decodes any number of words. It holds no mutable state, so a single
//! instance can be shared across threads; the batch methods use `rayon`.

use super::decoder::{decode, DecodeResult};
use super::encoder::{encode, extract_information, Codeword};
use super::generator::{Generator, GeneratorSelector};
use super::params::{resolve, CodeParameters, CodeSpec};
use super::tables::DesignTables;
use super::BlockCode;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::gf2::BitVector;
use rayon::prelude::*;
use std::fmt::{Display, Formatter};

/// A ready-to-use block code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    spec: CodeSpec,
    generator: Generator,
}

impl Code {
    /// Builds a code with the default configuration
    ///
    /// # Errors
    ///
    /// See [`Code::with_config`]
    pub fn new(spec: CodeSpec) -> Result<Self> {
        Self::with_config(spec, &EngineConfig::default())
    }

    /// Builds a code with explicit construction settings
    ///
    /// # Arguments
    ///
    /// * `spec` - Requested code family and sizing
    /// * `config` - Search bound, minimal polynomial source and column layout
    ///
    /// # Errors
    ///
    /// - [`crate::Error::InvalidInput`] for an invalid configuration or request
    /// - [`crate::Error::NoSuitableParameters`] if no BCH design covers the request
    /// - [`crate::Error::NoGeneratorFound`] if the cyclic search is exhausted
    /// - [`crate::Error::MissingMinimalPolynomial`] if a BCH factor is unavailable
    pub fn with_config(spec: CodeSpec, config: &EngineConfig) -> Result<Self> {
        config.validate()?;
        let tables = DesignTables::load(config.minimal_polynomials)?;
        let params = resolve(spec, tables)?;
        let generator = GeneratorSelector::new(tables, config).select(&params)?;
        Ok(Code { spec, generator })
    }

    /// The request this code was built from
    pub fn spec(&self) -> CodeSpec {
        self.spec
    }

    /// The selected generator
    pub fn generator(&self) -> &Generator {
        &self.generator
    }

    /// Reads the information bits out of a codeword or decoded word
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::LengthMismatch`] if the word is not n bits long
    pub fn information(&self, word: &BitVector) -> Result<BitVector> {
        extract_information(word, &self.generator)
    }

    /// Encodes many information words in parallel, preserving order
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any word
    pub fn encode_batch(&self, words: &[BitVector]) -> Result<Vec<Codeword>> {
        words
            .par_iter()
            .map(|info| encode(info, &self.generator))
            .collect()
    }

    /// Decodes many received words in parallel, preserving order
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any word
    pub fn decode_batch(&self, words: &[BitVector]) -> Result<Vec<DecodeResult>> {
        let t = self.correction_capability();
        words
            .par_iter()
            .map(|received| decode(received, &self.generator, t))
            .collect()
    }
}

impl BlockCode for Code {
    fn parameters(&self) -> &CodeParameters {
        self.generator.parameters()
    }

    fn encode(&self, info: &BitVector) -> Result<Codeword> {
        encode(info, &self.generator)
    }

    fn decode(&self, received: &BitVector) -> Result<DecodeResult> {
        decode(received, &self.generator, self.correction_capability())
    }
}

impl Display for Code {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let params = self.parameters();
        write!(
            f,
            "{:?}({},{}) t={}",
            params.kind(),
            params.n(),
            params.k(),
            params.t()
        )?;
        if let Some(g) = self.generator.polynomial() {
            write!(f, " g={}", g.polynomial())?;
        }
        Ok(())
    }
}
