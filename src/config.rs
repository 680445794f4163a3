//! Engine configuration.
//!
//! [`EngineConfig`] collects the knobs that shape code construction without
//! changing the requested code itself: how far the cyclic generator search may
//! widen, where BCH minimal polynomials come from, and how parity-check
//! columns are laid out. The defaults reproduce the classic constructions.
//!
//! The type derives `serde` traits so callers can keep it in a JSON or TOML
//! file; missing fields fall back to their defaults.
//!
//! ```
//! use gf2codes::config::{EngineConfig, MinimalPolynomialSource};
//!
//! let config = EngineConfig::default()
//!     .with_max_generator_degree(12)
//!     .with_minimal_polynomials(MinimalPolynomialSource::Derived);
//! assert!(config.validate().is_ok());
//! ```

use crate::coding::ColumnLayout;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default upper bound on the cyclic generator degree
pub const DEFAULT_MAX_GENERATOR_DEGREE: usize = 16;

/// Hard ceiling on the cyclic generator degree; the search enumerates 2^(d-1) candidates per degree
pub const MAX_SEARCH_DEGREE: usize = 24;

/// Where BCH minimal polynomials are read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimalPolynomialSource {
    /// The fixed table for field degrees 2 through 10; some indices are missing
    #[default]
    Tabulated,
    /// Computed from GF(2^h) cyclotomic cosets for every degree the design table uses
    Derived,
}

/// Construction settings shared by every code built from them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Largest generator degree the cyclic search may widen to
    pub max_generator_degree: usize,
    /// Source of BCH minimal polynomials
    pub minimal_polynomials: MinimalPolynomialSource,
    /// Column order of the parity-check matrix
    pub column_layout: ColumnLayout,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_generator_degree: DEFAULT_MAX_GENERATOR_DEGREE,
            minimal_polynomials: MinimalPolynomialSource::Tabulated,
            column_layout: ColumnLayout::Systematic,
        }
    }
}

impl EngineConfig {
    /// Sets the largest generator degree for the cyclic search
    pub fn with_max_generator_degree(mut self, degree: usize) -> Self {
        self.max_generator_degree = degree;
        self
    }

    /// Sets the minimal polynomial source
    pub fn with_minimal_polynomials(mut self, source: MinimalPolynomialSource) -> Self {
        self.minimal_polynomials = source;
        self
    }

    /// Sets the parity-check column layout
    pub fn with_column_layout(mut self, layout: ColumnLayout) -> Self {
        self.column_layout = layout;
        self
    }

    /// Checks the settings for values the engine cannot honour
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if the maximum generator degree is zero
    /// or above [`MAX_SEARCH_DEGREE`]
    pub fn validate(&self) -> Result<()> {
        if self.max_generator_degree == 0 || self.max_generator_degree > MAX_SEARCH_DEGREE {
            return Err(Error::invalid(format!(
                "Maximum generator degree must be between 1 and {}, got {}",
                MAX_SEARCH_DEGREE, self.max_generator_degree
            )));
        }
        Ok(())
    }
}
