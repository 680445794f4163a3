//! Memoised code construction.
//!
//! Building a code can mean a generator search over thousands of candidates,
//! so repeated requests for the same [`CodeSpec`] share one [`Code`]. Lookups
//! take the read lock; a miss builds outside any lock and inserts under the
//! write lock, keeping whichever instance got there first.

use super::code::Code;
use super::params::CodeSpec;
use crate::config::EngineConfig;
use crate::error::Result;
use log::debug;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Thread-safe cache of built codes keyed by request.
#[derive(Debug, Default)]
pub struct CodeCache {
    config: EngineConfig,
    codes: RwLock<HashMap<CodeSpec, Arc<Code>>>,
}

impl CodeCache {
    /// Creates an empty cache building codes with `config`
    pub fn new(config: EngineConfig) -> Self {
        CodeCache {
            config,
            codes: RwLock::new(HashMap::new()),
        }
    }

    /// Settings used for every code this cache builds
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the cached code for `spec`, building it on first request
    ///
    /// # Errors
    ///
    /// Propagates construction errors from [`Code::with_config`]; failures are not cached
    pub fn get_or_build(&self, spec: CodeSpec) -> Result<Arc<Code>> {
        if let Some(code) = self
            .codes
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&spec)
        {
            return Ok(Arc::clone(code));
        }

        let built = Arc::new(Code::with_config(spec, &self.config)?);
        let mut codes = self.codes.write().unwrap_or_else(PoisonError::into_inner);
        let code = codes.entry(spec).or_insert_with(|| {
            debug!("cached {}", built);
            Arc::clone(&built)
        });
        Ok(Arc::clone(code))
    }

    /// Number of cached codes
    pub fn len(&self) -> usize {
        self.codes.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether the cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops every cached code
    pub fn clear(&self) {
        self.codes
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_same_spec_shares_code() {
        let cache = CodeCache::default();
        let a = cache.get_or_build(CodeSpec::Cyclic { k: 4, t: 1 }).unwrap();
        let b = cache.get_or_build(CodeSpec::Cyclic { k: 4, t: 1 }).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        cache.get_or_build(CodeSpec::ParityCheck { k: 4 }).unwrap();
        assert_eq!(cache.len(), 2);
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_failures_are_not_cached() {
        let cache = CodeCache::new(EngineConfig::default());
        assert!(cache.get_or_build(CodeSpec::Bch { k: 500, s: 1 }).is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_concurrent_requests() {
        let cache = Arc::new(CodeCache::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                thread::spawn(move || cache.get_or_build(CodeSpec::Bch { k: 7, s: 2 }).unwrap())
            })
            .collect();
        let codes: Vec<Arc<Code>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(codes.iter().all(|c| Arc::ptr_eq(c, &codes[0])));
        assert_eq!(cache.len(), 1);
    }
}
