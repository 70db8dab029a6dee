//! Treap configuration module.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::error::{SpatialError, SpatialResult};

/// Default per-axis branching factor: binary splits, eight children per region.
pub const DEFAULT_BRANCHING_FACTOR: u64 = 2;

/// Largest supported per-axis branching factor.
pub const MAX_BRANCHING_FACTOR: u64 = 16;

/// Configuration used when building a [`crate::K3Treap`].
///
/// A cloneable handle; clones share the same settings.
///
/// # Example
///
/// ```rust
/// use topk_spatial::TreapConfig;
///
/// let config = TreapConfig::new().with_branching_factor(4);
/// assert_eq!(config.branching_factor(), 4);
/// ```
#[derive(Clone)]
pub struct TreapConfig {
    inner: Arc<TreapConfigInner>,
}

struct TreapConfigInner {
    /// Per-axis branching factor `k`.
    branching_factor: AtomicU64,
}

impl TreapConfig {
    /// Creates a configuration with the default branching factor of 2.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TreapConfigInner::new()),
        }
    }

    #[inline]
    pub fn branching_factor(&self) -> u64 {
        self.inner.branching_factor.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn set_branching_factor(&self, k: u64) {
        self.inner.branching_factor.store(k, Ordering::Relaxed);
    }

    /// Builder-style method for chaining.
    #[inline]
    pub fn with_branching_factor(self, k: u64) -> Self {
        self.set_branching_factor(k);
        self
    }

    /// Checks that the settings describe a buildable treap.
    pub fn validate(&self) -> SpatialResult<()> {
        let k = self.branching_factor();
        if !(2..=MAX_BRANCHING_FACTOR).contains(&k) {
            return Err(SpatialError::InvalidConfiguration(format!(
                "branching factor must be in [2, {}], got {}",
                MAX_BRANCHING_FACTOR, k
            )));
        }
        Ok(())
    }
}

impl Default for TreapConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TreapConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreapConfig")
            .field("branching_factor", &self.branching_factor())
            .finish()
    }
}

impl TreapConfigInner {
    fn new() -> Self {
        Self {
            branching_factor: AtomicU64::new(DEFAULT_BRANCHING_FACTOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_treap_config_default() {
        let config = TreapConfig::default();
        assert_eq!(config.branching_factor(), DEFAULT_BRANCHING_FACTOR);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_treap_config_clones_share_settings() {
        let config = TreapConfig::new();
        let clone = config.clone();
        clone.set_branching_factor(3);
        assert_eq!(config.branching_factor(), 3);
    }

    #[test]
    fn test_treap_config_rejects_degenerate_factor() {
        let config = TreapConfig::new().with_branching_factor(1);
        assert!(matches!(
            config.validate(),
            Err(SpatialError::InvalidConfiguration(_))
        ));
        let config = TreapConfig::new().with_branching_factor(MAX_BRANCHING_FACTOR + 1);
        assert!(config.validate().is_err());
    }
}
