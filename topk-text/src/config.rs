//! Document index configuration module.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;

use crate::error::{TextError, TextResult};

/// Default number of depth strata in the tails layout.
pub const DEFAULT_LEVELS: usize = 10;

/// Default amount added to every stored weight when it is reported.
pub const DEFAULT_WEIGHT_BIAS: u64 = 0;

/// Configuration of a [`crate::TopDownIndex`].
///
/// A cloneable, thread-safe configuration holder. Clones share settings.
///
/// # Example
///
/// ```rust
/// use topk_text::TextIndexConfig;
///
/// // stored weights are occurrence counts minus one
/// let config = TextIndexConfig::new()
///     .with_levels(8)
///     .with_weight_bias(1);
/// assert_eq!(config.levels(), 8);
/// ```
#[derive(Clone)]
pub struct TextIndexConfig {
    inner: Arc<TextIndexConfigInner>,
}

/// Internal configuration storage.
struct TextIndexConfigInner {
    /// Number of depth strata the tails bit vector is cut into.
    levels: AtomicUsize,

    /// Added to the stored weight of every resolved interval.
    weight_bias: AtomicU64,
}

impl TextIndexConfig {
    /// Creates a configuration with default values.
    ///
    /// Defaults:
    /// - Levels: 10
    /// - Weight bias: 0
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(TextIndexConfigInner::new()),
        }
    }

    /// Returns the number of depth strata.
    #[inline]
    pub fn levels(&self) -> usize {
        self.inner.levels.load(Ordering::Relaxed)
    }

    /// Sets the number of depth strata.
    #[inline]
    pub fn set_levels(&self, levels: usize) {
        self.inner.levels.store(levels, Ordering::Relaxed);
    }

    /// Sets the number of depth strata.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_levels(self, levels: usize) -> Self {
        self.set_levels(levels);
        self
    }

    /// Returns the weight bias.
    #[inline]
    pub fn weight_bias(&self) -> u64 {
        self.inner.weight_bias.load(Ordering::Relaxed)
    }

    /// Sets the weight bias.
    #[inline]
    pub fn set_weight_bias(&self, bias: u64) {
        self.inner.weight_bias.store(bias, Ordering::Relaxed);
    }

    /// Sets the weight bias.
    /// Builder-style method for chaining.
    #[inline]
    pub fn with_weight_bias(self, bias: u64) -> Self {
        self.set_weight_bias(bias);
        self
    }

    pub fn validate(&self) -> TextResult<()> {
        if self.levels() == 0 {
            return Err(TextError::InvalidConfiguration(
                "levels must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for TextIndexConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextIndexConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextIndexConfig")
            .field("levels", &self.levels())
            .field("weight_bias", &self.weight_bias())
            .finish()
    }
}

impl TextIndexConfigInner {
    fn new() -> Self {
        Self {
            levels: AtomicUsize::new(DEFAULT_LEVELS),
            weight_bias: AtomicU64::new(DEFAULT_WEIGHT_BIAS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_index_config_new() {
        let config = TextIndexConfig::new();
        assert_eq!(config.levels(), 10);
        assert_eq!(config.weight_bias(), 0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_text_index_config_builder() {
        let config = TextIndexConfig::new().with_levels(4).with_weight_bias(1);
        assert_eq!(config.levels(), 4);
        assert_eq!(config.weight_bias(), 1);
    }

    #[test]
    fn test_text_index_config_clone_shares_state() {
        let config = TextIndexConfig::new();
        let clone = config.clone();
        clone.set_levels(3);
        assert_eq!(config.levels(), 3);
    }

    #[test]
    fn test_text_index_config_zero_levels_invalid() {
        let config = TextIndexConfig::new().with_levels(0);
        assert!(matches!(
            config.validate(),
            Err(TextError::InvalidConfiguration(_))
        ));
    }
}
