//! Configuration carried by every collection.

use crate::errors::{CollectError, CollectResult, ErrorKind};

/// Default separator between path segments.
pub const FIELD_SEPARATOR: char = '.';
/// Default wildcard path segment.
pub const WILDCARD: char = '*';
/// Default number of significant digits `sum` rounds to.
pub const SUM_PRECISION: usize = 12;

const MAX_SUM_PRECISION: usize = 17;

/// Settings that shape path resolution and numeric aggregation.
///
/// A collection holds its own `CollectConfig` and passes it on to every
/// collection it derives, so a custom separator chosen at construction
/// applies to the whole chain.
///
/// # Examples
///
/// ```rust
/// use stacks_collect::config::CollectConfig;
///
/// let config = CollectConfig::builder()
///     .separator('/')
///     .sum_precision(15)
///     .build()
///     .unwrap();
/// assert_eq!(config.separator(), '/');
/// assert_eq!(config.wildcard(), '*');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollectConfig {
    separator: char,
    wildcard: char,
    sum_precision: usize,
}

impl Default for CollectConfig {
    fn default() -> Self {
        CollectConfig {
            separator: FIELD_SEPARATOR,
            wildcard: WILDCARD,
            sum_precision: SUM_PRECISION,
        }
    }
}

impl CollectConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CollectConfigBuilder {
        CollectConfigBuilder::new()
    }

    /// Separator between path segments.
    pub fn separator(&self) -> char {
        self.separator
    }

    /// Path segment that fans out over every element.
    pub fn wildcard(&self) -> char {
        self.wildcard
    }

    /// Significant digits `sum` rounds its result to.
    pub fn sum_precision(&self) -> usize {
        self.sum_precision
    }
}

/// Builder for [`CollectConfig`].
///
/// Setters never fail; the settings are validated together in
/// [`CollectConfigBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct CollectConfigBuilder {
    config: CollectConfig,
}

impl CollectConfigBuilder {
    pub fn new() -> Self {
        CollectConfigBuilder {
            config: CollectConfig::default(),
        }
    }

    /// Sets the separator between path segments.
    pub fn separator(mut self, separator: char) -> Self {
        self.config.separator = separator;
        self
    }

    /// Sets the wildcard path segment.
    pub fn wildcard(mut self, wildcard: char) -> Self {
        self.config.wildcard = wildcard;
        self
    }

    /// Sets the number of significant digits `sum` rounds to.
    pub fn sum_precision(mut self, digits: usize) -> Self {
        self.config.sum_precision = digits;
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the separator and the wildcard are the
    /// same character, or if the sum precision is outside `1..=17`.
    pub fn build(self) -> CollectResult<CollectConfig> {
        let config = self.config;
        if config.separator == config.wildcard {
            log::error!(
                "Path separator '{}' cannot also be the wildcard",
                config.separator
            );
            return Err(CollectError::new(
                &format!(
                    "Path separator '{}' cannot also be the wildcard",
                    config.separator
                ),
                ErrorKind::InvalidArgument,
            ));
        }

        if config.sum_precision == 0 || config.sum_precision > MAX_SUM_PRECISION {
            log::error!(
                "Sum precision must be between 1 and {}, got {}",
                MAX_SUM_PRECISION,
                config.sum_precision
            );
            return Err(CollectError::new(
                &format!(
                    "Sum precision must be between 1 and {}, got {}",
                    MAX_SUM_PRECISION, config.sum_precision
                ),
                ErrorKind::InvalidArgument,
            ));
        }
        Ok(config)
    }
}
