//! Growable list configuration parameters.

use tabula_core::{Bounds2D, CollectionError};

/// Configuration for a [`List2D`](crate::List2D).
///
/// Controls the initial allocation and the growth policy. Validated when
/// the list is constructed; immutable for the list's lifetime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListConfig {
    /// Capacity allocated up front.
    ///
    /// Default: 16x16.
    pub initial_capacity: Bounds2D,

    /// Multiplier applied to a requested size that exceeds the current
    /// capacity in one dimension.
    ///
    /// Default: 2, which makes repeated single-row or single-column
    /// appends amortized O(1). Must be at least 1; a factor of 1 grows
    /// exactly to the requested size.
    pub growth_factor: usize,
}

impl ListConfig {
    /// Default rows and columns of the initial capacity.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the given initial capacity and default growth.
    pub fn new(initial_capacity: Bounds2D) -> Self {
        Self {
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Check the configuration.
    ///
    /// Returns [`CollectionError::InvalidArgument`] if `growth_factor` is 0.
    pub fn validate(&self) -> Result<(), CollectionError> {
        if self.growth_factor == 0 {
            return Err(CollectionError::invalid_argument(
                "growth_factor",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self::new(Bounds2D::new(
            Self::DEFAULT_CAPACITY,
            Self::DEFAULT_CAPACITY,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_capacity_is_16_by_16() {
        let config = ListConfig::default();
        assert_eq!(config.initial_capacity, Bounds2D::new(16, 16));
        assert_eq!(config.growth_factor, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_growth_factor_rejected() {
        let config = ListConfig {
            growth_factor: 0,
            ..ListConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(CollectionError::InvalidArgument {
                argument: "growth_factor",
                ..
            })
        ));
    }
}
