//! Fail-fast environment version dispatch

use badseeds_core::{BadSeedsError, ShapingFn};

use crate::cart_seed::{CartSeed, CartSeedConfig};

/// Recognized CartSeed environment versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvVersion {
    /// Per-measurement scoring
    V1,
    /// Completion scoring
    V2,
}

impl TryFrom<u32> for EnvVersion {
    type Error = BadSeedsError;

    fn try_from(version: u32) -> Result<Self, Self::Error> {
        match version {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            // A wrong version must not silently run with wrong semantics.
            v => Err(BadSeedsError::UnsupportedVersion(v)),
        }
    }
}

/// Construct a CartSeed environment for a version identifier.
///
/// Unknown versions fail fast at configuration time, unlike unknown scoring
/// keys which fall back to the built-in default reward.
pub fn build_cart_seed(
    version: u32,
    config: CartSeedConfig,
    shaping: Option<ShapingFn>,
) -> badseeds_core::Result<CartSeed> {
    match EnvVersion::try_from(version)? {
        EnvVersion::V1 => CartSeed::v1(config, shaping),
        EnvVersion::V2 => CartSeed::v2(config, shaping),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_versions_build() {
        assert!(build_cart_seed(1, CartSeedConfig::default(), None).is_ok());
        assert!(build_cart_seed(2, CartSeedConfig::default(), None).is_ok());
    }

    #[test]
    fn unknown_version_fails_fast() {
        let err = build_cart_seed(3, CartSeedConfig::default(), None).unwrap_err();
        assert!(matches!(err, BadSeedsError::UnsupportedVersion(3)));
    }
}
