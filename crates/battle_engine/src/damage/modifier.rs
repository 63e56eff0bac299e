//! Type-safe damage modifier.

use serde::{Deserialize, Serialize};

/// A fixed-point multiplier (4096 scale).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Modifier(pub u16);

impl Default for Modifier {
    fn default() -> Self {
        Self::ONE
    }
}

impl Modifier {
    /// 1.0x modifier (4096).
    pub const ONE: Self = Self(4096);

    /// 0.5x modifier (2048).
    pub const HALF: Self = Self(2048);

    /// 2.0x modifier (8192).
    pub const DOUBLE: Self = Self(8192);

    /// 1.5x modifier (6144).
    pub const ONE_POINT_FIVE: Self = Self(6144);

    /// 1.3x terrain boost (5325).
    pub const ONE_POINT_THREE: Self = Self(5325);

    /// Life Orb modifier (5324, approx 1.3x).
    pub const LIFE_ORB: Self = Self(5324);

    /// Expert Belt (4915, approx 1.2x).
    pub const EXPERT_BELT: Self = Self(4915);

    /// Filter/Solid Rock (0.75x).
    pub const FILTER: Self = Self(3072);

    /// Create a new modifier from a raw u16 value.
    pub const fn new(val: u16) -> Self {
        Self(val)
    }

    /// Get the raw u16 value.
    pub const fn val(self) -> u16 {
        self.0
    }

    /// Apply to a value, truncating: `floor(value * self / 4096)`.
    #[inline]
    pub const fn apply(self, value: u32) -> u32 {
        ((value as u64 * self.0 as u64) / 4096) as u32
    }
}

/// Create a Modifier from a float literal at compile time.
///
/// Rounds to the nearest integer: `round(val * 4096)`.
///
/// # Example
/// ```rust
/// use battle_engine::modifier;
/// const MOD: battle_engine::damage::Modifier = modifier!(1.5); // Modifier(6144)
/// assert_eq!(MOD.val(), 6144);
/// ```
#[macro_export]
macro_rules! modifier {
    ($val:expr) => {
        $crate::damage::Modifier::new(($val * 4096.0 + 0.5) as u16)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_truncates() {
        assert_eq!(Modifier::ONE_POINT_FIVE.apply(99), 148);
        assert_eq!(Modifier::HALF.apply(41), 20);
        assert_eq!(Modifier::ONE.apply(12345), 12345);
    }

    #[test]
    fn test_macro() {
        assert_eq!(crate::modifier!(1.5), Modifier::ONE_POINT_FIVE);
        assert_eq!(crate::modifier!(0.75), Modifier::FILTER);
    }
}
