//! RNG decision points.
//!
//! Every random branch in the engine goes through one of these functions so
//! the number and order of draws is fixed for a given sequence of events.
//! All of them take the caller's generator; the engine owns no RNG state.

use rand::Rng;

use crate::rules::Ruleset;

/// Number of damage rolls (85%..=100%).
pub const DAMAGE_ROLLS: u8 = 16;

/// Percent roll. 100 or more always succeeds without consuming a draw.
#[inline]
pub fn chance<R: Rng + ?Sized>(rng: &mut R, percent: u8) -> bool {
    if percent >= 100 {
        return true;
    }
    if percent == 0 {
        return false;
    }
    rng.gen_range(0..100u8) < percent
}

/// `num`/`den` roll.
#[inline]
pub fn ratio<R: Rng + ?Sized>(rng: &mut R, num: u32, den: u32) -> bool {
    if num >= den {
        return true;
    }
    rng.gen_range(0..den) < num
}

/// Damage roll index: 0 = 85%, 15 = 100%.
#[inline]
pub fn damage_roll<R: Rng + ?Sized>(rng: &mut R) -> u8 {
    rng.gen_range(0..DAMAGE_ROLLS)
}

/// Critical hit roll for a crit stage.
///
/// Stage 0: 1/24, 1: 1/8, 2: 1/2, 3+: always.
pub fn crit_roll<R: Rng + ?Sized>(rng: &mut R, stage: u8) -> bool {
    match stage {
        0 => ratio(rng, 1, 24),
        1 => ratio(rng, 1, 8),
        2 => ratio(rng, 1, 2),
        _ => true,
    }
}

/// Accuracy roll against a percentage threshold (may exceed 100).
#[inline]
pub fn accuracy_roll<R: Rng + ?Sized>(rng: &mut R, threshold: u32) -> bool {
    if threshold >= 100 {
        return true;
    }
    rng.gen_range(0..100u32) < threshold
}

/// Sleep counter drawn at infliction.
pub fn sleep_counter<R: Rng + ?Sized>(rng: &mut R, rules: &Ruleset) -> u8 {
    let (lo, hi) = rules.sleep_counter;
    if hi <= lo {
        return lo.max(1);
    }
    rng.gen_range(lo..=hi)
}
