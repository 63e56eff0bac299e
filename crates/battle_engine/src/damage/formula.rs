//! Core damage formula.
//!
//! Every step truncates toward zero; there is no rounding anywhere in the
//! chain.

use crate::prng::DAMAGE_ROLLS;

/// Calculate base damage before modifiers.
///
/// Formula: `floor(floor(floor(2 * Level / 5 + 2) * BasePower * Attack / Defense) / 50) + 2`
///
/// # Arguments
/// * `level` - Attacker's level (1-100)
/// * `base_power` - Move's base power after BP modifiers
/// * `attack` - Effective attack stat
/// * `defense` - Effective defense stat
pub fn get_base_damage(level: u32, base_power: u32, attack: u32, defense: u32) -> u32 {
    // Avoid division by zero
    if defense == 0 {
        return 0;
    }

    let level_factor = 2 * level / 5 + 2;
    let numerator = level_factor as u64 * base_power as u64 * attack as u64;
    let after_defense = (numerator / defense as u64) as u32;
    after_defense / 50 + 2
}

/// Apply the random damage roll.
///
/// Roll index 0 is 85%, index 15 is 100%.
#[inline]
pub fn apply_random_roll(damage: u32, roll_index: u8) -> u32 {
    let roll = 85 + roll_index.min(DAMAGE_ROLLS - 1) as u32;
    damage * roll / 100
}

/// Apply type effectiveness on the 4-scale.
#[inline]
pub fn apply_effectiveness(damage: u32, effectiveness: u8) -> u32 {
    damage * effectiveness as u32 / 4
}
