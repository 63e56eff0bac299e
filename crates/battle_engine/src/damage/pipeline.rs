//! Final damage phase.
//!
//! Order: Random → STAB → Effectiveness → Burn → Final mods (attacker
//! ability, defender ability, attacker item) → floor to 1. Weather and the
//! critical multiplier are applied to the base damage before this phase.

use super::formula::{apply_effectiveness, apply_random_roll};
use super::Modifier;
use crate::prng::DAMAGE_ROLLS;

/// Inputs to the final phase, resolved once per calculation.
#[derive(Clone, Copy, Debug)]
pub struct FinalPhase {
    pub effectiveness: u8,
    pub has_stab: bool,
    pub burned: bool,
    /// Applied in order, truncating after each.
    pub final_mods: [Modifier; 3],
}

/// Apply burn damage reduction (halves physical damage).
#[inline]
pub fn apply_burn(damage: u32, burned: bool) -> u32 {
    if burned {
        damage / 2
    } else {
        damage
    }
}

/// Clamp final damage to valid range (min 1, max u16::MAX).
#[inline]
pub fn clamp_damage(damage: u32) -> u16 {
    damage.clamp(1, u16::MAX as u32) as u16
}

/// Damage for one roll index.
pub fn compute_roll(base_damage: u32, roll_index: u8, phase: &FinalPhase) -> u16 {
    if phase.effectiveness == 0 {
        return 0;
    }

    let mut damage = apply_random_roll(base_damage, roll_index);
    if phase.has_stab {
        damage = Modifier::ONE_POINT_FIVE.apply(damage);
    }
    damage = apply_effectiveness(damage, phase.effectiveness);
    damage = apply_burn(damage, phase.burned);
    for modifier in phase.final_mods {
        damage = modifier.apply(damage);
    }
    clamp_damage(damage)
}

/// All 16 final damage values from base damage.
pub fn compute_final_damage(base_damage: u32, phase: &FinalPhase) -> [u16; DAMAGE_ROLLS as usize] {
    let mut rolls = [0u16; DAMAGE_ROLLS as usize];
    for (i, roll) in rolls.iter_mut().enumerate() {
        *roll = compute_roll(base_damage, i as u8, phase);
    }
    rolls
}
