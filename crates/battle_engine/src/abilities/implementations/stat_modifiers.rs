//! Attack/Defense stat modifying abilities.
//!
//! Called via `OnModifyAttack` or `OnModifyDefense` during stat calculation.

use crate::damage::Modifier;
use crate::moves::MoveCategory;
use crate::state::Combatant;
use crate::types::Type;

/// Pure Power / Huge Power: 2x Attack
pub fn huge_power(
    _attacker: &Combatant,
    _defender: &Combatant,
    _move_type: Type,
    category: MoveCategory,
) -> Modifier {
    if category == MoveCategory::Physical {
        Modifier::DOUBLE
    } else {
        Modifier::ONE
    }
}

/// Guts: 1.5x Attack when statused
pub fn guts(
    attacker: &Combatant,
    _defender: &Combatant,
    _move_type: Type,
    category: MoveCategory,
) -> Modifier {
    if attacker.has_status() && category == MoveCategory::Physical {
        Modifier::ONE_POINT_FIVE
    } else {
        Modifier::ONE
    }
}

/// 1.5x for moves of `pinch_type` at or below 1/3 HP
#[inline]
fn pinch(attacker: &Combatant, move_type: Type, pinch_type: Type) -> Modifier {
    if move_type == pinch_type && attacker.hp_at_or_below(1, 3) {
        Modifier::ONE_POINT_FIVE
    } else {
        Modifier::ONE
    }
}

pub fn blaze(attacker: &Combatant, _defender: &Combatant, move_type: Type, _category: MoveCategory) -> Modifier {
    pinch(attacker, move_type, Type::Fire)
}

pub fn torrent(attacker: &Combatant, _defender: &Combatant, move_type: Type, _category: MoveCategory) -> Modifier {
    pinch(attacker, move_type, Type::Water)
}

pub fn overgrow(attacker: &Combatant, _defender: &Combatant, move_type: Type, _category: MoveCategory) -> Modifier {
    pinch(attacker, move_type, Type::Grass)
}

pub fn swarm(attacker: &Combatant, _defender: &Combatant, move_type: Type, _category: MoveCategory) -> Modifier {
    pinch(attacker, move_type, Type::Bug)
}

/// Thick Fat: the holder's defending stat is doubled against Fire and Ice,
/// which halves the damage taken.
pub fn thick_fat(
    _defender: &Combatant,
    _attacker: &Combatant,
    move_type: Type,
    _category: MoveCategory,
) -> Modifier {
    if matches!(move_type, Type::Fire | Type::Ice) {
        Modifier::DOUBLE
    } else {
        Modifier::ONE
    }
}

/// Marvel Scale: 1.5x Defense while statused
pub fn marvel_scale(
    defender: &Combatant,
    _attacker: &Combatant,
    _move_type: Type,
    category: MoveCategory,
) -> Modifier {
    if defender.has_status() && category == MoveCategory::Physical {
        Modifier::ONE_POINT_FIVE
    } else {
        Modifier::ONE
    }
}
