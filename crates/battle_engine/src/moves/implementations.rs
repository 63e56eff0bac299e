//! Move hook implementations.

use crate::conditions::Status;
use crate::field::{Field, Weather};
use crate::moves::Move;
use crate::state::Combatant;
use crate::types::Type;

// ============================================================================
// Conditional doubling
// ============================================================================

/// Venoshock: 2x if target is poisoned
pub fn venoshock_condition(
    _attacker: &Combatant,
    defender: &Combatant,
    _field: &Field,
    _move_data: &'static Move,
) -> bool {
    defender.status_id().is_some_and(Status::is_poison)
}

/// Hex: 2x if target has any persistent status
pub fn hex_condition(
    _attacker: &Combatant,
    defender: &Combatant,
    _field: &Field,
    _move_data: &'static Move,
) -> bool {
    defender.has_status()
}

/// Brine: 2x if target is at or below 50% HP
pub fn brine_condition(
    _attacker: &Combatant,
    defender: &Combatant,
    _field: &Field,
    _move_data: &'static Move,
) -> bool {
    defender.hp_at_or_below(1, 2)
}

/// Facade: 2x if burned, poisoned or paralyzed
pub fn facade_condition(
    attacker: &Combatant,
    _defender: &Combatant,
    _field: &Field,
    _move_data: &'static Move,
) -> bool {
    matches!(
        attacker.status_id(),
        Some(Status::Burn | Status::Poison | Status::Toxic | Status::Paralysis)
    )
}

// ============================================================================
// Weather Ball: type follows the weather, 2x power in any weather
// ============================================================================

pub fn on_modify_type_weather_ball(_attacker: &Combatant, field: &Field, base_type: Type) -> Type {
    match field.weather {
        Weather::Sun => Type::Fire,
        Weather::Rain => Type::Water,
        Weather::Sand => Type::Rock,
        Weather::Snow => Type::Ice,
        Weather::None => base_type,
    }
}

pub fn on_modify_base_power_weather_ball(
    _attacker: &Combatant,
    _defender: &Combatant,
    field: &Field,
    _move_data: &'static Move,
    bp: u16,
) -> u16 {
    if field.weather == Weather::None {
        bp
    } else {
        bp * 2
    }
}

// Eruption / Water Spout: HP-based
pub fn eruption_power(
    attacker: &Combatant,
    _defender: &Combatant,
    _field: &Field,
    move_data: &'static Move,
    _bp: u16,
) -> u16 {
    let current_hp = attacker.hp as u32;
    let max_hp = attacker.max_hp() as u32;
    (move_data.power as u32 * current_hp / max_hp.max(1)).max(1) as u16
}
