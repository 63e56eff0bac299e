//! Final damage multipliers, applied after type effectiveness.

use crate::damage::Modifier;
use crate::state::Combatant;
use crate::types::NEUTRAL;

/// Tinted Lens: 2x on not-very-effective hits
pub fn tinted_lens(_attacker: &Combatant, _defender: &Combatant, effectiveness: u8) -> Modifier {
    if effectiveness > 0 && effectiveness < NEUTRAL {
        Modifier::DOUBLE
    } else {
        Modifier::ONE
    }
}

/// Multiscale: 0.5x while at full HP
pub fn multiscale(defender: &Combatant, _attacker: &Combatant, _effectiveness: u8) -> Modifier {
    if defender.hp == defender.max_hp() {
        Modifier::HALF
    } else {
        Modifier::ONE
    }
}

/// Filter / Solid Rock: 0.75x on super-effective hits
pub fn filter(_defender: &Combatant, _attacker: &Combatant, effectiveness: u8) -> Modifier {
    if effectiveness > NEUTRAL {
        Modifier::FILTER
    } else {
        Modifier::ONE
    }
}
