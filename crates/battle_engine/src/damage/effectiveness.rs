//! Type effectiveness with immunity overrides.

use crate::field::Field;
use crate::state::Combatant;
use crate::types::{single_effectiveness, Type, NEUTRAL};

/// Effectiveness on the 4-scale (0=immune, 1=0.25x, 2=0.5x, 4=1x, 8=2x, 16=4x).
///
/// Overrides on top of the chart:
/// - typeless moves are always neutral
/// - grounded Flying types (Gravity) take neutral damage from Ground moves
/// - the defender's ability may grant a type immunity (Levitate)
pub fn calculate_effectiveness(
    move_type: Type,
    typeless: bool,
    defender: &Combatant,
    field: &Field,
) -> u8 {
    if typeless {
        return NEUTRAL;
    }

    let grounded_by_gravity = move_type == Type::Ground && field.gravity();
    if !grounded_by_gravity
        && defender
            .ability
            .hooks()
            .on_type_immunity
            .is_some_and(|immune| immune(move_type))
    {
        return 0;
    }

    let single = |defending: Type| -> u8 {
        let eff = single_effectiveness(move_type, defending);
        if eff == 0 && grounded_by_gravity && defending == Type::Flying {
            NEUTRAL
        } else {
            eff
        }
    };

    let [t1, t2] = defender.types;
    let eff1 = single(t1);
    let eff2 = if t2 != t1 { single(t2) } else { NEUTRAL };

    // Combine effectiveness (4 scale: 4*4/4 = 4)
    (eff1 as u16 * eff2 as u16 / NEUTRAL as u16) as u8
}
