//! Speed-modifying abilities.
//!
//! Called via `OnModifySpeed` during effective speed calculation.

use crate::conditions::apply_boosts;
use crate::damage::Modifier;
use crate::events::BattleEvent;
use crate::field::{Field, Weather};
use crate::state::{BattleState, Combatant, CombatantRef};
use crate::stats::BoostStat;

#[inline]
fn double_in(field: &Field, weather: Weather) -> Modifier {
    if field.weather == weather {
        Modifier::DOUBLE
    } else {
        Modifier::ONE
    }
}

/// Chlorophyll: 2x Speed in Sun
pub fn chlorophyll(_holder: &Combatant, field: &Field) -> Modifier {
    double_in(field, Weather::Sun)
}

/// Swift Swim: 2x Speed in Rain
pub fn swift_swim(_holder: &Combatant, field: &Field) -> Modifier {
    double_in(field, Weather::Rain)
}

/// Sand Rush: 2x Speed in Sandstorm
pub fn sand_rush(_holder: &Combatant, field: &Field) -> Modifier {
    double_in(field, Weather::Sand)
}

/// Speed Boost: +1 Spe at the end of every turn
pub fn speed_boost(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    if state.combatant(owner).boosts.get(BoostStat::Spe) >= crate::stats::MAX_STAGE {
        return;
    }
    events.push(BattleEvent::AbilityActivated {
        owner,
        ability: state.combatant(owner).ability.name(),
    });
    apply_boosts(state, owner, &[(BoostStat::Spe, 1)], events);
}
