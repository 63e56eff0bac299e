//! Switch-in abilities that change stat stages.

use crate::conditions::apply_boosts;
use crate::events::BattleEvent;
use crate::state::{BattleState, CombatantRef};
use crate::stats::{BattleStat, BoostStat};

/// Intimidate: -1 Atk to the active foe.
pub fn intimidate(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    let target = state.foe_of(owner);
    if state.combatant(target).is_fainted() {
        return;
    }
    events.push(BattleEvent::AbilityActivated {
        owner,
        ability: state.combatant(owner).ability.name(),
    });
    apply_boosts(state, target, &[(BoostStat::Atk, -1)], events);
}

/// Download: +1 Atk if the foe's Def is lower than its SpD, otherwise +1 SpA.
pub fn download(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    let foe = state.combatant(state.foe_of(owner));
    if foe.is_fainted() {
        return;
    }
    let def = foe.stat(BattleStat::Def);
    let spd = foe.stat(BattleStat::SpD);
    let stat = if def < spd { BoostStat::Atk } else { BoostStat::SpA };

    events.push(BattleEvent::AbilityActivated {
        owner,
        ability: state.combatant(owner).ability.name(),
    });
    apply_boosts(state, owner, &[(stat, 1)], events);
}
