//! End-of-turn phase.

use rand::RngCore;

use super::lose_hp;
use super::order::speed_order;
use crate::conditions::{end_of_turn_damage, Status};
use crate::events::{BattleEvent, DamageCause, HealCause};
use crate::field::{Terrain, Weather};
use crate::state::{BattleState, CombatantRef, SideId};
use crate::types::TypeImmunities;

/// Residual effects in a fixed order: weather chip, then per combatant in
/// speed order (status, item, terrain), then `on_end_of_turn` ability hooks
/// in side order, then field and volatile timers.
pub fn end_of_turn(state: &mut BattleState, rng: &mut dyn RngCore, events: &mut Vec<BattleEvent>) {
    tracing::debug!(turn = state.turn, "end of turn");
    let order = speed_order(state, rng);

    if state.field.weather == Weather::Sand {
        for &who in &order {
            sandstorm(state, who, events);
        }
    }

    for &who in &order {
        status_damage(state, who, events);
        item_residual(state, who, events);
        grassy_heal(state, who, events);
    }

    for side in SideId::BOTH {
        let who = state.active_ref(side);
        let combatant = state.combatant(who);
        let on_end_of_turn = combatant.ability.hooks().on_end_of_turn;
        if let (false, Some(hook)) = (combatant.is_fainted(), on_end_of_turn) {
            tracing::trace!(%who, "on_end_of_turn");
            hook(state, who, events);
        }
    }

    for effect in state.field.end_of_turn() {
        events.push(BattleEvent::FieldEnded { effect });
    }

    for side in SideId::BOTH {
        let target = state.active_ref(side);
        for volatile in state.combatant_mut(target).tick_volatiles() {
            events.push(BattleEvent::VolatileEnded { target, volatile });
        }
    }
}

fn sandstorm(state: &mut BattleState, who: CombatantRef, events: &mut Vec<BattleEvent>) {
    let combatant = state.combatant(who);
    let immune = combatant
        .types
        .iter()
        .any(|t| t.immunities().contains(TypeImmunities::SANDSTORM));
    if immune {
        return;
    }
    let amount = combatant.fraction_of_max(1, 16);
    lose_hp(state, who, amount, DamageCause::Sandstorm, events);
}

fn status_damage(state: &mut BattleState, who: CombatantRef, events: &mut Vec<BattleEvent>) {
    let combatant = state.combatant_mut(who);
    let Some((status, amount)) = end_of_turn_damage(combatant) else {
        return;
    };
    let cause = match status {
        Status::Burn => DamageCause::Burn,
        Status::Toxic => DamageCause::Toxic,
        _ => DamageCause::Poison,
    };
    events.push(BattleEvent::ResidualDamage {
        target: who,
        amount,
        remaining: combatant.hp,
        cause,
    });
}

fn item_residual(state: &mut BattleState, who: CombatantRef, events: &mut Vec<BattleEvent>) {
    let combatant = state.combatant_mut(who);
    if combatant.is_fainted() {
        return;
    }
    let Some(amount) = combatant
        .item
        .hooks()
        .on_end_of_turn
        .and_then(|hook| hook(combatant))
    else {
        return;
    };
    let gained = combatant.heal(amount);
    if gained > 0 {
        events.push(BattleEvent::Healed {
            target: who,
            amount: gained,
            remaining: combatant.hp,
            cause: HealCause::Leftovers,
        });
    }
}

/// Grassy Terrain heals grounded combatants 1/16.
fn grassy_heal(state: &mut BattleState, who: CombatantRef, events: &mut Vec<BattleEvent>) {
    if state.field.terrain != Terrain::Grassy {
        return;
    }
    let grounded = state.combatant(who).is_grounded(&state.field);
    let combatant = state.combatant_mut(who);
    if !grounded || combatant.is_fainted() {
        return;
    }
    let gained = combatant.heal(combatant.fraction_of_max(1, 16));
    if gained > 0 {
        events.push(BattleEvent::Healed {
            target: who,
            amount: gained,
            remaining: combatant.hp,
            cause: HealCause::GrassyTerrain,
        });
    }
}
