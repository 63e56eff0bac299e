//! Switching combatants in and out.

use crate::conditions::Status;
use crate::events::BattleEvent;
use crate::state::{BattleState, CombatantRef, SideId};

/// Withdraw the active combatant: stages and volatiles are lost.
///
/// A fainted combatant leaves silently; its faint was already reported.
pub fn switch_out(state: &mut BattleState, side: SideId, events: &mut Vec<BattleEvent>) {
    let target = state.active_ref(side);
    let outgoing = state.combatant_mut(target);
    outgoing.boosts.clear();
    outgoing.clear_volatiles();
    if !outgoing.is_fainted() {
        events.push(BattleEvent::SwitchedOut { target });
    }
}

/// Make roster `slot` the active combatant and announce it.
///
/// Switch-in hooks are not run here; see [`run_switch_in_hook`].
pub fn switch_in(state: &mut BattleState, side: SideId, slot: u8, events: &mut Vec<BattleEvent>) {
    state.side_mut(side).active = slot;
    let target = state.active_ref(side);
    let incoming = state.combatant_mut(target);

    if let Some(status) = incoming.status.as_mut() {
        if status.id == Status::Toxic {
            status.payload = 1;
        }
    }

    tracing::debug!(%target, species = incoming.name(), "switched in");
    events.push(BattleEvent::SwitchedIn {
        target,
        species: incoming.name(),
        hp: incoming.hp,
        max_hp: incoming.max_hp(),
    });
}

pub fn run_switch_in_hook(state: &mut BattleState, who: CombatantRef, events: &mut Vec<BattleEvent>) {
    let combatant = state.combatant(who);
    if combatant.is_fainted() {
        return;
    }
    if let Some(hook) = combatant.ability.hooks().on_switch_in {
        tracing::trace!(%who, ability = combatant.ability.name(), "on_switch_in");
        hook(state, who, events);
    }
}

/// Voluntary switch during a turn: out, in, then the newcomer's hook.
pub fn switch(state: &mut BattleState, side: SideId, slot: u8, events: &mut Vec<BattleEvent>) {
    switch_out(state, side, events);
    switch_in(state, side, slot, events);
    let who = state.active_ref(side);
    run_switch_in_hook(state, who, events);
}
