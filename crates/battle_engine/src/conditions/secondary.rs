//! Secondary effects and the shared helpers that apply stage and status
//! changes with their events.

use rand::Rng;

use super::{inflict, EffectState, Status, Volatile};
use crate::events::BattleEvent;
use crate::moves::{EffectTarget, Secondary, SecondaryEffect};
use crate::prng;
use crate::state::{BattleState, CombatantRef};
use crate::stats::BoostStat;

/// Outcome of a secondary effect's chance roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryRoll {
    Triggered,
    NotTriggered,
}

pub fn roll_secondary<R: Rng + ?Sized>(rng: &mut R, chance: u8) -> SecondaryRoll {
    if prng::chance(rng, chance) {
        SecondaryRoll::Triggered
    } else {
        SecondaryRoll::NotTriggered
    }
}

/// Apply stage changes, emitting a change or a "won't go any further" event
/// per stat. Returns true if any stage moved.
pub fn apply_boosts(
    state: &mut BattleState,
    target: CombatantRef,
    changes: &[(BoostStat, i8)],
    events: &mut Vec<BattleEvent>,
) -> bool {
    let combatant = state.combatant_mut(target);
    let mut changed = false;
    for &(stat, delta) in changes {
        let applied = combatant.boosts.apply(stat, delta);
        if applied == 0 {
            events.push(BattleEvent::BoostCapped {
                target,
                stat,
                rising: delta > 0,
            });
        } else {
            changed = true;
            events.push(BattleEvent::BoostChanged {
                target,
                stat,
                delta: applied,
            });
        }
    }
    changed
}

/// Try to inflict a status. Failures are only reported when `report_failure`
/// is set (status moves report, secondary effects stay silent).
pub fn apply_status<R: Rng + ?Sized>(
    state: &mut BattleState,
    target: CombatantRef,
    status: Status,
    source: Option<CombatantRef>,
    rng: &mut R,
    events: &mut Vec<BattleEvent>,
    report_failure: bool,
) -> bool {
    let combatant = &mut state.sides[target.side.index()].roster[target.slot as usize];
    match inflict(combatant, status, source, rng, &state.rules) {
        Ok(()) => {
            events.push(BattleEvent::StatusInflicted { target, status });
            true
        }
        Err(reason) => {
            if report_failure {
                events.push(BattleEvent::StatusFailed {
                    target,
                    status,
                    reason,
                });
            }
            false
        }
    }
}

/// Roll and apply a move's secondary effect after it dealt damage.
pub fn apply_secondary<R: Rng + ?Sized>(
    state: &mut BattleState,
    user: CombatantRef,
    target: CombatantRef,
    secondary: &Secondary,
    rng: &mut R,
    events: &mut Vec<BattleEvent>,
) {
    if roll_secondary(rng, secondary.chance) == SecondaryRoll::NotTriggered {
        return;
    }

    let recipient = match secondary.target {
        EffectTarget::User => user,
        EffectTarget::Foe => target,
    };
    if state.combatant(recipient).is_fainted() {
        return;
    }

    match secondary.effect {
        SecondaryEffect::Status(status) => {
            apply_status(state, recipient, status, Some(user), rng, events, false);
        }
        SecondaryEffect::Boosts(changes) => {
            apply_boosts(state, recipient, changes, events);
        }
        SecondaryEffect::Flinch => {
            let flinch = EffectState::new(Volatile::Flinch).with_source(Some(user));
            state.combatant_mut(recipient).add_volatile(flinch);
        }
    }
}
