//! Action ordering and speed ties.

use std::cmp::Ordering;

use rand::seq::SliceRandom;
use rand::RngCore;

use super::Action;
use crate::conditions::Status;
use crate::damage::Modifier;
use crate::field::Field;
use crate::moves::MoveId;
use crate::rules::Ruleset;
use crate::state::{BattleState, Combatant, CombatantRef, SideId};
use crate::stats::{apply_boost, BattleStat, BoostStat};

/// Speed after stages, paralysis and ability multipliers.
pub fn effective_speed(combatant: &Combatant, field: &Field, rules: &Ruleset) -> u16 {
    let mut speed = apply_boost(
        combatant.stat(BattleStat::Spe),
        combatant.boosts.get(BoostStat::Spe),
    );
    if combatant.status_id() == Some(Status::Paralysis) {
        speed /= rules.paralysis_speed_divisor.max(1) as u16;
    }
    let factor = combatant
        .ability
        .hooks()
        .on_modify_speed
        .map_or(Modifier::ONE, |hook| hook(combatant, field));
    factor.apply(speed as u32).min(u16::MAX as u32) as u16
}

/// An action waiting to execute, with its sort keys fixed at queue time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Queued {
    pub side: SideId,
    pub action: Action,
    pub priority: i8,
    pub speed: u16,
}

impl Queued {
    pub fn new(state: &BattleState, side: SideId, action: Action) -> Self {
        let active = state.active(side);
        let priority = match action {
            Action::Move(slot) => active
                .move_id(slot as usize)
                .map_or(0, |id| id.data().priority),
            Action::Struggle => MoveId::Struggle.data().priority,
            Action::Switch(_) | Action::Pass => 0,
        };
        Self {
            side,
            action,
            priority,
            speed: effective_speed(active, &state.field, &state.rules),
        }
    }
}

/// Faster first; Trick Room reverses.
fn by_speed(a: u16, b: u16, trick_room: bool) -> Ordering {
    if trick_room {
        a.cmp(&b)
    } else {
        b.cmp(&a)
    }
}

/// Switches, then priority bracket, then speed.
fn compare(a: &Queued, b: &Queued, trick_room: bool) -> Ordering {
    b.action
        .is_switch()
        .cmp(&a.action.is_switch())
        .then_with(|| b.priority.cmp(&a.priority))
        .then_with(|| by_speed(a.speed, b.speed, trick_room))
}

/// Stable sort by `cmp`, then shuffle each run of exactly tied entries.
///
/// Draws from the RNG only when a tie exists.
pub fn sort_with_ties<T, F>(items: &mut [T], cmp: F, rng: &mut dyn RngCore)
where
    F: Fn(&T, &T) -> Ordering,
{
    items.sort_by(&cmp);

    let mut start = 0;
    while start < items.len() {
        let mut end = start + 1;
        while end < items.len() && cmp(&items[start], &items[end]) == Ordering::Equal {
            end += 1;
        }
        if end - start > 1 {
            items[start..end].shuffle(rng);
        }
        start = end;
    }
}

/// Execution order for this turn's actions. Evaluated once, before any
/// action runs.
pub fn order_actions(state: &BattleState, actions: [(SideId, Action); 2], rng: &mut dyn RngCore) -> Vec<Queued> {
    let trick_room = state.field.trick_room();
    let mut queue: Vec<Queued> = actions
        .into_iter()
        .map(|(side, action)| Queued::new(state, side, action))
        .collect();
    sort_with_ties(&mut queue, |a, b| compare(a, b, trick_room), rng);
    queue
}

/// Active combatants, fastest first (slowest under Trick Room).
pub fn speed_order(state: &BattleState, rng: &mut dyn RngCore) -> Vec<CombatantRef> {
    let trick_room = state.field.trick_room();
    let mut entries: Vec<(CombatantRef, u16)> = SideId::BOTH
        .iter()
        .map(|&side| {
            let active = state.active(side);
            (
                state.active_ref(side),
                effective_speed(active, &state.field, &state.rules),
            )
        })
        .collect();
    sort_with_ties(&mut entries, |a, b| by_speed(a.1, b.1, trick_room), rng);
    entries.into_iter().map(|(r, _)| r).collect()
}
