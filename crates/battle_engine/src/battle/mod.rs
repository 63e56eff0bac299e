//! Turn resolution.
//!
//! [`resolve_turn`] is a pure transition: it borrows the current state,
//! validates both actions, and returns a new state plus the events that
//! led to it. Nothing is written back on error.
//!
//! A turn runs in phases:
//!
//! 1. **Order**: switches first, then priority, then effective speed
//!    (reversed under Trick Room); exact ties are shuffled with the RNG
//! 2. **Actions**: each queued action runs in order, with faint checks
//!    after every one; an action whose user fainted is skipped
//! 3. **End of turn**: weather chip, status damage, items, abilities,
//!    field and volatile timers, faint checks
//! 4. **Request**: a side whose active fainted with a reserve left must
//!    replace it before the next turn
//!
//! A replacement phase only switches in the replacements and runs their
//! switch-in hooks; it does not advance the turn counter.

mod actions;
mod execute;
mod order;
mod residual;
mod switching;

pub use actions::{legal_actions, Action, ActionMask};
pub use order::{effective_speed, order_actions, speed_order, Queued};

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::Serialize;

use crate::entities::TeamSpec;
use crate::error::BattleError;
use crate::events::{BattleEvent, DamageCause};
use crate::rules::Ruleset;
use crate::state::{BattleState, CombatantRef, Outcome, Request, SideId};

/// A freshly built battle and its lead switch-in events.
#[derive(Clone, Debug, Serialize)]
pub struct Opening {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
}

/// Everything one call to [`resolve_turn`] produced.
#[derive(Clone, Debug, Serialize)]
pub struct TurnResult {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
    pub terminal: bool,
    /// `None` while running, and for a draw.
    pub winner: Option<SideId>,
}

/// Build a battle under the default ruleset.
pub fn reset(p1: &TeamSpec, p2: &TeamSpec) -> Result<Opening, BattleError> {
    reset_with_rules(p1, p2, Ruleset::default())
}

/// Build a battle: the first member of each roster leads, and the leads'
/// switch-in hooks run in side order (P1 first).
pub fn reset_with_rules(p1: &TeamSpec, p2: &TeamSpec, rules: Ruleset) -> Result<Opening, BattleError> {
    rules.validate()?;
    let mut state = BattleState::new(p1.build()?, p2.build()?, rules);
    let mut events = Vec::new();

    for side in SideId::BOTH {
        switching::switch_in(&mut state, side, 0, &mut events);
    }
    for side in SideId::BOTH {
        let lead = state.active_ref(side);
        switching::run_switch_in_hook(&mut state, lead, &mut events);
    }

    state.check_invariants()?;
    Ok(Opening { state, events })
}

/// Resolve one turn (or one replacement phase).
///
/// Both actions are checked against [`legal_actions`] before anything runs.
pub fn resolve_turn<R: Rng>(
    state: &BattleState,
    p1: Action,
    p2: Action,
    rng: &mut R,
) -> Result<TurnResult, BattleError> {
    actions::validate(state, SideId::P1, p1)?;
    actions::validate(state, SideId::P2, p2)?;

    let mut next = state.clone();
    let mut events = Vec::new();
    let actions = [(SideId::P1, p1), (SideId::P2, p2)];

    match next.request {
        Request::Turn => run_turn(&mut next, actions, rng, &mut events),
        Request::Replace { sides } => run_replacement(&mut next, sides, actions, &mut events),
    }

    next.check_invariants()?;

    let winner = next.outcome.and_then(|o| o.winner);
    Ok(TurnResult {
        terminal: next.is_terminal(),
        winner,
        events,
        state: next,
    })
}

fn run_turn(
    state: &mut BattleState,
    actions: [(SideId, Action); 2],
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    state.turn += 1;
    tracing::debug!(turn = state.turn, "turn started");
    events.push(BattleEvent::TurnStarted { turn: state.turn });

    let mut reported = [false; 2];
    for queued in order_actions(state, actions, rng) {
        run_action(state, queued, rng, events);
        check_faints(state, &mut reported, events);
        if conclude(state, events) {
            return;
        }
    }

    residual::end_of_turn(state, rng, events);
    check_faints(state, &mut reported, events);
    if conclude(state, events) {
        return;
    }

    update_request(state);

    let limit = state.rules.max_turns;
    if limit > 0 && state.turn >= limit {
        tracing::debug!(turn = state.turn, "turn limit reached");
        state.outcome = Some(Outcome { winner: None });
        events.push(BattleEvent::BattleEnded { winner: None });
    }
}

fn run_action(state: &mut BattleState, queued: Queued, rng: &mut dyn RngCore, events: &mut Vec<BattleEvent>) {
    let side = queued.side;
    tracing::debug!(%side, action = ?queued.action, priority = queued.priority, speed = queued.speed, "running action");

    match queued.action {
        Action::Pass => {}
        Action::Switch(slot) => switching::switch(state, side, slot, events),
        Action::Move(_) | Action::Struggle => {
            let user = state.active_ref(side);
            if state.combatant(user).is_fainted() {
                tracing::debug!(%user, "skipping action of fainted combatant");
                return;
            }
            let slot = match queued.action {
                Action::Move(slot) => Some(slot),
                _ => None,
            };
            execute::use_move(state, user, slot, rng, events);
        }
    }
}

/// Replacements enter first, then their switch-in hooks run in side order
/// (P1 first), the same order the leads use.
fn run_replacement(
    state: &mut BattleState,
    sides: [bool; 2],
    actions: [(SideId, Action); 2],
    events: &mut Vec<BattleEvent>,
) {
    tracing::debug!(?sides, "replacement phase");

    let mut entered = Vec::with_capacity(2);
    for (side, action) in actions {
        if let (true, Action::Switch(slot)) = (sides[side.index()], action) {
            switching::switch_out(state, side, events);
            switching::switch_in(state, side, slot, events);
            entered.push(state.active_ref(side));
        }
    }

    for who in entered {
        switching::run_switch_in_hook(state, who, events);
    }

    state.request = Request::Turn;
}

/// HP loss outside a direct hit. Does nothing to a fainted combatant.
pub(crate) fn lose_hp(
    state: &mut BattleState,
    target: CombatantRef,
    amount: u16,
    cause: DamageCause,
    events: &mut Vec<BattleEvent>,
) {
    let combatant = state.combatant_mut(target);
    if combatant.is_fainted() {
        return;
    }
    let lost = combatant.take_damage(amount);
    events.push(BattleEvent::ResidualDamage {
        target,
        amount: lost,
        remaining: combatant.hp,
        cause,
    });
}

/// Report each newly fainted active combatant once, dropping its volatiles
/// and stages.
fn check_faints(state: &mut BattleState, reported: &mut [bool; 2], events: &mut Vec<BattleEvent>) {
    for side in SideId::BOTH {
        if reported[side.index()] {
            continue;
        }
        let target = state.active_ref(side);
        let combatant = state.combatant_mut(target);
        if combatant.is_fainted() {
            combatant.clear_volatiles();
            combatant.boosts.clear();
            reported[side.index()] = true;
            tracing::debug!(%target, "fainted");
            events.push(BattleEvent::Fainted { target });
        }
    }
}

/// Set the outcome once a roster is wiped. Both at once is a draw.
fn conclude(state: &mut BattleState, events: &mut Vec<BattleEvent>) -> bool {
    let winner = match (state.sides[0].all_fainted(), state.sides[1].all_fainted()) {
        (false, false) => return false,
        (true, true) => None,
        (true, false) => Some(SideId::P2),
        (false, true) => Some(SideId::P1),
    };
    tracing::debug!(?winner, turn = state.turn, "battle ended");
    state.outcome = Some(Outcome { winner });
    events.push(BattleEvent::BattleEnded { winner });
    true
}

fn update_request(state: &mut BattleState) {
    let sides = SideId::BOTH.map(|side| {
        let side = state.side(side);
        side.active().is_fainted() && side.has_reserve()
    });
    state.request = if sides.contains(&true) {
        Request::Replace { sides }
    } else {
        Request::Turn
    };
}

/// A battle that owns its RNG, seeded once, so a seed plus an action
/// sequence always replays the same way.
#[derive(Clone, Debug)]
pub struct Battle {
    state: BattleState,
    rng: StdRng,
}

impl Battle {
    pub fn reset(p1: &TeamSpec, p2: &TeamSpec, seed: u64) -> Result<(Self, Vec<BattleEvent>), BattleError> {
        Self::reset_with_rules(p1, p2, Ruleset::default(), seed)
    }

    pub fn reset_with_rules(
        p1: &TeamSpec,
        p2: &TeamSpec,
        rules: Ruleset,
        seed: u64,
    ) -> Result<(Self, Vec<BattleEvent>), BattleError> {
        let opening = reset_with_rules(p1, p2, rules)?;
        let battle = Self {
            state: opening.state,
            rng: StdRng::seed_from_u64(seed),
        };
        Ok((battle, opening.events))
    }

    #[inline]
    pub fn state(&self) -> &BattleState {
        &self.state
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.state.is_terminal()
    }

    pub fn legal_actions(&self, side: SideId) -> ActionMask {
        legal_actions(&self.state, side)
    }

    /// Resolve a turn and keep the new state. On error the state is left
    /// as it was.
    pub fn step(&mut self, p1: Action, p2: Action) -> Result<TurnResult, BattleError> {
        let result = resolve_turn(&self.state, p1, p2, &mut self.rng)?;
        self.state = result.state.clone();
        Ok(result)
    }
}

#[cfg(test)]
mod tests;
