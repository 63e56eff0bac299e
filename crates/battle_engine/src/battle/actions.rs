//! Actions and the legality filter.

use serde::{Deserialize, Serialize};

use crate::error::BattleError;
use crate::state::{BattleState, Combatant, Request, SideId, MAX_MOVES, MAX_TEAM_SIZE};

/// One side's choice for a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "slot", rename_all = "camelCase")]
pub enum Action {
    /// Use the move in this slot (0..4).
    Move(u8),
    /// Switch to this roster slot (0..6).
    Switch(u8),
    /// Only legal when no move slot is usable.
    Struggle,
    /// Nothing to do this phase.
    Pass,
}

bitflags::bitflags! {
    /// Legal actions for one side.
    ///
    /// Bits 0-3 are move slots, bits 4-9 switch targets, then Struggle and Pass.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct ActionMask: u16 {
        const MOVE_0 = 1 << 0;
        const MOVE_1 = 1 << 1;
        const MOVE_2 = 1 << 2;
        const MOVE_3 = 1 << 3;
        const SWITCH_0 = 1 << 4;
        const SWITCH_1 = 1 << 5;
        const SWITCH_2 = 1 << 6;
        const SWITCH_3 = 1 << 7;
        const SWITCH_4 = 1 << 8;
        const SWITCH_5 = 1 << 9;
        const STRUGGLE = 1 << 10;
        const PASS = 1 << 11;

        const MOVES = Self::MOVE_0.bits() | Self::MOVE_1.bits() | Self::MOVE_2.bits() | Self::MOVE_3.bits();
        const SWITCHES = 0b11_1111 << 4;
    }
}

const SWITCH_SHIFT: u8 = 4;

impl Action {
    /// Mask bit for this action, or `None` if the slot index is out of range.
    pub fn bit(self) -> Option<ActionMask> {
        match self {
            Action::Move(slot) if (slot as usize) < MAX_MOVES => {
                Some(ActionMask::from_bits_retain(1 << slot))
            }
            Action::Switch(slot) if (slot as usize) < MAX_TEAM_SIZE => {
                Some(ActionMask::from_bits_retain(1 << (slot + SWITCH_SHIFT)))
            }
            Action::Struggle => Some(ActionMask::STRUGGLE),
            Action::Pass => Some(ActionMask::PASS),
            _ => None,
        }
    }

    #[inline]
    pub fn is_switch(self) -> bool {
        matches!(self, Action::Switch(_))
    }
}

impl ActionMask {
    #[inline]
    pub fn allows(self, action: Action) -> bool {
        action.bit().is_some_and(|bit| self.contains(bit))
    }

    /// Every action this mask allows, in bit order.
    pub fn actions(self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(self.bits().count_ones() as usize);
        for slot in 0..MAX_MOVES as u8 {
            if self.allows(Action::Move(slot)) {
                actions.push(Action::Move(slot));
            }
        }
        for slot in 0..MAX_TEAM_SIZE as u8 {
            if self.allows(Action::Switch(slot)) {
                actions.push(Action::Switch(slot));
            }
        }
        if self.contains(ActionMask::STRUGGLE) {
            actions.push(Action::Struggle);
        }
        if self.contains(ActionMask::PASS) {
            actions.push(Action::Pass);
        }
        actions
    }
}

/// Whether the active combatant may select this move slot.
fn move_usable(active: &Combatant, slot: usize) -> bool {
    let Some(move_slot) = active.moves.get(slot) else {
        return false;
    };
    let Some(id) = move_slot.id else {
        return false;
    };
    if move_slot.pp == 0 || active.is_slot_disabled(slot) {
        return false;
    }
    if id.data().is_status() && active.has_volatile(crate::conditions::Volatile::Taunt) {
        return false;
    }
    active.choice_locked_slot().map_or(true, |locked| locked == slot)
}

fn switch_mask(state: &BattleState, side: SideId) -> ActionMask {
    let side = state.side(side);
    let mut mask = ActionMask::empty();
    for (slot, member) in side.roster.iter().enumerate() {
        if slot != side.active as usize && !member.is_fainted() {
            mask |= ActionMask::from_bits_retain(1 << (slot as u8 + SWITCH_SHIFT));
        }
    }
    mask
}

/// Legal actions for `side` in the current phase.
///
/// Never empty while the battle is running: a side with no usable move
/// always has `STRUGGLE`, and a side with nothing to do gets `PASS`.
pub fn legal_actions(state: &BattleState, side: SideId) -> ActionMask {
    if state.is_terminal() {
        return ActionMask::empty();
    }

    match state.request {
        Request::Replace { sides } => {
            if sides[side.index()] {
                switch_mask(state, side)
            } else {
                ActionMask::PASS
            }
        }
        Request::Turn => {
            let active = state.active(side);
            let mut mask = ActionMask::empty();
            for slot in 0..MAX_MOVES {
                if move_usable(active, slot) {
                    mask |= ActionMask::from_bits_retain(1 << slot);
                }
            }
            if !mask.intersects(ActionMask::MOVES) {
                mask |= ActionMask::STRUGGLE;
            }
            mask | switch_mask(state, side)
        }
    }
}

/// Reject an action that is not in the side's legal mask.
pub(crate) fn validate(state: &BattleState, side: SideId, action: Action) -> Result<(), BattleError> {
    if state.is_terminal() {
        return Err(BattleError::BattleOver);
    }
    if legal_actions(state, side).allows(action) {
        return Ok(());
    }
    Err(BattleError::illegal(side, action, illegal_reason(state, side, action)))
}

fn illegal_reason(state: &BattleState, side: SideId, action: Action) -> &'static str {
    let replacing = matches!(state.request, Request::Replace { sides } if sides[side.index()]);
    let waiting = matches!(state.request, Request::Replace { sides } if !sides[side.index()]);

    match action {
        _ if waiting && action != Action::Pass => "side must pass while the foe replaces",
        Action::Pass if replacing => "a fainted combatant must be replaced",
        Action::Pass => "pass is only legal while the foe replaces",
        Action::Move(_) | Action::Struggle if replacing => "a fainted combatant must be replaced",
        Action::Move(slot) => {
            let active = state.active(side);
            match active.moves.get(slot as usize) {
                None => "no such move slot",
                Some(m) if m.id.is_none() => "move slot is empty",
                Some(m) if m.pp == 0 => "no PP left",
                Some(_) if active.is_slot_disabled(slot as usize) => "move is disabled",
                Some(_) if active.choice_locked_slot().is_some() => "locked into another move",
                Some(_) => "taunted combatants cannot use status moves",
            }
        }
        Action::Struggle => "struggle is only legal when no move is usable",
        Action::Switch(slot) => {
            let side = state.side(side);
            match side.roster.get(slot as usize) {
                None => "no such roster slot",
                Some(_) if side.active == slot => "switch target is already active",
                Some(_) => "switch target has fainted",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::conditions::{EffectState, Volatile};
    use crate::entities::PokemonConfig;
    use crate::moves::MoveId;
    use crate::rules::Ruleset;

    fn state() -> BattleState {
        let p1 = vec![
            PokemonConfig::from_str("garchomp")
                .unwrap()
                .moves(&[MoveId::Earthquake, MoveId::SwordsDance, MoveId::StoneEdge, MoveId::DragonClaw])
                .build(),
            PokemonConfig::from_str("gengar").unwrap().build(),
            PokemonConfig::from_str("snorlax").unwrap().build(),
        ];
        let p2 = vec![PokemonConfig::from_str("blissey").unwrap().build()];
        BattleState::new(p1, p2, Ruleset::default())
    }

    #[test]
    fn test_fresh_mask() {
        let state = state();
        let mask = legal_actions(&state, SideId::P1);
        assert!(mask.contains(ActionMask::MOVES));
        assert!(mask.contains(ActionMask::SWITCH_1 | ActionMask::SWITCH_2));
        assert!(!mask.contains(ActionMask::SWITCH_0));
        assert!(!mask.contains(ActionMask::STRUGGLE));

        // No reserve: moves only
        let mask = legal_actions(&state, SideId::P2);
        assert!(!mask.intersects(ActionMask::SWITCHES));
    }

    #[test]
    fn test_taunt_and_disable() {
        let mut state = state();
        let active = state.sides[0].active_mut();
        active.add_volatile(EffectState::new(Volatile::Taunt).with_duration(3));
        active.add_volatile(EffectState::new(Volatile::Disable).with_duration(4).with_payload(0));

        let mask = legal_actions(&state, SideId::P1);
        assert!(!mask.allows(Action::Move(0)), "disabled");
        assert!(!mask.allows(Action::Move(1)), "status move under taunt");
        assert!(mask.allows(Action::Move(2)));
        assert_eq!(
            validate(&state, SideId::P1, Action::Move(1)),
            Err(BattleError::illegal(
                SideId::P1,
                Action::Move(1),
                "taunted combatants cannot use status moves"
            ))
        );
    }

    #[test]
    fn test_struggle_when_out_of_pp() {
        let mut state = state();
        for slot in state.sides[0].active_mut().moves.iter_mut() {
            slot.pp = 0;
        }
        let mask = legal_actions(&state, SideId::P1);
        assert!(!mask.intersects(ActionMask::MOVES));
        assert!(mask.contains(ActionMask::STRUGGLE));
        assert!(mask.intersects(ActionMask::SWITCHES));
    }

    #[test]
    fn test_choice_lock_restricts_to_slot() {
        let mut state = state();
        state.sides[0]
            .active_mut()
            .add_volatile(EffectState::new(Volatile::ChoiceLock).with_payload(2));
        let mask = legal_actions(&state, SideId::P1);
        assert_eq!(mask & ActionMask::MOVES, ActionMask::MOVE_2);
    }

    #[test]
    fn test_replace_phase_masks() {
        let mut state = state();
        state.sides[0].active_mut().hp = 0;
        state.request = Request::Replace { sides: [true, false] };

        let p1 = legal_actions(&state, SideId::P1);
        assert_eq!(p1, ActionMask::SWITCH_1 | ActionMask::SWITCH_2);
        assert_eq!(legal_actions(&state, SideId::P2), ActionMask::PASS);
        assert!(validate(&state, SideId::P2, Action::Move(0)).is_err());
    }

    #[test]
    fn test_fainted_reserve_not_switchable() {
        let mut state = state();
        state.sides[0].roster[1].hp = 0;
        let mask = legal_actions(&state, SideId::P1);
        assert!(!mask.allows(Action::Switch(1)));
        assert!(mask.allows(Action::Switch(2)));
        assert_eq!(
            validate(&state, SideId::P1, Action::Switch(1)),
            Err(BattleError::illegal(SideId::P1, Action::Switch(1), "switch target has fainted"))
        );
        assert!(validate(&state, SideId::P1, Action::Switch(9)).is_err());
    }

    #[test]
    fn test_terminal_mask_is_empty() {
        let mut state = state();
        state.outcome = Some(crate::state::Outcome { winner: Some(SideId::P1) });
        assert!(legal_actions(&state, SideId::P2).is_empty());
        assert_eq!(validate(&state, SideId::P2, Action::Pass), Err(BattleError::BattleOver));
    }

    #[test]
    fn test_mask_lists_actions() {
        let mask = ActionMask::MOVE_0 | ActionMask::SWITCH_3 | ActionMask::PASS;
        assert_eq!(mask.actions(), vec![Action::Move(0), Action::Switch(3), Action::Pass]);
        assert_eq!(Action::Move(4).bit(), None);
    }
}
