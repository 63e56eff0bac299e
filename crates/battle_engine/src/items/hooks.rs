//! Item hook type definitions.

use crate::damage::Modifier;
use crate::moves::MoveCategory;
use crate::state::Combatant;

/// Attack stat multiplier for the holder's move.
pub type OnModifyAttack = fn(holder: &Combatant, category: MoveCategory) -> Modifier;

/// Final damage multiplier (step 8), given the hit's effectiveness.
pub type OnFinalModifier = fn(holder: &Combatant, effectiveness: u8) -> Modifier;

/// HP the holder loses after dealing `damage`.
pub type OnAfterHit = fn(holder: &Combatant, damage: u16) -> Option<u16>;

/// HP the holder recovers at end of turn.
pub type OnEndOfTurn = fn(holder: &Combatant) -> Option<u16>;

#[derive(Clone, Copy)]
pub struct ItemHooks {
    pub on_modify_attack: Option<OnModifyAttack>,
    pub on_final_modifier: Option<OnFinalModifier>,
    pub on_after_hit: Option<OnAfterHit>,
    pub on_end_of_turn: Option<OnEndOfTurn>,
    /// Locks the holder into the first move it selects.
    pub choice_lock: bool,
}

impl ItemHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_modify_attack: None,
        on_final_modifier: None,
        on_after_hit: None,
        on_end_of_turn: None,
        choice_lock: false,
    };
}
