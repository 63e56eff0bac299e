use rand::RngCore;

use crate::damage::Modifier;
use crate::events::BattleEvent;
use crate::field::Field;
use crate::moves::{Move, MoveCategory};
use crate::state::{BattleState, Combatant, CombatantRef};
use crate::types::Type;

/// Called when the holder switches in (after the opponent is in place)
pub type OnSwitchIn = fn(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>);

/// Attack stat multiplier; the holder is the attacker
pub type OnModifyAttack =
    fn(attacker: &Combatant, defender: &Combatant, move_type: Type, category: MoveCategory) -> Modifier;

/// Defense stat multiplier; the holder is the defender
pub type OnModifyDefense =
    fn(defender: &Combatant, attacker: &Combatant, move_type: Type, category: MoveCategory) -> Modifier;

/// Called after the holder takes damage from a move
pub type OnDamagingHit = fn(
    state: &mut BattleState,
    owner: CombatantRef,
    attacker: CombatantRef,
    move_data: &'static Move,
    damage: u16,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
);

/// Called once per turn during the residual phase
pub type OnEndOfTurn = fn(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>);

/// Speed multiplier applied after boosts and paralysis
pub type OnModifySpeed = fn(holder: &Combatant, field: &Field) -> Modifier;

/// Final damage multiplier when the holder attacks
pub type OnAttackerFinalMod = fn(attacker: &Combatant, defender: &Combatant, effectiveness: u8) -> Modifier;

/// Final damage multiplier when the holder is hit
pub type OnDefenderFinalMod = fn(defender: &Combatant, attacker: &Combatant, effectiveness: u8) -> Modifier;

/// Returns true if the holder is immune to moves of this type
pub type OnTypeImmunity = fn(move_type: Type) -> bool;

/// Returns true if the holder cannot be critically hit
pub type OnCritImmunity = fn(defender: &Combatant) -> bool;

#[derive(Clone, Copy)]
pub struct AbilityHooks {
    pub on_switch_in: Option<OnSwitchIn>,
    pub on_modify_attack: Option<OnModifyAttack>,
    pub on_modify_defense: Option<OnModifyDefense>,
    pub on_damaging_hit: Option<OnDamagingHit>,
    pub on_end_of_turn: Option<OnEndOfTurn>,
    pub on_modify_speed: Option<OnModifySpeed>,
    pub on_attacker_final_mod: Option<OnAttackerFinalMod>,
    pub on_defender_final_mod: Option<OnDefenderFinalMod>,
    pub on_type_immunity: Option<OnTypeImmunity>,
    pub on_crit_immunity: Option<OnCritImmunity>,
}

impl AbilityHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_switch_in: None,
        on_modify_attack: None,
        on_modify_defense: None,
        on_damaging_hit: None,
        on_end_of_turn: None,
        on_modify_speed: None,
        on_attacker_final_mod: None,
        on_defender_final_mod: None,
        on_type_immunity: None,
        on_crit_immunity: None,
    };
}

impl Default for AbilityHooks {
    fn default() -> Self {
        Self::NONE
    }
}
