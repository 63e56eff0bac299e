//! Move hook type definitions.
//!
//! Hooks for move-specific logic that runs before the damage pipeline
//! (conditional power boosts like Hex or Venoshock, type changes like
//! Weather Ball).

use crate::damage::Modifier;
use crate::field::Field;
use crate::moves::Move;
use crate::state::Combatant;
use crate::types::Type;

/// Returns true if the move's conditional multiplier applies.
pub type OnBasePowerCondition =
    fn(attacker: &Combatant, defender: &Combatant, field: &Field, move_data: &'static Move) -> bool;

/// Computes a new base power for moves with variable BP formulas.
pub type OnModifyBasePower = fn(
    attacker: &Combatant,
    defender: &Combatant,
    field: &Field,
    move_data: &'static Move,
    bp: u16,
) -> u16;

/// Resolves the move's type for this use.
pub type OnModifyType = fn(attacker: &Combatant, field: &Field, base_type: Type) -> Type;

/// Hook table for moves with conditional effects.
#[derive(Clone, Copy)]
pub struct MoveHooks {
    /// Condition check for simple multiplier boosts
    pub on_base_power_condition: Option<OnBasePowerCondition>,

    /// Multiplier to apply when the condition holds
    pub conditional_multiplier: Modifier,

    /// Custom base power modification function
    pub on_modify_base_power: Option<OnModifyBasePower>,

    /// Type modification function
    pub on_modify_type: Option<OnModifyType>,

    /// Skip the burn halving (Facade)
    pub ignores_burn: bool,
}

impl MoveHooks {
    /// Empty hooks (default)
    pub const NONE: Self = Self {
        on_base_power_condition: None,
        conditional_multiplier: Modifier::ONE,
        on_modify_base_power: None,
        on_modify_type: None,
        ignores_burn: false,
    };
}

impl Default for MoveHooks {
    fn default() -> Self {
        Self::NONE
    }
}
