//! Persistent statuses, volatile effects and secondary effects.

mod secondary;
mod status;
mod volatile;

pub use secondary::{apply_boosts, apply_secondary, apply_status, roll_secondary, SecondaryRoll};
pub use status::{
    can_inflict, check_prevention, end_of_turn_damage, inflict, InflictFailure, Prevention,
};

use serde::{Deserialize, Serialize};

use crate::state::CombatantRef;
use crate::types::TypeImmunities;

/// Persistent status. A combatant holds at most one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "brn")]
    Burn,
    #[serde(rename = "par")]
    Paralysis,
    #[serde(rename = "psn")]
    Poison,
    /// Badly poisoned; the payload is the escalating damage counter.
    #[serde(rename = "tox")]
    Toxic,
    /// The payload is the remaining sleep counter.
    #[serde(rename = "slp")]
    Sleep,
    #[serde(rename = "frz")]
    Freeze,
}

impl Status {
    /// Type immunity that blocks this status.
    pub const fn immunity(self) -> TypeImmunities {
        match self {
            Status::Burn => TypeImmunities::BURN,
            Status::Paralysis => TypeImmunities::PARALYSIS,
            Status::Poison | Status::Toxic => TypeImmunities::POISON,
            Status::Freeze => TypeImmunities::FREEZE,
            Status::Sleep => TypeImmunities::empty(),
        }
    }

    #[inline]
    pub const fn is_poison(self) -> bool {
        matches!(self, Status::Poison | Status::Toxic)
    }
}

/// Effects that live only while the combatant stays active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Volatile {
    /// Cancels the next action this turn.
    Flinch,
    /// The payload is the disabled move slot.
    Disable,
    /// Blocks status moves.
    Taunt,
    /// +2 crit stage.
    FocusEnergy,
    /// Choice item lock; the payload is the locked move slot.
    ChoiceLock,
}

/// An active status or volatile.
///
/// `duration` counts remaining turns; `None` lasts until removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectState<T> {
    pub id: T,
    pub duration: Option<u8>,
    /// Attribution only.
    pub source: Option<CombatantRef>,
    pub payload: u8,
}

impl<T> EffectState<T> {
    pub fn new(id: T) -> Self {
        Self {
            id,
            duration: None,
            source: None,
            payload: 0,
        }
    }

    pub fn with_duration(mut self, turns: u8) -> Self {
        self.duration = Some(turns);
        self
    }

    pub fn with_source(mut self, source: Option<CombatantRef>) -> Self {
        self.source = source;
        self
    }

    pub fn with_payload(mut self, payload: u8) -> Self {
        self.payload = payload;
        self
    }
}
