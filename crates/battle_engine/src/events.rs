//! Structured event log.
//!
//! Every observable change made while resolving a turn is recorded as a
//! `BattleEvent`, in the order it happened. Serialized with an internal
//! `type` tag, e.g. `{"type":"damage","target":{..},"amount":42,..}`.

use std::fmt;

use serde::Serialize;

use crate::conditions::{InflictFailure, Status, Volatile};
use crate::field::FieldEffect;
use crate::state::{CombatantRef, SideId};
use crate::stats::BoostStat;

/// Why a combatant could not act.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PreventReason {
    Flinched,
    FullyParalyzed,
    Asleep,
    Frozen,
    Taunted,
    Disabled,
}

/// Source of damage that is not a direct hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DamageCause {
    Burn,
    Poison,
    Toxic,
    Sandstorm,
    Recoil,
    Struggle,
    LifeOrb,
    RoughSkin,
}

/// Source of healing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum HealCause {
    Drain,
    Move,
    Leftovers,
    GrassyTerrain,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum BattleEvent {
    TurnStarted {
        turn: u16,
    },
    SwitchedIn {
        target: CombatantRef,
        species: &'static str,
        hp: u16,
        #[serde(rename = "maxHp")]
        max_hp: u16,
    },
    SwitchedOut {
        target: CombatantRef,
    },
    MoveUsed {
        user: CombatantRef,
        #[serde(rename = "move")]
        move_name: &'static str,
    },
    Prevented {
        user: CombatantRef,
        reason: PreventReason,
    },
    Missed {
        user: CombatantRef,
        target: CombatantRef,
    },
    /// The move had nothing to act on or no effect.
    Failed {
        user: CombatantRef,
    },
    Immune {
        target: CombatantRef,
    },
    CriticalHit {
        target: CombatantRef,
    },
    Damage {
        target: CombatantRef,
        amount: u16,
        remaining: u16,
        /// 4-scale: 4 = neutral, 8 = super effective, 2 = resisted.
        effectiveness: u8,
    },
    ResidualDamage {
        target: CombatantRef,
        amount: u16,
        remaining: u16,
        cause: DamageCause,
    },
    Healed {
        target: CombatantRef,
        amount: u16,
        remaining: u16,
        cause: HealCause,
    },
    StatusInflicted {
        target: CombatantRef,
        status: Status,
    },
    StatusFailed {
        target: CombatantRef,
        status: Status,
        reason: InflictFailure,
    },
    /// Woke up or thawed.
    StatusCured {
        target: CombatantRef,
        status: Status,
    },
    BoostChanged {
        target: CombatantRef,
        stat: BoostStat,
        delta: i8,
    },
    /// "won't go any higher/lower"
    BoostCapped {
        target: CombatantRef,
        stat: BoostStat,
        rising: bool,
    },
    VolatileStarted {
        target: CombatantRef,
        volatile: Volatile,
    },
    VolatileEnded {
        target: CombatantRef,
        volatile: Volatile,
    },
    AbilityActivated {
        owner: CombatantRef,
        ability: &'static str,
    },
    FieldStarted {
        effect: FieldEffect,
    },
    FieldEnded {
        effect: FieldEffect,
    },
    Fainted {
        target: CombatantRef,
    },
    BattleEnded {
        winner: Option<SideId>,
    },
}

impl fmt::Display for BattleEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use BattleEvent::*;
        match self {
            TurnStarted { turn } => write!(f, "== turn {turn} =="),
            SwitchedIn { target, species, hp, max_hp } => {
                write!(f, "{target} sent out {species} ({hp}/{max_hp})")
            }
            SwitchedOut { target } => write!(f, "{target} withdrew"),
            MoveUsed { user, move_name } => write!(f, "{user} used {move_name}"),
            Prevented { user, reason } => write!(f, "{user} could not move ({reason:?})"),
            Missed { user, target } => write!(f, "{user} missed {target}"),
            Failed { user } => write!(f, "{user}: but it failed"),
            Immune { target } => write!(f, "it doesn't affect {target}"),
            CriticalHit { target } => write!(f, "a critical hit on {target}"),
            Damage { target, amount, remaining, effectiveness } => write!(
                f,
                "{target} took {amount} damage ({remaining} left, x{})",
                crate::types::effectiveness_as_f32(*effectiveness)
            ),
            ResidualDamage { target, amount, remaining, cause } => {
                write!(f, "{target} lost {amount} HP to {cause:?} ({remaining} left)")
            }
            Healed { target, amount, remaining, cause } => {
                write!(f, "{target} restored {amount} HP via {cause:?} ({remaining} left)")
            }
            StatusInflicted { target, status } => write!(f, "{target} is now {status:?}"),
            StatusFailed { target, status, reason } => {
                write!(f, "{target} cannot be {status:?} ({reason:?})")
            }
            StatusCured { target, status } => write!(f, "{target} is no longer {status:?}"),
            BoostChanged { target, stat, delta } => {
                write!(f, "{target}'s {} changed by {delta:+}", stat.name())
            }
            BoostCapped { target, stat, rising } => write!(
                f,
                "{target}'s {} won't go any {}",
                stat.name(),
                if *rising { "higher" } else { "lower" }
            ),
            VolatileStarted { target, volatile } => write!(f, "{target} gained {volatile:?}"),
            VolatileEnded { target, volatile } => write!(f, "{target}'s {volatile:?} ended"),
            AbilityActivated { owner, ability } => write!(f, "[{owner}'s {ability}]"),
            FieldStarted { effect } => write!(f, "{effect:?} started"),
            FieldEnded { effect } => write!(f, "{effect:?} ended"),
            Fainted { target } => write!(f, "{target} fainted"),
            BattleEnded { winner: Some(side) } => write!(f, "{side} wins"),
            BattleEnded { winner: None } => write!(f, "the battle ended in a draw"),
        }
    }
}
