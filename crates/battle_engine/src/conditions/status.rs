//! Persistent status machine.

use rand::Rng;
use serde::Serialize;

use super::{EffectState, Status};
use crate::prng;
use crate::rules::Ruleset;
use crate::state::{Combatant, CombatantRef};

/// Why an infliction was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum InflictFailure {
    AlreadyStatused,
    TypeImmune,
    Fainted,
}

/// Outcome of the pre-move status check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Prevention {
    /// Nothing in the way.
    None,
    FullyParalyzed,
    /// Still asleep after the counter tick.
    Asleep,
    /// The counter reached 0; acts this turn.
    WokeUp,
    Frozen,
    /// Thawed; acts this turn.
    Thawed,
}

impl Prevention {
    /// Whether the action is cancelled.
    #[inline]
    pub const fn blocks(self) -> bool {
        matches!(
            self,
            Prevention::FullyParalyzed | Prevention::Asleep | Prevention::Frozen
        )
    }
}

/// Check whether `status` could be applied to `target` right now.
pub fn can_inflict(target: &Combatant, status: Status) -> Result<(), InflictFailure> {
    if target.is_fainted() {
        return Err(InflictFailure::Fainted);
    }
    if target.status.is_some() {
        return Err(InflictFailure::AlreadyStatused);
    }
    let immunity = status.immunity();
    if !immunity.is_empty()
        && target
            .types
            .iter()
            .any(|t| t.immunities().intersects(immunity))
    {
        return Err(InflictFailure::TypeImmune);
    }
    Ok(())
}

/// Apply a status, drawing the sleep counter when needed.
pub fn inflict<R: Rng + ?Sized>(
    target: &mut Combatant,
    status: Status,
    source: Option<CombatantRef>,
    rng: &mut R,
    rules: &Ruleset,
) -> Result<(), InflictFailure> {
    can_inflict(target, status)?;

    let payload = match status {
        Status::Sleep => prng::sleep_counter(rng, rules),
        Status::Toxic => 1,
        _ => 0,
    };
    target.status = Some(
        EffectState::new(status)
            .with_source(source)
            .with_payload(payload),
    );
    Ok(())
}

/// Pre-move status check. Mutates sleep counters and clears sleep/freeze
/// when they end.
pub fn check_prevention<R: Rng + ?Sized>(
    combatant: &mut Combatant,
    rng: &mut R,
    rules: &Ruleset,
) -> Prevention {
    let Some(status) = combatant.status.as_mut() else {
        return Prevention::None;
    };

    match status.id {
        Status::Sleep => {
            status.payload = status.payload.saturating_sub(1);
            if status.payload == 0 {
                combatant.status = None;
                Prevention::WokeUp
            } else {
                Prevention::Asleep
            }
        }
        Status::Freeze => {
            if prng::chance(rng, rules.thaw_chance) {
                combatant.status = None;
                Prevention::Thawed
            } else {
                Prevention::Frozen
            }
        }
        Status::Paralysis => {
            if prng::chance(rng, rules.full_paralysis_chance) {
                Prevention::FullyParalyzed
            } else {
                Prevention::None
            }
        }
        _ => Prevention::None,
    }
}

/// Residual status damage. Returns the status and the HP lost, if any.
///
/// Burn 1/16, poison 1/8, toxic n/16 with n incrementing each call.
/// Always at least 1.
pub fn end_of_turn_damage(combatant: &mut Combatant) -> Option<(Status, u16)> {
    if combatant.is_fainted() {
        return None;
    }
    let status = combatant.status?;

    let amount = match status.id {
        Status::Burn => combatant.fraction_of_max(1, 16),
        Status::Poison => combatant.fraction_of_max(1, 8),
        Status::Toxic => {
            let n = status.payload.max(1);
            if let Some(s) = combatant.status.as_mut() {
                s.payload = (n + 1).min(15);
            }
            combatant.fraction_of_max(n as u32, 16)
        }
        _ => return None,
    };

    Some((status.id, combatant.take_damage(amount)))
}
