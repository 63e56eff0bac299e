//! Error taxonomy for battle construction and turn resolution.

use crate::battle::Action;
use crate::state::SideId;

/// Errors surfaced by `reset` and `resolve_turn`.
///
/// A returned error never leaves a partially mutated state behind: the
/// resolver works on its own copy and only hands it back on success.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BattleError {
    /// The submitted action is not in the side's legal-action mask.
    #[error("illegal action {action:?} for {side}: {reason}")]
    IllegalAction {
        side: SideId,
        action: Action,
        reason: &'static str,
    },

    /// Team data could not be turned into combatants.
    #[error("invalid team data: {0}")]
    InvalidTeamData(String),

    /// The ruleset cannot run a battle.
    #[error("invalid ruleset: {0}")]
    InvalidRules(String),

    /// An internal invariant was violated. Fatal for the episode.
    #[error("inconsistent battle state: {0}")]
    InconsistentState(String),

    /// The battle already has an outcome.
    #[error("battle is already over")]
    BattleOver,
}

impl BattleError {
    pub(crate) fn illegal(side: SideId, action: Action, reason: &'static str) -> Self {
        BattleError::IllegalAction {
            side,
            action,
            reason,
        }
    }
}
