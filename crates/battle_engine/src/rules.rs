//! Mechanics constants, loadable from JSON.

use serde::{Deserialize, Serialize};

use crate::damage::Modifier;
use crate::error::BattleError;

/// Tunable mechanics. `Default` is the modern ruleset.
///
/// Every field is optional in serialized form; missing fields take their
/// default value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Ruleset {
    /// Critical hit multiplier (4096-scale).
    pub crit_multiplier: Modifier,
    /// Percent chance a paralyzed combatant loses its turn.
    pub full_paralysis_chance: u8,
    /// Percent chance a frozen combatant thaws when trying to act.
    pub thaw_chance: u8,
    /// Inclusive range the sleep counter is drawn from at infliction.
    pub sleep_counter: (u8, u8),
    /// Paralysis divides effective speed by this value.
    pub paralysis_speed_divisor: u8,
    pub weather_turns: u8,
    pub terrain_turns: u8,
    /// Trick Room and Gravity duration.
    pub room_turns: u8,
    pub taunt_turns: u8,
    pub disable_turns: u8,
    /// Turn limit after which the battle is a draw. 0 disables the limit.
    pub max_turns: u16,
}

impl Default for Ruleset {
    fn default() -> Self {
        Self {
            crit_multiplier: Modifier::ONE_POINT_FIVE,
            full_paralysis_chance: 25,
            thaw_chance: 20,
            sleep_counter: (2, 4),
            paralysis_speed_divisor: 2,
            weather_turns: 5,
            terrain_turns: 5,
            room_turns: 5,
            taunt_turns: 3,
            disable_turns: 4,
            max_turns: 0,
        }
    }
}

impl Ruleset {
    /// Parse a ruleset from JSON, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject durations of zero turns. A field effect started with one
    /// would be announced without ever being in play.
    pub fn validate(&self) -> Result<(), BattleError> {
        let durations = [
            ("weather_turns", self.weather_turns),
            ("terrain_turns", self.terrain_turns),
            ("room_turns", self.room_turns),
            ("taunt_turns", self.taunt_turns),
            ("disable_turns", self.disable_turns),
        ];
        match durations.iter().find(|(_, turns)| *turns == 0) {
            Some((name, _)) => Err(BattleError::InvalidRules(format!("{name} must be at least 1"))),
            None => Ok(()),
        }
    }
}
