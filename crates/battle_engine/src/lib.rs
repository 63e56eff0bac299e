//! battle_engine - deterministic turn-based battle simulation engine
//!
//! Two sides each field one active combatant from a roster of up to six.
//! Callers submit one action per side per turn; `battle::resolve_turn`
//! validates both, orders them, executes them and returns the new state
//! together with an ordered event log. All randomness flows through a
//! caller-supplied `rand::Rng`, so a seed plus an action sequence replays
//! exactly.
//!
//! ```
//! use battle_engine::battle::{self, Action};
//! use battle_engine::entities::{CombatantSpec, TeamSpec};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let team = |species: &str| TeamSpec {
//!     members: vec![CombatantSpec {
//!         species: species.into(),
//!         level: 50,
//!         ability: None,
//!         item: None,
//!         nature: None,
//!         evs: None,
//!         ivs: None,
//!         moves: vec![],
//!     }],
//! };
//! let opening = battle::reset(&team("Pikachu"), &team("Gyarados")).unwrap();
//! let mut rng = StdRng::seed_from_u64(7);
//! let turn = battle::resolve_turn(&opening.state, Action::Move(0), Action::Move(0), &mut rng).unwrap();
//! assert_eq!(turn.state.turn, 1);
//! ```

/// Ability hooks and registry
pub mod abilities;

/// Turn resolution, action ordering and legality
pub mod battle;

/// Persistent statuses, volatiles and secondary effects
pub mod conditions;

/// Damage calculation pipeline
pub mod damage;

/// Entity blueprints and team data
pub mod entities;

pub mod error;
pub mod events;
pub mod field;

/// Held items
pub mod items;

/// Move data and conditional-power hooks
pub mod moves;

pub mod natures;
pub mod prng;
pub mod rules;
pub mod species;

/// Battle state
pub mod state;

pub mod stats;

/// Type definitions and type chart
pub mod types;

// Re-export commonly used types
pub use abilities::AbilityId;
pub use battle::{legal_actions, reset, resolve_turn, Action, ActionMask, Battle, Opening, TurnResult};
pub use damage::{calculate_damage, DamageResult, Modifier};
pub use entities::{CombatantSpec, PokemonConfig, TeamSpec};
pub use error::BattleError;
pub use events::BattleEvent;
pub use field::{Field, Terrain, Weather};
pub use items::ItemId;
pub use moves::MoveId;
pub use natures::NatureId;
pub use rules::Ruleset;
pub use species::{Species, SpeciesId};
pub use state::{BattleState, Combatant, CombatantRef, SideId};
pub use stats::{BattleStat, BoostStat};
pub use types::{Type, TypeEffectiveness, TypeImmunities};

/// Normalize a display name into a lookup key: lowercase ASCII
/// alphanumerics only ("Will-O-Wisp" -> "willowisp").
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}
