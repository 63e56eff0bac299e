//! Entity blueprints for bringing combatants into a battle.
//!
//! `PokemonConfig` is a builder for a single combatant; `TeamSpec` is the
//! serde surface team data is loaded from (one `CombatantSpec` per member).

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::error::BattleError;
use crate::items::ItemId;
use crate::moves::MoveId;
use crate::natures::NatureId;
use crate::species::SpeciesId;
use crate::state::{Combatant, MoveSlot, MAX_MOVES, MAX_TEAM_SIZE};
use crate::stats::{calc_hp, calc_stat, BattleStat, Boosts};

/// Default IVs (perfect)
pub const DEFAULT_IVS: [u8; 6] = [31, 31, 31, 31, 31, 31];

/// Default EVs (none)
pub const DEFAULT_EVS: [u8; 6] = [0, 0, 0, 0, 0, 0];

/// Default level
pub const DEFAULT_LEVEL: u8 = 50;

/// Blueprint for a combatant.
///
/// Use builder methods to customize, then call `build()`.
#[derive(Clone, Debug)]
pub struct PokemonConfig {
    /// Species (determines base stats and types)
    pub species: SpeciesId,

    /// Level (1-100)
    pub level: u8,

    /// Individual Values [HP, Atk, Def, SpA, SpD, Spe] (0-31)
    pub ivs: [u8; 6],

    /// Effort Values [HP, Atk, Def, SpA, SpD, Spe] (0-252, max 510 total)
    pub evs: [u8; 6],

    pub nature: NatureId,

    /// Ability (if None, uses the species' ability)
    pub ability: Option<AbilityId>,

    pub item: ItemId,

    /// Move set (if None, uses the species' default moves)
    pub moves: Option<[Option<MoveId>; MAX_MOVES]>,

    /// Current HP (if less than max)
    pub current_hp: Option<u16>,
}

impl PokemonConfig {
    /// Create a new config for a species
    pub fn new(species: SpeciesId) -> Self {
        Self {
            species,
            level: DEFAULT_LEVEL,
            ivs: DEFAULT_IVS,
            evs: DEFAULT_EVS,
            nature: NatureId::default(),
            ability: None,
            item: ItemId::default(),
            moves: None,
            current_hp: None,
        }
    }

    /// Create from species string key
    pub fn from_str(species_key: &str) -> Option<Self> {
        SpeciesId::from_str(species_key).map(Self::new)
    }

    // ========================================================================
    // Builder methods
    // ========================================================================

    pub fn level(mut self, level: u8) -> Self {
        self.level = level.clamp(1, 100);
        self
    }

    pub fn ivs(mut self, ivs: [u8; 6]) -> Self {
        self.ivs = ivs.map(|v| v.min(31));
        self
    }

    /// Set EVs, clamping each to 252 and the total to 510.
    pub fn evs(mut self, evs: [u8; 6]) -> Self {
        let mut total: u16 = 0;
        for (slot, &ev) in self.evs.iter_mut().zip(evs.iter()) {
            let remaining = 510u16.saturating_sub(total);
            *slot = ev.min(252).min(remaining.min(252) as u8);
            total += *slot as u16;
        }
        self
    }

    pub fn nature(mut self, nature: NatureId) -> Self {
        self.nature = nature;
        self
    }

    pub fn ability(mut self, ability: AbilityId) -> Self {
        self.ability = Some(ability);
        self
    }

    pub fn item(mut self, item: ItemId) -> Self {
        self.item = item;
        self
    }

    /// Set the moveset; extra entries past four are ignored.
    pub fn moves(mut self, moves: &[MoveId]) -> Self {
        let mut slots = [None; MAX_MOVES];
        for (slot, &id) in slots.iter_mut().zip(moves) {
            *slot = Some(id);
        }
        self.moves = Some(slots);
        self
    }

    pub fn current_hp(mut self, hp: u16) -> Self {
        self.current_hp = Some(hp);
        self
    }

    // ========================================================================
    // Stat Calculation
    // ========================================================================

    /// Final stats from base stats, IVs, EVs, level and nature
    pub fn calculate_stats(&self) -> [u16; 6] {
        let base = self.species.data().base_stats;
        let mut stats = [0u16; 6];
        stats[0] = calc_hp(base[0], self.ivs[0], self.evs[0], self.level);

        const NON_HP: [BattleStat; 5] = [
            BattleStat::Atk,
            BattleStat::Def,
            BattleStat::SpA,
            BattleStat::SpD,
            BattleStat::Spe,
        ];
        for stat in NON_HP {
            let i = stat as usize;
            stats[i] = calc_stat(
                base[i],
                self.ivs[i],
                self.evs[i],
                self.level,
                self.nature.stat_modifier(stat),
            );
        }
        stats
    }

    // ========================================================================
    // Building
    // ========================================================================

    /// Produce a fresh combatant: full PP, no status, neutral stages.
    pub fn build(&self) -> Combatant {
        let species = self.species.data();
        let stats = self.calculate_stats();
        let max_hp = stats[0];

        let move_ids = self
            .moves
            .unwrap_or_else(|| species.default_moves.map(Some));
        let moves = move_ids.map(|id| id.map(MoveSlot::new).unwrap_or_default());

        Combatant {
            species: self.species,
            level: self.level,
            nature: self.nature,
            types: species.types(),
            base_stats: species.base_stats,
            stats,
            hp: self.current_hp.unwrap_or(max_hp).min(max_hp),
            status: None,
            boosts: Boosts::default(),
            volatiles: Vec::new(),
            ability: self.ability.unwrap_or(species.primary_ability()),
            item: self.item,
            moves,
            last_move: None,
        }
    }
}

// ============================================================================
// Team data
// ============================================================================

/// One roster member as it appears in team data.
///
/// ```json
/// { "species": "Garchomp", "level": 50, "ability": "Rough Skin",
///   "item": "Life Orb", "nature": "Jolly", "moves": ["Earthquake", "Dragon Claw"] }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatantSpec {
    pub species: String,
    #[serde(default = "default_level")]
    pub level: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ability: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nature: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evs: Option<[u8; 6]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ivs: Option<[u8; 6]>,
    /// Empty means the species' default moveset.
    #[serde(default)]
    pub moves: Vec<String>,
}

fn default_level() -> u8 {
    DEFAULT_LEVEL
}

/// A full roster in team order; the first member leads.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSpec {
    pub members: Vec<CombatantSpec>,
}

impl CombatantSpec {
    /// Validate names and ranges and produce a config.
    ///
    /// Unknown species, moves and natures are errors. Unknown abilities and
    /// items are tolerated with a warning and treated as absent.
    pub fn to_config(&self) -> Result<PokemonConfig, BattleError> {
        let species = SpeciesId::from_str(&self.species)
            .ok_or_else(|| BattleError::InvalidTeamData(format!("unknown species {:?}", self.species)))?;

        if !(1..=100).contains(&self.level) {
            return Err(BattleError::InvalidTeamData(format!(
                "{}: level {} out of range 1..=100",
                self.species, self.level
            )));
        }
        if self.moves.len() > MAX_MOVES {
            return Err(BattleError::InvalidTeamData(format!(
                "{}: {} moves, at most {MAX_MOVES} allowed",
                self.species,
                self.moves.len()
            )));
        }

        let mut config = PokemonConfig::new(species).level(self.level);

        if !self.moves.is_empty() {
            let moves = self
                .moves
                .iter()
                .map(|name| {
                    MoveId::from_str(name).ok_or_else(|| {
                        BattleError::InvalidTeamData(format!("{}: unknown move {name:?}", self.species))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            config = config.moves(&moves);
        }

        if let Some(name) = &self.nature {
            let nature = NatureId::from_str(name).ok_or_else(|| {
                BattleError::InvalidTeamData(format!("{}: unknown nature {name:?}", self.species))
            })?;
            config = config.nature(nature);
        }
        if let Some(name) = &self.ability {
            config = config.ability(AbilityId::from_str_lenient(name));
        }
        if let Some(name) = &self.item {
            config = config.item(ItemId::from_str(name).unwrap_or_else(|| {
                tracing::warn!(item = name.as_str(), "unknown item, treating as no item");
                ItemId::None
            }));
        }
        if let Some(evs) = self.evs {
            config = config.evs(evs);
        }
        if let Some(ivs) = self.ivs {
            config = config.ivs(ivs);
        }
        Ok(config)
    }
}

impl TeamSpec {
    pub fn from_json(json: &str) -> Result<Self, BattleError> {
        serde_json::from_str(json).map_err(|e| BattleError::InvalidTeamData(e.to_string()))
    }

    /// Build the roster: 1 to 6 members, every member valid.
    pub fn build(&self) -> Result<Vec<Combatant>, BattleError> {
        if self.members.is_empty() || self.members.len() > MAX_TEAM_SIZE {
            return Err(BattleError::InvalidTeamData(format!(
                "team has {} members, expected 1..={MAX_TEAM_SIZE}",
                self.members.len()
            )));
        }
        self.members
            .iter()
            .map(|member| member.to_config().map(|c| c.build()))
            .collect()
    }
}
