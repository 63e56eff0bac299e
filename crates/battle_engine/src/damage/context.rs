//! Damage calculation context.
//!
//! The `DamageContext` struct holds everything a single damage calculation
//! reads: both combatants, the move after type/power hooks, the field, and
//! the resolved effectiveness and STAB.

use crate::field::{Field, Terrain, Weather};
use crate::moves::{Move, MoveCategory, MoveHooks, MoveId};
use crate::rules::Ruleset;
use crate::state::Combatant;
use crate::stats::{crit_attack_stage, crit_defense_stage, effective_stat, BattleStat, BoostStat};
use crate::types::Type;

use super::effectiveness::calculate_effectiveness;
use super::Modifier;

/// Context for a single damage calculation.
pub struct DamageContext<'a> {
    pub attacker: &'a Combatant,
    pub defender: &'a Combatant,
    pub field: &'a Field,
    pub rules: &'a Ruleset,

    // ========================================================================
    // Move Information
    // ========================================================================
    pub move_id: MoveId,
    pub move_data: &'static Move,
    pub hooks: MoveHooks,

    /// Move type after `on_modify_type` (Weather Ball)
    pub move_type: Type,
    pub category: MoveCategory,

    // ========================================================================
    // Calculation Flags
    // ========================================================================
    pub is_crit: bool,
    pub attacker_grounded: bool,
    pub defender_grounded: bool,

    /// Type effectiveness (4 = 1x, 8 = 2x, etc.)
    pub effectiveness: u8,
    pub has_stab: bool,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        attacker: &'a Combatant,
        defender: &'a Combatant,
        move_id: MoveId,
        field: &'a Field,
        rules: &'a Ruleset,
        is_crit: bool,
    ) -> Self {
        let move_data = move_id.data();
        let hooks = move_id.hooks().copied().unwrap_or(MoveHooks::NONE);

        let move_type = match hooks.on_modify_type {
            Some(hook) => hook(attacker, field, move_data.primary_type),
            None => move_data.primary_type,
        };
        let typeless = move_data.is_typeless();
        let has_stab = !typeless && attacker.has_type(move_type);
        let effectiveness = calculate_effectiveness(move_type, typeless, defender, field);

        Self {
            attacker,
            defender,
            field,
            rules,
            move_id,
            move_data,
            hooks,
            move_type,
            category: move_data.category,
            is_crit,
            attacker_grounded: attacker.is_grounded(field),
            defender_grounded: defender.is_grounded(field),
            effectiveness,
            has_stab,
        }
    }

    /// Base power after move hooks and terrain.
    pub fn base_power(&self) -> u32 {
        let mut bp = self.move_data.power as u16;

        if let Some(condition) = self.hooks.on_base_power_condition {
            if condition(self.attacker, self.defender, self.field, self.move_data) {
                bp = self.hooks.conditional_multiplier.apply(bp as u32) as u16;
            }
        }
        if let Some(modify) = self.hooks.on_modify_base_power {
            bp = modify(self.attacker, self.defender, self.field, self.move_data, bp);
        }

        let mut bp = bp as u32;
        let terrain = self.field.terrain;
        if self.attacker_grounded && terrain.boosted_type() == Some(self.move_type) {
            bp = Modifier::ONE_POINT_THREE.apply(bp);
        }
        if terrain == Terrain::Misty && self.move_type == Type::Dragon && self.defender_grounded {
            bp = Modifier::HALF.apply(bp);
        }
        bp.max(1)
    }

    /// Get the attack/defense stat pair used by the move's category.
    pub fn stat_pair(&self) -> (BattleStat, BoostStat, BattleStat, BoostStat) {
        match self.category {
            MoveCategory::Special => (BattleStat::SpA, BoostStat::SpA, BattleStat::SpD, BoostStat::SpD),
            _ => (BattleStat::Atk, BoostStat::Atk, BattleStat::Def, BoostStat::Def),
        }
    }

    /// Attack stat after stages, ability and item.
    pub fn attack(&self) -> u32 {
        let (stat, boost, _, _) = self.stat_pair();
        let mut stage = self.attacker.boosts.get(boost);
        if self.is_crit {
            stage = crit_attack_stage(stage);
        }

        let ability_mod = self
            .attacker
            .ability
            .hooks()
            .on_modify_attack
            .map_or(Modifier::ONE, |hook| hook(self.attacker, self.defender, self.move_type, self.category));
        let attack = effective_stat(self.attacker.stat(stat), stage, ability_mod) as u32;

        let item_mod = self
            .attacker
            .item
            .hooks()
            .on_modify_attack
            .map_or(Modifier::ONE, |hook| hook(self.attacker, self.category));
        item_mod.apply(attack).max(1)
    }

    /// Defense stat after stages, ability and weather.
    pub fn defense(&self) -> u32 {
        let (_, _, stat, boost) = self.stat_pair();
        let mut stage = self.defender.boosts.get(boost);
        if self.is_crit {
            stage = crit_defense_stage(stage);
        }

        let ability_mod = self
            .defender
            .ability
            .hooks()
            .on_modify_defense
            .map_or(Modifier::ONE, |hook| hook(self.defender, self.attacker, self.move_type, self.category));
        let defense = effective_stat(self.defender.stat(stat), stage, ability_mod) as u32;

        let weather_mod = match (self.field.weather, self.category) {
            (Weather::Snow, MoveCategory::Physical) if self.defender.has_type(Type::Ice) => {
                Modifier::ONE_POINT_FIVE
            }
            (Weather::Sand, MoveCategory::Special) if self.defender.has_type(Type::Rock) => {
                Modifier::ONE_POINT_FIVE
            }
            _ => Modifier::ONE,
        };
        weather_mod.apply(defense).max(1)
    }

    /// Burn halves physical damage unless the move or ability says otherwise.
    pub fn burn_applies(&self) -> bool {
        use crate::abilities::AbilityId;
        use crate::conditions::Status;

        self.category == MoveCategory::Physical
            && self.attacker.status_id() == Some(Status::Burn)
            && !self.hooks.ignores_burn
            && self.attacker.ability != AbilityId::Guts
    }
}
