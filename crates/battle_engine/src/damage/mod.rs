//! Damage calculation pipeline.
//!
//! # Architecture
//!
//! 1. **Base Power**: move hooks (Hex, Facade, Weather Ball, ...) then terrain
//! 2. **Effective Stats**: stages (crit-adjusted), ability and item stat hooks
//! 3. **Base Damage**: `floor(floor(floor(2 * Level / 5 + 2) * Power * Atk / Def) / 50) + 2`
//! 4. **Pre-Random Mods**: weather, critical hit
//! 5. **Final Damage**: random roll, STAB, type effectiveness, burn, final
//!    modifiers, floor to 1
//!
//! Every multiplication truncates. The calculation is a pure function of
//! its inputs; the caller supplies the crit decision and the roll index.
//!
//! # Usage
//!
//! ```
//! use battle_engine::damage::calculate_damage;
//! use battle_engine::{Field, MoveId, PokemonConfig, Ruleset};
//!
//! let pikachu = PokemonConfig::from_str("pikachu").unwrap().build();
//! let gyarados = PokemonConfig::from_str("gyarados").unwrap().build();
//! let result = calculate_damage(
//!     &pikachu,
//!     &gyarados,
//!     MoveId::Thunderbolt,
//!     &Field::default(),
//!     &Ruleset::default(),
//!     false,
//!     15,
//! );
//! assert_eq!(result.effectiveness, 16);
//! assert_eq!(result.damage, result.rolls[15]);
//! ```

mod context;
mod effectiveness;
mod formula;
mod modifier;
mod pipeline;

pub use context::DamageContext;
pub use effectiveness::calculate_effectiveness;
pub use formula::{apply_effectiveness, apply_random_roll, get_base_damage};
pub use modifier::Modifier;
pub use pipeline::{compute_final_damage, compute_roll, FinalPhase};

use serde::Serialize;

use crate::field::{weather_modifier, Field};
use crate::moves::{MoveFlags, MoveId};
use crate::prng::DAMAGE_ROLLS;
use crate::rules::Ruleset;
use crate::state::Combatant;

/// Result of a damage calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DamageResult {
    /// All 16 possible damage values (random roll 85-100)
    pub rolls: [u16; DAMAGE_ROLLS as usize],

    /// The roll selected by the caller's draw
    pub damage: u16,

    /// Type effectiveness multiplier (4 = neutral, 8 = 2x, etc.)
    pub effectiveness: u8,

    pub is_crit: bool,
}

impl DamageResult {
    /// Zero-damage result (status moves)
    pub fn zero(effectiveness: u8) -> Self {
        Self {
            rolls: [0; DAMAGE_ROLLS as usize],
            damage: 0,
            effectiveness,
            is_crit: false,
        }
    }

    /// Minimum damage (roll index 0)
    pub fn min(&self) -> u16 {
        self.rolls[0]
    }

    /// Maximum damage (roll index 15)
    pub fn max(&self) -> u16 {
        self.rolls[DAMAGE_ROLLS as usize - 1]
    }
}

/// Calculate damage for a move.
///
/// `roll` is the random draw in `0..16` (85% to 100%). Status moves deal 0
/// and bypass the pipeline; an immune target takes 0.
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    move_id: MoveId,
    field: &Field,
    rules: &Ruleset,
    is_crit: bool,
    roll: u8,
) -> DamageResult {
    let ctx = DamageContext::new(attacker, defender, move_id, field, rules, is_crit);

    if ctx.move_data.is_status() || ctx.move_data.power == 0 {
        return DamageResult::zero(ctx.effectiveness);
    }
    if ctx.effectiveness == 0 {
        return DamageResult {
            is_crit,
            ..DamageResult::zero(0)
        };
    }

    let base_damage = pre_random_damage(&ctx);
    let phase = final_phase(&ctx);
    let rolls = compute_final_damage(base_damage, &phase);

    tracing::trace!(
        attacker = attacker.name(),
        defender = defender.name(),
        move_name = ctx.move_data.name,
        base_damage,
        effectiveness = ctx.effectiveness,
        is_crit,
        "damage rolls computed"
    );

    DamageResult {
        rolls,
        damage: rolls[roll.min(DAMAGE_ROLLS - 1) as usize],
        effectiveness: ctx.effectiveness,
        is_crit,
    }
}

/// Base damage with weather and critical multipliers applied.
fn pre_random_damage(ctx: &DamageContext<'_>) -> u32 {
    let mut damage = get_base_damage(
        ctx.attacker.level as u32,
        ctx.base_power(),
        ctx.attack(),
        ctx.defense(),
    );
    damage = weather_modifier(ctx.field.weather, ctx.move_type).apply(damage);
    if ctx.is_crit {
        damage = ctx.rules.crit_multiplier.apply(damage);
    }
    damage
}

fn final_phase(ctx: &DamageContext<'_>) -> FinalPhase {
    let eff = ctx.effectiveness;
    let attacker_ability = ctx
        .attacker
        .ability
        .hooks()
        .on_attacker_final_mod
        .map_or(Modifier::ONE, |hook| hook(ctx.attacker, ctx.defender, eff));
    let defender_ability = ctx
        .defender
        .ability
        .hooks()
        .on_defender_final_mod
        .map_or(Modifier::ONE, |hook| hook(ctx.defender, ctx.attacker, eff));
    let attacker_item = ctx
        .attacker
        .item
        .hooks()
        .on_final_modifier
        .map_or(Modifier::ONE, |hook| hook(ctx.attacker, eff));

    FinalPhase {
        effectiveness: eff,
        has_stab: ctx.has_stab,
        burned: ctx.burn_applies(),
        final_mods: [attacker_ability, defender_ability, attacker_item],
    }
}

/// Critical hit stage for a move: high-crit moves +1, Focus Energy +2.
pub fn crit_stage(attacker: &Combatant, move_id: MoveId) -> u8 {
    let mut stage = 0;
    if move_id.data().flags.contains(MoveFlags::HIGH_CRIT) {
        stage += 1;
    }
    if attacker.has_volatile(crate::conditions::Volatile::FocusEnergy) {
        stage += 2;
    }
    stage
}

/// Whether the defender can be critically hit at all.
pub fn can_be_crit(defender: &Combatant) -> bool {
    !defender
        .ability
        .hooks()
        .on_crit_immunity
        .is_some_and(|immune| immune(defender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::abilities::AbilityId;
    use crate::conditions::{EffectState, Status};
    use crate::entities::PokemonConfig;
    use crate::field::{Terrain, Weather};
    use crate::items::ItemId;
    use crate::stats::BoostStat;

    fn mon(name: &str) -> Combatant {
        PokemonConfig::from_str(name).unwrap().build()
    }

    fn calc(attacker: &Combatant, defender: &Combatant, move_id: MoveId) -> DamageResult {
        calculate_damage(attacker, defender, move_id, &Field::default(), &Ruleset::default(), false, 15)
    }

    #[test]
    fn test_basic_damage_calc() {
        let pikachu = mon("pikachu");
        let venusaur = mon("venusaur");
        let result = calc(&pikachu, &venusaur, MoveId::Thunderbolt);

        // Electric vs Grass/Poison = 0.5x
        assert_eq!(result.effectiveness, 2);
        assert!(result.max() > 0);
        assert!(result.min() <= result.max());
        assert_eq!(result.damage, result.max());
    }

    #[test]
    fn test_deterministic_for_fixed_inputs() {
        let a = mon("garchomp");
        let d = mon("metagross");
        let field = Field::default();
        let rules = Ruleset::default();
        for roll in 0..16 {
            let first = calculate_damage(&a, &d, MoveId::Earthquake, &field, &rules, false, roll);
            let second = calculate_damage(&a, &d, MoveId::Earthquake, &field, &rules, false, roll);
            assert_eq!(first, second);
            assert_eq!(first.damage, first.rolls[roll as usize]);
        }
    }

    #[test]
    fn test_type_immunity() {
        let garchomp = mon("garchomp");
        let result = calc(&garchomp, &mon("gengar"), MoveId::Earthquake);
        assert_eq!(result.effectiveness, 0);
        assert_eq!(result.rolls, [0; 16]);
    }

    #[test]
    fn test_status_moves_deal_nothing() {
        let result = calc(&mon("pikachu"), &mon("snorlax"), MoveId::ThunderWave);
        assert_eq!(result.damage, 0);
    }

    #[test]
    fn test_crit_ignores_bad_stages() {
        let mut attacker = mon("machamp");
        let defender = mon("snorlax");
        let field = Field::default();
        let rules = Ruleset::default();

        attacker.boosts.apply(BoostStat::Atk, -2);
        let weakened = calculate_damage(&attacker, &defender, MoveId::CloseCombat, &field, &rules, true, 15);
        attacker.boosts.clear();
        let clean = calculate_damage(&attacker, &defender, MoveId::CloseCombat, &field, &rules, true, 15);
        assert_eq!(weakened.damage, clean.damage);

        let normal = calculate_damage(&attacker, &defender, MoveId::CloseCombat, &field, &rules, false, 15);
        assert!(clean.damage > normal.damage);
    }

    #[test]
    fn test_weather_boost_and_penalty() {
        let charizard = mon("charizard");
        let target = mon("snorlax");
        let rules = Ruleset::default();
        let mut field = Field::default();
        let neutral = calculate_damage(&charizard, &target, MoveId::Flamethrower, &field, &rules, false, 15);
        field.set_weather(Weather::Sun, 5);
        let sunny = calculate_damage(&charizard, &target, MoveId::Flamethrower, &field, &rules, false, 15);
        field.weather = Weather::Rain;
        let rainy = calculate_damage(&charizard, &target, MoveId::Flamethrower, &field, &rules, false, 15);
        assert!(sunny.damage > neutral.damage);
        assert!(rainy.damage < neutral.damage);
    }

    #[test]
    fn test_thick_fat_halves_fire() {
        let charizard = mon("charizard");
        let mut snorlax = mon("snorlax");
        let with = calc(&charizard, &snorlax, MoveId::Flamethrower);
        snorlax.ability = AbilityId::NoAbility;
        let without = calc(&charizard, &snorlax, MoveId::Flamethrower);
        assert!(with.damage * 3 < without.damage * 2);
    }

    #[test]
    fn test_guts_and_facade_ignore_burn() {
        let mut snorlax = mon("snorlax");
        let target = mon("blissey");
        let clean = calc(&snorlax, &target, MoveId::BodySlam);

        snorlax.status = Some(EffectState::new(Status::Burn));
        let burned = calc(&snorlax, &target, MoveId::BodySlam);
        assert!(burned.damage < clean.damage);

        let facade = calc(&snorlax, &target, MoveId::Facade);
        snorlax.status = None;
        let facade_clean = calc(&snorlax, &target, MoveId::Facade);
        assert!(facade.damage > facade_clean.damage);

        let mut machamp = mon("machamp");
        assert_eq!(machamp.ability, AbilityId::Guts);
        let clean = calc(&machamp, &target, MoveId::CloseCombat);
        machamp.status = Some(EffectState::new(Status::Burn));
        let gutsy = calc(&machamp, &target, MoveId::CloseCombat);
        assert!(gutsy.damage > clean.damage);
    }

    #[test]
    fn test_terrain_boosts_grounded_attacker() {
        let pikachu = mon("pikachu");
        let target = mon("snorlax");
        let rules = Ruleset::default();
        let mut field = Field::default();
        let plain = calculate_damage(&pikachu, &target, MoveId::Thunderbolt, &field, &rules, false, 15);
        field.set_terrain(Terrain::Electric, 5);
        let boosted = calculate_damage(&pikachu, &target, MoveId::Thunderbolt, &field, &rules, false, 15);
        assert!(boosted.damage > plain.damage);

        // Misty halves Dragon moves against grounded targets
        let dragonite = mon("dragonite");
        field.set_terrain(Terrain::Misty, 5);
        let misty = calculate_damage(&dragonite, &target, MoveId::DragonClaw, &field, &rules, false, 15);
        field.terrain = Terrain::None;
        let normal = calculate_damage(&dragonite, &target, MoveId::DragonClaw, &field, &rules, false, 15);
        assert!(misty.damage < normal.damage);
    }

    #[test]
    fn test_items_and_final_mods() {
        let mut garchomp = mon("garchomp");
        let target = mon("metagross");
        let plain = calc(&garchomp, &target, MoveId::Earthquake);
        garchomp.item = ItemId::LifeOrb;
        let orb = calc(&garchomp, &target, MoveId::Earthquake);
        assert!(orb.damage > plain.damage);
        garchomp.item = ItemId::ChoiceBand;
        let band = calc(&garchomp, &target, MoveId::Earthquake);
        assert!(band.damage > plain.damage);

        let dragonite = mon("dragonite");
        let full = calc(&garchomp, &dragonite, MoveId::StoneEdge);
        let mut hurt = dragonite.clone();
        hurt.hp -= 1;
        let chipped = calc(&garchomp, &hurt, MoveId::StoneEdge);
        assert!(full.damage < chipped.damage);
    }

    #[test]
    fn test_struggle_is_neutral_and_unboosted() {
        let gengar = mon("gengar");
        let result = calc(&mon("pikachu"), &gengar, MoveId::Struggle);
        assert_eq!(result.effectiveness, 4);
        assert!(result.damage > 0);
    }

    #[test]
    fn test_crit_stage_and_immunity() {
        let mut lucario = mon("lucario");
        assert_eq!(crit_stage(&lucario, MoveId::CloseCombat), 0);
        assert_eq!(crit_stage(&lucario, MoveId::StoneEdge), 1);
        lucario.add_volatile(EffectState::new(crate::conditions::Volatile::FocusEnergy));
        assert_eq!(crit_stage(&lucario, MoveId::StoneEdge), 3);

        assert!(!can_be_crit(&mon("cloyster")));
        assert!(can_be_crit(&mon("pikachu")));
    }
}
