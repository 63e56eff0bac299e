use super::*;
use crate::damage::Modifier;
use crate::entities::PokemonConfig;
use crate::events::BattleEvent;
use crate::field::{Field, Terrain, Weather};
use crate::moves::{MoveCategory, MoveId};
use crate::rules::Ruleset;
use crate::state::{BattleState, Combatant, CombatantRef, SideId};
use crate::stats::BoostStat;
use crate::types::Type;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn mon(species: &str, ability: AbilityId) -> Combatant {
    PokemonConfig::from_str(species)
        .unwrap()
        .ability(ability)
        .build()
}

fn duel(p1: Combatant, p2: Combatant) -> BattleState {
    BattleState::new(vec![p1], vec![p2], Ruleset::default())
}

const P1: CombatantRef = CombatantRef::new(SideId::P1, 0);
const P2: CombatantRef = CombatantRef::new(SideId::P2, 0);

#[test]
fn test_registry_lookup() {
    // Drizzle should have a hook
    let hook = ABILITY_REGISTRY[AbilityId::Drizzle as usize];
    assert!(hook.is_some());
    assert!(hook.unwrap().on_switch_in.is_some());

    // No ability resolves to the empty table
    assert!(ABILITY_REGISTRY[AbilityId::NoAbility as usize].is_none());
    assert!(AbilityId::Pressure.hooks().on_switch_in.is_none());
}

#[test]
fn test_lookup_by_name() {
    assert_eq!(AbilityId::from_str("Sand Stream"), Some(AbilityId::SandStream));
    assert_eq!(AbilityId::from_str("tinted-lens"), Some(AbilityId::TintedLens));
    assert_eq!(AbilityId::from_str("not an ability"), None);
    assert_eq!(AbilityId::from_str_lenient("not an ability"), AbilityId::NoAbility);
}

#[test]
fn test_drizzle_hook() {
    let mut state = duel(
        mon("Blastoise", AbilityId::Drizzle),
        mon("Charizard", AbilityId::Blaze),
    );
    let mut events = Vec::new();

    assert_eq!(state.field.weather, Weather::None);

    let on_switch_in = AbilityId::Drizzle.hooks().on_switch_in.unwrap();
    on_switch_in(&mut state, P1, &mut events);

    assert_eq!(state.field.weather, Weather::Rain);
    assert_eq!(state.field.weather_turns, 5);
    assert!(matches!(events[0], BattleEvent::AbilityActivated { owner, .. } if owner == P1));

    // Same weather again does nothing
    events.clear();
    on_switch_in(&mut state, P1, &mut events);
    assert!(events.is_empty());
}

#[test]
fn test_surge_sets_terrain() {
    let mut state = duel(
        mon("Pikachu", AbilityId::ElectricSurge),
        mon("Gengar", AbilityId::Levitate),
    );
    let mut events = Vec::new();
    (AbilityId::ElectricSurge.hooks().on_switch_in.unwrap())(&mut state, P1, &mut events);
    assert_eq!(state.field.terrain, Terrain::Electric);
    assert_eq!(state.field.terrain_turns, 5);
}

#[test]
fn test_intimidate_lowers_foe_attack() {
    let mut state = duel(
        mon("Gyarados", AbilityId::Intimidate),
        mon("Machamp", AbilityId::Guts),
    );
    let mut events = Vec::new();
    (AbilityId::Intimidate.hooks().on_switch_in.unwrap())(&mut state, P1, &mut events);
    assert_eq!(state.combatant(P2).boosts.get(BoostStat::Atk), -1);
    assert!(events.contains(&BattleEvent::BoostChanged {
        target: P2,
        stat: BoostStat::Atk,
        delta: -1,
    }));
}

#[test]
fn test_intimidate_at_floor_reports_cap() {
    let mut state = duel(
        mon("Gyarados", AbilityId::Intimidate),
        mon("Machamp", AbilityId::Guts),
    );
    state.combatant_mut(P2).boosts.apply(BoostStat::Atk, -6);
    let mut events = Vec::new();
    (AbilityId::Intimidate.hooks().on_switch_in.unwrap())(&mut state, P1, &mut events);
    assert_eq!(state.combatant(P2).boosts.get(BoostStat::Atk), -6);
    assert!(events.contains(&BattleEvent::BoostCapped {
        target: P2,
        stat: BoostStat::Atk,
        rising: false,
    }));
}

#[test]
fn test_download_picks_weaker_defense() {
    // Blissey: tiny Def, huge SpD -> +1 Atk
    let mut state = duel(
        mon("Porygon2", AbilityId::Download),
        mon("Blissey", AbilityId::NaturalCure),
    );
    let mut events = Vec::new();
    (AbilityId::Download.hooks().on_switch_in.unwrap())(&mut state, P1, &mut events);
    assert_eq!(state.combatant(P1).boosts.get(BoostStat::Atk), 1);
    assert_eq!(state.combatant(P1).boosts.get(BoostStat::SpA), 0);

    // Skarmory: Def > SpD -> +1 SpA
    let mut state = duel(
        mon("Porygon2", AbilityId::Download),
        mon("Skarmory", AbilityId::Sturdy),
    );
    (AbilityId::Download.hooks().on_switch_in.unwrap())(&mut state, P1, &mut events);
    assert_eq!(state.combatant(P1).boosts.get(BoostStat::SpA), 1);
}

#[test]
fn test_pinch_abilities() {
    let mut charizard = mon("Charizard", AbilityId::Blaze);
    let foe = mon("Venusaur", AbilityId::Overgrow);
    let blaze = AbilityId::Blaze.hooks().on_modify_attack.unwrap();

    assert_eq!(blaze(&charizard, &foe, Type::Fire, MoveCategory::Special), Modifier::ONE);
    charizard.hp = charizard.max_hp() / 3;
    assert_eq!(
        blaze(&charizard, &foe, Type::Fire, MoveCategory::Special),
        Modifier::ONE_POINT_FIVE
    );
    assert_eq!(blaze(&charizard, &foe, Type::Flying, MoveCategory::Special), Modifier::ONE);
}

#[test]
fn test_guts_requires_status_and_physical() {
    let mut machamp = mon("Machamp", AbilityId::Guts);
    let foe = mon("Snorlax", AbilityId::ThickFat);
    let guts = AbilityId::Guts.hooks().on_modify_attack.unwrap();

    assert_eq!(guts(&machamp, &foe, Type::Fighting, MoveCategory::Physical), Modifier::ONE);
    machamp.status = Some(crate::conditions::EffectState::new(crate::conditions::Status::Burn));
    assert_eq!(
        guts(&machamp, &foe, Type::Fighting, MoveCategory::Physical),
        Modifier::ONE_POINT_FIVE
    );
    assert_eq!(guts(&machamp, &foe, Type::Fighting, MoveCategory::Special), Modifier::ONE);
}

#[test]
fn test_thick_fat() {
    let snorlax = mon("Snorlax", AbilityId::ThickFat);
    let foe = mon("Charizard", AbilityId::Blaze);
    let thick_fat = AbilityId::ThickFat.hooks().on_modify_defense.unwrap();
    assert_eq!(thick_fat(&snorlax, &foe, Type::Fire, MoveCategory::Special), Modifier::DOUBLE);
    assert_eq!(thick_fat(&snorlax, &foe, Type::Ice, MoveCategory::Physical), Modifier::DOUBLE);
    assert_eq!(thick_fat(&snorlax, &foe, Type::Water, MoveCategory::Special), Modifier::ONE);
}

#[test]
fn test_final_modifiers() {
    let mut dragonite = mon("Dragonite", AbilityId::Multiscale);
    let foe = mon("Lapras", AbilityId::WaterAbsorb);

    let multiscale = AbilityId::Multiscale.hooks().on_defender_final_mod.unwrap();
    assert_eq!(multiscale(&dragonite, &foe, 16), Modifier::HALF);
    dragonite.hp -= 1;
    assert_eq!(multiscale(&dragonite, &foe, 16), Modifier::ONE);

    let filter = AbilityId::Filter.hooks().on_defender_final_mod.unwrap();
    assert_eq!(filter(&dragonite, &foe, 8), Modifier::FILTER);
    assert_eq!(filter(&dragonite, &foe, 4), Modifier::ONE);

    let tinted = AbilityId::TintedLens.hooks().on_attacker_final_mod.unwrap();
    assert_eq!(tinted(&foe, &dragonite, 2), Modifier::DOUBLE);
    assert_eq!(tinted(&foe, &dragonite, 0), Modifier::ONE);
}

#[test]
fn test_levitate_and_grounding() {
    let gengar = mon("Gengar", AbilityId::Levitate);
    let mut field = Field::default();
    assert!(!gengar.is_grounded(&field));
    assert!(AbilityId::Levitate.hooks().on_type_immunity.unwrap()(Type::Ground));
    assert!(!AbilityId::Levitate.hooks().on_type_immunity.unwrap()(Type::Fire));

    field.set_gravity(5);
    assert!(gengar.is_grounded(&field));
}

#[test]
fn test_absorb_abilities_block_their_type() {
    let volt = AbilityId::VoltAbsorb.hooks().on_type_immunity.unwrap();
    let water = AbilityId::WaterAbsorb.hooks().on_type_immunity.unwrap();
    assert!(volt(Type::Electric) && !volt(Type::Water));
    assert!(water(Type::Water) && !water(Type::Electric));
}

#[test]
fn test_speed_abilities_follow_weather() {
    let venusaur = mon("Exeggutor", AbilityId::Chlorophyll);
    let mut field = Field::default();
    let chlorophyll = AbilityId::Chlorophyll.hooks().on_modify_speed.unwrap();
    assert_eq!(chlorophyll(&venusaur, &field), Modifier::ONE);
    field.set_weather(Weather::Sun, 5);
    assert_eq!(chlorophyll(&venusaur, &field), Modifier::DOUBLE);
    assert_eq!(
        AbilityId::SwiftSwim.hooks().on_modify_speed.unwrap()(&venusaur, &field),
        Modifier::ONE
    );
}

#[test]
fn test_speed_boost_end_of_turn() {
    let mut state = duel(
        mon("Blaziken", AbilityId::SpeedBoost),
        mon("Swampert", AbilityId::Torrent),
    );
    let mut events = Vec::new();
    let hook = AbilityId::SpeedBoost.hooks().on_end_of_turn.unwrap();
    for _ in 0..8 {
        hook(&mut state, P1, &mut events);
    }
    assert_eq!(state.combatant(P1).boosts.get(BoostStat::Spe), 6);
}

#[test]
fn test_rough_skin_hurts_contact_attackers() {
    let mut state = duel(
        mon("Machamp", AbilityId::Guts),
        mon("Garchomp", AbilityId::RoughSkin),
    );
    let mut rng = StdRng::seed_from_u64(7);
    let mut events = Vec::new();
    let hook = AbilityId::RoughSkin.hooks().on_damaging_hit.unwrap();

    let max = state.combatant(P1).max_hp();
    hook(&mut state, P2, P1, MoveId::CloseCombat.data(), 50, &mut rng, &mut events);
    assert_eq!(state.combatant(P1).hp, max - max / 8);

    // Non-contact moves are ignored
    let hp = state.combatant(P1).hp;
    hook(&mut state, P2, P1, MoveId::Earthquake.data(), 50, &mut rng, &mut events);
    assert_eq!(state.combatant(P1).hp, hp);
}

#[test]
fn test_static_paralyzes_some_contact_attackers() {
    let hook = AbilityId::Static.hooks().on_damaging_hit.unwrap();
    let mut rng = StdRng::seed_from_u64(11);
    let mut paralyzed = 0;
    for _ in 0..200 {
        let mut state = duel(
            mon("Machamp", AbilityId::Guts),
            mon("Pikachu", AbilityId::Static),
        );
        let mut events = Vec::new();
        hook(&mut state, P2, P1, MoveId::CloseCombat.data(), 10, &mut rng, &mut events);
        if state.combatant(P1).has_status() {
            paralyzed += 1;
        }
    }
    // 30% nominal
    assert!((30..=90).contains(&paralyzed), "paralyzed {paralyzed}/200");
}
