//! Team and state builders.

use battle_engine::entities::{CombatantSpec, PokemonConfig, TeamSpec};
use battle_engine::moves::MoveId;
use battle_engine::{Battle, BattleState, Combatant, Ruleset, SideId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A level 50 member with the species' default moves.
pub fn member(species: &str) -> CombatantSpec {
    CombatantSpec {
        species: species.to_string(),
        level: 50,
        ability: None,
        item: None,
        nature: None,
        evs: None,
        ivs: None,
        moves: vec![],
    }
}

pub fn team(species: &[&str]) -> TeamSpec {
    TeamSpec {
        members: species.iter().map(|s| member(s)).collect(),
    }
}

pub fn mon(species: &str, moves: &[MoveId]) -> Combatant {
    PokemonConfig::from_str(species)
        .unwrap_or_else(|| panic!("unknown species {species}"))
        .moves(moves)
        .build()
}

/// A state with both leads already active and no switch-in hooks run.
pub fn duel(p1: Combatant, p2: Combatant) -> BattleState {
    BattleState::new(vec![p1], vec![p2], Ruleset::default())
}

/// Play a battle with both sides picking uniformly random legal actions.
///
/// Returns the final battle and the number of turns resolved.
pub fn play_random(p1: &TeamSpec, p2: &TeamSpec, seed: u64, max_steps: usize) -> (Battle, usize) {
    let (mut battle, _) = Battle::reset(p1, p2, seed).expect("valid teams");
    let mut chooser = StdRng::seed_from_u64(seed.wrapping_mul(31).wrapping_add(7));
    let mut steps = 0;
    while !battle.is_over() && steps < max_steps {
        let pick = |side: SideId, chooser: &mut StdRng| {
            let options = battle.legal_actions(side).actions();
            assert!(!options.is_empty(), "{side} has no legal action");
            options[chooser.gen_range(0..options.len())]
        };
        let a = pick(SideId::P1, &mut chooser);
        let b = pick(SideId::P2, &mut chooser);
        battle.step(a, b).expect("legal actions resolve");
        steps += 1;
    }
    (battle, steps)
}
