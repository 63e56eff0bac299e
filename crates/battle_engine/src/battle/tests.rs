use super::*;
use crate::abilities::AbilityId;
use crate::entities::{CombatantSpec, PokemonConfig};
use crate::field::Weather;
use crate::moves::MoveId;
use crate::state::Combatant;
use crate::stats::BoostStat;

const P1_LEAD: CombatantRef = CombatantRef::new(SideId::P1, 0);
const P2_LEAD: CombatantRef = CombatantRef::new(SideId::P2, 0);

fn team(species: &[&str]) -> TeamSpec {
    TeamSpec {
        members: species
            .iter()
            .map(|name| CombatantSpec {
                species: name.to_string(),
                level: 50,
                ability: None,
                item: None,
                nature: None,
                evs: None,
                ivs: None,
                moves: vec![],
            })
            .collect(),
    }
}

fn mon(species: &str, moves: &[MoveId]) -> Combatant {
    PokemonConfig::from_str(species).unwrap().moves(moves).build()
}

fn at_hp(mut combatant: Combatant, hp: u16) -> Combatant {
    combatant.hp = hp;
    combatant
}

fn rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[test]
fn test_reset_announces_leads_then_hooks() {
    let opening = reset(&team(&["Gyarados"]), &team(&["Machamp"])).unwrap();
    assert!(matches!(
        opening.events[0],
        BattleEvent::SwitchedIn { target: P1_LEAD, species: "Gyarados", .. }
    ));
    assert!(matches!(
        opening.events[1],
        BattleEvent::SwitchedIn { target: P2_LEAD, species: "Machamp", .. }
    ));
    assert_eq!(
        opening.events[2],
        BattleEvent::AbilityActivated {
            owner: P1_LEAD,
            ability: "Intimidate"
        }
    );
    assert_eq!(opening.state.active(SideId::P2).boosts.get(BoostStat::Atk), -1);
    assert_eq!(opening.state.turn, 0);
}

#[test]
fn test_reset_rejects_bad_team() {
    let err = reset(&team(&["Missingno"]), &team(&["Mew"])).unwrap_err();
    assert!(matches!(err, BattleError::InvalidTeamData(_)));
    assert!(reset(&TeamSpec { members: vec![] }, &team(&["Mew"])).is_err());
}

#[test]
fn test_reset_rejects_zero_turn_weather() {
    let rules = Ruleset {
        weather_turns: 0,
        ..Ruleset::default()
    };
    let err = reset_with_rules(&team(&["Tyranitar"]), &team(&["Mew"]), rules).unwrap_err();
    assert!(matches!(err, BattleError::InvalidRules(_)));
}

#[test]
fn test_illegal_action_is_rejected() {
    let opening = reset(&team(&["Mew"]), &team(&["Snorlax"])).unwrap();
    let before = opening.state.clone();
    let err = resolve_turn(&opening.state, Action::Switch(1), Action::Move(0), &mut rng(0)).unwrap_err();
    assert_eq!(
        err,
        BattleError::IllegalAction {
            side: SideId::P1,
            action: Action::Switch(1),
            reason: "no such roster slot",
        }
    );
    assert_eq!(opening.state, before);

    let err = resolve_turn(&opening.state, Action::Move(0), Action::Pass, &mut rng(0)).unwrap_err();
    assert!(matches!(err, BattleError::IllegalAction { side: SideId::P2, .. }));
}

#[test]
fn test_knockout_requests_replacement() {
    let state = BattleState::new(
        vec![mon("mewtwo", &[MoveId::Psychic])],
        vec![
            at_hp(mon("machamp", &[MoveId::CloseCombat]), 1),
            mon("snorlax", &[MoveId::BodySlam]),
        ],
        Ruleset::default(),
    );

    let turn = resolve_turn(&state, Action::Move(0), Action::Move(0), &mut rng(3)).unwrap();
    assert!(!turn.terminal);
    assert_eq!(turn.state.turn, 1);
    assert_eq!(turn.state.request, Request::Replace { sides: [false, true] });
    assert!(turn.events.contains(&BattleEvent::Fainted { target: P2_LEAD }));
    // Machamp fainted before it could act
    assert!(!turn
        .events
        .iter()
        .any(|e| matches!(e, BattleEvent::MoveUsed { user, .. } if *user == P2_LEAD)));
    assert!(turn.state.combatant(P2_LEAD).volatiles.is_empty());

    assert_eq!(legal_actions(&turn.state, SideId::P1), ActionMask::PASS);
    assert_eq!(legal_actions(&turn.state, SideId::P2), ActionMask::SWITCH_1);

    let replaced = resolve_turn(&turn.state, Action::Pass, Action::Switch(1), &mut rng(3)).unwrap();
    assert_eq!(replaced.state.turn, 1);
    assert_eq!(replaced.state.request, Request::Turn);
    assert_eq!(replaced.state.side(SideId::P2).active, 1);
    assert!(matches!(
        replaced.events[..],
        [BattleEvent::SwitchedIn { species: "Snorlax", .. }]
    ));
}

#[test]
fn test_wiped_roster_is_terminal() {
    let state = BattleState::new(
        vec![mon("mewtwo", &[MoveId::Psychic])],
        vec![at_hp(mon("machamp", &[MoveId::CloseCombat]), 1)],
        Ruleset::default(),
    );

    let turn = resolve_turn(&state, Action::Move(0), Action::Move(0), &mut rng(9)).unwrap();
    assert!(turn.terminal);
    assert_eq!(turn.winner, Some(SideId::P1));
    assert_eq!(
        turn.events.last(),
        Some(&BattleEvent::BattleEnded {
            winner: Some(SideId::P1)
        })
    );
    assert!(legal_actions(&turn.state, SideId::P1).is_empty());
    assert_eq!(
        resolve_turn(&turn.state, Action::Move(0), Action::Move(0), &mut rng(9)).unwrap_err(),
        BattleError::BattleOver
    );
}

#[test]
fn test_last_of_six_fainting_ends_the_battle() {
    let mut roster = vec![at_hp(mon("machamp", &[MoveId::CloseCombat]), 1)];
    for species in ["snorlax", "jolteon", "gengar", "lapras", "starmie"] {
        roster.push(at_hp(mon(species, &[MoveId::Growl]), 0));
    }
    let state = BattleState::new(vec![mon("mewtwo", &[MoveId::Psychic])], roster, Ruleset::default());
    assert!(!state.side(SideId::P2).has_reserve());

    let turn = resolve_turn(&state, Action::Move(0), Action::Move(0), &mut rng(4)).unwrap();
    let p2 = turn.state.side(SideId::P2);
    assert_eq!(p2.roster.len(), 6);
    assert!(p2.all_fainted());
    assert!(turn.terminal);
    assert_eq!(turn.winner, Some(SideId::P1));
    assert!(legal_actions(&turn.state, SideId::P1).is_empty());
    assert!(legal_actions(&turn.state, SideId::P2).is_empty());
    assert_eq!(
        resolve_turn(&turn.state, Action::Move(0), Action::Pass, &mut rng(4)).unwrap_err(),
        BattleError::BattleOver
    );
}

#[test]
fn test_double_replacement_hooks_run_in_side_order() {
    // The slower P1 replacement still sets its weather first, so Drought wins
    let mut state = BattleState::new(
        vec![
            at_hp(mon("mewtwo", &[MoveId::Psychic]), 0),
            PokemonConfig::from_str("snorlax")
                .unwrap()
                .ability(AbilityId::Drizzle)
                .build(),
        ],
        vec![
            at_hp(mon("mewtwo", &[MoveId::Psychic]), 0),
            PokemonConfig::from_str("jolteon")
                .unwrap()
                .ability(AbilityId::Drought)
                .build(),
        ],
        Ruleset::default(),
    );
    state.request = Request::Replace { sides: [true, true] };

    let replaced = resolve_turn(&state, Action::Switch(1), Action::Switch(1), &mut rng(0)).unwrap();
    assert_eq!(replaced.state.field.weather, Weather::Sun);
    let owners: Vec<_> = replaced
        .events
        .iter()
        .filter_map(|e| match e {
            BattleEvent::AbilityActivated { owner, .. } => Some(owner.side),
            _ => None,
        })
        .collect();
    assert_eq!(owners, vec![SideId::P1, SideId::P2]);
}

#[test]
fn test_double_knockout_is_a_draw() {
    // Flare Blitz recoil finishes the attacker off
    let state = BattleState::new(
        vec![at_hp(mon("blaziken", &[MoveId::FlareBlitz]), 1)],
        vec![at_hp(mon("blissey", &[MoveId::Recover]), 1)],
        Ruleset::default(),
    );
    let turn = resolve_turn(&state, Action::Move(0), Action::Move(0), &mut rng(1)).unwrap();
    assert!(turn.terminal);
    assert_eq!(turn.winner, None);
    assert_eq!(turn.state.outcome, Some(Outcome { winner: None }));
}

#[test]
fn test_turn_limit_ends_in_draw() {
    let rules = Ruleset {
        max_turns: 1,
        ..Ruleset::default()
    };
    let state = BattleState::new(
        vec![mon("snorlax", &[MoveId::Growl])],
        vec![mon("blissey", &[MoveId::Growl])],
        rules,
    );
    let turn = resolve_turn(&state, Action::Move(0), Action::Move(0), &mut rng(0)).unwrap();
    assert!(turn.terminal);
    assert_eq!(turn.winner, None);
}

#[test]
fn test_struggle_when_out_of_pp() {
    let mut state = BattleState::new(
        vec![mon("snorlax", &[MoveId::BodySlam])],
        vec![mon("blissey", &[MoveId::Growl])],
        Ruleset::default(),
    );
    state.sides[0].active_mut().moves[0].pp = 0;

    assert!(resolve_turn(&state, Action::Move(0), Action::Move(0), &mut rng(0)).is_err());
    let turn = resolve_turn(&state, Action::Struggle, Action::Move(0), &mut rng(0)).unwrap();
    assert!(turn.events.contains(&BattleEvent::MoveUsed {
        user: P1_LEAD,
        move_name: "Struggle"
    }));
}

#[test]
fn test_switch_resolves_before_moves() {
    let state = BattleState::new(
        vec![mon("jolteon", &[MoveId::Thunderbolt]), mon("snorlax", &[MoveId::BodySlam])],
        vec![mon("machamp", &[MoveId::BulletPunch])],
        Ruleset::default(),
    );
    let turn = resolve_turn(&state, Action::Switch(1), Action::Move(0), &mut rng(0)).unwrap();

    let switched = turn
        .events
        .iter()
        .position(|e| matches!(e, BattleEvent::SwitchedIn { .. }))
        .unwrap();
    let moved = turn
        .events
        .iter()
        .position(|e| matches!(e, BattleEvent::MoveUsed { .. }))
        .unwrap();
    assert!(switched < moved);

    // The punch lands on the newcomer
    let snorlax = turn.state.combatant(CombatantRef::new(SideId::P1, 1));
    assert!(snorlax.hp < snorlax.max_hp());
}

#[test]
fn test_same_seed_same_battle() {
    let play = |seed: u64| -> Vec<BattleEvent> {
        let (mut battle, mut log) =
            Battle::reset(&team(&["Garchomp", "Gengar"]), &team(&["Tyranitar", "Starmie"]), seed).unwrap();
        let mut chooser = StdRng::seed_from_u64(seed ^ 0xfeed);
        for _ in 0..50 {
            if battle.is_over() {
                break;
            }
            let pick = |side, chooser: &mut StdRng| {
                let options = battle.legal_actions(side).actions();
                options[chooser.gen_range(0..options.len())]
            };
            let p1 = pick(SideId::P1, &mut chooser);
            let p2 = pick(SideId::P2, &mut chooser);
            log.extend(battle.step(p1, p2).unwrap().events);
        }
        log
    };

    assert_eq!(play(42), play(42));
}

#[test]
fn test_invariants_hold_through_random_battles() {
    for seed in 0..8 {
        let (mut battle, _) = Battle::reset(
            &team(&["Pikachu", "Charizard", "Blastoise"]),
            &team(&["Venusaur", "Dragonite", "Lucario"]),
            seed,
        )
        .unwrap();
        let mut chooser = StdRng::seed_from_u64(seed + 100);
        for _ in 0..200 {
            if battle.is_over() {
                break;
            }
            let p1 = battle.legal_actions(SideId::P1).actions();
            let p2 = battle.legal_actions(SideId::P2).actions();
            assert!(!p1.is_empty() && !p2.is_empty());
            let result = battle
                .step(
                    p1[chooser.gen_range(0..p1.len())],
                    p2[chooser.gen_range(0..p2.len())],
                )
                .unwrap();
            assert_eq!(result.terminal, result.state.is_terminal());
            result.state.check_invariants().unwrap();
        }
    }
}
