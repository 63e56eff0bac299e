//! Move execution.
//!
//! A move runs as a flat sequence of steps; any step may end it early:
//! flinch, status prevention, Taunt/Disable, PP, target, accuracy, then the
//! status effect or the hit with everything that follows it.

use rand::RngCore;

use super::lose_hp;
use crate::conditions::{
    apply_boosts, apply_secondary, apply_status, check_prevention, EffectState, Prevention, Status,
    Volatile,
};
use crate::damage::{calculate_damage, can_be_crit, crit_stage, DamageContext};
use crate::events::{BattleEvent, DamageCause, HealCause, PreventReason};
use crate::field::FieldEffect;
use crate::moves::{Move, MoveEffect, MoveId, MoveTarget};
use crate::prng;
use crate::state::{BattleState, CombatantRef};
use crate::stats::{acc_eva_ratio, BoostStat};

/// Use the move in `slot`, or Struggle when `slot` is `None`.
pub fn use_move(
    state: &mut BattleState,
    user: CombatantRef,
    slot: Option<u8>,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    let move_id = match slot {
        Some(slot) => match state.combatant(user).move_id(slot as usize) {
            Some(id) => id,
            None => {
                events.push(BattleEvent::Failed { user });
                return;
            }
        },
        None => MoveId::Struggle,
    };
    let move_data = move_id.data();

    if let Some(reason) = check_can_move(state, user, slot, move_data, rng, events) {
        tracing::debug!(%user, ?reason, "prevented from moving");
        events.push(BattleEvent::Prevented { user, reason });
        return;
    }

    deduct_pp(state, user, slot);
    tracing::debug!(%user, move_name = move_data.name, "move used");
    events.push(BattleEvent::MoveUsed {
        user,
        move_name: move_data.name,
    });

    let target = match move_data.target {
        MoveTarget::Field => {
            apply_field_effect(state, user, move_data, events);
            return;
        }
        MoveTarget::User => user,
        MoveTarget::Foe => {
            let target = state.foe_of(user);
            if state.combatant(target).is_fainted() {
                events.push(BattleEvent::Failed { user });
                return;
            }
            if !accuracy_check(state, user, target, move_data, rng) {
                events.push(BattleEvent::Missed { user, target });
                return;
            }
            target
        }
    };

    if move_data.is_status() {
        apply_move_effect(state, user, target, move_data, rng, events);
    } else {
        hit(state, user, target, move_id, rng, events);
    }
}

/// Flinch, status and Taunt/Disable checks, in that order.
fn check_can_move(
    state: &mut BattleState,
    user: CombatantRef,
    slot: Option<u8>,
    move_data: &'static Move,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) -> Option<PreventReason> {
    if state.combatant(user).has_volatile(Volatile::Flinch) {
        return Some(PreventReason::Flinched);
    }

    let combatant = &mut state.sides[user.side.index()].roster[user.slot as usize];
    match check_prevention(combatant, rng, &state.rules) {
        Prevention::None => {}
        Prevention::FullyParalyzed => return Some(PreventReason::FullyParalyzed),
        Prevention::Asleep => return Some(PreventReason::Asleep),
        Prevention::Frozen => return Some(PreventReason::Frozen),
        Prevention::WokeUp => events.push(BattleEvent::StatusCured {
            target: user,
            status: Status::Sleep,
        }),
        Prevention::Thawed => events.push(BattleEvent::StatusCured {
            target: user,
            status: Status::Freeze,
        }),
    }

    // Taunt or Disable may have landed earlier this turn
    let combatant = state.combatant(user);
    if move_data.is_status() && combatant.has_volatile(Volatile::Taunt) {
        return Some(PreventReason::Taunted);
    }
    if slot.is_some_and(|slot| combatant.is_slot_disabled(slot as usize)) {
        return Some(PreventReason::Disabled);
    }
    None
}

/// Spend one PP and record the slot. Choice items lock on first use.
fn deduct_pp(state: &mut BattleState, user: CombatantRef, slot: Option<u8>) {
    let Some(slot) = slot else {
        return;
    };
    let combatant = state.combatant_mut(user);
    if let Some(move_slot) = combatant.moves.get_mut(slot as usize) {
        move_slot.pp = move_slot.pp.saturating_sub(1);
    }
    combatant.last_move = Some(slot);

    if combatant.item.hooks().choice_lock && combatant.choice_locked_slot().is_none() {
        combatant.add_volatile(EffectState::new(Volatile::ChoiceLock).with_payload(slot));
    }
}

fn accuracy_check(
    state: &BattleState,
    user: CombatantRef,
    target: CombatantRef,
    move_data: &'static Move,
    rng: &mut dyn RngCore,
) -> bool {
    let Some(accuracy) = move_data.accuracy else {
        return true;
    };
    let stage = state.combatant(user).boosts.get(BoostStat::Accuracy)
        - state.combatant(target).boosts.get(BoostStat::Evasion);
    let (num, den) = acc_eva_ratio(stage);
    let mut threshold = accuracy as u32 * num / den;
    if state.field.gravity() {
        threshold = threshold * 5 / 3;
    }
    prng::accuracy_roll(rng, threshold)
}

fn apply_field_effect(
    state: &mut BattleState,
    user: CombatantRef,
    move_data: &'static Move,
    events: &mut Vec<BattleEvent>,
) {
    let rules = &state.rules;
    let field = &mut state.field;
    let started = match move_data.effect {
        MoveEffect::Weather(weather) => field
            .set_weather(weather, rules.weather_turns)
            .then_some(FieldEffect::Weather(weather)),
        MoveEffect::Terrain(terrain) => field
            .set_terrain(terrain, rules.terrain_turns)
            .then_some(FieldEffect::Terrain(terrain)),
        MoveEffect::Gravity => field
            .set_gravity(rules.room_turns)
            .then_some(FieldEffect::Gravity),
        MoveEffect::TrickRoom if field.trick_room() => {
            field.toggle_trick_room(rules.room_turns);
            events.push(BattleEvent::FieldEnded {
                effect: FieldEffect::TrickRoom,
            });
            return;
        }
        MoveEffect::TrickRoom => field
            .toggle_trick_room(rules.room_turns)
            .then_some(FieldEffect::TrickRoom),
        _ => None,
    };

    match started {
        Some(effect) => events.push(BattleEvent::FieldStarted { effect }),
        None => events.push(BattleEvent::Failed { user }),
    }
}

/// Effect of a status move on its target (the user for self-targeting moves).
fn apply_move_effect(
    state: &mut BattleState,
    user: CombatantRef,
    target: CombatantRef,
    move_data: &'static Move,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    match move_data.effect {
        MoveEffect::Status(status) => {
            apply_status(state, target, status, Some(user), rng, events, true);
        }
        MoveEffect::Boosts(changes) => {
            apply_boosts(state, target, changes, events);
        }
        MoveEffect::Heal(num, den) => {
            let combatant = state.combatant_mut(target);
            let gained = combatant.heal(combatant.fraction_of_max(num as u32, den as u32));
            if gained == 0 {
                events.push(BattleEvent::Failed { user });
            } else {
                events.push(BattleEvent::Healed {
                    target,
                    amount: gained,
                    remaining: combatant.hp,
                    cause: HealCause::Move,
                });
            }
        }
        MoveEffect::Volatile(volatile) => start_volatile(state, user, target, volatile, events),
        MoveEffect::Weather(_) | MoveEffect::Terrain(_) | MoveEffect::TrickRoom | MoveEffect::Gravity => {
            apply_field_effect(state, user, move_data, events)
        }
        MoveEffect::None => {}
    }
}

fn start_volatile(
    state: &mut BattleState,
    user: CombatantRef,
    target: CombatantRef,
    volatile: Volatile,
    events: &mut Vec<BattleEvent>,
) {
    let effect = match volatile {
        Volatile::Taunt => EffectState::new(volatile).with_duration(state.rules.taunt_turns),
        Volatile::Disable => {
            // Disable needs a move to lock out
            let victim = state.combatant(target);
            match victim.last_move {
                Some(slot) if victim.move_id(slot as usize).is_some() => EffectState::new(volatile)
                    .with_duration(state.rules.disable_turns)
                    .with_payload(slot),
                _ => {
                    events.push(BattleEvent::Failed { user });
                    return;
                }
            }
        }
        _ => EffectState::new(volatile),
    };

    if state
        .combatant_mut(target)
        .add_volatile(effect.with_source(Some(user)))
    {
        events.push(BattleEvent::VolatileStarted { target, volatile });
    } else {
        events.push(BattleEvent::Failed { user });
    }
}

/// A damaging hit and everything it triggers.
fn hit(
    state: &mut BattleState,
    user: CombatantRef,
    target: CombatantRef,
    move_id: MoveId,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    let move_data = move_id.data();
    let result = {
        let attacker = state.combatant(user);
        let defender = state.combatant(target);
        let ctx = DamageContext::new(attacker, defender, move_id, &state.field, &state.rules, false);
        if ctx.effectiveness == 0 {
            events.push(BattleEvent::Immune { target });
            return;
        }
        let is_crit = can_be_crit(defender) && prng::crit_roll(rng, crit_stage(attacker, move_id));
        let roll = prng::damage_roll(rng);
        calculate_damage(attacker, defender, move_id, &state.field, &state.rules, is_crit, roll)
    };

    if result.is_crit {
        events.push(BattleEvent::CriticalHit { target });
    }
    let defender = state.combatant_mut(target);
    let dealt = defender.take_damage(result.damage);
    events.push(BattleEvent::Damage {
        target,
        amount: dealt,
        remaining: defender.hp,
        effectiveness: result.effectiveness,
    });
    if dealt == 0 {
        return;
    }

    let on_damaging_hit = state.combatant(target).ability.hooks().on_damaging_hit;
    if let Some(hook) = on_damaging_hit {
        tracing::trace!(%target, "on_damaging_hit");
        hook(state, target, user, move_data, dealt, rng, events);
    }
    for secondary in move_data.secondaries {
        apply_secondary(state, user, target, secondary, rng, events);
    }
    after_hit(state, user, move_id, dealt, events);
}

/// Self stage changes, recoil, drain and item recoil on the attacker.
fn after_hit(
    state: &mut BattleState,
    user: CombatantRef,
    move_id: MoveId,
    dealt: u16,
    events: &mut Vec<BattleEvent>,
) {
    let move_data = move_id.data();
    let share = |(num, den): (u8, u8)| ((dealt as u32 * num as u32 / den as u32).max(1)) as u16;

    if !move_data.self_boosts.is_empty() && !state.combatant(user).is_fainted() {
        apply_boosts(state, user, move_data.self_boosts, events);
    }

    if let Some(fraction) = move_data.recoil {
        lose_hp(state, user, share(fraction), DamageCause::Recoil, events);
    }

    if let Some(fraction) = move_data.drain {
        let attacker = state.combatant_mut(user);
        if !attacker.is_fainted() {
            let gained = attacker.heal(share(fraction));
            if gained > 0 {
                events.push(BattleEvent::Healed {
                    target: user,
                    amount: gained,
                    remaining: attacker.hp,
                    cause: HealCause::Drain,
                });
            }
        }
    }

    let attacker = state.combatant(user);
    let item_recoil = attacker
        .item
        .hooks()
        .on_after_hit
        .and_then(|hook| hook(attacker, dealt));
    if let Some(amount) = item_recoil {
        lose_hp(state, user, amount, DamageCause::LifeOrb, events);
    }

    if move_id == MoveId::Struggle {
        let amount = state.combatant(user).fraction_of_max(1, 4);
        lose_hp(state, user, amount, DamageCause::Struggle, events);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;
    use crate::items::ItemId;
    use crate::rules::Ruleset;
    use crate::state::{Combatant, SideId};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const P1: CombatantRef = CombatantRef::new(SideId::P1, 0);
    const P2: CombatantRef = CombatantRef::new(SideId::P2, 0);

    fn mon(species: &str, moves: &[MoveId]) -> Combatant {
        PokemonConfig::from_str(species).unwrap().moves(moves).build()
    }

    fn duel(p1: Combatant, p2: Combatant) -> BattleState {
        BattleState::new(vec![p1], vec![p2], Ruleset::default())
    }

    #[test]
    fn test_hit_spends_pp_and_deals_damage() {
        let mut state = duel(mon("machamp", &[MoveId::CloseCombat]), mon("blissey", &[]));
        let mut rng = StdRng::seed_from_u64(1);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);

        let machamp = state.combatant(P1);
        assert_eq!(machamp.moves[0].pp, machamp.moves[0].max_pp - 1);
        assert_eq!(machamp.last_move, Some(0));
        assert!(state.combatant(P2).hp < state.combatant(P2).max_hp());
        // Close Combat drops the user's defenses
        assert_eq!(machamp.boosts.get(BoostStat::Def), -1);
        assert_eq!(machamp.boosts.get(BoostStat::SpD), -1);
        assert!(matches!(events[0], BattleEvent::MoveUsed { move_name: "Close Combat", .. }));
    }

    #[test]
    fn test_immune_target_takes_nothing() {
        let mut state = duel(mon("pikachu", &[MoveId::Thunderbolt]), mon("garchomp", &[]));
        let mut rng = StdRng::seed_from_u64(1);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        assert_eq!(events.last(), Some(&BattleEvent::Immune { target: P2 }));
        assert_eq!(state.combatant(P2).hp, state.combatant(P2).max_hp());
    }

    #[test]
    fn test_flinch_cancels() {
        let mut state = duel(mon("mew", &[MoveId::Psychic]), mon("snorlax", &[]));
        state
            .combatant_mut(P1)
            .add_volatile(EffectState::new(Volatile::Flinch));
        let mut rng = StdRng::seed_from_u64(1);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        assert_eq!(
            events,
            vec![BattleEvent::Prevented {
                user: P1,
                reason: PreventReason::Flinched
            }]
        );
        // No PP spent
        let mew = state.combatant(P1);
        assert_eq!(mew.moves[0].pp, mew.moves[0].max_pp);
    }

    #[test]
    fn test_struggle_recoil_quarter_max_hp() {
        let mut state = duel(mon("snorlax", &[]), mon("blissey", &[]));
        let mut rng = StdRng::seed_from_u64(4);
        let mut events = Vec::new();
        use_move(&mut state, P1, None, &mut rng, &mut events);

        let snorlax = state.combatant(P1);
        assert_eq!(snorlax.max_hp() - snorlax.hp, snorlax.max_hp() / 4);
        assert!(events.iter().any(|e| matches!(
            e,
            BattleEvent::ResidualDamage { cause: DamageCause::Struggle, .. }
        )));
        // Struggle is typeless: it hits Ghosts
        let mut state = duel(mon("snorlax", &[]), mon("gengar", &[]));
        let mut events = Vec::new();
        use_move(&mut state, P1, None, &mut rng, &mut events);
        assert!(state.combatant(P2).hp < state.combatant(P2).max_hp());
    }

    #[test]
    fn test_recoil_and_drain() {
        let mut state = duel(mon("blaziken", &[MoveId::FlareBlitz]), mon("blissey", &[]));
        let mut rng = StdRng::seed_from_u64(2);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        let dealt = state.combatant(P2).max_hp() - state.combatant(P2).hp;
        let lost = state.combatant(P1).max_hp() - state.combatant(P1).hp;
        assert_eq!(lost as u32, (dealt as u32 * 33 / 100).max(1));

        let mut state = duel(mon("venusaur", &[MoveId::GigaDrain]), mon("blissey", &[]));
        state.combatant_mut(P1).hp = 1;
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        let dealt = state.combatant(P2).max_hp() - state.combatant(P2).hp;
        assert_eq!(state.combatant(P1).hp, 1 + (dealt / 2).max(1));
    }

    #[test]
    fn test_status_move_reports_failure() {
        let mut state = duel(mon("pikachu", &[MoveId::ThunderWave]), mon("swampert", &[]));
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = Vec::new();
        // Retry until the 90% accuracy roll lands
        for _ in 0..10 {
            events.clear();
            use_move(&mut state, P1, Some(0), &mut rng, &mut events);
            if !events.iter().any(|e| matches!(e, BattleEvent::Missed { .. })) {
                break;
            }
        }
        assert!(events.iter().any(|e| matches!(
            e,
            BattleEvent::StatusFailed { status: Status::Paralysis, .. }
        )));
    }

    #[test]
    fn test_choice_item_locks_slot() {
        let mut state = duel(
            PokemonConfig::from_str("garchomp")
                .unwrap()
                .item(ItemId::ChoiceBand)
                .moves(&[MoveId::DragonClaw, MoveId::Earthquake])
                .build(),
            mon("blissey", &[]),
        );
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(1), &mut rng, &mut events);
        assert_eq!(state.combatant(P1).choice_locked_slot(), Some(1));
    }

    #[test]
    fn test_weather_move_fails_when_already_active() {
        let mut state = duel(mon("blastoise", &[MoveId::RainDance]), mon("blissey", &[]));
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        assert_eq!(state.field.weather_turns, 5);
        events.clear();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        assert_eq!(events.last(), Some(&BattleEvent::Failed { user: P1 }));
    }

    #[test]
    fn test_zero_turn_room_fails_quietly() {
        let rules = Ruleset {
            room_turns: 0,
            ..Ruleset::default()
        };
        let mut state = BattleState::new(vec![mon("mew", &[MoveId::TrickRoom])], vec![mon("blissey", &[])], rules);
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);

        assert!(!state.field.trick_room());
        assert!(!events
            .iter()
            .any(|e| matches!(e, BattleEvent::FieldStarted { .. } | BattleEvent::FieldEnded { .. })));
        assert_eq!(events.last(), Some(&BattleEvent::Failed { user: P1 }));
    }

    #[test]
    fn test_disable_needs_a_last_move() {
        let mut state = duel(mon("mew", &[MoveId::Disable]), mon("snorlax", &[MoveId::BodySlam]));
        let mut rng = StdRng::seed_from_u64(0);
        let mut events = Vec::new();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        assert_eq!(events.last(), Some(&BattleEvent::Failed { user: P1 }));

        state.combatant_mut(P2).last_move = Some(0);
        events.clear();
        use_move(&mut state, P1, Some(0), &mut rng, &mut events);
        assert!(state.combatant(P2).is_slot_disabled(0));
        assert_eq!(
            events.last(),
            Some(&BattleEvent::VolatileStarted {
                target: P2,
                volatile: Volatile::Disable
            })
        );
    }
}
