//! Abilities that punish contact moves.
//!
//! Called via `OnDamagingHit` after the holder takes damage.

use rand::RngCore;

use crate::conditions::{apply_status, Status};
use crate::events::{BattleEvent, DamageCause};
use crate::moves::Move;
use crate::prng;
use crate::state::{BattleState, CombatantRef};

const CONTACT_STATUS_CHANCE: u8 = 30;

fn contact_status(
    state: &mut BattleState,
    owner: CombatantRef,
    attacker: CombatantRef,
    move_data: &'static Move,
    status: Status,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    if !move_data.makes_contact() || state.combatant(attacker).is_fainted() {
        return;
    }
    if !prng::chance(rng, CONTACT_STATUS_CHANCE) {
        return;
    }
    if crate::conditions::can_inflict(state.combatant(attacker), status).is_err() {
        return;
    }
    events.push(BattleEvent::AbilityActivated {
        owner,
        ability: state.combatant(owner).ability.name(),
    });
    apply_status(state, attacker, status, Some(owner), rng, events, false);
}

pub fn static_ability(
    state: &mut BattleState,
    owner: CombatantRef,
    attacker: CombatantRef,
    move_data: &'static Move,
    _damage: u16,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    contact_status(state, owner, attacker, move_data, Status::Paralysis, rng, events);
}

pub fn flame_body(
    state: &mut BattleState,
    owner: CombatantRef,
    attacker: CombatantRef,
    move_data: &'static Move,
    _damage: u16,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    contact_status(state, owner, attacker, move_data, Status::Burn, rng, events);
}

pub fn poison_point(
    state: &mut BattleState,
    owner: CombatantRef,
    attacker: CombatantRef,
    move_data: &'static Move,
    _damage: u16,
    rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    contact_status(state, owner, attacker, move_data, Status::Poison, rng, events);
}

/// Rough Skin: contact attackers lose 1/8 of their max HP.
pub fn rough_skin(
    state: &mut BattleState,
    owner: CombatantRef,
    attacker: CombatantRef,
    move_data: &'static Move,
    _damage: u16,
    _rng: &mut dyn RngCore,
    events: &mut Vec<BattleEvent>,
) {
    if !move_data.makes_contact() || state.combatant(attacker).is_fainted() {
        return;
    }
    events.push(BattleEvent::AbilityActivated {
        owner,
        ability: state.combatant(owner).ability.name(),
    });
    let target = state.combatant_mut(attacker);
    let amount = target.fraction_of_max(1, 8);
    let dealt = target.take_damage(amount);
    events.push(BattleEvent::ResidualDamage {
        target: attacker,
        amount: dealt,
        remaining: target.hp,
        cause: DamageCause::RoughSkin,
    });
}
