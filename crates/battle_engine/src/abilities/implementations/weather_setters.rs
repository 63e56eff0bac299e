use crate::abilities::AbilityId;
use crate::events::BattleEvent;
use crate::field::{FieldEffect, Terrain, Weather};
use crate::state::{BattleState, CombatantRef};

fn start_weather(
    state: &mut BattleState,
    owner: CombatantRef,
    weather: Weather,
    events: &mut Vec<BattleEvent>,
) {
    let turns = state.rules.weather_turns;
    if state.field.set_weather(weather, turns) {
        announce(state, owner, events);
        events.push(BattleEvent::FieldStarted {
            effect: FieldEffect::Weather(weather),
        });
    }
}

fn start_terrain(
    state: &mut BattleState,
    owner: CombatantRef,
    terrain: Terrain,
    events: &mut Vec<BattleEvent>,
) {
    let turns = state.rules.terrain_turns;
    if state.field.set_terrain(terrain, turns) {
        announce(state, owner, events);
        events.push(BattleEvent::FieldStarted {
            effect: FieldEffect::Terrain(terrain),
        });
    }
}

fn announce(state: &BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    let ability: AbilityId = state.combatant(owner).ability;
    events.push(BattleEvent::AbilityActivated {
        owner,
        ability: ability.name(),
    });
}

pub fn drizzle(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_weather(state, owner, Weather::Rain, events);
}

pub fn drought(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_weather(state, owner, Weather::Sun, events);
}

pub fn sand_stream(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_weather(state, owner, Weather::Sand, events);
}

pub fn snow_warning(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_weather(state, owner, Weather::Snow, events);
}

pub fn electric_surge(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_terrain(state, owner, Terrain::Electric, events);
}

pub fn grassy_surge(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_terrain(state, owner, Terrain::Grassy, events);
}

pub fn misty_surge(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_terrain(state, owner, Terrain::Misty, events);
}

pub fn psychic_surge(state: &mut BattleState, owner: CombatantRef, events: &mut Vec<BattleEvent>) {
    start_terrain(state, owner, Terrain::Psychic, events);
}
