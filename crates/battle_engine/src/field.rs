//! Weather, terrain and global room effects.

use serde::{Deserialize, Serialize};

use crate::damage::Modifier;
use crate::types::Type;

/// Weather types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Weather {
    #[default]
    None = 0,
    Sun = 1,
    Rain = 2,
    Sand = 3,
    Snow = 4,
}

/// Terrain types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Terrain {
    #[default]
    None = 0,
    Electric = 1,
    Grassy = 2,
    Misty = 3,
    Psychic = 4,
}

impl Terrain {
    /// Move type boosted for grounded attackers.
    pub const fn boosted_type(self) -> Option<Type> {
        match self {
            Terrain::Electric => Some(Type::Electric),
            Terrain::Grassy => Some(Type::Grass),
            Terrain::Psychic => Some(Type::Psychic),
            Terrain::Misty | Terrain::None => None,
        }
    }
}

/// A field-wide effect, used when reporting starts and ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum FieldEffect {
    Weather(Weather),
    Terrain(Terrain),
    TrickRoom,
    Gravity,
}

/// Field state. Durations count remaining turns; 0 means inactive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub weather: Weather,
    pub weather_turns: u8,
    pub terrain: Terrain,
    pub terrain_turns: u8,
    pub trick_room_turns: u8,
    pub gravity_turns: u8,
}

impl Field {
    /// Start a weather. Fails if the same weather is already up, or for a
    /// zero-turn duration.
    pub fn set_weather(&mut self, weather: Weather, turns: u8) -> bool {
        if weather == Weather::None || self.weather == weather || turns == 0 {
            return false;
        }
        self.weather = weather;
        self.weather_turns = turns;
        true
    }

    /// Start a terrain. Fails if the same terrain is already up, or for a
    /// zero-turn duration.
    pub fn set_terrain(&mut self, terrain: Terrain, turns: u8) -> bool {
        if terrain == Terrain::None || self.terrain == terrain || turns == 0 {
            return false;
        }
        self.terrain = terrain;
        self.terrain_turns = turns;
        true
    }

    /// Trick Room toggles: using it while active ends it early.
    /// Returns true when the room is now active.
    pub fn toggle_trick_room(&mut self, turns: u8) -> bool {
        if self.trick_room_turns > 0 {
            self.trick_room_turns = 0;
            false
        } else {
            self.trick_room_turns = turns;
            turns > 0
        }
    }

    /// Start Gravity. Fails if already active.
    pub fn set_gravity(&mut self, turns: u8) -> bool {
        if self.gravity_turns > 0 || turns == 0 {
            return false;
        }
        self.gravity_turns = turns;
        true
    }

    #[inline]
    pub fn trick_room(&self) -> bool {
        self.trick_room_turns > 0
    }

    #[inline]
    pub fn gravity(&self) -> bool {
        self.gravity_turns > 0
    }

    /// Decrement every duration once. Returns the effects that ended.
    pub fn end_of_turn(&mut self) -> Vec<FieldEffect> {
        let mut ended = Vec::new();

        if self.weather != Weather::None {
            self.weather_turns = self.weather_turns.saturating_sub(1);
            if self.weather_turns == 0 {
                ended.push(FieldEffect::Weather(self.weather));
                self.weather = Weather::None;
            }
        }
        if self.terrain != Terrain::None {
            self.terrain_turns = self.terrain_turns.saturating_sub(1);
            if self.terrain_turns == 0 {
                ended.push(FieldEffect::Terrain(self.terrain));
                self.terrain = Terrain::None;
            }
        }
        if self.trick_room_turns > 0 {
            self.trick_room_turns -= 1;
            if self.trick_room_turns == 0 {
                ended.push(FieldEffect::TrickRoom);
            }
        }
        if self.gravity_turns > 0 {
            self.gravity_turns -= 1;
            if self.gravity_turns == 0 {
                ended.push(FieldEffect::Gravity);
            }
        }

        ended
    }
}

/// Weather damage modifier (1.5x favorable, 0.5x unfavorable).
pub fn weather_modifier(weather: Weather, move_type: Type) -> Modifier {
    match (weather, move_type) {
        (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => Modifier::ONE_POINT_FIVE,
        (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => Modifier::HALF,
        _ => Modifier::ONE,
    }
}
