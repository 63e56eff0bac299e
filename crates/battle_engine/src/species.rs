//! Species dex: base stats, types, default ability and a default moveset.

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::moves::MoveId;
use crate::state::MAX_MOVES;
use crate::types::Type;

/// Index into `SPECIES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpeciesId(pub u16);

/// Static species data
#[derive(Clone, Copy, Debug)]
pub struct Species {
    pub name: &'static str,
    /// Base stats: [hp, atk, def, spa, spd, spe]
    pub base_stats: [u8; 6],
    pub type1: Type,
    pub type2: Option<Type>,
    pub ability: AbilityId,
    /// Used when team data leaves the moveset out
    pub default_moves: [MoveId; MAX_MOVES],
}

impl Species {
    #[inline]
    pub const fn primary_type(&self) -> Type {
        self.type1
    }

    #[inline]
    pub const fn secondary_type(&self) -> Option<Type> {
        self.type2
    }

    /// Both type slots; mono-typed species repeat their type.
    pub const fn types(&self) -> [Type; 2] {
        match self.type2 {
            Some(t) => [self.type1, t],
            None => [self.type1, self.type1],
        }
    }

    pub const fn primary_ability(&self) -> AbilityId {
        self.ability
    }
}

const fn mono(
    name: &'static str,
    base_stats: [u8; 6],
    ty: Type,
    ability: AbilityId,
    default_moves: [MoveId; MAX_MOVES],
) -> Species {
    Species {
        name,
        base_stats,
        type1: ty,
        type2: None,
        ability,
        default_moves,
    }
}

const fn dual(
    name: &'static str,
    base_stats: [u8; 6],
    types: (Type, Type),
    ability: AbilityId,
    default_moves: [MoveId; MAX_MOVES],
) -> Species {
    Species {
        name,
        base_stats,
        type1: types.0,
        type2: Some(types.1),
        ability,
        default_moves,
    }
}

use AbilityId as A;
use MoveId as M;
use Type as T;

/// Number of species in the dex
pub const SPECIES_COUNT: usize = 33;

pub static SPECIES: [Species; SPECIES_COUNT] = [
    mono("Pikachu", [35, 55, 40, 50, 50, 90], T::Electric, A::Static,
        [M::Thunderbolt, M::QuickAttack, M::IronTail, M::ThunderWave]),
    dual("Charizard", [78, 84, 78, 109, 85, 100], (T::Fire, T::Flying), A::Blaze,
        [M::Flamethrower, M::AirSlash, M::DragonClaw, M::FireBlast]),
    mono("Blastoise", [79, 83, 100, 85, 105, 78], T::Water, A::Torrent,
        [M::Surf, M::IceBeam, M::HydroPump, M::AquaTail]),
    dual("Venusaur", [80, 82, 83, 100, 100, 80], (T::Grass, T::Poison), A::Overgrow,
        [M::SolarBeam, M::SludgeBomb, M::Earthquake, M::EnergyBall]),
    dual("Gengar", [60, 65, 60, 130, 75, 110], (T::Ghost, T::Poison), A::Levitate,
        [M::ShadowBall, M::SludgeBomb, M::Thunderbolt, M::FocusBlast]),
    mono("Alakazam", [55, 50, 45, 135, 95, 120], T::Psychic, A::Synchronize,
        [M::Psychic, M::ShadowBall, M::FocusBlast, M::DazzlingGleam]),
    mono("Machamp", [90, 130, 80, 65, 85, 55], T::Fighting, A::Guts,
        [M::CloseCombat, M::StoneEdge, M::Earthquake, M::BulletPunch]),
    dual("Gyarados", [95, 125, 79, 60, 100, 81], (T::Water, T::Flying), A::Intimidate,
        [M::Waterfall, M::Earthquake, M::IceFang, M::DragonDance]),
    dual("Dragonite", [91, 134, 95, 100, 100, 80], (T::Dragon, T::Flying), A::Multiscale,
        [M::DragonClaw, M::Earthquake, M::FirePunch, M::ExtremeSpeed]),
    dual("Tyranitar", [100, 134, 110, 95, 100, 61], (T::Rock, T::Dark), A::SandStream,
        [M::StoneEdge, M::Crunch, M::Earthquake, M::IcePunch]),
    dual("Garchomp", [108, 130, 95, 80, 85, 102], (T::Dragon, T::Ground), A::RoughSkin,
        [M::Earthquake, M::DragonClaw, M::StoneEdge, M::FireFang]),
    dual("Lucario", [70, 110, 70, 115, 70, 90], (T::Fighting, T::Steel), A::InnerFocus,
        [M::CloseCombat, M::FlashCannon, M::AuraSphere, M::ExtremeSpeed]),
    dual("Metagross", [80, 135, 130, 95, 90, 70], (T::Steel, T::Psychic), A::ClearBody,
        [M::MeteorMash, M::Earthquake, M::ZenHeadbutt, M::BulletPunch]),
    dual("Salamence", [95, 135, 80, 110, 80, 100], (T::Dragon, T::Flying), A::Intimidate,
        [M::DragonClaw, M::Earthquake, M::FireBlast, M::Fly]),
    dual("Blaziken", [80, 120, 70, 110, 70, 80], (T::Fire, T::Fighting), A::Blaze,
        [M::FlareBlitz, M::CloseCombat, M::StoneEdge, M::Earthquake]),
    dual("Swampert", [100, 110, 90, 85, 90, 60], (T::Water, T::Ground), A::Torrent,
        [M::Earthquake, M::Waterfall, M::IcePunch, M::StoneEdge]),
    mono("Sceptile", [70, 85, 65, 105, 85, 120], T::Grass, A::Overgrow,
        [M::LeafBlade, M::DragonPulse, M::Earthquake, M::FocusBlast]),
    dual("Aggron", [70, 110, 180, 60, 60, 50], (T::Steel, T::Rock), A::Sturdy,
        [M::IronHead, M::StoneEdge, M::Earthquake, M::IcePunch]),
    mono("Jolteon", [65, 65, 60, 110, 95, 130], T::Electric, A::VoltAbsorb,
        [M::Thunderbolt, M::ShadowBall, M::ThunderWave, M::Agility]),
    mono("Blissey", [255, 10, 10, 75, 135, 55], T::Normal, A::NaturalCure,
        [M::Flamethrower, M::IceBeam, M::Toxic, M::Recover]),
    dual("Skarmory", [65, 80, 140, 40, 70, 70], (T::Steel, T::Flying), A::Sturdy,
        [M::IronHead, M::Fly, M::Toxic, M::Taunt]),
    mono("Snorlax", [160, 110, 65, 65, 110, 30], T::Normal, A::ThickFat,
        [M::BodySlam, M::Earthquake, M::Crunch, M::Facade]),
    mono("Arcanine", [90, 110, 80, 100, 80, 95], T::Fire, A::Intimidate,
        [M::FlareBlitz, M::ExtremeSpeed, M::WillOWisp, M::Crunch]),
    dual("Exeggutor", [95, 95, 85, 125, 75, 55], (T::Grass, T::Psychic), A::Chlorophyll,
        [M::GigaDrain, M::Psychic, M::SunnyDay, M::Hypnosis]),
    dual("Starmie", [60, 75, 85, 100, 85, 115], (T::Water, T::Psychic), A::NaturalCure,
        [M::Scald, M::Psychic, M::Thunderbolt, M::Recover]),
    dual("Lapras", [130, 85, 80, 85, 95, 60], (T::Water, T::Ice), A::WaterAbsorb,
        [M::Surf, M::IceBeam, M::Thunderbolt, M::Brine]),
    mono("Mewtwo", [106, 110, 90, 154, 90, 130], T::Psychic, A::Pressure,
        [M::Psychic, M::AuraSphere, M::IceBeam, M::CalmMind]),
    mono("Mew", [100, 100, 100, 100, 100, 100], T::Psychic, A::Synchronize,
        [M::Psychic, M::FlareBlitz, M::SwordsDance, M::TrickRoom]),
    dual("Golem", [80, 120, 130, 55, 65, 45], (T::Rock, T::Ground), A::Sturdy,
        [M::Earthquake, M::StoneEdge, M::FirePunch, M::Sandstorm]),
    dual("Cloyster", [50, 95, 180, 85, 45, 70], (T::Water, T::Ice), A::ShellArmor,
        [M::IceBeam, M::HydroPump, M::IceFang, M::Waterfall]),
    dual("Nidoking", [81, 102, 77, 85, 75, 85], (T::Poison, T::Ground), A::PoisonPoint,
        [M::Earthquake, M::SludgeBomb, M::Venoshock, M::IceBeam]),
    dual("Aerodactyl", [80, 105, 65, 60, 75, 130], (T::Rock, T::Flying), A::Pressure,
        [M::StoneEdge, M::Earthquake, M::IceFang, M::Fly]),
    mono("Porygon2", [85, 80, 90, 105, 95, 60], T::Normal, A::Download,
        [M::Thunderbolt, M::IceBeam, M::Recover, M::Agility]),
];

static SPECIES_LOOKUP: phf::Map<&'static str, u16> = phf::phf_map! {
    "pikachu" => 0,
    "charizard" => 1,
    "blastoise" => 2,
    "venusaur" => 3,
    "gengar" => 4,
    "alakazam" => 5,
    "machamp" => 6,
    "gyarados" => 7,
    "dragonite" => 8,
    "tyranitar" => 9,
    "garchomp" => 10,
    "lucario" => 11,
    "metagross" => 12,
    "salamence" => 13,
    "blaziken" => 14,
    "swampert" => 15,
    "sceptile" => 16,
    "aggron" => 17,
    "jolteon" => 18,
    "blissey" => 19,
    "skarmory" => 20,
    "snorlax" => 21,
    "arcanine" => 22,
    "exeggutor" => 23,
    "starmie" => 24,
    "lapras" => 25,
    "mewtwo" => 26,
    "mew" => 27,
    "golem" => 28,
    "cloyster" => 29,
    "nidoking" => 30,
    "aerodactyl" => 31,
    "porygon2" => 32,
};

impl SpeciesId {
    pub const COUNT: usize = SPECIES_COUNT;

    /// Parse species name (case-insensitive, ignores spaces and punctuation)
    pub fn from_str(s: &str) -> Option<Self> {
        SPECIES_LOOKUP.get(crate::to_id(s).as_str()).map(|&i| SpeciesId(i))
    }

    #[inline]
    pub fn data(self) -> &'static Species {
        &SPECIES[self.0 as usize]
    }
}
