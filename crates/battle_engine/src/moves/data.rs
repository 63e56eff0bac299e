//! Static move table, indexed by `MoveId`.

use super::{
    EffectTarget, Move, MoveCategory, MoveEffect, MoveFlags, MoveId, MoveTarget, Secondary,
    SecondaryEffect,
};
use crate::conditions::{Status, Volatile};
use crate::field::{Terrain, Weather};
use crate::stats::BoostStat::{self, Atk, Def, SpA, SpD, Spe};
use crate::types::Type;

/// A `Secondary` literal, kept a plain aggregate so `&[...]` of them is
/// promoted to a static slice.
macro_rules! chance {
    ($chance:expr, $target:ident, $effect:ident $(($arg:expr))?) => {
        Secondary {
            chance: $chance,
            target: EffectTarget::$target,
            effect: SecondaryEffect::$effect $(($arg))?,
        }
    };
}

const fn attack(
    id: MoveId,
    name: &'static str,
    primary_type: Type,
    category: MoveCategory,
    power: u8,
    accuracy: u8,
    pp: u8,
) -> Move {
    Move {
        id,
        name,
        primary_type,
        category,
        power,
        accuracy: Some(accuracy),
        priority: 0,
        pp,
        flags: MoveFlags::empty(),
        target: MoveTarget::Foe,
        secondaries: &[],
        self_boosts: &[],
        recoil: None,
        drain: None,
        effect: MoveEffect::None,
    }
}

const fn physical(id: MoveId, name: &'static str, ty: Type, power: u8, acc: u8, pp: u8) -> Move {
    attack(id, name, ty, MoveCategory::Physical, power, acc, pp).with_flags(MoveFlags::CONTACT)
}

const fn special(id: MoveId, name: &'static str, ty: Type, power: u8, acc: u8, pp: u8) -> Move {
    attack(id, name, ty, MoveCategory::Special, power, acc, pp)
}

const fn status(
    id: MoveId,
    name: &'static str,
    primary_type: Type,
    accuracy: Option<u8>,
    pp: u8,
    target: MoveTarget,
    effect: MoveEffect,
) -> Move {
    Move {
        accuracy,
        target,
        effect,
        ..attack(id, name, primary_type, MoveCategory::Status, 0, 100, pp)
    }
}

impl Move {
    const fn with_priority(self, priority: i8) -> Self {
        Self { priority, ..self }
    }

    const fn with_flags(self, flags: MoveFlags) -> Self {
        Self {
            flags: self.flags.union(flags),
            ..self
        }
    }

    /// Drop the contact flag `physical` sets by default.
    const fn ranged(self) -> Self {
        Self {
            flags: self.flags.difference(MoveFlags::CONTACT),
            ..self
        }
    }

    const fn always_hits(self) -> Self {
        Self {
            accuracy: None,
            ..self
        }
    }

    const fn with_secondaries(self, secondaries: &'static [Secondary]) -> Self {
        Self { secondaries, ..self }
    }

    const fn with_self_boosts(self, self_boosts: &'static [(BoostStat, i8)]) -> Self {
        Self {
            self_boosts,
            ..self
        }
    }

    const fn with_recoil(self, num: u8, den: u8) -> Self {
        Self {
            recoil: Some((num, den)),
            ..self
        }
    }

    const fn with_drain(self, num: u8, den: u8) -> Self {
        Self {
            drain: Some((num, den)),
            ..self
        }
    }
}

use MoveId as M;
use MoveTarget::{Field, Foe, User};
use Type as T;

pub static MOVES: [Move; MoveId::COUNT] = [
    special(M::Thunderbolt, "Thunderbolt", T::Electric, 90, 100, 15).with_secondaries(&[chance!(10, Foe, Status(Status::Paralysis))]),
    special(M::Thunder, "Thunder", T::Electric, 110, 70, 10).with_secondaries(&[chance!(30, Foe, Status(Status::Paralysis))]),
    physical(M::BodySlam, "Body Slam", T::Normal, 85, 100, 15).with_secondaries(&[chance!(30, Foe, Status(Status::Paralysis))]),
    special(M::Flamethrower, "Flamethrower", T::Fire, 90, 100, 15).with_secondaries(&[chance!(10, Foe, Status(Status::Burn))]),
    special(M::FireBlast, "Fire Blast", T::Fire, 110, 85, 5).with_secondaries(&[chance!(10, Foe, Status(Status::Burn))]),
    physical(M::FlareBlitz, "Flare Blitz", T::Fire, 120, 100, 15)
        .with_secondaries(&[chance!(10, Foe, Status(Status::Burn))])
        .with_recoil(33, 100),
    physical(M::FirePunch, "Fire Punch", T::Fire, 75, 100, 15).with_secondaries(&[chance!(10, Foe, Status(Status::Burn))]),
    physical(M::FireFang, "Fire Fang", T::Fire, 65, 95, 15).with_secondaries(&[
        chance!(10, Foe, Status(Status::Burn)),
        chance!(10, Foe, Flinch),
    ]),
    special(M::Scald, "Scald", T::Water, 80, 100, 15).with_secondaries(&[chance!(30, Foe, Status(Status::Burn))]),
    special(M::Surf, "Surf", T::Water, 90, 100, 15),
    special(M::HydroPump, "Hydro Pump", T::Water, 110, 80, 5),
    physical(M::Waterfall, "Waterfall", T::Water, 80, 100, 15).with_secondaries(&[chance!(20, Foe, Flinch)]),
    physical(M::AquaTail, "Aqua Tail", T::Water, 90, 90, 10),
    special(M::SolarBeam, "Solar Beam", T::Grass, 120, 100, 10),
    special(M::EnergyBall, "Energy Ball", T::Grass, 90, 100, 10).with_secondaries(&[chance!(10, Foe, Boosts(&[(SpD, -1)]))]),
    physical(M::LeafBlade, "Leaf Blade", T::Grass, 90, 100, 15).with_flags(MoveFlags::HIGH_CRIT),
    special(M::GigaDrain, "Giga Drain", T::Grass, 75, 100, 10).with_drain(1, 2),
    physical(M::CloseCombat, "Close Combat", T::Fighting, 120, 100, 5)
        .with_self_boosts(&[(Def, -1), (SpD, -1)]),
    special(M::AuraSphere, "Aura Sphere", T::Fighting, 80, 100, 20).always_hits(),
    special(M::FocusBlast, "Focus Blast", T::Fighting, 120, 70, 5).with_secondaries(&[chance!(10, Foe, Boosts(&[(SpD, -1)]))]),
    physical(M::DrainPunch, "Drain Punch", T::Fighting, 75, 100, 10).with_drain(1, 2),
    special(M::AirSlash, "Air Slash", T::Flying, 75, 95, 15).with_secondaries(&[chance!(30, Foe, Flinch)]),
    physical(M::Fly, "Fly", T::Flying, 90, 95, 15),
    special(M::Psychic, "Psychic", T::Psychic, 90, 100, 10).with_secondaries(&[chance!(10, Foe, Boosts(&[(SpD, -1)]))]),
    physical(M::ZenHeadbutt, "Zen Headbutt", T::Psychic, 80, 90, 15).with_secondaries(&[chance!(20, Foe, Flinch)]),
    special(M::ShadowBall, "Shadow Ball", T::Ghost, 80, 100, 15).with_secondaries(&[chance!(20, Foe, Boosts(&[(SpD, -1)]))]),
    special(M::Hex, "Hex", T::Ghost, 65, 100, 10),
    physical(M::DragonClaw, "Dragon Claw", T::Dragon, 80, 100, 15),
    special(M::DragonPulse, "Dragon Pulse", T::Dragon, 85, 100, 10),
    physical(M::Crunch, "Crunch", T::Dark, 80, 100, 15).with_secondaries(&[chance!(20, Foe, Boosts(&[(Def, -1)]))]),
    physical(M::IronHead, "Iron Head", T::Steel, 80, 100, 15).with_secondaries(&[chance!(30, Foe, Flinch)]),
    physical(M::IronTail, "Iron Tail", T::Steel, 100, 75, 15).with_secondaries(&[chance!(30, Foe, Boosts(&[(Def, -1)]))]),
    special(M::FlashCannon, "Flash Cannon", T::Steel, 80, 100, 10).with_secondaries(&[chance!(10, Foe, Boosts(&[(SpD, -1)]))]),
    physical(M::MeteorMash, "Meteor Mash", T::Steel, 90, 90, 10)
        .with_secondaries(&[chance!(20, User, Boosts(&[(Atk, 1)]))]),
    physical(M::BulletPunch, "Bullet Punch", T::Steel, 40, 100, 30).with_priority(1),
    physical(M::Earthquake, "Earthquake", T::Ground, 100, 100, 10).ranged(),
    physical(M::StoneEdge, "Stone Edge", T::Rock, 100, 80, 5)
        .ranged()
        .with_flags(MoveFlags::HIGH_CRIT),
    special(M::IceBeam, "Ice Beam", T::Ice, 90, 100, 10).with_secondaries(&[chance!(10, Foe, Status(Status::Freeze))]),
    physical(M::IcePunch, "Ice Punch", T::Ice, 75, 100, 15).with_secondaries(&[chance!(10, Foe, Status(Status::Freeze))]),
    physical(M::IceFang, "Ice Fang", T::Ice, 65, 95, 15).with_secondaries(&[
        chance!(10, Foe, Status(Status::Freeze)),
        chance!(10, Foe, Flinch),
    ]),
    special(M::SludgeBomb, "Sludge Bomb", T::Poison, 90, 100, 10).with_secondaries(&[chance!(30, Foe, Status(Status::Poison))]),
    special(M::Venoshock, "Venoshock", T::Poison, 65, 100, 10),
    special(M::DazzlingGleam, "Dazzling Gleam", T::Fairy, 80, 100, 10),
    physical(M::QuickAttack, "Quick Attack", T::Normal, 40, 100, 30).with_priority(1),
    physical(M::ExtremeSpeed, "Extreme Speed", T::Normal, 80, 100, 5).with_priority(2),
    physical(M::Facade, "Facade", T::Normal, 70, 100, 20),
    special(M::Brine, "Brine", T::Water, 65, 100, 10),
    special(M::WeatherBall, "Weather Ball", T::Normal, 50, 100, 10),
    special(M::Eruption, "Eruption", T::Fire, 150, 100, 5),
    special(M::WaterSpout, "Water Spout", T::Water, 150, 100, 5),
    physical(M::Struggle, "Struggle", T::Normal, 50, 100, 1)
        .always_hits()
        .with_flags(MoveFlags::TYPELESS),
    // Status moves
    status(M::ThunderWave, "Thunder Wave", T::Electric, Some(90), 20, Foe, MoveEffect::Status(Status::Paralysis)),
    status(M::WillOWisp, "Will-O-Wisp", T::Fire, Some(85), 15, Foe, MoveEffect::Status(Status::Burn)),
    status(M::Toxic, "Toxic", T::Poison, Some(90), 10, Foe, MoveEffect::Status(Status::Toxic)),
    status(M::Spore, "Spore", T::Grass, Some(100), 15, Foe, MoveEffect::Status(Status::Sleep)),
    status(M::Hypnosis, "Hypnosis", T::Psychic, Some(60), 20, Foe, MoveEffect::Status(Status::Sleep)),
    status(M::DragonDance, "Dragon Dance", T::Dragon, None, 20, User, MoveEffect::Boosts(&[(Atk, 1), (Spe, 1)])),
    status(M::SwordsDance, "Swords Dance", T::Normal, None, 20, User, MoveEffect::Boosts(&[(Atk, 2)])),
    status(M::NastyPlot, "Nasty Plot", T::Dark, None, 20, User, MoveEffect::Boosts(&[(SpA, 2)])),
    status(M::CalmMind, "Calm Mind", T::Psychic, None, 20, User, MoveEffect::Boosts(&[(SpA, 1), (SpD, 1)])),
    status(M::Agility, "Agility", T::Psychic, None, 30, User, MoveEffect::Boosts(&[(Spe, 2)])),
    status(M::Growl, "Growl", T::Normal, Some(100), 40, Foe, MoveEffect::Boosts(&[(Atk, -1)])),
    status(M::Screech, "Screech", T::Normal, Some(85), 40, Foe, MoveEffect::Boosts(&[(Def, -2)])),
    status(M::RainDance, "Rain Dance", T::Water, None, 5, Field, MoveEffect::Weather(Weather::Rain)),
    status(M::SunnyDay, "Sunny Day", T::Fire, None, 5, Field, MoveEffect::Weather(Weather::Sun)),
    status(M::Sandstorm, "Sandstorm", T::Rock, None, 10, Field, MoveEffect::Weather(Weather::Sand)),
    status(M::Snowscape, "Snowscape", T::Ice, None, 10, Field, MoveEffect::Weather(Weather::Snow)),
    status(M::ElectricTerrain, "Electric Terrain", T::Electric, None, 10, Field, MoveEffect::Terrain(Terrain::Electric)),
    status(M::GrassyTerrain, "Grassy Terrain", T::Grass, None, 10, Field, MoveEffect::Terrain(Terrain::Grassy)),
    status(M::MistyTerrain, "Misty Terrain", T::Fairy, None, 10, Field, MoveEffect::Terrain(Terrain::Misty)),
    status(M::PsychicTerrain, "Psychic Terrain", T::Psychic, None, 10, Field, MoveEffect::Terrain(Terrain::Psychic)),
    status(M::TrickRoom, "Trick Room", T::Psychic, None, 5, Field, MoveEffect::TrickRoom).with_priority(-7),
    status(M::Gravity, "Gravity", T::Psychic, None, 5, Field, MoveEffect::Gravity),
    status(M::Recover, "Recover", T::Normal, None, 5, User, MoveEffect::Heal(1, 2)),
    status(M::FocusEnergy, "Focus Energy", T::Normal, None, 30, User, MoveEffect::Volatile(Volatile::FocusEnergy)),
    status(M::Taunt, "Taunt", T::Dark, Some(100), 20, Foe, MoveEffect::Volatile(Volatile::Taunt)),
    status(M::Disable, "Disable", T::Normal, Some(100), 20, Foe, MoveEffect::Volatile(Volatile::Disable)),
];
