//! Move identifiers, static move data and conditional-power hooks.

mod data;
pub mod hooks;
pub mod implementations;
pub mod registry;

pub use data::MOVES;
pub use hooks::MoveHooks;
pub use registry::MOVE_REGISTRY;

use serde::{Deserialize, Serialize};

use crate::conditions::{Status, Volatile};
use crate::field::{Terrain, Weather};
use crate::stats::BoostStat;
use crate::types::Type;

/// Move category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MoveCategory {
    Physical = 0,
    Special = 1,
    Status = 2,
}

bitflags::bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct MoveFlags: u8 {
        /// Makes contact (triggers Static, Flame Body, Rough Skin...)
        const CONTACT   = 1 << 0;
        /// +1 crit stage
        const HIGH_CRIT = 1 << 1;
        /// Ignores the type chart and STAB (Struggle)
        const TYPELESS  = 1 << 2;
    }
}

/// Who a move acts on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveTarget {
    Foe,
    User,
    /// Weather, terrain and rooms.
    Field,
}

/// Recipient of a secondary effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectTarget {
    User,
    Foe,
}

/// Chance-based effect carried by a damaging move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryEffect {
    Status(Status),
    Boosts(&'static [(BoostStat, i8)]),
    Flinch,
}

/// One chance effect. A move may carry several, each rolled on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Secondary {
    /// Percent, 1..=100.
    pub chance: u8,
    pub target: EffectTarget,
    pub effect: SecondaryEffect,
}

/// What a status move does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveEffect {
    None,
    Status(Status),
    /// Stage changes on the move's target.
    Boosts(&'static [(BoostStat, i8)]),
    Weather(Weather),
    Terrain(Terrain),
    TrickRoom,
    Gravity,
    /// Heal `num/den` of max HP.
    Heal(u8, u8),
    Volatile(Volatile),
}

/// Immutable move reference data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Move {
    pub id: MoveId,
    pub name: &'static str,
    pub primary_type: Type,
    pub category: MoveCategory,
    pub power: u8,
    /// `None` always hits.
    pub accuracy: Option<u8>,
    pub priority: i8,
    pub pp: u8,
    pub flags: MoveFlags,
    pub target: MoveTarget,
    pub secondaries: &'static [Secondary],
    /// Guaranteed stage changes on the user after a hit (Close Combat).
    pub self_boosts: &'static [(BoostStat, i8)],
    /// Recoil as a fraction of damage dealt.
    pub recoil: Option<(u8, u8)>,
    /// Healing as a fraction of damage dealt.
    pub drain: Option<(u8, u8)>,
    pub effect: MoveEffect,
}

impl Move {
    #[inline]
    pub fn is_status(&self) -> bool {
        self.category == MoveCategory::Status
    }

    #[inline]
    pub fn makes_contact(&self) -> bool {
        self.flags.contains(MoveFlags::CONTACT)
    }

    #[inline]
    pub fn is_typeless(&self) -> bool {
        self.flags.contains(MoveFlags::TYPELESS)
    }
}

/// Move identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MoveId {
    // Electric
    Thunderbolt,
    Thunder,
    // Normal
    BodySlam,
    // Fire
    Flamethrower,
    FireBlast,
    FlareBlitz,
    FirePunch,
    FireFang,
    // Water
    Scald,
    Surf,
    HydroPump,
    Waterfall,
    AquaTail,
    // Grass
    SolarBeam,
    EnergyBall,
    LeafBlade,
    GigaDrain,
    // Fighting
    CloseCombat,
    AuraSphere,
    FocusBlast,
    DrainPunch,
    // Flying
    AirSlash,
    Fly,
    // Psychic
    Psychic,
    ZenHeadbutt,
    // Ghost
    ShadowBall,
    Hex,
    // Dragon
    DragonClaw,
    DragonPulse,
    // Dark
    Crunch,
    // Steel
    IronHead,
    IronTail,
    FlashCannon,
    MeteorMash,
    BulletPunch,
    // Ground / Rock
    Earthquake,
    StoneEdge,
    // Ice
    IceBeam,
    IcePunch,
    IceFang,
    // Poison
    SludgeBomb,
    Venoshock,
    // Fairy
    DazzlingGleam,
    // Normal
    QuickAttack,
    ExtremeSpeed,
    Facade,
    // Variable power
    Brine,
    WeatherBall,
    Eruption,
    WaterSpout,
    Struggle,
    // Status: persistent status
    ThunderWave,
    WillOWisp,
    Toxic,
    Spore,
    Hypnosis,
    // Status: stage changes
    DragonDance,
    SwordsDance,
    NastyPlot,
    CalmMind,
    Agility,
    Growl,
    Screech,
    // Status: field
    RainDance,
    SunnyDay,
    Sandstorm,
    Snowscape,
    ElectricTerrain,
    GrassyTerrain,
    MistyTerrain,
    PsychicTerrain,
    TrickRoom,
    Gravity,
    // Status: misc
    Recover,
    FocusEnergy,
    Taunt,
    Disable,
}

static MOVE_LOOKUP: phf::Map<&'static str, MoveId> = phf::phf_map! {
    "thunderbolt" => MoveId::Thunderbolt,
    "thunder" => MoveId::Thunder,
    "bodyslam" => MoveId::BodySlam,
    "flamethrower" => MoveId::Flamethrower,
    "fireblast" => MoveId::FireBlast,
    "flareblitz" => MoveId::FlareBlitz,
    "firepunch" => MoveId::FirePunch,
    "firefang" => MoveId::FireFang,
    "scald" => MoveId::Scald,
    "surf" => MoveId::Surf,
    "hydropump" => MoveId::HydroPump,
    "waterfall" => MoveId::Waterfall,
    "aquatail" => MoveId::AquaTail,
    "solarbeam" => MoveId::SolarBeam,
    "energyball" => MoveId::EnergyBall,
    "leafblade" => MoveId::LeafBlade,
    "gigadrain" => MoveId::GigaDrain,
    "closecombat" => MoveId::CloseCombat,
    "aurasphere" => MoveId::AuraSphere,
    "focusblast" => MoveId::FocusBlast,
    "drainpunch" => MoveId::DrainPunch,
    "airslash" => MoveId::AirSlash,
    "fly" => MoveId::Fly,
    "psychic" => MoveId::Psychic,
    "zenheadbutt" => MoveId::ZenHeadbutt,
    "shadowball" => MoveId::ShadowBall,
    "hex" => MoveId::Hex,
    "dragonclaw" => MoveId::DragonClaw,
    "dragonpulse" => MoveId::DragonPulse,
    "crunch" => MoveId::Crunch,
    "ironhead" => MoveId::IronHead,
    "irontail" => MoveId::IronTail,
    "flashcannon" => MoveId::FlashCannon,
    "meteormash" => MoveId::MeteorMash,
    "bulletpunch" => MoveId::BulletPunch,
    "earthquake" => MoveId::Earthquake,
    "stoneedge" => MoveId::StoneEdge,
    "icebeam" => MoveId::IceBeam,
    "icepunch" => MoveId::IcePunch,
    "icefang" => MoveId::IceFang,
    "sludgebomb" => MoveId::SludgeBomb,
    "venoshock" => MoveId::Venoshock,
    "dazzlinggleam" => MoveId::DazzlingGleam,
    "quickattack" => MoveId::QuickAttack,
    "extremespeed" => MoveId::ExtremeSpeed,
    "facade" => MoveId::Facade,
    "brine" => MoveId::Brine,
    "weatherball" => MoveId::WeatherBall,
    "eruption" => MoveId::Eruption,
    "waterspout" => MoveId::WaterSpout,
    "struggle" => MoveId::Struggle,
    "thunderwave" => MoveId::ThunderWave,
    "willowisp" => MoveId::WillOWisp,
    "toxic" => MoveId::Toxic,
    "spore" => MoveId::Spore,
    "hypnosis" => MoveId::Hypnosis,
    "dragondance" => MoveId::DragonDance,
    "swordsdance" => MoveId::SwordsDance,
    "nastyplot" => MoveId::NastyPlot,
    "calmmind" => MoveId::CalmMind,
    "agility" => MoveId::Agility,
    "growl" => MoveId::Growl,
    "screech" => MoveId::Screech,
    "raindance" => MoveId::RainDance,
    "sunnyday" => MoveId::SunnyDay,
    "sandstorm" => MoveId::Sandstorm,
    "snowscape" => MoveId::Snowscape,
    "electricterrain" => MoveId::ElectricTerrain,
    "grassyterrain" => MoveId::GrassyTerrain,
    "mistyterrain" => MoveId::MistyTerrain,
    "psychicterrain" => MoveId::PsychicTerrain,
    "trickroom" => MoveId::TrickRoom,
    "gravity" => MoveId::Gravity,
    "recover" => MoveId::Recover,
    "focusenergy" => MoveId::FocusEnergy,
    "taunt" => MoveId::Taunt,
    "disable" => MoveId::Disable,
};

impl MoveId {
    /// Total number of moves
    pub const COUNT: usize = MoveId::Disable as usize + 1;

    /// Parse a move name ("Thunder Wave", "thunderwave", "thunder-wave").
    pub fn from_str(s: &str) -> Option<Self> {
        MOVE_LOOKUP.get(crate::to_id(s).as_str()).copied()
    }

    /// Static move data
    #[inline]
    pub fn data(self) -> &'static Move {
        &MOVES[self as usize]
    }

    /// Conditional-power hooks, if any.
    #[inline]
    pub fn hooks(self) -> Option<&'static MoveHooks> {
        MOVE_REGISTRY[self as usize].as_ref()
    }
}
