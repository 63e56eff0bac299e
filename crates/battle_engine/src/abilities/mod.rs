//! Ability system hooks and registry.
//!
//! Dispatch is closed: every ability is an `AbilityId` variant, and the
//! registry maps it to an `AbilityHooks` table. Abilities without an entry
//! resolve to `AbilityHooks::NONE` and do nothing.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::AbilityHooks;
pub use registry::ABILITY_REGISTRY;

use serde::{Deserialize, Serialize};

/// Ability identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum AbilityId {
    #[default]
    NoAbility,
    // Switch-in
    Intimidate,
    Download,
    Drizzle,
    Drought,
    SandStream,
    SnowWarning,
    ElectricSurge,
    GrassySurge,
    MistySurge,
    PsychicSurge,
    // Stat modifiers
    HugePower,
    PurePower,
    Guts,
    Blaze,
    Torrent,
    Overgrow,
    Swarm,
    ThickFat,
    MarvelScale,
    // Final modifiers
    Multiscale,
    Filter,
    SolidRock,
    TintedLens,
    // Immunities
    Levitate,
    ShellArmor,
    BattleArmor,
    // Contact punishers
    Static,
    FlameBody,
    PoisonPoint,
    RoughSkin,
    // Speed
    SpeedBoost,
    Chlorophyll,
    SwiftSwim,
    SandRush,
    // Recognized, no battle effect in this engine
    Pressure,
    Synchronize,
    NaturalCure,
    Sturdy,
    VoltAbsorb,
    WaterAbsorb,
    InnerFocus,
    ClearBody,
}

static ABILITY_LOOKUP: phf::Map<&'static str, AbilityId> = phf::phf_map! {
    "noability" => AbilityId::NoAbility,
    "intimidate" => AbilityId::Intimidate,
    "download" => AbilityId::Download,
    "drizzle" => AbilityId::Drizzle,
    "drought" => AbilityId::Drought,
    "sandstream" => AbilityId::SandStream,
    "snowwarning" => AbilityId::SnowWarning,
    "electricsurge" => AbilityId::ElectricSurge,
    "grassysurge" => AbilityId::GrassySurge,
    "mistysurge" => AbilityId::MistySurge,
    "psychicsurge" => AbilityId::PsychicSurge,
    "hugepower" => AbilityId::HugePower,
    "purepower" => AbilityId::PurePower,
    "guts" => AbilityId::Guts,
    "blaze" => AbilityId::Blaze,
    "torrent" => AbilityId::Torrent,
    "overgrow" => AbilityId::Overgrow,
    "swarm" => AbilityId::Swarm,
    "thickfat" => AbilityId::ThickFat,
    "marvelscale" => AbilityId::MarvelScale,
    "multiscale" => AbilityId::Multiscale,
    "filter" => AbilityId::Filter,
    "solidrock" => AbilityId::SolidRock,
    "tintedlens" => AbilityId::TintedLens,
    "levitate" => AbilityId::Levitate,
    "shellarmor" => AbilityId::ShellArmor,
    "battlearmor" => AbilityId::BattleArmor,
    "static" => AbilityId::Static,
    "flamebody" => AbilityId::FlameBody,
    "poisonpoint" => AbilityId::PoisonPoint,
    "roughskin" => AbilityId::RoughSkin,
    "speedboost" => AbilityId::SpeedBoost,
    "chlorophyll" => AbilityId::Chlorophyll,
    "swiftswim" => AbilityId::SwiftSwim,
    "sandrush" => AbilityId::SandRush,
    "pressure" => AbilityId::Pressure,
    "synchronize" => AbilityId::Synchronize,
    "naturalcure" => AbilityId::NaturalCure,
    "sturdy" => AbilityId::Sturdy,
    "voltabsorb" => AbilityId::VoltAbsorb,
    "waterabsorb" => AbilityId::WaterAbsorb,
    "innerfocus" => AbilityId::InnerFocus,
    "clearbody" => AbilityId::ClearBody,
};

impl AbilityId {
    /// Total number of abilities
    pub const COUNT: usize = AbilityId::ClearBody as usize + 1;

    /// Parse ability name (case-insensitive, ignores spaces and punctuation)
    pub fn from_str(s: &str) -> Option<Self> {
        ABILITY_LOOKUP.get(crate::to_id(s).as_str()).copied()
    }

    /// Parse an ability name from team data. Unknown names are tolerated
    /// and resolve to `NoAbility`.
    pub fn from_str_lenient(s: &str) -> Self {
        Self::from_str(s).unwrap_or_else(|| {
            tracing::warn!(ability = s, "unknown ability, treating as no ability");
            AbilityId::NoAbility
        })
    }

    /// Hook table; unregistered abilities get `AbilityHooks::NONE`.
    #[inline]
    pub fn hooks(self) -> AbilityHooks {
        ABILITY_REGISTRY[self as usize].unwrap_or(AbilityHooks::NONE)
    }

    pub const fn name(self) -> &'static str {
        match self {
            AbilityId::NoAbility => "No Ability",
            AbilityId::Intimidate => "Intimidate",
            AbilityId::Download => "Download",
            AbilityId::Drizzle => "Drizzle",
            AbilityId::Drought => "Drought",
            AbilityId::SandStream => "Sand Stream",
            AbilityId::SnowWarning => "Snow Warning",
            AbilityId::ElectricSurge => "Electric Surge",
            AbilityId::GrassySurge => "Grassy Surge",
            AbilityId::MistySurge => "Misty Surge",
            AbilityId::PsychicSurge => "Psychic Surge",
            AbilityId::HugePower => "Huge Power",
            AbilityId::PurePower => "Pure Power",
            AbilityId::Guts => "Guts",
            AbilityId::Blaze => "Blaze",
            AbilityId::Torrent => "Torrent",
            AbilityId::Overgrow => "Overgrow",
            AbilityId::Swarm => "Swarm",
            AbilityId::ThickFat => "Thick Fat",
            AbilityId::MarvelScale => "Marvel Scale",
            AbilityId::Multiscale => "Multiscale",
            AbilityId::Filter => "Filter",
            AbilityId::SolidRock => "Solid Rock",
            AbilityId::TintedLens => "Tinted Lens",
            AbilityId::Levitate => "Levitate",
            AbilityId::ShellArmor => "Shell Armor",
            AbilityId::BattleArmor => "Battle Armor",
            AbilityId::Static => "Static",
            AbilityId::FlameBody => "Flame Body",
            AbilityId::PoisonPoint => "Poison Point",
            AbilityId::RoughSkin => "Rough Skin",
            AbilityId::SpeedBoost => "Speed Boost",
            AbilityId::Chlorophyll => "Chlorophyll",
            AbilityId::SwiftSwim => "Swift Swim",
            AbilityId::SandRush => "Sand Rush",
            AbilityId::Pressure => "Pressure",
            AbilityId::Synchronize => "Synchronize",
            AbilityId::NaturalCure => "Natural Cure",
            AbilityId::Sturdy => "Sturdy",
            AbilityId::VoltAbsorb => "Volt Absorb",
            AbilityId::WaterAbsorb => "Water Absorb",
            AbilityId::InnerFocus => "Inner Focus",
            AbilityId::ClearBody => "Clear Body",
        }
    }
}

#[cfg(test)]
mod tests;
