//! Type enum, type chart and type-based immunities.

use serde::{Deserialize, Serialize};

/// Elemental type (18-type universe).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Type {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Electric = 3,
    Grass = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl Type {
    /// Total number of types
    pub const COUNT: usize = 18;

    /// Every type, in chart order.
    pub const ALL: [Type; Type::COUNT] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    /// Parse type from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        Type::ALL
            .iter()
            .copied()
            .find(|t| t.name().eq_ignore_ascii_case(s.trim()))
    }

    /// Display name
    pub const fn name(self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }

    /// Status and weather immunities granted by this type
    #[inline]
    pub fn immunities(self) -> TypeImmunities {
        TYPE_IMMUNITIES[self as usize]
    }
}

/// Single-type effectiveness
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TypeEffectiveness {
    /// 1.0x damage
    Normal = 0,
    /// 2.0x damage
    SuperEffective = 1,
    /// 0.5x damage
    Resistant = 2,
    /// 0.0x damage (immune)
    Immune = 3,
}

impl TypeEffectiveness {
    /// Convert to fixed-point multiplier (4 = 1.0x)
    /// Returns: 0 (immune), 2 (0.5x), 4 (1.0x), 8 (2.0x)
    #[inline]
    pub const fn multiplier(self) -> u8 {
        match self {
            Self::Normal => 4,
            Self::SuperEffective => 8,
            Self::Resistant => 2,
            Self::Immune => 0,
        }
    }
}

/// Neutral effectiveness on the 4-scale.
pub const NEUTRAL: u8 = 4;

bitflags::bitflags! {
    /// Type-based immunities to status conditions and residual weather damage
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct TypeImmunities: u8 {
        const BURN      = 1 << 0;
        const FREEZE    = 1 << 1;
        const PARALYSIS = 1 << 2;
        const POISON    = 1 << 3;
        const SANDSTORM = 1 << 4;
    }
}

use TypeEffectiveness::{Immune as I, Normal as N, Resistant as R, SuperEffective as S};

/// Type chart: TYPE_CHART[defender][attacker] = effectiveness
///
/// Columns follow `Type` order: Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
pub static TYPE_CHART: [[TypeEffectiveness; Type::COUNT]; Type::COUNT] = [
    /* Normal   */ [N, N, N, N, N, N, S, N, N, N, N, N, N, I, N, N, N, N],
    /* Fire     */ [N, R, S, N, R, R, N, N, S, N, N, R, S, N, N, N, R, R],
    /* Water    */ [N, R, R, S, S, R, N, N, N, N, N, N, N, N, N, N, R, N],
    /* Electric */ [N, N, N, R, N, N, N, N, S, R, N, N, N, N, N, N, R, N],
    /* Grass    */ [N, S, R, R, R, S, N, S, R, S, N, S, N, N, N, N, N, N],
    /* Ice      */ [N, S, N, N, N, R, S, N, N, N, N, N, S, N, N, N, S, N],
    /* Fighting */ [N, N, N, N, N, N, N, N, N, S, S, R, R, N, N, R, N, S],
    /* Poison   */ [N, N, N, N, R, N, R, R, S, N, S, R, N, N, N, N, N, R],
    /* Ground   */ [N, N, S, I, S, S, N, R, N, N, N, N, R, N, N, N, N, N],
    /* Flying   */ [N, N, N, S, R, S, R, N, I, N, N, R, S, N, N, N, N, N],
    /* Psychic  */ [N, N, N, N, N, N, R, N, N, N, R, S, N, S, N, S, N, N],
    /* Bug      */ [N, S, N, N, R, N, R, N, R, S, N, N, S, N, N, N, N, N],
    /* Rock     */ [R, R, S, N, S, N, S, R, S, R, N, R, N, N, N, N, S, N],
    /* Ghost    */ [I, N, N, N, N, N, I, R, N, N, N, R, N, S, N, S, N, N],
    /* Dragon   */ [N, R, R, R, R, S, N, N, N, N, N, N, N, N, S, N, N, S],
    /* Dark     */ [N, N, N, N, N, N, S, N, N, N, I, S, N, R, N, R, N, S],
    /* Steel    */ [R, S, N, N, R, R, S, I, S, R, R, R, R, N, R, N, R, R],
    /* Fairy    */ [N, N, N, N, N, N, R, S, N, N, N, R, N, N, I, R, S, N],
];

const NONE: TypeImmunities = TypeImmunities::empty();

/// Status immunities by type
pub static TYPE_IMMUNITIES: [TypeImmunities; Type::COUNT] = [
    /* Normal   */ NONE,
    /* Fire     */ TypeImmunities::BURN,
    /* Water    */ NONE,
    /* Electric */ TypeImmunities::PARALYSIS,
    /* Grass    */ NONE,
    /* Ice      */ TypeImmunities::FREEZE,
    /* Fighting */ NONE,
    /* Poison   */ TypeImmunities::POISON,
    /* Ground   */ TypeImmunities::PARALYSIS.union(TypeImmunities::SANDSTORM),
    /* Flying   */ NONE,
    /* Psychic  */ NONE,
    /* Bug      */ NONE,
    /* Rock     */ TypeImmunities::SANDSTORM,
    /* Ghost    */ NONE,
    /* Dragon   */ NONE,
    /* Dark     */ NONE,
    /* Steel    */ TypeImmunities::POISON.union(TypeImmunities::SANDSTORM),
    /* Fairy    */ NONE,
];

/// Single-type lookup on the 4-scale.
#[inline]
pub fn single_effectiveness(attacker: Type, defender: Type) -> u8 {
    TYPE_CHART[defender as usize][attacker as usize].multiplier()
}

/// Calculate type effectiveness for an attack
/// Returns fixed-point multiplier: 0, 1, 2, 4, 8, 16 (representing 0x, 0.25x, 0.5x, 1x, 2x, 4x)
#[inline]
pub fn type_effectiveness(attacker: Type, defender1: Type, defender2: Option<Type>) -> u8 {
    let mut mult = single_effectiveness(attacker, defender1);
    if let Some(t2) = defender2 {
        mult = mult * single_effectiveness(attacker, t2) / 4;
    }
    mult
}

/// Effectiveness against a combatant's type pair. A repeated type counts once.
#[inline]
pub fn effectiveness_against(attacker: Type, defender: [Type; 2]) -> u8 {
    let second = (defender[1] != defender[0]).then_some(defender[1]);
    type_effectiveness(attacker, defender[0], second)
}

/// Convert a 4-scale multiplier to a float (for display and logs).
#[inline]
pub fn effectiveness_as_f32(effectiveness: u8) -> f32 {
    effectiveness as f32 / 4.0
}
