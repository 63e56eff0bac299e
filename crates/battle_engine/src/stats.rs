//! Stat calculation and stage boosts.
//!
//! Stats are computed once at battle start from base stats, level, IVs, EVs
//! and nature. In-battle reads apply the stage table on top of that value.

use serde::{Deserialize, Serialize};

use crate::damage::Modifier;

/// Number of stats affected by boosts (Atk, Def, SpA, SpD, Spe, Acc, Eva)
pub const BOOST_STATS: usize = 7;

/// Stage boosts are clamped to this magnitude.
pub const MAX_STAGE: i8 = 6;

/// Permanent stat index, `[HP, Atk, Def, SpA, SpD, Spe]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum BattleStat {
    Hp = 0,
    Atk = 1,
    Def = 2,
    SpA = 3,
    SpD = 4,
    Spe = 5,
}

/// Stat that carries a stage boost.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum BoostStat {
    Atk = 0,
    Def = 1,
    SpA = 2,
    SpD = 3,
    Spe = 4,
    Accuracy = 5,
    Evasion = 6,
}

impl BoostStat {
    pub const ALL: [BoostStat; BOOST_STATS] = [
        BoostStat::Atk,
        BoostStat::Def,
        BoostStat::SpA,
        BoostStat::SpD,
        BoostStat::Spe,
        BoostStat::Accuracy,
        BoostStat::Evasion,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            BoostStat::Atk => "Attack",
            BoostStat::Def => "Defense",
            BoostStat::SpA => "Sp. Atk",
            BoostStat::SpD => "Sp. Def",
            BoostStat::Spe => "Speed",
            BoostStat::Accuracy => "accuracy",
            BoostStat::Evasion => "evasiveness",
        }
    }
}

/// Seven independently clamped stage counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boosts([i8; BOOST_STATS]);

impl Boosts {
    #[inline]
    pub fn get(&self, stat: BoostStat) -> i8 {
        self.0[stat as usize]
    }

    /// Apply a stage change, clamped into [-6, +6].
    ///
    /// Returns the delta that was actually applied; 0 means the stat was
    /// already capped in that direction.
    pub fn apply(&mut self, stat: BoostStat, delta: i8) -> i8 {
        let current = self.0[stat as usize];
        let next = current.saturating_add(delta).clamp(-MAX_STAGE, MAX_STAGE);
        self.0[stat as usize] = next;
        next - current
    }

    /// Reset every stage to 0 (switch-out).
    pub fn clear(&mut self) {
        self.0 = [0; BOOST_STATS];
    }

    pub fn is_neutral(&self) -> bool {
        self.0.iter().all(|&s| s == 0)
    }

    pub fn in_range(&self) -> bool {
        self.0.iter().all(|s| (-MAX_STAGE..=MAX_STAGE).contains(s))
    }
}

/// Boost multiplier table.
///
/// Index 0 = -6, Index 6 = 0, Index 12 = +6.
/// Negative stages divide by the matching positive multiplier.
const BOOST_TABLE: [(u32, u32); 13] = [
    (2, 8), // -6
    (2, 7),
    (2, 6),
    (2, 5),
    (2, 4),
    (2, 3),
    (2, 2), //  0
    (3, 2),
    (4, 2),
    (5, 2),
    (6, 2),
    (7, 2),
    (8, 2), // +6
];

/// Accuracy/Evasion stage table (thirds instead of halves).
const ACC_EVA_TABLE: [(u32, u32); 13] = [
    (3, 9), // -6
    (3, 8),
    (3, 7),
    (3, 6),
    (3, 5),
    (3, 4),
    (3, 3), //  0
    (4, 3),
    (5, 3),
    (6, 3),
    (7, 3),
    (8, 3),
    (9, 3), // +6
];

/// Apply a stat stage to a stat value, truncating.
pub fn apply_boost(stat: u16, stage: i8) -> u16 {
    let (num, den) = BOOST_TABLE[(stage.clamp(-MAX_STAGE, MAX_STAGE) + MAX_STAGE) as usize];
    (stat as u32 * num / den).min(u16::MAX as u32) as u16
}

/// Multiplier for a combined accuracy stage (user accuracy minus target evasion).
pub fn acc_eva_ratio(stage: i8) -> (u32, u32) {
    ACC_EVA_TABLE[(stage.clamp(-MAX_STAGE, MAX_STAGE) + MAX_STAGE) as usize]
}

/// `effectiveStat(base, stage, factor)`: stage first, then a 4096-scale factor.
pub fn effective_stat(stat: u16, stage: i8, factor: Modifier) -> u16 {
    let boosted = apply_boost(stat, stage) as u32;
    let scaled = boosted * factor.val() as u32 / 4096;
    scaled.clamp(1, u16::MAX as u32) as u16
}

/// Offensive stage read on a critical hit (negative stages are ignored).
#[inline]
pub fn crit_attack_stage(stage: i8) -> i8 {
    stage.max(0)
}

/// Defensive stage read on a critical hit (positive stages are ignored).
#[inline]
pub fn crit_defense_stage(stage: i8) -> i8 {
    stage.min(0)
}

/// HP formula: floor((2 * Base + IV + floor(EV/4)) * Level / 100) + Level + 10
pub fn calc_hp(base: u8, iv: u8, ev: u8, level: u8) -> u16 {
    let level = level as u32;
    let inner = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    (inner * level / 100 + level + 10) as u16
}

/// Other stats: floor((floor((2 * Base + IV + floor(EV/4)) * Level / 100) + 5) * Nature)
///
/// `nature` is 9, 10 or 11 (tenths).
pub fn calc_stat(base: u8, iv: u8, ev: u8, level: u8, nature: u8) -> u16 {
    let inner = 2 * base as u32 + iv as u32 + ev as u32 / 4;
    let raw = inner * level as u32 / 100 + 5;
    (raw * nature as u32 / 10) as u16
}
