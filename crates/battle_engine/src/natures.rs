//! Natures and their stat growth factors.

use serde::{Deserialize, Serialize};

use crate::stats::BattleStat;

/// Nature (affects stat growth).
///
/// Ordered in a 5x5 grid: `id = plus * 5 + minus` over Atk, Def, SpA, SpD, Spe.
/// Diagonal entries (plus == minus) are neutral.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum NatureId {
    #[default]
    Hardy = 0,
    Lonely = 1,
    Adamant = 2,
    Naughty = 3,
    Brave = 4,
    Bold = 5,
    Docile = 6,
    Impish = 7,
    Lax = 8,
    Relaxed = 9,
    Modest = 10,
    Mild = 11,
    Bashful = 12,
    Rash = 13,
    Quiet = 14,
    Calm = 15,
    Gentle = 16,
    Careful = 17,
    Quirky = 18,
    Sassy = 19,
    Timid = 20,
    Hasty = 21,
    Jolly = 22,
    Naive = 23,
    Serious = 24,
}

static NATURE_LOOKUP: phf::Map<&'static str, NatureId> = phf::phf_map! {
    "hardy" => NatureId::Hardy,
    "lonely" => NatureId::Lonely,
    "adamant" => NatureId::Adamant,
    "naughty" => NatureId::Naughty,
    "brave" => NatureId::Brave,
    "bold" => NatureId::Bold,
    "docile" => NatureId::Docile,
    "impish" => NatureId::Impish,
    "lax" => NatureId::Lax,
    "relaxed" => NatureId::Relaxed,
    "modest" => NatureId::Modest,
    "mild" => NatureId::Mild,
    "bashful" => NatureId::Bashful,
    "rash" => NatureId::Rash,
    "quiet" => NatureId::Quiet,
    "calm" => NatureId::Calm,
    "gentle" => NatureId::Gentle,
    "careful" => NatureId::Careful,
    "quirky" => NatureId::Quirky,
    "sassy" => NatureId::Sassy,
    "timid" => NatureId::Timid,
    "hasty" => NatureId::Hasty,
    "jolly" => NatureId::Jolly,
    "naive" => NatureId::Naive,
    "serious" => NatureId::Serious,
};

impl NatureId {
    /// Parse nature from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        NATURE_LOOKUP.get(crate::to_id(s).as_str()).copied()
    }

    /// Get stat modifier for a given stat.
    /// Returns: 9 (-10%), 10 (neutral), 11 (+10%). HP is never affected.
    #[inline]
    pub const fn stat_modifier(self, stat: BattleStat) -> u8 {
        let id = self as u8;
        let plus = id / 5;
        let minus = id % 5;

        let stat_idx = match stat {
            BattleStat::Hp => return 10,
            BattleStat::Atk => 0,
            BattleStat::Def => 1,
            BattleStat::SpA => 2,
            BattleStat::SpD => 3,
            BattleStat::Spe => 4,
        };

        if plus == minus {
            10
        } else if stat_idx == plus {
            11
        } else if stat_idx == minus {
            9
        } else {
            10
        }
    }

    /// Check if this is a neutral nature (no stat changes)
    #[inline]
    pub const fn is_neutral(self) -> bool {
        let id = self as u8;
        (id / 5) == (id % 5)
    }
}
