//! Held items and their hooks.

pub mod hooks;
pub mod implementations;
pub mod registry;

pub use hooks::ItemHooks;
pub use registry::ITEM_REGISTRY;

use serde::{Deserialize, Serialize};

/// Held item identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum ItemId {
    #[default]
    None,
    LifeOrb,
    ExpertBelt,
    ChoiceBand,
    ChoiceSpecs,
    Leftovers,
}

static ITEM_LOOKUP: phf::Map<&'static str, ItemId> = phf::phf_map! {
    "lifeorb" => ItemId::LifeOrb,
    "expertbelt" => ItemId::ExpertBelt,
    "choiceband" => ItemId::ChoiceBand,
    "choicespecs" => ItemId::ChoiceSpecs,
    "leftovers" => ItemId::Leftovers,
};

impl ItemId {
    /// Total number of items
    pub const COUNT: usize = ItemId::Leftovers as usize + 1;

    /// Parse item name (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        ITEM_LOOKUP.get(crate::to_id(s).as_str()).copied()
    }

    pub const fn name(self) -> &'static str {
        match self {
            ItemId::None => "(none)",
            ItemId::LifeOrb => "Life Orb",
            ItemId::ExpertBelt => "Expert Belt",
            ItemId::ChoiceBand => "Choice Band",
            ItemId::ChoiceSpecs => "Choice Specs",
            ItemId::Leftovers => "Leftovers",
        }
    }

    /// Registered hooks, or `ItemHooks::NONE`.
    #[inline]
    pub fn hooks(self) -> ItemHooks {
        ITEM_REGISTRY[self as usize].unwrap_or(ItemHooks::NONE)
    }
}
