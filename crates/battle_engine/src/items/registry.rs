use crate::items::hooks::ItemHooks;
use crate::items::implementations::*;
use crate::items::ItemId;

pub static ITEM_REGISTRY: [Option<ItemHooks>; ItemId::COUNT] = {
    let mut registry: [Option<ItemHooks>; ItemId::COUNT] = [None; ItemId::COUNT];

    // =========================================================================
    // Item Hook Registrations
    // =========================================================================

    registry[ItemId::ChoiceBand as usize] = Some(ItemHooks {
        on_modify_attack: Some(on_modify_attack_choice_band),
        choice_lock: true,
        ..ItemHooks::NONE
    });

    registry[ItemId::ChoiceSpecs as usize] = Some(ItemHooks {
        on_modify_attack: Some(on_modify_attack_choice_specs),
        choice_lock: true,
        ..ItemHooks::NONE
    });

    registry[ItemId::LifeOrb as usize] = Some(ItemHooks {
        on_final_modifier: Some(on_final_modifier_life_orb),
        on_after_hit: Some(on_after_hit_life_orb),
        ..ItemHooks::NONE
    });

    registry[ItemId::ExpertBelt as usize] = Some(ItemHooks {
        on_final_modifier: Some(on_final_modifier_expert_belt),
        ..ItemHooks::NONE
    });

    registry[ItemId::Leftovers as usize] = Some(ItemHooks {
        on_end_of_turn: Some(on_end_of_turn_leftovers),
        ..ItemHooks::NONE
    });

    registry
};
