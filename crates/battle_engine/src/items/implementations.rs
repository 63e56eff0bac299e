//! Item hook implementations.

use crate::damage::Modifier;
use crate::moves::MoveCategory;
use crate::state::Combatant;
use crate::types::NEUTRAL;

// Choice Band: 1.5x Atk for physical moves.
pub fn on_modify_attack_choice_band(_holder: &Combatant, category: MoveCategory) -> Modifier {
    if category == MoveCategory::Physical {
        Modifier::ONE_POINT_FIVE
    } else {
        Modifier::ONE
    }
}

// Choice Specs: 1.5x SpA for special moves.
pub fn on_modify_attack_choice_specs(_holder: &Combatant, category: MoveCategory) -> Modifier {
    if category == MoveCategory::Special {
        Modifier::ONE_POINT_FIVE
    } else {
        Modifier::ONE
    }
}

pub fn on_final_modifier_life_orb(_holder: &Combatant, _effectiveness: u8) -> Modifier {
    Modifier::LIFE_ORB
}

// Expert Belt: 1.2x on super effective hits.
pub fn on_final_modifier_expert_belt(_holder: &Combatant, effectiveness: u8) -> Modifier {
    if effectiveness > NEUTRAL {
        Modifier::EXPERT_BELT
    } else {
        Modifier::ONE
    }
}

// Life Orb: lose 1/10 max HP after dealing damage.
pub fn on_after_hit_life_orb(holder: &Combatant, damage: u16) -> Option<u16> {
    (damage > 0).then(|| holder.fraction_of_max(1, 10))
}

// Leftovers: heal 1/16 max HP.
pub fn on_end_of_turn_leftovers(holder: &Combatant) -> Option<u16> {
    (holder.hp < holder.max_hp()).then(|| holder.fraction_of_max(1, 16))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::PokemonConfig;

    #[test]
    fn test_leftovers_skips_full_hp() {
        let mut holder = PokemonConfig::from_str("snorlax").unwrap().build();
        assert_eq!(on_end_of_turn_leftovers(&holder), None);
        holder.hp -= 50;
        assert_eq!(on_end_of_turn_leftovers(&holder), Some(holder.max_hp() / 16));
    }

    #[test]
    fn test_life_orb_recoil() {
        let holder = PokemonConfig::from_str("gengar").unwrap().build();
        assert_eq!(on_after_hit_life_orb(&holder, 0), None);
        assert_eq!(on_after_hit_life_orb(&holder, 80), Some(holder.max_hp() / 10));
    }

    #[test]
    fn test_expert_belt_only_on_super_effective() {
        let holder = PokemonConfig::from_str("lucario").unwrap().build();
        assert_eq!(on_final_modifier_expert_belt(&holder, 4), Modifier::ONE);
        assert_eq!(on_final_modifier_expert_belt(&holder, 8), Modifier::EXPERT_BELT);
        assert_eq!(on_final_modifier_expert_belt(&holder, 16), Modifier::EXPERT_BELT);
    }
}
