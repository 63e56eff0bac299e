use crate::abilities::hooks::AbilityHooks;
use crate::abilities::implementations::{
    contact, final_modifiers, immunity, intimidate, speed, stat_modifiers, weather_setters,
};
use crate::abilities::AbilityId;

pub static ABILITY_REGISTRY: [Option<AbilityHooks>; AbilityId::COUNT] = {
    let mut registry: [Option<AbilityHooks>; AbilityId::COUNT] = [None; AbilityId::COUNT];

    // =========================================================================
    // Weather / Terrain Setters
    // =========================================================================
    registry[AbilityId::Drizzle as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::drizzle),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Drought as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::drought),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SandStream as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::sand_stream),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SnowWarning as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::snow_warning),
        ..AbilityHooks::NONE
    });

    registry[AbilityId::ElectricSurge as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::electric_surge),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::GrassySurge as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::grassy_surge),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MistySurge as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::misty_surge),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PsychicSurge as usize] = Some(AbilityHooks {
        on_switch_in: Some(weather_setters::psychic_surge),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Switch-in Stat Changes
    // =========================================================================
    registry[AbilityId::Intimidate as usize] = Some(AbilityHooks {
        on_switch_in: Some(intimidate::intimidate),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Download as usize] = Some(AbilityHooks {
        on_switch_in: Some(intimidate::download),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Attack / Defense Modifiers
    // =========================================================================
    registry[AbilityId::HugePower as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PurePower as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::huge_power),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Guts as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::guts),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Blaze as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::blaze),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Torrent as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::torrent),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Overgrow as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::overgrow),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Swarm as usize] = Some(AbilityHooks {
        on_modify_attack: Some(stat_modifiers::swarm),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ThickFat as usize] = Some(AbilityHooks {
        on_modify_defense: Some(stat_modifiers::thick_fat),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::MarvelScale as usize] = Some(AbilityHooks {
        on_modify_defense: Some(stat_modifiers::marvel_scale),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Final Modifiers
    // =========================================================================
    registry[AbilityId::TintedLens as usize] = Some(AbilityHooks {
        on_attacker_final_mod: Some(final_modifiers::tinted_lens),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Multiscale as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::multiscale),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::Filter as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SolidRock as usize] = Some(AbilityHooks {
        on_defender_final_mod: Some(final_modifiers::filter),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Immunities
    // =========================================================================
    registry[AbilityId::Levitate as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::levitate),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::VoltAbsorb as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::volt_absorb),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::WaterAbsorb as usize] = Some(AbilityHooks {
        on_type_immunity: Some(immunity::water_absorb),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::ShellArmor as usize] = Some(AbilityHooks {
        on_crit_immunity: Some(immunity::shell_armor),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::BattleArmor as usize] = Some(AbilityHooks {
        on_crit_immunity: Some(immunity::shell_armor),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Contact
    // =========================================================================
    registry[AbilityId::Static as usize] = Some(AbilityHooks {
        on_damaging_hit: Some(contact::static_ability),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::FlameBody as usize] = Some(AbilityHooks {
        on_damaging_hit: Some(contact::flame_body),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::PoisonPoint as usize] = Some(AbilityHooks {
        on_damaging_hit: Some(contact::poison_point),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::RoughSkin as usize] = Some(AbilityHooks {
        on_damaging_hit: Some(contact::rough_skin),
        ..AbilityHooks::NONE
    });

    // =========================================================================
    // Speed
    // =========================================================================
    registry[AbilityId::Chlorophyll as usize] = Some(AbilityHooks {
        on_modify_speed: Some(speed::chlorophyll),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SwiftSwim as usize] = Some(AbilityHooks {
        on_modify_speed: Some(speed::swift_swim),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SandRush as usize] = Some(AbilityHooks {
        on_modify_speed: Some(speed::sand_rush),
        ..AbilityHooks::NONE
    });
    registry[AbilityId::SpeedBoost as usize] = Some(AbilityHooks {
        on_end_of_turn: Some(speed::speed_boost),
        ..AbilityHooks::NONE
    });

    registry
};
