//! Move hook registry.
//!
//! Static registry mapping MoveId to MoveHooks for conditional move logic.

use super::hooks::MoveHooks;
use super::implementations::*;
use crate::damage::Modifier;
use crate::moves::MoveId;

pub static MOVE_REGISTRY: [Option<MoveHooks>; MoveId::COUNT] = {
    let mut registry: [Option<MoveHooks>; MoveId::COUNT] = [None; MoveId::COUNT];

    // =========================================================================
    // Conditional Base Power Moves (OnBasePowerCondition + multiplier)
    // =========================================================================

    registry[MoveId::Venoshock as usize] = Some(MoveHooks {
        on_base_power_condition: Some(venoshock_condition),
        conditional_multiplier: Modifier::DOUBLE,
        ..MoveHooks::NONE
    });

    registry[MoveId::Hex as usize] = Some(MoveHooks {
        on_base_power_condition: Some(hex_condition),
        conditional_multiplier: Modifier::DOUBLE,
        ..MoveHooks::NONE
    });

    registry[MoveId::Brine as usize] = Some(MoveHooks {
        on_base_power_condition: Some(brine_condition),
        conditional_multiplier: Modifier::DOUBLE,
        ..MoveHooks::NONE
    });

    registry[MoveId::Facade as usize] = Some(MoveHooks {
        on_base_power_condition: Some(facade_condition),
        conditional_multiplier: Modifier::DOUBLE,
        ignores_burn: true,
        ..MoveHooks::NONE
    });

    // =========================================================================
    // Variable Power / Type
    // =========================================================================

    registry[MoveId::WeatherBall as usize] = Some(MoveHooks {
        on_modify_type: Some(on_modify_type_weather_ball),
        on_modify_base_power: Some(on_modify_base_power_weather_ball),
        ..MoveHooks::NONE
    });

    registry[MoveId::Eruption as usize] = Some(MoveHooks {
        on_modify_base_power: Some(eruption_power),
        ..MoveHooks::NONE
    });

    registry[MoveId::WaterSpout as usize] = Some(MoveHooks {
        on_modify_base_power: Some(eruption_power),
        ..MoveHooks::NONE
    });

    registry
};
