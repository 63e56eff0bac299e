use crate::state::Combatant;
use crate::types::Type;

/// Levitate: immune to Ground moves. Gravity is checked by the caller.
pub fn levitate(move_type: Type) -> bool {
    move_type == Type::Ground
}

/// Volt Absorb: immune to Electric moves. The heal is not modelled.
pub fn volt_absorb(move_type: Type) -> bool {
    move_type == Type::Electric
}

/// Water Absorb: immune to Water moves.
pub fn water_absorb(move_type: Type) -> bool {
    move_type == Type::Water
}

/// Shell Armor / Battle Armor: cannot be critically hit
pub fn shell_armor(_defender: &Combatant) -> bool {
    true
}
