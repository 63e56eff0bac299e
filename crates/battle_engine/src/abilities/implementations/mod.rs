//! Ability hook implementations, grouped by when they fire.

pub mod contact;
pub mod final_modifiers;
pub mod immunity;
pub mod intimidate;
pub mod speed;
pub mod stat_modifiers;
pub mod weather_setters;
