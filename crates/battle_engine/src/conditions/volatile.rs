//! Volatile effect bookkeeping on a combatant.

use super::{EffectState, Volatile};
use crate::state::Combatant;

impl Combatant {
    #[inline]
    pub fn volatile(&self, id: Volatile) -> Option<&EffectState<Volatile>> {
        self.volatiles.iter().find(|v| v.id == id)
    }

    #[inline]
    pub fn has_volatile(&self, id: Volatile) -> bool {
        self.volatile(id).is_some()
    }

    /// Add a volatile. Fails if one with the same id is already active.
    pub fn add_volatile(&mut self, effect: EffectState<Volatile>) -> bool {
        if self.has_volatile(effect.id) {
            return false;
        }
        self.volatiles.push(effect);
        true
    }

    /// Whether a move slot is blocked by Disable.
    pub fn is_slot_disabled(&self, slot: usize) -> bool {
        self.volatile(Volatile::Disable)
            .is_some_and(|v| v.payload as usize == slot)
    }

    /// Slot forced by a choice item, if any.
    pub fn choice_locked_slot(&self) -> Option<usize> {
        self.volatile(Volatile::ChoiceLock)
            .map(|v| v.payload as usize)
    }

    /// Switch-out or faint: drop every volatile.
    pub fn clear_volatiles(&mut self) {
        self.volatiles.clear();
    }

    /// End-of-turn tick. Flinch always ends; timed volatiles count down.
    ///
    /// Returns the volatiles that expired, in insertion order.
    pub fn tick_volatiles(&mut self) -> Vec<Volatile> {
        let mut expired = Vec::new();
        self.volatiles.retain_mut(|v| {
            if v.id == Volatile::Flinch {
                return false;
            }
            match v.duration.as_mut() {
                Some(turns) => {
                    *turns = turns.saturating_sub(1);
                    if *turns == 0 {
                        expired.push(v.id);
                        false
                    } else {
                        true
                    }
                }
                None => true,
            }
        });
        expired
    }
}
