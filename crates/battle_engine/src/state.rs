//! Battle state representation.
//!
//! `BattleState` is a plain owned value: two sides with their rosters, the
//! field, a turn counter and the pending request. It is cloned at the start
//! of every resolution so a failed turn leaves the caller's copy untouched.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::abilities::AbilityId;
use crate::conditions::{EffectState, Status, Volatile};
use crate::error::BattleError;
use crate::field::Field;
use crate::items::ItemId;
use crate::moves::MoveId;
use crate::natures::NatureId;
use crate::rules::Ruleset;
use crate::species::SpeciesId;
use crate::stats::{BattleStat, Boosts};
use crate::types::Type;

/// Maximum team size per player
pub const MAX_TEAM_SIZE: usize = 6;

/// Number of move slots per combatant
pub const MAX_MOVES: usize = 4;

// ============================================================================
// Identifiers
// ============================================================================

/// One of the two sides of a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SideId {
    P1 = 0,
    P2 = 1,
}

impl SideId {
    pub const BOTH: [SideId; 2] = [SideId::P1, SideId::P2];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn foe(self) -> SideId {
        match self {
            SideId::P1 => SideId::P2,
            SideId::P2 => SideId::P1,
        }
    }
}

impl fmt::Display for SideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideId::P1 => f.write_str("p1"),
            SideId::P2 => f.write_str("p2"),
        }
    }
}

/// Non-owning reference to a combatant: side plus roster slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CombatantRef {
    pub side: SideId,
    pub slot: u8,
}

impl CombatantRef {
    pub const fn new(side: SideId, slot: u8) -> Self {
        Self { side, slot }
    }
}

impl fmt::Display for CombatantRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.side, self.slot)
    }
}

// ============================================================================
// Combatant
// ============================================================================

/// A move slot with its remaining PP.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    pub id: Option<MoveId>,
    pub pp: u8,
    pub max_pp: u8,
}

impl MoveSlot {
    pub fn new(id: MoveId) -> Self {
        let pp = id.data().pp;
        Self {
            id: Some(id),
            pp,
            max_pp: pp,
        }
    }
}

/// One member of a roster.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Combatant {
    pub species: SpeciesId,
    pub level: u8,
    pub nature: NatureId,
    /// Mono-typed combatants repeat their type in both slots.
    pub types: [Type; 2],
    pub base_stats: [u8; 6],
    /// Computed stats `[HP, Atk, Def, SpA, SpD, Spe]`; `stats[0]` is max HP.
    pub stats: [u16; 6],
    pub hp: u16,
    pub status: Option<EffectState<Status>>,
    pub boosts: Boosts,
    pub volatiles: Vec<EffectState<Volatile>>,
    pub ability: AbilityId,
    pub item: ItemId,
    pub moves: [MoveSlot; MAX_MOVES],
    /// Slot of the last move this combatant used while active.
    pub last_move: Option<u8>,
}

impl Combatant {
    #[inline]
    pub fn name(&self) -> &'static str {
        self.species.data().name
    }

    #[inline]
    pub fn max_hp(&self) -> u16 {
        self.stats[BattleStat::Hp as usize]
    }

    #[inline]
    pub fn stat(&self, stat: BattleStat) -> u16 {
        self.stats[stat as usize]
    }

    #[inline]
    pub fn is_fainted(&self) -> bool {
        self.hp == 0
    }

    #[inline]
    pub fn has_type(&self, ty: Type) -> bool {
        self.types[0] == ty || self.types[1] == ty
    }

    #[inline]
    pub fn status_id(&self) -> Option<Status> {
        self.status.map(|s| s.id)
    }

    #[inline]
    pub fn has_status(&self) -> bool {
        self.status.is_some()
    }

    /// `hp <= max_hp * num / den`
    #[inline]
    pub fn hp_at_or_below(&self, num: u32, den: u32) -> bool {
        self.hp as u32 * den <= self.max_hp() as u32 * num
    }

    /// A fraction of max HP, at least 1.
    #[inline]
    pub fn fraction_of_max(&self, num: u32, den: u32) -> u16 {
        (self.max_hp() as u32 * num / den).max(1) as u16
    }

    /// Not lifted off the ground by type or ability. Gravity grounds everyone.
    pub fn is_grounded(&self, field: &Field) -> bool {
        if field.gravity() {
            return true;
        }
        !self.has_type(Type::Flying) && !self.ability.hooks().on_type_immunity.is_some_and(|f| f(Type::Ground))
    }

    /// Subtract HP, saturating at 0. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u16) -> u16 {
        let dealt = amount.min(self.hp);
        self.hp -= dealt;
        dealt
    }

    /// Restore HP, capped at max. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u16) -> u16 {
        let gained = amount.min(self.max_hp() - self.hp);
        self.hp += gained;
        gained
    }

    pub fn move_id(&self, slot: usize) -> Option<MoveId> {
        self.moves.get(slot).and_then(|m| m.id)
    }
}

// ============================================================================
// Sides and battle
// ============================================================================

/// A roster and the index of its active combatant.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Side {
    pub id: SideId,
    pub roster: Vec<Combatant>,
    pub active: u8,
}

impl Side {
    pub fn new(id: SideId, roster: Vec<Combatant>) -> Self {
        Self { id, roster, active: 0 }
    }

    #[inline]
    pub fn active(&self) -> &Combatant {
        &self.roster[self.active as usize]
    }

    #[inline]
    pub fn active_mut(&mut self) -> &mut Combatant {
        &mut self.roster[self.active as usize]
    }

    #[inline]
    pub fn active_ref(&self) -> CombatantRef {
        CombatantRef::new(self.id, self.active)
    }

    pub fn all_fainted(&self) -> bool {
        self.roster.iter().all(Combatant::is_fainted)
    }

    /// Any non-fainted combatant other than the active one.
    pub fn has_reserve(&self) -> bool {
        self.roster
            .iter()
            .enumerate()
            .any(|(i, c)| i != self.active as usize && !c.is_fainted())
    }
}

/// What the engine expects from the callers next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Request {
    /// Both sides choose a move or switch.
    #[default]
    Turn,
    /// Flagged sides must replace a fainted active combatant.
    Replace { sides: [bool; 2] },
}

/// Final result of a battle. `winner == None` is a draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub winner: Option<SideId>,
}

/// Full battle state.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BattleState {
    pub sides: [Side; 2],
    pub field: Field,
    pub turn: u16,
    pub request: Request,
    pub outcome: Option<Outcome>,
    pub rules: Ruleset,
}

impl BattleState {
    /// Fresh state with the first roster member of each side active. No
    /// switch-in effects have run yet.
    pub fn new(p1: Vec<Combatant>, p2: Vec<Combatant>, rules: Ruleset) -> Self {
        Self {
            sides: [Side::new(SideId::P1, p1), Side::new(SideId::P2, p2)],
            field: Field::default(),
            turn: 0,
            request: Request::Turn,
            outcome: None,
            rules,
        }
    }

    #[inline]
    pub fn side(&self, side: SideId) -> &Side {
        &self.sides[side.index()]
    }

    #[inline]
    pub fn side_mut(&mut self, side: SideId) -> &mut Side {
        &mut self.sides[side.index()]
    }

    #[inline]
    pub fn combatant(&self, r: CombatantRef) -> &Combatant {
        &self.sides[r.side.index()].roster[r.slot as usize]
    }

    #[inline]
    pub fn combatant_mut(&mut self, r: CombatantRef) -> &mut Combatant {
        &mut self.sides[r.side.index()].roster[r.slot as usize]
    }

    #[inline]
    pub fn active_ref(&self, side: SideId) -> CombatantRef {
        self.sides[side.index()].active_ref()
    }

    #[inline]
    pub fn active(&self, side: SideId) -> &Combatant {
        self.sides[side.index()].active()
    }

    /// The combatant currently facing `r`.
    #[inline]
    pub fn foe_of(&self, r: CombatantRef) -> CombatantRef {
        self.active_ref(r.side.foe())
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Verify the invariants every resolved turn must uphold.
    pub fn check_invariants(&self) -> Result<(), BattleError> {
        for side in &self.sides {
            if side.roster.is_empty() || side.roster.len() > MAX_TEAM_SIZE {
                return Err(BattleError::InconsistentState(format!(
                    "{} roster has {} members",
                    side.id,
                    side.roster.len()
                )));
            }
            if side.active as usize >= side.roster.len() {
                return Err(BattleError::InconsistentState(format!(
                    "{} active index {} out of range",
                    side.id, side.active
                )));
            }

            let replacing = matches!(self.request, Request::Replace { sides } if sides[side.id.index()]);
            for (slot, c) in side.roster.iter().enumerate() {
                let who = CombatantRef::new(side.id, slot as u8);
                if c.hp > c.max_hp() {
                    return Err(BattleError::InconsistentState(format!(
                        "{who} has {} HP over max {}",
                        c.hp,
                        c.max_hp()
                    )));
                }
                if !c.boosts.in_range() {
                    return Err(BattleError::InconsistentState(format!(
                        "{who} boosts out of range"
                    )));
                }
                if c.moves.iter().any(|m| m.pp > m.max_pp) {
                    return Err(BattleError::InconsistentState(format!(
                        "{who} PP above maximum"
                    )));
                }
                if c.is_fainted() {
                    if !c.volatiles.is_empty() {
                        return Err(BattleError::InconsistentState(format!(
                            "fainted {who} still holds volatiles"
                        )));
                    }
                    let active = side.active as usize == slot;
                    if active && !replacing && self.outcome.is_none() {
                        return Err(BattleError::InconsistentState(format!(
                            "fainted {who} is active with no replacement pending"
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}
