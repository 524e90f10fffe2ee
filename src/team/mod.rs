/// Roster construction: random teams and saved team definitions
pub mod builder;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pokemon::Pokemon;
use crate::pokemon::moves::{Move, MoveRef};
use crate::pokemon::stats::PokemonStats;

/// Maximum number of combatants on one team
pub const MAX_TEAM_SIZE: usize = 6;

/// Maximum number of moves in a combatant's loadout
pub const MAX_LOADOUT: usize = 4;

/// One creature's live, mutable, battle-scoped state. Created from a catalog
/// template when a team is built and owned by exactly one [`Team`] for the
/// lifetime of one battle
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Combatant {
    /// Species name from the catalog
    pub name: String,

    /// Display name: the nickname when one was given, the species name
    /// otherwise
    pub nickname: String,

    /// One or two type names, primary first
    pub types: Vec<String>,

    /// Base stats, copied from the template
    pub stats: PokemonStats,

    /// Remaining hit points; starts at `stats.hp` and only decreases
    pub current_hp: u32,

    /// The concrete loadout, at most four distinct moves
    pub moves: Vec<Move>,
}

impl Combatant {
    /// Battle-start copy of a template with a concrete loadout
    pub fn from_template(template: &Pokemon, nickname: Option<String>, moves: Vec<Move>) -> Self {
        Self {
            name: template.name.clone(),
            nickname: nickname.unwrap_or_else(|| template.name.clone()),
            types: template.types.clone(),
            stats: template.stats.clone(),
            current_hp: template.stats.hp,
            moves,
        }
    }

    /// Whether the combatant has fainted and can no longer act
    pub fn is_fainted(&self) -> bool {
        self.current_hp == 0
    }

    /// Applies damage, flooring hp at 0; returns the hp actually removed
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let dealt = amount.min(self.current_hp);
        self.current_hp -= dealt;
        dealt
    }

    /// Finds a loadout move matching a normalized reference
    pub fn find_move(&self, move_ref: &MoveRef) -> Option<&Move> {
        match move_ref {
            MoveRef::Name(name) => self.moves.iter().find(|m| m.name.eq_ignore_ascii_case(name)),
            MoveRef::Id(id) => self.moves.iter().find(|m| m.id == *id),
        }
    }
}

/// An ordered roster of up to six combatants plus the active-member pointer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Team {
    members: Vec<Combatant>,
    active_idx: usize,
}

impl Team {
    /// Builds a team from combatants, keeping at most the first six. The
    /// first member starts active
    pub fn new(mut members: Vec<Combatant>) -> Self {
        members.truncate(MAX_TEAM_SIZE);
        Self {
            members,
            active_idx: 0,
        }
    }

    /// All members in roster order
    pub fn members(&self) -> &[Combatant] {
        &self.members
    }

    /// Index of the active combatant
    pub fn active_index(&self) -> usize {
        self.active_idx
    }

    /// The active combatant
    pub fn active(&self) -> &Combatant {
        &self.members[self.active_idx]
    }

    pub(crate) fn active_mut(&mut self) -> &mut Combatant {
        &mut self.members[self.active_idx]
    }

    pub(crate) fn set_active(&mut self, index: usize) {
        debug_assert!(index < self.members.len());
        self.active_idx = index;
    }

    /// Member at the given slot, if any
    pub fn get(&self, index: usize) -> Option<&Combatant> {
        self.members.get(index)
    }

    /// Number of members on the team
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members at all
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// A team is defeated once every member has fainted
    pub fn is_defeated(&self) -> bool {
        self.members.iter().all(Combatant::is_fainted)
    }

    /// Slot of the first member still standing, in roster order
    pub fn first_live_index(&self) -> Option<usize> {
        self.members.iter().position(|c| !c.is_fainted())
    }
}

/// One entry of an externally saved roster, as produced by a team editor or
/// stored team file. The engine only consumes this shape, it never persists
/// it
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TeamMemberDef {
    /// Creature name, matched case-insensitively against the catalog
    pub name: String,

    /// Optional display nickname
    #[serde(default)]
    pub nickname: Option<String>,

    /// Requested moves, by name or id; unknown entries are dropped during
    /// roster construction
    #[serde(default)]
    pub moves: Vec<String>,
}

impl TeamMemberDef {
    /// Parses a JSON array of saved-team records
    pub fn parse_definition(json: &str) -> Result<Vec<TeamMemberDef>> {
        serde_json::from_str(json).context("invalid team definition")
    }
}
