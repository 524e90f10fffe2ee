/// Pokemon Type module (the effectiveness chart)
pub mod ptype;

/// Pokemon Stats (hp, etc) module
pub mod stats;

/// Move data and move reference normalization
pub mod moves;

use serde::{Deserialize, Serialize};

use stats::PokemonStats;

/// Represents a Pokemon as it exists in the catalog: the immutable template
/// every battle-scoped combatant is copied from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Pokemon {
    /// Catalog identifier of the Pokemon
    pub id: u32,

    /// The display name of the Pokemon
    pub name: String,

    /// One or two type names, primary type first
    pub types: Vec<String>,

    /// The base stats of the Pokemon
    pub stats: PokemonStats,

    /// Names of every move this Pokemon is able to learn
    pub moves: Vec<String>,
}

impl Pokemon {
    /// The primary type of the Pokemon
    pub fn primary_type(&self) -> &str {
        self.types.first().map(String::as_str).unwrap_or("normal")
    }

    /// The secondary type of the Pokemon, if it has one
    pub fn secondary_type(&self) -> Option<&str> {
        self.types.get(1).map(String::as_str)
    }
}
