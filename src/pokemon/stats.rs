use serde::{Deserialize, Serialize};

/// Represents the base stats of a Pokemon
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PokemonStats {
    /// The hit points of the Pokemon
    pub hp: u32,

    /// The attack power of the Pokemon
    pub attack: u32,

    /// The defense power of the Pokemon
    pub defense: u32,

    /// The special attack power of the Pokemon
    pub special_attack: u32,

    /// The special defense power of the Pokemon
    pub special_defense: u32,

    /// This stat determines attack order in battle
    pub speed: u32,
}
