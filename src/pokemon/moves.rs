use serde::{Deserialize, Serialize};

/// Represents a move a Pokemon can use in battle. Immutable reference data
/// owned by the catalog
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Move {
    /// Catalog identifier of the move
    pub id: u32,

    /// The canonical (lowercase, hyphenated) move name
    pub name: String,

    /// Base power of the move; status moves carry no power and deal no damage
    pub power: Option<u32>,

    /// The name of the move's type
    #[serde(rename = "type")]
    pub move_type: String,
}

impl Move {
    /// Whether this move can deal direct damage
    pub fn is_usable(&self) -> bool {
        self.power.unwrap_or(0) > 0
    }

    /// Human-readable name, e.g. "thunder-punch" becomes "Thunder Punch"
    pub fn display_name(&self) -> String {
        self.name
            .split('-')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A move reference as it arrives from the outside world, after normalization.
/// Saved teams and older data sets reference moves by name, by integer id or
/// by a float-stringified id ("85.0"); everything inside the engine works on
/// resolved [`Move`]s instead
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum MoveRef {
    /// Referenced by name, matched case-insensitively
    Name(String),

    /// Referenced by catalog id
    Id(u32),
}

impl MoveRef {
    /// Normalizes a raw move reference into its tagged form
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if let Ok(id) = trimmed.parse::<u32>() {
            return MoveRef::Id(id);
        }

        // Some stored rosters carry ids that went through a float round-trip
        if let Ok(float_id) = trimmed.parse::<f64>() {
            if float_id.fract() == 0.0 && float_id >= 0.0 && float_id <= u32::MAX as f64 {
                return MoveRef::Id(float_id as u32);
            }
        }

        MoveRef::Name(trimmed.to_lowercase())
    }
}
