use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Damage multiplier table keyed by (attacking type, defending type).
/// Pairs without a recorded entry are neutral (1.0). The table can be built
/// from the compiled standard chart or filled from an external catalog; the
/// rest of the engine does not care where it came from
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct TypeChart {
    chart: HashMap<String, HashMap<String, f32>>,
}

impl TypeChart {
    /// An empty chart where every matchup is neutral
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard 18-type chart, compiled into the engine
    pub fn standard() -> Self {
        let mut chart = Self::new();
        for (attack, double, half, none) in STANDARD_MATCHUPS {
            for defend in *double {
                chart.set(attack, defend, 2.0);
            }
            for defend in *half {
                chart.set(attack, defend, 0.5);
            }
            for defend in *none {
                chart.set(attack, defend, 0.0);
            }
        }
        chart
    }

    /// Builds a chart from externally loaded (attack, defend, multiplier)
    /// entries
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String, f32)>,
    {
        let mut chart = Self::new();
        for (attack, defend, multiplier) in entries {
            chart.set(&attack, &defend, multiplier);
        }
        chart
    }

    /// Records the multiplier for a single matchup
    pub fn set(&mut self, attack: &str, defend: &str, multiplier: f32) {
        self.chart
            .entry(attack.to_lowercase())
            .or_default()
            .insert(defend.to_lowercase(), multiplier);
    }

    /// Pairwise lookup; 1.0 when no entry exists. Type names are matched
    /// case-insensitively
    pub fn single(&self, attack: &str, defend: &str) -> f32 {
        self.chart
            .get(&attack.to_lowercase())
            .and_then(|row| row.get(&defend.to_lowercase()))
            .copied()
            .unwrap_or(1.0)
    }

    /// Combined multiplier against one or two defending types: the product
    /// of the pairwise lookups, except that an immunity on either axis
    /// makes the result 0 regardless of the other
    pub fn effectiveness(&self, attack: &str, defenders: &[String]) -> f32 {
        let mut combined = 1.0;
        for defend in defenders {
            let multiplier = self.single(attack, defend);
            if multiplier == 0.0 {
                return 0.0;
            }
            combined *= multiplier;
        }
        combined
    }
}

/// Per attacking type: targets taking double damage, targets taking half
/// damage, targets taking no damage at all
type Matchups = (&'static str, &'static [&'static str], &'static [&'static str], &'static [&'static str]);

const STANDARD_MATCHUPS: &[Matchups] = &[
    ("normal", &[], &["rock", "steel"], &["ghost"]),
    ("fire", &["grass", "ice", "bug", "steel"], &["fire", "water", "rock", "dragon"], &[]),
    ("water", &["fire", "ground", "rock"], &["water", "grass", "dragon"], &[]),
    ("electric", &["water", "flying"], &["electric", "grass", "dragon"], &["ground"]),
    ("grass", &["water", "ground", "rock"], &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"], &[]),
    ("ice", &["grass", "ground", "flying", "dragon"], &["fire", "water", "ice", "steel"], &[]),
    ("fighting", &["normal", "ice", "rock", "dark", "steel"], &["poison", "flying", "psychic", "bug", "fairy"], &["ghost"]),
    ("poison", &["grass", "fairy"], &["poison", "ground", "rock", "ghost"], &["steel"]),
    ("ground", &["fire", "electric", "poison", "rock", "steel"], &["grass", "bug"], &["flying"]),
    ("flying", &["grass", "fighting", "bug"], &["electric", "rock", "steel"], &[]),
    ("psychic", &["fighting", "poison"], &["psychic", "steel"], &["dark"]),
    ("bug", &["grass", "psychic", "dark"], &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"], &[]),
    ("rock", &["fire", "ice", "flying", "bug"], &["fighting", "ground", "steel"], &[]),
    ("ghost", &["psychic", "ghost"], &["dark"], &["normal"]),
    ("dragon", &["dragon"], &["steel"], &["fairy"]),
    ("dark", &["psychic", "ghost"], &["fighting", "dark", "fairy"], &[]),
    ("steel", &["ice", "rock", "fairy"], &["fire", "water", "electric", "steel"], &[]),
    ("fairy", &["fighting", "dragon", "dark"], &["fire", "poison", "steel"], &[]),
];
