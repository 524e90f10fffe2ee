use std::collections::BTreeMap;

use crate::pokemon::Pokemon;
use crate::pokemon::moves::{Move, MoveRef};
use crate::pokemon::ptype::TypeChart;

/// Supplies the loaded, validated reference data the engine runs on. The
/// engine never reads files or network resources itself; whoever hosts it
/// (an importer, a database layer, a test fixture) hands it an
/// implementation of this trait
pub trait DataProvider {
    /// Creature templates keyed by lowercase name. Ordered so that seeded
    /// random sampling over the catalog is reproducible
    fn pokemon_catalog(&self) -> &BTreeMap<String, Pokemon>;

    /// Moves keyed by lowercase name
    fn move_catalog(&self) -> &BTreeMap<String, Move>;

    /// The type effectiveness table
    fn type_chart(&self) -> &TypeChart;

    /// Case-insensitive creature lookup
    fn get_pokemon(&self, name: &str) -> Option<&Pokemon> {
        self.pokemon_catalog().get(&name.trim().to_lowercase())
    }

    /// Case-insensitive move lookup
    fn get_move(&self, name: &str) -> Option<&Move> {
        self.move_catalog().get(&name.trim().to_lowercase())
    }

    /// Resolves a normalized move reference to a concrete move
    fn resolve_move(&self, move_ref: &MoveRef) -> Option<&Move> {
        match move_ref {
            MoveRef::Name(name) => self.get_move(name),
            MoveRef::Id(id) => self.move_catalog().values().find(|m| m.id == *id),
        }
    }
}

/// An owned, in-memory catalog. This is the implementation callers get when
/// their loading pipeline has already materialized the reference data
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    pokemon: BTreeMap<String, Pokemon>,
    moves: BTreeMap<String, Move>,
    chart: TypeChart,
}

impl InMemoryCatalog {
    /// Creates an empty catalog with the given effectiveness table
    pub fn new(chart: TypeChart) -> Self {
        Self {
            pokemon: BTreeMap::new(),
            moves: BTreeMap::new(),
            chart,
        }
    }

    /// Creates an empty catalog carrying the compiled standard chart
    pub fn with_standard_chart() -> Self {
        Self::new(TypeChart::standard())
    }

    /// Adds a creature template, keyed by its lowercased name
    pub fn add_pokemon(&mut self, pokemon: Pokemon) {
        self.pokemon.insert(pokemon.name.to_lowercase(), pokemon);
    }

    /// Adds a move, keyed by its lowercased name
    pub fn add_move(&mut self, mv: Move) {
        self.moves.insert(mv.name.to_lowercase(), mv);
    }
}

impl DataProvider for InMemoryCatalog {
    fn pokemon_catalog(&self) -> &BTreeMap<String, Pokemon> {
        &self.pokemon
    }

    fn move_catalog(&self) -> &BTreeMap<String, Move> {
        &self.moves
    }

    fn type_chart(&self) -> &TypeChart {
        &self.chart
    }
}
