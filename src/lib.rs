/// Reference data model: creature templates, stats, moves and the type chart
pub mod pokemon;

/// Data provider boundary supplying the loaded catalogs to the engine
pub mod catalog;

/// Battle-scoped combatants, teams and roster construction
pub mod team;

/// The battle state machine, turn resolution and damage calculation
pub mod battle;

/// Engine error types
pub mod error;

pub use battle::{Battle, BattleOptions, Phase, Side};
pub use catalog::{DataProvider, InMemoryCatalog};
pub use error::{ActionError, ConfigError};
pub use pokemon::Pokemon;
pub use pokemon::moves::{Move, MoveRef};
pub use pokemon::ptype::TypeChart;
pub use pokemon::stats::PokemonStats;
pub use team::{Combatant, Team, TeamMemberDef};
pub use team::builder::{TeamBuild, build_random_team, build_team_from_definition};

#[cfg(test)]
mod tests;
