use thiserror::Error;

/// Errors that prevent a battle from being created at all. These bubble up
/// to the caller; no partial battle state is left behind
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The creature or move catalog has no entries
    #[error("the catalog is empty")]
    EmptyCatalog,

    /// The catalog does not hold enough creatures with usable moves for a
    /// full random team
    #[error("only {available} creatures with usable moves in the catalog, {required} needed")]
    NotEnoughPokemon {
        /// How many usable creatures the catalog holds
        available: usize,
        /// How many a full team needs
        required: usize,
    },
}

/// Player actions the battle rejects without mutating any state. The caller
/// is expected not to offer these, but the engine guards anyway
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The battle has ended; only a restart is accepted
    #[error("the battle is already over")]
    BattleOver,

    /// The action is not valid in the current phase
    #[error("a different action is expected in the current phase")]
    WrongPhase,

    /// The referenced move is not in the active Pokemon's loadout
    #[error("'{0}' is not in the active Pokemon's loadout")]
    MoveNotInLoadout(String),

    /// No team member exists at the given slot
    #[error("no Pokemon at team slot {0}")]
    NoSuchSlot(usize),

    /// The switch target has fainted and cannot re-enter the battle
    #[error("the Pokemon at slot {0} has fainted")]
    FaintedSwitchTarget(usize),
}
