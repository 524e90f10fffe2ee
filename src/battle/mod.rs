/// Damage calculation for a single attack
pub mod damage;

/// Turn resolution: attack ordering and execution
mod turn;

use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::ActionError;
use crate::pokemon::moves::MoveRef;
use crate::pokemon::ptype::TypeChart;
use crate::team::Team;

/// Which side of the battle an actor belongs to
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The human player's side
    Player,
    /// The AI-controlled side
    Opponent,
}

impl Side {
    /// The other side
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Possessive label used at the start of log lines
    pub fn possessive(&self) -> &'static str {
        match self {
            Side::Player => "Your",
            Side::Opponent => "Opponent's",
        }
    }

    /// Possessive label used in the middle of log lines
    pub fn possessive_object(&self) -> &'static str {
        match self {
            Side::Player => "your",
            Side::Opponent => "the opponent's",
        }
    }

    /// Label used when this side wins the battle
    pub fn label(&self) -> &'static str {
        match self {
            Side::Player => "You",
            Side::Opponent => "The AI",
        }
    }
}

/// Lifecycle phase of a battle
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// Both active combatants stand; waiting for the player's move choice
    AwaitingAction,
    /// The player's active combatant fainted and a teammate still stands;
    /// waiting for the switch
    AwaitingSwitch,
    /// One or both teams are fully defeated. Terminal: only a restart
    /// leaves this phase
    GameOver,
}

/// Tunable battle behavior
#[derive(Clone, Copy, Debug)]
pub struct BattleOptions {
    /// Seed for the battle RNG (damage rolls and the AI's move choice).
    /// None seeds from entropy
    pub seed: Option<u64>,

    /// Winner declared when both teams end up fully fainted on the same
    /// turn. Defaults to the opponent, matching the classic check order
    pub double_ko_winner: Side,
}

impl Default for BattleOptions {
    fn default() -> Self {
        Self {
            seed: None,
            double_ko_winner: Side::Opponent,
        }
    }
}

/// One battle: both rosters, the phase, the outcome and the append-only log
/// of human-readable event lines. A battle is exclusively owned by one
/// session; all mutation goes through [`Battle::choose_move`],
/// [`Battle::switch_to`] and [`Battle::restart`]
#[derive(Serialize, Clone, Debug)]
pub struct Battle {
    pub(crate) player: Team,
    pub(crate) opponent: Team,
    phase: Phase,
    winner: Option<Side>,
    pub(crate) log: Vec<String>,
    #[serde(skip)]
    pub(crate) chart: TypeChart,
    #[serde(skip)]
    options: BattleOptions,
    #[serde(skip)]
    pub(crate) rng: StdRng,
}

impl Battle {
    /// Starts a battle between two freshly built teams. The effectiveness
    /// table is copied in so the battle stays self-contained
    pub fn new(player: Team, opponent: Team, chart: TypeChart, options: BattleOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut battle = Self {
            player,
            opponent,
            phase: Phase::AwaitingAction,
            winner: None,
            log: Vec::new(),
            chart,
            options,
            rng,
        };
        battle.begin();
        battle
    }

    fn begin(&mut self) {
        self.log.push(format!(
            "A new {}v{} battle begins!",
            self.player.len(),
            self.opponent.len()
        ));
        info!(
            "battle started: {} vs {} creatures",
            self.player.len(),
            self.opponent.len()
        );
        // Covers rosters handed in already defeated
        self.check_game_over();
        self.refresh_phase();
    }

    /// Restarts play with fresh rosters, the only way out of `GameOver`.
    /// The log is cleared; the RNG stream continues
    pub fn restart(&mut self, player: Team, opponent: Team) {
        self.player = player;
        self.opponent = opponent;
        self.phase = Phase::AwaitingAction;
        self.winner = None;
        self.log.clear();
        self.begin();
    }

    /// Plays one turn with the given move from the player's active loadout.
    /// The reference may be a name or an id; anything that does not resolve
    /// against the loadout is rejected without touching the battle
    pub fn choose_move(&mut self, reference: &str) -> Result<(), ActionError> {
        match self.phase {
            Phase::GameOver => return Err(ActionError::BattleOver),
            Phase::AwaitingSwitch => return Err(ActionError::WrongPhase),
            Phase::AwaitingAction => {}
        }

        let move_ref = MoveRef::parse(reference);
        let chosen = self
            .player
            .active()
            .find_move(&move_ref)
            .cloned()
            .ok_or_else(|| ActionError::MoveNotInLoadout(reference.to_string()))?;

        self.resolve_turn(chosen);
        self.check_game_over();
        self.auto_switch_opponent();
        self.refresh_phase();
        Ok(())
    }

    /// Sends out the team member at `index` after the active combatant
    /// fainted
    pub fn switch_to(&mut self, index: usize) -> Result<(), ActionError> {
        match self.phase {
            Phase::GameOver => return Err(ActionError::BattleOver),
            Phase::AwaitingAction => return Err(ActionError::WrongPhase),
            Phase::AwaitingSwitch => {}
        }

        let target = self.player.get(index).ok_or(ActionError::NoSuchSlot(index))?;
        if target.is_fainted() {
            return Err(ActionError::FaintedSwitchTarget(index));
        }

        let name = target.nickname.clone();
        self.player.set_active(index);
        self.log.push(format!("You sent out {name}!"));
        self.phase = Phase::AwaitingAction;
        Ok(())
    }

    /// Declares the winner once a team is fully fainted. When both teams
    /// went down on the same turn the configured `double_ko_winner` takes
    /// the battle
    fn check_game_over(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        let winner = match (self.player.is_defeated(), self.opponent.is_defeated()) {
            (true, true) => Some(self.options.double_ko_winner),
            (true, false) => Some(Side::Opponent),
            (false, true) => Some(Side::Player),
            (false, false) => None,
        };
        if let Some(winner) = winner {
            self.winner = Some(winner);
            self.phase = Phase::GameOver;
            self.log.push(format!("Game over! {} won the battle!", winner.label()));
            info!("battle over, winner: {}", winner.label());
        }
    }

    /// The opponent replaces a fainted active combatant with its first live
    /// teammate, in roster order, without consuming a turn
    fn auto_switch_opponent(&mut self) {
        if self.phase == Phase::GameOver || !self.opponent.active().is_fainted() {
            return;
        }
        if let Some(index) = self.opponent.first_live_index() {
            self.opponent.set_active(index);
            self.log
                .push(format!("Opponent sent out {}!", self.opponent.active().nickname));
        }
    }

    fn refresh_phase(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }
        self.phase = if self.player.active().is_fainted() {
            Phase::AwaitingSwitch
        } else {
            Phase::AwaitingAction
        };
    }

    /// The player's team
    pub fn player(&self) -> &Team {
        &self.player
    }

    /// The opponent's team
    pub fn opponent(&self) -> &Team {
        &self.opponent
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The winner, set exactly when the battle is over
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether the battle has reached its terminal phase
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// The append-only battle log, oldest line first
    pub fn log(&self) -> &[String] {
        &self.log
    }
}
