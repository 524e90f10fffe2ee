use log::debug;
use rand::seq::SliceRandom;

use super::{Battle, Side, damage};
use crate::pokemon::moves::Move;

impl Battle {
    /// Runs one full turn: both attacks in speed order, ending early if
    /// either attack faints its target
    pub(super) fn resolve_turn(&mut self, player_move: Move) {
        // The opponent commits to a move before the turn plays out
        let opponent_move = self
            .opponent
            .active()
            .moves
            .choose(&mut self.rng)
            .cloned();

        // Strictly higher speed goes first; the player wins ties
        let player_first =
            self.player.active().stats.speed >= self.opponent.active().stats.speed;

        let order = if player_first {
            [(Side::Player, Some(player_move)), (Side::Opponent, opponent_move)]
        } else {
            [(Side::Opponent, opponent_move), (Side::Player, Some(player_move))]
        };

        for (side, mv) in order {
            match mv {
                Some(mv) => {
                    if self.execute_attack(side, &mv) {
                        return;
                    }
                }
                None => {
                    let team = match side {
                        Side::Player => &self.player,
                        Side::Opponent => &self.opponent,
                    };
                    self.log.push(format!(
                        "{} {} has no usable moves!",
                        side.possessive(),
                        team.active().nickname
                    ));
                }
            }
        }
    }

    /// Executes a single attack and applies its damage. Returns true when
    /// the defender fainted, which ends the turn
    fn execute_attack(&mut self, side: Side, mv: &Move) -> bool {
        let roll = damage::damage_roll(&mut self.rng);

        let (attacker, defender) = match side {
            Side::Player => (self.player.active(), self.opponent.active()),
            Side::Opponent => (self.opponent.active(), self.player.active()),
        };

        let (amount, effectiveness) =
            damage::calculate_damage(attacker, defender, mv, &self.chart, roll);

        let attacker_name = attacker.nickname.clone();
        let defender_name = defender.nickname.clone();

        let defender_team = match side {
            Side::Player => &mut self.opponent,
            Side::Opponent => &mut self.player,
        };
        let dealt = defender_team.active_mut().apply_damage(amount);
        let fainted = defender_team.active().is_fainted();

        debug!(
            "{attacker_name} used {} for {dealt} damage (effectiveness {effectiveness})",
            mv.name
        );

        self.log.push(format!(
            "{} {} used {}!",
            side.possessive(),
            attacker_name,
            mv.display_name()
        ));

        if effectiveness > 1.0 {
            self.log.push("It's super effective!".to_string());
        } else if effectiveness > 0.0 && effectiveness < 1.0 {
            self.log.push("It's not very effective...".to_string());
        } else if effectiveness == 0.0 {
            self.log.push(format!(
                "It doesn't affect {} {}...",
                side.opponent().possessive_object(),
                defender_name
            ));
        }

        if fainted {
            self.log.push(format!(
                "{} {} fainted!",
                side.opponent().possessive(),
                defender_name
            ));
        }

        fainted
    }
}
