use rand::Rng;

use crate::pokemon::moves::Move;
use crate::pokemon::ptype::TypeChart;
use crate::team::Combatant;

/// Every combatant fights at the same fixed level; the engine has no
/// leveling
const LEVEL: f32 = 50.0;

/// Lower bound of the per-attack random damage factor
pub const MIN_DAMAGE_ROLL: f32 = 0.85;

/// Draws the random damage factor, uniform in [0.85, 1.0], independently per
/// attack. The source is whatever `Rng` the caller injects
pub fn damage_roll<R: Rng>(rng: &mut R) -> f32 {
    rng.gen_range(MIN_DAMAGE_ROLL..=1.0)
}

/// Computes the damage of one attack and the effectiveness multiplier that
/// went into it. Pure given the roll:
///
/// ```text
/// base   = ((2 * 50 / 5) + 2) * power * (attack / defense)
/// amount = floor((base / 50 + 2) * effectiveness * roll)
/// ```
///
/// A move without power deals nothing. A zero attack or defense stat is
/// lifted to one so the ratio stays finite
pub fn calculate_damage(
    attacker: &Combatant,
    defender: &Combatant,
    mv: &Move,
    chart: &TypeChart,
    roll: f32,
) -> (u32, f32) {
    let effectiveness = chart.effectiveness(&mv.move_type, &defender.types);

    let power = mv.power.unwrap_or(0);
    if power == 0 {
        return (0, effectiveness);
    }

    let attack = attacker.stats.attack.max(1) as f32;
    let defense = defender.stats.defense.max(1) as f32;

    let base = ((2.0 * LEVEL / 5.0) + 2.0) * power as f32 * (attack / defense);
    let raw = base / 50.0 + 2.0;
    let amount = (raw * effectiveness * roll).floor().max(0.0) as u32;

    (amount, effectiveness)
}
