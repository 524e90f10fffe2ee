use log::{info, warn};
use rand::Rng;
use rand::seq::index;

use super::{Combatant, MAX_LOADOUT, MAX_TEAM_SIZE, Team, TeamMemberDef};
use crate::catalog::DataProvider;
use crate::error::ConfigError;
use crate::pokemon::Pokemon;
use crate::pokemon::moves::{Move, MoveRef};

/// A built roster plus any warnings produced while building it. Warnings are
/// returned to the caller instead of being swallowed, so a UI can surface
/// them
#[derive(Clone, Debug)]
pub struct TeamBuild {
    /// The finished team
    pub team: Team,

    /// Human-readable notes about entries that were dropped or adjusted
    pub warnings: Vec<String>,
}

/// Moves of the template that resolve to damage-dealing catalog moves,
/// deduplicated
fn usable_moves<P: DataProvider>(provider: &P, template: &Pokemon) -> Vec<Move> {
    let mut out: Vec<Move> = Vec::new();
    for raw in &template.moves {
        if let Some(mv) = provider.resolve_move(&MoveRef::parse(raw)) {
            if mv.is_usable() && !out.iter().any(|m| m.id == mv.id) {
                out.push(mv.clone());
            }
        }
    }
    out
}

/// Trims an oversized loadout down to four moves. Names are sorted before
/// sampling so equal inputs sample from the same ordering
fn trim_loadout<R: Rng>(mut moves: Vec<Move>, rng: &mut R) -> Vec<Move> {
    if moves.len() <= MAX_LOADOUT {
        return moves;
    }
    moves.sort_by(|a, b| a.name.cmp(&b.name));
    index::sample(rng, moves.len(), MAX_LOADOUT)
        .iter()
        .map(|i| moves[i].clone())
        .collect()
}

/// Builds a team of six distinct creatures sampled uniformly from the subset
/// of the catalog that has at least one usable move. Creatures knowing more
/// than four usable moves get a random four of them
pub fn build_random_team<P, R>(provider: &P, rng: &mut R) -> Result<Team, ConfigError>
where
    P: DataProvider,
    R: Rng,
{
    if provider.pokemon_catalog().is_empty() || provider.move_catalog().is_empty() {
        return Err(ConfigError::EmptyCatalog);
    }

    let candidates: Vec<(&Pokemon, Vec<Move>)> = provider
        .pokemon_catalog()
        .values()
        .map(|p| (p, usable_moves(provider, p)))
        .filter(|(_, moves)| !moves.is_empty())
        .collect();

    if candidates.len() < MAX_TEAM_SIZE {
        return Err(ConfigError::NotEnoughPokemon {
            available: candidates.len(),
            required: MAX_TEAM_SIZE,
        });
    }

    let mut members = Vec::with_capacity(MAX_TEAM_SIZE);
    for pick in index::sample(rng, candidates.len(), MAX_TEAM_SIZE).iter() {
        let (template, moves) = &candidates[pick];
        let loadout = trim_loadout(moves.clone(), rng);
        members.push(Combatant::from_template(template, None, loadout));
    }

    info!("built a random team of {} creatures", members.len());
    Ok(Team::new(members))
}

/// Builds a team from a saved definition. Entries that do not resolve
/// against the catalog are dropped with a warning; a definition that yields
/// no valid combatants at all falls back to a random team
pub fn build_team_from_definition<P, R>(
    definition: &[TeamMemberDef],
    provider: &P,
    rng: &mut R,
) -> Result<TeamBuild, ConfigError>
where
    P: DataProvider,
    R: Rng,
{
    let mut members = Vec::new();
    let mut warnings = Vec::new();

    for entry in definition {
        if members.len() == MAX_TEAM_SIZE {
            warnings.push(format!("team is full, '{}' was ignored", entry.name));
            continue;
        }

        let Some(template) = provider.get_pokemon(&entry.name) else {
            warnings.push(format!("unknown creature '{}' was dropped", entry.name));
            continue;
        };

        let mut loadout: Vec<Move> = Vec::new();
        for raw in &entry.moves {
            if raw.trim().is_empty() {
                continue;
            }
            let Some(mv) = provider.resolve_move(&MoveRef::parse(raw)) else {
                warnings.push(format!("{}: unknown move '{}' was dropped", template.name, raw));
                continue;
            };
            if !mv.is_usable() {
                warnings.push(format!("{}: '{}' deals no damage and was dropped", template.name, mv.name));
                continue;
            }
            if !template.moves.iter().any(|m| m.eq_ignore_ascii_case(&mv.name)) {
                warnings.push(format!("{}: cannot learn '{}', dropped", template.name, mv.name));
                continue;
            }
            if loadout.iter().any(|m| m.id == mv.id) {
                continue; // duplicate
            }
            if loadout.len() == MAX_LOADOUT {
                warnings.push(format!("{}: loadout is full, '{}' was dropped", template.name, mv.name));
                continue;
            }
            loadout.push(mv.clone());
        }

        if loadout.is_empty() {
            warnings.push(format!("{} has no usable moves and was dropped", template.name));
            continue;
        }

        let nickname = entry.nickname.clone().filter(|n| !n.trim().is_empty());
        members.push(Combatant::from_template(template, nickname, loadout));
    }

    if members.is_empty() {
        warn!("team definition produced no valid combatants, falling back to a random team");
        let team = build_random_team(provider, rng)?;
        warnings.push("the saved team had no valid members; a random team was generated".to_string());
        return Ok(TeamBuild { team, warnings });
    }

    Ok(TeamBuild {
        team: Team::new(members),
        warnings,
    })
}
