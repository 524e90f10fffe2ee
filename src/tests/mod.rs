mod turn;

use crate::battle::{Battle, BattleOptions};
use crate::catalog::InMemoryCatalog;
use crate::pokemon::Pokemon;
use crate::pokemon::moves::Move;
use crate::pokemon::ptype::TypeChart;
use crate::pokemon::stats::PokemonStats;
use crate::team::{Combatant, Team};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mv(id: u32, name: &str, power: Option<u32>, move_type: &str) -> Move {
    Move {
        id,
        name: name.to_string(),
        power,
        move_type: move_type.to_string(),
    }
}

fn stats(hp: u32, attack: u32, defense: u32, speed: u32) -> PokemonStats {
    PokemonStats {
        hp,
        attack,
        defense,
        special_attack: 50,
        special_defense: 50,
        speed,
    }
}

fn template(id: u32, name: &str, types: &[&str], stats: PokemonStats, moves: &[&str]) -> Pokemon {
    Pokemon {
        id,
        name: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        stats,
        moves: moves.iter().map(|m| m.to_string()).collect(),
    }
}

fn combatant(
    name: &str,
    types: &[&str],
    hp: u32,
    attack: u32,
    defense: u32,
    speed: u32,
    moves: Vec<Move>,
) -> Combatant {
    Combatant {
        name: name.to_string(),
        nickname: name.to_string(),
        types: types.iter().map(|t| t.to_string()).collect(),
        stats: stats(hp, attack, defense, speed),
        current_hp: hp,
        moves,
    }
}

fn battle_1v1(player: Combatant, opponent: Combatant, seed: u64) -> Battle {
    Battle::new(
        Team::new(vec![player]),
        Team::new(vec![opponent]),
        TypeChart::standard(),
        BattleOptions {
            seed: Some(seed),
            ..Default::default()
        },
    )
}

/// A catalog with seven battle-ready creatures and one that only knows a
/// status move
fn sample_catalog() -> InMemoryCatalog {
    let mut catalog = InMemoryCatalog::with_standard_chart();

    catalog.add_move(mv(1, "tackle", Some(40), "normal"));
    catalog.add_move(mv(2, "ember", Some(40), "fire"));
    catalog.add_move(mv(3, "water-gun", Some(40), "water"));
    catalog.add_move(mv(4, "vine-whip", Some(45), "grass"));
    catalog.add_move(mv(5, "thunderbolt", Some(90), "electric"));
    catalog.add_move(mv(6, "flamethrower", Some(90), "fire"));
    catalog.add_move(mv(7, "earthquake", Some(100), "ground"));
    catalog.add_move(mv(8, "growl", None, "normal"));
    catalog.add_move(mv(9, "quick-attack", Some(40), "normal"));
    catalog.add_move(mv(10, "rock-throw", Some(50), "rock"));
    catalog.add_move(mv(11, "gust", Some(40), "flying"));
    catalog.add_move(mv(12, "bite", Some(60), "dark"));
    catalog.add_move(mv(13, "scratch", Some(40), "normal"));
    catalog.add_move(mv(14, "tail-whip", None, "normal"));

    catalog.add_pokemon(template(
        25,
        "Pikachu",
        &["electric"],
        stats(35, 55, 40, 90),
        &["thunderbolt", "quick-attack", "tackle", "growl"],
    ));
    catalog.add_pokemon(template(
        1,
        "Bulbasaur",
        &["grass", "poison"],
        stats(45, 49, 49, 45),
        &["vine-whip", "tackle", "growl"],
    ));
    catalog.add_pokemon(template(
        4,
        "Charmander",
        &["fire"],
        stats(39, 52, 43, 65),
        &["ember", "flamethrower", "scratch", "bite", "tackle", "quick-attack"],
    ));
    catalog.add_pokemon(template(
        7,
        "Squirtle",
        &["water"],
        stats(44, 48, 65, 43),
        &["water-gun", "tackle", "bite"],
    ));
    catalog.add_pokemon(template(
        95,
        "Onix",
        &["rock", "ground"],
        stats(35, 45, 160, 70),
        &["rock-throw", "earthquake", "tackle"],
    ));
    catalog.add_pokemon(template(
        16,
        "Pidgey",
        &["normal", "flying"],
        stats(40, 45, 40, 56),
        &["gust", "quick-attack", "tackle"],
    ));
    catalog.add_pokemon(template(
        92,
        "Gastly",
        &["ghost", "poison"],
        stats(30, 35, 30, 80),
        &["bite", "tackle"],
    ));
    catalog.add_pokemon(template(
        129,
        "Magikarp",
        &["water"],
        stats(20, 10, 55, 80),
        &["tail-whip"],
    ));

    catalog
}
