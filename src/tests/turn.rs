use super::{battle_1v1, combatant, init_logging, mv};
use crate::battle::{Battle, BattleOptions, Phase};
use crate::pokemon::ptype::TypeChart;
use crate::team::Team;

#[test]
fn faster_combatant_attacks_first() {
    init_logging();
    let player = combatant("Fast", &["normal"], 500, 50, 50, 100, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant("Slow", &["normal"], 500, 50, 50, 80, vec![mv(13, "scratch", Some(40), "normal")]);
    let mut battle = battle_1v1(player, opponent, 1);

    battle.choose_move("tackle").unwrap();

    let log = battle.log();
    assert_eq!(log[1], "Your Fast used Tackle!");
    assert_eq!(log[2], "Opponent's Slow used Scratch!");
}

#[test]
fn slower_player_attacks_second() {
    let player = combatant("Slow", &["normal"], 500, 50, 50, 20, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant("Fast", &["normal"], 500, 50, 50, 90, vec![mv(13, "scratch", Some(40), "normal")]);
    let mut battle = battle_1v1(player, opponent, 1);

    battle.choose_move("tackle").unwrap();

    let log = battle.log();
    assert_eq!(log[1], "Opponent's Fast used Scratch!");
    assert_eq!(log[2], "Your Slow used Tackle!");
}

#[test]
fn speed_ties_go_to_the_player() {
    let player = combatant("Mine", &["normal"], 500, 50, 50, 70, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant("Theirs", &["normal"], 500, 50, 50, 70, vec![mv(13, "scratch", Some(40), "normal")]);
    let mut battle = battle_1v1(player, opponent, 1);

    battle.choose_move("tackle").unwrap();

    assert_eq!(battle.log()[1], "Your Mine used Tackle!");
}

#[test]
fn a_faint_ends_the_turn_before_the_second_attack() {
    let player = combatant("Striker", &["normal"], 200, 150, 50, 100, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant("Frail", &["normal"], 1, 150, 50, 10, vec![mv(13, "scratch", Some(40), "normal")]);
    let mut battle = battle_1v1(player, opponent, 3);

    battle.choose_move("tackle").unwrap();

    // The defender went down on the first attack, so the counterattack
    // never happened and the attacker is untouched
    assert_eq!(battle.opponent().active().current_hp, 0);
    assert_eq!(battle.player().active().current_hp, 200);
    assert!(battle.log().iter().any(|l| l == "Opponent's Frail fainted!"));
    assert!(!battle.log().iter().any(|l| l.contains("used Scratch")));
}

#[test]
fn effectiveness_qualifiers_are_logged() {
    let player = combatant(
        "Charmander",
        &["fire"],
        500,
        52,
        43,
        100,
        vec![mv(2, "ember", Some(40), "fire")],
    );
    let opponent = combatant(
        "Bulbasaur",
        &["grass", "poison"],
        500,
        49,
        49,
        45,
        vec![mv(4, "vine-whip", Some(45), "grass")],
    );
    let mut battle = battle_1v1(player, opponent, 5);

    battle.choose_move("ember").unwrap();

    let log = battle.log();
    assert_eq!(log[1], "Your Charmander used Ember!");
    assert_eq!(log[2], "It's super effective!");
    // Grass back into fire resists
    assert_eq!(log[3], "Opponent's Bulbasaur used Vine Whip!");
    assert_eq!(log[4], "It's not very effective...");
}

#[test]
fn immune_defenders_are_called_out_and_take_nothing() {
    let player = combatant("Rattata", &["normal"], 500, 56, 35, 100, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant("Gastly", &["ghost", "poison"], 30, 35, 30, 10, vec![mv(12, "bite", Some(60), "dark")]);
    let mut battle = battle_1v1(player, opponent, 5);

    battle.choose_move("tackle").unwrap();

    assert!(battle
        .log()
        .iter()
        .any(|l| l == "It doesn't affect the opponent's Gastly..."));
    assert_eq!(battle.opponent().active().current_hp, 30);
}

#[test]
fn an_opponent_without_moves_skips_its_attack() {
    let player = combatant("Hitter", &["normal"], 500, 50, 50, 100, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant("Helpless", &["normal"], 500, 50, 50, 120, vec![]);
    let mut battle = battle_1v1(player, opponent, 2);

    battle.choose_move("tackle").unwrap();

    // The no-moves side goes first on speed but only logs the skip
    assert!(battle
        .log()
        .iter()
        .any(|l| l == "Opponent's Helpless has no usable moves!"));
    assert_eq!(battle.player().active().current_hp, 500);
    assert!(battle.opponent().active().current_hp < 500);
    assert_eq!(battle.phase(), Phase::AwaitingAction);
}

#[test]
fn the_ai_picks_from_its_own_loadout() {
    let player = combatant("Wall", &["steel"], 5000, 10, 200, 10, vec![mv(1, "tackle", Some(40), "normal")]);
    let opponent = combatant(
        "Varied",
        &["normal"],
        5000,
        50,
        50,
        90,
        vec![
            mv(13, "scratch", Some(40), "normal"),
            mv(9, "quick-attack", Some(40), "normal"),
            mv(12, "bite", Some(60), "dark"),
        ],
    );
    let mut battle = Battle::new(
        Team::new(vec![player]),
        Team::new(vec![opponent]),
        TypeChart::standard(),
        BattleOptions {
            seed: Some(11),
            ..Default::default()
        },
    );

    for _ in 0..12 {
        battle.choose_move("tackle").unwrap();
    }

    let used: Vec<&String> = battle
        .log()
        .iter()
        .filter(|l| l.starts_with("Opponent's Varied used"))
        .collect();
    assert_eq!(used.len(), 12);
    for line in used {
        assert!(
            line.ends_with("Scratch!") || line.ends_with("Quick Attack!") || line.ends_with("Bite!"),
            "unexpected move line: {line}"
        );
    }
}
