//! Base game integration tests.
//!
//! These tests run whole games of bots through the engine and verify
//! setup, turn rotation, determinism and that no card is created or lost
//! over a full game, for every supported player count.

use std::sync::Arc;

use deckturn::core::PlayerId;
use deckturn::games::base::cards::{CHAPEL, COPPER, ESTATE, GOLD, PROVINCE, SILVER, SMITHY, VILLAGE};
use deckturn::games::base::{BaseGame, BaseGameBuilder, Passive};
use deckturn::table::TurnCoordinator;
use deckturn::turn::Phase;

fn everything(game: &BaseGame) -> usize {
    let owned: usize = game.players.iter().map(|(_, p)| p.all_cards().count()).sum();
    owned + game.table.supply_count() + game.table.trash_pile().len()
}

/// Test that building a game prepares every seat.
#[test]
fn test_setup() {
    let game = BaseGameBuilder::new(3).seed(7).build();

    assert_eq!(game.current_player(), PlayerId::new(0));
    for (seat, player) in game.players.iter() {
        assert_eq!(player.id(), seat);
        assert_eq!(player.all_cards().count(), 10);
        assert_eq!(player.hand().len(), 5);
        assert_eq!(player.phase(), Phase::Setup);
    }
    // 46 + 7 per seat, minus what the seats took
    assert_eq!(game.table.pile_size(COPPER), 46);
    assert_eq!(game.table.pile_size(ESTATE), 12);
}

/// Test that one turn moves play to the next seat.
#[test]
fn test_play_turn_rotates() {
    let mut game = BaseGameBuilder::new(2).seed(1).build();

    game.play_turn().unwrap();

    assert_eq!(game.current_player(), PlayerId::new(1));
    assert_eq!(game.turns(), 1);
    let first = &game.players[PlayerId::new(0)];
    assert_eq!(first.turn(), 1);
    assert_eq!(first.phase(), Phase::Setup);
    assert_eq!(first.hand().len(), 5);
    assert!(first.all_cards().count() >= 10);
    assert!(game.table.is_setup_phase());
}

/// Test a full two-player Big Money game.
#[test]
fn test_big_money_game_finishes() {
    let mut game = BaseGameBuilder::new(2).seed(42).build();

    let summary = game.run(400).unwrap();

    assert!(summary.finished);
    assert!(game.table.is_game_over());
    assert!(!game.table.in_progress());
    assert!(!summary.winners.is_empty());
    let best = summary.winners[0];
    for (_, &score) in summary.scores.iter() {
        assert!(score <= summary.scores[best]);
    }
    let provinces: usize = game
        .players
        .iter()
        .map(|(_, p)| p.all_cards().filter(|c| c.kind() == PROVINCE).count())
        .sum();
    assert!(provinces > 0);
}

/// Test that the same seed replays the same game.
#[test]
fn test_deterministic_replay() {
    let mut a = BaseGameBuilder::new(3).seed(99).build();
    let mut b = BaseGameBuilder::new(3).seed(99).build();

    let first = a.run(60).unwrap();
    let second = b.run(60).unwrap();

    assert_eq!(first, second);
    for seat in PlayerId::all(3) {
        let hand_a: Vec<_> = a.players[seat].hand().iter().map(|c| c.entity()).collect();
        let hand_b: Vec<_> = b.players[seat].hand().iter().map(|c| c.entity()).collect();
        assert_eq!(hand_a, hand_b);
    }
}

/// Test that no card is created or lost, for every player count.
#[test]
fn test_conservation_all_player_counts() {
    for player_count in 1..=6 {
        let mut game = BaseGameBuilder::new(player_count)
            .seed(player_count as u64)
            .kingdom_card(VILLAGE)
            .kingdom_card(SMITHY)
            .kingdom_card(CHAPEL)
            .buy_plan(PlayerId::new(0), vec![PROVINCE, GOLD, SMITHY, VILLAGE, SILVER])
            .build();
        let total = everything(&game);

        game.run(30).unwrap();

        assert_eq!(everything(&game), total, "{player_count} players");
    }
}

/// Test that Chapel under Big Money thins the deck into the trash.
#[test]
fn test_chapel_thins_deck() {
    let mut game = BaseGameBuilder::new(1)
        .seed(3)
        .kingdom_card(CHAPEL)
        .buy_plan(PlayerId::new(0), vec![GOLD, SILVER, CHAPEL])
        .build();

    game.run(20).unwrap();

    assert!(game.table.trash_pile().iter().all(|c| c.kind() == ESTATE));
    assert!(game.table.trash_pile().iter().all(|c| c.owner.is_none()));
}

/// Test seat identities and a passive strategy.
#[test]
fn test_identities_and_strategies() {
    let mut game = BaseGameBuilder::new(2)
        .identity(PlayerId::new(0), "Ada")
        .strategy(PlayerId::new(1), Arc::new(Passive))
        .buy_plan(PlayerId::new(1), Vec::new())
        .build();

    assert_eq!(game.players[PlayerId::new(0)].name(), "Ada");
    assert_eq!(game.players[PlayerId::new(1)].name(), "Player 2");

    game.run(10).unwrap();
    assert_eq!(game.players[PlayerId::new(1)].all_cards().count(), 10);
}
