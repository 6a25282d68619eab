//! Seats, setup and a turn driver for the base game.

use std::sync::Arc;

use log::info;

use super::cards::{COPPER, ESTATE, GOLD, PROVINCE, SILVER};
use super::strategy::BigMoney;
use super::table::BaseTable;
use crate::cards::{CardId, CardSelector};
use crate::choice::{PlayOptions, Strategy};
use crate::core::{GameConfig, GameRng, PlayerId, PlayerMap, TurnConfig};
use crate::engine::Player;
use crate::error::EngineError;

/// Outcome of [`BaseGame::run`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameSummary {
    /// Turns played across all seats.
    pub turns: u32,
    /// Whether the game ended on its own rather than at the turn limit.
    pub finished: bool,
    pub scores: PlayerMap<i32>,
    /// Seats sharing the top score.
    pub winners: Vec<PlayerId>,
}

/// A running base game.
pub struct BaseGame {
    pub players: PlayerMap<Player>,
    pub table: BaseTable,
    buy_plans: PlayerMap<Vec<CardId>>,
    turns: u32,
}

/// Builder for creating a `BaseGame`.
pub struct BaseGameBuilder {
    config: GameConfig,
    strategies: Vec<Option<Arc<dyn Strategy>>>,
    identities: Vec<Option<String>>,
    buy_plans: Vec<Option<Vec<CardId>>>,
}

impl Default for BaseGameBuilder {
    fn default() -> Self {
        Self::new(2)
    }
}

impl BaseGameBuilder {
    /// Opening deck: 7 Copper and 3 Estate.
    #[must_use]
    pub fn turn_config() -> TurnConfig {
        TurnConfig::new()
            .with_starting_cards(COPPER, 7)
            .with_starting_cards(ESTATE, 3)
    }

    /// Buy priority used when a seat has no plan of its own.
    pub const DEFAULT_BUY_PLAN: [CardId; 3] = [PROVINCE, GOLD, SILVER];

    pub fn new(player_count: usize) -> Self {
        assert!((1..=6).contains(&player_count), "Player count must be 1-6");
        Self {
            config: GameConfig::new(player_count).with_turn_config(Self::turn_config()),
            strategies: vec![None; player_count],
            identities: vec![None; player_count],
            buy_plans: vec![None; player_count],
        }
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn kingdom_card(mut self, kind: CardId) -> Self {
        self.config = self.config.with_kingdom_card(kind);
        self
    }

    pub fn turn(mut self, turn: TurnConfig) -> Self {
        self.config.turn = turn;
        self
    }

    pub fn strategy(mut self, seat: PlayerId, strategy: Arc<dyn Strategy>) -> Self {
        self.strategies[seat.index()] = Some(strategy);
        self
    }

    pub fn identity(mut self, seat: PlayerId, identity: impl Into<String>) -> Self {
        self.identities[seat.index()] = Some(identity.into());
        self
    }

    /// Kinds `seat` buys, most wanted first.
    pub fn buy_plan(mut self, seat: PlayerId, plan: Vec<CardId>) -> Self {
        self.buy_plans[seat.index()] = Some(plan);
        self
    }

    /// Lay out the table and prepare every seat, in seat order.
    pub fn build(self) -> BaseGame {
        let mut table = BaseTable::new(&self.config);
        let mut rng = GameRng::new(self.config.seed);
        let turn = self.config.turn;

        let mut strategies = self.strategies;
        let mut identities = self.identities;
        let players = PlayerMap::new(self.config.player_count, |seat| {
            let strategy = strategies[seat.index()]
                .take()
                .unwrap_or_else(|| Arc::new(BigMoney));
            let mut player = Player::new(seat, strategy, rng.fork());
            if let Some(identity) = identities[seat.index()].take() {
                player = player.with_identity(identity);
            }
            player.prepare(&mut table, &turn);
            player
        });

        let mut plans = self.buy_plans;
        let buy_plans = PlayerMap::new(self.config.player_count, |seat| {
            plans[seat.index()]
                .take()
                .unwrap_or_else(|| BaseGameBuilder::DEFAULT_BUY_PLAN.to_vec())
        });

        BaseGame {
            players,
            table,
            buy_plans,
            turns: 0,
        }
    }
}

impl BaseGame {
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.table.current_player()
    }

    #[must_use]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Play one full turn for the current seat.
    ///
    /// Actions are played while any remain, preferring cards that give
    /// more actions. Then all treasures, then purchases by the seat's plan
    /// until nothing on it is affordable.
    pub fn play_turn(&mut self) -> Result<(), EngineError> {
        let seat = self.table.current_player();
        let player = &mut self.players[seat];
        let table = &mut self.table;

        player.start_turn(table)?;

        while player.ledger().actions() > 0 {
            let next = player
                .hand()
                .iter()
                .filter(|c| c.is_action())
                .max_by_key(|c| (c.actions(), c.cards()))
                .map(|c| CardSelector::Instance(c.entity()));
            let Some(selector) = next else { break };
            player.play(table, selector, PlayOptions::default())?;
        }

        player.play_all_treasures(table)?;

        let plan = &self.buy_plans[seat];
        while let Some(&kind) = plan.iter().find(|&&kind| player.can_buy(table, kind)) {
            player.buy(table, kind)?;
        }

        player.end_turn(table)?;
        self.turns += 1;
        Ok(())
    }

    /// Play turns until the game ends or `max_turns` have been played.
    pub fn run(&mut self, max_turns: u32) -> Result<GameSummary, EngineError> {
        while !self.table.is_game_over() && self.turns < max_turns {
            self.play_turn()?;
        }
        let summary = self.summary();
        info!(
            "game {} after {} turns, winners {:?}",
            if summary.finished { "finished" } else { "stopped" },
            summary.turns,
            summary.winners
        );
        Ok(summary)
    }

    #[must_use]
    pub fn scores(&self) -> PlayerMap<i32> {
        PlayerMap::new(self.players.player_count(), |seat| {
            self.players[seat].total_victory_points()
        })
    }

    #[must_use]
    pub fn summary(&self) -> GameSummary {
        let scores = self.scores();
        let best = scores.iter().map(|(_, &s)| s).max().unwrap_or(0);
        let winners = scores
            .iter()
            .filter(|&(_, &s)| s == best)
            .map(|(seat, _)| seat)
            .collect();
        GameSummary {
            turns: self.turns,
            finished: self.table.is_game_over(),
            scores,
            winners,
        }
    }
}
