//! Shared fixtures for integration tests.
//!
//! `TestTable` is a minimal table over the base card set plus a few
//! test-only kinds, and records every call the engine makes into it.
//! `Scripted` is a strategy with fixed answers that counts how often it
//! was consulted.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use deckturn::cards::{
    Card, CardDefinition, CardEffect, CardId, CardRef, CardRegistry, CardSelector, CardType,
};
use deckturn::choice::{ChoiceOptions, PlayOptions, Question, Strategy};
use deckturn::core::{EntityAllocator, GameRng, PlayerId, TurnConfig};
use deckturn::engine::Player;
use deckturn::error::EngineError;
use deckturn::games::base::cards;
use deckturn::table::{Supply, Table, TrashPile, TurnCoordinator};
use deckturn::turn::Phase;
use deckturn::zones::Zone;

pub use deckturn::games::base::cards::{
    CELLAR, CHAPEL, COPPER, ESTATE, FESTIVAL, GOLD, GRAND_MARKET, LABORATORY, MONEYLENDER, MONUMENT, SILVER,
    SMITHY, VILLAGE, WORKSHOP,
};

// =============================================================================
// Test-only cards
// =============================================================================

/// Action whose effect always fails. +1 coin printed.
pub const FIZZLE: CardId = CardId::new(100);
/// Action asking "Take +2 coins?".
pub const ORACLE: CardId = CardId::new(101);
/// Action asking two questions in sequence, +1 coin per yes.
pub const TWO_QUESTIONS: CardId = CardId::new(102);
/// Action and treasure at once, +1 coin.
pub const CROWN: CardId = CardId::new(103);
/// Cost 3, eligibility check errors.
pub const BROKEN_SEAL: CardId = CardId::new(104);
/// +1 action, then plays an action chosen from hand.
pub const ENCORE: CardId = CardId::new(105);
/// Victory card that cannot be played.
pub const GARDEN: CardId = CardId::new(106);
/// Treasure that grants +1 coin when gained.
pub const LUCKY_COIN: CardId = CardId::new(107);
/// Treasure costing 3 whose gain hook always fails.
pub const CURSED_COIN: CardId = CardId::new(108);

pub struct Fizzle;

impl CardEffect for Fizzle {
    fn play_action(&self, _card: CardRef, _player: &mut Player, _table: &mut dyn Table) -> Result<(), EngineError> {
        Err(EngineError::EffectFailed("fizzle".to_string()))
    }
}

pub struct Oracle;

impl CardEffect for Oracle {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        player.ask(table, "Take +2 coins?", |player, _table, yes| {
            if yes {
                player.add_coins(2);
            }
            Ok(())
        })
    }
}

pub struct TwoQuestions;

impl CardEffect for TwoQuestions {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        player.ask(table, "First?", |player, table, first| {
            if first {
                player.add_coins(1);
            }
            player.ask(table, "Second?", |player, _table, second| {
                if second {
                    player.add_coins(1);
                }
                Ok(())
            })
        })
    }
}

pub struct BrokenSeal;

impl CardEffect for BrokenSeal {
    fn can_buy(&self, _card: &Card, _buyer: &Player) -> Result<bool, EngineError> {
        Err(EngineError::EffectFailed("seal is broken".to_string()))
    }
}

pub struct Encore;

impl CardEffect for Encore {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        player.choose_card(table, "Play an action from hand", ChoiceOptions::from_hand(), |player, table, choice| {
            match choice {
                Some(selector) => player.play(table, selector, PlayOptions::default()).map(|_| ()),
                None => Ok(()),
            }
        })
    }
}

pub struct LuckyCoin;

impl CardEffect for LuckyCoin {
    fn on_gain(&self, _card: CardRef, player: &mut Player, _table: &mut dyn Table) -> Result<(), EngineError> {
        player.add_coins(1);
        Ok(())
    }
}

pub struct CursedCoin;

impl CardEffect for CursedCoin {
    fn on_gain(&self, _card: CardRef, _player: &mut Player, _table: &mut dyn Table) -> Result<(), EngineError> {
        Err(EngineError::EffectFailed("cursed".to_string()))
    }
}

/// Base set plus the test-only kinds.
pub fn registry() -> CardRegistry {
    let mut registry = cards::registry();
    let action = |id, name: &str| CardDefinition::new(id, name).with_type(CardType::Action);
    registry.register(action(FIZZLE, "Fizzle").with_cost(2).with_coins(1).with_effect(Fizzle));
    registry.register(action(ORACLE, "Oracle").with_cost(3).with_effect(Oracle));
    registry.register(action(TWO_QUESTIONS, "Two Questions").with_cost(3).with_effect(TwoQuestions));
    registry.register(action(CROWN, "Crown").with_type(CardType::Treasure).with_cost(5).with_coins(1));
    registry.register(
        CardDefinition::new(BROKEN_SEAL, "Broken Seal")
            .with_type(CardType::Treasure)
            .with_cost(3)
            .with_effect(BrokenSeal),
    );
    registry.register(action(ENCORE, "Encore").with_cost(3).with_actions(1).with_effect(Encore));
    registry.register(CardDefinition::new(GARDEN, "Garden").with_type(CardType::Victory).with_cost(4).with_vp(2));
    registry.register(
        CardDefinition::new(LUCKY_COIN, "Lucky Coin")
            .with_type(CardType::Treasure)
            .with_cost(4)
            .with_coins(1)
            .with_effect(LuckyCoin),
    );
    registry.register(
        CardDefinition::new(CURSED_COIN, "Cursed Coin")
            .with_type(CardType::Treasure)
            .with_cost(3)
            .with_coins(1)
            .with_effect(CursedCoin),
    );
    registry
}

// =============================================================================
// TestTable
// =============================================================================

/// Table with 20 of every registered kind.
pub struct TestTable {
    pub piles: HashMap<CardId, Vec<Card>>,
    pub trash: Vec<Card>,
    pub current: PlayerId,
    pub player_count: usize,
    pub phase: Phase,
    /// Every phase reported through `set_phase`, in order.
    pub phase_log: Vec<Phase>,
    pub game_over_checks: usize,
    pub game_over: bool,
}

impl TestTable {
    pub const PILE_SIZE: usize = 20;

    pub fn new(player_count: usize) -> Self {
        let registry = registry();
        let mut ids = EntityAllocator::starting_at(1000);
        let mut piles = HashMap::new();
        let kinds: Vec<CardId> = registry.iter().map(|def| def.id).collect();
        for kind in kinds {
            let pile: Vec<Card> = (0..Self::PILE_SIZE)
                .filter_map(|_| registry.instantiate(kind, ids.alloc(), None))
                .collect();
            piles.insert(kind, pile);
        }
        Self {
            piles,
            trash: Vec::new(),
            current: PlayerId::new(0),
            player_count,
            phase: Phase::Setup,
            phase_log: Vec::new(),
            game_over_checks: 0,
            game_over: false,
        }
    }

    pub fn pile_size(&self, kind: CardId) -> usize {
        self.piles.get(&kind).map_or(0, Vec::len)
    }

    /// Empty a pile completely.
    pub fn exhaust(&mut self, kind: CardId) {
        if let Some(pile) = self.piles.get_mut(&kind) {
            pile.clear();
        }
    }
}

impl TurnCoordinator for TestTable {
    fn is_current_player(&self, player: PlayerId) -> bool {
        self.current == player
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
        self.phase_log.push(phase);
    }

    fn check_for_game_over(&mut self) {
        self.game_over_checks += 1;
    }

    fn in_progress(&self) -> bool {
        !self.game_over
    }

    fn move_to_next_player(&mut self) {
        self.current = self.current.next(self.player_count);
    }
}

impl Supply for TestTable {
    fn draw_one_of(&mut self, kind: CardId, owner: PlayerId) -> Option<Card> {
        let mut card = self.piles.get_mut(&kind)?.pop()?;
        card.owner = Some(owner);
        Some(card)
    }

    fn peek(&self, kind: CardId) -> Option<&Card> {
        self.piles.get(&kind)?.last()
    }
}

impl TrashPile for TestTable {
    fn trash(&mut self, card: Card) {
        self.trash.push(card);
    }
}

// =============================================================================
// Scripted strategy
// =============================================================================

/// Fixed answers; counts consultations.
#[derive(Default)]
pub struct Scripted {
    pub yes: bool,
    pub card: Option<CardSelector>,
    pub cards: Vec<CardSelector>,
    pub calls: AtomicUsize,
}

impl Scripted {
    pub fn answering(yes: bool) -> Self {
        Self { yes, ..Self::default() }
    }

    pub fn with_card(mut self, card: CardSelector) -> Self {
        self.card = Some(card);
        self
    }

    pub fn with_cards(mut self, cards: Vec<CardSelector>) -> Self {
        self.cards = cards;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Strategy for Scripted {
    fn on_ask(&self, _player: &Player, _card: Option<CardRef>, _prompt: &str, _question: &Question) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.yes
    }

    fn on_choose_card(
        &self,
        _player: &Player,
        _card: Option<CardRef>,
        _prompt: &str,
        _question: &Question,
    ) -> Option<CardSelector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.card
    }

    fn on_choose_cards(
        &self,
        _player: &Player,
        _card: Option<CardRef>,
        _prompt: &str,
        _question: &Question,
    ) -> Vec<CardSelector> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.cards.clone()
    }
}

// =============================================================================
// Setup helpers
// =============================================================================

pub const SEED: u64 = 42;

/// A seat-0 player with `strategy` and no cards.
pub fn player_with(strategy: Arc<dyn Strategy>) -> Player {
    Player::new(PlayerId::new(0), strategy, GameRng::new(SEED))
}

/// A seat-0 player holding exactly `hand`, with `deck` underneath (last
/// entry on top), already in the `Action` phase.
pub fn action_player(table: &mut TestTable, strategy: Arc<dyn Strategy>, hand: &[CardId], deck: &[CardId]) -> Player {
    let mut player = player_with(strategy);
    let mut config = TurnConfig::new().with_hand_size(hand.len());
    for &kind in hand {
        config = config.with_starting_cards(kind, 1);
    }
    player.prepare(table, &config);
    for &kind in deck {
        player
            .gain_to(table, kind, Zone::Deck)
            .expect("deck gain")
            .expect("pile has cards");
    }
    player.start_turn(table).expect("start turn");
    player
}

/// Count of cards across all of a player's zones.
pub fn card_count(player: &Player) -> usize {
    player.all_cards().count()
}

pub fn kinds(cards: &[Card]) -> Vec<CardId> {
    cards.iter().map(Card::kind).collect()
}

pub fn count_of(cards: &[Card], kind: CardId) -> usize {
    cards.iter().filter(|c| c.kind() == kind).count()
}
