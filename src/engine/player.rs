//! Player state and the turn lifecycle.

use std::sync::Arc;

use log::debug;

use crate::cards::{Card, CardRef, CardSelector};
use crate::choice::{Continuation, PlayOptions, Question, Strategy};
use crate::core::{GameRng, PlayerId, TurnConfig, DEFAULT_HAND_SIZE};
use crate::error::EngineError;
use crate::table::Table;
use crate::turn::{Activity, Phase, PhaseMachine, ResourceLedger};
use crate::zones::{Zone, ZoneManager, ZonePosition};

/// A question parked until its answer arrives.
pub(super) struct PendingQuestion {
    pub(super) question: Question,
    pub(super) resume: Continuation,
}

/// One seat's cards, resources and turn state.
pub struct Player {
    id: PlayerId,
    identity: Option<String>,
    pub(super) strategy: Arc<dyn Strategy>,
    turn: u32,
    pub(super) phase: PhaseMachine,
    pub(super) ledger: ResourceLedger,
    pub(super) zones: ZoneManager,
    hand_size: usize,
    /// Card whose effect is running, if any.
    pub(super) resolving: Option<CardRef>,
    /// Inline answer and responder for the current play.
    pub(super) inline: PlayOptions,
    pub(super) pending: Option<PendingQuestion>,
}

impl Player {
    /// A player with empty zones, in `Setup`, with zeroed resources.
    pub fn new(id: PlayerId, strategy: Arc<dyn Strategy>, rng: GameRng) -> Self {
        Self {
            id,
            identity: None,
            strategy,
            turn: 0,
            phase: PhaseMachine::new(),
            ledger: ResourceLedger::new(),
            zones: ZoneManager::new(rng),
            hand_size: DEFAULT_HAND_SIZE,
            resolving: None,
            inline: PlayOptions::default(),
            pending: None,
        }
    }

    #[must_use]
    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    /// Draw the starting cards from the supply, shuffle them into the deck
    /// and draw an opening hand.
    ///
    /// Deck and hand start over empty; cards already in them are dropped.
    /// Starting cards missing from the supply are skipped.
    pub fn prepare(&mut self, table: &mut dyn Table, config: &TurnConfig) {
        self.hand_size = config.hand_size;
        let dropped = self.zones.clear(Zone::Deck).len() + self.zones.clear(Zone::Hand).len();
        if dropped > 0 {
            debug!("{} drops {} cards before preparing", self, dropped);
        }
        for &(kind, count) in &config.starting_cards {
            for _ in 0..count {
                match table.draw_one_of(kind, self.id) {
                    Some(mut card) => {
                        card.owner = Some(self.id);
                        self.zones.add(card, Zone::Deck, None);
                    }
                    None => break,
                }
            }
        }
        self.zones.shuffle_deck();
        self.zones.draw(self.hand_size);
        debug!(
            "{} prepared {} cards, {} in hand",
            self,
            self.zones.total_cards(),
            self.zones.len(Zone::Hand)
        );
    }

    // === Turn Lifecycle ===

    /// Begin a turn: `Setup` -> `Action`, resources reset to 1/0/1.
    pub fn start_turn(&mut self, table: &mut dyn Table) -> Result<(), EngineError> {
        self.check_turn(table)?;
        self.phase.start_turn()?;
        self.ledger.start_turn();
        self.turn += 1;
        table.set_phase(Phase::Action);
        debug!("{} starts turn {}", self, self.turn);
        Ok(())
    }

    /// Clean up, draw the next hand and pass the turn on.
    pub fn end_turn(&mut self, table: &mut dyn Table) -> Result<(), EngineError> {
        self.check_turn(table)?;
        self.phase.begin_cleanup()?;
        table.set_phase(Phase::Cleanup);

        let discarded = self.zones.cleanup();
        let drawn = self.zones.draw(self.hand_size).len();
        debug!("{} ends turn {}: discarded {}, drew {}", self, self.turn, discarded, drawn);

        self.phase.finish_cleanup()?;
        table.set_phase(Phase::Setup);

        table.check_for_game_over();
        if table.in_progress() {
            table.move_to_next_player();
        }
        Ok(())
    }

    pub(super) fn check_turn(&self, table: &dyn Table) -> Result<(), EngineError> {
        if !table.is_current_player(self.id) {
            return Err(EngineError::NotPlayersTurn(self.id));
        }
        Ok(())
    }

    // === Effect Helpers ===

    /// Draw up to `count` cards, reshuffling as needed.
    pub fn draw(&mut self, count: usize) -> Vec<CardRef> {
        self.zones.draw(count)
    }

    pub fn add_actions(&mut self, actions: u32) {
        self.ledger.add_actions(actions);
    }

    pub fn add_coins(&mut self, coins: u32) {
        self.ledger.add_coins(coins);
    }

    pub fn add_buys(&mut self, buys: u32) {
        self.ledger.add_buys(buys);
    }

    pub fn add_vp_tokens(&mut self, vp: u32) {
        self.ledger.add_vp_tokens(vp);
    }

    pub fn add_pirate_ship_token(&mut self) {
        self.ledger.add_pirate_ship_token();
    }

    /// Move a card from hand to the discard pile.
    pub fn discard_from_hand(&mut self, selector: CardSelector) -> Result<CardRef, EngineError> {
        self.zones
            .move_card(selector, Zone::Hand, Zone::Discard, None)
            .ok_or(EngineError::CardNotInHand(selector))
    }

    /// Move a card from hand onto the deck at `position`.
    pub fn put_back_from_hand(
        &mut self,
        selector: CardSelector,
        position: ZonePosition,
    ) -> Result<CardRef, EngineError> {
        self.zones
            .move_card(selector, Zone::Hand, Zone::Deck, Some(position))
            .ok_or(EngineError::CardNotInHand(selector))
    }

    // === Queries ===

    #[must_use]
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Seat index, starting at 0.
    #[must_use]
    pub fn position(&self) -> usize {
        self.id.index()
    }

    #[must_use]
    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    /// The identity if set, else "Player N" with N the 1-based seat.
    #[must_use]
    pub fn name(&self) -> String {
        match &self.identity {
            Some(identity) => identity.clone(),
            None => format!("Player {}", self.position() + 1),
        }
    }

    #[must_use]
    pub fn strategy(&self) -> &Arc<dyn Strategy> {
        &self.strategy
    }

    /// Turns started so far.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase.phase()
    }

    #[must_use]
    pub fn activity(&self) -> Activity {
        self.phase.activity()
    }

    #[must_use]
    pub fn hand_size(&self) -> usize {
        self.hand_size
    }

    #[must_use]
    pub fn ledger(&self) -> &ResourceLedger {
        &self.ledger
    }

    #[must_use]
    pub fn zones(&self) -> &ZoneManager {
        &self.zones
    }

    /// The card whose effect is currently resolving.
    #[must_use]
    pub fn resolving(&self) -> Option<CardRef> {
        self.resolving
    }

    #[must_use]
    pub fn pending_question(&self) -> Option<&Question> {
        self.pending.as_ref().map(|p| &p.question)
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        self.zones.cards(Zone::Deck)
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        self.zones.cards(Zone::Discard)
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        self.zones.cards(Zone::Hand)
    }

    #[must_use]
    pub fn actions_in_play(&self) -> &[Card] {
        self.zones.cards(Zone::ActionsInPlay)
    }

    #[must_use]
    pub fn treasures_in_play(&self) -> &[Card] {
        self.zones.cards(Zone::TreasuresInPlay)
    }

    #[must_use]
    pub fn durations_on_first_turn(&self) -> &[Card] {
        self.zones.cards(Zone::DurationFirstTurn)
    }

    #[must_use]
    pub fn durations_on_second_turn(&self) -> &[Card] {
        self.zones.cards(Zone::DurationSecondTurn)
    }

    /// Actions, treasures and both duration zones, in that order.
    pub fn cards_in_play(&self) -> impl Iterator<Item = &Card> {
        self.zones.in_play()
    }

    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.zones.all_cards()
    }

    /// Victory points on all owned cards plus VP tokens.
    #[must_use]
    pub fn total_victory_points(&self) -> i32 {
        let cards: i32 = self.all_cards().map(Card::vp).sum();
        let tokens = i32::try_from(self.ledger.vp_tokens()).unwrap_or(i32::MAX);
        cards.saturating_add(tokens)
    }

    /// Coins granted by every card owned, actions included.
    #[must_use]
    pub fn total_treasure(&self) -> u32 {
        self.all_cards().map(Card::coins).sum()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name())
    }
}

impl std::fmt::Debug for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("identity", &self.identity)
            .field("turn", &self.turn)
            .field("phase", &self.phase)
            .field("ledger", &self.ledger)
            .field("zones", &self.zones)
            .field("resolving", &self.resolving)
            .field("pending", &self.pending_question())
            .finish_non_exhaustive()
    }
}
