//! Playing, buying, gaining and trashing cards.
//!
//! Every operation validates all of its preconditions before it moves a
//! card or touches the ledger. Effect hooks run afterwards; if one fails
//! the card still lands where it was headed and the error is returned.

use std::sync::Arc;

use log::{debug, warn};

use super::Player;
use crate::cards::{Card, CardId, CardRef, CardSelector};
use crate::choice::PlayOptions;
use crate::error::EngineError;
use crate::table::Table;
use crate::turn::Phase;
use crate::zones::Zone;

impl Player {
    /// Play a card from hand.
    ///
    /// Action cards need the `Action` phase and a spare action; a card that
    /// is both an action and a treasure is always played as an action.
    /// Treasures may be played in `Action` (which moves the turn to
    /// `Treasure`) or `Treasure`.
    ///
    /// `options` supplies inline answers for questions the card asks and is
    /// discarded when the play returns.
    pub fn play(
        &mut self,
        table: &mut dyn Table,
        selector: impl Into<CardSelector>,
        options: PlayOptions,
    ) -> Result<CardRef, EngineError> {
        let selector = selector.into();
        self.check_turn(table)?;

        let card = self
            .zones
            .find_in_hand(selector)
            .ok_or(EngineError::CardNotInHand(selector))?;
        if card.owner != Some(self.id()) {
            return Err(EngineError::CardNotOwned {
                selector,
                player: self.id(),
            });
        }
        let card_ref = card.card_ref();
        let as_action = card.is_action();
        if !as_action && !card.is_treasure() {
            return Err(EngineError::NotPlayable(card_ref.kind));
        }

        let phase = self.phase.phase();
        if as_action {
            if phase != Phase::Action {
                return Err(EngineError::illegal_phase(phase, "play an action"));
            }
            self.ledger.require_action(card_ref.kind)?;
        } else if !matches!(phase, Phase::Action | Phase::Treasure) {
            return Err(EngineError::illegal_phase(phase, "play a treasure"));
        }

        // Validated; from here on the play happens.
        if !as_action && self.phase.enter_treasure()? {
            table.set_phase(Phase::Treasure);
        }
        let card = self
            .zones
            .take(Zone::Hand, CardSelector::Instance(card_ref.entity))
            .ok_or(EngineError::CardNotInHand(selector))?;

        // A play from inside another card's effect parks the outer card's
        // slots and restores them afterwards.
        let outer_resolving = self.resolving.replace(card_ref);
        let outer_inline = std::mem::replace(&mut self.inline, options);
        debug!("{} plays {}", self, card);

        let (result, zone) = if as_action {
            (self.resolve_action(table, &card), Zone::ActionsInPlay)
        } else {
            (self.resolve_treasure(table, &card), Zone::TreasuresInPlay)
        };
        self.zones.add(card, zone, None);

        self.resolving = outer_resolving;
        self.inline = outer_inline;

        if let Err(err) = &result {
            warn!("{} failed while resolving {}: {}", self, card_ref, err);
        }
        result.map(|()| card_ref)
    }

    fn resolve_action(&mut self, table: &mut dyn Table, card: &Card) -> Result<(), EngineError> {
        self.ledger.spend_action(card.kind())?;
        self.zones.draw(card.cards() as usize);
        self.ledger.add_actions(card.actions());
        self.ledger.add_coins(card.coins());
        self.ledger.add_buys(card.buys());
        let effect = Arc::clone(&card.definition().effect);
        effect.play_action(card.card_ref(), self, table)
    }

    fn resolve_treasure(&mut self, table: &mut dyn Table, card: &Card) -> Result<(), EngineError> {
        self.ledger.add_coins(card.coins());
        self.ledger.add_buys(card.buys());
        let effect = Arc::clone(&card.definition().effect);
        effect.play_treasure(card.card_ref(), self, table)
    }

    /// Play every pure treasure in hand, in hand order.
    ///
    /// The set is fixed before the first play. Cards an earlier treasure
    /// removed from hand are skipped.
    pub fn play_all_treasures(&mut self, table: &mut dyn Table) -> Result<Vec<CardRef>, EngineError> {
        self.check_turn(table)?;
        let treasures: Vec<CardSelector> = self
            .hand()
            .iter()
            .filter(|c| c.is_treasure() && !c.is_action())
            .map(|c| CardSelector::Instance(c.entity()))
            .collect();

        let mut played = Vec::with_capacity(treasures.len());
        for selector in treasures {
            if self.zones.find_in_hand(selector).is_none() {
                continue;
            }
            played.push(self.play(table, selector, PlayOptions::default())?);
        }
        Ok(played)
    }

    /// Move a card from hand to the trash. Allowed in any phase.
    pub fn trash(
        &mut self,
        table: &mut dyn Table,
        selector: impl Into<CardSelector>,
    ) -> Result<CardRef, EngineError> {
        let selector = selector.into();
        let mut card = self
            .zones
            .take(Zone::Hand, selector)
            .ok_or(EngineError::CardNotInHand(selector))?;
        let trashed = card.card_ref();
        card.owner = None;
        debug!("{} trashes {}", self, card);
        table.trash(card);
        Ok(trashed)
    }

    /// Gain a card of `kind` from the supply into the discard pile.
    pub fn gain(&mut self, table: &mut dyn Table, kind: CardId) -> Result<Option<CardRef>, EngineError> {
        self.gain_to(table, kind, Zone::Discard)
    }

    /// Gain a card of `kind` from the supply into `destination`.
    ///
    /// An empty pile is not an error: nothing happens and `Ok(None)` is
    /// returned.
    pub fn gain_to(
        &mut self,
        table: &mut dyn Table,
        kind: CardId,
        destination: Zone,
    ) -> Result<Option<CardRef>, EngineError> {
        match self.take_from_supply(table, kind, destination) {
            Some((gained, result)) => result.map(|()| Some(gained)),
            None => Ok(None),
        }
    }

    /// Draw one `kind` from the supply, run its gain hook and place it.
    ///
    /// The card is placed even when the hook fails; the hook's result is
    /// handed back next to the gained card.
    fn take_from_supply(
        &mut self,
        table: &mut dyn Table,
        kind: CardId,
        destination: Zone,
    ) -> Option<(CardRef, Result<(), EngineError>)> {
        let Some(mut card) = table.draw_one_of(kind, self.id()) else {
            debug!("{} cannot gain {}: pile is empty", self, kind);
            return None;
        };
        card.owner = Some(self.id());
        let gained = card.card_ref();
        debug!("{} gains {} into {:?}", self, card, destination);

        let effect = Arc::clone(&card.definition().effect);
        let result = effect.on_gain(gained, self, table);
        self.zones.add(card, destination, None);
        Some((gained, result))
    }

    /// Buy a card of `kind`: gain it into the discard pile, then pay for it
    /// with one buy and its cost in coins.
    ///
    /// Once the card has left the supply the purchase is paid for, even if
    /// its gain or buy hook fails. The first hook error is returned.
    pub fn buy(&mut self, table: &mut dyn Table, kind: CardId) -> Result<CardRef, EngineError> {
        self.check_turn(table)?;
        let cost = self.check_buy(table, kind)?;

        if self.phase.enter_buy()? {
            table.set_phase(Phase::Buy);
        }
        let (bought, gained) = self
            .take_from_supply(table, kind, Zone::Discard)
            .ok_or(EngineError::CardUnavailableInSupply(kind))?;
        debug!("{} buys {} for {}", self, bought, cost);

        // on_gain may already have moved the card out of the discard pile.
        let effect = self
            .all_cards()
            .find(|c| c.entity() == bought.entity)
            .map(|c| Arc::clone(&c.definition().effect));
        let on_buy = match effect {
            Some(effect) => effect.on_buy(bought, self, table),
            None => Ok(()),
        };

        self.ledger.spend_coins(kind, cost)?;
        self.ledger.spend_buy()?;
        let result = gained.and(on_buy);
        if let Err(err) = &result {
            warn!("{} failed while buying {}: {}", self, bought, err);
        }
        result.map(|()| bought)
    }

    /// Validate a purchase without changing anything.
    ///
    /// Checks, in order: the phase allows buying, a buy is left, the supply
    /// has the card, coins cover its cost, and the card's own eligibility
    /// rule. Returns the cost to pay.
    pub fn check_buy(&self, table: &dyn Table, kind: CardId) -> Result<u32, EngineError> {
        let phase = self.phase.phase();
        if !phase.allows_buy() {
            return Err(EngineError::illegal_phase(phase, "buy"));
        }
        self.ledger.require_buy()?;
        let card = table
            .peek(kind)
            .ok_or(EngineError::CardUnavailableInSupply(kind))?;
        let cost = card.cost();
        self.ledger.require_coins(kind, cost)?;
        if !card.definition().effect.can_buy(card, self)? {
            return Err(EngineError::PurchaseNotEligible(kind));
        }
        Ok(cost)
    }

    /// Whether `buy(kind)` would currently succeed.
    #[must_use]
    pub fn can_buy(&self, table: &dyn Table, kind: CardId) -> bool {
        self.check_buy(table, kind).is_ok()
    }
}
