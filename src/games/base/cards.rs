//! Card kinds of the base game.

use crate::cards::{Card, CardDefinition, CardEffect, CardId, CardRef, CardRegistry, CardSelector, CardType};
use crate::choice::ChoiceOptions;
use crate::engine::Player;
use crate::error::EngineError;
use crate::table::Table;

pub const COPPER: CardId = CardId::new(1);
pub const SILVER: CardId = CardId::new(2);
pub const GOLD: CardId = CardId::new(3);
pub const ESTATE: CardId = CardId::new(4);
pub const DUCHY: CardId = CardId::new(5);
pub const PROVINCE: CardId = CardId::new(6);
pub const CURSE: CardId = CardId::new(7);

pub const VILLAGE: CardId = CardId::new(10);
pub const SMITHY: CardId = CardId::new(11);
pub const FESTIVAL: CardId = CardId::new(12);
pub const LABORATORY: CardId = CardId::new(13);
pub const MARKET: CardId = CardId::new(14);
pub const WOODCUTTER: CardId = CardId::new(15);
pub const CELLAR: CardId = CardId::new(16);
pub const CHAPEL: CardId = CardId::new(17);
pub const MONEYLENDER: CardId = CardId::new(18);
pub const WORKSHOP: CardId = CardId::new(19);
pub const MONUMENT: CardId = CardId::new(20);
pub const GRAND_MARKET: CardId = CardId::new(21);

/// Piles every game has.
pub const BASIC: [CardId; 7] = [COPPER, SILVER, GOLD, ESTATE, DUCHY, PROVINCE, CURSE];

/// Every kingdom card this module defines.
pub const KINGDOM: [CardId; 12] = [
    VILLAGE,
    SMITHY,
    FESTIVAL,
    LABORATORY,
    MARKET,
    WOODCUTTER,
    CELLAR,
    CHAPEL,
    MONEYLENDER,
    WORKSHOP,
    MONUMENT,
    GRAND_MARKET,
];

/// Discard any number of cards, then draw that many.
pub struct Cellar;

impl CardEffect for Cellar {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        player.choose_cards(
            table,
            "Discard any number of cards, then draw that many",
            ChoiceOptions::from_hand(),
            |player, _table, picked| {
                for &selector in &picked {
                    player.discard_from_hand(selector)?;
                }
                player.draw(picked.len());
                Ok(())
            },
        )
    }
}

/// Trash up to 4 cards from hand.
pub struct Chapel;

impl CardEffect for Chapel {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        player.choose_cards(
            table,
            "Trash up to 4 cards from your hand",
            ChoiceOptions::from_hand(),
            |player, table, picked| {
                for &selector in picked.iter().take(4) {
                    player.trash(table, selector)?;
                }
                Ok(())
            },
        )
    }
}

/// You may trash a Copper from hand for +3 coins.
pub struct Moneylender;

impl CardEffect for Moneylender {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        if !player.hand().iter().any(|c| c.kind() == COPPER) {
            return Ok(());
        }
        player.ask(table, "Trash a Copper for +3 coins?", |player, table, yes| {
            if yes {
                player.trash(table, CardSelector::Kind(COPPER))?;
                player.add_coins(3);
            }
            Ok(())
        })
    }
}

/// Gain a card costing up to 4.
pub struct Workshop;

impl Workshop {
    pub const MAX_COST: u32 = 4;
}

impl CardEffect for Workshop {
    fn play_action(&self, _card: CardRef, player: &mut Player, table: &mut dyn Table) -> Result<(), EngineError> {
        player.choose_card(
            table,
            "Gain a card costing up to 4",
            ChoiceOptions::default(),
            |player, table, choice| {
                let Some(selector) = choice else {
                    return Ok(());
                };
                let kind = selector
                    .kind()
                    .ok_or_else(|| EngineError::EffectFailed(format!("Workshop needs a card kind, got {selector}")))?;
                // An empty pile gains nothing.
                let Some(cost) = table.peek(kind).map(Card::cost) else {
                    return Ok(());
                };
                if cost > Workshop::MAX_COST {
                    return Err(EngineError::EffectFailed(format!(
                        "Workshop cannot gain {kind} costing {cost}"
                    )));
                }
                player.gain(table, kind)?;
                Ok(())
            },
        )
    }
}

/// +1 VP token on top of its printed coins.
pub struct Monument;

impl CardEffect for Monument {
    fn play_action(&self, _card: CardRef, player: &mut Player, _table: &mut dyn Table) -> Result<(), EngineError> {
        player.add_vp_tokens(1);
        Ok(())
    }
}

/// Cannot be bought while a Copper is in play.
pub struct GrandMarket;

impl CardEffect for GrandMarket {
    fn can_buy(&self, _card: &Card, buyer: &Player) -> Result<bool, EngineError> {
        Ok(!buyer.treasures_in_play().iter().any(|c| c.kind() == COPPER))
    }
}

fn action(id: CardId, name: &str, cost: u32) -> CardDefinition {
    CardDefinition::new(id, name).with_type(CardType::Action).with_cost(cost)
}

/// Every card of the base game.
#[must_use]
pub fn registry() -> CardRegistry {
    let mut registry = CardRegistry::new();

    // Treasures
    registry.register(CardDefinition::new(COPPER, "Copper").with_type(CardType::Treasure).with_coins(1));
    registry.register(
        CardDefinition::new(SILVER, "Silver")
            .with_type(CardType::Treasure)
            .with_cost(3)
            .with_coins(2),
    );
    registry.register(
        CardDefinition::new(GOLD, "Gold")
            .with_type(CardType::Treasure)
            .with_cost(6)
            .with_coins(3),
    );

    // Victory and curse
    registry.register(CardDefinition::new(ESTATE, "Estate").with_type(CardType::Victory).with_cost(2).with_vp(1));
    registry.register(CardDefinition::new(DUCHY, "Duchy").with_type(CardType::Victory).with_cost(5).with_vp(3));
    registry.register(
        CardDefinition::new(PROVINCE, "Province")
            .with_type(CardType::Victory)
            .with_cost(8)
            .with_vp(6),
    );
    registry.register(CardDefinition::new(CURSE, "Curse").with_type(CardType::Curse).with_vp(-1));

    // Kingdom
    registry.register(action(VILLAGE, "Village", 3).with_cards(1).with_actions(2));
    registry.register(action(SMITHY, "Smithy", 4).with_cards(3));
    registry.register(action(FESTIVAL, "Festival", 5).with_actions(2).with_coins(2).with_buys(1));
    registry.register(action(LABORATORY, "Laboratory", 5).with_cards(2).with_actions(1));
    registry.register(
        action(MARKET, "Market", 5)
            .with_cards(1)
            .with_actions(1)
            .with_coins(1)
            .with_buys(1),
    );
    registry.register(action(WOODCUTTER, "Woodcutter", 3).with_coins(2).with_buys(1));
    registry.register(action(CELLAR, "Cellar", 2).with_actions(1).with_effect(Cellar));
    registry.register(action(CHAPEL, "Chapel", 2).with_effect(Chapel));
    registry.register(action(MONEYLENDER, "Moneylender", 4).with_effect(Moneylender));
    registry.register(action(WORKSHOP, "Workshop", 3).with_effect(Workshop));
    registry.register(action(MONUMENT, "Monument", 4).with_coins(2).with_effect(Monument));
    registry.register(
        action(GRAND_MARKET, "Grand Market", 6)
            .with_cards(1)
            .with_actions(1)
            .with_coins(2)
            .with_buys(1)
            .with_effect(GrandMarket),
    );

    registry
}
