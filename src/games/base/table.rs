//! Supply, trash and turn order for the base game.

use log::{debug, info};
use rustc_hash::FxHashMap;

use super::cards::{self, BASIC, COPPER, CURSE, DUCHY, ESTATE, GOLD, PROVINCE, SILVER};
use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{EntityAllocator, GameConfig, PlayerId};
use crate::table::{Supply, TrashPile, TurnCoordinator};
use crate::turn::Phase;

const KINGDOM_PILE: u32 = 10;
/// Game ends when this many piles are empty.
const EMPTY_PILES_TO_END: usize = 3;

/// The shared state between players.
#[derive(Debug)]
pub struct BaseTable {
    registry: CardRegistry,
    /// Piles in setup order; the top of a pile is its last card.
    piles: Vec<(CardId, Vec<Card>)>,
    pile_index: FxHashMap<CardId, usize>,
    trash: Vec<Card>,
    player_count: usize,
    current: PlayerId,
    phase: Phase,
    game_over: bool,
}

impl BaseTable {
    /// Lay out the supply for `config`.
    ///
    /// Pile sizes scale with player count. Piles include the starting
    /// Coppers and Estates players draw during setup.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let registry = cards::registry();
        let players = config.player_count as u32;
        let victory = if players <= 2 { 8 } else { 12 };
        let starting = |kind: CardId| {
            config
                .turn
                .starting_cards
                .iter()
                .filter(|(k, _)| *k == kind)
                .map(|&(_, n)| n * players)
                .sum::<u32>()
        };

        let mut sizes: Vec<(CardId, u32)> = vec![
            (COPPER, 46 + starting(COPPER)),
            (SILVER, 40),
            (GOLD, 30),
            (ESTATE, victory + starting(ESTATE)),
            (DUCHY, victory),
            (PROVINCE, if players <= 4 { victory } else { 15 }),
            (CURSE, 10 * players.saturating_sub(1).max(1)),
        ];
        for &kind in &config.kingdom {
            if !BASIC.contains(&kind) && registry.contains(kind) {
                sizes.push((kind, KINGDOM_PILE));
            }
        }

        let mut ids = EntityAllocator::new();
        let mut piles = Vec::with_capacity(sizes.len());
        let mut pile_index = FxHashMap::default();
        for (kind, size) in sizes {
            let pile: Vec<Card> = (0..size)
                .filter_map(|_| registry.instantiate(kind, ids.alloc(), None))
                .collect();
            pile_index.insert(kind, piles.len());
            piles.push((kind, pile));
        }

        Self {
            registry,
            piles,
            pile_index,
            trash: Vec::new(),
            player_count: config.player_count,
            current: PlayerId::new(0),
            phase: Phase::Setup,
            game_over: false,
        }
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_count
    }

    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    /// Cards left in `kind`'s pile (0 if there is no such pile).
    #[must_use]
    pub fn pile_size(&self, kind: CardId) -> usize {
        self.pile(kind).map_or(0, Vec::len)
    }

    /// Kinds with a pile, in setup order.
    pub fn pile_kinds(&self) -> impl Iterator<Item = CardId> + '_ {
        self.piles.iter().map(|(kind, _)| *kind)
    }

    #[must_use]
    pub fn empty_piles(&self) -> usize {
        self.piles.iter().filter(|(_, pile)| pile.is_empty()).count()
    }

    #[must_use]
    pub fn trash_pile(&self) -> &[Card] {
        &self.trash
    }

    /// Every card still in the supply.
    #[must_use]
    pub fn supply_count(&self) -> usize {
        self.piles.iter().map(|(_, pile)| pile.len()).sum()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    fn pile(&self, kind: CardId) -> Option<&Vec<Card>> {
        self.pile_index.get(&kind).map(|&i| &self.piles[i].1)
    }

    fn pile_mut(&mut self, kind: CardId) -> Option<&mut Vec<Card>> {
        let i = *self.pile_index.get(&kind)?;
        Some(&mut self.piles[i].1)
    }
}

impl TurnCoordinator for BaseTable {
    fn is_current_player(&self, player: PlayerId) -> bool {
        self.current == player
    }

    fn phase(&self) -> Phase {
        self.phase
    }

    fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    fn check_for_game_over(&mut self) {
        if self.game_over {
            return;
        }
        if self.pile_size(PROVINCE) == 0 || self.empty_piles() >= EMPTY_PILES_TO_END {
            info!("game over: {} empty piles", self.empty_piles());
            self.game_over = true;
        }
    }

    fn in_progress(&self) -> bool {
        !self.game_over
    }

    fn move_to_next_player(&mut self) {
        self.current = self.current.next(self.player_count);
        debug!("turn passes to {}", self.current);
    }
}

impl Supply for BaseTable {
    fn draw_one_of(&mut self, kind: CardId, owner: PlayerId) -> Option<Card> {
        let mut card = self.pile_mut(kind)?.pop()?;
        card.owner = Some(owner);
        Some(card)
    }

    fn peek(&self, kind: CardId) -> Option<&Card> {
        self.pile(kind)?.last()
    }
}

impl TrashPile for BaseTable {
    fn trash(&mut self, mut card: Card) {
        card.owner = None;
        self.trash.push(card);
    }
}
