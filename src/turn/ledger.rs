//! Per-turn resources and tokens.
//!
//! Grants only ever add, saturating at `u32::MAX`. Spending checks sufficiency first and leaves the
//! ledger untouched on failure, so the engine's own deductions can never
//! drive a counter below zero.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::error::EngineError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLedger {
    actions: u32,
    coins: u32,
    buys: u32,
    vp_tokens: u32,
    pirate_ship_tokens: u32,
}

impl ResourceLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// One action, no coins, one buy. Tokens carry over.
    pub fn start_turn(&mut self) {
        self.actions = 1;
        self.coins = 0;
        self.buys = 1;
    }

    #[must_use]
    pub fn actions(&self) -> u32 {
        self.actions
    }

    #[must_use]
    pub fn coins(&self) -> u32 {
        self.coins
    }

    #[must_use]
    pub fn buys(&self) -> u32 {
        self.buys
    }

    #[must_use]
    pub fn vp_tokens(&self) -> u32 {
        self.vp_tokens
    }

    #[must_use]
    pub fn pirate_ship_tokens(&self) -> u32 {
        self.pirate_ship_tokens
    }

    pub fn add_actions(&mut self, actions: u32) {
        self.actions = self.actions.saturating_add(actions);
    }

    pub fn add_coins(&mut self, coins: u32) {
        self.coins = self.coins.saturating_add(coins);
    }

    pub fn add_buys(&mut self, buys: u32) {
        self.buys = self.buys.saturating_add(buys);
    }

    pub fn add_vp_tokens(&mut self, vp: u32) {
        self.vp_tokens = self.vp_tokens.saturating_add(vp);
    }

    pub fn add_pirate_ship_token(&mut self) {
        self.pirate_ship_tokens = self.pirate_ship_tokens.saturating_add(1);
    }

    /// Consume one action to play `kind`.
    pub fn spend_action(&mut self, kind: CardId) -> Result<(), EngineError> {
        self.require_action(kind)?;
        self.actions -= 1;
        Ok(())
    }

    /// Consume one buy.
    pub fn spend_buy(&mut self) -> Result<(), EngineError> {
        self.require_buy()?;
        self.buys -= 1;
        Ok(())
    }

    /// Pay `cost` coins for `kind`.
    pub fn spend_coins(&mut self, kind: CardId, cost: u32) -> Result<(), EngineError> {
        self.require_coins(kind, cost)?;
        self.coins -= cost;
        Ok(())
    }

    pub fn require_action(&self, kind: CardId) -> Result<(), EngineError> {
        if self.actions == 0 {
            return Err(EngineError::NoActionsAvailable(kind));
        }
        Ok(())
    }

    pub fn require_buy(&self) -> Result<(), EngineError> {
        if self.buys == 0 {
            return Err(EngineError::NoBuysAvailable);
        }
        Ok(())
    }

    pub fn require_coins(&self, kind: CardId, cost: u32) -> Result<(), EngineError> {
        if cost > self.coins {
            return Err(EngineError::InsufficientFunds {
                kind,
                cost,
                available: self.coins,
            });
        }
        Ok(())
    }
}
