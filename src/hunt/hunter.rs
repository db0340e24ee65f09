use log::debug;

use super::errors::{HuntError, HuntResult};
use super::inventory::Kit;
use super::types::Item;

/// Base purse every hunter starts with before any difficulty bonus.
pub const BASE_STARTING_GOLD: u32 = 20;

/// The player character. Lives for the whole session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunter {
    name: String,
    kit: Kit,
}

impl Hunter {
    pub fn new(name: impl Into<String>, starting_gold: u32) -> Self {
        Hunter {
            name: name.into(),
            kit: Kit::with_gold(starting_gold),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kit(&self) -> &Kit {
        &self.kit
    }

    pub fn kit_mut(&mut self) -> &mut Kit {
        &mut self.kit
    }

    pub fn gold(&self) -> u32 {
        self.kit.gold()
    }

    pub fn has_item(&self, item: Item) -> bool {
        self.kit.has_item(item)
    }

    /// Pay `cost` and take `item`. Fails without side effects when the item is
    /// already owned or the purse is short.
    pub fn buy_item(&mut self, item: Item, cost: u32) -> HuntResult<()> {
        if self.kit.has_item(item) {
            return Err(HuntError::AlreadyOwned(item));
        }
        if !self.kit.try_debit(cost) {
            return Err(HuntError::InsufficientFunds {
                item,
                price: cost,
                available: self.kit.gold(),
            });
        }
        self.kit.add_item(item);
        debug!("{} bought {} for {}", self.name, item, cost);
        Ok(())
    }

    /// Hand over `item` for `price` gold.
    pub fn sell_item(&mut self, item: Item, price: u32) -> HuntResult<()> {
        if !self.kit.remove_item(item) {
            return Err(HuntError::ItemNotOwned(item));
        }
        self.kit.credit(price);
        debug!("{} sold {} for {}", self.name, item, price);
        Ok(())
    }

    /// One-line summary shown under the news each turn.
    pub fn info_string(&self) -> String {
        let mut out = format!("{} has {} gold", self.name, self.kit.gold());
        if let Some(items) = self.kit.items_line() {
            out.push_str(&format!(" and items: {}", items));
        }
        if let Some(treasures) = self.kit.treasures_line() {
            out.push_str(&format!("\nTreasures found: {}", treasures));
        }
        out
    }
}
