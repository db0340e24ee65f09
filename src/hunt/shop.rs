//! The town shop: a fixed catalog of equipment and sell-back pricing.
//!
//! - Buy prices come from a [`PriceList`] loaded once from configuration
//! - Sell-back pays `floor(price * markdown)`; markdown never exceeds 1 so a
//!   sell followed by a re-buy can never turn a profit
//! - A price of 0 means the shop does not stock that item

use log::info;
use serde::{Deserialize, Serialize};

use super::errors::{HuntError, HuntResult};
use super::hunter::Hunter;
use super::types::Item;

/// Buy price for every item, in gold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    pub water: u32,
    pub rope: u32,
    pub machete: u32,
    pub horse: u32,
    pub boat: u32,
    pub shovel: u32,
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            water: 2,
            rope: 4,
            machete: 6,
            horse: 12,
            boat: 20,
            shovel: 8,
        }
    }
}

impl PriceList {
    pub fn price_of(&self, item: Item) -> u32 {
        match item {
            Item::Water => self.water,
            Item::Rope => self.rope,
            Item::Machete => self.machete,
            Item::Horse => self.horse,
            Item::Boat => self.boat,
            Item::Shovel => self.shovel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopMode {
    Buy,
    Sell,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Shop {
    markdown: f64,
    prices: PriceList,
}

impl Shop {
    /// Markdown is clamped into `[0, 1]`.
    pub fn new(markdown: f64, prices: PriceList) -> Self {
        Shop {
            markdown: markdown.clamp(0.0, 1.0),
            prices,
        }
    }

    pub fn markdown(&self) -> f64 {
        self.markdown
    }

    /// Buy price, or `None` when the item is not stocked.
    pub fn buy_price(&self, item: Item) -> Option<u32> {
        match self.prices.price_of(item) {
            0 => None,
            p => Some(p),
        }
    }

    /// What the shop pays for `item`.
    pub fn sell_price(&self, item: Item) -> Option<u32> {
        self.buy_price(item)
            .map(|p| (f64::from(p) * self.markdown).floor() as u32)
    }

    /// Resolve an item name typed by the player, stocked or not.
    pub fn identify(name: &str) -> HuntResult<Item> {
        name.parse().map_err(HuntError::UnknownItem)
    }

    /// Resolve an item name typed by the player against the catalog.
    pub fn lookup(&self, name: &str) -> HuntResult<Item> {
        let item = Self::identify(name)?;
        if self.buy_price(item).is_none() {
            return Err(HuntError::UnknownItem(item.to_string()));
        }
        Ok(item)
    }

    /// Run one transaction for `hunter`.
    pub fn enter(&self, hunter: &mut Hunter, mode: ShopMode, item_name: &str) -> HuntResult {
        match mode {
            ShopMode::Buy => self.buy(hunter, self.lookup(item_name)?),
            ShopMode::Sell => self.sell(hunter, Self::identify(item_name)?),
        }
    }

    pub fn buy(&self, hunter: &mut Hunter, item: Item) -> HuntResult {
        let cost = self
            .buy_price(item)
            .ok_or_else(|| HuntError::UnknownItem(item.to_string()))?;
        hunter.buy_item(item, cost)?;
        info!("shop: {} bought {} for {}g", hunter.name(), item, cost);
        Ok(format!("Ye' got yerself a {}. Come again soon.", item))
    }

    /// Ownership is checked before stock, so an unstocked item the hunter
    /// carries gets `NotTraded` rather than `UnknownItem`.
    pub fn sell(&self, hunter: &mut Hunter, item: Item) -> HuntResult {
        if !hunter.has_item(item) {
            return Err(HuntError::ItemNotOwned(item));
        }
        let price = self.sell_price(item).ok_or(HuntError::NotTraded(item))?;
        hunter.sell_item(item, price)?;
        info!("shop: {} sold {} for {}g", hunter.name(), item, price);
        Ok(format!("Pleasure doin' business with you. ({} gold)", price))
    }

    /// Catalog listing with buy prices, one item per line.
    pub fn inventory_listing(&self) -> String {
        let mut out = String::new();
        for item in Item::ALL {
            if let Some(p) = self.buy_price(item) {
                out.push_str(&format!("{}: {} gold\n", capitalize(item.name()), p));
            }
        }
        out
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
