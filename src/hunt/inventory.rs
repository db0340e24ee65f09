/// Kit management: the items, treasures and gold a hunter carries.
use std::collections::BTreeSet;

use super::types::{Item, Treasure};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Kit {
    items: BTreeSet<Item>,
    treasures: BTreeSet<Treasure>,
    gold: u32,
}

impl Kit {
    pub fn with_gold(gold: u32) -> Self {
        Kit {
            gold,
            ..Kit::default()
        }
    }

    // ============================================================================
    // Items
    // ============================================================================

    pub fn has_item(&self, item: Item) -> bool {
        self.items.contains(&item)
    }

    /// Add an item; returns false if it was already carried.
    pub fn add_item(&mut self, item: Item) -> bool {
        self.items.insert(item)
    }

    /// Remove an item; returns false if it was not carried.
    pub fn remove_item(&mut self, item: Item) -> bool {
        self.items.remove(&item)
    }

    pub fn items(&self) -> impl Iterator<Item = Item> + '_ {
        self.items.iter().copied()
    }

    // ============================================================================
    // Treasures
    // ============================================================================

    pub fn has_treasure(&self, treasure: Treasure) -> bool {
        self.treasures.contains(&treasure)
    }

    /// Add a treasure; duplicates are suppressed and reported as false.
    pub fn add_treasure(&mut self, treasure: Treasure) -> bool {
        self.treasures.insert(treasure)
    }

    pub fn treasures(&self) -> impl Iterator<Item = Treasure> + '_ {
        self.treasures.iter().copied()
    }

    // ============================================================================
    // Gold
    // ============================================================================

    pub fn gold(&self) -> u32 {
        self.gold
    }

    pub fn credit(&mut self, amount: u32) {
        self.gold = self.gold.saturating_add(amount);
    }

    /// Take up to `amount`, stopping at zero. Returns what was actually taken.
    pub fn debit_clamped(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.gold);
        self.gold -= taken;
        taken
    }

    /// Take exactly `amount` or nothing. Returns false when funds are short.
    pub fn try_debit(&mut self, amount: u32) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    /// Space-separated item names, or `None` when the kit holds no items.
    pub fn items_line(&self) -> Option<String> {
        join_names(self.items())
    }

    /// Space-separated treasure names, or `None` when no treasure is held.
    pub fn treasures_line(&self) -> Option<String> {
        join_names(self.treasures())
    }
}

fn join_names<T: ToString>(it: impl Iterator<Item = T>) -> Option<String> {
    let names: Vec<String> = it.map(|n| n.to_string()).collect();
    if names.is_empty() {
        None
    } else {
        Some(names.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn items_are_unique() {
        let mut kit = Kit::default();
        assert!(kit.add_item(Item::Rope));
        assert!(!kit.add_item(Item::Rope));
        assert_eq!(kit.items().count(), 1);
        assert!(kit.remove_item(Item::Rope));
        assert!(!kit.remove_item(Item::Rope));
        assert!(kit.items_line().is_none());
    }

    #[test]
    fn treasures_are_unique() {
        let mut kit = Kit::default();
        assert!(kit.add_treasure(Treasure::Gem));
        assert!(!kit.add_treasure(Treasure::Gem));
        assert!(kit.add_treasure(Treasure::Crown));
        assert_eq!(kit.treasures_line().as_deref(), Some("crown gem"));
    }

    #[test]
    fn debit_clamped_stops_at_zero() {
        let mut kit = Kit::with_gold(3);
        assert_eq!(kit.debit_clamped(7), 3);
        assert_eq!(kit.gold(), 0);
        assert_eq!(kit.debit_clamped(1), 0);
        assert_eq!(kit.gold(), 0);
    }

    #[test]
    fn try_debit_rejects_short_funds() {
        let mut kit = Kit::with_gold(5);
        assert!(!kit.try_debit(6));
        assert_eq!(kit.gold(), 5);
        assert!(kit.try_debit(5));
        assert_eq!(kit.gold(), 0);
    }
}
