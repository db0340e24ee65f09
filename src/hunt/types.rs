//! Core value types shared across the hunt: items, treasures, terrain kinds and
//! the difficulty presets.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Equipment a hunter can buy, carry and sell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Item {
    Water,
    Rope,
    Machete,
    Horse,
    Boat,
    Shovel,
}

impl Item {
    /// Every item, in catalog order.
    pub const ALL: [Item; 6] = [
        Item::Water,
        Item::Rope,
        Item::Machete,
        Item::Horse,
        Item::Boat,
        Item::Shovel,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Item::Water => "water",
            Item::Rope => "rope",
            Item::Machete => "machete",
            Item::Horse => "horse",
            Item::Boat => "boat",
            Item::Shovel => "shovel",
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Item {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Item::ALL
            .iter()
            .copied()
            .find(|item| item.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| wanted.to_string())
    }
}

/// Treasure found by searching a town.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Treasure {
    Crown,
    Trophy,
    Gem,
}

impl fmt::Display for Treasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Treasure::Crown => "crown",
            Treasure::Trophy => "trophy",
            Treasure::Gem => "gem",
        })
    }
}

/// Obstacles surrounding a town.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerrainKind {
    Mountains,
    Ocean,
    Plains,
    Desert,
    Jungle,
}

impl TerrainKind {
    pub const ALL: [TerrainKind; 5] = [
        TerrainKind::Mountains,
        TerrainKind::Ocean,
        TerrainKind::Plains,
        TerrainKind::Desert,
        TerrainKind::Jungle,
    ];

    /// The single item that gets a hunter across.
    pub fn required_item(self) -> Item {
        match self {
            TerrainKind::Mountains => Item::Rope,
            TerrainKind::Ocean => Item::Boat,
            TerrainKind::Plains => Item::Horse,
            TerrainKind::Desert => Item::Water,
            TerrainKind::Jungle => Item::Machete,
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TerrainKind::Mountains => "Mountains",
            TerrainKind::Ocean => "Ocean",
            TerrainKind::Plains => "Plains",
            TerrainKind::Desert => "Desert",
            TerrainKind::Jungle => "Jungle",
        })
    }
}

/// The three fixed difficulty presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

/// Tunables selected by a [`Difficulty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeSettings {
    /// Probability that a freshly generated town is tough.
    pub toughness: f64,
    /// Sell-back multiplier applied to catalog prices.
    pub markdown: f64,
    /// Gold added on top of the base starting purse.
    pub starting_gold_bonus: u32,
    /// Whether crossing terrain can break the required item.
    pub item_breakage: bool,
}

impl Difficulty {
    pub fn settings(self) -> ModeSettings {
        match self {
            Difficulty::Easy => ModeSettings {
                toughness: 0.02,
                markdown: 1.0,
                starting_gold_bonus: 20,
                item_breakage: false,
            },
            Difficulty::Normal => ModeSettings {
                toughness: 0.4,
                markdown: 0.5,
                starting_gold_bonus: 0,
                item_breakage: true,
            },
            Difficulty::Hard => ModeSettings {
                toughness: 0.75,
                markdown: 0.25,
                starting_gold_bonus: 0,
                item_breakage: true,
            },
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Accepts the full name or its first letter, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "e" | "easy" => Ok(Difficulty::Easy),
            "n" | "normal" => Ok(Difficulty::Normal),
            "h" | "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown mode '{}' (expected easy, normal or hard)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_parse_is_case_insensitive() {
        assert_eq!("Rope".parse::<Item>(), Ok(Item::Rope));
        assert_eq!("  SHOVEL ".parse::<Item>(), Ok(Item::Shovel));
        assert_eq!("boots".parse::<Item>(), Err("boots".to_string()));
    }

    #[test]
    fn every_terrain_requires_a_distinct_item() {
        let mut needed: Vec<Item> = TerrainKind::ALL.iter().map(|t| t.required_item()).collect();
        needed.sort();
        needed.dedup();
        assert_eq!(needed.len(), TerrainKind::ALL.len());
        assert!(!needed.contains(&Item::Shovel));
    }

    #[test]
    fn difficulty_presets() {
        let easy = Difficulty::Easy.settings();
        assert_eq!(easy.toughness, 0.02);
        assert_eq!(easy.markdown, 1.0);
        assert_eq!(easy.starting_gold_bonus, 20);
        assert!(!easy.item_breakage);

        let normal = Difficulty::Normal.settings();
        assert_eq!(normal.toughness, 0.4);
        assert_eq!(normal.markdown, 0.5);
        assert!(normal.item_breakage);

        let hard = Difficulty::Hard.settings();
        assert_eq!(hard.toughness, 0.75);
        assert_eq!(hard.markdown, 0.25);
        assert_eq!(hard.starting_gold_bonus, 0);
        assert!(hard.item_breakage);
    }

    #[test]
    fn difficulty_parses_letters_and_names() {
        assert_eq!("e".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("Normal".parse::<Difficulty>(), Ok(Difficulty::Normal));
        assert_eq!("H".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("y".parse::<Difficulty>().is_err());
    }
}
