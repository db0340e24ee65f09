//! A single town visit and every randomized action the hunter can take there.
//!
//! Each action records its message as the town's latest news, whether it
//! succeeded or not, so the orchestrator can always redisplay the last outcome.
//!
//! Random draws:
//! - toughness: one `f64` at construction, after the terrain pick
//! - leaving: one `f64` breakage roll, only when breakage is on and the hunter
//!   can actually cross
//! - brawl: `f64` trouble roll, then `1..=10` gold, then `f64` win roll
//! - search: one `f64` (tier is derived from the same value)
//! - dig: `f64` success roll, then `1..=20` gold on success

use log::{debug, info};
use rand::Rng;

use super::errors::{HuntError, HuntResult};
use super::hunter::Hunter;
use super::shop::{Shop, ShopMode};
use super::terrain::Terrain;
use super::types::{Item, Treasure};

/// Chance an item breaks on a crossing.
pub const BREAK_CHANCE: f64 = 0.5;
/// Dig rolls above this strike gold.
pub const DIG_THRESHOLD: f64 = 0.49;
pub const MAX_BRAWL_GOLD: u32 = 10;
pub const MAX_DIG_GOLD: u32 = 20;

const TOUGH_NO_LUCK: f64 = 0.66;
const MILD_NO_LUCK: f64 = 0.33;
const CROWN_BELOW: f64 = 0.33;
const TROPHY_BELOW: f64 = 0.66;

#[derive(Debug, Clone)]
pub struct Town {
    terrain: Terrain,
    shop: Shop,
    tough: bool,
    searched: bool,
    dug: bool,
    news: String,
}

impl Town {
    /// Roll up a fresh town: terrain first, then toughness.
    pub fn generate<R: Rng + ?Sized>(shop: Shop, toughness: f64, rng: &mut R) -> Self {
        let terrain = Terrain::generate(rng);
        let roll: f64 = rng.gen();
        let tough = roll < toughness;
        debug!(
            "town: terrain={} toughness_roll={:.3} threshold={} tough={}",
            terrain.kind(),
            roll,
            toughness,
            tough
        );
        Town::with_parts(terrain, shop, tough)
    }

    pub fn with_parts(terrain: Terrain, shop: Shop, tough: bool) -> Self {
        Town {
            terrain,
            shop,
            tough,
            searched: false,
            dug: false,
            news: String::new(),
        }
    }

    pub fn terrain(&self) -> &Terrain {
        &self.terrain
    }

    pub fn shop(&self) -> &Shop {
        &self.shop
    }

    pub fn is_tough(&self) -> bool {
        self.tough
    }

    pub fn searched(&self) -> bool {
        self.searched
    }

    pub fn dug(&self) -> bool {
        self.dug
    }

    pub fn latest_news(&self) -> &str {
        &self.news
    }

    pub fn info_string(&self) -> String {
        format!("This nice little town is surrounded by {}.", self.terrain.kind())
    }

    /// Greet the hunter; sets the news to the welcome text.
    pub fn hunter_arrives(&mut self, hunter: &Hunter) {
        let mut msg = format!("Welcome to town, {}.", hunter.name());
        if self.tough {
            msg.push_str("\nIt's pretty rough around here, so watch yourself.");
        } else {
            msg.push_str("\nWe're just a sleepy little town with mild mannered folk.");
        }
        self.news = msg;
    }

    fn no_luck_chance(&self) -> f64 {
        if self.tough {
            TOUGH_NO_LUCK
        } else {
            MILD_NO_LUCK
        }
    }

    /// Store an outcome as the latest news and hand it back.
    pub fn record(&mut self, result: HuntResult) -> HuntResult {
        self.news = match &result {
            Ok(msg) => msg.clone(),
            Err(e) => e.to_string(),
        };
        result
    }

    /// Try to cross the surrounding terrain. On `Ok` the caller moves the
    /// hunter to a new town; on `Err` nothing changed.
    pub fn leave_town<R: Rng + ?Sized>(
        &mut self,
        hunter: &mut Hunter,
        item_breakage: bool,
        rng: &mut R,
    ) -> HuntResult {
        let item = self.terrain.needed_item();
        if !self.terrain.can_cross(hunter) {
            let err = HuntError::CannotCross {
                hunter: hunter.name().to_string(),
                item,
                terrain: self.terrain.kind(),
            };
            return self.record(Err(err));
        }
        let mut msg = format!("You used your {} to cross the {}.", item, self.terrain.kind());
        if item_breakage {
            let roll: f64 = rng.gen();
            debug!("leave: breakage roll={:.3}", roll);
            if roll < BREAK_CHANCE {
                hunter.kit_mut().remove_item(item);
                msg.push_str(&format!("\nUnfortunately, your {} broke.", item));
                info!("{}'s {} broke crossing the {}", hunter.name(), item, self.terrain.kind());
            }
        }
        self.record(Ok(msg))
    }

    /// Buy or sell one item at this town's shop.
    pub fn enter_shop(&mut self, hunter: &mut Hunter, mode: ShopMode, item_name: &str) -> HuntResult {
        let result = self.shop.enter(hunter, mode, item_name);
        self.record(result)
    }

    /// Brawl for gold. Tough towns hand out fewer wins.
    pub fn look_for_trouble<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> HuntResult {
        let no_trouble = self.no_luck_chance();
        let trouble_roll: f64 = rng.gen();
        if trouble_roll > 1.0 - no_trouble {
            debug!("brawl: trouble_roll={:.3} no trouble", trouble_roll);
            return self.record(Ok("You couldn't find any trouble".to_string()));
        }
        let mut msg = String::from("You want trouble, stranger!  You got it!\nOof! Umph! Ow!\n");
        let gold = rng.gen_range(1..=MAX_BRAWL_GOLD);
        let win_roll: f64 = rng.gen();
        debug!(
            "brawl: trouble_roll={:.3} gold={} win_roll={:.3}",
            trouble_roll, gold, win_roll
        );
        if win_roll > no_trouble {
            hunter.kit_mut().credit(gold);
            msg.push_str("Okay, stranger! You proved yer mettle. Here, take my gold.");
            msg.push_str(&format!("\nYou won the brawl and receive {} gold.", gold));
        } else {
            let paid = hunter.kit_mut().debit_clamped(gold);
            msg.push_str("That'll teach you to go lookin' fer trouble in MY town! Now pay up!");
            msg.push_str(&format!("\nYou lost the brawl and pay {} gold.", gold));
            if paid < gold {
                msg.push_str(&format!(" You only had {} on you.", paid));
            }
        }
        self.record(Ok(msg))
    }

    /// Search the town once. Duplicate treasures are not kept.
    pub fn search_for_treasure<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> HuntResult {
        if self.searched {
            return self.record(Err(HuntError::AlreadyAttempted("searched")));
        }
        self.searched = true;
        let roll: f64 = rng.gen();
        debug!("search: roll={:.3} tough={}", roll, self.tough);
        if roll > self.no_luck_chance() {
            return self.record(Ok("You found dust".to_string()));
        }
        let treasure = treasure_tier(roll);
        let msg = if hunter.kit_mut().add_treasure(treasure) {
            info!("{} found a {}", hunter.name(), treasure);
            format!("You found treasure: a {}!", treasure)
        } else {
            format!("You found a {}, but you already have one.", treasure)
        };
        self.record(Ok(msg))
    }

    /// Dig once with a shovel. Without one, the attempt is not used up.
    pub fn dig_for_treasure<R: Rng + ?Sized>(&mut self, hunter: &mut Hunter, rng: &mut R) -> HuntResult {
        if self.dug {
            return self.record(Err(HuntError::AlreadyAttempted("dug")));
        }
        if !hunter.has_item(Item::Shovel) {
            return self.record(Err(HuntError::MissingTool(Item::Shovel)));
        }
        self.dug = true;
        let roll: f64 = rng.gen();
        let msg = if roll > DIG_THRESHOLD {
            let gold = rng.gen_range(1..=MAX_DIG_GOLD);
            debug!("dig: roll={:.3} gold={}", roll, gold);
            hunter.kit_mut().credit(gold);
            format!("You dug up {} gold", gold)
        } else {
            debug!("dig: roll={:.3} nothing", roll);
            "You didn't dig up any gold".to_string()
        };
        self.record(Ok(msg))
    }
}

/// Boundaries belong to the higher tier: 0.33 is a trophy, 0.66 a gem.
pub fn treasure_tier(roll: f64) -> Treasure {
    if roll < CROWN_BELOW {
        Treasure::Crown
    } else if roll < TROPHY_BELOW {
        Treasure::Trophy
    } else {
        Treasure::Gem
    }
}
