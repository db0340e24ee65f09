//! # Game Session
//!
//! Owns the hunter, the current town and the random source, and turns one
//! menu token at a time into a town action.
//!
//! ## States
//!
//! - **AwaitingAction** - waiting for the next menu token
//! - **Ended** - the player quit (or input ran out)
//!
//! Only `move` replaces the town, and only after a successful crossing.
//! Every other action loops back to `AwaitingAction`.
//!
//! ## Usage
//!
//! ```rust
//! use rand::{rngs::StdRng, SeedableRng};
//! use treasure_hunter::game::{GameSession, ScriptedConsole, SessionState};
//! use treasure_hunter::hunt::{Difficulty, PriceList};
//!
//! let rng = StdRng::seed_from_u64(7);
//! let mut session = GameSession::new("ada", Difficulty::Easy, PriceList::default(), 20, rng);
//! let mut io = ScriptedConsole::new(["e", "x"]);
//! session.run(&mut io);
//! assert_eq!(session.state(), SessionState::Ended);
//! assert_eq!(session.hunter().gold(), 40);
//! ```

use log::{debug, info, warn};
use rand::Rng;

use super::commands::{is_yes, menu_text, Action};
use super::console::{Console, InputSource};
use crate::hunt::{
    Difficulty, HuntError, HuntResult, Hunter, Item, ModeSettings, PriceList, Shop, ShopMode, Town,
};

/// Gold and fixed-price purchases granted by the test kit.
const TEST_KIT_GOLD: u32 = 124;
const TEST_KIT: [(Item, u32); 5] = [
    (Item::Horse, 12),
    (Item::Water, 2),
    (Item::Rope, 4),
    (Item::Machete, 6),
    (Item::Boat, 20),
];

const DEFAULT_HUNTER_NAME: &str = "hunter";

/// Hunter, current town and random source for one game.
pub struct GameSession<R: Rng> {
    hunter: Hunter,
    town: Town,
    difficulty: Difficulty,
    settings: ModeSettings,
    prices: PriceList,
    rng: R,
    state: SessionState,
    towns_visited: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingAction,
    Ended,
}

impl<R: Rng> GameSession<R> {
    /// Create the hunter with `base_gold` plus the difficulty bonus and place
    /// them in the first town.
    pub fn new(
        name: impl Into<String>,
        difficulty: Difficulty,
        prices: PriceList,
        base_gold: u32,
        mut rng: R,
    ) -> Self {
        let settings = difficulty.settings();
        let hunter = Hunter::new(name, base_gold.saturating_add(settings.starting_gold_bonus));
        let mut town = Self::fresh_town(&settings, prices, &mut rng);
        town.hunter_arrives(&hunter);
        info!(
            "session start: hunter={} mode={} gold={}",
            hunter.name(),
            difficulty,
            hunter.gold()
        );
        GameSession {
            hunter,
            town,
            difficulty,
            settings,
            prices,
            rng,
            state: SessionState::AwaitingAction,
            towns_visited: 1,
        }
    }

    fn fresh_town(settings: &ModeSettings, prices: PriceList, rng: &mut R) -> Town {
        let shop = Shop::new(settings.markdown, prices);
        Town::generate(shop, settings.toughness, rng)
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn town(&self) -> &Town {
        &self.town
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state == SessionState::Ended
    }

    pub fn towns_visited(&self) -> u32 {
        self.towns_visited
    }

    /// Add the test-kit gold and buy its items at their fixed prices.
    pub fn apply_test_kit(&mut self) {
        self.hunter.kit_mut().credit(TEST_KIT_GOLD);
        for (item, cost) in TEST_KIT {
            if let Err(e) = self.hunter.buy_item(item, cost) {
                warn!("test kit: skipped {}: {}", item, e);
            }
        }
        info!("test kit applied: gold={}", self.hunter.gold());
    }

    /// News, hunter and town summary, then the menu.
    pub fn status_screen(&self) -> String {
        format!(
            "\n{}\n***\n{}\n{}\n{}\n",
            self.town.latest_news(),
            self.hunter.info_string(),
            self.town.info_string(),
            menu_text()
        )
    }

    /// Drive the loop until the player quits or input runs out.
    pub fn run<IO: Console + InputSource>(&mut self, io: &mut IO) {
        while self.state == SessionState::AwaitingAction {
            io.show(&self.status_screen());
            io.show("What's your next move? ");
            let line = match io.next_line() {
                Some(line) => line,
                None => {
                    debug!("input exhausted; quitting");
                    Action::Quit.token().to_string()
                }
            };
            let _ = self.process(&line, io);
        }
    }

    /// Handle one line of menu input.
    pub fn process<IO: Console + InputSource>(&mut self, line: &str, io: &mut IO) -> HuntResult {
        match Action::parse(line) {
            Ok(action) => self.dispatch(action, io),
            Err(e) => {
                debug!("invalid action {:?}", line);
                io.show(&format!("{}\n", e));
                Err(e)
            }
        }
    }

    /// Apply one action. Outcomes of town actions land in the town's news;
    /// explore, a successful move and quit are shown right away.
    pub fn dispatch<IO: Console + InputSource>(&mut self, action: Action, io: &mut IO) -> HuntResult {
        if self.state == SessionState::Ended {
            return Err(HuntError::InvalidAction(action.token().to_string()));
        }
        debug!("action: {}", action);
        match action {
            Action::Buy => self.shop_buy(io),
            Action::Sell => self.shop_sell(io),
            Action::Explore => {
                let msg = self.town.terrain().info_string();
                io.show(&format!("{}\n", msg));
                Ok(msg)
            }
            Action::Move => self.move_on(io),
            Action::LookForTrouble => self.town.look_for_trouble(&mut self.hunter, &mut self.rng),
            Action::HuntTreasure => self.town.search_for_treasure(&mut self.hunter, &mut self.rng),
            Action::Dig => self.town.dig_for_treasure(&mut self.hunter, &mut self.rng),
            Action::Quit => {
                let msg = format!(
                    "Fare thee well, {}! You visited {} town{}.",
                    self.hunter.name(),
                    self.towns_visited,
                    if self.towns_visited == 1 { "" } else { "s" }
                );
                io.show(&format!("{}\n", msg));
                self.state = SessionState::Ended;
                info!("session end: towns={} gold={}", self.towns_visited, self.hunter.gold());
                Ok(msg)
            }
        }
    }

    fn move_on<IO: Console>(&mut self, io: &mut IO) -> HuntResult {
        let msg = self
            .town
            .leave_town(&mut self.hunter, self.settings.item_breakage, &mut self.rng)?;
        // The departing town's news would otherwise be lost with it.
        io.show(&format!("{}\n", msg));
        self.town = Self::fresh_town(&self.settings, self.prices, &mut self.rng);
        self.town.hunter_arrives(&self.hunter);
        self.towns_visited += 1;
        info!(
            "entered town #{}: terrain={} tough={}",
            self.towns_visited,
            self.town.terrain().kind(),
            self.town.is_tough()
        );
        Ok(msg)
    }

    fn shop_buy<IO: Console + InputSource>(&mut self, io: &mut IO) -> HuntResult {
        io.show(&format!(
            "Welcome to the shop! We have the finest wares in town.\nCurrently we have the following items:\n{}\nWhat're you lookin' to buy? ",
            self.town.shop().inventory_listing()
        ));
        let name = io.next_line().unwrap_or_default();
        let item = match self.town.shop().lookup(&name) {
            Ok(item) => item,
            Err(e) => return self.town.record(Err(e)),
        };
        let price = self.town.shop().buy_price(item).unwrap_or_default();
        io.show(&format!("It'll cost you {} gold. Buy it (y/n)? ", price));
        if !is_yes(&io.next_line().unwrap_or_default()) {
            return self.town.record(Ok("Come back when you've made up your mind.".to_string()));
        }
        self.town.enter_shop(&mut self.hunter, ShopMode::Buy, item.name())
    }

    fn shop_sell<IO: Console + InputSource>(&mut self, io: &mut IO) -> HuntResult {
        let items = self
            .hunter
            .kit()
            .items_line()
            .unwrap_or_else(|| "nothing".to_string());
        io.show(&format!(
            "What're you lookin' to sell?\nYou currently have the following items: {}\n",
            items
        ));
        let name = io.next_line().unwrap_or_default();
        let item = match Shop::identify(&name) {
            Ok(item) => item,
            Err(e) => return self.town.record(Err(e)),
        };
        if !self.hunter.has_item(item) {
            return self.town.record(Err(HuntError::ItemNotOwned(item)));
        }
        let Some(price) = self.town.shop().sell_price(item) else {
            return self.town.record(Err(HuntError::NotTraded(item)));
        };
        io.show(&format!("It'll get you {} gold. Sell it (y/n)? ", price));
        if !is_yes(&io.next_line().unwrap_or_default()) {
            return self.town.record(Ok("Suit yerself.".to_string()));
        }
        self.town.enter_shop(&mut self.hunter, ShopMode::Sell, item.name())
    }
}

pub fn welcome_text() -> &'static str {
    "\nWelcome to TREASURE HUNTER\nGoing hunting for the big treasure eh?\n"
}

/// Greet the player and ask for a name and a mode.
///
/// Names are lowercased and a blank name becomes "hunter"; a blank or unknown mode falls back to
/// `default_mode`. Returns `None` if input runs out before a name is given.
pub fn prompt_setup<IO: Console + InputSource>(
    io: &mut IO,
    default_mode: Difficulty,
) -> Option<(String, Difficulty)> {
    io.show(welcome_text());
    io.show("What's your name, Hunter? ");
    let raw_name = io.next_line()?;
    let name = match raw_name.trim() {
        "" => DEFAULT_HUNTER_NAME.to_string(),
        n => n.to_lowercase(),
    };
    io.show("Which mode? (e/n/h): ");
    let raw_mode = io.next_line().unwrap_or_default();
    let mode = if raw_mode.trim().is_empty() {
        default_mode
    } else {
        match raw_mode.parse::<Difficulty>() {
            Ok(mode) => mode,
            Err(e) => {
                warn!("setup: {}", e);
                io.show(&format!("Not sure what that means; playing {} mode.\n", default_mode));
                default_mode
            }
        }
    };
    Some((name, mode))
}
