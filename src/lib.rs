//! # Treasure Hunter - a small text adventure
//!
//! A hunter travels from town to town, buys gear at the local shop, crosses
//! the terrain around each town with the right item, picks fights for gold and
//! searches (or digs) for treasure.
//!
//! ## Features
//!
//! - **Procedural Towns**: Each town rolls its surrounding terrain and whether it is tough.
//! - **Shop**: Fixed catalog, configurable prices, sell-back at a difficulty-dependent markdown.
//! - **Randomized Actions**: Brawls, treasure searches and digging, each resolved against a seedable RNG.
//! - **Three Difficulty Presets**: Easy, normal and hard.
//! - **Scriptable I/O**: The game loop talks to traits, so tests can replay input.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rand::{rngs::StdRng, SeedableRng};
//! use treasure_hunter::config::Config;
//! use treasure_hunter::game::{GameSession, StdioConsole};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     let rng = StdRng::seed_from_u64(config.game.seed.unwrap_or(1));
//!     let mut session = GameSession::new(
//!         "ada",
//!         config.game.difficulty,
//!         config.shop,
//!         config.game.starting_gold,
//!         rng,
//!     );
//!     session.run(&mut StdioConsole::new());
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - [`hunt`] - Domain: kit, hunter, terrain, shop and the town state machine
//! - [`game`] - Turn loop, menu tokens and console seams
//! - [`config`] - Configuration file handling
//!
//! ```text
//! ┌─────────────────┐
//! │  GameSession    │ ← Turn loop, owns hunter + current town + RNG
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Town           │ ← Resolves actions against terrain and shop
//! └─────────────────┘
//!          │
//! ┌─────────────────┐
//! │  Hunter / Kit   │ ← Items, treasures, gold
//! └─────────────────┘
//! ```

pub mod config;
pub mod game;
pub mod hunt;
