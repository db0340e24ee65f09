//! Treasure hunt domain: the hunter's kit, terrain, shop and the town state
//! machine that resolves every randomized action.
//!
//! Nothing in here touches the terminal. Every action returns a [`HuntResult`]
//! whose `Ok` or `Err` side is the message to show the player.

pub mod errors;
pub mod hunter;
pub mod inventory;
pub mod shop;
pub mod terrain;
pub mod town;
pub mod types;

pub use errors::{HuntError, HuntResult};
pub use hunter::{Hunter, BASE_STARTING_GOLD};
pub use inventory::Kit;
pub use shop::{PriceList, Shop, ShopMode};
pub use terrain::Terrain;
pub use town::{treasure_tier, Town};
pub use types::*;
