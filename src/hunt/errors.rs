use thiserror::Error;

use super::types::{Item, TerrainKind};

/// Recoverable failures of hunter actions.
///
/// Every variant leaves hunter and town state untouched; the `Display` text is
/// the message shown to the player.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuntError {
    /// The hunter lacks the item the surrounding terrain requires.
    #[error("You can't leave town, {hunter}. You don't have a {item} to cross the {terrain}.")]
    CannotCross {
        hunter: String,
        item: Item,
        terrain: TerrainKind,
    },

    /// Not enough gold for a purchase.
    #[error("You need {price} gold for a {item}, but you only have {available}.")]
    InsufficientFunds {
        item: Item,
        price: u32,
        available: u32,
    },

    /// Tried to sell something the hunter does not carry.
    #[error("Stop stringin' me along! You don't have a {0}.")]
    ItemNotOwned(Item),

    /// Buying an item already in the kit.
    #[error("You've already got a {0}!")]
    AlreadyOwned(Item),

    /// The shop does not stock the named item.
    #[error("We ain't got none of those.")]
    UnknownItem(String),

    /// The hunter carries the item but this shop will not buy it back.
    #[error("We don't deal in {0} 'round here. Keep it.")]
    NotTraded(Item),

    /// A one-shot action was already used in this town.
    #[error("This town has already been {0}.")]
    AlreadyAttempted(&'static str),

    /// An action needs a tool the hunter does not have.
    #[error("You must acquire a {0} to dig.")]
    MissingTool(Item),

    /// Unrecognized menu input.
    #[error("Yikes! That's an invalid option! Try again.")]
    InvalidAction(String),
}

/// Outcome message on success, [`HuntError`] otherwise.
pub type HuntResult<T = String> = Result<T, HuntError>;
