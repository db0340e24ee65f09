//! # Game Orchestration
//!
//! Turns player input into town actions and renders their outcomes.
//!
//! ## Components
//!
//! - [`session`] - the turn loop and its two states
//! - [`commands`] - menu tokens and menu text
//! - [`console`] - display/input traits with terminal and scripted implementations

pub mod commands;
pub mod console;
pub mod session;

pub use commands::Action;
pub use console::{Console, InputSource, ScriptedConsole, StdioConsole};
pub use session::{prompt_setup, GameSession, SessionState};
