//! Menu tokens and the text that advertises them.

use std::fmt;

use crate::hunt::{HuntError, HuntResult};

/// A player choice at the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Buy,
    Sell,
    Explore,
    Move,
    LookForTrouble,
    HuntTreasure,
    Dig,
    Quit,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Buy,
        Action::Sell,
        Action::Explore,
        Action::Move,
        Action::LookForTrouble,
        Action::HuntTreasure,
        Action::Dig,
        Action::Quit,
    ];

    /// Parse a single menu token. Whitespace and case are ignored.
    pub fn parse(raw: &str) -> HuntResult<Action> {
        let token = raw.trim().to_ascii_lowercase();
        let action = match token.as_str() {
            "b" => Action::Buy,
            "s" => Action::Sell,
            "e" => Action::Explore,
            "m" => Action::Move,
            "l" => Action::LookForTrouble,
            "h" => Action::HuntTreasure,
            "d" => Action::Dig,
            "x" => Action::Quit,
            _ => return Err(HuntError::InvalidAction(token)),
        };
        Ok(action)
    }

    pub fn token(self) -> char {
        match self {
            Action::Buy => 'b',
            Action::Sell => 's',
            Action::Explore => 'e',
            Action::Move => 'm',
            Action::LookForTrouble => 'l',
            Action::HuntTreasure => 'h',
            Action::Dig => 'd',
            Action::Quit => 'x',
        }
    }

    fn menu_line(self) -> &'static str {
        match self {
            Action::Buy => "(B)uy something at the shop.",
            Action::Sell => "(S)ell something at the shop.",
            Action::Explore => "(E)xplore surrounding terrain.",
            Action::Move => "(M)ove on to a different town.",
            Action::LookForTrouble => "(L)ook for trouble!",
            Action::HuntTreasure => "(H)unt for treasure.",
            Action::Dig => "(D)ig for treasure.",
            Action::Quit => "Give up the hunt and e(X)it.",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Buy => "buy",
            Action::Sell => "sell",
            Action::Explore => "explore",
            Action::Move => "move",
            Action::LookForTrouble => "look for trouble",
            Action::HuntTreasure => "hunt for treasure",
            Action::Dig => "dig",
            Action::Quit => "quit",
        };
        f.write_str(name)
    }
}

/// The main menu, one option per line.
pub fn menu_text() -> String {
    let mut out = String::new();
    for action in Action::ALL {
        out.push_str(action.menu_line());
        out.push('\n');
    }
    out
}

/// True for "y"/"yes" answers to a confirmation prompt.
pub fn is_yes(raw: &str) -> bool {
    matches!(raw.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_token_round_trips() {
        for action in Action::ALL {
            assert_eq!(Action::parse(&action.token().to_string()), Ok(action));
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(Action::parse("  M "), Ok(Action::Move));
        assert_eq!(Action::parse("X"), Ok(Action::Quit));
    }

    #[test]
    fn unknown_tokens_are_invalid() {
        for bad in ["", "q", "buy", "bb", "?"] {
            assert!(
                matches!(Action::parse(bad), Err(HuntError::InvalidAction(_))),
                "{:?} should be invalid",
                bad
            );
        }
    }

    #[test]
    fn menu_lists_every_action() {
        let menu = menu_text();
        assert_eq!(menu.lines().count(), Action::ALL.len());
        assert!(menu.contains("(D)ig for treasure."));
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("Y"));
        assert!(is_yes(" yes "));
        assert!(!is_yes("n"));
        assert!(!is_yes(""));
    }
}
