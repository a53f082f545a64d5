//! User intents.
//!
//! This module defines the [`Action`] enum, the closed set of inputs accepted
//! by the [`crate::Processor`]. Every action has a fixed display label (used
//! as button text) and a fixed integer tag (carried by the button that emits
//! it).

use std::{fmt, str::FromStr};

use crate::UnknownAction;

/// One discrete user intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Append a short signal to the current symbol.
    Dot,
    /// Append a long signal to the current symbol.
    Hyphen,
    /// Terminate the current symbol and decode it.
    Space,
    /// Clear the current symbol and the decoded result.
    Reset,
    /// Dismiss the decode failure alert.
    CloseAlert,
}

impl Action {
    /// All actions, in tag order.
    pub const ALL: [Action; 5] =
        [Action::Dot, Action::Hyphen, Action::Space, Action::Reset, Action::CloseAlert];

    /// Resolve a button tag.
    ///
    /// Tags outside `0..=4` are rejected with [`UnknownAction::Tag`].
    pub fn from_tag(tag: u8) -> Result<Self, UnknownAction> {
        match tag {
            0 => Ok(Self::Dot),
            1 => Ok(Self::Hyphen),
            2 => Ok(Self::Space),
            3 => Ok(Self::Reset),
            4 => Ok(Self::CloseAlert),
            other => Err(UnknownAction::Tag(other)),
        }
    }

    /// Tag carried by the button that emits this action.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Dot => 0,
            Self::Hyphen => 1,
            Self::Space => 2,
            Self::Reset => 3,
            Self::CloseAlert => 4,
        }
    }

    /// Human-readable button label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dot => ".",
            Self::Hyphen => "-",
            Self::Space => "_",
            Self::Reset => "Reset",
            Self::CloseAlert => "Close",
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = UnknownAction;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        Self::from_tag(tag)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dot" => Ok(Self::Dot),
            "hyphen" | "dash" => Ok(Self::Hyphen),
            "space" => Ok(Self::Space),
            "reset" => Ok(Self::Reset),
            "closealert" | "close-alert" | "close_alert" => Ok(Self::CloseAlert),
            _ => Err(UnknownAction::Name(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_resolve_to_their_action() {
        for action in Action::ALL {
            assert_eq!(Action::from_tag(action.tag()), Ok(action));
        }
    }

    #[test]
    fn out_of_range_tag_is_rejected() {
        assert_eq!(Action::from_tag(5), Err(UnknownAction::Tag(5)));
        assert_eq!(Action::try_from(u8::MAX), Err(UnknownAction::Tag(u8::MAX)));
    }

    #[test]
    fn labels() {
        assert_eq!(Action::Dot.label(), ".");
        assert_eq!(Action::Hyphen.label(), "-");
        assert_eq!(Action::Space.label(), "_");
        assert_eq!(Action::Reset.label(), "Reset");
        assert_eq!(Action::CloseAlert.to_string(), "Close");
    }

    #[test]
    fn parse_symbolic_names() {
        assert_eq!("dot".parse(), Ok(Action::Dot));
        assert_eq!("Hyphen".parse(), Ok(Action::Hyphen));
        assert_eq!("SPACE".parse(), Ok(Action::Space));
        assert_eq!("reset".parse(), Ok(Action::Reset));
        assert_eq!("closeAlert".parse(), Ok(Action::CloseAlert));
        assert_eq!("close-alert".parse(), Ok(Action::CloseAlert));
    }

    #[test]
    fn parse_unknown_name() {
        assert_eq!("beep".parse::<Action>(), Err(UnknownAction::Name("beep".into())));
    }
}
