//! Reference model of the symbol processor.
//!
//! The model keeps signals as booleans (`true` is a long signal) and decodes
//! by scanning the table, independent of the processor's string buffer. Tests
//! apply the same [`Operation`]s to the model and the real
//! [`dotdash_core::Processor`] and compare their observable state.

use arbitrary::Arbitrary;
use dotdash_core::{Action, morse};

/// One input applied to both model and processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum Operation {
    /// Known action.
    Act(ModelAction),
    /// Raw button tag, possibly out of range.
    Tag(u8),
}

/// Mirror of [`Action`] that can derive [`Arbitrary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Arbitrary)]
pub enum ModelAction {
    /// Short signal.
    Dot,
    /// Long signal.
    Hyphen,
    /// Terminate symbol.
    Space,
    /// Clear symbol and result.
    Reset,
    /// Clear error flag.
    CloseAlert,
}

impl From<ModelAction> for Action {
    fn from(action: ModelAction) -> Self {
        match action {
            ModelAction::Dot => Action::Dot,
            ModelAction::Hyphen => Action::Hyphen,
            ModelAction::Space => Action::Space,
            ModelAction::Reset => Action::Reset,
            ModelAction::CloseAlert => Action::CloseAlert,
        }
    }
}

/// Reference processor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModelProcessor {
    signals: Vec<bool>,
    decoded: Vec<char>,
    error: bool,
    notifications: usize,
}

impl ModelProcessor {
    /// Create an empty model.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one operation. Every operation counts as one notification.
    pub fn apply(&mut self, op: Operation) {
        self.notifications += 1;
        let action = match op {
            Operation::Act(action) => action,
            Operation::Tag(0) => ModelAction::Dot,
            Operation::Tag(1) => ModelAction::Hyphen,
            Operation::Tag(2) => ModelAction::Space,
            Operation::Tag(3) => ModelAction::Reset,
            Operation::Tag(4) => ModelAction::CloseAlert,
            Operation::Tag(_) => return,
        };

        match action {
            ModelAction::Dot => self.signals.push(false),
            ModelAction::Hyphen => self.signals.push(true),
            ModelAction::Space => {
                let signals = std::mem::take(&mut self.signals);
                match Self::lookup(&signals) {
                    Some(c) => self.decoded.push(c),
                    None => self.error = true,
                }
            },
            ModelAction::Reset => {
                self.signals.clear();
                self.decoded.clear();
            },
            ModelAction::CloseAlert => self.error = false,
        }
    }

    fn lookup(signals: &[bool]) -> Option<char> {
        morse::entries().find_map(|(pattern, c)| {
            let matches = pattern.len() == signals.len()
                && pattern.chars().zip(signals).all(|(p, &long)| (p == morse::HYPHEN) == long);
            matches.then_some(c)
        })
    }

    /// Current symbol rendered as a pattern.
    pub fn current_symbol(&self) -> String {
        self.signals.iter().map(|&long| if long { morse::HYPHEN } else { morse::DOT }).collect()
    }

    /// Decoded result.
    pub fn result(&self) -> String {
        self.decoded.iter().collect()
    }

    /// Error flag.
    pub fn is_error(&self) -> bool {
        self.error
    }

    /// Number of operations applied.
    pub fn notifications(&self) -> usize {
        self.notifications
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_decodes_sos() {
        let mut model = ModelProcessor::new();
        for action in [
            ModelAction::Dot,
            ModelAction::Dot,
            ModelAction::Dot,
            ModelAction::Space,
            ModelAction::Hyphen,
            ModelAction::Hyphen,
            ModelAction::Hyphen,
            ModelAction::Space,
        ] {
            model.apply(Operation::Act(action));
        }
        assert_eq!(model.result(), "SO");
        assert_eq!(model.notifications(), 8);
    }

    #[test]
    fn model_ignores_unknown_tag() {
        let mut model = ModelProcessor::new();
        model.apply(Operation::Tag(0));
        model.apply(Operation::Tag(200));

        assert_eq!(model.current_symbol(), ".");
        assert_eq!(model.notifications(), 2);
    }
}
