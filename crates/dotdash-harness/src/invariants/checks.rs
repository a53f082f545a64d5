//! Standard invariant checks.
//!
//! These invariants capture behavioral properties that must always hold.
//! They verify WHAT must be true, not specific test scenarios.

use dotdash_app::button;
use dotdash_core::morse;

use super::{AppSnapshot, Invariant, InvariantKind, InvariantResult, Violation};

/// Current symbol holds only dots and hyphens.
pub struct SymbolAlphabet;

impl Invariant for SymbolAlphabet {
    fn kind(&self) -> InvariantKind {
        InvariantKind::SymbolAlphabet
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if let Some(bad) = state.current_symbol.chars().find(|&c| !morse::is_signal(c)) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("symbol {:?} contains {bad:?}", state.current_symbol),
            });
        }
        Ok(())
    }
}

/// A raised error flag means the offending symbol was discarded.
pub struct ErrorDiscardsSymbol;

impl Invariant for ErrorDiscardsSymbol {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ErrorDiscardsSymbol
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if state.is_error && !state.current_symbol.is_empty() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("error raised but symbol {:?} kept", state.current_symbol),
            });
        }
        Ok(())
    }
}

/// Every decoded character comes from the Morse table.
pub struct ResultFromTable;

impl Invariant for ResultFromTable {
    fn kind(&self) -> InvariantKind {
        InvariantKind::ResultFromTable
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        let decodable = |c: char| morse::entries().any(|(_, ch)| ch == c);
        if let Some(bad) = state.result.chars().find(|&c| !decodable(c)) {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("result {:?} contains {bad:?}", state.result),
            });
        }
        Ok(())
    }
}

/// Focus always points at an existing button.
pub struct FocusInBounds;

impl Invariant for FocusInBounds {
    fn kind(&self) -> InvariantKind {
        InvariantKind::FocusInBounds
    }

    fn check(&self, state: &AppSnapshot) -> InvariantResult {
        if state.focus >= button::BUTTONS.len() {
            return Err(Violation {
                invariant: self.kind(),
                message: format!("focus {} out of {} buttons", state.focus, button::BUTTONS.len()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_alphabet_rejects_other_chars() {
        let snapshot = AppSnapshot::default().with_symbol(".x-");
        assert!(SymbolAlphabet.check(&snapshot).is_err());
        assert!(SymbolAlphabet.check(&snapshot.with_symbol(".-")).is_ok());
    }

    #[test]
    fn error_with_symbol_is_violation() {
        let snapshot = AppSnapshot::default().with_error(true).with_symbol(".");
        let violation = ErrorDiscardsSymbol.check(&snapshot).unwrap_err();
        assert_eq!(violation.invariant, InvariantKind::ErrorDiscardsSymbol);
    }

    #[test]
    fn result_outside_table_is_violation() {
        assert!(ResultFromTable.check(&AppSnapshot::default().with_result("SOS?")).is_ok());
        assert!(ResultFromTable.check(&AppSnapshot::default().with_result("A#")).is_err());
        // The table only emits uppercase letters
        assert!(ResultFromTable.check(&AppSnapshot::default().with_result("Ab")).is_err());
    }

    #[test]
    fn focus_out_of_bounds() {
        assert!(FocusInBounds.check(&AppSnapshot::default().with_focus(3)).is_ok());
        assert!(FocusInBounds.check(&AppSnapshot::default().with_focus(4)).is_err());
    }
}
