//! Sumar - two-register arithmetic calculator engine
//!
//! The engine keeps a committed expression register and a current-entry
//! register, applies discrete input events to them (digits, operators,
//! clear, delete, percent, equals), and returns a render pair after every
//! event. Expression evaluation goes through a sandboxed tokenizer +
//! recursive descent parser; no dynamic code execution is involved.
//!
//! # Example
//!
//! ```rust
//! use sumar::prelude::*;
//!
//! let mut app = CalculatorApp::new();
//! for key in ["1", "2", "+", "3"] {
//!     let action = key_to_action(key).unwrap();
//!     dispatch(&mut app, action);
//! }
//! let screen = dispatch(&mut app, KeypadAction::Equals);
//! assert_eq!(screen.entry, "15");
//! assert_eq!(screen.expression, "12+3 =");
//! ```
//!
//! One-shot evaluation is a pure function:
//!
//! ```rust
//! assert_eq!(sumar::core::evaluate("3+2*2"), Ok(7.0));
//! assert_eq!(sumar::core::evaluate("0.1+0.2"), Ok(0.3));
//! assert!(sumar::core::evaluate("3/0").is_err());
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod app;
pub mod core;
pub mod keypad;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::app::{CalculatorApp, Screen, ERROR_RESET_DELAY, RESULT_MARKER};
    pub use crate::core::{evaluate, CalcError, CalcResult, ErrorKind, Operation};
    pub use crate::keypad::{dispatch, key_to_action, Keypad, KeypadAction};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut app = CalculatorApp::new();
        let screen = dispatch(&mut app, KeypadAction::Digit(4));
        assert_eq!(screen.entry, "4");
        assert_eq!(evaluate("2 + 3"), Ok(5.0));
    }

    #[test]
    fn test_keyboard_driven_calculation() {
        let mut app = CalculatorApp::new();
        for key in ["5", "0", "%"] {
            dispatch(&mut app, key_to_action(key).unwrap());
        }
        assert_eq!(app.render().entry, "0.5");
    }

    #[test]
    fn test_error_kind_split() {
        assert_eq!(
            evaluate("3/0").unwrap_err().kind(),
            ErrorKind::Math
        );
        assert_eq!(
            evaluate("3+").unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
    }
}
