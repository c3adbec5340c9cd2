//! Keypad layout and event routing.
//!
//! Pure routing: input symbols (button ids, key names) map to
//! [`KeypadAction`]s, and [`dispatch`] maps actions onto the matching
//! [`CalculatorApp`] operation. No rendering logic lives here.

use crate::app::{CalculatorApp, Screen};
use crate::core::Operation;

/// Actions that input events can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Enter a digit (0-9)
    Digit(u8),
    /// Enter a decimal point
    Decimal,
    /// Enter a binary operator
    Operator(Operation),
    /// Evaluate the expression
    Equals,
    /// Clear all state
    Clear,
    /// Delete the last character
    Delete,
    /// Divide the current value by 100
    Percent,
}

impl KeypadAction {
    /// Returns the character this action enters, if any
    #[must_use]
    pub fn to_char(&self) -> Option<char> {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10),
            Self::Decimal => Some('.'),
            Self::Operator(op) => op.symbol().chars().next(),
            Self::Equals | Self::Clear | Self::Delete | Self::Percent => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "C".to_string(),
            Self::Delete => "⌫".to_string(),
            Self::Percent => "%".to_string(),
        }
    }
}

/// Routes an action to the matching state-machine operation
pub fn dispatch(app: &mut CalculatorApp, action: KeypadAction) -> Screen {
    match action {
        KeypadAction::Digit(d) => app.enter_value((b'0' + d) as char),
        KeypadAction::Decimal => app.enter_value('.'),
        KeypadAction::Operator(op) => app.enter_operator(op),
        KeypadAction::Equals => app.compute_result(),
        KeypadAction::Clear => app.clear_all(),
        KeypadAction::Delete => app.delete_last(),
        KeypadAction::Percent => app.apply_percent(),
    }
}

/// Maps a keyboard key name to an action
#[must_use]
pub fn key_to_action(key: &str) -> Option<KeypadAction> {
    match key {
        "0" => Some(KeypadAction::Digit(0)),
        "1" => Some(KeypadAction::Digit(1)),
        "2" => Some(KeypadAction::Digit(2)),
        "3" => Some(KeypadAction::Digit(3)),
        "4" => Some(KeypadAction::Digit(4)),
        "5" => Some(KeypadAction::Digit(5)),
        "6" => Some(KeypadAction::Digit(6)),
        "7" => Some(KeypadAction::Digit(7)),
        "8" => Some(KeypadAction::Digit(8)),
        "9" => Some(KeypadAction::Digit(9)),
        "." => Some(KeypadAction::Decimal),
        "+" => Some(KeypadAction::Operator(Operation::Add)),
        "-" => Some(KeypadAction::Operator(Operation::Subtract)),
        "*" | "×" => Some(KeypadAction::Operator(Operation::Multiply)),
        "/" | "÷" => Some(KeypadAction::Operator(Operation::Divide)),
        "%" => Some(KeypadAction::Percent),
        "Enter" | "=" => Some(KeypadAction::Equals),
        "Backspace" | "Delete" => Some(KeypadAction::Delete),
        "Escape" | "c" | "C" => Some(KeypadAction::Clear),
        _ => None,
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// Stable element id for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButtonDef {
    /// Creates a new button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Equals => "btn-equals".to_string(),
            KeypadAction::Clear => "btn-clear".to_string(),
            KeypadAction::Delete => "btn-delete".to_string(),
            KeypadAction::Percent => "btn-percent".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
        }
    }
}

/// Returns a name for an operator (for element ids)
const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// The standard calculator keypad layout
///
/// ```text
/// [ C ] [ ⌫ ] [ % ] [ ÷ ]
/// [ 7 ] [ 8 ] [ 9 ] [ × ]
/// [ 4 ] [ 5 ] [ 6 ] [ - ]
/// [ 1 ] [ 2 ] [ 3 ] [ + ]
/// [ 0 ] [ . ] [ = ]
/// ```
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButtonDef>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: C ⌫ % ÷
            KeypadButtonDef::new(KeypadAction::Clear, 0, 0),
            KeypadButtonDef::new(KeypadAction::Delete, 0, 1),
            KeypadButtonDef::new(KeypadAction::Percent, 0, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Divide), 0, 3),
            // Row 1: 7 8 9 ×
            KeypadButtonDef::new(KeypadAction::Digit(7), 1, 0),
            KeypadButtonDef::new(KeypadAction::Digit(8), 1, 1),
            KeypadButtonDef::new(KeypadAction::Digit(9), 1, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Multiply), 1, 3),
            // Row 2: 4 5 6 -
            KeypadButtonDef::new(KeypadAction::Digit(4), 2, 0),
            KeypadButtonDef::new(KeypadAction::Digit(5), 2, 1),
            KeypadButtonDef::new(KeypadAction::Digit(6), 2, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Subtract), 2, 3),
            // Row 3: 1 2 3 +
            KeypadButtonDef::new(KeypadAction::Digit(1), 3, 0),
            KeypadButtonDef::new(KeypadAction::Digit(2), 3, 1),
            KeypadButtonDef::new(KeypadAction::Digit(3), 3, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Add), 3, 3),
            // Row 4: 0 . =   (last grid cell intentionally empty)
            KeypadButtonDef::new(KeypadAction::Digit(0), 4, 0),
            KeypadButtonDef::new(KeypadAction::Decimal, 4, 1),
            KeypadButtonDef::new(KeypadAction::Equals, 4, 2),
        ];
        Self {
            buttons,
            rows: 5,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Returns the button at the given grid position, if any
    #[must_use]
    pub fn button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by the character it enters
    #[must_use]
    pub fn find_button_by_char(&self, ch: char) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.action.to_char() == Some(ch))
    }

    /// Maps a button click to its action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|b| b.action)
    }
}
