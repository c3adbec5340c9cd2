//! Calculator application state: the two-register input machine.
//!
//! `CalculatorApp` owns the committed expression register and the
//! current-entry register, applies input events to them, and returns the
//! rendered [`Screen`] after every event. Evaluation failures switch the
//! display into an error state that clears itself after
//! [`ERROR_RESET_DELAY`] via [`CalculatorApp::poll_reset`].

use std::time::{Duration, Instant};

use serde::Serialize;

use crate::core::{evaluate, CalcError, Operation};

/// Suffix appended to the expression register after a completed
/// computation. Display-only; it is never fed back into the evaluator.
pub const RESULT_MARKER: &str = " =";

/// How long the "Error" display stays up before the state clears itself
pub const ERROR_RESET_DELAY: Duration = Duration::from_millis(900);

/// The render pair emitted after every operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Screen {
    /// Committed expression text; empty when there is nothing to show
    pub expression: String,
    /// Current entry text; `"0"` when empty, `"Error"` while the error
    /// display is active
    pub entry: String,
}

/// Calculator application state
#[derive(Debug, Default)]
pub struct CalculatorApp {
    /// Committed terms and operators
    expression: String,
    /// Operand currently being typed
    current: String,
    /// Set while the error display is shown; cleared by `poll_reset` or by
    /// the next input event
    reset_deadline: Option<Instant>,
}

impl CalculatorApp {
    /// Creates a new calculator with both registers empty
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the committed expression register
    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    /// Returns the current-entry register
    #[must_use]
    pub fn current(&self) -> &str {
        &self.current
    }

    /// Returns true while the error display is active
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.reset_deadline.is_some()
    }

    /// Returns the instant at which the error display will clear itself
    #[must_use]
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.reset_deadline
    }

    /// Renders the current state
    #[must_use]
    pub fn render(&self) -> Screen {
        let entry = if self.is_error() {
            "Error".to_string()
        } else if self.current.is_empty() {
            "0".to_string()
        } else {
            self.current.clone()
        };
        Screen {
            expression: self.expression.trim().to_string(),
            entry,
        }
    }

    /// Enters a digit or decimal point.
    ///
    /// A lone `"0"` is never extended to `"00"` and is replaced outright by
    /// any other digit; a second decimal point is ignored. Typing after a
    /// completed computation starts a new calculation.
    pub fn enter_value(&mut self, ch: char) -> Screen {
        self.cancel_pending_reset();
        if !ch.is_ascii_digit() && ch != '.' {
            return self.render();
        }

        if self.unseal() {
            // Digit after a finished result starts over
            self.current.clear();
        }

        // A finished result shown in both registers also starts over
        if !self.expression.is_empty()
            && !self.ends_with_operator()
            && self.current == self.expression
        {
            self.expression.clear();
            self.current.clear();
        }

        if ch == '0' && self.current == "0" {
            return self.render();
        }
        if self.current == "0" && ch != '.' {
            self.current = ch.to_string();
            return self.render();
        }
        if ch == '.' && self.current.contains('.') {
            return self.render();
        }

        self.current.push(ch);
        self.render()
    }

    /// Enters a binary operator.
    ///
    /// With both registers empty only `-` is accepted, seeding a negative
    /// first operand. Otherwise the current entry is committed and the
    /// operator appended; pressing a second operator in a row replaces the
    /// first instead of stacking.
    pub fn enter_operator(&mut self, op: Operation) -> Screen {
        self.cancel_pending_reset();
        self.unseal();

        if self.current.is_empty() && self.expression.is_empty() {
            if op == Operation::Subtract {
                self.current.push('-');
            }
            return self.render();
        }

        if !self.current.is_empty() {
            self.expression.push_str(&self.current);
            self.current.clear();
        }

        if self.ends_with_operator() {
            self.expression.pop();
        }
        self.expression.push_str(op.symbol());
        self.render()
    }

    /// Removes the last character of the current entry, or of the
    /// expression register when the entry is empty
    pub fn delete_last(&mut self) -> Screen {
        self.cancel_pending_reset();
        self.unseal();

        if !self.current.is_empty() {
            self.current.pop();
        } else if !self.expression.is_empty() {
            self.expression.pop();
        }
        self.render()
    }

    /// Resets both registers and cancels any pending error reset
    pub fn clear_all(&mut self) -> Screen {
        self.expression.clear();
        self.current.clear();
        self.reset_deadline = None;
        self.render()
    }

    /// Divides the current entry (or, when empty, the whole committed
    /// expression) by 100
    pub fn apply_percent(&mut self) -> Screen {
        self.cancel_pending_reset();
        self.unseal();

        if !self.current.is_empty() {
            match evaluate(&self.current) {
                Ok(value) => self.current = format_number(value / 100.0),
                Err(e) => return self.show_error(&e),
            }
        } else if !self.expression.is_empty() {
            match evaluate(&self.expression) {
                Ok(value) => {
                    self.current = format_number(value / 100.0);
                    self.expression.clear();
                }
                Err(e) => return self.show_error(&e),
            }
        }
        self.render()
    }

    /// Evaluates the concatenation of both registers.
    ///
    /// On success the expression register keeps the evaluated source
    /// followed by the completion marker and the entry register shows the
    /// result. Pressing equals with nothing entered is a no-op.
    pub fn compute_result(&mut self) -> Screen {
        self.cancel_pending_reset();
        self.unseal();

        let candidate = format!("{}{}", self.expression, self.current);
        if candidate.is_empty() {
            return self.render();
        }

        match evaluate(&candidate) {
            Ok(value) => {
                self.expression = candidate + RESULT_MARKER;
                self.current = format_number(value);
                self.render()
            }
            Err(e) => self.show_error(&e),
        }
    }

    /// Clears the error display once its deadline has passed.
    ///
    /// Drivers call this from their event loop; returns true when the
    /// timed reset fired.
    pub fn poll_reset(&mut self, now: Instant) -> bool {
        match self.reset_deadline {
            Some(deadline) if now >= deadline => {
                tracing::debug!("error display expired, clearing state");
                self.clear_all();
                true
            }
            _ => false,
        }
    }

    /// Switches into the error display and arms the timed reset
    fn show_error(&mut self, cause: &CalcError) -> Screen {
        tracing::warn!(%cause, "evaluation failed");
        self.reset_deadline = Some(Instant::now() + ERROR_RESET_DELAY);
        self.render()
    }

    /// Input during the error display cancels the timer and performs the
    /// reset immediately, so the timer never clobbers later state
    fn cancel_pending_reset(&mut self) {
        if self.reset_deadline.is_some() {
            self.clear_all();
        }
    }

    /// Discards a spent `expr =` prefix so the marker is never reparsed.
    ///
    /// Returns true if the previous calculation had completed; the result
    /// stays in the entry register as the operand to continue from.
    fn unseal(&mut self) -> bool {
        if self.expression.ends_with(RESULT_MARKER) {
            self.expression.clear();
            true
        } else {
            false
        }
    }

    fn ends_with_operator(&self) -> bool {
        self.expression
            .chars()
            .last()
            .is_some_and(|ch| matches!(ch, '+' | '-' | '*' | '/'))
    }
}

/// Formats a result value for display (no trailing zeros)
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        let formatted = format!("{value:.12}");
        let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
        trimmed.to_string()
    }
}
