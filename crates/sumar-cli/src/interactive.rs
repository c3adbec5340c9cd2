//! Interactive calculator session on a raw-mode terminal.
//!
//! Keys are routed through the engine's keyboard table into
//! [`dispatch`]; the event loop polls with a short timeout so the timed
//! error reset fires without user input.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Print, Stylize},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use sumar::prelude::*;

/// Event-loop poll timeout; bounds the latency of the timed error reset
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Display width of the two register lines
const DISPLAY_WIDTH: usize = 23;

/// Runs the interactive session until the user quits
pub fn run() -> io::Result<()> {
    let mut app = CalculatorApp::new();
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(stdout, EnterAlternateScreen, Hide)?;

    let result = event_loop(&mut app, &mut stdout);

    execute!(stdout, Show, LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn event_loop(app: &mut CalculatorApp, stdout: &mut io::Stdout) -> io::Result<()> {
    let keypad = Keypad::new();
    draw(stdout, &keypad, &app.render())?;

    loop {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if is_quit(&key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key(&key) {
                        let screen = dispatch(app, action);
                        draw(stdout, &keypad, &screen)?;
                    }
                }
                Event::Resize(..) => draw(stdout, &keypad, &app.render())?,
                _ => {}
            }
        }
        // Drives the delayed clear after an "Error" display
        if app.poll_reset(Instant::now()) {
            draw(stdout, &keypad, &app.render())?;
        }
    }
}

/// Returns true for quit chords (q, Ctrl-C, Ctrl-Q)
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Maps a terminal key event onto the engine's keyboard table
fn map_key(key: &KeyEvent) -> Option<KeypadAction> {
    match key.code {
        KeyCode::Char(c) => key_to_action(&c.to_string()),
        KeyCode::Enter => key_to_action("Enter"),
        KeyCode::Backspace => key_to_action("Backspace"),
        KeyCode::Delete => key_to_action("Delete"),
        KeyCode::Esc => key_to_action("Escape"),
        _ => None,
    }
}

fn draw(stdout: &mut io::Stdout, keypad: &Keypad, screen: &Screen) -> io::Result<()> {
    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let expression = format!("{:>width$}", screen.expression, width = DISPLAY_WIDTH);
    let entry = format!("{:>width$}", screen.entry, width = DISPLAY_WIDTH);
    queue!(stdout, MoveTo(0, 0), Print(expression.dim()))?;
    if screen.entry == "Error" {
        queue!(stdout, MoveTo(0, 1), Print(entry.red().bold()))?;
    } else {
        queue!(stdout, MoveTo(0, 1), Print(entry.bold()))?;
    }

    let (rows, cols) = keypad.dimensions();
    for row in 0..rows {
        let mut line = String::new();
        for col in 0..cols {
            match keypad.button_at(row, col) {
                Some(btn) => line.push_str(&format!("[ {} ] ", btn.action.label())),
                None => line.push_str("      "),
            }
        }
        let y = u16::try_from(row).unwrap_or(u16::MAX).saturating_add(3);
        queue!(stdout, MoveTo(0, y), Print(line))?;
    }

    queue!(
        stdout,
        MoveTo(0, 9),
        Print("keys: 0-9 . + - * / % = Enter Backspace Esc(clear) q(quit)".dim())
    )?;
    stdout.flush()
}
