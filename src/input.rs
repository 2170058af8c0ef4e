//! Keyboard input: raw key reads and their mapping to menu signals.
//!
//! [`map_key`] is pure; [`read_signal`] is the effects boundary. Raw mode
//! is scoped to the single blocking read and restored before returning, so
//! ordinary line-oriented printing works everywhere else.

use std::io::{self, Write};
use std::str::FromStr;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

// ============================================================================
// SIGNALS
// ============================================================================

/// A raw key reduced to the vocabulary the choose loop consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Move the highlight up one row.
    Up,
    /// Move the highlight down one row.
    Down,
    /// A digit key '1'..'9'.
    Digit(u8),
    /// Enter: confirm the highlighted row.
    Confirm,
    /// Any other key.
    Other,
}

/// Map a key event to a menu signal.
///
/// W/K and the up arrow move up; S/J, Tab and the down arrow move down;
/// digits and Enter pass through for the loop to act on; everything else
/// is reported as [`Signal::Other`] and ignored upstream.
pub fn map_key(key: KeyEvent) -> Signal {
    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => Signal::Up,
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('s' | 'S' | 'j' | 'J') => Signal::Down,
        KeyCode::Enter => Signal::Confirm,
        KeyCode::Char(c @ '1'..='9') => Signal::Digit(c as u8 - b'0'),
        _ => Signal::Other,
    }
}

// ============================================================================
// EFFECTS
// ============================================================================

/// Block for one key press and map it, with raw mode scoped to the read.
///
/// Ctrl+C surfaces as an [`io::ErrorKind::Interrupted`] error so callers
/// can unwind out of an otherwise endless selection loop.
pub fn read_signal() -> io::Result<Signal> {
    enable_raw_mode()?;
    let result = read_key_event();
    disable_raw_mode()?;

    let key = result?;
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Err(io::Error::new(
            io::ErrorKind::Interrupted,
            "interrupted by Ctrl+C",
        ));
    }
    Ok(map_key(key))
}

fn read_key_event() -> io::Result<KeyEvent> {
    loop {
        match event::read()? {
            Event::Key(key) => return Ok(key),
            _ => {} // mouse, resize, focus — not keys
        }
    }
}

/// Print `prompt`, read one line from stdin, parse it.
///
/// A failed parse yields the type's default value; range-constrained
/// callers treat that as out-of-range and re-prompt.
pub fn ask<T: FromStr + Default>(prompt: &str) -> io::Result<T> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().parse().unwrap_or_default())
}

// ============================================================================
// TESTS
// ============================================================================
