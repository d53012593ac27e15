//! Terminal-backed key source.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use tui_typos_core::KeySource;

use crate::map::map_key_event;
use crate::types::KeyInput;

/// Reads keys from the controlling terminal via crossterm.
///
/// The terminal must already be in raw mode, otherwise Ctrl-C raises SIGINT
/// instead of arriving as a key.
#[derive(Debug, Default)]
pub struct TerminalKeys;

impl TerminalKeys {
    pub fn new() -> Self {
        Self
    }
}

impl KeySource for TerminalKeys {
    fn poll_or_timeout(&mut self, timeout: Duration) -> io::Result<Option<KeyInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        // Resize, focus and mouse events wake the loop early; it simply redraws.
        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}
