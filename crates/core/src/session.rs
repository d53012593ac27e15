//! Session loop - the single-threaded frame loop driving a [`GameState`]
//!
//! Each iteration:
//!
//! 1. hands a snapshot plus pending feedback to the [`FrameSink`]
//! 2. waits on the [`KeySource`] until a key arrives or the scroll deadline
//! 3. scrolls the word if the deadline has passed (re-arming the timer)
//! 4. interprets the key, if any
//! 5. retires the word if it is used up
//!
//! The deadline check in step 3 does not depend on step 2's outcome, so a
//! steady stream of keys cannot hold the word in place.
//!
//! Terminal I/O is injected through the two traits, which keeps the loop
//! runnable in tests with a [`ManualClock`](crate::timing::ManualClock) and a
//! scripted key source.

use std::io;
use std::time::Duration;

use crate::game_state::GameState;
use crate::snapshot::RenderSnapshot;
use crate::timing::{Clock, ScrollTimer};
use crate::types::{FrameEvents, KeyInput};

/// Blocking keyboard input with a timeout
pub trait KeySource {
    /// Wait up to `timeout` for one key. `Ok(None)` means nothing usable
    /// arrived; callers must not assume the full timeout elapsed.
    fn poll_or_timeout(&mut self, timeout: Duration) -> io::Result<Option<KeyInput>>;
}

/// Receives one frame per loop iteration
pub trait FrameSink {
    fn present(&mut self, snapshot: &RenderSnapshot, events: FrameEvents) -> io::Result<()>;
}

/// What one iteration did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    /// The interrupt key was pressed
    Quit,
}

/// Final figures of a finished session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionEnd {
    pub score: i64,
    pub completed_words: u32,
}

/// A running game: state, clock and scroll deadline
pub struct Session<C: Clock> {
    state: GameState,
    clock: C,
    timer: ScrollTimer,
    snapshot: RenderSnapshot,
}

impl<C: Clock> Session<C> {
    pub fn new(state: GameState, clock: C) -> Self {
        let timer = ScrollTimer::start(clock.now(), state.scroll_delay());
        Self {
            state,
            clock,
            timer,
            snapshot: RenderSnapshot::default(),
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn timer(&self) -> &ScrollTimer {
        &self.timer
    }

    /// Run until the interrupt key.
    pub fn run<K, F>(&mut self, keys: &mut K, sink: &mut F) -> io::Result<SessionEnd>
    where
        K: KeySource,
        F: FrameSink,
    {
        loop {
            self.present(sink)?;
            if self.step(keys)? == Step::Quit {
                return Ok(SessionEnd {
                    score: self.state.score(),
                    completed_words: self.state.completed_words(),
                });
            }
        }
    }

    /// Draw the current frame and hand over pending feedback.
    pub fn present<F: FrameSink>(&mut self, sink: &mut F) -> io::Result<()> {
        self.state.snapshot_into(&mut self.snapshot);
        let events = self.state.take_events();
        sink.present(&self.snapshot, events)
    }

    /// Wait for input or the deadline, then apply whatever happened.
    pub fn step<K: KeySource>(&mut self, keys: &mut K) -> io::Result<Step> {
        let wait = self.timer.wait_time(self.clock.now());
        let key = keys.poll_or_timeout(wait)?;

        let now = self.clock.now();
        if self.timer.is_due(now) {
            self.state.advance_word();
            self.timer.reset(now, self.state.scroll_delay());
        }

        match key {
            Some(KeyInput::Interrupt) => return Ok(Step::Quit),
            Some(KeyInput::Char(ch)) => {
                self.state.apply_key(ch);
            }
            None => {}
        }

        self.state.retire_if_done();
        Ok(Step::Continue)
    }
}
