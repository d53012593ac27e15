//! Frame sink that draws to the real terminal.

use std::io;

use tui_typos_core::{FrameSink, RenderSnapshot};

use crate::fb::FrameBuffer;
use crate::game_view::TyposView;
use crate::renderer::TerminalRenderer;
use crate::types::FrameEvents;

/// Renders each snapshot with a [`TyposView`] and flushes it through a
/// [`TerminalRenderer`], ringing the bell on misses and mismatches.
pub struct TerminalSink<'a> {
    term: &'a mut TerminalRenderer,
    view: TyposView,
    fb: FrameBuffer,
    frame: u64,
}

impl<'a> TerminalSink<'a> {
    pub fn new(term: &'a mut TerminalRenderer, view: TyposView) -> Self {
        let vp = view.viewport();
        Self {
            term,
            view,
            fb: FrameBuffer::new(vp.width, vp.height),
            frame: 0,
        }
    }
}

impl FrameSink for TerminalSink<'_> {
    fn present(&mut self, snapshot: &RenderSnapshot, events: FrameEvents) -> io::Result<()> {
        self.view.render_into(snapshot, events, self.frame, &mut self.fb);
        self.frame = self.frame.wrapping_add(1);

        if events.any() {
            self.term.bell().map_err(io::Error::other)?;
        }
        self.term.draw_swap(&mut self.fb).map_err(io::Error::other)
    }
}
