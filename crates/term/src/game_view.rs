//! TyposView: maps a `core::RenderSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Screen layout (rows top to bottom):
//!
//! ```text
//! 0      border + banner
//! 1      laser base
//! 2..h-3 laser beam; the word travels on row h/2
//! h-2    laser base
//! h-1    border + status line
//! ```

use arrayvec::ArrayVec;
use rand::Rng;

use crate::core::RenderSnapshot;
use crate::fb::{CellStyle, FrameBuffer, GREEN, RED, WHITE, YELLOW};
use crate::types::{FrameEvents, GameConfig};

/// Number of background stars
pub const N_STARS: usize = 40;

/// Banner column on the top row
const BANNER_X: u16 = 28;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<&GameConfig> for Viewport {
    fn from(config: &GameConfig) -> Self {
        Self::new(config.window_width, config.window_height)
    }
}

/// Fixed background star positions, chosen once per session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Starfield {
    stars: ArrayVec<(u16, u16), N_STARS>,
}

impl Starfield {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, viewport: Viewport) -> Self {
        let mut stars = ArrayVec::new();
        if viewport.width == 0 || viewport.height == 0 {
            return Self { stars };
        }
        for _ in 0..N_STARS {
            stars.push((
                rng.random_range(0..viewport.width),
                rng.random_range(0..viewport.height),
            ));
        }
        Self { stars }
    }

    pub fn stars(&self) -> &[(u16, u16)] {
        &self.stars
    }
}

/// Renderer for the typing game screen.
pub struct TyposView {
    viewport: Viewport,
    stars: Starfield,
    banner: String,
}

impl TyposView {
    pub fn new(viewport: Viewport, stars: Starfield, banner: impl Into<String>) -> Self {
        Self {
            viewport,
            stars,
            banner: banner.into(),
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Render one frame into an existing framebuffer.
    ///
    /// `frame` only drives blinking: stars and the laser alternate bold on
    /// odd and even frames. A miss draws the whole frame inverted.
    pub fn render_into(
        &self,
        snap: &RenderSnapshot,
        events: FrameEvents,
        frame: u64,
        fb: &mut FrameBuffer,
    ) {
        let Viewport { width: w, height: h } = self.viewport;
        fb.resize(w, h);
        fb.clear();

        let blink = frame % 2 == 1;

        for (i, &(x, y)) in self.stars.stars().iter().enumerate() {
            let lit = blink != (i % 2 == 1);
            fb.put_char(x, y, '.', CellStyle::fg(WHITE).bold(lit));
        }

        let bar = CellStyle::fg(GREEN).reversed();
        if h > 0 {
            fb.fill_row(0, ' ', bar);
            fb.fill_row(h - 1, ' ', bar);
            fb.put_str(0, h - 1, &snap.status_line(), bar);
        }

        fb.put_str(snap.word_column, h / 2, &snap.word, CellStyle::default());

        self.draw_laser(fb, snap.laser_column, blink);

        let banner_x = BANNER_X.min(w.saturating_sub(self.banner.chars().count() as u16));
        fb.put_str(banner_x, 0, &self.banner, bar.bold(true));

        if events.missed {
            fb.invert();
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &RenderSnapshot, events: FrameEvents, frame: u64) -> FrameBuffer {
        let mut fb = FrameBuffer::new(self.viewport.width, self.viewport.height);
        self.render_into(snap, events, frame, &mut fb);
        fb
    }

    fn draw_laser(&self, fb: &mut FrameBuffer, x: u16, bold: bool) {
        let h = self.viewport.height;
        if h < 4 {
            return;
        }

        let base = CellStyle::fg(RED).reversed();
        fb.put_str(x.saturating_sub(1), 1, "   ", base);
        fb.put_str(x.saturating_sub(1), h - 2, "   ", base);

        let beam = CellStyle::fg(YELLOW).bold(bold);
        for y in 2..h - 2 {
            fb.put_char(x, y, '|', beam);
        }
    }
}
