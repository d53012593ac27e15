use tui_typos::core::{GameState, WordSource};
use tui_typos::term::{Starfield, TyposView, Viewport};
use tui_typos::types::{FrameEvents, GameConfig};

fn game(words: &[&str], config: GameConfig) -> GameState {
    GameState::new(config, WordSource::from_strs(words).unwrap(), 1).unwrap()
}

fn view(config: &GameConfig) -> TyposView {
    TyposView::new(Viewport::from(config), Starfield::default(), "tui-typos v0.1.0")
}

#[test]
fn term_view_draws_new_word_at_right_edge() {
    let config = GameConfig::default();
    let state = game(&["elephant"], config);
    let fb = view(&config).render(&state.snapshot(), FrameEvents::default(), 0);

    // Spawned at column 79: only the first letter fits.
    assert_eq!(fb.get(79, 12).unwrap().ch, 'e');
    let row = fb.row_text(12);
    assert_eq!(row.chars().nth(5), Some('|'));
    assert_eq!(row.trim(), format!("|{}e", " ".repeat(73)));
}

#[test]
fn term_view_follows_word_and_laser() {
    let config = GameConfig::default();
    let mut state = game(&["dog"], config);
    for _ in 0..30 {
        state.advance_word();
    }
    state.apply_key('d');

    let fb = view(&config).render(&state.snapshot(), FrameEvents::default(), 0);
    assert_eq!(fb.get(49, 12).unwrap().ch, 'o');
    assert_eq!(fb.get(50, 12).unwrap().ch, 'g');
    assert_eq!(fb.get(5, 12).unwrap().ch, '|');
}

#[test]
fn term_view_status_line_tracks_score() {
    let config = GameConfig::default();
    let mut state = game(&["dog"], config);
    state.apply_key('x');

    let fb = view(&config).render(&state.snapshot(), FrameEvents::default(), 0);
    assert!(fb
        .row_text(23)
        .starts_with("Words ok: 0, scroll delay: 0.80, points: -1, # words: 1"));
}

#[test]
fn term_view_flashes_on_miss() {
    let config = GameConfig::default();
    let mut state = game(&["dog"], config);
    while !state.advance_word() {}

    let events = state.take_events();
    assert!(events.missed);
    let fb = view(&config).render(&state.snapshot(), events, 0);
    // Word cells are normally plain; the flash reverses them.
    assert!(fb.get(6, 12).unwrap().style.reverse);
    assert_eq!(fb.get(6, 12).unwrap().ch, 'o');
}

#[test]
fn term_view_fits_small_window() {
    let config = GameConfig::for_window(30, 10);
    let state = game(&["a"], config);
    let fb = view(&config).render(&state.snapshot(), FrameEvents::default(), 3);

    assert_eq!(fb.width(), 30);
    assert_eq!(fb.height(), 10);
    // Banner is pulled left so it stays on screen.
    assert!(fb.row_text(0).ends_with("tui-typos v0.1.0"));
    assert_eq!(fb.get(29, 5).unwrap().ch, 'a');
}
