//! Acceptance scenarios for the layout and scroll engine.
//!
//! Each test drives the public engine API through a complete prompter run.

use tprompt::engine::{self, FontMetrics, Phase, ScrollEvent, TickOutcome, Viewport};

fn run_to_finish(layout: &engine::Layout, speed: u32) -> u64 {
    let mut state = engine::reset(layout);
    state.transition(ScrollEvent::Start).unwrap();

    let mut ticks = 0;
    loop {
        ticks += 1;
        match engine::tick(state, layout, speed) {
            TickOutcome::Advanced(next) => state = next,
            TickOutcome::Finished(next) => {
                assert_eq!(next.phase, Phase::Finished);
                return ticks;
            }
            TickOutcome::Idle(_) => panic!("running session went idle"),
        }
    }
}

#[test]
fn welcome_sentence_fits_on_one_line() {
    let layout = engine::wrap(
        "Welcome to the Teleprompter.",
        Viewport::new(800, 600),
        &FontMetrics::estimated(36),
    );

    assert_eq!(layout.line_count(), 1);
    assert_eq!(layout.lines()[0].text, "Welcome to the Teleprompter.");
}

#[test]
fn twelve_hundred_pixels_at_one_pixel_per_tick_finish_after_1800_ticks() {
    // 97px measured glyph height + 3px spacing = 100px per line.
    let metrics = FontMetrics {
        font_size_px: 36,
        avg_char_width_px: 22,
        measured_line_height_px: Some(97),
    };
    let text = (1..=12)
        .map(|n| format!("Line {n}"))
        .collect::<Vec<_>>()
        .join("\n");
    let layout = engine::wrap(&text, Viewport::new(800, 600), &metrics);

    assert_eq!(layout.total_content_height(), 1200);
    assert_eq!(layout.total_scroll_distance(), 1800);

    let ticks = run_to_finish(&layout, 1);
    assert!(
        (1799..=1801).contains(&ticks),
        "expected about 1800 ticks, got {ticks}"
    );
}

#[test]
fn empty_text_gives_one_empty_line() {
    let layout = engine::wrap("", Viewport::new(800, 600), &FontMetrics::estimated(36));

    assert_eq!(layout.line_count(), 1);
    assert_eq!(layout.lines()[0].text, "");
}

#[test]
fn zero_viewport_uses_default_size() {
    let layout = engine::wrap(
        "Some text",
        Viewport::new(0, 0),
        &FontMetrics::estimated(36),
    );

    assert_eq!(layout.viewport_height(), 600);
    // 800px default: floor(720 / 22) = 32.
    assert_eq!(layout.char_budget(), 32);
    assert_eq!(engine::reset(&layout).y_pos, 600);
}

#[test]
fn narrow_window_wraps_long_paragraph() {
    let text = "Four score and seven years ago our fathers brought forth on this \
                continent a new nation conceived in liberty";
    let layout = engine::wrap(text, Viewport::new(300, 600), &FontMetrics::estimated(36));

    assert_eq!(layout.char_budget(), 20);
    assert!(layout.line_count() > 1);
    assert!(layout.lines().iter().all(|line| line.text.len() <= 20));
}

#[test]
fn pause_then_resume_continues_without_jump() {
    let layout = engine::wrap("Hello", Viewport::new(800, 600), &FontMetrics::estimated(36));
    let mut state = engine::reset(&layout);
    state.transition(ScrollEvent::Start).unwrap();

    state = engine::tick(state, &layout, 5).state();
    state.transition(ScrollEvent::Pause).unwrap();
    state = engine::tick(state, &layout, 5).state();
    state.transition(ScrollEvent::Resume).unwrap();
    state = engine::tick(state, &layout, 5).state();

    assert_eq!(state.y_pos, 590);
}

#[test]
fn invalid_transitions_are_refused() {
    let layout = engine::wrap("Hello", Viewport::new(800, 600), &FontMetrics::estimated(36));
    let mut state = engine::reset(&layout);

    assert!(state.transition(ScrollEvent::Pause).is_err());
    assert!(state.transition(ScrollEvent::Resume).is_err());
    assert_eq!(state.phase, Phase::Stopped);
}

#[test]
fn reset_mid_run_keeps_running() {
    let layout = engine::wrap("Hello", Viewport::new(800, 600), &FontMetrics::estimated(36));
    let mut state = engine::reset(&layout);
    state.transition(ScrollEvent::Start).unwrap();
    for _ in 0..50 {
        state = engine::tick(state, &layout, 3).state();
    }

    let reset = engine::reset_from(&state, &layout);

    assert_eq!(reset.y_pos, 600);
    assert_eq!(reset.progress, 0.0);
    assert_eq!(reset.phase, Phase::Running);
}
