// Integration tests for the presentation state machine

use std::time::{Duration, Instant};

use seatshow::content::{SlideKind, SLIDES, STUDENT_QUEUE};
use seatshow::presentation::{
    NavIntent, Presenter, Seat, SeatGrid, COLS, MAX_DIAGRAM_STEPS, MAX_FLOWCHART_STEPS, ROWS,
};

const COOLDOWN: Duration = Duration::from_millis(500);

/// Well past the cooldown
const LATER: Duration = Duration::from_secs(1);

fn presenter() -> Presenter {
    let mut presenter = Presenter::with_default_deck(COOLDOWN);
    presenter.start();
    presenter
}

fn slide_index(kind: SlideKind) -> usize {
    SLIDES.iter().position(|s| s.kind == kind).unwrap()
}

#[test]
fn test_grid_is_pure_function_of_step() {
    let expected: [&[(usize, usize, &str)]; 6] = [
        &[],
        &[],
        &[],
        &[(0, 0, "S_001")],
        &[(0, 0, "S_001"), (0, 1, "S_002")],
        &[(0, 0, "S_001"), (0, 1, "S_002"), (0, 2, "S_003")],
    ];

    for (step, seated) in expected.iter().enumerate() {
        let grid = SeatGrid::for_step(step as u8, &STUDENT_QUEUE);
        assert_eq!(grid, SeatGrid::for_step(step as u8, &STUDENT_QUEUE));

        for row in 0..ROWS {
            for col in 0..COLS {
                let want = seated
                    .iter()
                    .find(|(r, c, _)| *r == row && *c == col)
                    .map(|(_, _, id)| Seat::Taken(id.to_string()))
                    .unwrap_or(Seat::Empty);
                assert_eq!(grid.get(row, col), Some(&want), "step {step} ({row},{col})");
            }
        }
    }
}

#[test]
fn test_advance_then_retreat_is_identity() {
    let t0 = Instant::now();

    // Every slide but the last, at every reachable sub-step
    for index in 0..SLIDES.len() - 1 {
        let sub_steps = match SLIDES[index].kind {
            SlideKind::Flowchart => MAX_FLOWCHART_STEPS,
            SlideKind::Solution => MAX_DIAGRAM_STEPS,
            _ => 0,
        };
        for sub in 0..=sub_steps {
            let mut p = presenter();
            p.jump_to(index);
            for _ in 0..sub {
                p.advance(t0);
            }
            let before = p.state();
            let grid_before = p.grid().clone();

            p.advance(t0);
            p.retreat(t0 + LATER);
            p.tick(t0 + LATER + LATER);

            assert_eq!(p.state(), before, "slide {index}, sub-step {sub}");
            assert_eq!(p.grid(), &grid_before);
        }
    }
}

#[test]
fn test_boundaries_are_no_ops() {
    let t0 = Instant::now();
    let mut p = presenter();
    let before = p.state();
    p.retreat(t0);
    assert_eq!(p.state(), before);

    let last = SLIDES.len() - 1;
    p.jump_to(last);
    let before = p.state();
    p.advance(t0);
    assert_eq!(p.state(), before);
    assert_eq!(p.state().current_slide, last);
}

#[test]
fn test_index_stays_in_range() {
    let mut p = presenter();
    let mut now = Instant::now();
    for _ in 0..100 {
        p.advance(now);
        now += LATER;
        assert!(p.state().current_slide < p.total_slides());
    }
    assert_eq!(p.state().current_slide, p.total_slides() - 1);
    for _ in 0..100 {
        p.retreat(now);
        now += LATER;
        assert!(p.state().current_slide < p.total_slides());
    }
    assert_eq!(p.state().current_slide, 0);
}

#[test]
fn test_flowchart_reveals_nodes_before_moving_on() {
    let t0 = Instant::now();
    let flowchart = slide_index(SlideKind::Flowchart);
    let mut p = presenter();
    p.jump_to(flowchart);

    for expected in 1..=MAX_FLOWCHART_STEPS {
        p.advance(t0);
        assert_eq!(p.state().flowchart_step, expected);
        assert_eq!(p.state().current_slide, flowchart);
    }

    p.advance(t0);
    assert_eq!(p.state().current_slide, flowchart + 1);
    assert_eq!(p.state().flowchart_step, 0);
}

#[test]
fn test_solution_steps_fill_grid() {
    let t0 = Instant::now();
    let solution = slide_index(SlideKind::Solution);
    let mut p = presenter();
    p.jump_to(solution);
    assert_eq!(p.current_student(), None);

    for _ in 0..MAX_DIAGRAM_STEPS {
        p.advance(t0);
    }
    assert_eq!(p.state().diagram_step, MAX_DIAGRAM_STEPS);
    assert_eq!(p.grid().occupied(), 3);
    assert_eq!(p.current_student(), Some("S_003"));
    assert_eq!(p.state().current_slide, solution);

    p.advance(t0);
    assert_eq!(p.state().current_slide, solution + 1);
    assert_eq!(p.state().diagram_step, 0);
    assert_eq!(p.grid().occupied(), 0);
}

#[test]
fn test_out_of_range_jump_is_ignored() {
    let mut p = presenter();
    p.jump_to(3);
    let before = p.state();
    p.jump_to(SLIDES.len());
    p.jump_to(usize::MAX);
    assert_eq!(p.state(), before);
}

#[test]
fn test_jump_resets_sub_steps_and_does_not_lock() {
    let t0 = Instant::now();
    let solution = slide_index(SlideKind::Solution);
    let flowchart = slide_index(SlideKind::Flowchart);
    let mut p = presenter();

    p.jump_to(solution);
    for _ in 0..MAX_DIAGRAM_STEPS {
        p.advance(t0);
    }
    assert_eq!(p.grid().occupied(), 3);

    p.jump_to(flowchart);
    assert_eq!(p.state().current_slide, flowchart);
    assert_eq!(p.state().diagram_step, 0);
    assert_eq!(p.grid().occupied(), 0);
    assert_eq!(p.current_student(), None);
    assert!(!p.is_animating());

    p.advance(t0);
    p.advance(t0);
    assert_eq!(p.state().flowchart_step, 2);

    p.jump_to(0);
    assert_eq!(p.state().flowchart_step, 0);
    assert!(!p.is_animating());

    // Same instant as the jump, still accepted
    p.advance(t0);
    assert_eq!(p.state().current_slide, 1);
}

#[test]
fn test_input_during_cooldown_is_dropped() {
    let t0 = Instant::now();
    let mut p = presenter();

    p.advance(t0);
    assert_eq!(p.state().current_slide, 1);
    assert!(p.is_animating());

    // Dropped, not queued
    p.advance(t0 + Duration::from_millis(100));
    p.retreat(t0 + Duration::from_millis(200));
    assert_eq!(p.state().current_slide, 1);

    p.tick(t0 + COOLDOWN);
    assert!(!p.is_animating());
    p.advance(t0 + COOLDOWN);
    assert_eq!(p.state().current_slide, 2);
}

#[test]
fn test_sub_steps_do_not_lock() {
    let t0 = Instant::now();
    let mut p = presenter();
    p.jump_to(slide_index(SlideKind::Flowchart));
    p.advance(t0);
    p.advance(t0);
    assert!(!p.is_animating());
    assert_eq!(p.state().flowchart_step, 2);
}

#[test]
fn test_progress_percent() {
    let mut p = presenter();
    let total = p.total_slides() as f64;
    assert!((p.progress_percent() - 100.0 / total).abs() < 1e-9);
    p.jump_to(p.total_slides() - 1);
    assert!((p.progress_percent() - 100.0).abs() < 1e-9);
}

#[test]
fn test_start_resets_and_exit_unlocks_scroll() {
    let t0 = Instant::now();
    let mut p = Presenter::with_default_deck(COOLDOWN);
    assert!(!p.is_active());
    assert!(!p.is_scroll_locked());

    p.start();
    assert!(p.is_active());
    assert!(p.is_scroll_locked());
    p.advance(t0);
    p.exit();
    assert!(!p.is_active());
    assert!(!p.is_scroll_locked());
    assert!(!p.is_animating());

    p.start();
    assert_eq!(p.state().current_slide, 0);
    assert_eq!(p.state().flowchart_step, 0);
    assert_eq!(p.state().diagram_step, 0);
}

#[test]
fn test_intents_ignored_while_inactive() {
    let t0 = Instant::now();
    let mut p = Presenter::with_default_deck(COOLDOWN);
    assert!(!p.handle_intent(NavIntent::Advance, t0));
    assert_eq!(p.state().current_slide, 0);

    p.start();
    assert!(p.handle_intent(NavIntent::Advance, t0));
    assert_eq!(p.state().current_slide, 1);
    assert!(p.handle_intent(NavIntent::Exit, t0));
    assert!(!p.is_active());
}
