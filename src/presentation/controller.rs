//! Presentation-mode state machine
//!
//! [`Presenter`] owns the slide position, the two sub-step counters and the
//! slide-change cooldown. Nothing outside this module can touch the state
//! except through the navigation methods, and every method is total: at a
//! boundary it clamps, on a bad index it does nothing.
//!
//! Time is passed in explicitly (`now`) so the cooldown can be driven by the
//! UI event loop and by tests alike.

use std::time::{Duration, Instant};

use super::grid::{self, SeatGrid, MAX_DIAGRAM_STEPS};
use super::keys::NavIntent;
use crate::content::{Slide, SlideKind, SLIDES, STUDENT_QUEUE};

/// Number of flowchart nodes revealed after the first one
pub const MAX_FLOWCHART_STEPS: u8 = 8;

/// Default slide-change cooldown
pub const DEFAULT_COOLDOWN: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PresentationState {
    pub active: bool,
    pub current_slide: usize,
    pub flowchart_step: u8,
    pub diagram_step: u8,
    pub animating: bool,
}

/// Which end of a slide's sub-steps to land on when entering it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    First,
    Last,
}

#[derive(Debug, Clone)]
pub struct Presenter {
    slides: Vec<Slide>,
    queue: Vec<String>,
    state: PresentationState,
    grid: SeatGrid,
    cooldown: Duration,
    animating_until: Option<Instant>,
}

impl Presenter {
    pub fn new(slides: Vec<Slide>, cooldown: Duration) -> Self {
        Presenter {
            slides,
            queue: STUDENT_QUEUE.iter().map(|s| s.to_string()).collect(),
            state: PresentationState::default(),
            grid: SeatGrid::empty(),
            cooldown,
            animating_until: None,
        }
    }

    /// Presenter over the built-in twelve-slide deck
    pub fn with_default_deck(cooldown: Duration) -> Self {
        Self::new(SLIDES.to_vec(), cooldown)
    }

    pub fn state(&self) -> PresentationState {
        self.state
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn total_slides(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.state.current_slide)
    }

    pub fn is_active(&self) -> bool {
        self.state.active
    }

    /// Page scrolling is locked for as long as presentation mode is on
    pub fn is_scroll_locked(&self) -> bool {
        self.state.active
    }

    pub fn is_animating(&self) -> bool {
        self.state.animating
    }

    /// Student highlighted on the seat grid at the current diagram step
    pub fn current_student(&self) -> Option<&str> {
        grid::current_student(self.state.diagram_step, &self.queue)
    }

    /// `(current + 1) / total * 100`, recomputed on every read
    pub fn progress_percent(&self) -> f64 {
        if self.slides.is_empty() {
            return 0.0;
        }
        (self.state.current_slide + 1) as f64 / self.slides.len() as f64 * 100.0
    }

    /// Enter presentation mode at the first slide.
    pub fn start(&mut self) {
        self.state = PresentationState {
            active: true,
            ..PresentationState::default()
        };
        self.animating_until = None;
        self.grid = SeatGrid::empty();
        tracing::info!(slides = self.slides.len(), "Presentation started");
    }

    /// Leave presentation mode.
    pub fn exit(&mut self) {
        self.state.active = false;
        self.state.animating = false;
        self.animating_until = None;
        tracing::info!(slide = self.state.current_slide, "Presentation exited");
    }

    /// Clear the animation lock once its cooldown has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(until) = self.animating_until {
            if now >= until {
                self.animating_until = None;
                self.state.animating = false;
            }
        }
    }

    /// Move forward one sub-step, or one slide when the slide has none left.
    pub fn advance(&mut self, now: Instant) {
        self.tick(now);
        if self.state.animating {
            tracing::trace!("Advance dropped during cooldown");
            return;
        }
        let Some(kind) = self.current_slide().map(|s| s.kind) else {
            return;
        };

        match kind {
            SlideKind::Flowchart if self.state.flowchart_step < MAX_FLOWCHART_STEPS => {
                self.state.flowchart_step += 1;
                return;
            }
            SlideKind::Solution if self.state.diagram_step < MAX_DIAGRAM_STEPS => {
                self.set_diagram_step(self.state.diagram_step + 1);
                return;
            }
            _ => {}
        }

        if self.state.current_slide + 1 < self.slides.len() {
            self.lock(now);
            self.enter_slide(self.state.current_slide + 1, Entry::First);
        }
    }

    /// Move back one sub-step, or one slide when the slide is at its first step.
    ///
    /// Stepping back into a flowchart or solution slide lands on its last
    /// sub-step rather than resetting it to 0, so `advance` followed by
    /// `retreat` always restores the previous state. Forward entry and
    /// [`Presenter::jump_to`] still start at step 0.
    pub fn retreat(&mut self, now: Instant) {
        self.tick(now);
        if self.state.animating {
            tracing::trace!("Retreat dropped during cooldown");
            return;
        }
        let Some(kind) = self.current_slide().map(|s| s.kind) else {
            return;
        };

        match kind {
            SlideKind::Flowchart if self.state.flowchart_step > 0 => {
                self.state.flowchart_step -= 1;
                return;
            }
            SlideKind::Solution if self.state.diagram_step > 0 => {
                self.set_diagram_step(self.state.diagram_step - 1);
                return;
            }
            _ => {}
        }

        if self.state.current_slide > 0 {
            self.lock(now);
            self.enter_slide(self.state.current_slide - 1, Entry::Last);
        }
    }

    /// Jump straight to `index`. Out-of-range indices are ignored.
    ///
    /// Sub-steps and the seat grid start over at step 0. The cooldown lock is
    /// neither checked nor engaged.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            tracing::debug!(index, total = self.slides.len(), "Ignoring out-of-range jump");
            return;
        }
        self.enter_slide(index, Entry::First);
    }

    /// Apply a key intent. Returns `false` when presentation mode is off and
    /// the intent was ignored.
    pub fn handle_intent(&mut self, intent: NavIntent, now: Instant) -> bool {
        if !self.state.active {
            return false;
        }
        match intent {
            NavIntent::Advance => self.advance(now),
            NavIntent::Retreat => self.retreat(now),
            NavIntent::Exit => self.exit(),
        }
        true
    }

    fn lock(&mut self, now: Instant) {
        self.state.animating = true;
        self.animating_until = Some(now + self.cooldown);
    }

    fn enter_slide(&mut self, index: usize, entry: Entry) {
        self.state.current_slide = index;
        let kind = self.slides.get(index).map(|s| s.kind);

        self.state.flowchart_step = match (entry, kind) {
            (Entry::Last, Some(SlideKind::Flowchart)) => MAX_FLOWCHART_STEPS,
            _ => 0,
        };
        let diagram_step = match (entry, kind) {
            (Entry::Last, Some(SlideKind::Solution)) => MAX_DIAGRAM_STEPS,
            _ => 0,
        };
        self.set_diagram_step(diagram_step);

        tracing::debug!(
            slide = index,
            flowchart_step = self.state.flowchart_step,
            diagram_step = self.state.diagram_step,
            "Entered slide"
        );
    }

    fn set_diagram_step(&mut self, step: u8) {
        self.state.diagram_step = step.min(MAX_DIAGRAM_STEPS);
        self.grid = SeatGrid::for_step(self.state.diagram_step, &self.queue);
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::with_default_deck(DEFAULT_COOLDOWN)
    }
}
