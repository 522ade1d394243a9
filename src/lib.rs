//! # Introduction
//!
//! seatshow presents the Smart Seating Allocation Engine report in the
//! terminal.  The report can be scrolled like a page, switched into a
//! keyboard-driven slide presentation, or exported as a PowerPoint deck.
//!
//! ## Pipeline
//!
//! ```text
//! Content → Presenter (slides, sub-steps, seat grid) → TUI
//!         → DeckExporter → Deck → PptxWriter → Smart_Seating_Engine.pptx
//! ```
//!
//! 1. [`content`]: the static report: slides, team, function samples.
//! 2. [`presentation`]: the [`presentation::Presenter`] state machine, the
//!    derived [`presentation::SeatGrid`] and key-to-intent mapping.
//! 3. [`highlight`] / [`markup`]: token annotation of C++ samples and the
//!    tag stripper used to recover plain text from markup.
//! 4. [`diagram`]: flowchart rendering behind [`diagram::DiagramRenderer`].
//! 5. [`export`]: deck model and the OOXML package writer.
//! 6. [`ui`]: ratatui-based TUI; not part of the stable library API.
//!
//! Configuration lives in [`config`]; every fallible path returns
//! [`error::ShowError`].

pub mod config;
pub mod content;
pub mod diagram;
pub mod error;
pub mod export;
pub mod highlight;
pub mod markup;
pub mod presentation;
pub mod ui;
