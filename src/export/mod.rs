//! Slide-deck export
//!
//! [`DeckExporter`] walks the fixed report sections and builds a [`Deck`],
//! one slide per section:
//!
//! ```text
//! title/team → context → solution → one per function sample → demo → future → thanks
//! ```
//!
//! The deck always reflects the full report, never the slide currently on
//! screen. Writing is delegated to a [`DeckWriter`]; its errors are returned
//! to the caller untouched.

pub mod deck;
pub mod pptx;

use std::path::{Path, PathBuf};

use crate::content::{
    Code, FunctionSample, CONTEXT_CARDS, FULL_OUTPUT, FUNCTION_SAMPLES, FUTURE_SCOPE, REPORT_SUBTITLE,
    REPORT_TITLE, SOLUTION_STEPS, TEAM,
};
use crate::error::Result;

pub use deck::{Deck, DeckSlide, Frame, Section, Shape, TextStyle};
pub use pptx::PptxWriter;

/// File name of the exported deck
pub const OUTPUT_FILE_NAME: &str = "Smart_Seating_Engine.pptx";

const BG_DARK: &str = "0F172A";
const BG_CODE: &str = "1E1E1E";
const WHITE: &str = "FFFFFF";
const SOFT: &str = "E0E7FF";
const ACCENT: &str = "6366F1";
const ARIAL: &str = "Arial";
const MONO: &str = "Consolas";

/// Serializes a [`Deck`] to a file
pub trait DeckWriter {
    fn write_file(&self, deck: &Deck, path: &Path) -> Result<()>;
}

/// Plain text for a code block: markup is stripped and decoded, plain source
/// is projected through the token layer unchanged.
pub fn sanitize_code(code: Code) -> String {
    code.plain_text()
}

#[derive(Debug, Clone)]
pub struct DeckExporter {
    samples: Vec<FunctionSample>,
}

impl Default for DeckExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeckExporter {
    /// Exporter over the report's five function samples
    pub fn new() -> Self {
        Self::with_samples(FUNCTION_SAMPLES.to_vec())
    }

    pub fn with_samples(samples: Vec<FunctionSample>) -> Self {
        DeckExporter { samples }
    }

    /// Slides the deck will contain: 2 + 1 + samples + 1 + 1 + 1
    pub fn expected_slides(&self) -> usize {
        6 + self.samples.len()
    }

    pub fn build(&self) -> Deck {
        let mut deck = Deck::default();
        deck.push(title_slide());
        deck.push(context_slide());
        deck.push(solution_slide());
        for (index, sample) in self.samples.iter().enumerate() {
            deck.push(function_slide(index, sample));
        }
        deck.push(demo_slide());
        deck.push(future_slide());
        deck.push(thanks_slide());
        deck
    }

    /// Build the deck and write it as [`OUTPUT_FILE_NAME`] inside `dir`.
    pub fn export(&self, dir: &Path) -> Result<PathBuf> {
        self.export_with(&PptxWriter, dir)
    }

    pub fn export_with<W: DeckWriter>(&self, writer: &W, dir: &Path) -> Result<PathBuf> {
        let deck = self.build();
        let path = dir.join(OUTPUT_FILE_NAME);
        tracing::info!(path = %path.display(), slides = deck.len(), "Exporting deck");
        writer.write_file(&deck, &path)?;
        Ok(path)
    }
}

fn heading(slide: &mut DeckSlide, text: &str) {
    slide.add_text(
        text,
        Frame::inches(0.5, 0.5, 9.0, 0.6),
        TextStyle::new(36.0, WHITE).bold().font(ARIAL).centered(),
    );
}

fn title_slide() -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Title, BG_DARK);
    slide.add_text(
        REPORT_TITLE,
        Frame::inches(0.5, 1.5, 9.0, 1.0),
        TextStyle::new(44.0, WHITE).bold().font(ARIAL).centered().middle(),
    );
    slide.add_text(
        REPORT_SUBTITLE,
        Frame::inches(0.5, 2.5, 9.0, 0.5),
        TextStyle::new(20.0, "A5B4FC").font(ARIAL).centered().middle(),
    );
    for (i, member) in TEAM.iter().enumerate() {
        let x = (i % 2) as f64 * 5.0 + 0.5;
        let y = 3.5 + (i / 2) as f64 * 0.8;
        slide.add_text(
            format!("{}. {}", i + 1, member.name),
            Frame::inches(x, y, 4.0, 0.4),
            TextStyle::new(14.0, SOFT).font(ARIAL),
        );
    }
    slide
}

fn context_slide() -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Context, BG_DARK);
    heading(&mut slide, "About the Project");
    for (i, card) in CONTEXT_CARDS.iter().enumerate() {
        let x = 0.5 + i as f64 * 3.2;
        slide.add_card(Frame::inches(x, 1.5, 3.0, 3.0), card.color, 25, card.color, 2.0);
        slide.add_text(
            card.title,
            Frame::inches(x + 0.1, 1.6, 2.8, 0.5),
            TextStyle::new(18.0, card.color).bold().font(ARIAL),
        );
        slide.add_text(
            card.text,
            Frame::inches(x + 0.1, 2.2, 2.8, 2.0),
            TextStyle::new(12.0, SOFT).font(ARIAL),
        );
    }
    slide
}

fn solution_slide() -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Solution, BG_DARK);
    heading(&mut slide, "Proposed Solution");
    for (i, step) in SOLUTION_STEPS.iter().enumerate() {
        let y = 1.3 + i as f64 * 1.15;
        slide.add_rect(Frame::inches(0.5, y, 0.3, 1.0), "06B6D4");
        slide.add_text(
            step.number.to_string(),
            Frame::inches(0.5, y + 0.3, 0.3, 0.4),
            TextStyle::new(24.0, WHITE).bold().centered(),
        );
        slide.add_text(
            step.title,
            Frame::inches(1.0, y, 3.0, 0.4),
            TextStyle::new(18.0, WHITE).bold().font(ARIAL),
        );
        slide.add_text(
            step.detail,
            Frame::inches(1.0, y + 0.45, 6.0, 0.6),
            TextStyle::new(12.0, SOFT).font(ARIAL),
        );
    }
    slide
}

fn function_slide(index: usize, sample: &FunctionSample) -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Function(index), BG_CODE);
    slide.add_text(
        sample.name,
        Frame::inches(0.5, 0.3, 9.0, 0.5),
        TextStyle::new(32.0, "A78BFA").bold().font(MONO),
    );
    slide.add_text(
        format!("{}\nComplexity: {}", sample.description, sample.complexity),
        Frame::inches(0.5, 0.9, 9.0, 0.9),
        TextStyle::new(12.0, "D1D5DB").font(ARIAL),
    );
    slide.add_card(Frame::inches(0.4, 1.9, 9.2, 3.6), "0D1117", 100, "30363D", 2.0);
    slide.add_text(
        sanitize_code(sample.code),
        Frame::inches(0.5, 2.0, 9.0, 3.4),
        TextStyle::new(10.0, "FF7B72").font(MONO),
    );
    slide.add_text(
        "Output:",
        Frame::inches(0.5, 5.7, 9.0, 0.3),
        TextStyle::new(14.0, "FBBF24").bold().font(ARIAL),
    );
    slide.add_text(
        sample.output,
        Frame::inches(0.5, 6.05, 9.0, 1.0),
        TextStyle::new(11.0, "34D399").font(MONO),
    );
    slide
}

fn demo_slide() -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Demo, BG_DARK);
    heading(&mut slide, "Live Run");
    slide.add_text(
        FULL_OUTPUT,
        Frame::inches(0.5, 1.3, 9.0, 5.0),
        TextStyle::new(11.0, "34D399").font(MONO),
    );
    slide
}

fn future_slide() -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Future, BG_DARK);
    heading(&mut slide, "Future Work");
    for (i, item) in FUTURE_SCOPE.iter().enumerate() {
        let y = 1.5 + i as f64 * 1.6;
        slide.add_rect(Frame::inches(0.5, y, 0.5, 1.2), ACCENT);
        slide.add_text(
            item.title,
            Frame::inches(1.2, y + 0.1, 7.8, 0.5),
            TextStyle::new(18.0, WHITE).bold().font(ARIAL),
        );
        slide.add_text(
            item.desc,
            Frame::inches(1.2, y + 0.6, 7.8, 0.8),
            TextStyle::new(12.0, SOFT).font(ARIAL),
        );
    }
    slide
}

fn thanks_slide() -> DeckSlide {
    let mut slide = DeckSlide::new(Section::Thanks, BG_DARK);
    slide.add_text(
        "Thank you for listening",
        Frame::inches(0.5, 2.5, 9.0, 1.0),
        TextStyle::new(48.0, WHITE).bold().font(ARIAL).centered().middle(),
    );
    slide.add_text(
        "Any questions?",
        Frame::inches(0.5, 3.5, 9.0, 0.6),
        TextStyle::new(24.0, SOFT).font(ARIAL).centered(),
    );
    slide
}
