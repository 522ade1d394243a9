//! Declarative slide deck handed to a [`DeckWriter`](super::DeckWriter)
//!
//! A deck is a list of slides, each a background color plus positioned text
//! boxes and rectangles. Coordinates are EMUs; the `inches` helpers convert
//! from the layout constants the exporter is written in.

/// English Metric Units per inch
pub const EMU_PER_INCH: i64 = 914_400;

/// 4:3 slide, 10in x 7.5in
pub const SLIDE_WIDTH: i64 = 10 * EMU_PER_INCH;
pub const SLIDE_HEIGHT: i64 = 6_858_000;

pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH as f64).round() as i64
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl Frame {
    pub fn inches(x: f64, y: f64, w: f64, h: f64) -> Self {
        Frame {
            x: inches(x),
            y: inches(y),
            width: inches(w),
            height: inches(h),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Middle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub size: f64,
    pub bold: bool,
    /// `RRGGBB`
    pub color: String,
    pub font: Option<String>,
    pub align: Align,
    pub valign: VAlign,
}

impl TextStyle {
    pub fn new(size: f64, color: &str) -> Self {
        TextStyle {
            size,
            bold: false,
            color: color.to_string(),
            font: None,
            align: Align::Left,
            valign: VAlign::Top,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn font(mut self, font: &str) -> Self {
        self.font = Some(font.to_string());
        self
    }

    pub fn centered(mut self) -> Self {
        self.align = Align::Center;
        self
    }

    pub fn middle(mut self) -> Self {
        self.valign = VAlign::Middle;
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    pub color: String,
    pub width_pt: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Text {
        text: String,
        frame: Frame,
        style: TextStyle,
    },
    Rect {
        frame: Frame,
        fill: String,
        /// Fill opacity in percent, `None` for opaque
        fill_opacity: Option<u8>,
        outline: Option<Outline>,
    },
}

/// Which content section a slide was generated from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Title,
    Context,
    Solution,
    Function(usize),
    Demo,
    Future,
    Thanks,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckSlide {
    pub section: Section,
    /// `RRGGBB`
    pub background: String,
    pub shapes: Vec<Shape>,
}

impl DeckSlide {
    pub fn new(section: Section, background: &str) -> Self {
        DeckSlide {
            section,
            background: background.to_string(),
            shapes: Vec::new(),
        }
    }

    pub fn add_text(&mut self, text: impl Into<String>, frame: Frame, style: TextStyle) -> &mut Self {
        self.shapes.push(Shape::Text {
            text: text.into(),
            frame,
            style,
        });
        self
    }

    pub fn add_rect(&mut self, frame: Frame, fill: &str) -> &mut Self {
        self.shapes.push(Shape::Rect {
            frame,
            fill: fill.to_string(),
            fill_opacity: None,
            outline: None,
        });
        self
    }

    pub fn add_card(
        &mut self,
        frame: Frame,
        fill: &str,
        fill_opacity: u8,
        outline: &str,
        width_pt: f64,
    ) -> &mut Self {
        self.shapes.push(Shape::Rect {
            frame,
            fill: fill.to_string(),
            fill_opacity: Some(fill_opacity.min(100)),
            outline: Some(Outline {
                color: outline.to_string(),
                width_pt,
            }),
        });
        self
    }

    /// All text on the slide, in emission order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text { text, .. } => Some(text.as_str()),
            Shape::Rect { .. } => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Deck {
    pub slides: Vec<DeckSlide>,
}

impl Deck {
    pub fn push(&mut self, slide: DeckSlide) {
        self.slides.push(slide);
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn sections(&self) -> Vec<Section> {
        self.slides.iter().map(|s| s.section).collect()
    }
}
