use ratatui::style::{Color, Style};

use crate::highlight::TokenClass;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Indigo
    pub secondary: Color, // Amber
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub function: Color,
    pub type_name: Color,
    pub preprocessor: Color,
    pub seat_empty: Color,
    pub seat_taken: Color,
    pub output: Color, // Program output in code and demo slides
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(224, 231, 255),
    primary: Color::Rgb(99, 102, 241),   // Indigo
    secondary: Color::Rgb(251, 191, 36), // Amber
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(52, 211, 153),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(255, 123, 114),        // Red for keywords
    string: Color::Rgb(165, 214, 255),         // Light blue for strings
    number: Color::Rgb(121, 192, 255),         // Blue for numbers
    border_focused: Color::Rgb(167, 139, 250), // Violet border for the active slide
    border_normal: Color::Rgb(108, 112, 134),  // Grey border for normal
    current_line_bg: Color::Rgb(30, 41, 59),   // Slate bar background
    function: Color::Rgb(210, 168, 255),       // Purple for functions
    type_name: Color::Rgb(255, 166, 87),       // Orange for type names
    preprocessor: Color::Rgb(255, 123, 114),
    seat_empty: Color::Rgb(71, 85, 105),
    seat_taken: Color::Rgb(34, 197, 94),
    output: Color::Rgb(52, 211, 153),
};

impl Theme {
    /// Style for a highlighted source token
    pub fn token_style(&self, class: TokenClass) -> Style {
        let fg = match class {
            TokenClass::Keyword => self.keyword,
            TokenClass::Type => self.type_name,
            TokenClass::Function => self.function,
            TokenClass::String => self.string,
            TokenClass::Number => self.number,
            TokenClass::Comment => self.comment,
            TokenClass::Preprocessor => self.preprocessor,
            TokenClass::Bracket => self.primary,
            TokenClass::Operator | TokenClass::Plain => self.fg,
        };
        Style::default().fg(fg)
    }
}

/// Parse an `RRGGBB` hex string, falling back to the foreground color.
pub fn hex_color(hex: &str) -> Color {
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|s| u8::from_str_radix(s, 16).ok())
    };
    match (hex.len(), channel(0..2), channel(2..4), channel(4..6)) {
        (6, Some(r), Some(g), Some(b)) => Color::Rgb(r, g, b),
        _ => DEFAULT_THEME.fg,
    }
}
