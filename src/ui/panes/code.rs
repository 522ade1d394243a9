//! Highlighted source lines for the code slides

use crate::highlight;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::text::{Line, Span};

/// Turn source into styled lines. Tokens spanning a newline are split so
/// every line keeps its own spans.
pub fn highlight_lines(source: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for token in highlight::annotate(source) {
        let style = DEFAULT_THEME.token_style(token.class);
        let mut pieces = token.text.split('\n');
        if let Some(first) = pieces.next() {
            if !first.is_empty() {
                current.push(Span::styled(first.to_string(), style));
            }
        }
        for piece in pieces {
            lines.push(Line::from(std::mem::take(&mut current)));
            if !piece.is_empty() {
                current.push(Span::styled(piece.to_string(), style));
            }
        }
    }
    lines.push(Line::from(current));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_match_source() {
        let source = "int main() {\n    /* a\n b */ return 0;\n}";
        let lines = highlight_lines(source);
        let rendered: Vec<String> = lines.iter().map(text).collect();
        let expected: Vec<&str> = source.split('\n').collect();
        assert_eq!(rendered, expected);
    }
}
