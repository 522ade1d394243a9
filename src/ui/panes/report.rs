//! Report pane rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the scrollable report. `scroll_offset` is clamped to the content.
pub fn render_report_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[String],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Report ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 1, 0, 0));

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    if lines.len() > visible_height {
        *scroll_offset = (*scroll_offset).min(lines.len() - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let visible: Vec<Line> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            // Section headings are the all-caps lines
            if !line.starts_with(' ')
                && line.chars().any(|c| c.is_ascii_alphabetic())
                && line == &line.to_uppercase()
            {
                Line::styled(
                    line.as_str(),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Line::styled(line.as_str(), Style::default().fg(DEFAULT_THEME.fg))
            }
        })
        .collect();

    frame.render_widget(Paragraph::new(visible).block(block), area);
}
