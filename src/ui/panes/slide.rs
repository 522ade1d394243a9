//! Presentation view: one slide body plus the progress footer
//!
//! Every slide kind gets its own small render function. All of them read the
//! presenter and the static content; none of them mutate anything.

use crate::content::{
    SlideKind, CONTEXT_CARDS, FULL_OUTPUT, FUNCTION_SAMPLES, FUTURE_SCOPE, REPORT_DATE,
    REPORT_SUBTITLE, REPORT_TITLE, SOLUTION_STEPS, TEAM,
};
use crate::diagram::RenderedDiagram;
use crate::presentation::{Presenter, Seat, SeatGrid};
use crate::ui::panes::code::highlight_lines;
use crate::ui::theme::{hex_color, DEFAULT_THEME};
use std::rc::Rc;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

/// Render the current slide with its header, body and progress footer.
pub fn render_slide_pane(
    frame: &mut Frame,
    area: Rect,
    presenter: &Presenter,
    diagram: Option<&RenderedDiagram>,
) {
    let Some(slide) = presenter.current_slide() else {
        return;
    };
    let state = presenter.state();
    let chunks = pane_layout(area);

    let border_color = if presenter.is_animating() {
        DEFAULT_THEME.border_normal
    } else {
        DEFAULT_THEME.border_focused
    };
    let block = Block::default()
        .title(format!(
            " {}/{} · {} ",
            state.current_slide + 1,
            presenter.total_slides(),
            slide.title
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).add_modifier(Modifier::BOLD))
        .padding(Padding::new(2, 2, 1, 0));
    let body = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    match slide.kind {
        SlideKind::Intro => render_intro(frame, body),
        SlideKind::Context => render_context(frame, body),
        SlideKind::Solution => render_solution(frame, body, presenter),
        SlideKind::Flowchart => render_flowchart(frame, body, diagram, state.flowchart_step),
        SlideKind::Code => render_code(frame, body, slide.func_index),
        SlideKind::Demo => render_demo(frame, body),
        SlideKind::Future => render_future(frame, body),
        SlideKind::Thanks => render_thanks(frame, body),
    }

    let gauge = Gauge::default()
        .gauge_style(
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .bg(DEFAULT_THEME.current_line_bg),
        )
        .ratio((presenter.progress_percent() / 100.0).clamp(0.0, 1.0))
        .label(format!("{:.0}%", presenter.progress_percent()));
    frame.render_widget(gauge, chunks[1]);

    let dots: Vec<Span> = (0..presenter.total_slides())
        .map(|i| {
            if i == state.current_slide {
                Span::styled("● ", Style::default().fg(DEFAULT_THEME.secondary))
            } else {
                Span::styled("○ ", Style::default().fg(DEFAULT_THEME.comment))
            }
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
        chunks[2],
    );
}

/// Body, progress gauge and slide-dot rows
fn pane_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1), Constraint::Length(1)])
        .split(area)
}

/// Slide whose dot sits under (`column`, `row`) in a pane drawn into `area`.
///
/// Dots are two cells wide (`● `) and centered the way [`Alignment::Center`]
/// places a line. Cells outside the dot row, or between the edge and the
/// first dot, hit nothing.
pub fn slide_at(area: Rect, total_slides: usize, column: u16, row: u16) -> Option<usize> {
    let dots = pane_layout(area)[2];
    if dots.height == 0 || row != dots.y || column < dots.x {
        return None;
    }
    let line_width = (total_slides * 2) as u16;
    let offset = (dots.width / 2).saturating_sub(line_width / 2);
    let index = column.checked_sub(dots.x + offset)? as usize / 2;
    let visible = (dots.width as usize).saturating_sub(offset as usize) / 2;
    (index < total_slides.min(visible)).then_some(index)
}

fn heading(text: &str) -> Line<'static> {
    Line::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    )
}

fn render_intro(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::default(),
        Line::styled(
            REPORT_TITLE,
            Style::default()
                .fg(DEFAULT_THEME.fg)
                .add_modifier(Modifier::BOLD),
        ),
        Line::styled(REPORT_SUBTITLE, Style::default().fg(DEFAULT_THEME.border_focused)),
        Line::styled(REPORT_DATE, Style::default().fg(DEFAULT_THEME.comment)),
        Line::default(),
    ];
    for (i, member) in TEAM.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{}. {}", i + 1, member.name),
                Style::default().fg(DEFAULT_THEME.fg),
            ),
            Span::styled(
                format!("  {}", member.role),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
        ]));
    }
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

fn render_context(frame: &mut Frame, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(area);

    for (card, column) in CONTEXT_CARDS.iter().zip(columns.iter()) {
        let color = hex_color(card.color);
        let block = Block::default()
            .title(format!(" {} ", card.title))
            .title_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color))
            .padding(Padding::horizontal(1));
        let paragraph = Paragraph::new(card.text)
            .style(Style::default().fg(DEFAULT_THEME.fg))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, *column);
    }
}

fn render_solution(frame: &mut Frame, area: Rect, presenter: &Presenter) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let step = presenter.state().diagram_step as usize;
    let mut lines = Vec::new();
    for (i, item) in SOLUTION_STEPS.iter().enumerate() {
        // diagram step n highlights the n-th solution step
        let reached = i < step;
        let marker_style = if reached {
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.comment)
        };
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", item.number), marker_style),
            Span::styled(
                item.title,
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        for detail in item.detail.lines() {
            lines.push(Line::styled(
                format!("    {}", detail),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
        }
    }
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        columns[0],
    );

    let mut grid_lines = seat_grid_lines(presenter.grid());
    grid_lines.push(Line::default());
    let current = match presenter.current_student() {
        Some(student) => Span::styled(
            format!("Seating {}", student),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled("Waiting for students", Style::default().fg(DEFAULT_THEME.comment)),
    };
    grid_lines.push(Line::from(current));

    let block = Block::default()
        .title(" Classroom ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));
    frame.render_widget(Paragraph::new(grid_lines).block(block), columns[1]);
}

fn seat_grid_lines(grid: &SeatGrid) -> Vec<Line<'static>> {
    grid.rows()
        .map(|row| {
            let spans: Vec<Span> = row
                .iter()
                .map(|seat| match seat {
                    Seat::Empty => Span::styled(
                        format!("{:^7}", "·"),
                        Style::default().fg(DEFAULT_THEME.seat_empty),
                    ),
                    Seat::Taken(id) => Span::styled(
                        format!("{:^7}", id),
                        Style::default()
                            .fg(DEFAULT_THEME.seat_taken)
                            .add_modifier(Modifier::BOLD),
                    ),
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_flowchart(
    frame: &mut Frame,
    area: Rect,
    diagram: Option<&RenderedDiagram>,
    flowchart_step: u8,
) {
    let Some(diagram) = diagram else {
        let paragraph = Paragraph::new("(diagram unavailable)")
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let revealed = flowchart_step as usize + 1;
    let lines: Vec<Line> = diagram
        .lines(revealed)
        .into_iter()
        .map(|line| {
            if line.starts_with(' ') {
                Line::styled(line, Style::default().fg(DEFAULT_THEME.comment))
            } else {
                Line::styled(
                    line,
                    Style::default()
                        .fg(DEFAULT_THEME.fg)
                        .add_modifier(Modifier::BOLD),
                )
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_code(frame: &mut Frame, area: Rect, func_index: Option<usize>) {
    let Some(sample) = func_index.and_then(|i| FUNCTION_SAMPLES.get(i)) else {
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(sample.output.lines().count() as u16 + 2),
        ])
        .split(area);

    let header = vec![
        heading(sample.name),
        Line::styled(sample.description, Style::default().fg(DEFAULT_THEME.fg)),
        Line::styled(
            format!("Complexity: {}  ·  Returns: {}", sample.complexity, sample.return_type),
            Style::default().fg(DEFAULT_THEME.comment),
        ),
    ];
    frame.render_widget(Paragraph::new(header), rows[0]);

    let code = Paragraph::new(highlight_lines(&sample.code.plain_text())).block(
        Block::default()
            .title(" Source ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
    );
    frame.render_widget(code, rows[1]);

    let output = Paragraph::new(sample.output)
        .style(Style::default().fg(DEFAULT_THEME.output))
        .block(
            Block::default()
                .title(" Output ")
                .title_style(Style::default().fg(DEFAULT_THEME.secondary))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        );
    frame.render_widget(output, rows[2]);
}

fn render_demo(frame: &mut Frame, area: Rect) {
    let paragraph = Paragraph::new(FULL_OUTPUT)
        .style(Style::default().fg(DEFAULT_THEME.output))
        .block(
            Block::default()
                .title(" Terminal ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(DEFAULT_THEME.border_normal)),
        );
    frame.render_widget(paragraph, area);
}

fn render_future(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::new();
    for item in &FUTURE_SCOPE {
        lines.push(Line::from(vec![
            Span::styled("▌ ", Style::default().fg(DEFAULT_THEME.primary)),
            Span::styled(
                item.title,
                Style::default()
                    .fg(DEFAULT_THEME.fg)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
        lines.push(Line::styled(
            format!("  {}", item.desc),
            Style::default().fg(DEFAULT_THEME.comment),
        ));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_thanks(frame: &mut Frame, area: Rect) {
    let top = area.height / 3;
    let mut lines = vec![Line::default(); top as usize];
    lines.push(heading("Thank you for listening"));
    lines.push(Line::default());
    lines.push(Line::styled(
        "Any questions?",
        Style::default().fg(DEFAULT_THEME.border_focused),
    ));
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    // 80x24 pane: dots on row 23, 12 dots centered from column 28
    const AREA: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    #[test]
    fn test_click_maps_to_dot() {
        assert_eq!(slide_at(AREA, 12, 28, 23), Some(0));
        assert_eq!(slide_at(AREA, 12, 29, 23), Some(0));
        assert_eq!(slide_at(AREA, 12, 38, 23), Some(5));
        assert_eq!(slide_at(AREA, 12, 50, 23), Some(11));
    }

    #[test]
    fn test_click_outside_dots_hits_nothing() {
        assert_eq!(slide_at(AREA, 12, 27, 23), None);
        assert_eq!(slide_at(AREA, 12, 52, 23), None);
        assert_eq!(slide_at(AREA, 12, 38, 22), None);
        assert_eq!(slide_at(Rect::default(), 12, 0, 0), None);
    }

    #[test]
    fn test_offset_pane() {
        let area = Rect::new(10, 5, 80, 24);
        assert_eq!(slide_at(area, 12, 38, 28), Some(0));
    }
}
