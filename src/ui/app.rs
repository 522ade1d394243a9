//! Main TUI application state and logic

use crate::config::Config;
use crate::content::{self, FLOWCHART_DEFINITION};
use crate::diagram::{DiagramRenderer, RenderedDiagram};
use crate::export::DeckExporter;
use crate::presentation::{intent_for, ListenerGuard, ListenerRegistry, NavIntent, Presenter};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// The main application state
pub struct App {
    /// Slide navigation state machine
    presenter: Presenter,

    /// Key listener bookkeeping; a guard is held while presenting
    listeners: ListenerRegistry,
    listener: Option<ListenerGuard>,

    /// Flowchart for the workflow slide, `None` when rendering failed
    diagram: Option<RenderedDiagram>,

    config: Config,

    /// Report text, one entry per line
    report_lines: Vec<String>,
    report_scroll: usize,

    /// Where the slide pane was last drawn, for mapping clicks to slide dots
    slide_area: Rect,

    should_quit: bool,
    status_message: String,
}

impl App {
    pub fn new(config: Config, renderer: &dyn DiagramRenderer) -> Self {
        let diagram = match renderer.render(FLOWCHART_DEFINITION) {
            Ok(diagram) => Some(diagram),
            Err(e) => {
                tracing::error!(error = %e, "Flowchart rendering failed");
                None
            }
        };

        App {
            presenter: Presenter::with_default_deck(config.cooldown()),
            listeners: ListenerRegistry::new(),
            listener: None,
            diagram,
            config,
            report_lines: content::report_text().lines().map(str::to_string).collect(),
            report_scroll: 0,
            slide_area: Rect::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
        }
    }

    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }

    pub fn diagram(&self) -> Option<&RenderedDiagram> {
        self.diagram.as_ref()
    }

    pub fn report_scroll(&self) -> usize {
        self.report_scroll
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            self.presenter.tick(Instant::now());
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Short poll so the cooldown clears without a key press
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(frame.area());

        if self.presenter.is_active() {
            self.slide_area = chunks[0];
            super::panes::render_slide_pane(
                frame,
                chunks[0],
                &self.presenter,
                self.diagram.as_ref(),
            );
        } else {
            super::panes::render_report_pane(
                frame,
                chunks[0],
                &self.report_lines,
                true,
                &mut self.report_scroll,
            );
        }

        super::panes::render_status_bar(
            frame,
            chunks[1],
            &self.status_message,
            &self.presenter.state(),
            self.presenter.total_slides(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.presenter.is_active() {
            self.handle_presentation_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                self.start_presentation();
            }
            KeyCode::Char('x') | KeyCode::Char('X') => {
                self.export_deck();
            }
            KeyCode::Up => self.scroll_report(-1),
            KeyCode::Down => self.scroll_report(1),
            _ => {}
        }
    }

    fn handle_presentation_key(&mut self, key: KeyEvent) {
        let Some(intent) = intent_for(&key) else {
            return;
        };
        if self.listener.is_none() {
            return;
        }
        self.presenter.handle_intent(intent, Instant::now());

        if intent == NavIntent::Exit {
            self.listener = None;
            self.status_message = "Presentation closed".to_string();
        } else if let Some(slide) = self.presenter.current_slide() {
            self.status_message = slide.title.to_string();
        }
    }

    /// Handle mouse events. A left click on a slide dot jumps to that slide.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.presenter.is_active() || self.listener.is_none() {
            return;
        }
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(index) = super::panes::slide::slide_at(
            self.slide_area,
            self.presenter.total_slides(),
            mouse.column,
            mouse.row,
        ) else {
            return;
        };

        tracing::debug!(index, "Jumping to clicked slide");
        self.presenter.jump_to(index);
        if let Some(slide) = self.presenter.current_slide() {
            self.status_message = slide.title.to_string();
        }
    }

    fn scroll_report(&mut self, delta: isize) {
        if self.presenter.is_scroll_locked() {
            return;
        }
        let max = self.report_lines.len().saturating_sub(1);
        self.report_scroll = self.report_scroll.saturating_add_signed(delta).min(max);
    }

    fn start_presentation(&mut self) {
        self.presenter.start();
        self.listener = Some(self.listeners.register());
        if let Some(slide) = self.presenter.current_slide() {
            self.status_message = slide.title.to_string();
        }
    }

    fn export_deck(&mut self) {
        let dir = self.config.export_dir();
        match DeckExporter::new().export(&dir) {
            Ok(path) => {
                self.status_message = format!("Exported {}", path.display());
            }
            Err(e) => {
                tracing::error!(error = %e, dir = %dir.display(), "Deck export failed");
                self.status_message = format!("Export failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::TextFlowchartRenderer;
    use crate::error::{Result, ShowError};
    use crossterm::event::KeyModifiers;

    struct FailingRenderer;

    impl DiagramRenderer for FailingRenderer {
        fn render(&self, _definition: &str) -> Result<RenderedDiagram> {
            Err(ShowError::diagram(1, "renderer offline"))
        }
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn click(app: &mut App, kind: MouseEventKind, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    fn app() -> App {
        App::new(Config::default(), &TextFlowchartRenderer)
    }

    #[test]
    fn test_start_and_exit_manage_listener() {
        let mut app = app();
        assert_eq!(app.listeners().active(), 0);

        press(&mut app, KeyCode::Char('p'));
        assert!(app.presenter().is_active());
        assert_eq!(app.listeners().active(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.presenter().is_active());
        assert_eq!(app.listeners().active(), 0);
    }

    #[test]
    fn test_report_keys_ignored_while_presenting() {
        let mut app = app();
        press(&mut app, KeyCode::Down);
        assert_eq!(app.report_scroll(), 1);

        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.report_scroll(), 1);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_arrow_advances_slide() {
        let mut app = app();
        press(&mut app, KeyCode::Char('p'));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.presenter().state().current_slide, 1);
    }

    #[test]
    fn test_navigation_keys_ignored_in_report() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.presenter().state().current_slide, 0);
        assert!(!app.presenter().is_active());
    }

    #[test]
    fn test_failed_diagram_leaves_pane_empty() {
        let app = App::new(Config::default(), &FailingRenderer);
        assert!(app.diagram().is_none());
    }

    #[test]
    fn test_export_key_writes_deck() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            export_dir: dir.path().display().to_string(),
            ..Config::default()
        };
        let mut app = App::new(config, &TextFlowchartRenderer);
        press(&mut app, KeyCode::Char('x'));
        assert!(dir.path().join(crate::export::OUTPUT_FILE_NAME).exists());
        assert!(app.status_message().starts_with("Exported"));
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            export_dir: dir.path().join("missing").display().to_string(),
            ..Config::default()
        };
        let mut app = App::new(config, &TextFlowchartRenderer);
        press(&mut app, KeyCode::Char('x'));
        assert!(app.status_message().starts_with("Export failed"));
    }

    #[test]
    fn test_click_on_dot_jumps_to_slide() {
        let mut app = app();
        app.slide_area = Rect::new(0, 0, 80, 23);
        let left = MouseEventKind::Down(MouseButton::Left);

        // Ignored outside presentation mode
        click(&mut app, left, 38, 22);
        assert!(!app.presenter().is_active());
        assert_eq!(app.presenter().state().current_slide, 0);

        press(&mut app, KeyCode::Char('p'));
        click(&mut app, left, 38, 22);
        assert_eq!(app.presenter().state().current_slide, 5);
        assert!(!app.presenter().is_animating());

        click(&mut app, MouseEventKind::Down(MouseButton::Right), 28, 22);
        click(&mut app, left, 38, 10);
        assert_eq!(app.presenter().state().current_slide, 5);

        click(&mut app, left, 28, 22);
        assert_eq!(app.presenter().state().current_slide, 0);
        assert_eq!(app.status_message(), app.presenter().slides()[0].title);
    }
}
