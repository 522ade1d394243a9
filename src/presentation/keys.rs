//! Keyboard mapping and scoped listener registration for presentation mode

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use std::cell::Cell;
use std::rc::Rc;

/// What a key press asks the presenter to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIntent {
    Advance,
    Retreat,
    Exit,
}

/// Map a key event to a navigation intent. Releases and repeats of
/// unmapped keys yield `None`.
pub fn intent_for(key: &KeyEvent) -> Option<NavIntent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(NavIntent::Advance),
        KeyCode::Left => Some(NavIntent::Retreat),
        KeyCode::Esc => Some(NavIntent::Exit),
        _ => None,
    }
}

/// Tracks how many presentation key listeners are installed.
///
/// A listener is represented by a [`ListenerGuard`]; dropping the guard
/// deregisters it, so a listener cannot outlive the session that installed it.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    active: Rc<Cell<usize>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> ListenerGuard {
        self.active.set(self.active.get() + 1);
        tracing::debug!(active = self.active.get(), "Key listener installed");
        ListenerGuard {
            active: Rc::clone(&self.active),
        }
    }

    pub fn active(&self) -> usize {
        self.active.get()
    }
}

#[derive(Debug)]
pub struct ListenerGuard {
    active: Rc<Cell<usize>>,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        self.active.set(self.active.get().saturating_sub(1));
        tracing::debug!(active = self.active.get(), "Key listener removed");
    }
}
