//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]**: application state, keyboard event loop, report/presentation routing
//! - **[`panes`]**: stateless render functions for each visible pane (report, slide,
//!   status bar)
//! - **[`session`]**: raw-mode/alternate-screen guard restored on drop
//! - **[`theme`]**: centralized color palette used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a [`Config`] and a
//! [`DiagramRenderer`], then call [`App::run`] inside a [`TerminalSession`].
//!
//! [`Config`]: crate::config::Config
//! [`DiagramRenderer`]: crate::diagram::DiagramRenderer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod session;
pub mod theme;

pub use app::App;
pub use session::TerminalSession;
