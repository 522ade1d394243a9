//! TUI pane rendering modules
//!
//! - [`report`]: the scrollable report shown outside presentation mode
//! - [`slide`]: the current slide, progress gauge and slide dots
//! - [`status`]: status bar with keybindings and mode indicators
//! - `code`: token-highlighted source lines for the code slides
//!
//! Each pane module exports a stateless `render_*` function.

mod code;

pub mod report;
pub mod slide;
pub mod status;

pub use report::render_report_pane;
pub use slide::render_slide_pane;
pub use status::render_status_bar;
