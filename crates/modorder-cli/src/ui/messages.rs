//! Status message functions for terminal output.
//!
//! Colors go through `if_supports_color`, so they follow the decision made
//! in [`init_colors`](super::init_colors).

use owo_colors::{OwoColorize, Stream::Stderr, Style};

/// Print an info message to stderr.
pub fn info(message: &str) {
    let mark = Style::new().blue().bold();
    eprintln!("{} {}", "ℹ".if_supports_color(Stderr, |t| t.style(mark)), message);
}
