//! Terminal status output.
//!
//! Everything here writes to stderr; stdout is reserved for the rendered
//! build order.
//!
//! ```no_run
//! use modorder_cli::ui;
//!
//! ui::init_colors(false);
//! ui::info("treating 2 module(s) as prebuilt: mpi, netcdf");
//! ```

mod messages;

pub use messages::info;

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    if std::env::var_os("FORCE_COLOR").is_some() {
        return true;
    }

    console::user_attended_stderr() && console::Term::stderr().features().colors_supported()
}

/// Decide once whether status messages are colored.
///
/// `no_color` comes from `--no-color` and wins over the environment.
pub fn init_colors(no_color: bool) {
    let enabled = !no_color && should_use_color();
    owo_colors::set_override(enabled);
    console::set_colors_enabled_stderr(enabled);
}
