//! Stage spinner.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// A ticking spinner for one pipeline stage, hidden when `quiet`.
pub(crate) fn stage_spinner(message: &str, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        pb.set_style(style.tick_chars("/-\\|"));
    }
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
