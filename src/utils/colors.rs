/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const CYAN: &str = "\x1b[36m";

/// GREY for an empty cell, RESET otherwise.
pub fn color_for_cell(value: &str) -> &'static str {
    if value.trim().is_empty() { GREY } else { RESET }
}
