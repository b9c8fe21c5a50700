//! Color theme constants for the Nexora UI.
//!
//! Minimal dark palette; per-mode accents come from the mode descriptors.

use ratatui::style::Color;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and selected elements.
pub const COLOR_ACCENT: Color = Color::White;

/// Header/title text.
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Ready state and success notices - green.
pub const COLOR_READY: Color = Color::LightGreen;

/// Success notices - green.
pub const COLOR_SUCCESS: Color = Color::Rgb(4, 181, 117);

/// Error region and failure notices - red.
pub const COLOR_ERROR: Color = Color::Red;

/// Loading indicator - yellow.
pub const COLOR_LOADING: Color = Color::Yellow;

/// Landing-screen light rays - cyan.
pub const COLOR_RAY: Color = Color::Cyan;

/// Spinner animation frames.
pub const SPINNER_FRAMES: [char; 4] = ['◐', '◓', '◑', '◒'];

/// Current spinner character for a tick counter.
pub fn spinner_char(tick: u64) -> char {
    // One frame advance roughly every 8 ticks (~130ms at the 16ms tick).
    SPINNER_FRAMES[((tick / 8) % SPINNER_FRAMES.len() as u64) as usize]
}
