//! Status-output surface state.
//!
//! The controller keeps the last user-facing message and a rotating
//! activity glyph here, and renders the combined text to the host's status
//! sink only on the ×100 slow-tick cadence. The glyph advances once per
//! render, so a moving dot on the surface is the operator's signal that the
//! slow cadence is alive.

use heapless::String as BoundedString;

/// Message buffer capacity; longer messages are truncated on a char
/// boundary.
const MESSAGE_CAP: usize = 256;

/// Glyph rotation, blank first. Period 5.
const ACTIVITY_GLYPHS: [&str; 5] = ["    ", ".   ", " .  ", "  . ", "   ."];

/// Rotating activity glyph.
#[derive(Debug, Default)]
pub struct ActivityIndicator {
    counter: usize,
}

impl ActivityIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current glyph, advancing the rotation by one.
    pub fn next(&mut self) -> &'static str {
        if self.counter >= ACTIVITY_GLYPHS.len() {
            self.counter = 0;
        }
        let glyph = ACTIVITY_GLYPHS[self.counter];
        self.counter += 1;
        glyph
    }

    /// Number of distinct glyphs in the rotation.
    pub const fn period() -> usize {
        ACTIVITY_GLYPHS.len()
    }
}

/// Last status message plus the activity indicator.
pub struct StatusPanel {
    message: BoundedString<MESSAGE_CAP>,
    indicator: ActivityIndicator,
}

impl StatusPanel {
    pub fn new() -> Self {
        Self {
            message: BoundedString::new(),
            indicator: ActivityIndicator::new(),
        }
    }

    /// Replace the last message, truncating to the buffer capacity.
    pub fn set_message(&mut self, message: &str) {
        self.message.clear();
        let mut end = message.len().min(MESSAGE_CAP);
        while !message.is_char_boundary(end) {
            end -= 1;
        }
        let _ = self.message.push_str(&message[..end]);
    }

    pub fn clear_message(&mut self) {
        self.message.clear();
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Render the surface text: message, newline, next activity glyph.
    pub fn render(&mut self) -> String {
        format!("{}\n{}", self.message, self.indicator.next())
    }
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self::new()
    }
}
