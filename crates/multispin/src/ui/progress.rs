//! Spinner animation state.
//!
//! The glyph only advances when the render loop completes a full repaint
//! pass, so every row painted in the same pass shows the same frame.

use super::theme::SPINNER_FRAMES;

#[derive(Debug, Clone)]
pub struct ProgressIndicator {
    frames: &'static [&'static str],
    frame: usize,
}

impl ProgressIndicator {
    pub fn new(frames: &'static [&'static str]) -> Self {
        debug_assert!(!frames.is_empty(), "spinner needs at least one frame");
        Self { frames, frame: 0 }
    }

    /// Glyph for the pass currently being painted.
    pub fn current_glyph(&self) -> &'static str {
        self.frames[self.frame % self.frames.len()]
    }

    /// Advance to the next frame, wrapping around.
    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % self.frames.len();
    }

    /// Get current frame number (for testing)
    pub fn frame(&self) -> usize {
        self.frame
    }
}

impl Default for ProgressIndicator {
    fn default() -> Self {
        Self::new(&SPINNER_FRAMES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_animation() {
        let mut progress = ProgressIndicator::default();
        assert_eq!(progress.current_glyph(), "⠋");

        progress.tick();
        assert_eq!(progress.frame(), 1);
        assert_eq!(progress.current_glyph(), "⠙");
    }

    #[test]
    fn test_progress_wraps() {
        let mut progress = ProgressIndicator::new(&["a", "b", "c"]);
        for _ in 0..3 {
            progress.tick();
        }
        assert_eq!(progress.frame(), 0);
        assert_eq!(progress.current_glyph(), "a");
    }
}
