//! Busy indicator

use std::time::Duration;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
const FRAME_MS: u128 = 80;

/// Spinner glyph for the given time since the spinner started
pub fn spinner_frame(elapsed: Duration) -> &'static str {
    let idx = (elapsed.as_millis() / FRAME_MS) as usize % FRAMES.len();
    FRAMES[idx]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_advances_and_wraps() {
        assert_eq!(spinner_frame(Duration::ZERO), FRAMES[0]);
        assert_eq!(spinner_frame(Duration::from_millis(79)), FRAMES[0]);
        assert_eq!(spinner_frame(Duration::from_millis(80)), FRAMES[1]);
        assert_eq!(spinner_frame(Duration::from_millis(800)), FRAMES[0]);
    }
}
