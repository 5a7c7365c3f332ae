//! User-facing strings.
//!
//! All externally visible text lives here so screens and tests pull labels
//! from a single table instead of scattering literals through render code.

/// Headline shown on the onboarding screen.
pub const WELCOME: &str = "Welcome to Greetdeck!";

/// Label on the onboarding continue control.
pub const CONTINUE: &str = "Continue";

/// First line of every greeting card.
pub const GREETING_PREFIX: &str = "Hello,";

/// Accessibility label for a collapsed row's toggle control.
pub const SHOW_MORE: &str = "Show more";

/// Accessibility label for an expanded row's toggle control.
pub const SHOW_LESS: &str = "Show less";

/// Filler paragraph revealed when a card is expanded.
pub const FILLER_SENTENCE: &str =
    "Greetdeck ipsum dolor sit lazy, padding theme elit, sed do bouncy. ";

/// How many times the filler sentence repeats inside an expanded card.
pub const FILLER_REPEAT: usize = 4;

/// Build the full filler paragraph for an expanded card.
pub fn filler_text() -> String {
    FILLER_SENTENCE.repeat(FILLER_REPEAT)
}
