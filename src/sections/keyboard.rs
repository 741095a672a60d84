//! Keyboard section - detects common keyboard walks.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::strength::PatternFlag;
use crate::wordlist::is_keyboard_pattern_in;

/// Checks the lowercased password for a known keyboard walk such as `qwerty`.
pub fn keyboard_section(password: &SecretString) -> SectionResult {
    is_keyboard_pattern_in(&password.expose_secret().to_lowercase())
        .then_some(PatternFlag::KeyboardPattern)
}
