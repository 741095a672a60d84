//! Date section - detects years from 1900 to 2099.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::strength::PatternFlag;

/// Checks for a four-digit run starting with `19` or `20`.
pub fn date_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    let found = chars.windows(4).any(|w| {
        matches!((w[0], w[1]), ('1', '9') | ('2', '0'))
            && w[2].is_ascii_digit()
            && w[3].is_ascii_digit()
    });
    found.then_some(PatternFlag::TypicalDate)
}
