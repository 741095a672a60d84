//! Repetition section - detects a character repeated three or more times in a row.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::strength::PatternFlag;

const MIN_RUN: usize = 3;

/// Checks for runs of the same character. Case-sensitive: `aAa` is not a run.
///
/// # Returns
/// - `Some(PatternFlag::ConsecutiveRepetition)` if a run of three is found
/// - `None` otherwise
pub fn repetition_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().chars().collect();
    if chars.len() < MIN_RUN {
        return None;
    }

    let mut run = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            run += 1;
            if run >= MIN_RUN {
                return Some(PatternFlag::ConsecutiveRepetition);
            }
        } else {
            run = 1;
        }
    }
    None
}
