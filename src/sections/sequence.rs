//! Sequence section - detects four consecutive letters or digits in order.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::charset::{DIGITS, LOWERCASE};
use crate::strength::PatternFlag;

const WINDOW: usize = 4;

/// Checks whether any four-character window of the lowercased password is a
/// slice of the alphabet or of the digits, ascending or descending.
///
/// # Returns
/// - `Some(PatternFlag::PredictableSequence)` if such a window exists
/// - `None` otherwise
pub fn sequence_section(password: &SecretString) -> SectionResult {
    let chars: Vec<char> = password.expose_secret().to_lowercase().chars().collect();
    if chars.len() < WINDOW {
        return None;
    }

    let found = chars
        .windows(WINDOW)
        .any(|window| [LOWERCASE, DIGITS].iter().any(|seq| is_run_of(window, seq)));

    found.then_some(PatternFlag::PredictableSequence)
}

/// Returns `true` if `window` appears in `sequence` forwards or backwards.
fn is_run_of(window: &[char], sequence: &str) -> bool {
    let Some(start) = sequence.find(window[0]) else {
        return false;
    };
    let seq: Vec<char> = sequence.chars().collect();
    let start = sequence[..start].chars().count();

    let ascending = window
        .iter()
        .enumerate()
        .all(|(i, c)| seq.get(start + i) == Some(c));
    let descending = window
        .iter()
        .enumerate()
        .all(|(i, c)| start.checked_sub(i).and_then(|j| seq.get(j)) == Some(c));

    ascending || descending
}
