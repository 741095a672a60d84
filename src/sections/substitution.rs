//! Substitution section - detects common words hidden behind leetspeak.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::strength::PatternFlag;
use crate::wordlist::Wordlist;

/// Maps a leetspeak character back to the letter it usually stands for.
fn unleet(c: char) -> char {
    match c {
        '0' | '@' => 'o',
        '1' | '!' | '|' | 'l' => 'i',
        '3' => 'e',
        '4' => 'a',
        '5' => 's',
        '7' => 't',
        '8' => 'b',
        other => other,
    }
}

/// Checks whether the password, with common substitutions undone, contains a
/// common word.
///
/// A plain common word that survives normalisation unchanged is flagged as
/// well, so it is penalised by both this section and the dictionary section.
///
/// # Returns
/// - `Some(PatternFlag::KnownSubstitution)` if the normalised text holds a common word
/// - `None` otherwise
pub fn substitution_section(password: &SecretString, wordlist: &Wordlist) -> SectionResult {
    let normalized: String = password
        .expose_secret()
        .to_lowercase()
        .chars()
        .map(unleet)
        .collect();

    wordlist
        .is_common_word_in(&normalized)
        .then_some(PatternFlag::KnownSubstitution)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        substitution_section(&SecretString::new(pwd.to_string().into()), &Wordlist::default())
    }

    #[test]
    fn test_substitution_detected() {
        assert_eq!(check("P4ssw0rd"), Some(PatternFlag::KnownSubstitution));
        assert_eq!(check("dr4g0n!"), Some(PatternFlag::KnownSubstitution));
        assert_eq!(check("m0nk3y"), Some(PatternFlag::KnownSubstitution));
        assert_eq!(check("5ecur1ty"), Some(PatternFlag::KnownSubstitution));
    }

    #[test]
    fn test_plain_word_also_flagged() {
        assert_eq!(check("password"), Some(PatternFlag::KnownSubstitution));
        assert_eq!(check("password1"), Some(PatternFlag::KnownSubstitution));
        assert_eq!(check("qwerty123"), Some(PatternFlag::KnownSubstitution));
    }

    #[test]
    fn test_normalisation_can_hide_a_plain_word() {
        // `l` becomes `i`, so "login" no longer reads as a word
        assert_eq!(check("login"), None);
    }

    #[test]
    fn test_substitution_no_hidden_word() {
        assert_eq!(check("Tr0ub4dor&3"), None);
        assert_eq!(check("h4ppy7ree"), None);
    }

    #[test]
    fn test_substitution_uses_extra_words() {
        let pwd = SecretString::new("5h4d0w".to_string().into());
        let extended = Wordlist::with_extra_words(["shadow"]);

        assert_eq!(substitution_section(&pwd, &Wordlist::default()), None);
        assert_eq!(
            substitution_section(&pwd, &extended),
            Some(PatternFlag::KnownSubstitution)
        );
    }
}
