//! Dictionary section - checks if the password contains a common word.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;
use crate::strength::PatternFlag;
use crate::wordlist::Wordlist;

/// Checks whether the lowercased password contains a common word as a substring.
///
/// # Returns
/// - `Some(PatternFlag::CommonWord)` if a common word is contained
/// - `None` otherwise
pub fn dictionary_section(password: &SecretString, wordlist: &Wordlist) -> SectionResult {
    wordlist
        .is_common_word_in(&password.expose_secret().to_lowercase())
        .then_some(PatternFlag::CommonWord)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(pwd: &str) -> SectionResult {
        dictionary_section(&SecretString::new(pwd.to_string().into()), &Wordlist::default())
    }

    #[test]
    fn test_dictionary_common_password() {
        assert_eq!(check("Password1"), Some(PatternFlag::CommonWord));
        assert_eq!(check("xxLetMeInxx"), Some(PatternFlag::CommonWord));
    }

    #[test]
    fn test_dictionary_strong_password() {
        assert_eq!(check("Tr0ub4dor&3"), None);
        assert_eq!(check("zK8#vQ2!"), None);
    }

    #[test]
    fn test_dictionary_extra_words() {
        let pwd = SecretString::new("Hunter2".to_string().into());
        let extended = Wordlist::with_extra_words(["hunter"]);

        assert_eq!(dictionary_section(&pwd, &Wordlist::default()), None);
        assert_eq!(dictionary_section(&pwd, &extended), Some(PatternFlag::CommonWord));
        // the built-in list is untouched by the extended one
        assert_eq!(dictionary_section(&pwd, &Wordlist::default()), None);
    }
}
