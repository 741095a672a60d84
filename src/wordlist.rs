//! Word list management module
//!
//! Holds the built-in keyboard-walk and common-word tables and the
//! [`Wordlist`] value that extends the common words with entries loaded
//! from a file.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming the extra word list file.
pub const WORDLIST_PATH_ENV: &str = "PWD_LAB_WORDLIST_PATH";

const DEFAULT_WORDLIST_PATH: &str = "./assets/common-words.txt";

/// Extra words shorter than this would match almost any password as a substring.
const MIN_WORD_LEN: usize = 3;

/// Keyboard walks searched for as substrings of the lowercased password.
pub const KEYBOARD_PATTERNS: &[&str] = &["qwerty", "asdf", "zxcv", "1q2w3e", "qaz", "wsx", "wasd"];

/// Built-in common passwords and words, searched for as substrings.
pub const COMMON_WORDS: &[&str] = &[
    "password",
    "contraseña",
    "admin",
    "welcome",
    "dragon",
    "monkey",
    "football",
    "baseball",
    "iloveyou",
    "qwerty",
    "abc123",
    "letmein",
    "master",
    "princess",
    "azerty",
    "clave",
    "security",
    "pass",
    "login",
];

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Word list file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read word list file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Word list file is empty")]
    EmptyFile,
}

/// Returns the extra word list path.
///
/// Priority:
/// 1. Environment variable `PWD_LAB_WORDLIST_PATH`
/// 2. Default path `./assets/common-words.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var(WORDLIST_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_WORDLIST_PATH))
}

/// Common-word dictionary: the built-in [`COMMON_WORDS`] plus any extra words.
///
/// The default value holds the built-in table only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wordlist {
    extra: HashSet<String>,
}

impl Wordlist {
    /// Builds a word list from extra words.
    ///
    /// Words are trimmed and lowercased; blank entries and words shorter than
    /// three characters are skipped.
    pub fn with_extra_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extra = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| w.chars().count() >= MIN_WORD_LEN)
            .collect();
        Self { extra }
    }

    /// Loads extra common words from the configured file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File is empty
    pub fn from_env() -> Result<Self, WordlistError> {
        Self::load(get_wordlist_path())
    }

    /// Loads extra common words from a file, one word per line.
    ///
    /// # Errors
    ///
    /// Same as [`Wordlist::from_env`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordlistError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list loading FAILED: FileNotFound {:?}", path);
            return Err(WordlistError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Word list loading FAILED: Empty file {:?}", path);
            return Err(WordlistError::EmptyFile);
        }

        let wordlist = Self::with_extra_words(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Word list loaded: {} extra words from {:?}",
            wordlist.extra_word_count(),
            path
        );

        Ok(wordlist)
    }

    /// Number of extra words on top of the built-in table.
    pub fn extra_word_count(&self) -> usize {
        self.extra.len()
    }

    /// Returns `true` if any built-in or extra common word satisfies `pred`.
    pub fn any_word<F>(&self, mut pred: F) -> bool
    where
        F: FnMut(&str) -> bool,
    {
        COMMON_WORDS.iter().any(|w| pred(*w)) || self.extra.iter().any(|w| pred(w.as_str()))
    }

    /// Returns `true` if `text` contains a common word as a substring.
    ///
    /// `text` is expected to be lowercased already.
    pub fn is_common_word_in(&self, text: &str) -> bool {
        self.any_word(|word| text.contains(word))
    }
}

/// Returns `true` if `text` contains a known keyboard walk.
pub fn is_keyboard_pattern_in(text: &str) -> bool {
    KEYBOARD_PATTERNS.iter().any(|pattern| text.contains(pattern))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: env mutation is confined to #[serial] tests
        unsafe { std::env::remove_var(key); }
    }

    #[test]
    #[serial]
    fn test_get_wordlist_path_default() {
        remove_env(WORDLIST_PATH_ENV);
        assert_eq!(get_wordlist_path(), PathBuf::from(DEFAULT_WORDLIST_PATH));
    }

    #[test]
    #[serial]
    fn test_get_wordlist_path_from_env() {
        set_env(WORDLIST_PATH_ENV, "/etc/pwd-lab/words.txt");
        assert_eq!(get_wordlist_path(), PathBuf::from("/etc/pwd-lab/words.txt"));
        remove_env(WORDLIST_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_from_env_file_not_found() {
        set_env(WORDLIST_PATH_ENV, "/nonexistent/path/words.txt");

        let result = Wordlist::from_env();
        assert!(matches!(result, Err(WordlistError::FileNotFound(_))));

        remove_env(WORDLIST_PATH_ENV);
    }

    #[test]
    fn test_load_empty_file() {
        let temp_file = NamedTempFile::new().expect("Failed to create temp file");

        let result = Wordlist::load(temp_file.path());
        assert!(matches!(result, Err(WordlistError::EmptyFile)));
    }

    #[test]
    fn test_load_skips_short_words() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "Sunshine").expect("Failed to write");
        writeln!(temp_file, "  trustno1  ").expect("Failed to write");
        writeln!(temp_file, "ab").expect("Failed to write");
        writeln!(temp_file).expect("Failed to write");

        let wordlist = Wordlist::load(temp_file.path()).unwrap();
        assert_eq!(wordlist.extra_word_count(), 2);
        assert!(wordlist.is_common_word_in("mysunshine!"));
        assert!(wordlist.is_common_word_in("trustno1"));
        assert!(!wordlist.is_common_word_in("xaby"));
    }

    #[test]
    fn test_loaded_words_stay_with_their_list() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        writeln!(temp_file, "shadow").expect("Failed to write");

        let loaded = Wordlist::load(temp_file.path()).unwrap();
        let builtin = Wordlist::default();

        assert!(loaded.is_common_word_in("shadow"));
        assert!(!builtin.is_common_word_in("shadow"));
        assert_eq!(builtin.extra_word_count(), 0);
    }

    #[test]
    fn test_builtin_words() {
        let wordlist = Wordlist::default();
        assert!(wordlist.is_common_word_in("mypassword"));
        assert!(wordlist.is_common_word_in("contraseña"));
        assert!(!wordlist.is_common_word_in("zq9xv"));
    }

    #[test]
    fn test_with_extra_words_normalizes() {
        let wordlist = Wordlist::with_extra_words([" Hunter ", "ok", ""]);
        assert_eq!(wordlist.extra_word_count(), 1);
        assert!(wordlist.is_common_word_in("hunter2"));
    }

    #[test]
    fn test_keyboard_patterns() {
        assert!(is_keyboard_pattern_in("xxqwertyxx"));
        assert!(is_keyboard_pattern_in("1q2w3e4r"));
        assert!(!is_keyboard_pattern_in("qwrty"));
    }
}
