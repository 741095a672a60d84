//! Password generation and strength estimation library
//!
//! This library generates random passwords from selected character classes
//! and estimates the strength of any password from its charset entropy and
//! a set of weak-pattern detectors.
//!
//! # Features
//!
//! - `async` (default): Enables debounced breach lookups and channel-based
//!   evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_LAB_WORDLIST_PATH`: Optional file of extra common words
//!   (default: `./assets/common-words.txt`), read by [`Wordlist::from_env`]
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_lab::{CharacterClass, evaluate_password, generate_password};
//! use secrecy::ExposeSecret;
//!
//! let password = generate_password(20, &CharacterClass::ALL).expect("classes selected");
//! let evaluation = evaluate_password(&password);
//!
//! println!("Password: {}", password.expose_secret());
//! println!("Entropy: {:.1} bits", evaluation.effective_entropy());
//! println!("Strength: {}", evaluation.label());
//! println!("{}", evaluation.message());
//! ```

// Internal modules
mod breach;
mod charset;
mod crack_time;
#[cfg(feature = "async")]
mod debounce;
mod evaluator;
mod generator;
mod random;
mod sections;
mod strength;
mod wordlist;

// Public API
pub use breach::{BreachError, BreachStatus, PREFIX_LEN, RangeQuery, sha1_hex};
pub use charset::{CharacterClass, CharsetProfile, DIGITS, LOWERCASE, SYMBOLS, UPPERCASE};
pub use crack_time::{AttackProfile, CrackEstimate, estimate_crack_times};
pub use evaluator::{Evaluator, evaluate_password};
pub use generator::{
    DEFAULT_LENGTH, GenerateError, GenerationRequest, MAX_LENGTH, MIN_LENGTH, generate_password,
    generate_password_with,
};
pub use random::{secure_index, shuffle};
pub use strength::{Evaluation, PatternFlag, StrengthLabel};
pub use wordlist::{
    COMMON_WORDS, KEYBOARD_PATTERNS, WORDLIST_PATH_ENV, Wordlist, WordlistError,
    get_wordlist_path,
};

#[cfg(feature = "async")]
pub use breach::{BREACH_DEBOUNCE, RangeFetcher, check_breach, schedule_breach_check};

#[cfg(feature = "async")]
pub use debounce::{DebouncedTask, Debouncer};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DELAY, evaluate_password_tx};
