//! Pattern detection sections
//!
//! Each section checks the password against one weak-password heuristic.

mod date;
mod dictionary;
mod keyboard;
mod repetition;
mod sequence;
mod substitution;

pub use date::date_section;
pub use dictionary::dictionary_section;
pub use keyboard::keyboard_section;
pub use repetition::repetition_section;
pub use sequence::sequence_section;
pub use substitution::substitution_section;

use crate::strength::PatternFlag;

/// Result type for section evaluation functions.
/// - `Some(flag)` - The heuristic matched
/// - `None` - Section passed
pub type SectionResult = Option<PatternFlag>;
