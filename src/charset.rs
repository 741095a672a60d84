//! Character classes used by the generator and the charset estimate used by the evaluator.

/// Lowercase ASCII letters.
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
/// Uppercase ASCII letters.
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
/// ASCII digits.
pub const DIGITS: &str = "0123456789";
/// Punctuation offered by the generator.
pub const SYMBOLS: &str = "!@#$%^&*()-_=+[]{}<>?/|~.,:;'\"`";

/// Pool sizes assumed by the entropy estimate for each observed category.
const LOWERCASE_POOL: u32 = 26;
const UPPERCASE_POOL: u32 = 26;
const DIGIT_POOL: u32 = 10;
const SYMBOL_POOL: u32 = 33;
const WHITESPACE_POOL: u32 = 1;

/// A character class the generator can draw from.
///
/// The alphabets are disjoint and fixed; the derived ordering is the order in
/// which seed characters are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharacterClass {
    /// Every class, in canonical order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Symbol,
    ];

    /// The member alphabet of this class.
    pub fn alphabet(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Symbol => SYMBOLS,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            CharacterClass::Lowercase => "lowercase",
            CharacterClass::Uppercase => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Symbol => "symbol",
        }
    }

    /// Returns `true` if `c` belongs to this class's alphabet.
    pub fn contains(self, c: char) -> bool {
        self.alphabet().contains(c)
    }
}

/// Character categories observed in a password.
///
/// Unlike [`CharacterClass`], a symbol here is anything that is neither an
/// ASCII letter, an ASCII digit nor whitespace, so non-ASCII letters count as
/// symbols.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharsetProfile {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    pub has_whitespace: bool,
}

impl CharsetProfile {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut profile, c| {
            if c.is_ascii_lowercase() {
                profile.has_lower = true;
            } else if c.is_ascii_uppercase() {
                profile.has_upper = true;
            } else if c.is_ascii_digit() {
                profile.has_digit = true;
            } else if c.is_whitespace() {
                profile.has_whitespace = true;
            } else {
                profile.has_symbol = true;
            }
            profile
        })
    }

    /// Estimated alphabet size, never below 1 so that `log2` stays finite.
    pub fn size(&self) -> u32 {
        let size = [
            (self.has_lower, LOWERCASE_POOL),
            (self.has_upper, UPPERCASE_POOL),
            (self.has_digit, DIGIT_POOL),
            (self.has_symbol, SYMBOL_POOL),
            (self.has_whitespace, WHITESPACE_POOL),
        ]
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, pool)| pool)
        .sum::<u32>();
        size.max(1)
    }

    /// Number of distinct categories present, whitespace included.
    pub fn categories(&self) -> usize {
        [
            self.has_lower,
            self.has_upper,
            self.has_digit,
            self.has_symbol,
            self.has_whitespace,
        ]
        .iter()
        .filter(|&&b| b)
        .count()
    }
}
