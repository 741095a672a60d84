//! Evaluation result types: detected patterns, strength labels and the evaluation itself.

use std::fmt;

/// Effective entropy at which the strength meter reads 100%.
const METER_FULL_ENTROPY: f64 = 80.0;

/// A weak-password heuristic matched by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternFlag {
    ConsecutiveRepetition,
    PredictableSequence,
    KeyboardPattern,
    CommonWord,
    TypicalDate,
    KnownSubstitution,
}

impl PatternFlag {
    pub fn label(self) -> &'static str {
        match self {
            PatternFlag::ConsecutiveRepetition => "consecutive repetition",
            PatternFlag::PredictableSequence => "predictable sequence",
            PatternFlag::KeyboardPattern => "keyboard pattern",
            PatternFlag::CommonWord => "common word",
            PatternFlag::TypicalDate => "typical date",
            PatternFlag::KnownSubstitution => "known substitution",
        }
    }

    /// Points subtracted from the pattern penalty total when this flag is raised.
    pub fn penalty(self) -> u32 {
        match self {
            PatternFlag::ConsecutiveRepetition => 12,
            PatternFlag::PredictableSequence => 15,
            PatternFlag::KeyboardPattern => 18,
            PatternFlag::CommonWord => 20,
            PatternFlag::TypicalDate => 10,
            PatternFlag::KnownSubstitution => 12,
        }
    }
}

impl fmt::Display for PatternFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Five-tier strength scale, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl StrengthLabel {
    /// Every tier, ascending.
    pub const ALL: [StrengthLabel; 5] = [
        StrengthLabel::VeryWeak,
        StrengthLabel::Weak,
        StrengthLabel::Medium,
        StrengthLabel::Strong,
        StrengthLabel::VeryStrong,
    ];

    /// Lowest effective entropy (bits) that earns this tier.
    pub fn min_entropy(self) -> f64 {
        match self {
            StrengthLabel::VeryWeak => 0.0,
            StrengthLabel::Weak => 36.0,
            StrengthLabel::Medium => 50.0,
            StrengthLabel::Strong => 65.0,
            StrengthLabel::VeryStrong => 80.0,
        }
    }

    /// Picks the highest tier whose threshold `bits` reaches.
    pub fn from_entropy(bits: f64) -> Self {
        Self::ALL
            .iter()
            .rev()
            .copied()
            .find(|label| bits >= label.min_entropy())
            .unwrap_or(StrengthLabel::VeryWeak)
    }

    pub fn name(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "very weak",
            StrengthLabel::Weak => "weak",
            StrengthLabel::Medium => "medium",
            StrengthLabel::Strong => "strong",
            StrengthLabel::VeryStrong => "very strong",
        }
    }

    /// Advice shown for the tier when the evaluation carries no message.
    pub fn description(self) -> &'static str {
        match self {
            StrengthLabel::VeryWeak => "Add length and variety to increase entropy.",
            StrengthLabel::Weak => "Add uppercase letters, digits and symbols to reinforce it.",
            StrengthLabel::Medium => "Acceptable, but extending it would make it safer.",
            StrengthLabel::Strong => "Good entropy and character diversity.",
            StrengthLabel::VeryStrong => "Excellent. Hard to predict even with advanced attacks.",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable result of evaluating one password.
///
/// `entropy` is `length * log2(charset_size)`, an upper-bound estimate that
/// assumes every character was picked uniformly and independently. It is not
/// the information content of the actual string.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub(crate) length: usize,
    pub(crate) charset_size: u32,
    pub(crate) categories: usize,
    pub(crate) entropy: f64,
    pub(crate) penalty: u32,
    pub(crate) effective_entropy: f64,
    pub(crate) label: StrengthLabel,
    pub(crate) flags: Vec<PatternFlag>,
    pub(crate) message: String,
}

impl Evaluation {
    /// Length in Unicode scalar values.
    pub fn length(&self) -> usize {
        self.length
    }

    pub fn charset_size(&self) -> u32 {
        self.charset_size
    }

    /// Distinct character categories present (whitespace included).
    pub fn categories(&self) -> usize {
        self.categories
    }

    pub fn entropy(&self) -> f64 {
        self.entropy
    }

    /// Sum of the penalties of every raised flag.
    pub fn penalty(&self) -> u32 {
        self.penalty
    }

    /// `max(0, entropy - penalty / 2)`; drives the label.
    pub fn effective_entropy(&self) -> f64 {
        self.effective_entropy
    }

    pub fn label(&self) -> StrengthLabel {
        self.label
    }

    /// Raised flags, in detection order.
    pub fn flags(&self) -> &[PatternFlag] {
        &self.flags
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn meter_percent(&self) -> u8 {
        let percent = (self.effective_entropy / METER_FULL_ENTROPY * 100.0).round();
        percent.clamp(0.0, 100.0) as u8
    }

    pub fn has_flag(&self, flag: PatternFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Labels of the raised flags, in detection order.
    pub fn flag_labels(&self) -> Vec<&'static str> {
        self.flags.iter().map(|f| f.label()).collect()
    }
}
