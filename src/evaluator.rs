//! Password evaluator - entropy estimate, pattern penalties and label.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::charset::CharsetProfile;
use crate::sections::{
    SectionResult, date_section, dictionary_section, keyboard_section, repetition_section,
    sequence_section, substitution_section,
};
use crate::strength::{Evaluation, PatternFlag, StrengthLabel};
use crate::wordlist::Wordlist;

/// Raw entropy below which the advice asks for more length and variety.
const LOW_ENTROPY_BITS: f64 = 45.0;

/// Categories needed before the advice stops asking for a mix.
const MIN_CATEGORIES: usize = 3;

/// Each penalty point removes this many bits of entropy.
const PENALTY_WEIGHT: f64 = 0.5;

/// Delay applied by [`evaluate_password_tx`] before evaluating.
#[cfg(feature = "async")]
pub const EVALUATION_DELAY: Duration = Duration::from_millis(300);

const EMPTY_MESSAGE: &str = "Generate or type a password to evaluate its entropy.";
const LOW_ENTROPY_MESSAGE: &str = "Increase entropy by adding length and uncommon characters.";
const FEW_CATEGORIES_MESSAGE: &str = "Mix different kinds of characters to reinforce it further.";
const NO_PATTERN_MESSAGE: &str = "No obvious patterns. Keep this password secret and unique.";

/// Password evaluator bound to a common-word list.
///
/// Evaluating is a pure function of the password and the word list given at
/// construction; the evaluator keeps nothing between calls.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    wordlist: Wordlist,
}

impl Evaluator {
    /// An evaluator using the built-in common words only.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wordlist(wordlist: Wordlist) -> Self {
        Self { wordlist }
    }

    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Evaluates password strength.
    ///
    /// Total over every input: the empty string yields a zero-entropy
    /// `VeryWeak` evaluation.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate
    ///
    /// # Returns
    /// An `Evaluation` with the entropy estimate, flags, label and advice.
    pub fn evaluate(&self, password: &SecretString) -> Evaluation {
        let pwd = password.expose_secret();
        let length = pwd.chars().count();

        if length == 0 {
            return Evaluation {
                length: 0,
                charset_size: 1,
                categories: 0,
                entropy: 0.0,
                penalty: 0,
                effective_entropy: 0.0,
                label: StrengthLabel::VeryWeak,
                flags: Vec::new(),
                message: EMPTY_MESSAGE.to_string(),
            };
        }

        let profile = CharsetProfile::of(pwd);
        let charset_size = profile.size();
        let entropy = length as f64 * f64::from(charset_size).log2();

        // Reporting order
        let sections: [(&str, SectionResult); 6] = [
            ("repetition", repetition_section(password)),
            ("sequence", sequence_section(password)),
            ("keyboard", keyboard_section(password)),
            ("dictionary", dictionary_section(password, &self.wordlist)),
            ("date", date_section(password)),
            ("substitution", substitution_section(password, &self.wordlist)),
        ];

        let mut flags = Vec::new();
        for (_section_name, result) in sections {
            if let Some(flag) = result {
                #[cfg(feature = "tracing")]
                tracing::trace!("Section {} raised: {}", _section_name, flag);
                flags.push(flag);
            }
        }

        let penalty: u32 = flags.iter().map(|f| f.penalty()).sum();
        let effective_entropy = (entropy - f64::from(penalty) * PENALTY_WEIGHT).max(0.0);
        let label = StrengthLabel::from_entropy(effective_entropy);
        let message = advice(&flags, entropy, profile.categories());

        #[cfg(feature = "tracing")]
        tracing::debug!(
            "Password evaluated: {:.1} bits, {:.1} effective, {} flags, label {}",
            entropy,
            effective_entropy,
            flags.len(),
            label
        );

        Evaluation {
            length,
            charset_size,
            categories: profile.categories(),
            entropy,
            penalty,
            effective_entropy,
            label,
            flags,
            message,
        }
    }

    /// Async version that sends the evaluation result via channel.
    ///
    /// Waits [`EVALUATION_DELAY`] first; if `token` is cancelled during the wait
    /// (a newer keystroke superseded this one) nothing is sent.
    #[cfg(feature = "async")]
    pub async fn evaluate_tx(
        &self,
        password: &SecretString,
        token: CancellationToken,
        tx: mpsc::Sender<Evaluation>,
    ) {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation is about to start...");

        tokio::select! {
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!("evaluation cancelled before start");
                return;
            }
            _ = tokio::time::sleep(EVALUATION_DELAY) => {}
        }

        let evaluation = self.evaluate(password);

        if let Err(_e) = tx.send(evaluation).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send password evaluation result: {}", _e);
        }
    }
}

/// Evaluates password strength against the built-in common words.
///
/// Shorthand for `Evaluator::new().evaluate(password)`.
pub fn evaluate_password(password: &SecretString) -> Evaluation {
    Evaluator::new().evaluate(password)
}

/// Picks the advisory message: patterns first, then low entropy, then
/// category mix, then the all-clear.
fn advice(flags: &[PatternFlag], entropy: f64, categories: usize) -> String {
    if !flags.is_empty() {
        let names: Vec<&str> = flags.iter().map(|f| f.label()).collect();
        format!("Patterns detected: {}.", names.join(", "))
    } else if entropy < LOW_ENTROPY_BITS {
        LOW_ENTROPY_MESSAGE.to_string()
    } else if categories < MIN_CATEGORIES {
        FEW_CATEGORIES_MESSAGE.to_string()
    } else {
        NO_PATTERN_MESSAGE.to_string()
    }
}

/// [`Evaluator::evaluate_tx`] with the built-in common words.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<Evaluation>,
) {
    let evaluator = Evaluator::new();
    evaluator.evaluate_tx(password, token, tx).await;
}
