//! Password generator - random passwords from selected character classes.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use secrecy::SecretString;
use thiserror::Error;

use crate::charset::CharacterClass;
use crate::random::{secure_index, shuffle};

/// Length used by [`GenerationRequest::default`].
pub const DEFAULT_LENGTH: usize = 20;
/// Smallest length accepted by [`GenerationRequest::clamp_length`].
pub const MIN_LENGTH: usize = 8;
/// Largest length accepted by [`GenerationRequest::clamp_length`].
pub const MAX_LENGTH: usize = 60;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    #[error("Invalid generation request: {0}")]
    InvalidRequest(&'static str),
}

/// A validated request: a positive length and a non-empty set of classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    length: usize,
    classes: Vec<CharacterClass>,
}

impl GenerationRequest {
    /// Builds a request, deduplicating `classes` into canonical order.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::InvalidRequest` if no class is selected or
    /// `length` is zero.
    pub fn new<I>(length: usize, classes: I) -> Result<Self, GenerateError>
    where
        I: IntoIterator<Item = CharacterClass>,
    {
        let mut classes: Vec<CharacterClass> = classes.into_iter().collect();
        classes.sort_unstable();
        classes.dedup();

        if classes.is_empty() {
            return Err(GenerateError::InvalidRequest(
                "at least one character class must be selected",
            ));
        }
        if length == 0 {
            return Err(GenerateError::InvalidRequest("length must be at least 1"));
        }

        Ok(Self { length, classes })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn classes(&self) -> &[CharacterClass] {
        &self.classes
    }

    /// Clamps a user-supplied length into `MIN_LENGTH..=MAX_LENGTH`.
    pub fn clamp_length(length: usize) -> usize {
        length.clamp(MIN_LENGTH, MAX_LENGTH)
    }

    /// Whether every selected class is guaranteed to appear in the output.
    ///
    /// Only holds when the length can fit one seed character per class.
    pub fn guarantees_coverage(&self) -> bool {
        self.length >= self.classes.len()
    }

    fn pool(&self) -> Vec<char> {
        self.classes
            .iter()
            .flat_map(|class| class.alphabet().chars())
            .collect()
    }
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            classes: CharacterClass::ALL.to_vec(),
        }
    }
}

/// Generates a password from the operating system's CSPRNG.
///
/// # Arguments
/// * `length` - Number of characters to produce
/// * `classes` - Character classes to draw from
///
/// # Errors
/// `GenerateError::InvalidRequest` if `classes` is empty or `length` is zero.
pub fn generate_password(
    length: usize,
    classes: &[CharacterClass],
) -> Result<SecretString, GenerateError> {
    let request = GenerationRequest::new(length, classes.iter().copied())?;
    Ok(generate_password_with(&mut OsRng, &request))
}

/// Generates a password for `request` using the given secure source.
///
/// One seed character is drawn from each selected class, the remaining
/// positions are filled from the union of the selected alphabets, and the
/// buffer is shuffled before being cut to `request.length()`.
///
/// When the length is smaller than the number of selected classes the seeds
/// alone overflow it; the shuffled buffer is still truncated, so some
/// selected classes may be missing from the result (see
/// [`GenerationRequest::guarantees_coverage`]).
pub fn generate_password_with<R>(rng: &mut R, request: &GenerationRequest) -> SecretString
where
    R: RngCore + CryptoRng + ?Sized,
{
    let pool = request.pool();
    let mut buffer: Vec<char> = Vec::with_capacity(request.length.max(request.classes.len()));

    for class in &request.classes {
        let alphabet: Vec<char> = class.alphabet().chars().collect();
        buffer.push(alphabet[secure_index(rng, alphabet.len())]);
    }

    while buffer.len() < request.length {
        buffer.push(pool[secure_index(rng, pool.len())]);
    }

    shuffle(rng, &mut buffer);
    buffer.truncate(request.length);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generated password of {} characters from {} classes",
        buffer.len(),
        request.classes.len()
    );

    SecretString::new(buffer.into_iter().collect::<String>().into())
}
