//! Breach lookup support for the k-anonymity range protocol.
//!
//! Only the first five hex characters of the password's SHA-1 digest leave
//! the process; the service answers with every `SUFFIX:count` record sharing
//! that prefix and the match happens locally.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use sha1::{Digest, Sha1};
use thiserror::Error;

#[cfg(feature = "async")]
use std::future::Future;

#[cfg(feature = "async")]
use std::sync::Arc;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::debounce::{DebouncedTask, Debouncer};

/// Hex characters sent to the range service.
pub const PREFIX_LEN: usize = 5;

/// Delay between the last keystroke and the lookup.
#[cfg(feature = "async")]
pub const BREACH_DEBOUNCE: Duration = Duration::from_millis(600);

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BreachError {
    #[error("Malformed range record: {0:?}")]
    MalformedRecord(String),
    #[error("Range request failed: {0}")]
    Transport(String),
    #[error("Breach lookup cancelled")]
    Cancelled,
}

/// Outcome of matching a password against a range response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    Clean,
    Pwned { count: u64 },
}

impl BreachStatus {
    pub fn is_pwned(&self) -> bool {
        matches!(self, BreachStatus::Pwned { .. })
    }
}

impl fmt::Display for BreachStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreachStatus::Clean => f.write_str("no matches found for this password"),
            BreachStatus::Pwned { count } => {
                write!(f, "password appears in known breaches ({} times)", count)
            }
        }
    }
}

/// Uppercase hex SHA-1 digest of the password's UTF-8 bytes.
pub fn sha1_hex(password: &SecretString) -> String {
    let mut hasher = Sha1::new();
    hasher.update(password.expose_secret().as_bytes());
    hex::encode_upper(hasher.finalize())
}

/// A password's digest split into the part sent out and the part kept back.
#[derive(Clone, PartialEq, Eq)]
pub struct RangeQuery {
    digest: String,
}

impl RangeQuery {
    pub fn for_password(password: &SecretString) -> Self {
        Self {
            digest: sha1_hex(password),
        }
    }

    /// The five characters sent to the service.
    pub fn prefix(&self) -> &str {
        &self.digest[..PREFIX_LEN]
    }

    /// The 35 characters matched locally.
    pub fn suffix(&self) -> &str {
        &self.digest[PREFIX_LEN..]
    }

    /// Searches a newline-delimited `SUFFIX:count` body for this suffix.
    ///
    /// Blank lines are skipped and suffixes compare case-insensitively. A
    /// matching record with count 0 is a padding entry and reads as clean.
    ///
    /// # Errors
    /// `BreachError::MalformedRecord` for a non-blank line that is not
    /// `SUFFIX:count`.
    pub fn match_response(&self, body: &str) -> Result<BreachStatus, BreachError> {
        for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (suffix, count) = line
                .split_once(':')
                .ok_or_else(|| BreachError::MalformedRecord(line.to_string()))?;

            if !suffix.eq_ignore_ascii_case(self.suffix()) {
                continue;
            }

            let count: u64 = count
                .trim()
                .parse()
                .map_err(|_| BreachError::MalformedRecord(line.to_string()))?;

            return Ok(match count {
                0 => BreachStatus::Clean,
                count => BreachStatus::Pwned { count },
            });
        }
        Ok(BreachStatus::Clean)
    }
}

impl fmt::Debug for RangeQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RangeQuery")
            .field("prefix", &self.prefix())
            .finish_non_exhaustive()
    }
}

/// Transport to a range service, supplied by the caller.
#[cfg(feature = "async")]
pub trait RangeFetcher: Send + Sync {
    /// Returns the raw response body for `prefix`.
    fn fetch_range(&self, prefix: &str) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// Looks a password up through `fetcher`, giving up as soon as `token` is
/// cancelled.
///
/// # Errors
/// `BreachError::Cancelled` if the token fires first, otherwise whatever the
/// fetcher or [`RangeQuery::match_response`] reports.
#[cfg(feature = "async")]
pub async fn check_breach<F>(
    fetcher: &F,
    password: &SecretString,
    token: &CancellationToken,
) -> Result<BreachStatus, BreachError>
where
    F: RangeFetcher,
{
    let query = RangeQuery::for_password(password);

    let body = tokio::select! {
        _ = token.cancelled() => return Err(BreachError::Cancelled),
        body = fetcher.fetch_range(query.prefix()) => body,
    };

    let result = body.and_then(|body| query.match_response(&body));

    #[cfg(feature = "tracing")]
    {
        match &result {
            Ok(status) => tracing::info!("Breach lookup for prefix {}: {}", query.prefix(), status),
            Err(e) => tracing::error!("Breach lookup for prefix {} failed: {}", query.prefix(), e),
        }
    }

    result
}

/// Schedules a debounced lookup for `password`, superseding any lookup
/// still pending on `debouncer`.
///
/// The result is sent over `tx` unless the lookup was superseded. An empty
/// password only cancels the pending lookup and returns `None`.
#[cfg(feature = "async")]
pub fn schedule_breach_check<F>(
    debouncer: &mut Debouncer,
    fetcher: Arc<F>,
    password: SecretString,
    tx: mpsc::Sender<Result<BreachStatus, BreachError>>,
) -> Option<DebouncedTask>
where
    F: RangeFetcher + 'static,
{
    if password.expose_secret().is_empty() {
        debouncer.cancel();
        return None;
    }

    let task = debouncer.schedule(move |token| async move {
        let result = check_breach(fetcher.as_ref(), &password, &token).await;
        if result == Err(BreachError::Cancelled) {
            return;
        }
        if let Err(_e) = tx.send(result).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send breach lookup result: {}", _e);
        }
    });
    Some(task)
}
