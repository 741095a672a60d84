//! Brute-force time estimates for an exhaustive search of the password's charset.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharsetProfile;

/// Below this many log10 seconds the estimate is printed as a plain fraction.
const SUBSECOND_LOG10: f64 = -2.0;

/// Remainders larger than 10^15 are printed in scientific form.
const MAX_PLAIN_EXPONENT: f64 = 15.0;

const BAR_MIN: f64 = 0.06;
const BAR_SLOPE: f64 = 0.07;

/// (unit name, seconds per unit), ascending.
const UNITS: [(&str, f64); 6] = [
    ("seconds", 1.0),
    ("minutes", 60.0),
    ("hours", 3_600.0),
    ("days", 86_400.0),
    ("years", 31_557_600.0),
    ("centuries", 3_155_760_000.0),
];

/// Attacker capability used for an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttackProfile {
    /// A single CPU.
    Cpu,
    /// A single GPU.
    Gpu,
    /// A distributed cracking cluster.
    Distributed,
}

impl AttackProfile {
    pub const ALL: [AttackProfile; 3] = [
        AttackProfile::Cpu,
        AttackProfile::Gpu,
        AttackProfile::Distributed,
    ];

    pub fn guesses_per_second(self) -> f64 {
        match self {
            AttackProfile::Cpu => 1e7,
            AttackProfile::Gpu => 1e9,
            AttackProfile::Distributed => 1e12,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            AttackProfile::Cpu => "cpu",
            AttackProfile::Gpu => "gpu",
            AttackProfile::Distributed => "distributed",
        }
    }
}

/// Time to exhaust the search space at one attack rate, kept in log10 seconds
/// so that astronomically large values stay representable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackEstimate {
    pub profile: AttackProfile,
    pub log10_seconds: f64,
}

impl CrackEstimate {
    /// Relative bar length in `0.06..=1.0` for a logarithmic gauge.
    pub fn bar_scale(&self) -> f64 {
        ((self.log10_seconds + 2.0) * BAR_SLOPE).clamp(BAR_MIN, 1.0)
    }
}

impl fmt::Display for CrackEstimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let log10_seconds = self.log10_seconds;
        if !log10_seconds.is_finite() {
            return f.write_str("incalculable");
        }

        if log10_seconds < SUBSECOND_LOG10 {
            return write!(f, "≈ {:.3} seconds", 10f64.powf(log10_seconds));
        }

        let (name, unit_log) = UNITS
            .iter()
            .map(|(name, secs)| (*name, secs.log10()))
            .take_while(|(_, unit_log)| log10_seconds >= *unit_log)
            .last()
            .unwrap_or((UNITS[0].0, 0.0));

        let diff = log10_seconds - unit_log;
        if diff > MAX_PLAIN_EXPONENT {
            return write!(f, "≈ 10^{:.1} {}", diff, name);
        }

        write!(f, "≈ {} {}", one_decimal(10f64.powf(diff)), name)
    }
}

/// Formats with at most one fractional digit, dropping a trailing `.0`.
fn one_decimal(value: f64) -> String {
    let formatted = format!("{:.1}", value);
    match formatted.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => formatted,
    }
}

/// Estimates how long each [`AttackProfile`] needs to try every password of
/// the same length over the same charset.
///
/// Returns an empty list for the empty password.
pub fn estimate_crack_times(password: &SecretString) -> Vec<CrackEstimate> {
    let pwd = password.expose_secret();
    let length = pwd.chars().count();
    if length == 0 {
        return Vec::new();
    }

    let charset_size = CharsetProfile::of(pwd).size();
    let log10_combinations = length as f64 * f64::from(charset_size).log10();

    AttackProfile::ALL
        .iter()
        .map(|&profile| CrackEstimate {
            profile,
            log10_seconds: log10_combinations - profile.guesses_per_second().log10(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate(log10_seconds: f64) -> CrackEstimate {
        CrackEstimate {
            profile: AttackProfile::Cpu,
            log10_seconds,
        }
    }

    #[test]
    fn test_empty_password_has_no_estimates() {
        let pwd = SecretString::new("".to_string().into());
        assert!(estimate_crack_times(&pwd).is_empty());
    }

    #[test]
    fn test_estimates_per_profile() {
        // 8 digits: 10^8 combinations
        let pwd = SecretString::new("58203917".to_string().into());
        let estimates = estimate_crack_times(&pwd);
        assert_eq!(estimates.len(), 3);
        assert!((estimates[0].log10_seconds - 1.0).abs() < 1e-9);
        assert!((estimates[1].log10_seconds + 1.0).abs() < 1e-9);
        assert!((estimates[2].log10_seconds + 4.0).abs() < 1e-9);
        assert_eq!(estimates[0].to_string(), "≈ 10 seconds");
        assert_eq!(estimates[2].to_string(), "≈ 0.000 seconds");
    }

    #[test]
    fn test_display_units() {
        assert_eq!(estimate(-1.0).to_string(), "≈ 0.1 seconds");
        assert_eq!(estimate(60f64.log10()).to_string(), "≈ 1 minutes");
        assert_eq!(estimate(7_200f64.log10()).to_string(), "≈ 2 hours");
        assert_eq!(estimate(129_600f64.log10()).to_string(), "≈ 1.5 days");
        assert_eq!(estimate(31_557_600f64.log10()).to_string(), "≈ 1 years");
    }

    #[test]
    fn test_display_subsecond() {
        assert_eq!(estimate(-2.5).to_string(), "≈ 0.003 seconds");
    }

    #[test]
    fn test_display_scientific_centuries() {
        let log10_seconds = 3_155_760_000f64.log10() + 20.0;
        assert_eq!(estimate(log10_seconds).to_string(), "≈ 10^20.0 centuries");
    }

    #[test]
    fn test_display_not_finite() {
        assert_eq!(estimate(f64::INFINITY).to_string(), "incalculable");
        assert_eq!(estimate(f64::NAN).to_string(), "incalculable");
    }

    #[test]
    fn test_bar_scale_bounds() {
        assert_eq!(estimate(-10.0).bar_scale(), BAR_MIN);
        assert!((estimate(3.0).bar_scale() - 0.35).abs() < 1e-9);
        assert_eq!(estimate(40.0).bar_scale(), 1.0);
    }
}
