//! Exact rational arithmetic over small integers.
//!
//! The faraid pipeline never needs floating point: every fardh is drawn from
//! a closed set of fractions, every ashl is a small positive integer, and
//! every saham is an exact integer count of shares of that ashl. This module
//! provides the handful of primitives the rest of the crate needs — gcd/lcm
//! over lists and a minimal [`Fraction`] type — rather than pulling in a
//! general-purpose bignum/rational crate for arithmetic that never leaves
//! the range of a few thousand.

use std::fmt;

use crate::error::Error;

/// Greatest common divisor of two non-negative integers.
#[must_use]
pub const fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// Least common multiple of two positive integers.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if either argument is zero.
pub fn lcm(a: u64, b: u64) -> Result<u64, Error> {
    if a == 0 || b == 0 {
        return Err(Error::InvalidInput {
            reason: "lcm is undefined for zero".to_string(),
        });
    }
    Ok(a / gcd(a, b) * b)
}

/// LCM across a non-empty list of positive integers.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `numbers` is empty or contains a zero.
pub fn lcm_multiple(numbers: &[u64]) -> Result<u64, Error> {
    let mut iter = numbers.iter().copied();
    let first = iter.next().ok_or_else(|| Error::InvalidInput {
        reason: "lcm_multiple requires at least one number".to_string(),
    })?;
    iter.try_fold(first, lcm)
}

/// GCD across a non-empty list of integers. Returns 1 for an empty list,
/// matching the "no shared factor" identity used by the relation classifier.
#[must_use]
pub fn gcd_multiple(numbers: &[u64]) -> u64 {
    numbers
        .iter()
        .copied()
        .fold(None, |acc: Option<u64>, n| match acc {
            None => Some(n),
            Some(a) => Some(gcd(a, n)),
        })
        .unwrap_or(1)
}

/// The four classical number-relations between two positive integers, used
/// both by the ashl denominator classifier and by the inkisar correction step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberRelation {
    /// tamathul / mumatsalah: the two numbers are equal.
    Equal,
    /// tadakhul / mudakholah: one divides the other.
    Divides,
    /// tabayun / mubayanah: coprime (gcd = 1), unequal.
    Coprime,
    /// tawafuq / muwafaqoh: share a common factor > 1, neither divides the other.
    CommonFactor,
}

impl NumberRelation {
    /// Classify the relation between `a` and `b`.
    #[must_use]
    pub fn of(a: u64, b: u64) -> Self {
        if a == b {
            return Self::Equal;
        }
        if a % b == 0 || b % a == 0 {
            return Self::Divides;
        }
        if gcd(a, b) == 1 {
            Self::Coprime
        } else {
            Self::CommonFactor
        }
    }
}

impl fmt::Display for NumberRelation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Equal => "tamathul",
            Self::Divides => "tadakhul",
            Self::Coprime => "tabayun",
            Self::CommonFactor => "tawafuq",
        };
        f.write_str(label)
    }
}

/// An exact, always-reduced, non-negative fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fraction {
    numerator: u64,
    denominator: u64,
}

impl Fraction {
    /// Build a reduced fraction `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `denominator` is zero.
    pub fn new(numerator: u64, denominator: u64) -> Result<Self, Error> {
        if denominator == 0 {
            return Err(Error::InvalidInput {
                reason: "fraction denominator cannot be zero".to_string(),
            });
        }
        let divisor = gcd(numerator, denominator).max(1);
        Ok(Self {
            numerator: numerator / divisor,
            denominator: denominator / divisor,
        })
    }

    #[must_use]
    pub const fn numerator(self) -> u64 {
        self.numerator
    }

    #[must_use]
    pub const fn denominator(self) -> u64 {
        self.denominator
    }

    /// Parse a string of the form `"n/d"` or a bare integer `"n"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for malformed input.
    pub fn parse(text: &str) -> Result<Self, Error> {
        let malformed = || Error::InvalidInput {
            reason: format!("malformed fraction: {text:?}"),
        };
        match text.split_once('/') {
            Some((n, d)) => {
                let n: u64 = n.trim().parse().map_err(|_| malformed())?;
                let d: u64 = d.trim().parse().map_err(|_| malformed())?;
                Self::new(n, d)
            }
            None => {
                let n: u64 = text.trim().parse().map_err(|_| malformed())?;
                Self::new(n, 1)
            }
        }
    }

    /// Render as `"n/d"`, or a bare integer when the denominator is 1.
    #[must_use]
    pub fn format(self) -> String {
        if self.denominator == 1 {
            self.numerator.to_string()
        } else {
            format!("{}/{}", self.numerator, self.denominator)
        }
    }

    /// Cross-multiplication comparison, avoiding float drift.
    #[must_use]
    pub fn compare(self, other: Self) -> std::cmp::Ordering {
        let left = u128::from(self.numerator) * u128::from(other.denominator);
        let right = u128::from(other.numerator) * u128::from(self.denominator);
        left.cmp(&right)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
