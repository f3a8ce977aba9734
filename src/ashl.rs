//! The ashl (problem base) calculator.

use crate::error::Error;
use crate::fardh::Fardh;
use crate::fraction::{gcd_multiple, lcm_multiple};
use crate::furudh::FurudhResult;

/// The four classical relations between a *set* of denominators (distinct
/// from [`crate::fraction::NumberRelation`], which relates a single pair).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenominatorRelation {
    /// tamathul: all denominators equal.
    Tamathul,
    /// tadakhul: every pair has one dividing the other.
    Tadakhul,
    /// tawafuq: pairwise gcd > 1 for at least one pair, but not tadakhul.
    Tawafuq,
    /// tabayun: pairwise coprime.
    Tabayun,
}

impl DenominatorRelation {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Tamathul => "tamathul",
            Self::Tadakhul => "tadakhul",
            Self::Tawafuq => "tawafuq",
            Self::Tabayun => "tabayun",
        }
    }
}

/// Classify a set of fixed-share denominators by their pairwise relation.
fn classify(denominators: &[u64]) -> DenominatorRelation {
    let mut unique: Vec<u64> = denominators.to_vec();
    unique.sort_unstable();
    unique.dedup();

    if unique.len() == 1 {
        return DenominatorRelation::Tamathul;
    }

    let all_divide = unique
        .windows(2)
        .all(|pair| pair[1] % pair[0] == 0 || pair[0] % pair[1] == 0);
    if all_divide {
        return DenominatorRelation::Tadakhul;
    }

    if gcd_multiple(&unique) > 1 {
        DenominatorRelation::Tawafuq
    } else {
        DenominatorRelation::Tabayun
    }
}

/// The result of computing the initial ashl from a set of fixed-share
/// classifications.
#[derive(Debug, Clone)]
pub struct AshlComputation {
    pub ashl: u64,
    pub relation: Option<DenominatorRelation>,
    pub notes: Vec<String>,
}

/// Compute `ashl₀ = lcm(denominators)` over the fixed-share holders.
///
/// Returns `ashl = 1` with no relation if there are no fixed-share holders
/// (the all-residuary pathway is handled separately).
///
/// # Errors
///
/// Propagates [`Error`] from the underlying lcm computation (unreachable in
/// practice since fardh denominators are always positive).
pub fn compute(fixed_holders: &[&FurudhResult]) -> Result<AshlComputation, Error> {
    let denominators: Vec<u64> = fixed_holders
        .iter()
        .filter_map(|h| h.status.fardh())
        .map(Fardh::denominator)
        .collect();

    if denominators.is_empty() {
        return Ok(AshlComputation {
            ashl: 1,
            relation: None,
            notes: vec!["no fixed-share holders present".to_string()],
        });
    }

    let ashl = lcm_multiple(&denominators)?;
    let relation = classify(&denominators);
    let notes = vec![
        format!(
            "denominators present: {}",
            denominators
                .iter()
                .map(u64::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        ),
        format!("denominator relation: {}", relation.label()),
        format!("ashl al-mas'alah (initial) = {ashl}"),
    ];

    Ok(AshlComputation {
        ashl,
        relation: Some(relation),
        notes,
    })
}

/// Saham for a single fixed-share holder on the given ashl: `(p * ashl) / q`.
///
/// # Errors
///
/// Returns [`Error::InvariantViolation`] if the division is not exact — this
/// would indicate `ashl` was not built as a multiple of `q`, a bug upstream.
pub fn saham_for(fardh: Fardh, ashl: u64) -> Result<u64, Error> {
    let numerator = fardh.numerator() * ashl;
    if numerator % fardh.denominator() != 0 {
        return Err(Error::invariant_violation(
            format!(
                "saham for fardh {}/{} on ashl {ashl} is not integral",
                fardh.numerator(),
                fardh.denominator()
            ),
            &[],
        ));
    }
    Ok(numerator / fardh.denominator())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_tamathul() {
        assert_eq!(classify(&[4, 4]), DenominatorRelation::Tamathul);
    }

    #[test]
    fn classify_tadakhul() {
        assert_eq!(classify(&[2, 4, 8]), DenominatorRelation::Tadakhul);
    }

    #[test]
    fn classify_tawafuq() {
        assert_eq!(classify(&[4, 6]), DenominatorRelation::Tawafuq);
    }

    #[test]
    fn classify_tabayun() {
        assert_eq!(classify(&[3, 4]), DenominatorRelation::Tabayun);
    }

    #[test]
    fn saham_for_computes_exact_integer() {
        assert_eq!(saham_for(Fardh::Quarter, 12).unwrap(), 3);
        assert_eq!(saham_for(Fardh::TwoThirds, 12).unwrap(), 8);
    }
}
