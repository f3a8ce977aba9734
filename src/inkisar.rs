//! Inkisar (share correction) and tashih (rectification).
//!
//! When a holder's saham does not divide evenly across its head-count, the
//! ashl and every saham are scaled up by a per-category multiplier so that
//! heads receive whole shares.

use crate::fraction::{gcd_multiple, lcm_multiple, NumberRelation};

/// One holder's head-count against its un-divided saham, as seen by
/// [`correct`].
#[derive(Debug, Clone, Copy)]
pub struct Holder {
    pub saham: u64,
    pub heads: u32,
}

/// The outcome of a correction pass: the multiplier to scale the whole
/// problem by, plus the relation(s) that produced it, for reporting.
#[derive(Debug, Clone)]
pub struct Correction {
    pub multiplier: u64,
    pub notes: Vec<String>,
}

/// Per-holder head-residue relative to its own saham: `heads` divides
/// `saham` evenly (no correction needed), or one of the four relations
/// applies between `heads` and `saham / gcd(saham, heads)`.
fn per_holder_factor(holder: Holder) -> u64 {
    if holder.heads <= 1 || holder.saham % u64::from(holder.heads) == 0 {
        return 1;
    }
    let heads = u64::from(holder.heads);
    let g = gcd_multiple(&[holder.saham, heads]);
    // Only the part of `heads` not already covered by shared factors with
    // `saham` needs to be multiplied in.
    heads / g
}

/// Compute the correction multiplier across every holder whose head-count
/// does not evenly divide its saham.
///
/// Returns `1` (no correction) if every holder already divides evenly. When
/// more than one holder needs correction, the per-holder factors are
/// combined via lcm (tawafuq/tabayun between holders), matching the
/// classical multi-group tashih procedure.
///
/// # Errors
///
/// Propagates [`crate::error::Error`] from the underlying lcm computation
/// (unreachable in practice: factors are always positive).
pub fn correct(holders: &[Holder]) -> Result<Correction, crate::error::Error> {
    let factors: Vec<u64> = holders
        .iter()
        .copied()
        .map(per_holder_factor)
        .filter(|&f| f > 1)
        .collect();

    if factors.is_empty() {
        return Ok(Correction {
            multiplier: 1,
            notes: vec!["every holder's heads divide its saham evenly: no correction needed".to_string()],
        });
    }

    let multiplier = lcm_multiple(&factors)?;
    let mut notes = vec![format!(
        "per-holder correction factors: {}",
        factors.iter().map(u64::to_string).collect::<Vec<_>>().join(", ")
    )];
    if factors.len() > 1 {
        let relation = if factors.iter().all(|&f| f == factors[0]) {
            NumberRelation::Equal
        } else if gcd_multiple(&factors) > 1 {
            NumberRelation::CommonFactor
        } else {
            NumberRelation::Coprime
        };
        notes.push(format!("combined via {relation}"));
    }
    notes.push(format!("correction multiplier = {multiplier}"));

    Ok(Correction { multiplier, notes })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_correction_when_all_even() {
        let holders = [Holder { saham: 4, heads: 2 }, Holder { saham: 6, heads: 3 }];
        let result = correct(&holders).unwrap();
        assert_eq!(result.multiplier, 1);
    }

    #[test]
    fn single_group_tawafuq_correction() {
        // saham 4 across 6 heads: gcd(4,6)=2, factor = 6/2 = 3.
        let holders = [Holder { saham: 4, heads: 6 }];
        let result = correct(&holders).unwrap();
        assert_eq!(result.multiplier, 3);
    }

    #[test]
    fn single_group_tabayun_correction() {
        // saham 3 across 2 heads: gcd(3,2)=1, factor = 2.
        let holders = [Holder { saham: 3, heads: 2 }];
        let result = correct(&holders).unwrap();
        assert_eq!(result.multiplier, 2);
    }

    #[test]
    fn multi_group_factors_combine_via_lcm() {
        let holders = [Holder { saham: 3, heads: 2 }, Holder { saham: 4, heads: 6 }];
        let result = correct(&holders).unwrap();
        // factors = [2, 3], lcm = 6
        assert_eq!(result.multiplier, 6);
    }
}
