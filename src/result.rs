//! The result assembler: turns saham-on-ashl into monetised shares.

use crate::fraction::{gcd, Fraction};
use crate::heir::HeirCategory;

/// One heir's resolved share.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct HeirShare {
    pub category: HeirCategory,
    pub quantity: u32,
    pub saham: u64,
    /// Share fraction in lowest terms, e.g. `"1/6"`.
    pub share_fraction: String,
    pub share_amount: u64,
    /// This share's saham as a percentage of the ashl (equivalently, of
    /// the tirkah), `0.0` for an excluded heir.
    pub percentage: f64,
    /// `share_amount` divided evenly across `quantity` heads.
    pub per_capita_amount: u64,
    /// True if this heir was present in the input but shut out by hajb.
    pub is_excluded: bool,
    /// Why the heir was excluded, if `is_excluded`.
    pub exclusion_reason: Option<String>,
    pub reason: String,
}

/// The full outcome of a calculation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CalculationResult {
    pub tirkah: u64,
    pub ashl_awal: u64,
    pub ashl_akhir: u64,
    pub total_saham: u64,
    pub is_aul: bool,
    pub is_radd: bool,
    pub special_case: Option<String>,
    pub shares: Vec<HeirShare>,
    pub notes: Vec<String>,
}

/// Build the final [`HeirShare`] list from `(category, quantity, saham,
/// reason)` tuples on the given final `ashl`, monetising against `tirkah`,
/// plus the `(category, quantity, reason)` heirs hajb excluded from the
/// ashl entirely — reported back as zero-share entries rather than omitted.
///
/// Share fractions are always reported in lowest terms (reduced via gcd) —
/// the one rendering choice this crate fixes once here rather than leaving
/// ambiguous per call site.
#[must_use]
pub fn assemble(
    tirkah: u64,
    ashl: u64,
    entries: &[(HeirCategory, u32, u64, String)],
    excluded: &[(HeirCategory, u32, String)],
) -> Vec<HeirShare> {
    let mut shares: Vec<HeirShare> = entries
        .iter()
        .map(|(category, quantity, saham, reason)| {
            let divisor = gcd(*saham, ashl).max(1);
            let fraction = Fraction::new(*saham / divisor, ashl / divisor)
                .expect("ashl is always positive");
            // share_amount = floor(saham * tirkah / ashl); the classical
            // sources never redistribute monetary rounding remainders.
            let share_amount = (u128::from(*saham) * u128::from(tirkah) / u128::from(ashl)) as u64;
            let percentage = *saham as f64 / ashl as f64 * 100.0;
            let per_capita_amount = share_amount / u64::from((*quantity).max(1));
            HeirShare {
                category: *category,
                quantity: *quantity,
                saham: *saham,
                share_fraction: fraction.format(),
                share_amount,
                percentage,
                per_capita_amount,
                is_excluded: false,
                exclusion_reason: None,
                reason: reason.clone(),
            }
        })
        .collect();

    shares.extend(excluded.iter().map(|(category, quantity, reason)| HeirShare {
        category: *category,
        quantity: *quantity,
        saham: 0,
        share_fraction: "0".to_string(),
        share_amount: 0,
        percentage: 0.0,
        per_capita_amount: 0,
        is_excluded: true,
        exclusion_reason: Some(reason.clone()),
        reason: reason.clone(),
    }));

    shares
}
