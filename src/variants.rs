//! Named variant cases: scenarios the normal furudh/ashl/radd/ashobah
//! pipeline does not cover directly, each with its own entry point.

use crate::error::Error;
use crate::fraction::lcm;
use crate::heir::HeirCategory;
use crate::input::CalculationInput;

/// Which variant, if any, an input triggers, and why. Mirrors the order the
/// classical sources check these in: an input matches at most one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Akdariyyah: husband + mother + single full (or paternal) sister +
    /// grandfather, no descendant and no father.
    Akdariyyah,
    /// Jadd-with-siblings: grandfather inherits alongside full/paternal
    /// siblings (no father present).
    JaddWithSiblings,
    /// Musytarakah (al-Himariyyah): maternal siblings present alongside
    /// full siblings, husband, and mother, in the specific head-count
    /// pattern that triggers equal-footing redistribution.
    Musytarakah,
    /// Gharrawain/umariyyatan: husband-or-wife + father + mother, no
    /// descendant, no sibling — a dispatch tag only, resolved by the
    /// umariyyatan mother's-share rule already built into the furudh
    /// engine and orchestrator.
    Gharrawain,
}

fn sibling_categories() -> [HeirCategory; 6] {
    [
        HeirCategory::FullBrother,
        HeirCategory::PaternalBrother,
        HeirCategory::MaternalBrother,
        HeirCategory::FullSister,
        HeirCategory::PaternalSister,
        HeirCategory::MaternalSister,
    ]
}

fn has_descendant(input: &CalculationInput) -> bool {
    input.has_any(&[
        HeirCategory::Son,
        HeirCategory::Daughter,
        HeirCategory::SonsSon,
        HeirCategory::SonsDaughter,
    ])
}

/// Detect which named variant (if any) applies, in classical check order.
#[must_use]
pub fn detect(input: &CalculationInput) -> Option<Variant> {
    if is_akdariyyah(input) {
        return Some(Variant::Akdariyyah);
    }
    if is_jadd_with_siblings(input) {
        return Some(Variant::JaddWithSiblings);
    }
    if is_musytarakah(input) {
        return Some(Variant::Musytarakah);
    }
    if is_gharrawain(input) {
        return Some(Variant::Gharrawain);
    }
    None
}

fn is_akdariyyah(input: &CalculationInput) -> bool {
    input.has(HeirCategory::Husband)
        && input.has(HeirCategory::Mother)
        && input.has(HeirCategory::Grandfather)
        && !input.has(HeirCategory::Father)
        && !has_descendant(input)
        && (input.quantity_of(HeirCategory::FullSister) == 1
            || input.quantity_of(HeirCategory::PaternalSister) == 1)
        && input.sibling_count() == 1
}

fn is_jadd_with_siblings(input: &CalculationInput) -> bool {
    input.has(HeirCategory::Grandfather)
        && !input.has(HeirCategory::Father)
        && !has_descendant(input)
        && input.has_any(&[
            HeirCategory::FullBrother,
            HeirCategory::PaternalBrother,
            HeirCategory::FullSister,
            HeirCategory::PaternalSister,
        ])
}

fn is_musytarakah(input: &CalculationInput) -> bool {
    input.has_any(&[HeirCategory::Husband])
        && input.has(HeirCategory::Mother)
        && input.has_any(&[HeirCategory::MaternalBrother, HeirCategory::MaternalSister])
        && input.has_any(&[HeirCategory::FullBrother, HeirCategory::FullSister])
        && !has_descendant(input)
        && !input.has(HeirCategory::Father)
        && !input.has(HeirCategory::Grandfather)
        && (input.quantity_of(HeirCategory::MaternalBrother)
            + input.quantity_of(HeirCategory::MaternalSister))
            >= 2
}

fn is_gharrawain(input: &CalculationInput) -> bool {
    crate::furudh::is_umariyyatan(input)
}

/// Akdariyyah: husband keeps 1/2 and the mother's share is reduced from
/// 1/3 to 1/6, then the grandfather and sister pool their shares and
/// redivide the pool 2:1 in the grandfather's favour.
///
/// Returns `(ashl_akhir, shares)` for husband, mother, grandfather, and
/// `sister` (the single full or paternal sister that triggered the case),
/// in that order.
#[must_use]
pub fn akdariyyah(sister: HeirCategory) -> (u64, Vec<(HeirCategory, u64)>) {
    // ashl = 6 * (grandfather weight 2 + sister weight 1) = 18.
    // husband 1/2 = 9, mother 1/6 = 3, pool = 18 - 9 - 3 = 6, split 2:1:
    // grandfather = 6*2/3 = 4, sister = 6*1/3 = 2.
    let ashl_akhir = 18u64;
    let husband = 9u64;
    let mother = 3u64;
    let grandfather = 4u64;
    let sister_share = 2u64;
    (
        ashl_akhir,
        vec![
            (HeirCategory::Husband, husband),
            (HeirCategory::Mother, mother),
            (HeirCategory::Grandfather, grandfather),
            (sister, sister_share),
        ],
    )
}

/// Jadd-with-siblings: the grandfather takes the better of three options
/// against full/paternal siblings: a flat sixth of the whole estate
/// (`ashl`), a third of what remains after every other fardh-holder is paid
/// (`residue`), or muqasama — a per-weight partition of `residue` alongside
/// the competing siblings, weighted 2:1 like ordinary residuary
/// distribution. Ties favour muqasama, per the companions' preference for
/// treating the grandfather as a sibling where the outcome is equal.
#[must_use]
pub fn jadd_with_siblings_best_share(
    ashl: u64,
    residue: u64,
    sibling_weight_total: u64,
    grandfather_weight: u64,
) -> JaddOption {
    let sixth = ashl / 6;
    let third_of_residue = residue / 3;
    let total_weight = sibling_weight_total + grandfather_weight;
    let muqasama = if total_weight == 0 {
        residue
    } else {
        (residue * grandfather_weight) / total_weight
    };

    if muqasama >= sixth && muqasama >= third_of_residue {
        JaddOption::Muqasama(muqasama)
    } else if third_of_residue > sixth {
        JaddOption::Third(third_of_residue)
    } else {
        JaddOption::Sixth(sixth)
    }
}

/// Which of the grandfather's three options was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JaddOption {
    Sixth(u64),
    Third(u64),
    Muqasama(u64),
}

impl JaddOption {
    #[must_use]
    pub const fn saham(self) -> u64 {
        match self {
            Self::Sixth(s) | Self::Third(s) | Self::Muqasama(s) => s,
        }
    }
}

/// Musytarakah: maternal siblings (normally capped at 1/3 or 1/6) and full
/// siblings (normally excluded by the husband+mother combination leaving no
/// residue) are, by the companions' ruling adopted here, treated as equal
/// claimants on the maternal third and split per head rather than 2:1.
///
/// `full_sibling_heads` and `maternal_sibling_heads` are raw head-counts
/// (quantities), not weighted.
///
/// # Errors
///
/// Propagates [`Error`] from the underlying lcm computation.
pub fn musytarakah(
    full_sibling_heads: u32,
    maternal_sibling_heads: u32,
) -> Result<(u64, Vec<u64>), Error> {
    // Husband 1/2, Mother 1/6, maternal siblings' combined 1/3: ashl = 6.
    let ashl = lcm(2, lcm(6, 3)?)?;
    let husband = ashl / 2;
    let mother = ashl / 6;
    let pool = ashl - husband - mother;
    let heads = u64::from(full_sibling_heads) + u64::from(maternal_sibling_heads);
    let per_head = pool / heads.max(1);
    let remainder = pool - per_head * heads;

    let mut per_sibling = vec![per_head; heads as usize];
    if remainder > 0 && !per_sibling.is_empty() {
        per_sibling[0] += remainder;
    }

    Ok((ashl, per_sibling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jadd_prefers_third_of_residue_when_siblings_are_heavy() {
        // ashl 12 (sixth = 2), residue 9 (third = 3): with heavy sibling
        // weight muqasama collapses near zero, so the flat third wins.
        let option = jadd_with_siblings_best_share(12, 9, 100, 1);
        assert_eq!(option.saham(), 3);
        assert!(matches!(option, JaddOption::Third(_)));
    }

    #[test]
    fn jadd_falls_back_to_sixth_when_residue_is_thin() {
        // residue 3 (third = 1) is worse than the flat sixth (2) of a
        // larger whole-estate ashl.
        let option = jadd_with_siblings_best_share(12, 3, 100, 1);
        assert_eq!(option.saham(), 2);
        assert!(matches!(option, JaddOption::Sixth(_)));
    }

    #[test]
    fn jadd_prefers_muqasama_when_siblings_are_few() {
        // residue 9 split 2:1 between grandfather (weight 2) and one
        // brother (weight 2, tie) -> muqasama = 9*2/4 = 4, beats third (3).
        let option = jadd_with_siblings_best_share(12, 9, 2, 2);
        assert_eq!(option.saham(), 4);
        assert!(matches!(option, JaddOption::Muqasama(_)));
    }

    #[test]
    fn musytarakah_splits_pool_equally_per_head() {
        let (ashl, shares) = musytarakah(2, 1).unwrap();
        assert_eq!(ashl, 6);
        assert_eq!(shares.iter().sum::<u64>(), ashl - ashl / 2 - ashl / 6);
        assert_eq!(shares.len(), 3);
    }

    #[test]
    fn akdariyyah_shares_sum_to_ashl() {
        let (ashl, shares) = akdariyyah(HeirCategory::FullSister);
        assert_eq!(shares.iter().map(|(_, s)| s).sum::<u64>(), ashl);
    }

    #[test]
    fn akdariyyah_matches_classical_saham() {
        let (ashl, shares) = akdariyyah(HeirCategory::FullSister);
        assert_eq!(ashl, 18);
        let find = |c: HeirCategory| shares.iter().find(|(cat, _)| *cat == c).unwrap().1;
        assert_eq!(find(HeirCategory::Husband), 9);
        assert_eq!(find(HeirCategory::Mother), 3);
        assert_eq!(find(HeirCategory::Grandfather), 4);
        assert_eq!(find(HeirCategory::FullSister), 2);
    }

    #[test]
    fn gharrawain_is_detected_via_umariyyatan() {
        use crate::input::CalculationInputBuilder;
        let input = CalculationInputBuilder::new(100)
            .with_heir(HeirCategory::Wife, 1)
            .with_heir(HeirCategory::Father, 1)
            .with_heir(HeirCategory::Mother, 1)
            .build()
            .unwrap();
        assert_eq!(detect(&input), Some(Variant::Gharrawain));
    }
}
