//! The Furudh engine: classifies every present heir, including those
//! excluded by hajb (retained and tagged, not dropped).

use crate::fardh::Fardh;
use crate::heir::HeirCategory;
use crate::input::CalculationInput;
use crate::rules::{self, Verdict};

/// The classification a present heir resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FurudhStatus {
    /// A fixed fraction of the ashl.
    Fixed(Fardh),
    /// A fixed fraction, plus participation in the residuary pool.
    FixedAndResiduary(Fardh),
    /// Pure residuary (ashobah): takes whatever remains.
    Residuary,
    /// The umariyyatan-derived mother's share, resolved in the orchestrator
    /// once the spouse's saham on the final base is known.
    UmariyyatanMotherShare,
    /// Excluded by hajb: present in the input but entitled to nothing. The
    /// reason is carried on [`FurudhResult::reason`], not duplicated here.
    Excluded,
}

impl FurudhStatus {
    /// True if this status ever carries a fixed numerator/denominator pair
    /// (i.e. contributes to the ashl's lcm computation).
    #[must_use]
    pub const fn fardh(self) -> Option<Fardh> {
        match self {
            Self::Fixed(f) | Self::FixedAndResiduary(f) => Some(f),
            Self::Residuary | Self::UmariyyatanMotherShare | Self::Excluded => None,
        }
    }

    /// True if this heir also participates in the residuary pool:
    /// pure ashobah, or a fardh-holder with additional residuary rights
    /// (father/grandfather with only female descendants).
    #[must_use]
    pub const fn participates_in_residue(self) -> bool {
        matches!(self, Self::Residuary | Self::FixedAndResiduary(_))
    }

    /// True if this heir was excluded by hajb and carries no share at all.
    #[must_use]
    pub const fn is_excluded(self) -> bool {
        matches!(self, Self::Excluded)
    }
}

/// The classification of one present heir.
#[derive(Debug, Clone, PartialEq)]
pub struct FurudhResult {
    pub category: HeirCategory,
    pub quantity: u32,
    pub status: FurudhStatus,
    pub reason: String,
}

/// True when the heir set is exactly `{spouse, father, mother}`.
#[must_use]
pub fn is_umariyyatan(input: &CalculationInput) -> bool {
    let spouse_present = input.has_any(&[HeirCategory::Husband, HeirCategory::Wife]);
    let spouse_count = usize::from(input.has(HeirCategory::Husband))
        + usize::from(input.has(HeirCategory::Wife));
    spouse_present
        && spouse_count == 1
        && input.has(HeirCategory::Father)
        && input.has(HeirCategory::Mother)
        && input.heirs.len() == 3
}

/// Classify every present heir, in input order. Excluded heirs are retained
/// with [`FurudhStatus::Excluded`] and the reason they were shut out, rather
/// than dropped — downstream assembly needs them to report a zero share.
#[must_use]
pub fn determine_furudh(input: &CalculationInput) -> Vec<FurudhResult> {
    let umariyyatan = is_umariyyatan(input);
    let mut results = Vec::with_capacity(input.heirs.len());

    for heir in &input.heirs {
        if heir.category.is_pure_residuary() {
            // Pure-residuary categories short-circuit without consulting
            // the rule table: they never carry a fixed share, so there is
            // nothing for the table to say about them.
            results.push(FurudhResult {
                category: heir.category,
                quantity: heir.quantity,
                status: FurudhStatus::Residuary,
                reason: "pure residuary category: always ashobah".to_string(),
            });
            continue;
        }

        let Some(rule) = rules::evaluate(heir.category, input, umariyyatan) else {
            // A mixed/fixed-share category always has a rule list that
            // ends in a catch-all; reaching `None` here would mean the
            // rule table is missing an entry for a category that is
            // neither pure-residuary nor covered — a build-time bug.
            unreachable!(
                "no matching rule for heir category {:?}; rule table is incomplete",
                heir.category
            );
        };

        let status = match rule.verdict {
            Verdict::Fixed(f) => FurudhStatus::Fixed(f),
            Verdict::FixedAndResiduary(f) => FurudhStatus::FixedAndResiduary(f),
            Verdict::Residuary => FurudhStatus::Residuary,
            Verdict::UmariyyatanMotherShare => FurudhStatus::UmariyyatanMotherShare,
            Verdict::Excluded => FurudhStatus::Excluded,
        };

        results.push(FurudhResult {
            category: heir.category,
            quantity: heir.quantity,
            status,
            reason: rule.reason.to_string(),
        });
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CalculationInputBuilder;

    #[test]
    fn umariyyatan_detects_exact_triple() {
        let input = CalculationInputBuilder::new(1)
            .with_heir(HeirCategory::Husband, 1)
            .with_heir(HeirCategory::Father, 1)
            .with_heir(HeirCategory::Mother, 1)
            .build()
            .unwrap();
        assert!(is_umariyyatan(&input));
    }

    #[test]
    fn umariyyatan_requires_exactly_three_heirs() {
        let input = CalculationInputBuilder::new(1)
            .with_heir(HeirCategory::Husband, 1)
            .with_heir(HeirCategory::Father, 1)
            .with_heir(HeirCategory::Mother, 1)
            .with_heir(HeirCategory::Daughter, 1)
            .build()
            .unwrap();
        assert!(!is_umariyyatan(&input));
    }

    #[test]
    fn excluded_heirs_are_retained_and_tagged() {
        let input = CalculationInputBuilder::new(1)
            .with_heir(HeirCategory::Father, 1)
            .with_heir(HeirCategory::MaternalBrother, 1)
            .build()
            .unwrap();
        let results = determine_furudh(&input);
        let brother = results
            .iter()
            .find(|r| r.category == HeirCategory::MaternalBrother)
            .expect("excluded heirs stay in the result list");
        assert_eq!(brother.status, FurudhStatus::Excluded);
        assert!(brother.status.is_excluded());
        assert!(!brother.reason.is_empty());
    }

    #[test]
    fn classification_is_order_independent() {
        let a = CalculationInputBuilder::new(1)
            .with_heir(HeirCategory::Husband, 1)
            .with_heir(HeirCategory::Daughter, 2)
            .build()
            .unwrap();
        let b = CalculationInputBuilder::new(1)
            .with_heir(HeirCategory::Daughter, 2)
            .with_heir(HeirCategory::Husband, 1)
            .build()
            .unwrap();
        let ra = determine_furudh(&a);
        let rb = determine_furudh(&b);
        for r in &ra {
            let other = rb.iter().find(|o| o.category == r.category).unwrap();
            assert_eq!(other.status, r.status);
        }
    }
}
