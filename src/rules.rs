//! The declarative rule table.
//!
//! Each mixed or fixed-share-only category owns an ordered list of
//! [`Rule`]s. A rule is a conjunction of [`Predicate`]s guarding a
//! [`Verdict`]; evaluation picks the first rule whose predicates all hold.
//! Pure-residuary categories ([`HeirCategory::is_pure_residuary`]) have no
//! entry here — they short-circuit in [`crate::furudh`] instead.
//!
//! This is a static table, not a runtime data structure: [`rules_for`] is a
//! `match` over the category rather than an array indexed by ordinal, which
//! keeps every rule list exhaustively checked by the compiler without
//! reaching for `unsafe` transmutes or a build-time codegen step.

use crate::fardh::Fardh;
use crate::heir::HeirCategory;
use crate::input::CalculationInput;

/// A named predicate that does not reduce to a simple presence/absence or
/// count check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialCase {
    /// The heir set is exactly `{spouse, father, mother}`.
    Umariyyatan,
}

/// One conjunct of a [`Rule`].
#[derive(Debug, Clone, Copy)]
pub enum Predicate {
    /// At least one of the listed categories is present.
    PresentAny(&'static [HeirCategory]),
    /// None of the listed categories is present.
    AbsentAll(&'static [HeirCategory]),
    /// The given category's head-count is at least `n`.
    QuantityAtLeast(HeirCategory, u32),
    /// The combined head-count across the listed categories is at least `n`.
    CombinedQuantityAtLeast(&'static [HeirCategory], u32),
    /// The total head-count across all six sibling categories is at least `n`.
    SiblingCountAtLeast(u32),
    /// A named cross-cutting special case.
    Special(SpecialCase),
}

impl Predicate {
    fn holds(self, input: &CalculationInput, umariyyatan: bool) -> bool {
        match self {
            Self::PresentAny(cats) => input.has_any(cats),
            Self::AbsentAll(cats) => !input.has_any(cats),
            Self::QuantityAtLeast(cat, n) => input.quantity_of(cat) >= n,
            Self::CombinedQuantityAtLeast(cats, n) => {
                cats.iter().map(|c| input.quantity_of(*c)).sum::<u32>() >= n
            }
            Self::SiblingCountAtLeast(n) => input.sibling_count() >= n,
            Self::Special(SpecialCase::Umariyyatan) => umariyyatan,
        }
    }
}

/// The classification a matching rule assigns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// A fixed fraction of the ashl.
    Fixed(Fardh),
    /// A fixed fraction, *and* participation in the residuary pool for
    /// whatever is left — the father/grandfather "fardh plus ashobah" case.
    FixedAndResiduary(Fardh),
    /// Pure residuary: takes whatever remains.
    Residuary,
    /// Blocked entirely (hajb hirman): takes nothing, but stays in the
    /// result tagged [`crate::furudh::FurudhStatus::Excluded`].
    Excluded,
    /// The umariyyatan-derived mother's share, resolved by the orchestrator, not a
    /// literal member of the admissible fardh set.
    UmariyyatanMotherShare,
}

/// One entry in a category's rule list.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub predicates: &'static [Predicate],
    pub verdict: Verdict,
    /// Short human-readable justification, used to build derivation notes.
    pub reason: &'static str,
}

impl Rule {
    fn matches(&self, input: &CalculationInput, umariyyatan: bool) -> bool {
        self.predicates.iter().all(|p| p.holds(input, umariyyatan))
    }
}

/// Evaluate the first matching rule for `category` against `input`.
///
/// Returns `None` if `category` has no rule list (pure-residuary
/// categories, handled upstream).
#[must_use]
pub fn evaluate(
    category: HeirCategory,
    input: &CalculationInput,
    umariyyatan: bool,
) -> Option<&'static Rule> {
    rules_for(category)
        .iter()
        .find(|rule| rule.matches(input, umariyyatan))
}

use HeirCategory::{
    Daughter, Father, FullBrother, FullSister, Grandfather, Mother, PaternalBrother,
    PaternalSister, Son, SonsDaughter, SonsSon,
};

const DESCENDANTS: &[HeirCategory] = &[Son, Daughter, SonsSon, SonsDaughter];
const MALE_DESCENDANTS: &[HeirCategory] = &[Son, SonsSon];
const MATERNAL_SIBLING_HAJB: &[HeirCategory] = &[Father, Grandfather, Son, Daughter, SonsSon, SonsDaughter];

/// Rule list for `category`, or `&[]` for pure-residuary/manumitter categories.
#[must_use]
pub fn rules_for(category: HeirCategory) -> &'static [Rule] {
    match category {
        HeirCategory::Father => &[
            Rule {
                predicates: &[Predicate::PresentAny(MALE_DESCENDANTS)],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "father takes 1/6 fixed: a male descendant inherits the residue",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[Daughter, SonsDaughter])],
                verdict: Verdict::FixedAndResiduary(Fardh::Sixth),
                reason: "father takes 1/6 fixed plus the residue: only female descendants present",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Residuary,
                reason: "father takes the whole residue: no descendants present",
            },
        ],
        HeirCategory::Grandfather => &[
            Rule {
                predicates: &[Predicate::AbsentAll(&[Father]), Predicate::PresentAny(MALE_DESCENDANTS)],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "grandfather takes 1/6 fixed: a male descendant inherits the residue",
            },
            Rule {
                predicates: &[
                    Predicate::AbsentAll(&[Father]),
                    Predicate::PresentAny(&[Daughter, SonsDaughter]),
                ],
                verdict: Verdict::FixedAndResiduary(Fardh::Sixth),
                reason: "grandfather takes 1/6 fixed plus the residue: only female descendants present",
            },
            Rule {
                predicates: &[Predicate::AbsentAll(&[Father])],
                verdict: Verdict::Residuary,
                reason: "grandfather takes the whole residue: no descendants present",
            },
        ],
        HeirCategory::Husband => &[
            Rule {
                predicates: &[Predicate::PresentAny(DESCENDANTS)],
                verdict: Verdict::Fixed(Fardh::Quarter),
                reason: "husband takes 1/4: the decedent has a child or grandchild through a son",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Half),
                reason: "husband takes 1/2: no child or grandchild through a son",
            },
        ],
        HeirCategory::Wife => &[
            Rule {
                predicates: &[Predicate::PresentAny(DESCENDANTS)],
                verdict: Verdict::Fixed(Fardh::Eighth),
                reason: "wife takes 1/8: the decedent has a child or grandchild through a son",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Quarter),
                reason: "wife takes 1/4: no child or grandchild through a son",
            },
        ],
        HeirCategory::Mother => &[
            Rule {
                predicates: &[Predicate::Special(SpecialCase::Umariyyatan)],
                verdict: Verdict::UmariyyatanMotherShare,
                reason: "mother takes 1/3 of the residue after the spouse (umariyyatan)",
            },
            Rule {
                predicates: &[Predicate::PresentAny(DESCENDANTS)],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "mother takes 1/6: the decedent has a child or grandchild through a son",
            },
            Rule {
                predicates: &[Predicate::SiblingCountAtLeast(2)],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "mother takes 1/6: two or more siblings are present",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Third),
                reason: "mother takes 1/3: no descendant and fewer than two siblings",
            },
        ],
        HeirCategory::MaternalBrother => &[
            Rule {
                predicates: &[Predicate::PresentAny(MATERNAL_SIBLING_HAJB)],
                verdict: Verdict::Excluded,
                reason: "maternal brother excluded: father, grandfather, or a descendant is present",
            },
            Rule {
                predicates: &[Predicate::CombinedQuantityAtLeast(
                    &[HeirCategory::MaternalBrother, HeirCategory::MaternalSister],
                    2,
                )],
                verdict: Verdict::Fixed(Fardh::Third),
                reason: "maternal siblings share 1/3 equally: two or more present",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "maternal brother takes 1/6: sole maternal sibling",
            },
        ],
        HeirCategory::MaternalSister => &[
            Rule {
                predicates: &[Predicate::PresentAny(MATERNAL_SIBLING_HAJB)],
                verdict: Verdict::Excluded,
                reason: "maternal sister excluded: father, grandfather, or a descendant is present",
            },
            Rule {
                predicates: &[Predicate::CombinedQuantityAtLeast(
                    &[HeirCategory::MaternalBrother, HeirCategory::MaternalSister],
                    2,
                )],
                verdict: Verdict::Fixed(Fardh::Third),
                reason: "maternal siblings share 1/3 equally: two or more present",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "maternal sister takes 1/6: sole maternal sibling",
            },
        ],
        HeirCategory::Daughter => &[
            Rule {
                predicates: &[Predicate::PresentAny(&[Son])],
                verdict: Verdict::Residuary,
                reason: "daughter is ashobah bi-l-ghair, paired 2:1 with her brother(s)",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(Daughter, 2)],
                verdict: Verdict::Fixed(Fardh::TwoThirds),
                reason: "two or more daughters share 2/3",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Half),
                reason: "sole daughter takes 1/2",
            },
        ],
        HeirCategory::SonsDaughter => &[
            Rule {
                predicates: &[Predicate::PresentAny(&[SonsSon])],
                verdict: Verdict::Residuary,
                reason: "son's daughter is ashobah bi-l-ghair, paired 2:1 with son's son",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[Son])],
                verdict: Verdict::Excluded,
                reason: "son's daughter excluded: a son takes the residue with no pairing grandson",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(Daughter, 2)],
                verdict: Verdict::Excluded,
                reason: "son's daughter excluded: two or more daughters already exhaust 2/3",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(Daughter, 1)],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "son's daughter takes 1/6, completing one daughter's 1/2 to 2/3",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(SonsDaughter, 2)],
                verdict: Verdict::Fixed(Fardh::TwoThirds),
                reason: "two or more son's daughters share 2/3",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Half),
                reason: "sole son's daughter takes 1/2",
            },
        ],
        HeirCategory::FullSister => &[
            Rule {
                predicates: &[Predicate::PresentAny(&[Father])],
                verdict: Verdict::Excluded,
                reason: "full sister excluded: father is present",
            },
            Rule {
                predicates: &[Predicate::PresentAny(MALE_DESCENDANTS)],
                verdict: Verdict::Excluded,
                reason: "full sister excluded: a male descendant takes the residue",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[FullBrother])],
                verdict: Verdict::Residuary,
                reason: "full sister is ashobah bi-l-ghair, paired 2:1 with her brother(s)",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[Daughter, SonsDaughter])],
                verdict: Verdict::Residuary,
                reason: "full sister is ashobah ma'al-ghair alongside the daughter(s)",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(FullSister, 2)],
                verdict: Verdict::Fixed(Fardh::TwoThirds),
                reason: "two or more full sisters share 2/3",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Half),
                reason: "sole full sister takes 1/2",
            },
        ],
        HeirCategory::PaternalSister => &[
            Rule {
                predicates: &[Predicate::PresentAny(&[Father])],
                verdict: Verdict::Excluded,
                reason: "paternal sister excluded: father is present",
            },
            Rule {
                predicates: &[Predicate::PresentAny(MALE_DESCENDANTS)],
                verdict: Verdict::Excluded,
                reason: "paternal sister excluded: a male descendant takes the residue",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[FullBrother])],
                verdict: Verdict::Excluded,
                reason: "paternal sister excluded: a full brother takes the entire residue",
            },
            Rule {
                predicates: &[
                    Predicate::QuantityAtLeast(FullSister, 1),
                    Predicate::PresentAny(&[Daughter, SonsDaughter]),
                ],
                verdict: Verdict::Excluded,
                reason: "paternal sister excluded: a full sister is already ashobah ma'al-ghair alongside the daughter(s)",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[PaternalBrother])],
                verdict: Verdict::Residuary,
                reason: "paternal sister is ashobah bi-l-ghair, paired 2:1 with her paternal brother(s)",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(FullSister, 2)],
                verdict: Verdict::Excluded,
                reason: "paternal sister excluded: two or more full sisters already exhaust 2/3",
            },
            Rule {
                predicates: &[Predicate::PresentAny(&[Daughter, SonsDaughter])],
                verdict: Verdict::Residuary,
                reason: "paternal sister is ashobah ma'al-ghair alongside the daughter(s)",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(FullSister, 1)],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "paternal sister takes 1/6, completing the full sister's 1/2 to 2/3",
            },
            Rule {
                predicates: &[Predicate::QuantityAtLeast(PaternalSister, 2)],
                verdict: Verdict::Fixed(Fardh::TwoThirds),
                reason: "two or more paternal sisters share 2/3",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Half),
                reason: "sole paternal sister takes 1/2",
            },
        ],
        HeirCategory::MaternalGrandmother => &[
            Rule {
                predicates: &[Predicate::PresentAny(&[Mother])],
                verdict: Verdict::Excluded,
                reason: "maternal grandmother excluded: mother is present",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "maternal grandmother takes 1/6",
            },
        ],
        HeirCategory::PaternalGrandmother => &[
            Rule {
                predicates: &[Predicate::PresentAny(&[
                    Mother,
                    Father,
                    HeirCategory::MaternalGrandmother,
                ])],
                verdict: Verdict::Excluded,
                reason: "paternal grandmother excluded: mother, father, or the maternal grandmother is present",
            },
            Rule {
                predicates: &[],
                verdict: Verdict::Fixed(Fardh::Sixth),
                reason: "paternal grandmother takes 1/6",
            },
        ],
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CalculationInputBuilder;

    fn input(pairs: &[(HeirCategory, u32)]) -> CalculationInput {
        let mut b = CalculationInputBuilder::new(1);
        for (c, q) in pairs {
            b = b.with_heir(*c, *q);
        }
        b.build().unwrap()
    }

    #[test]
    fn daughter_with_son_is_residuary() {
        let inp = input(&[(HeirCategory::Son, 1), (HeirCategory::Daughter, 1)]);
        let rule = evaluate(HeirCategory::Daughter, &inp, false).unwrap();
        assert_eq!(rule.verdict, Verdict::Residuary);
    }

    #[test]
    fn lone_daughter_takes_half() {
        let inp = input(&[(HeirCategory::Daughter, 1)]);
        let rule = evaluate(HeirCategory::Daughter, &inp, false).unwrap();
        assert_eq!(rule.verdict, Verdict::Fixed(Fardh::Half));
    }

    #[test]
    fn maternal_sibling_excluded_by_father() {
        let inp = input(&[(HeirCategory::Father, 1), (HeirCategory::MaternalBrother, 1)]);
        let rule = evaluate(HeirCategory::MaternalBrother, &inp, false).unwrap();
        assert_eq!(rule.verdict, Verdict::Excluded);
    }

    #[test]
    fn husband_fardh_drops_with_descendant() {
        let inp = input(&[(HeirCategory::Husband, 1), (HeirCategory::Daughter, 1)]);
        let rule = evaluate(HeirCategory::Husband, &inp, false).unwrap();
        assert_eq!(rule.verdict, Verdict::Fixed(Fardh::Quarter));
    }

    #[test]
    fn father_gets_fixed_and_residuary_with_only_daughters() {
        let inp = input(&[(HeirCategory::Father, 1), (HeirCategory::Daughter, 1)]);
        let rule = evaluate(HeirCategory::Father, &inp, false).unwrap();
        assert_eq!(rule.verdict, Verdict::FixedAndResiduary(Fardh::Sixth));
    }

    #[test]
    fn paternal_sister_excluded_when_sole_full_sister_is_ashobah_with_daughter() {
        let inp = input(&[
            (HeirCategory::Daughter, 1),
            (HeirCategory::FullSister, 1),
            (HeirCategory::PaternalSister, 1),
        ]);
        let rule = evaluate(HeirCategory::PaternalSister, &inp, false).unwrap();
        assert_eq!(rule.verdict, Verdict::Excluded);
    }
}
