//! The top-level pipeline: furudh, ashl, aul/radd/ashobah,
//! inkisar, and the named variants, assembled into a [`CalculationResult`].

use crate::ashl;
use crate::error::Error;
use crate::fardh::Fardh;
use crate::fraction::gcd;
use crate::furudh::{self, FurudhResult, FurudhStatus};
use crate::heir::HeirCategory;
use crate::inkisar::{self, Holder};
use crate::input::CalculationInput;
use crate::radd;
use crate::residuary::{self, Participant};
use crate::result::{assemble, CalculationResult};
use crate::variants::{self, Variant};

type Entry = (HeirCategory, u32, u64, String);

/// Run the full calculation for `input`.
///
/// # Errors
///
/// Returns [`Error`] if the input is degenerate in a way the pipeline
/// cannot resolve (propagated from the arithmetic primitives), or
/// [`Error::UnsupportedCase`] if no heir in the set resolves to any share.
pub fn calculate(input: &CalculationInput) -> Result<CalculationResult, Error> {
    match variants::detect(input) {
        Some(Variant::Akdariyyah) => akdariyyah_pipeline(input),
        Some(Variant::JaddWithSiblings) => jadd_with_siblings_pipeline(input),
        Some(Variant::Musytarakah) => musytarakah_pipeline(input),
        Some(Variant::Gharrawain) => umariyyatan_pipeline(input),
        None => normal_pipeline(input),
    }
}

/// Classical admissible aul transitions, by initial ashl. An inflation
/// outside this table is not an error — the engine accepts any of the 25
/// categories in any combination, and arbitrary heir sets can legitimately
/// overflow an ashl the classical texts never had occasion to attest — but
/// it is worth a derivation note either way.
const AUL_VALID_TRANSITIONS: &[(u64, &[u64])] = &[
    (6, &[7, 8, 9, 10]),
    (12, &[13, 15, 17]),
    (24, &[27]),
];

fn aul_validation_note(ashl_awal: u64, ashl_akhir: u64) -> String {
    match AUL_VALID_TRANSITIONS.iter().find(|(from, _)| *from == ashl_awal) {
        Some((_, valid_to)) if valid_to.contains(&ashl_akhir) => {
            format!("aul {ashl_awal} -> {ashl_akhir} matches a classically attested transition")
        }
        _ => format!(
            "aul {ashl_awal} -> {ashl_akhir} is outside the classical admissible transitions; proceeding"
        ),
    }
}

type ExcludedEntry = (HeirCategory, u32, String);

fn finish(
    input: &CalculationInput,
    ashl: u64,
    entries: Vec<Entry>,
    excluded: &[ExcludedEntry],
    is_aul: bool,
    is_radd: bool,
    special_case: Option<&str>,
    mut notes: Vec<String>,
) -> Result<CalculationResult, Error> {
    if entries.is_empty() {
        return Err(Error::unsupported_case(
            "no heir in the input set resolved to any share",
        ));
    }

    let (ashl, entries) = apply_inkisar(ashl, entries, &mut notes)?;

    let total_saham: u64 = entries.iter().map(|(_, _, s, _)| *s).sum();
    let shares = assemble(input.tirkah, ashl, &entries, excluded);

    Ok(CalculationResult {
        tirkah: input.tirkah,
        ashl_awal: ashl,
        ashl_akhir: ashl,
        total_saham,
        is_aul,
        is_radd,
        special_case: special_case.map(str::to_string),
        shares,
        notes,
    })
}

/// Scale `ashl` and every entry's saham by the head-division correction
/// multiplier, if any holder's saham doesn't divide evenly across its
/// quantity.
fn apply_inkisar(
    ashl: u64,
    entries: Vec<Entry>,
    notes: &mut Vec<String>,
) -> Result<(u64, Vec<Entry>), Error> {
    let holders: Vec<Holder> = entries
        .iter()
        .map(|(_, quantity, saham, _)| Holder {
            saham: *saham,
            heads: *quantity,
        })
        .collect();
    let correction = inkisar::correct(&holders)?;
    if correction.multiplier == 1 {
        return Ok((ashl, entries));
    }
    notes.extend(correction.notes);
    let scaled = entries
        .into_iter()
        .map(|(category, quantity, saham, reason)| {
            (category, quantity, saham * correction.multiplier, reason)
        })
        .collect();
    Ok((ashl * correction.multiplier, scaled))
}

fn normal_pipeline(input: &CalculationInput) -> Result<CalculationResult, Error> {
    let all_furudh = furudh::determine_furudh(input);
    let excluded: Vec<ExcludedEntry> = all_furudh
        .iter()
        .filter(|r| r.status.is_excluded())
        .map(|r| (r.category, r.quantity, r.reason.clone()))
        .collect();
    let furudh: Vec<FurudhResult> =
        all_furudh.into_iter().filter(|r| !r.status.is_excluded()).collect();
    if furudh.is_empty() {
        return Err(Error::unsupported_case(
            "every present heir was excluded by hajb",
        ));
    }

    let all_ashobah = furudh
        .iter()
        .all(|r| matches!(r.status, FurudhStatus::Residuary));

    if all_ashobah {
        return all_residuary_pipeline(input, &furudh, &excluded);
    }

    let fixed_holders: Vec<&FurudhResult> = furudh
        .iter()
        .filter(|r| r.status.fardh().is_some())
        .collect();
    let ashl0_computation = ashl::compute(&fixed_holders)?;
    let ashl0 = ashl0_computation.ashl;

    let mut fixed_saham: Vec<(HeirCategory, u32, u64, String)> = Vec::new();
    let mut total_saham0 = 0u64;
    for holder in &fixed_holders {
        let fardh = holder.status.fardh().expect("filtered above");
        let saham = ashl::saham_for(fardh, ashl0)?;
        total_saham0 += saham;
        fixed_saham.push((holder.category, holder.quantity, saham, holder.reason.clone()));
    }

    let has_ashobah = furudh.iter().any(|r| r.status.participates_in_residue());
    let mut notes = ashl0_computation.notes;

    if total_saham0 > ashl0 {
        notes.push(format!(
            "aul: total saham {total_saham0} exceeds ashl {ashl0}; ashl inflates to match"
        ));
        notes.push(aul_validation_note(ashl0, total_saham0));
        return finish(input, total_saham0, fixed_saham, &excluded, true, false, None, notes);
    }

    if total_saham0 == ashl0 {
        notes.push("exact: total saham equals ashl, no aul or radd".to_string());
        return finish(input, ashl0, fixed_saham, &excluded, false, false, None, notes);
    }

    if has_ashobah {
        let remainder = ashl0 - total_saham0;
        notes.push(format!(
            "residuary heirs present: remainder {remainder} distributed by weight"
        ));
        let participants: Vec<Participant> = furudh
            .iter()
            .filter(|r| r.status.participates_in_residue())
            .map(|r| Participant { category: r.category, quantity: r.quantity })
            .collect();
        let residuary_shares = residuary::distribute(remainder, &participants);

        let mut entries = fixed_saham;
        for (category, saham) in residuary_shares {
            if let Some(existing) = entries.iter_mut().find(|(c, ..)| *c == category) {
                existing.2 += saham;
            } else {
                let quantity = input.quantity_of(category);
                entries.push((category, quantity, saham, "residuary: weighted share of the remainder".to_string()));
            }
        }
        return finish(input, ashl0, entries, &excluded, false, false, None, notes);
    }

    notes.push("no residuary heir present: radd applies".to_string());
    let returnable: Vec<radd::ReturnableHolder> = fixed_holders
        .iter()
        .filter(|h| !h.category.is_spouse())
        .map(|h| radd::ReturnableHolder {
            category: h.category,
            fardh: h.status.fardh().expect("filtered above"),
        })
        .collect();
    let spouse_holder = fixed_holders.iter().find(|h| h.category.is_spouse());

    let radd_result = match spouse_holder {
        None => radd::without_spouse(&returnable)?,
        Some(spouse) => {
            let spouse_struct = radd::Spouse {
                category: spouse.category,
                fardh: spouse.status.fardh().expect("spouse is always fixed"),
            };
            if returnable.len() == 1 {
                radd::with_spouse_single_heir(spouse_struct, returnable[0])
            } else {
                radd::with_spouse_multiple_heirs(spouse_struct, &returnable)?
            }
        }
    };
    notes.extend(radd_result.notes);

    let entries: Vec<Entry> = radd_result
        .shares
        .into_iter()
        .map(|(category, saham)| (category, input.quantity_of(category), saham, "radd".to_string()))
        .collect();
    finish(input, radd_result.ashl_akhir, entries, &excluded, false, true, None, notes)
}

fn all_residuary_pipeline(
    input: &CalculationInput,
    furudh: &[FurudhResult],
    excluded: &[ExcludedEntry],
) -> Result<CalculationResult, Error> {
    let participants: Vec<Participant> = furudh
        .iter()
        .map(|r| Participant { category: r.category, quantity: r.quantity })
        .collect();
    let ashl = residuary::ashl_all_residuary(&participants);
    let weight = |c: HeirCategory| if c.is_male() { 2 } else { 1 };
    let entries: Vec<Entry> = furudh
        .iter()
        .map(|r| {
            (
                r.category,
                r.quantity,
                u64::from(weight(r.category)) * u64::from(r.quantity),
                "all heirs are residuary: 2:1 weighted partition".to_string(),
            )
        })
        .collect();
    finish(
        input,
        ashl,
        entries,
        excluded,
        false,
        false,
        None,
        vec!["every present heir is pure residuary".to_string()],
    )
}

fn umariyyatan_pipeline(input: &CalculationInput) -> Result<CalculationResult, Error> {
    let (spouse, fardh) = if input.has(HeirCategory::Husband) {
        (HeirCategory::Husband, Fardh::Half)
    } else {
        (HeirCategory::Wife, Fardh::Quarter)
    };

    let mut ashl = fardh.denominator();
    let mut spouse_saham = fardh.numerator();
    let mut residue = ashl - spouse_saham;
    let mut notes = vec![format!(
        "umariyyatan: {spouse:?} takes {}/{}, remainder {residue} for mother/father",
        fardh.numerator(),
        fardh.denominator()
    )];

    if residue % 3 != 0 {
        ashl *= 3;
        spouse_saham *= 3;
        residue *= 3;
        notes.push(format!("remainder not divisible by three: scaling ashl to {ashl}"));
    }

    let mother_saham = residue / 3;
    let father_saham = residue - mother_saham;
    notes.push(format!(
        "mother takes a third of the remainder ({mother_saham}), father takes the rest ({father_saham})"
    ));

    let entries = vec![
        (spouse, 1, spouse_saham, "fixed share, reduced by the umariyyatan residue rule".to_string()),
        (HeirCategory::Mother, 1, mother_saham, "umariyyatan: one third of the residue after the spouse".to_string()),
        (HeirCategory::Father, 1, father_saham, "residuary: remainder after spouse and mother".to_string()),
    ];

    finish(input, ashl, entries, &[], false, false, Some("umariyyatan"), notes)
}

fn akdariyyah_pipeline(input: &CalculationInput) -> Result<CalculationResult, Error> {
    let sister = if input.has(HeirCategory::FullSister) {
        HeirCategory::FullSister
    } else {
        HeirCategory::PaternalSister
    };
    let (ashl, shares) = variants::akdariyyah(sister);
    let entries = shares
        .into_iter()
        .map(|(category, saham)| {
            (
                category,
                input.quantity_of(category).max(1),
                saham,
                "akdariyyah: pooled grandfather/sister share redivided 2:1".to_string(),
            )
        })
        .collect();
    finish(
        input,
        ashl,
        entries,
        &[],
        false,
        false,
        Some("akdariyyah"),
        vec!["husband, mother, grandfather, and a single full or paternal sister".to_string()],
    )
}

fn jadd_with_siblings_pipeline(input: &CalculationInput) -> Result<CalculationResult, Error> {
    let pool_siblings: Vec<(HeirCategory, u32)> = input
        .heirs
        .iter()
        .filter(|h| {
            matches!(
                h.category,
                HeirCategory::FullBrother
                    | HeirCategory::PaternalBrother
                    | HeirCategory::FullSister
                    | HeirCategory::PaternalSister
            )
        })
        .map(|h| (h.category, h.quantity))
        .collect();

    let other_furudh: Vec<FurudhResult> = furudh::determine_furudh(input)
        .into_iter()
        .filter(|r| {
            r.category != HeirCategory::Grandfather && !r.category.is_sibling()
        })
        .collect();
    let excluded: Vec<ExcludedEntry> = other_furudh
        .iter()
        .filter(|r| r.status.is_excluded())
        .map(|r| (r.category, r.quantity, r.reason.clone()))
        .collect();
    let fixed_holders: Vec<&FurudhResult> =
        other_furudh.iter().filter(|r| r.status.fardh().is_some()).collect();
    let ashl0_computation = ashl::compute(&fixed_holders)?;
    let ashl0 = ashl0_computation.ashl;

    let mut entries: Vec<Entry> = Vec::new();
    let mut total_fixed = 0u64;
    for holder in &fixed_holders {
        let fardh = holder.status.fardh().expect("filtered above");
        let saham = ashl::saham_for(fardh, ashl0)?;
        total_fixed += saham;
        entries.push((holder.category, holder.quantity, saham, holder.reason.clone()));
    }

    let residue = ashl0.saturating_sub(total_fixed);
    let sibling_weight_total: u64 = pool_siblings
        .iter()
        .map(|(c, q)| u64::from(if c.is_male() { 2 } else { 1 }) * u64::from(*q))
        .sum();
    let grandfather_weight = 2u64;
    let option = variants::jadd_with_siblings_best_share(
        ashl0,
        residue,
        sibling_weight_total,
        grandfather_weight,
    );
    let grandfather_saham = option.saham();
    entries.push((
        HeirCategory::Grandfather,
        1,
        grandfather_saham,
        format!("jadd-with-siblings: grandfather takes {option:?}"),
    ));

    let siblings_residue = residue.saturating_sub(grandfather_saham);
    let participants: Vec<Participant> = pool_siblings
        .iter()
        .map(|(c, q)| Participant { category: *c, quantity: *q })
        .collect();
    for (category, saham) in residuary::distribute(siblings_residue, &participants) {
        entries.push((
            category,
            input.quantity_of(category),
            saham,
            "jadd-with-siblings: 2:1 share of the pool after the grandfather's portion".to_string(),
        ));
    }

    finish(
        input,
        ashl0,
        entries,
        &excluded,
        false,
        false,
        Some("jadd_with_siblings"),
        vec!["grandfather competes with full or paternal siblings, no father present".to_string()],
    )
}

fn musytarakah_pipeline(input: &CalculationInput) -> Result<CalculationResult, Error> {
    let full_heads =
        input.quantity_of(HeirCategory::FullBrother) + input.quantity_of(HeirCategory::FullSister);
    let maternal_heads = input.quantity_of(HeirCategory::MaternalBrother)
        + input.quantity_of(HeirCategory::MaternalSister);

    let (ashl, _) = variants::musytarakah(full_heads, maternal_heads)?;
    let husband_saham = ashl / 2;
    let mother_saham = ashl / 6;
    let pool = ashl - husband_saham - mother_saham;
    let total_heads = u64::from(full_heads) + u64::from(maternal_heads);
    let per_head = pool / total_heads.max(1);
    let mut remainder = pool - per_head * total_heads;

    let mut entries = vec![
        (HeirCategory::Husband, 1, husband_saham, "fixed 1/2".to_string()),
        (HeirCategory::Mother, 1, mother_saham, "fixed 1/6".to_string()),
    ];

    for category in [
        HeirCategory::FullBrother,
        HeirCategory::FullSister,
        HeirCategory::MaternalBrother,
        HeirCategory::MaternalSister,
    ] {
        let quantity = input.quantity_of(category);
        if quantity == 0 {
            continue;
        }
        let mut saham = per_head * u64::from(quantity);
        if remainder > 0 {
            saham += remainder;
            remainder = 0;
        }
        entries.push((
            category,
            quantity,
            saham,
            "musytarakah: maternal third shared equally per head with the full siblings".to_string(),
        ));
    }

    finish(
        input,
        ashl,
        entries,
        &[],
        false,
        false,
        Some("musytarakah"),
        vec!["husband, mother, full siblings, and maternal siblings share the residue equally per head".to_string()],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CalculationInputBuilder;

    #[test]
    fn wife_and_son_is_simple_fixed_plus_residuary() {
        let input = CalculationInputBuilder::new(800)
            .with_heir(HeirCategory::Wife, 1)
            .with_heir(HeirCategory::Son, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        assert!(!result.is_aul);
        assert!(!result.is_radd);
        let total: u64 = result.shares.iter().map(|s| s.share_amount).sum();
        assert!(total <= 800);
    }

    #[test]
    fn aul_case_inflates_ashl() {
        // Husband 1/2, two full sisters 2/3, mother 1/6: 3+4+1=8 over ashl 6.
        let input = CalculationInputBuilder::new(600)
            .with_heir(HeirCategory::Husband, 1)
            .with_heir(HeirCategory::FullSister, 2)
            .with_heir(HeirCategory::Mother, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        assert!(result.is_aul);
        assert!(result.notes.iter().any(|n| n.contains("classically attested")));
    }

    #[test]
    fn aul_validation_note_flags_unattested_transition() {
        assert!(aul_validation_note(6, 9).contains("classically attested"));
        assert!(aul_validation_note(6, 11).contains("outside the classical"));
    }

    #[test]
    fn excluded_heirs_surface_in_the_final_result_as_zero_share() {
        let input = CalculationInputBuilder::new(600)
            .with_heir(HeirCategory::Father, 1)
            .with_heir(HeirCategory::MaternalBrother, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        let brother = result
            .shares
            .iter()
            .find(|s| s.category == HeirCategory::MaternalBrother)
            .expect("excluded heir still appears in the result");
        assert!(brother.is_excluded);
        assert_eq!(brother.share_amount, 0);
        assert!(brother.exclusion_reason.is_some());
    }

    #[test]
    fn radd_case_without_spouse() {
        let input = CalculationInputBuilder::new(600)
            .with_heir(HeirCategory::Mother, 1)
            .with_heir(HeirCategory::Daughter, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        assert!(result.is_radd);
        let total: u64 = result.shares.iter().map(|s| s.saham).sum();
        assert_eq!(total, result.ashl_akhir);
    }

    #[test]
    fn umariyyatan_husband_gives_mother_one_sixth() {
        let input = CalculationInputBuilder::new(600)
            .with_heir(HeirCategory::Husband, 1)
            .with_heir(HeirCategory::Father, 1)
            .with_heir(HeirCategory::Mother, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        assert_eq!(result.special_case.as_deref(), Some("umariyyatan"));
        let mother = result
            .shares
            .iter()
            .find(|s| s.category == HeirCategory::Mother)
            .unwrap();
        assert_eq!(mother.share_fraction, "1/6");
    }

    #[test]
    fn all_residuary_splits_two_to_one() {
        // Both pure-residuary, no exclusion between them: son (male,
        // weight 2) and a female manumitter (weight 1) split 2:1.
        let input = CalculationInputBuilder::new(900)
            .with_heir(HeirCategory::Son, 1)
            .with_heir(HeirCategory::FemaleManumitter, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        let son = result.shares.iter().find(|s| s.category == HeirCategory::Son).unwrap();
        let manumitter = result
            .shares
            .iter()
            .find(|s| s.category == HeirCategory::FemaleManumitter)
            .unwrap();
        assert_eq!(son.share_amount, 600);
        assert_eq!(manumitter.share_amount, 300);
    }

    #[test]
    fn two_equal_weight_residuary_categories_split_evenly() {
        // No hajb between pure-residuary categories: a sole son and a
        // sole full brother's son are both male (weight 2) and split the
        // estate evenly rather than one excluding the other.
        let input = CalculationInputBuilder::new(900)
            .with_heir(HeirCategory::Son, 1)
            .with_heir(HeirCategory::FullBrothersSon, 1)
            .build()
            .unwrap();
        let result = calculate(&input).unwrap();
        let son = result.shares.iter().find(|s| s.category == HeirCategory::Son).unwrap();
        let nephew = result
            .shares
            .iter()
            .find(|s| s.category == HeirCategory::FullBrothersSon)
            .unwrap();
        assert_eq!(son.share_amount, 450);
        assert_eq!(nephew.share_amount, 450);
    }
}
