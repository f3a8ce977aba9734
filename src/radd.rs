//! Radd (return) distribution.
//!
//! Radd applies when total saham falls short of the ashl and no residuary
//! heir is present to absorb the surplus: the shortfall is returned to the
//! fardh-holders in proportion to their shares. A spouse never shares in
//! radd — its fardh is fixed regardless of which other heirs are present.

use crate::error::Error;
use crate::fardh::Fardh;
use crate::fraction::lcm_multiple;
use crate::heir::HeirCategory;

/// One non-spouse fardh-holder eligible for radd.
#[derive(Debug, Clone, Copy)]
pub struct ReturnableHolder {
    pub category: HeirCategory,
    pub fardh: Fardh,
}

/// The spouse's fixed share, excluded from radd.
#[derive(Debug, Clone, Copy)]
pub struct Spouse {
    pub category: HeirCategory,
    pub fardh: Fardh,
}

/// The outcome of a radd redistribution.
#[derive(Debug, Clone)]
pub struct ReddResult {
    pub ashl_awal: u64,
    pub ashl_akhir: u64,
    pub shares: Vec<(HeirCategory, u64)>,
    pub notes: Vec<String>,
}

/// Case 1: no spouse present. The sum of saham on the lcm of the radd
/// holders' denominators becomes the new ashl outright.
///
/// # Errors
///
/// Propagates [`Error`] from the underlying lcm computation.
pub fn without_spouse(holders: &[ReturnableHolder]) -> Result<ReddResult, Error> {
    let denominators: Vec<u64> = holders.iter().map(|h| h.fardh.denominator()).collect();
    let ashl_awal = lcm_multiple(&denominators)?;

    let mut shares = Vec::with_capacity(holders.len());
    let mut total_saham = 0u64;
    let mut notes = vec![
        "radd case 1: no spouse present".to_string(),
        format!("ashl awal (lcm of radd holders' denominators) = {ashl_awal}"),
    ];
    for holder in holders {
        let saham = (ashl_awal / holder.fardh.denominator()) * holder.fardh.numerator();
        total_saham += saham;
        shares.push((holder.category, saham));
        notes.push(format!("{:?}: {saham}/{ashl_awal}", holder.category));
    }
    notes.push(format!("ashl akhir = total saham = {total_saham}"));

    Ok(ReddResult {
        ashl_awal,
        ashl_akhir: total_saham,
        shares,
        notes,
    })
}

/// Case 2: a spouse is present and exactly one other heir shares in radd.
/// The spouse's denominator stands as the ashl; the single heir absorbs
/// whatever the spouse's fardh does not cover.
pub fn with_spouse_single_heir(spouse: Spouse, heir: ReturnableHolder) -> ReddResult {
    let ashl_awal = spouse.fardh.denominator();
    let spouse_saham = spouse.fardh.numerator();
    let sisa = ashl_awal - spouse_saham;
    let heir_saham_awal = (ashl_awal / heir.fardh.denominator()) * heir.fardh.numerator();
    let heir_saham_radd = heir_saham_awal + sisa;

    ReddResult {
        ashl_awal,
        ashl_akhir: ashl_awal,
        shares: vec![(spouse.category, spouse_saham), (heir.category, heir_saham_radd)],
        notes: vec![
            "radd case 2: spouse present, exactly one radd heir".to_string(),
            format!("ashl (from spouse's denominator) = {ashl_awal}"),
            format!("spouse: {spouse_saham} saham"),
            format!("remainder for radd: {sisa}"),
            format!(
                "{:?}: {heir_saham_awal} + {sisa} = {heir_saham_radd}",
                heir.category
            ),
        ],
    }
}

/// Case 3: a spouse is present and more than one heir shares in radd.
///
/// # Errors
///
/// Propagates [`Error`] from the underlying lcm computation.
pub fn with_spouse_multiple_heirs(
    spouse: Spouse,
    holders: &[ReturnableHolder],
) -> Result<ReddResult, Error> {
    let ashl_zauj = spouse.fardh.denominator();
    let radd_denominators: Vec<u64> = holders.iter().map(|h| h.fardh.denominator()).collect();
    let ashl_radd = lcm_multiple(&radd_denominators)?;

    let mut notes = vec![
        "radd case 3: spouse present, more than one radd heir".to_string(),
        format!("ashl from spouse's denominator: {ashl_zauj}"),
        format!("ashl for the radd heirs (lcm of their denominators): {ashl_radd}"),
    ];

    let radd_saham: Vec<(HeirCategory, u64)> = holders
        .iter()
        .map(|h| {
            let saham = (ashl_radd / h.fardh.denominator()) * h.fardh.numerator();
            notes.push(format!("{:?}: {saham}/{ashl_radd}", h.category));
            (h.category, saham)
        })
        .collect();
    let total_saham_radd: u64 = radd_saham.iter().map(|(_, s)| s).sum();
    notes.push(format!("total saham of the radd heirs: {total_saham_radd}/{ashl_radd}"));

    let mut all_denominators = vec![ashl_zauj];
    all_denominators.extend_from_slice(&radd_denominators);
    let ashl_awal_full = lcm_multiple(&all_denominators)?;
    notes.push(format!("ashl awal across every fardh present: {ashl_awal_full}"));

    let spouse_saham_full = (ashl_awal_full / ashl_zauj) * spouse.fardh.numerator();
    let sisa = ashl_awal_full - spouse_saham_full;
    notes.push(format!("spouse on ashl awal: {spouse_saham_full}, remainder: {sisa}"));

    if sisa % total_saham_radd == 0 {
        let faktor_radd = sisa / total_saham_radd;
        notes.push(format!(
            "remainder divides evenly by the radd heirs' total saham: factor {faktor_radd}"
        ));
        let mut shares = vec![(spouse.category, spouse_saham_full)];
        for (category, saham) in &radd_saham {
            let final_saham = saham * faktor_radd;
            shares.push((*category, final_saham));
            notes.push(format!("{category:?}: {saham} * {faktor_radd} = {final_saham}"));
        }
        return Ok(ReddResult {
            ashl_awal: ashl_zauj,
            ashl_akhir: ashl_awal_full,
            shares,
            notes,
        });
    }

    notes.push("remainder does not divide evenly: correcting (muqasamah)".to_string());
    let ashl_akhir = total_saham_radd * ashl_zauj;
    let spouse_saham = spouse.fardh.numerator() * total_saham_radd;
    let sisa_inkisar = ashl_akhir - spouse_saham;
    notes.push(format!("ashl akhir = {total_saham_radd} * {ashl_zauj} = {ashl_akhir}"));
    notes.push(format!("spouse: {spouse_saham}/{ashl_akhir}, remainder: {sisa_inkisar}"));

    let mut shares = vec![(spouse.category, spouse_saham)];
    for (category, saham) in &radd_saham {
        let final_saham = (saham * sisa_inkisar) / total_saham_radd;
        shares.push((*category, final_saham));
        notes.push(format!(
            "{category:?}: ({saham}/{total_saham_radd}) * {sisa_inkisar} = {final_saham}"
        ));
    }

    Ok(ReddResult {
        ashl_awal: ashl_zauj,
        ashl_akhir,
        shares,
        notes,
    })
}
