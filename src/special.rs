//! The four named special-procedure entry points: pregnancy,
//! ambiguous sex, simultaneous death, and a second death before the first
//! estate is distributed. Each of these needs information beyond a single
//! [`CalculationInput`] — a hypothetical sex, a second decedent's heir set,
//! or a second calculation chained onto the first — so each gets its own
//! entry point rather than folding into [`crate::orchestrator::calculate`].

use crate::error::Error;
use crate::heir::HeirCategory;
use crate::input::{CalculationInput, CalculationInputBuilder};
use crate::orchestrator::calculate;
use crate::result::CalculationResult;

fn rebuild_with(input: &CalculationInput, category: HeirCategory, quantity: u32) -> CalculationInputBuilder {
    let mut builder = CalculationInputBuilder::new(input.tirkah);
    for heir in &input.heirs {
        builder = builder.with_heir(heir.category, heir.quantity);
    }
    builder.with_heir(category, quantity)
}

/// Haml (pregnancy): a conceived but unborn heir's sex is unknown.
/// The classical procedure computes the estate twice — once assuming the
/// child is born male, once female — and withholds the unborn's share
/// until birth, distributing only what every other heir is guaranteed
/// under both assumptions.
#[derive(Debug, Clone)]
pub struct HamlResult {
    pub if_male: CalculationResult,
    pub if_female: CalculationResult,
}

/// `base` must not already include the unborn child.
///
/// # Errors
///
/// Propagates [`Error`] from either sub-calculation.
pub fn calculate_haml(base: &CalculationInput) -> Result<HamlResult, Error> {
    let if_male = calculate(&rebuild_with(base, HeirCategory::Son, 1).build()?)?;
    let if_female = calculate(&rebuild_with(base, HeirCategory::Daughter, 1).build()?)?;
    Ok(HamlResult { if_male, if_female })
}

/// Khuntsa (ambiguous sex): an heir whose sex cannot be determined
/// is given the lesser of the male-assumption and female-assumption share
/// — the cautious ("aqall") rule — with the difference held back pending
/// resolution.
#[derive(Debug, Clone)]
pub struct KhuntsaResult {
    pub if_male: CalculationResult,
    pub if_female: CalculationResult,
    /// The ambiguous heir's guaranteed (lesser) amount under both
    /// assumptions.
    pub guaranteed_amount: u64,
}

/// `base` must not already include the ambiguous heir. `male_category` and
/// `female_category` are the two sexed variants of the same relation (e.g.
/// [`HeirCategory::Son`]/[`HeirCategory::Daughter`]).
///
/// # Errors
///
/// Propagates [`Error`] from either sub-calculation.
pub fn calculate_khuntsa(
    base: &CalculationInput,
    male_category: HeirCategory,
    female_category: HeirCategory,
) -> Result<KhuntsaResult, Error> {
    let if_male = calculate(&rebuild_with(base, male_category, 1).build()?)?;
    let if_female = calculate(&rebuild_with(base, female_category, 1).build()?)?;

    let male_amount = if_male
        .shares
        .iter()
        .find(|s| s.category == male_category)
        .map_or(0, |s| s.share_amount);
    let female_amount = if_female
        .shares
        .iter()
        .find(|s| s.category == female_category)
        .map_or(0, |s| s.share_amount);

    Ok(KhuntsaResult {
        guaranteed_amount: male_amount.min(female_amount),
        if_male,
        if_female,
    })
}

/// Gharqa (simultaneous death): when two people die together in a
/// way that makes it impossible to establish who survived whom, neither
/// inherits from the other — each estate is distributed among its own
/// remaining heirs as if the other person predeceased them. Callers
/// ensure `estate_a` and `estate_b` each omit the other decedent.
///
/// # Errors
///
/// Propagates [`Error`] from either sub-calculation.
pub fn calculate_gharqa(
    estate_a: &CalculationInput,
    estate_b: &CalculationInput,
) -> Result<(CalculationResult, CalculationResult), Error> {
    Ok((calculate(estate_a)?, calculate(estate_b)?))
}

/// Munasakhot (a second death before the first estate is distributed,
/// a second decedent's estate before it has been distributed): the deceased heir's computed share is folded into the second
/// estate's tirkah before it is distributed among the second decedent's
/// own heirs.
#[derive(Debug, Clone)]
pub struct MunasakhotResult {
    pub first: CalculationResult,
    pub second: CalculationResult,
}

/// `deceased_heir` is the category in `first` that died before
/// distribution; `second_heirs` is the second decedent's own heir set
/// (not including the now-merged inheritance, which this function adds to
/// `second_heirs`'s tirkah).
///
/// # Errors
///
/// Propagates [`Error`] from either sub-calculation, or
/// [`Error::InvalidInput`] if `deceased_heir` did not inherit anything in
/// `first`.
pub fn calculate_munasakhot(
    first: &CalculationInput,
    deceased_heir: HeirCategory,
    second_heirs: &CalculationInput,
) -> Result<MunasakhotResult, Error> {
    let first_result = calculate(first)?;
    let inherited = first_result
        .shares
        .iter()
        .find(|s| s.category == deceased_heir)
        .ok_or_else(|| {
            Error::invalid_input(format!(
                "{deceased_heir:?} does not appear among the first estate's heirs"
            ))
        })?
        .share_amount;

    let combined_tirkah = second_heirs.tirkah + inherited;
    let mut builder = CalculationInputBuilder::new(combined_tirkah);
    for heir in &second_heirs.heirs {
        builder = builder.with_heir(heir.category, heir.quantity);
    }
    let second_result = calculate(&builder.build()?)?;

    Ok(MunasakhotResult {
        first: first_result,
        second: second_result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::CalculationInputBuilder;

    #[test]
    fn haml_computes_both_sexes() {
        let base = CalculationInputBuilder::new(1_200)
            .with_heir(HeirCategory::Wife, 1)
            .build()
            .unwrap();
        let result = calculate_haml(&base).unwrap();
        assert!(result.if_male.shares.iter().any(|s| s.category == HeirCategory::Son));
        assert!(result.if_female.shares.iter().any(|s| s.category == HeirCategory::Daughter));
    }

    #[test]
    fn khuntsa_takes_the_lesser_amount() {
        let base = CalculationInputBuilder::new(1_200)
            .with_heir(HeirCategory::Wife, 1)
            .build()
            .unwrap();
        let result =
            calculate_khuntsa(&base, HeirCategory::Son, HeirCategory::Daughter).unwrap();
        assert!(result.guaranteed_amount > 0);
    }

    #[test]
    fn munasakhot_folds_the_inheritance_into_the_second_estate() {
        let first = CalculationInputBuilder::new(600)
            .with_heir(HeirCategory::Son, 1)
            .with_heir(HeirCategory::Daughter, 1)
            .build()
            .unwrap();
        let second_heirs = CalculationInputBuilder::new(300)
            .with_heir(HeirCategory::Wife, 1)
            .with_heir(HeirCategory::Son, 1)
            .build()
            .unwrap();
        let result =
            calculate_munasakhot(&first, HeirCategory::Daughter, &second_heirs).unwrap();
        assert!(result.second.tirkah > 300);
    }
}
