//! Residuary (ashobah) distribution: the 2:1 male/female weighting
//! over whatever remains after fardh-holders are paid.

use crate::heir::HeirCategory;

/// One residuary participant: category, head-count, and whether this
/// category is treated as male-weighted for the 2:1 split.
#[derive(Debug, Clone, Copy)]
pub struct Participant {
    pub category: HeirCategory,
    pub quantity: u32,
}

/// Per-participant weight (1 for female, 2 for male) in the residuary pool.
fn weight(category: HeirCategory) -> u32 {
    if category.is_male() {
        2
    } else {
        1
    }
}

/// Distribute `remainder` saham across `participants` by the classical
/// muqasama rule: heads are weighted 2:1 male-to-female, and the remainder
/// is split proportionally to total weight. Each participant's total across
/// its `quantity` heads is returned (not per-head).
///
/// Returns an empty vector if `participants` is empty (the remainder stays
/// unassigned — callers treat this as "no residuary heir present").
#[must_use]
pub fn distribute(remainder: u64, participants: &[Participant]) -> Vec<(HeirCategory, u64)> {
    if participants.is_empty() {
        return Vec::new();
    }

    let total_weight: u64 = participants
        .iter()
        .map(|p| u64::from(weight(p.category)) * u64::from(p.quantity))
        .sum();

    if total_weight == 0 {
        return Vec::new();
    }

    participants
        .iter()
        .map(|p| {
            let share_weight = u64::from(weight(p.category)) * u64::from(p.quantity);
            (p.category, (remainder * share_weight) / total_weight)
        })
        .collect()
}

/// The ashl for an all-residuary pool (the "all ashobah" branch): 2:1
/// weighted if both sexes are present, otherwise the plain head-count.
#[must_use]
pub fn ashl_all_residuary(participants: &[Participant]) -> u64 {
    let total_weight: u64 = participants
        .iter()
        .map(|p| u64::from(weight(p.category)) * u64::from(p.quantity))
        .sum();
    total_weight.max(1)
}
