//! Input value types.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::heir::HeirCategory;

/// One heir present in the estate: a category and a head-count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct HeirInput {
    pub category: HeirCategory,
    pub quantity: u32,
}

impl HeirInput {
    /// Build a `HeirInput`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `quantity` is zero.
    pub fn new(category: HeirCategory, quantity: u32) -> Result<Self, Error> {
        if quantity == 0 {
            return Err(Error::invalid_input(format!(
                "quantity for {category:?} must be at least 1"
            )));
        }
        Ok(Self { category, quantity })
    }
}

/// The validated input to a single calculation: a heir set with
/// pairwise-distinct categories, and a positive tirkah (estate value, in the
/// smallest monetary unit the caller uses — this crate treats it as an
/// opaque positive integer and never inspects its currency).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct CalculationInput {
    pub heirs: Vec<HeirInput>,
    pub tirkah: u64,
}

/// Consuming builder for [`CalculationInput`], following this crate family's
/// `with_*` builder convention.
#[derive(Debug, Clone)]
pub struct CalculationInputBuilder {
    tirkah: u64,
    heirs: BTreeMap<HeirCategory, u32>,
}

impl CalculationInputBuilder {
    /// Start building with the given tirkah.
    #[must_use]
    pub fn new(tirkah: u64) -> Self {
        Self {
            tirkah,
            heirs: BTreeMap::new(),
        }
    }

    /// Add (or, if called twice for the same category, overwrite) a heir.
    #[must_use]
    pub fn with_heir(mut self, category: HeirCategory, quantity: u32) -> Self {
        self.heirs.insert(category, quantity);
        self
    }

    /// Validate and finish building.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `tirkah` is zero, if no heirs were
    /// added, or if any heir has quantity zero.
    pub fn build(self) -> Result<CalculationInput, Error> {
        if self.tirkah == 0 {
            return Err(Error::invalid_input("tirkah must be positive"));
        }
        if self.heirs.is_empty() {
            return Err(Error::invalid_input("at least one heir is required"));
        }
        let mut heirs = Vec::with_capacity(self.heirs.len());
        for (category, quantity) in self.heirs {
            heirs.push(HeirInput::new(category, quantity)?);
        }
        Ok(CalculationInput {
            heirs,
            tirkah: self.tirkah,
        })
    }
}

impl CalculationInput {
    /// True if `category` is present in the heir set.
    #[must_use]
    pub fn has(&self, category: HeirCategory) -> bool {
        self.heirs.iter().any(|h| h.category == category)
    }

    /// True if any of `categories` is present.
    #[must_use]
    pub fn has_any(&self, categories: &[HeirCategory]) -> bool {
        categories.iter().any(|c| self.has(*c))
    }

    /// The quantity of `category`, or 0 if absent.
    #[must_use]
    pub fn quantity_of(&self, category: HeirCategory) -> u32 {
        self.heirs
            .iter()
            .find(|h| h.category == category)
            .map_or(0, |h| h.quantity)
    }

    /// Total head-count across all six sibling categories.
    #[must_use]
    pub fn sibling_count(&self) -> u32 {
        self.heirs
            .iter()
            .filter(|h| h.category.is_sibling())
            .map(|h| h.quantity)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_empty_heirs() {
        let err = CalculationInputBuilder::new(100).build().unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn builder_validates_zero_tirkah() {
        let err = CalculationInputBuilder::new(0)
            .with_heir(HeirCategory::Husband, 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidInput { .. }));
    }

    #[test]
    fn builder_dedupes_repeated_category() {
        let input = CalculationInputBuilder::new(100)
            .with_heir(HeirCategory::Daughter, 1)
            .with_heir(HeirCategory::Daughter, 2)
            .build()
            .unwrap();
        assert_eq!(input.heirs.len(), 1);
        assert_eq!(input.quantity_of(HeirCategory::Daughter), 2);
    }

    #[test]
    fn sibling_count_sums_all_six_categories() {
        let input = CalculationInputBuilder::new(100)
            .with_heir(HeirCategory::FullSister, 2)
            .with_heir(HeirCategory::MaternalBrother, 1)
            .build()
            .unwrap();
        assert_eq!(input.sibling_count(), 3);
    }
}
