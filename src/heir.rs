//! The closed taxonomy of 25 canonical heir categories.

use crate::error::Error;

/// One of the 25 canonical heir categories recognised by classical faraid.
///
/// Each variant carries a stable numeric identifier (1..=25, see
/// [`HeirCategory::id`]), a localised display name, and a script-native
/// name, mirroring how this crate family names its other closed
/// enumerations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[non_exhaustive]
pub enum HeirCategory {
    /// Son.
    Son,
    /// Father.
    Father,
    /// Husband.
    Husband,
    /// Wife.
    Wife,
    /// Son's son (grandson through a son).
    SonsSon,
    /// Paternal grandfather.
    Grandfather,
    /// Full brother (same father and mother).
    FullBrother,
    /// Paternal (consanguine) brother.
    PaternalBrother,
    /// Maternal (uterine) brother.
    MaternalBrother,
    /// Full brother's son (nephew).
    FullBrothersSon,
    /// Paternal brother's son (nephew).
    PaternalBrothersSon,
    /// Full paternal uncle.
    FullUncle,
    /// Paternal (consanguine) uncle.
    PaternalUncle,
    /// Full uncle's son (cousin).
    FullUnclesSon,
    /// Paternal uncle's son (cousin).
    PaternalUnclesSon,
    /// Daughter.
    Daughter,
    /// Son's daughter (granddaughter through a son).
    SonsDaughter,
    /// Mother.
    Mother,
    /// Maternal grandmother.
    MaternalGrandmother,
    /// Paternal grandmother.
    PaternalGrandmother,
    /// Full sister (same father and mother).
    FullSister,
    /// Paternal (consanguine) sister.
    PaternalSister,
    /// Maternal (uterine) sister.
    MaternalSister,
    /// Male manumitter (former master who freed the decedent).
    MaleManumitter,
    /// Female manumitter.
    FemaleManumitter,
}

impl HeirCategory {
    /// All 25 categories, in ascending numeric-id order.
    pub const ALL: [Self; 25] = [
        Self::Son,
        Self::Father,
        Self::Husband,
        Self::Wife,
        Self::SonsSon,
        Self::Grandfather,
        Self::FullBrother,
        Self::PaternalBrother,
        Self::MaternalBrother,
        Self::FullBrothersSon,
        Self::PaternalBrothersSon,
        Self::FullUncle,
        Self::PaternalUncle,
        Self::FullUnclesSon,
        Self::PaternalUnclesSon,
        Self::Daughter,
        Self::SonsDaughter,
        Self::Mother,
        Self::MaternalGrandmother,
        Self::PaternalGrandmother,
        Self::FullSister,
        Self::PaternalSister,
        Self::MaternalSister,
        Self::MaleManumitter,
        Self::FemaleManumitter,
    ];

    /// The stable numeric identifier, 1..=25.
    #[must_use]
    pub const fn id(self) -> u8 {
        match self {
            Self::Son => 1,
            Self::Father => 2,
            Self::Husband => 3,
            Self::Wife => 4,
            Self::SonsSon => 5,
            Self::Grandfather => 6,
            Self::FullBrother => 7,
            Self::PaternalBrother => 8,
            Self::MaternalBrother => 9,
            Self::FullBrothersSon => 10,
            Self::PaternalBrothersSon => 11,
            Self::FullUncle => 12,
            Self::PaternalUncle => 13,
            Self::FullUnclesSon => 14,
            Self::PaternalUnclesSon => 15,
            Self::Daughter => 16,
            Self::SonsDaughter => 17,
            Self::Mother => 18,
            Self::MaternalGrandmother => 19,
            Self::PaternalGrandmother => 20,
            Self::FullSister => 21,
            Self::PaternalSister => 22,
            Self::MaternalSister => 23,
            Self::MaleManumitter => 24,
            Self::FemaleManumitter => 25,
        }
    }

    /// Look up a category from its numeric id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if `id` is outside `1..=25`.
    pub fn from_id(id: u8) -> Result<Self, Error> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == id)
            .ok_or_else(|| Error::invalid_input(format!("unknown heir category id: {id}")))
    }

    /// Localised (Indonesian) display name.
    #[must_use]
    pub const fn name_local(self) -> &'static str {
        match self {
            Self::Son => "Anak Laki-laki",
            Self::Father => "Ayah",
            Self::Husband => "Suami",
            Self::Wife => "Istri",
            Self::SonsSon => "Cucu Laki-laki",
            Self::Grandfather => "Kakek",
            Self::FullBrother => "Saudara Laki-laki Kandung",
            Self::PaternalBrother => "Saudara Laki-laki Seayah",
            Self::MaternalBrother => "Saudara Laki-laki Seibu",
            Self::FullBrothersSon => "Keponakan Laki-laki (Sdr Kandung)",
            Self::PaternalBrothersSon => "Keponakan Laki-laki (Sdr Seayah)",
            Self::FullUncle => "Paman Kandung",
            Self::PaternalUncle => "Paman Seayah",
            Self::FullUnclesSon => "Sepupu Laki-laki (Paman Kandung)",
            Self::PaternalUnclesSon => "Sepupu Laki-laki (Paman Seayah)",
            Self::Daughter => "Anak Perempuan",
            Self::SonsDaughter => "Cucu Perempuan",
            Self::Mother => "Ibu",
            Self::MaternalGrandmother => "Nenek dari Ibu",
            Self::PaternalGrandmother => "Nenek dari Ayah",
            Self::FullSister => "Saudari Kandung",
            Self::PaternalSister => "Saudari Seayah",
            Self::MaternalSister => "Saudari Seibu",
            Self::MaleManumitter => "Pria Pembebas Budak",
            Self::FemaleManumitter => "Wanita Pembebas Budak",
        }
    }

    /// Script-native (Arabic) name.
    #[must_use]
    pub const fn name_script(self) -> &'static str {
        match self {
            Self::Son => "ابن",
            Self::Father => "أب",
            Self::Husband => "زوج",
            Self::Wife => "زوجة",
            Self::SonsSon => "ابن ابن",
            Self::Grandfather => "جد",
            Self::FullBrother => "أخ لأبوين",
            Self::PaternalBrother => "أخ لأب",
            Self::MaternalBrother => "أخ لأم",
            Self::FullBrothersSon => "ابن أخ لأبوين",
            Self::PaternalBrothersSon => "ابن أخ لأب",
            Self::FullUncle => "عم لأبوين",
            Self::PaternalUncle => "عم لأب",
            Self::FullUnclesSon => "ابن عم لأبوين",
            Self::PaternalUnclesSon => "ابن عم لأب",
            Self::Daughter => "بنت",
            Self::SonsDaughter => "بنت ابن",
            Self::Mother => "أم",
            Self::MaternalGrandmother => "جدة من الأم",
            Self::PaternalGrandmother => "جدة من الأب",
            Self::FullSister => "أخت لأبوين",
            Self::PaternalSister => "أخت لأب",
            Self::MaternalSister => "أخت لأم",
            Self::MaleManumitter => "معتق",
            Self::FemaleManumitter => "معتقة",
        }
    }

    /// True for the ten male categories that are *always* residuary and
    /// never carry a fixed share, plus the two manumitters — the
    /// "pure-residuary" tier that short-circuits the rule table
    /// entirely.
    #[must_use]
    pub const fn is_pure_residuary(self) -> bool {
        matches!(
            self,
            Self::Son
                | Self::SonsSon
                | Self::FullBrother
                | Self::PaternalBrother
                | Self::FullBrothersSon
                | Self::PaternalBrothersSon
                | Self::FullUncle
                | Self::PaternalUncle
                | Self::FullUnclesSon
                | Self::PaternalUnclesSon
                | Self::MaleManumitter
                | Self::FemaleManumitter
        )
    }

    /// True for the "mixed" categories that may be either fixed-share or
    /// residuary depending on the rest of the heir set (father and
    /// grandfather: fixed 1/6, fixed 1/6 plus residue, or pure residue).
    #[must_use]
    pub const fn is_mixed(self) -> bool {
        matches!(self, Self::Father | Self::Grandfather)
    }

    /// Weight used for male-side residuary partitioning (2:1 male:female,
    /// the residuary split). Only meaningful once a category is classified as residuary.
    #[must_use]
    pub const fn is_male(self) -> bool {
        !matches!(
            self,
            Self::Wife
                | Self::Daughter
                | Self::SonsDaughter
                | Self::Mother
                | Self::MaternalGrandmother
                | Self::PaternalGrandmother
                | Self::FullSister
                | Self::PaternalSister
                | Self::MaternalSister
                | Self::FemaleManumitter
        )
    }

    /// True for any of the six sibling categories (the
    /// sibling-count-at-least predicate counts across all six).
    #[must_use]
    pub const fn is_sibling(self) -> bool {
        matches!(
            self,
            Self::FullBrother
                | Self::PaternalBrother
                | Self::MaternalBrother
                | Self::FullSister
                | Self::PaternalSister
                | Self::MaternalSister
        )
    }

    /// True for the two spouse categories.
    #[must_use]
    pub const fn is_spouse(self) -> bool {
        matches!(self, Self::Husband | Self::Wife)
    }

    /// True for a descendant through a son (son, son's son) — the set that
    /// triggers the lower spousal fardh tier and excludes maternal
    /// siblings.
    #[must_use]
    pub const fn is_male_descendant(self) -> bool {
        matches!(self, Self::Son | Self::SonsSon)
    }

    /// True for any child or grandchild-through-son (descendant), the set
    /// that excludes full/paternal/maternal siblings and lowers spousal
    /// shares.
    #[must_use]
    pub const fn is_descendant(self) -> bool {
        matches!(
            self,
            Self::Son | Self::Daughter | Self::SonsSon | Self::SonsDaughter
        )
    }
}
