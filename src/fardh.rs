//! The admissible fixed-share fractions.

use crate::fraction::Fraction;

/// A fixed share, drawn from the closed admissible set
/// `{1/2, 1/3, 1/4, 1/6, 1/8, 2/3}`. Residuary (ashobah) status is *not* a
/// member of this type — it is represented by the absence of a `Fardh` on
/// [`crate::furudh::FurudhResult`], as a sentinel value meaning "residuary".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Fardh {
    Half,
    Third,
    Quarter,
    Sixth,
    Eighth,
    TwoThirds,
}

impl Fardh {
    /// The numerator, always 1 or 2.
    #[must_use]
    pub const fn numerator(self) -> u64 {
        match self {
            Self::TwoThirds => 2,
            _ => 1,
        }
    }

    /// The denominator, one of 2, 3, 4, 6, 8.
    #[must_use]
    pub const fn denominator(self) -> u64 {
        match self {
            Self::Half => 2,
            Self::Third | Self::TwoThirds => 3,
            Self::Quarter => 4,
            Self::Sixth => 6,
            Self::Eighth => 8,
        }
    }

    /// As a reduced [`Fraction`].
    #[must_use]
    pub fn as_fraction(self) -> Fraction {
        Fraction::new(self.numerator(), self.denominator())
            .expect("admissible fardh denominators are never zero")
    }

    /// Render as `"n/d"`.
    #[must_use]
    pub fn format(self) -> String {
        self.as_fraction().format()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admissible_set_formats_match_spec() {
        assert_eq!(Fardh::Half.format(), "1/2");
        assert_eq!(Fardh::Third.format(), "1/3");
        assert_eq!(Fardh::Quarter.format(), "1/4");
        assert_eq!(Fardh::Sixth.format(), "1/6");
        assert_eq!(Fardh::Eighth.format(), "1/8");
        assert_eq!(Fardh::TwoThirds.format(), "2/3");
    }
}
