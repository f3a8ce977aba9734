//! An exact-arithmetic Islamic inheritance (faraid) calculation engine.
//!
//! This crate classifies a heir set against the classical furudh (fixed
//! share) rules, builds the ashl al-mas'alah (problem base), corrects it
//! for indivisible heads (inkisar), resolves aul (inflation) and radd
//! (return), distributes the residue among ashobah heirs 2:1 by sex, and
//! monetises the result — all in exact integer/rational arithmetic, never
//! floating point, since every quantity in this domain is a ratio of small
//! integers.
//!
//! ```
//! use faraid::{CalculationInputBuilder, HeirCategory, calculate};
//!
//! let input = CalculationInputBuilder::new(1_200)
//!     .with_heir(HeirCategory::Wife, 1)
//!     .with_heir(HeirCategory::Son, 1)
//!     .with_heir(HeirCategory::Daughter, 2)
//!     .build()
//!     .unwrap();
//!
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.shares.iter().map(|s| s.share_amount).sum::<u64>(), 1_200);
//! ```
//!
//! # Design philosophy
//!
//! ```text
//! CalculationInput
//!       │
//!       ▼
//! furudh::determine_furudh   classify every present heir (fixed / residuary / excluded)
//!       │
//!       ▼
//! ashl::compute               lcm of fixed-share denominators
//!       │
//!       ▼
//! aul / radd / residuary      inflate, return, or distribute the remainder
//!       │
//!       ▼
//! inkisar::correct            scale so every head-count divides evenly
//!       │
//!       ▼
//! result::assemble            monetise against the tirkah
//! ```
//!
//! The four named variants (Akdariyyah, Jadd-with-siblings, Musytarakah,
//! and the umariyyatan/Gharrawain mother's-share rule) are detected before
//! this pipeline runs and dispatched to their own procedures, since each
//! rewrites a step the ordinary pipeline assumes is uniform. Haml
//! (pregnancy), Khuntsa (ambiguous sex), Gharqa (simultaneous death), and
//! Munasakhot (a second death before the first estate settles) need more
//! than one [`CalculationInput`] and are exposed as their own entry points
//! in [`special`] rather than folded into [`calculate`].
//!
//! No module here reaches for floating point, a general-purpose bignum
//! crate, or interior mutability: every rule table is a `const` or a plain
//! `match`, and every quantity is an exact `u64` numerator/denominator
//! pair.

pub mod ashl;
pub mod error;
pub mod fardh;
pub mod fraction;
pub mod furudh;
pub mod heir;
pub mod inkisar;
pub mod input;
pub mod orchestrator;
pub mod radd;
pub mod residuary;
pub mod result;
pub mod rules;
pub mod special;
pub mod variants;

pub use error::Error;
pub use fardh::Fardh;
pub use fraction::{Fraction, NumberRelation};
pub use heir::HeirCategory;
pub use input::{CalculationInput, CalculationInputBuilder, HeirInput};
pub use orchestrator::calculate;
pub use result::{CalculationResult, HeirShare};
pub use special::{
    calculate_gharqa, calculate_haml, calculate_khuntsa, calculate_munasakhot, HamlResult,
    KhuntsaResult, MunasakhotResult,
};
pub use variants::Variant;
