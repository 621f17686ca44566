//! anamnesis-scoring
//!
//! Pure scoring logic for the intake record. No I/O, no async, no error
//! type: every function here is total over its inputs.
//!
//! - [`kuppuswamy`] derives a socio-economic tier from education,
//!   occupation and monthly family income.
//! - [`duration`] converts a captured (years, months, days) triple to an
//!   approximate day count.
//! - [`ordering`] sorts complaints by that day count.

pub mod duration;
pub mod kuppuswamy;
pub mod ordering;
pub mod scale;

pub use duration::Duration;
pub use kuppuswamy::{EducationLevel, OccupationLevel, SocioEconomicScore, SocioEconomicTier, classify};
pub use ordering::{Timed, reorder};
