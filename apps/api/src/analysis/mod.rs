//! The matching engine: skill normalization, the static role catalog,
//! role auto-detection, and missing-skill (gap) computation.
//!
//! Everything in here is pure and synchronous; the HTTP layer and the
//! upstream clients live elsewhere.

pub mod catalog;
pub mod detect;
pub mod gap;
pub mod normalize;
