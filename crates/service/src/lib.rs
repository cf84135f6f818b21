//! Service layer providing the trip and favorite repositories on top of models.
//! - Separates persistence policy from record definitions.
//! - Reuses default-fill and normalization rules in the `models` crate.
//! - Never surfaces storage failures to callers: reads fail open to empty,
//!   writes degrade to silent no-ops.

pub mod errors;
pub mod favorites;
pub mod geo;
pub mod runtime;
pub mod storage;
pub mod trips;
