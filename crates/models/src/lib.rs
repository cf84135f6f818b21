//! Record definitions and input shapes for the travel stores.
//! - Keeps default-fill and normalization rules next to the types they produce.
//! - Persisted field names are camelCase: the stored-document layout is the
//!   contract, not Rust naming.

pub mod coerce;
pub mod favorite;
pub mod trip;
