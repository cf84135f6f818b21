//! Storage abstractions for the store layer
//!
//! The host supplies a string-keyed text medium (browser-style key/value
//! storage); everything above it persists whole JSON array documents and
//! treats unreadable data as empty.

pub mod doc;
pub mod file;
pub mod medium;
pub mod memory;

pub use doc::JsonDocStore;
pub use file::FileMedium;
pub use medium::{NullMedium, StorageMedium};
pub use memory::MemoryMedium;
