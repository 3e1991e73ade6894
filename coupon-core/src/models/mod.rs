//! Data models
//!
//! Shared between the evaluation engine and host applications.
//! All IDs are `i64` (host database integer primary keys). Every field is
//! always present, possibly empty or defaulted — callers never need to probe
//! for schema variations.

pub mod cart;
pub mod coupon;
pub mod verdict;

// Re-exports
pub use cart::*;
pub use coupon::*;
pub use verdict::*;
