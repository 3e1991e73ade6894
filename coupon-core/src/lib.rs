//! Core types for the coupon discount engine
//!
//! Data models shared between the evaluation engine and host applications:
//! cart snapshots, coupon definitions, evaluation verdicts, and precise
//! money helpers. This crate holds no evaluation logic and no state.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use error::{CouponError, CouponResult};
pub use models::*;
