//! Coupon Evaluation Engine
//!
//! Pure, stateless evaluation of promotional coupons against cart snapshots.
//! The engine decides which lines a coupon may discount, computes the amount,
//! and enforces eligibility; it never reads the clock, touches storage, or
//! records redemptions — callers supply `now` and any usage counters.
//!
//! Evaluation pipeline: status/window → usage limits → minimum subtotal →
//! scope resolution → discount math. First failing check wins.

pub mod discount;
pub mod offers;
pub mod scope;
pub mod validate;

pub use discount::*;
pub use offers::*;
pub use scope::*;
pub use validate::*;
