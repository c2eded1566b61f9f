//! # boost-decay - Linear boost decay engine.
//!
//! All calculations use integer arithmetic only for determinism.
//!
//! A boost of `amount` issued at `issue_time` loses value linearly and is
//! worth exactly zero at `expire_time`:
//!
//! ```text
//! value(now) = amount * (expire_time - now) / (expire_time - issue_time)
//! ```
//!
//! Division floors, so rounding never inflates a boost.

pub mod engine;

pub use engine::{mul_div_floor, LinearDecay};
