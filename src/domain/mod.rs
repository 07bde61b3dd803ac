//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `roi` - ROI projection engine and its input/report types

pub mod foundation;
pub mod roi;
