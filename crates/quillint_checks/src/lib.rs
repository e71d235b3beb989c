//! # quillint_checks
//!
//! Check definitions and matching algorithms for Quillint.
//!
//! This crate provides:
//! - The [`Check`] model: one configured rule, polymorphic over its kind
//! - The six built-in matching algorithms (existence, case, recommender,
//!   case-recommender, repetition, regex)
//! - The [`DispatchTable`] mapping a kind to its algorithm
//!
//! The dispatch table is constructed explicitly and passed into the engine;
//! there is no process-wide registry. Dispatching a check whose kind is not
//! registered is a configuration error, never a silent no-op.

mod check;
mod dispatch;
mod error;
mod matchers;
mod pattern;

pub use check::{Check, CheckParams, PatternSpec, Recommendation};
pub use dispatch::DispatchTable;
pub use error::CheckError;
pub use pattern::LINK_MARKERS;
