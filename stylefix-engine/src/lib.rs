//! Decision and dispatch logic: turn a requested fix set + severity
//! configuration into approved, applied formatter rewrites.
//!
//! This crate owns *whether* a fix runs and *in what order*. How a unit's
//! text is discovered and persisted is the `stylefix-core` crate's concern.

pub mod analysis;
mod decision;
mod dispatch;
mod formatter;
pub mod formatters;
mod unit;

pub use decision::{FixRequest, decide};
pub use dispatch::{AppliedFormatter, DispatchError, UnitOutcome, format_unit};
pub use formatter::{Formatter, Rewrite, builtin_formatters};
pub use unit::SourceUnit;
