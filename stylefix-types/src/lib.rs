//! Shared DTOs (schemas-as-code) for the stylefix workspace.
//!
//! # Design constraints
//! - The report types are intended to be serialized to disk.
//! - Be conservative with breaking changes.
//! - Prefer adding optional fields over changing semantics.

pub mod category;
pub mod decision;
pub mod diagnostic;
pub mod report;
pub mod severity;

pub use category::{FixCategories, FixCategory};
pub use decision::{DecisionReason, FixDecision};
pub use diagnostic::{Diagnostic, DiagnosticDescriptor};
pub use severity::{Severity, SeverityParseError};

/// Schema identifiers.
pub mod schema {
    pub const STYLEFIX_REPORT_V1: &str = "stylefix.report.v1";
}
