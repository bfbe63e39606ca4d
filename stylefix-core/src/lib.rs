//! Embeddable core library for stylefix.
//!
//! Provides a clap-free, I/O-abstracted entry point suitable for linking
//! into another host process.
//!
//! # Port traits
//!
//! All I/O is abstracted behind port traits in [`ports`]:
//! - [`SourceDiscovery`](ports::SourceDiscovery) — enumerate and read source units
//! - [`WritePort`](ports::WritePort) — write files and create directories
//!
//! The [`adapters`] module provides default filesystem-backed implementations.
//!
//! # Entry points
//!
//! - [`run_fix`](pipeline::run_fix) — run the fix pipeline over discovered units
//! - [`write_fix_artifacts`](pipeline::write_fix_artifacts) — persist report + patch

pub mod adapters;
pub mod pipeline;
pub mod ports;
pub mod settings;

pub use pipeline::{FixOutcome, run_fix, write_fix_artifacts};
pub use ports::{LoadedSource, SourceDiscovery, SourceLoadError, WritePort};
pub use settings::FixSettings;
