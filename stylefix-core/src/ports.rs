//! Port traits abstracting all I/O away from the pipeline.

use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// One discovered source file. Read failures travel with the unit so the
/// pipeline can report them without aborting other units.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub path: Utf8PathBuf,
    pub contents: Result<String, SourceLoadError>,
}

#[derive(Debug, Error, Clone)]
pub enum SourceLoadError {
    #[error("io error: {message}")]
    Io { message: String },

    #[error("not valid utf-8: {message}")]
    NonUtf8 { message: String },
}

/// Source of units to format.
pub trait SourceDiscovery {
    fn discover(&self) -> anyhow::Result<Vec<LoadedSource>>;
}

/// File-system write operations.
pub trait WritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()>;
    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()>;
}
