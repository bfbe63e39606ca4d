//! Default filesystem-backed port implementations.

use crate::ports::{LoadedSource, SourceDiscovery, SourceLoadError, WritePort};
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::debug;

/// Expands include globs under a root and reads each match.
#[derive(Debug, Clone)]
pub struct FsSourceDiscovery {
    pub root: Utf8PathBuf,
    pub include: Vec<String>,
}

impl FsSourceDiscovery {
    pub fn new(root: Utf8PathBuf, include: Vec<String>) -> Self {
        Self { root, include }
    }
}

impl SourceDiscovery for FsSourceDiscovery {
    fn discover(&self) -> anyhow::Result<Vec<LoadedSource>> {
        let mut out = Vec::new();

        for pattern in &self.include {
            let full = self.root.join(pattern);
            debug!(pattern = %full, "expanding include pattern");

            for entry in glob::glob(full.as_str())
                .with_context(|| format!("invalid include pattern {}", full))?
            {
                let path = entry.map_err(|e| anyhow::anyhow!("glob error: {e}"))?;
                if !path.is_file() {
                    continue;
                }
                let utf8_path = Utf8PathBuf::from_path_buf(path)
                    .map_err(|p| anyhow::anyhow!("non-utf8 path {}", p.display()))?;
                out.push(load_source(utf8_path));
            }
        }

        // Deterministic order matters; a pattern pair may match twice.
        out.sort_by(|a, b| a.path.cmp(&b.path));
        out.dedup_by(|a, b| a.path == b.path);
        Ok(out)
    }
}

fn load_source(path: Utf8PathBuf) -> LoadedSource {
    let contents = match fs::read(&path) {
        Ok(bytes) => String::from_utf8(bytes).map_err(|e| SourceLoadError::NonUtf8 {
            message: e.to_string(),
        }),
        Err(e) => Err(SourceLoadError::Io {
            message: e.to_string(),
        }),
    };
    LoadedSource { path, contents }
}

/// In-memory source list for embedding and testing.
///
/// Sorted by path on construction to match `FsSourceDiscovery`'s
/// deterministic ordering.
#[derive(Debug, Clone)]
pub struct InMemorySourceDiscovery {
    sources: Vec<LoadedSource>,
}

impl InMemorySourceDiscovery {
    pub fn new(mut sources: Vec<LoadedSource>) -> Self {
        sources.sort_by(|a, b| a.path.cmp(&b.path));
        Self { sources }
    }
}

impl SourceDiscovery for InMemorySourceDiscovery {
    fn discover(&self) -> anyhow::Result<Vec<LoadedSource>> {
        Ok(self.sources.clone())
    }
}

/// Filesystem write operations.
#[derive(Debug, Clone, Default)]
pub struct FsWritePort;

impl WritePort for FsWritePort {
    fn write_file(&self, path: &Utf8Path, contents: &[u8]) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create parent dir for {}", path))?;
        }
        std::fs::write(path, contents).with_context(|| format!("write {}", path))
    }

    fn create_dir_all(&self, path: &Utf8Path) -> anyhow::Result<()> {
        std::fs::create_dir_all(path).with_context(|| format!("create_dir_all {}", path))
    }
}
