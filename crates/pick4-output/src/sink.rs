use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use tracing::info;

use pick4_model::{Pick4Error, Result};

/// Where exported content ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportTarget {
    File(PathBuf),
    Stdout,
}

impl fmt::Display for ExportTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportTarget::File(path) => write!(f, "{}", path.display()),
            ExportTarget::Stdout => f.write_str("stdout"),
        }
    }
}

/// Receives exported content under a suggested filename.
pub trait ExportSink {
    fn export(&self, filename: &str, contents: &str) -> Result<ExportTarget>;
}

/// Writes exports as files inside a directory, creating it if needed.
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl ExportSink for DirectorySink {
    fn export(&self, filename: &str, contents: &str) -> Result<ExportTarget> {
        fs::create_dir_all(&self.dir).map_err(|source| Pick4Error::io(&self.dir, source))?;
        let path = self.dir.join(filename);
        fs::write(&path, contents).map_err(|source| Pick4Error::io(&path, source))?;
        info!(path = %path.display(), bytes = contents.len(), "export written");
        Ok(ExportTarget::File(path))
    }
}

/// Writes exports to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl ExportSink for StdoutSink {
    fn export(&self, _filename: &str, contents: &str) -> Result<ExportTarget> {
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{contents}")
            .and_then(|()| stdout.flush())
            .map_err(|source| Pick4Error::io("<stdout>", source))?;
        Ok(ExportTarget::Stdout)
    }
}
