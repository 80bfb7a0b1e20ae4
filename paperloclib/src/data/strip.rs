//! Executable code size of a Dafny tree, with ghost code removed.
//!
//! Every `.dfy` file under `<root>/src` is re-printed by
//! `dafny /printMode:NoGhost` into a mirror tree at `<root>/src-compiled`,
//! and the mirror is then counted with [`ClocCounter`]. Dafny is slow, so all
//! compiler processes are started before any of them is waited on.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use crate::config::{Tool, ToolConfig};
use crate::data::cloc::ClocCounter;
use crate::error::LocError;
use crate::source::pattern::discover_files;
use crate::Result;

/// Name of the mirror tree created under the project root.
pub const MIRROR_DIR: &str = "src-compiled";

/// A scratch directory that is removed when dropped.
#[derive(Debug)]
struct MirrorTree {
    path: PathBuf,
}

impl MirrorTree {
    /// Create an empty tree at `path`, replacing any stale one.
    fn create(path: PathBuf) -> Result<Self> {
        if path.exists() {
            log::debug!("removing stale {}", path.display());
            fs::remove_dir_all(&path)?;
        }
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for MirrorTree {
    fn drop(&mut self) {
        if let Err(e) = fs::remove_dir_all(&self.path) {
            log::warn!("could not remove {}: {e}", self.path.display());
        }
    }
}

/// Counts ghost-free Dafny code.
#[derive(Debug, Clone)]
pub struct StrippedCompile {
    dafny: PathBuf,
    cloc: ClocCounter,
}

impl StrippedCompile {
    /// Locate `dafny` and `cloc` using `config`.
    pub fn new(config: &ToolConfig) -> Result<Self> {
        Ok(Self::with_tools(
            config.resolve(Tool::Dafny)?,
            ClocCounter::new(config)?,
        ))
    }

    /// Use an already resolved compiler and counter.
    pub fn with_tools(dafny: impl Into<PathBuf>, cloc: ClocCounter) -> Self {
        Self {
            dafny: dafny.into(),
            cloc,
        }
    }

    /// Non-blank lines of the ghost-free re-print of `<root>/src`.
    ///
    /// Fails if any compiler run fails; no partial count is returned. The
    /// mirror tree is removed once all compiler processes have exited.
    pub fn count(&self, root: &Path) -> Result<u64> {
        let src = root.join("src");
        let sources = discover_files(&src, "dfy")?;
        let mirror = MirrorTree::create(root.join(MIRROR_DIR))?;

        self.print_no_ghost(&src, &sources, mirror.path())?;

        let lines = self.cloc.count(mirror.path())?;
        log::info!("{} files without ghost code: {lines} lines", sources.len());
        Ok(lines)
    }

    fn spawn(&self, file: &Path, out: &Path) -> std::io::Result<Child> {
        if let Some(parent) = out.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut rprint = OsString::from("/rprint:");
        rprint.push(out);

        Command::new(&self.dafny)
            .args(["/printMode:NoGhost", "/dafnyVerify:0"])
            .arg(rprint)
            .arg(file)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
    }

    /// Start one compiler per file, then wait for all of them.
    fn print_no_ghost(&self, src: &Path, sources: &[PathBuf], mirror: &Path) -> Result<()> {
        log::info!("printing {} files with /printMode:NoGhost", sources.len());

        let mut failed = 0;
        let mut children = Vec::with_capacity(sources.len());
        for file in sources {
            let rel = file.strip_prefix(src).unwrap_or(file);
            let out = mirror.join(rel);
            match self.spawn(file, &out) {
                Ok(child) => children.push((file, child)),
                Err(e) => {
                    log::error!("{}: could not start dafny: {e}", file.display());
                    failed += 1;
                }
            }
        }

        for (file, child) in children {
            match child.wait_with_output() {
                Ok(output) if output.status.success() => {}
                Ok(output) => {
                    log::error!(
                        "{}: dafny exited with {}\n{}{}",
                        file.display(),
                        output.status,
                        String::from_utf8_lossy(&output.stdout),
                        String::from_utf8_lossy(&output.stderr),
                    );
                    failed += 1;
                }
                Err(e) => {
                    log::error!("{}: could not wait for dafny: {e}", file.display());
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            return Err(LocError::StripFailed {
                failed,
                total: sources.len(),
            });
        }
        Ok(())
    }
}
