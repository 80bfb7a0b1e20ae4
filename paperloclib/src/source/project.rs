//! Project roots resolved from the environment.
//!
//! Every external checkout is named by an identifier (`daisy_nfsd`,
//! `perennial`, ...). Its location comes from `<IDENTIFIER>_PATH`, and every
//! pattern counted for that project is joined onto the resolved root rather
//! than relying on the process working directory.

use std::env;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::LocError;
use crate::Result;

/// External projects whose source trees are measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectId {
    /// mit-pdos/daisy-nfsd (Dafny)
    DaisyNfsd,
    /// mit-pdos/perennial (Coq)
    Perennial,
    /// mit-pdos/go-nfsd (Go)
    GoNfsd,
    /// mit-pdos/go-journal (Go)
    GoJournal,
    /// tchajed/marshal (Go)
    Marshal,
}

impl ProjectId {
    /// Lowercase identifier used to derive the environment variable.
    pub fn identifier(self) -> &'static str {
        match self {
            ProjectId::DaisyNfsd => "daisy_nfsd",
            ProjectId::Perennial => "perennial",
            ProjectId::GoNfsd => "go_nfsd",
            ProjectId::GoJournal => "go_journal",
            ProjectId::Marshal => "marshal",
        }
    }

    /// Environment variable holding this project's checkout path.
    pub fn env_var(self) -> String {
        format!("{}_PATH", self.identifier().to_uppercase())
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A resolved checkout directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRoot {
    id: ProjectId,
    path: PathBuf,
}

impl ProjectRoot {
    /// Use an explicit path for a project.
    ///
    /// The path must be an existing directory.
    pub fn new(id: ProjectId, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_dir() {
            return Err(LocError::PathNotFound(path.to_path_buf()));
        }
        let path = path
            .canonicalize()
            .map_err(|source| LocError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self { id, path })
    }

    /// Resolve a project from `<IDENTIFIER>_PATH`.
    pub fn from_env(id: ProjectId) -> Result<Self> {
        let var = id.env_var();
        let value = env::var_os(&var).ok_or(LocError::MissingEnv { var: var.clone() })?;
        log::debug!("{} = {}", var, Path::new(&value).display());
        Self::new(id, value)
    }

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Join a relative path onto the root.
    pub fn join(&self, rel: impl AsRef<Path>) -> PathBuf {
        self.path.join(rel)
    }

    /// A root for a subdirectory of this project, e.g. `src/program_proof`.
    pub fn subdir(&self, rel: impl AsRef<Path>) -> Result<Self> {
        Self::new(self.id, self.path.join(rel))
    }
}
