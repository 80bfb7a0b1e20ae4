//! DaisyNFS lines of code.
//!
//! Measures a checkout of mit-pdos/daisy-nfsd (`DAISY_NFSD_PATH`):
//!
//! | metric         | how                                                    |
//! |----------------|--------------------------------------------------------|
//! | `method specs` | signatures of `{:public}` methods in `src/fs/dir_fs.dfy` |
//! | `nfs spec`     | non-blank lines of `src/fs/nfs.s.dfy`                  |
//! | `code`         | non-blank lines of `src` with ghost code stripped      |
//! | `total`        | non-blank lines of `src`                               |
//! | `trusted spec` | `wc -l` of the journal and machine `.s.dfy` specs      |
//! | `trusted code` | `wc -l` of the Go NFS glue and `main.go`               |
//! | `spec`         | `method specs + nfs spec`                              |
//! | `proof`        | `total - code`                                         |

use crate::config::ToolConfig;
use crate::data::cloc::ClocCounter;
use crate::data::extract::RangeExtractor;
use crate::data::lines::wc_l;
use crate::data::metrics::MetricSet;
use crate::data::strip::StrippedCompile;
use crate::source::pattern::prefix_patterns;
use crate::source::project::ProjectRoot;
use crate::Result;

/// File written in LaTeX mode.
pub const LATEX_FILE: &str = "loc-cmds.tex";

/// Prefix of every generated macro.
pub const MACRO_PREFIX: &str = "\\daisy";

/// Raw counts for DaisyNFS.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DaisyCounts {
    pub method_specs: i64,
    pub nfs_spec: i64,
    pub code: i64,
    pub total: i64,
    pub trusted_spec: i64,
    pub trusted_code: i64,
}

impl DaisyCounts {
    /// Count everything. Requires `cloc` and `dafny`.
    pub fn collect(root: &ProjectRoot, tools: &ToolConfig) -> Result<Self> {
        // resolve both tools before any slow work starts
        let cloc = ClocCounter::new(tools)?;
        let stripped = StrippedCompile::new(tools)?;

        log::info!("counting DaisyNFS in {}", root.path().display());
        Ok(Self {
            method_specs: method_spec_lines(root)? as i64,
            nfs_spec: cloc.count(&root.join("src/fs/nfs.s.dfy"))? as i64,
            code: stripped.count(root.path())? as i64,
            total: cloc.count(&root.join("src"))? as i64,
            trusted_spec: trusted_spec_lines(root)? as i64,
            trusted_code: trusted_code_lines(root)? as i64,
        })
    }

    /// `method specs + nfs spec`
    pub fn spec(&self) -> i64 {
        self.method_specs + self.nfs_spec
    }

    /// `total - code`
    pub fn proof(&self) -> i64 {
        self.total - self.code
    }

    /// All metrics, in report order.
    pub fn metrics(&self) -> MetricSet {
        let mut metrics = MetricSet::new();
        metrics
            .push("method specs", self.method_specs)
            .push("nfs spec", self.nfs_spec)
            .push("code", self.code)
            .push("total", self.total)
            .push("trusted spec", self.trusted_spec)
            .push("trusted code", self.trusted_code)
            .push("spec", self.spec())
            .push("proof", self.proof());
        metrics
    }
}

/// Lines from each `public` method header through its opening brace.
pub fn method_spec_lines(root: &ProjectRoot) -> Result<u64> {
    RangeExtractor::new("public", r"^\s*\{")?.count_file(root.join("src/fs/dir_fs.dfy"))
}

/// `wc -l src/jrnl/*.s.dfy src/machine/*.s.dfy`
pub fn trusted_spec_lines(root: &ProjectRoot) -> Result<u64> {
    wc_l(root.path(), &["src/jrnl/*.s.dfy", "src/machine/*.s.dfy"])
}

/// `wc -l nfsd/{fh,mkfs,mount,ops}.go cmd/daisy-nfsd/main.go`
pub fn trusted_code_lines(root: &ProjectRoot) -> Result<u64> {
    let mut patterns = prefix_patterns("nfsd/", &["fh.go", "mkfs.go", "mount.go", "ops.go"]);
    patterns.push("cmd/daisy-nfsd/main.go".to_string());
    wc_l(root.path(), &patterns)
}
