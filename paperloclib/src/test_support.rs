//! Stand-in executables for tests that exercise the tool wrappers.

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

/// Write an executable `sh` script named `name` into `dir`.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// A fake `cloc` that prints a fixed JSON report.
pub fn fake_cloc(dir: &Path, code: u64, comment: u64) -> PathBuf {
    let report = format!(
        r#"{{"header": {{"cloc_version": "1.96", "n_files": 1}}, "Dafny": {{"nFiles": 1, "blank": 7, "comment": {comment}, "code": {code}}}, "SUM": {{"blank": 7, "comment": {comment}, "code": {code}, "nFiles": 1}}}}"#
    );
    write_script(dir, "cloc", &format!("cat <<'EOF'\n{report}\nEOF"))
}
