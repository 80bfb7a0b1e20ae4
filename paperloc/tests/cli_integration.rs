//! Integration tests for the paperloc binaries

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

const PROJECT_VARS: [&str; 5] = [
    "DAISY_NFSD_PATH",
    "PERENNIAL_PATH",
    "GO_JOURNAL_PATH",
    "MARSHAL_PATH",
    "RUST_LOG",
];

fn run(bin: &str, args: &[&str], env: &[(&str, &Path)]) -> (String, String, bool) {
    let mut cmd = Command::new(bin);
    cmd.args(args);
    for var in PROJECT_VARS {
        cmd.env_remove(var);
    }
    for (var, value) in env {
        cmd.env(var, value);
    }
    let output = cmd.output().expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn write(root: &Path, rel: &str, lines: usize) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, "x\n".repeat(lines)).unwrap();
}

/// Minimal perennial, go-journal and marshal checkouts.
fn create_gotxn_checkouts() -> TempDir {
    let temp = tempdir().unwrap();
    let perennial = temp.path().join("perennial");
    for rel in [
        "src/Helpers/Map.v",
        "src/iris_lib/saved_prop.v",
        "src/algebra/big_op/big_sepM.v",
        "src/algebra/liftable.v",
        "src/algebra/auth_map.v",
        "src/program_logic/crash_weakestpre.v",
        "src/goose_lang/lang.v",
        "src/goose_lang/lifting.v",
        "src/goose_lang/notation.v",
        "src/goose_lang/proofmode.v",
        "src/goose_lang/tactics.v",
        "src/goose_lang/recovery_adequacy.v",
        "src/goose_lang/disk.v",
        "src/goose_lang/lib/lock.v",
        "src/goose_lang/lib/slice/impl.v",
        "src/goose_lang/ffi/jrnl_ffi_facts.v",
        "src/goose_lang/ffi/atomic_refinement.v",
        "src/program_proof/disk_lib.v",
        "src/program_proof/wal/circ_proof.v",
        "src/program_proof/wal/heapspec.v",
        "src/program_proof/wal/heapspec_lib.v",
        "src/program_proof/wal/heapspec_list.v",
        "src/program_proof/wal/installer_proof.v",
        "src/program_proof/obj/obj_proof.v",
        "src/program_proof/buf/defs.v",
        "src/program_proof/buf/buf_proof.v",
        "src/program_proof/jrnl/jrnl_proof.v",
        "src/program_proof/buf/bufmap_proof.v",
        "src/program_proof/jrnl/sep_jrnl_proof.v",
        "src/program_proof/lockmap_proof.v",
        "src/program_proof/crash_lockmap_proof.v",
        "src/program_proof/addr/addr_proof.v",
        "src/program_proof/marshal_block.v",
        "src/program_proof/marshal_proof.v",
        "src/program_proof/util_proof.v",
        "src/program_proof/txn/twophase_proof.v",
        "src/program_proof/txn/wrapper_proof.v",
        "src/program_proof/alloc/alloc_proof.v",
        "src/program_proof/txn/twophase_refinement_defs.v",
        "src/program_proof/txn/twophase_sub_logical_reln_defs.v",
        "src/program_proof/txn/twophase_refinement_proof.v",
        "src/program_proof/txn/twophase_refinement_thm.v",
    ] {
        write(&perennial, rel, 10);
    }

    let go_journal = temp.path().join("go-journal");
    for rel in [
        "wal/0circular.go",
        "wal/wal.go",
        "wal/wal_test.go",
        "obj/obj.go",
        "buf/buf.go",
        "jrnl/jrnl.go",
        "buf/bufmap.go",
        "lockmap/lock.go",
        "addr/addr.go",
        "util/util.go",
        "common/common.go",
        "txn/txn.go",
        "alloc/alloc.go",
    ] {
        write(&go_journal, rel, 5);
    }
    write(&temp.path().join("marshal"), "marshal.go", 5);
    temp
}

fn gotxn_env(temp: &TempDir) -> Vec<(&'static str, std::path::PathBuf)> {
    vec![
        ("PERENNIAL_PATH", temp.path().join("perennial")),
        ("GO_JOURNAL_PATH", temp.path().join("go-journal")),
        ("MARSHAL_PATH", temp.path().join("marshal")),
    ]
}

fn run_gotxn(args: &[&str], temp: &TempDir) -> (String, String, bool) {
    let env = gotxn_env(temp);
    let env: Vec<(&str, &Path)> = env.iter().map(|(k, v)| (*k, v.as_path())).collect();
    run(env!("CARGO_BIN_EXE_gotxn-loc"), args, &env)
}

#[test]
fn test_cli_help() {
    for bin in [
        env!("CARGO_BIN_EXE_daisy-loc"),
        env!("CARGO_BIN_EXE_gotxn-loc"),
    ] {
        let (stdout, _, success) = run(bin, &["--help"], &[]);
        assert!(success);
        assert!(stdout.contains("--latex"));
        assert!(stdout.contains("--debug"));
    }

    let (stdout, _, success) = run(env!("CARGO_BIN_EXE_largefile-table"), &["--help"], &[]);
    assert!(success);
    assert!(stdout.contains("DIR"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run(env!("CARGO_BIN_EXE_gotxn-loc"), &["--version"], &[]);
    assert!(success);
    assert!(stdout.contains("gotxn-loc"));
}

#[test]
fn test_daisy_requires_project_path() {
    let (stdout, stderr, success) = run(env!("CARGO_BIN_EXE_daisy-loc"), &[], &[]);

    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("DAISY_NFSD_PATH"));
}

#[test]
fn test_daisy_requires_tools() {
    let checkout = tempdir().unwrap();
    let (_, stderr, success) = run(
        env!("CARGO_BIN_EXE_daisy-loc"),
        &[],
        &[
            ("DAISY_NFSD_PATH", checkout.path()),
            ("PAPERLOC_CLOC", Path::new("/nonexistent/cloc")),
        ],
    );

    assert!(!success);
    assert!(stderr.contains("Error:"));
    assert!(stderr.contains("cloc"));
}

#[test]
fn test_gotxn_requires_all_paths() {
    let temp = create_gotxn_checkouts();
    let (_, stderr, success) = run(
        env!("CARGO_BIN_EXE_gotxn-loc"),
        &[],
        &[("PERENNIAL_PATH", temp.path().join("perennial").as_path())],
    );

    assert!(!success);
    assert!(stderr.contains("GO_JOURNAL_PATH"));
}

#[test]
fn test_gotxn_tables() {
    let temp = create_gotxn_checkouts();
    let (stdout, stderr, success) = run_gotxn(&[], &temp);

    assert!(success, "stderr: {stderr}");
    assert!(stdout.starts_with("Lines of code in Perennial\nComponent"));
    assert!(stdout.contains("\n\nLines of code in GooseLang\n"));
    assert!(stdout.contains("\n\nLines of code for GoTxn\n"));
    assert!(stdout.contains("Perennial total"));
    assert!(stdout.contains("GooseLang total"));
    assert!(stdout.contains("GoTxn total"));
    assert!(stdout.contains("Simulation transfer"));
    assert!(stdout.contains("---"));
}

#[test]
fn test_gotxn_latex() {
    let temp = create_gotxn_checkouts();
    let out = temp.path().join("paper/data");
    let (stdout, stderr, success) = run_gotxn(&["--latex", out.to_str().unwrap()], &temp);

    assert!(success, "stderr: {stderr}");
    assert!(stdout.is_empty());

    let perennial = fs::read_to_string(out.join("perennial-loc.tex")).unwrap();
    assert!(perennial.contains("Program logic for crashes & \\loc{10} \\\\\n"));
    assert!(perennial.ends_with("\\midrule\nPerennial total & \\loc{60} \\\\\n\\bottomrule\n"));

    let gooselang = fs::read_to_string(out.join("gooselang-loc.tex")).unwrap();
    assert!(gooselang.contains("GooseLang total"));

    let implementation = fs::read_to_string(out.join("impl-loc.tex")).unwrap();
    assert!(implementation.contains("\\textsc{wal-sts} & \\multirow{2}{*}{"));
    assert!(implementation.contains("Simulation transfer & --- & \\loc{10} & --- \\\\\n"));
    assert!(implementation.ends_with("\\bottomrule\n"));
}

#[test]
fn test_gotxn_missing_file_fails() {
    let temp = create_gotxn_checkouts();
    fs::remove_file(temp.path().join("go-journal/lockmap/lock.go")).unwrap();
    let (_, stderr, success) = run_gotxn(&[], &temp);

    assert!(!success);
    assert!(stderr.contains("pattern lockmap/lock.go did not match any files"));
}

#[test]
fn test_largefile_table() {
    let temp = tempdir().unwrap();
    fs::create_dir_all(temp.path().join("aws-spectre")).unwrap();
    fs::write(
        temp.path().join("bench.data"),
        "bench\tlinux-ssd\tgonfs-ssd\nlargefile\t215.4\t198.7\n",
    )
    .unwrap();
    fs::write(
        temp.path().join("aws-spectre/bench.data"),
        "bench\tlinux-ssd\tgonfs-ssd\nlargefile\t1502\t1333.25\n",
    )
    .unwrap();

    let (stdout, stderr, success) = run(
        env!("CARGO_BIN_EXE_largefile-table"),
        &[temp.path().to_str().unwrap()],
        &[],
    );

    assert!(success, "stderr: {stderr}");
    assert_eq!(
        stdout,
        "disk\tLinux\tGoNFS\nSSD\t215.4\t198.7\nNVMe\t1502\t1333.25\n"
    );
}

#[test]
fn test_largefile_missing_data() {
    let temp = tempdir().unwrap();
    let (_, stderr, success) = run(
        env!("CARGO_BIN_EXE_largefile-table"),
        &[temp.path().to_str().unwrap()],
        &[],
    );

    assert!(!success);
    assert!(stderr.contains("bench.data"));
}
