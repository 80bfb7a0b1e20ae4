//! GoTxn lines of code across Perennial, go-journal and marshal.
//!
//! Three tables are produced: the Perennial framework itself, the GooseLang
//! semantics and libraries, and the GoTxn implementation layers with their
//! proofs. Code comes from go-journal (plus `marshal.go`), proofs from
//! Perennial's `src/program_proof`.

use crate::data::lines::wc_l;
use crate::data::metrics::{ratio, ComponentRow, ComponentTable, LayerRow, LayerTable};
use crate::source::pattern::prefix_patterns;
use crate::source::project::{ProjectId, ProjectRoot};
use crate::Result;

/// Files written in LaTeX mode.
pub const PERENNIAL_LATEX: &str = "perennial-loc.tex";
pub const GOOSELANG_LATEX: &str = "gooselang-loc.tex";
pub const IMPL_LATEX: &str = "impl-loc.tex";

/// Checkouts read by this pipeline.
#[derive(Debug, Clone)]
pub struct GoTxnRoots {
    pub perennial: ProjectRoot,
    pub go_journal: ProjectRoot,
    pub marshal: ProjectRoot,
}

impl GoTxnRoots {
    /// Resolve `PERENNIAL_PATH`, `GO_JOURNAL_PATH` and `MARSHAL_PATH`.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            perennial: ProjectRoot::from_env(ProjectId::Perennial)?,
            go_journal: ProjectRoot::from_env(ProjectId::GoJournal)?,
            marshal: ProjectRoot::from_env(ProjectId::Marshal)?,
        })
    }
}

/// All three GoTxn tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoTxnReport {
    pub perennial: ComponentTable,
    pub gooselang: ComponentTable,
    pub implementation: LayerTable,
}

impl GoTxnReport {
    pub fn collect(roots: &GoTxnRoots) -> Result<Self> {
        Ok(Self {
            perennial: perennial_table(&roots.perennial)?,
            gooselang: gooselang_table(&roots.perennial)?,
            implementation: impl_table(roots)?,
        })
    }
}

fn count<S: AsRef<str>>(root: &ProjectRoot, patterns: &[S]) -> Result<i64> {
    Ok(wc_l(root.path(), patterns)? as i64)
}

/// Lines of Coq in the Perennial framework.
pub fn perennial_table(perennial: &ProjectRoot) -> Result<ComponentTable> {
    log::info!("counting Perennial");
    let helpers = count(
        perennial,
        &[
            "src/Helpers/*.v",
            "src/iris_lib/*.v",
            "src/algebra/big_op/*.v",
            "src/algebra/liftable.v",
        ],
    )?;
    let ghost_state =
        count(perennial, &["src/algebra/*.v"])? - count(perennial, &["src/algebra/liftable.v"])?;
    let program_logic = count(perennial, &["src/program_logic/*.v"])?;

    Ok(ComponentTable::new(
        vec![
            ComponentRow::new("Helper libraries (maps, lifting, tactics)", helpers),
            ComponentRow::new("Ghost state and resources", ghost_state),
            ComponentRow::new("Program logic for crashes", program_logic),
        ],
        "Perennial total",
    ))
}

/// Lines of Coq in GooseLang.
///
/// The "definition" is the core of the language, excluding the refinement
/// proof infrastructure.
pub fn gooselang_table(perennial: &ProjectRoot) -> Result<ComponentTable> {
    log::info!("counting GooseLang");
    let goose_lang = count(
        perennial,
        &prefix_patterns(
            "src/goose_lang/",
            &[
                "lang.v",
                "lifting.v",
                "notation.v",
                "proofmode.v",
                "tactics.v",
                "recovery_adequacy.v",
                "disk.v",
            ],
        ),
    )?;
    let lib_impl = count(perennial, &["src/goose_lang/lib/*/impl.v"])?;
    let lib = count(
        perennial,
        &[
            "src/goose_lang/lib/*.v",
            "src/goose_lang/lib/*/*.v",
            "src/program_proof/disk_lib.v",
        ],
    )?;

    Ok(ComponentTable::new(
        vec![
            ComponentRow::new("GooseLang definition", goose_lang),
            ComponentRow::new("Libraries (implementation)", lib_impl),
            ComponentRow::new("Libraries (proof)", lib - lib_impl),
        ],
        "GooseLang total",
    ))
}

/// Lines of Go code per layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LayerCode {
    circ: i64,
    wal: i64,
    obj: i64,
    jrnl: i64,
    lockmap: i64,
    misc: i64,
    txn: i64,
}

fn layer_code(go_journal: &ProjectRoot, marshal: &ProjectRoot) -> Result<LayerCode> {
    log::info!("counting go-journal");
    let circ = count(go_journal, &["wal/0circular.go"])?;
    let wal = count(go_journal, &["wal/*.go"])? - circ - count(go_journal, &["wal/*_test.go"])?;
    Ok(LayerCode {
        circ,
        wal,
        obj: count(go_journal, &["obj/obj.go", "buf/buf.go"])?,
        jrnl: count(go_journal, &["jrnl/jrnl.go", "buf/bufmap.go"])?,
        lockmap: count(go_journal, &["lockmap/lock.go"])?,
        misc: count(
            go_journal,
            &["addr/addr.go", "util/util.go", "common/common.go"],
        )? + count(marshal, &["marshal.go"])?,
        txn: count(go_journal, &["txn/txn.go", "alloc/alloc.go"])?,
    })
}

/// Lines of Coq proof per layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct LayerProof {
    circ: i64,
    wal: i64,
    wal_heapspec: i64,
    obj: i64,
    jrnl: i64,
    sep_jrnl: i64,
    lockmap: i64,
    misc: i64,
    txn: i64,
    txn_refinement: i64,
    simulation: i64,
}

fn layer_proof(perennial: &ProjectRoot) -> Result<LayerProof> {
    log::info!("counting program proofs");
    let ffi = prefix_patterns(
        "src/goose_lang/ffi/",
        &["jrnl_ffi_facts.v", "atomic_refinement.v"],
    );
    let goose_refinement = count(perennial, &ffi)?;
    let simulation = count(perennial, &["src/goose_lang/ffi/atomic_refinement.v"])?;

    let proofs = perennial.subdir("src/program_proof")?;
    let circ = count(&proofs, &["wal/circ_proof*.v"])?;
    let wal_heapspec =
        count(&proofs, &["wal/heapspec.v"])? + count(&proofs, &["wal/heapspec_lib.v"])?;
    // heapspec_list.v is an unused experiment
    let wal = count(&proofs, &["wal/*.v"])?
        - circ
        - wal_heapspec
        - count(&proofs, &["wal/heapspec_list.v"])?;

    let mut txn_patterns = prefix_patterns("txn/", &["twophase_proof.v", "wrapper_proof.v"]);
    txn_patterns.push("alloc/alloc_proof.v".to_string());

    let txn_refinement = goose_refinement
        + count(
            &proofs,
            &prefix_patterns(
                "txn/twophase_",
                &[
                    "refinement_defs.v",
                    "sub_logical_reln_defs.v",
                    "refinement_proof.v",
                    "refinement_thm.v",
                ],
            ),
        )?;

    Ok(LayerProof {
        circ,
        wal,
        wal_heapspec,
        obj: count(&proofs, &["obj/*.v", "buf/defs.v", "buf/buf_proof.v"])?,
        jrnl: count(&proofs, &["jrnl/jrnl_proof.v", "buf/bufmap_proof.v"])?,
        sep_jrnl: count(&proofs, &["jrnl/sep_jrnl_*.v"])?,
        lockmap: count(&proofs, &["lockmap_proof.v", "crash_lockmap_proof.v"])?,
        misc: count(
            &proofs,
            &[
                "addr/*.v",
                "marshal_block.v",
                "marshal_proof.v",
                "util_proof.v",
            ],
        )?,
        txn: count(&proofs, &txn_patterns)?,
        txn_refinement,
        simulation,
    })
}

fn layer_rows(c: &LayerCode, p: &LayerProof) -> Vec<LayerRow> {
    vec![
        LayerRow::new("circular", c.circ, p.circ),
        LayerRow::with_ratio("wal-sts", c.wal, p.wal, ratio(p.wal + p.wal_heapspec, c.wal)),
        LayerRow::proof_only("wal", p.wal_heapspec).continues(),
        LayerRow::new("obj", c.obj, p.obj),
        LayerRow::with_ratio(
            "jrnl-sts",
            c.jrnl,
            p.jrnl,
            ratio(p.jrnl + p.sep_jrnl, c.jrnl),
        ),
        LayerRow::proof_only("jrnl", p.sep_jrnl).continues(),
        LayerRow::new("lockmap", c.lockmap, p.lockmap),
        LayerRow::new("Misc.", c.misc, p.misc),
        LayerRow::new("txn", c.txn, p.txn),
        LayerRow::proof_only("Transaction refinement", p.txn_refinement),
        LayerRow::proof_only("Simulation transfer", p.simulation),
    ]
}

/// Lines of code and proof for each GoTxn layer.
pub fn impl_table(roots: &GoTxnRoots) -> Result<LayerTable> {
    let code = layer_code(&roots.go_journal, &roots.marshal)?;
    let proof = layer_proof(&roots.perennial)?;
    Ok(LayerTable::new(layer_rows(&code, &proof), "GoTxn total"))
}
