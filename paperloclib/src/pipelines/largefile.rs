//! Largefile benchmark comparison: Linux vs GoNFS on SSD and NVMe.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};

use crate::error::LocError;
use crate::Result;

/// Benchmark row compared by the table.
pub const BENCH: &str = "largefile";

/// SSD results, relative to the data directory.
pub const SSD_DATA: &str = "bench.data";
/// NVMe results, relative to the data directory.
pub const NVME_DATA: &str = "aws-spectre/bench.data";

/// Name of the key column.
const KEY_COLUMN: &str = "bench";

/// A tab-separated results file keyed by its `bench` column.
///
/// Cells are kept as the text found in the file.
#[derive(Debug, Clone)]
pub struct BenchData {
    file: PathBuf,
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl BenchData {
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let file = path.as_ref().to_path_buf();
        let input = File::open(&file).map_err(|source| LocError::FileRead {
            path: file.clone(),
            source,
        })?;
        let format_err = |source| LocError::BenchmarkFormat {
            file: file.clone(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .delimiter(b'\t')
            .trim(Trim::All)
            .from_reader(input);
        let headers = reader
            .headers()
            .map_err(format_err)?
            .iter()
            .map(str::to_string)
            .collect();
        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(format_err)?;
            rows.push(record.iter().map(str::to_string).collect());
        }
        log::debug!("{}: {} rows", file.display(), rows.len());

        Ok(Self {
            file,
            headers,
            rows,
        })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// The cell at row `bench`, column `column`.
    pub fn get(&self, bench: &str, column: &str) -> Result<&str> {
        let missing = || LocError::MissingBenchmark {
            file: self.file.clone(),
            bench: bench.to_string(),
            column: column.to_string(),
        };
        let key = self.column(KEY_COLUMN).ok_or_else(missing)?;
        let col = self.column(column).ok_or_else(missing)?;
        self.rows
            .iter()
            .find(|row| row.get(key).map(String::as_str) == Some(bench))
            .and_then(|row| row.get(col))
            .map(String::as_str)
            .ok_or_else(missing)
    }
}

/// Largefile throughput for one disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiskResult {
    pub disk: String,
    pub linux: String,
    pub gonfs: String,
}

impl DiskResult {
    // both files name their columns after the SSD run
    fn from_data(disk: &str, data: &BenchData) -> Result<Self> {
        Ok(Self {
            disk: disk.to_string(),
            linux: data.get(BENCH, "linux-ssd")?.to_string(),
            gonfs: data.get(BENCH, "gonfs-ssd")?.to_string(),
        })
    }
}

/// The comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LargefileTable {
    pub ssd: DiskResult,
    pub nvme: DiskResult,
}

impl LargefileTable {
    pub const HEADERS: [&'static str; 3] = ["disk", "Linux", "GoNFS"];

    /// Header row followed by one row per disk.
    pub fn rows(&self) -> Vec<Vec<&str>> {
        let mut rows = vec![Self::HEADERS.to_vec()];
        for r in [&self.ssd, &self.nvme] {
            rows.push(vec![r.disk.as_str(), r.linux.as_str(), r.gonfs.as_str()]);
        }
        rows
    }
}

/// Read both results files under `dir`.
pub fn largefile_table(dir: &Path) -> Result<LargefileTable> {
    let ssd = BenchData::read(dir.join(SSD_DATA))?;
    let nvme = BenchData::read(dir.join(NVME_DATA))?;
    Ok(LargefileTable {
        ssd: DiskResult::from_data("SSD", &ssd)?,
        nvme: DiskResult::from_data("NVMe", &nvme)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::table::render_tab_separated;
    use std::fs;
    use tempfile::tempdir;

    const SSD: &str = "\
bench\tlinux-ssd\tgonfs-ssd\tlinux-disk
smallfile\t1200.5\t900.1\t10
largefile\t215.4\t198.7\t80.0
";

    const NVME: &str = "\
bench\tlinux-ssd\tgonfs-ssd
largefile\t1502\t1333.25
";

    fn create_data(dir: &Path) {
        fs::create_dir_all(dir.join("aws-spectre")).unwrap();
        fs::write(dir.join(SSD_DATA), SSD).unwrap();
        fs::write(dir.join(NVME_DATA), NVME).unwrap();
    }

    #[test]
    fn test_bench_data_lookup() {
        let temp = tempdir().unwrap();
        create_data(temp.path());
        let data = BenchData::read(temp.path().join(SSD_DATA)).unwrap();

        assert_eq!(data.get("largefile", "linux-ssd").unwrap(), "215.4");
        assert_eq!(data.get("smallfile", "gonfs-ssd").unwrap(), "900.1");
    }

    #[test]
    fn test_missing_row_and_column() {
        let temp = tempdir().unwrap();
        create_data(temp.path());
        let data = BenchData::read(temp.path().join(NVME_DATA)).unwrap();

        match data.get("smallfile", "linux-ssd") {
            Err(LocError::MissingBenchmark { bench, column, .. }) => {
                assert_eq!(bench, "smallfile");
                assert_eq!(column, "linux-ssd");
            }
            other => panic!("Expected MissingBenchmark error, got {:?}", other),
        }
        assert!(matches!(
            data.get("largefile", "linux-disk"),
            Err(LocError::MissingBenchmark { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let temp = tempdir().unwrap();
        assert!(matches!(
            BenchData::read(temp.path().join(SSD_DATA)),
            Err(LocError::FileRead { .. })
        ));
    }

    #[test]
    fn test_ragged_file_is_rejected() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("bench.data");
        fs::write(&path, "bench\tlinux-ssd\nlargefile\t1\t2\n").unwrap();

        assert!(matches!(
            BenchData::read(&path),
            Err(LocError::BenchmarkFormat { .. })
        ));
    }

    #[test]
    fn test_largefile_table() {
        let temp = tempdir().unwrap();
        create_data(temp.path());
        let table = largefile_table(temp.path()).unwrap();

        assert_eq!(
            render_tab_separated(&table.rows()),
            "disk\tLinux\tGoNFS\nSSD\t215.4\t198.7\nNVMe\t1502\t1333.25\n"
        );
    }
}
