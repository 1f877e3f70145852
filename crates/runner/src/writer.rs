use csv::{Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use array_bench_core::SweepReport;

use super::config::OutputConfig;
use super::error::Error;

/// Persists a sweep as a names file and a tab-separated timing table.
pub struct ResultWriter {
    names_path: PathBuf,
    data_path: PathBuf,
}

impl ResultWriter {
    pub fn new(names_path: PathBuf, data_path: PathBuf) -> Self {
        ResultWriter {
            names_path,
            data_path,
        }
    }

    pub fn from_config(config: &OutputConfig) -> Self {
        ResultWriter::new(config.names_path(), config.data_path())
    }

    pub fn names_path(&self) -> &Path {
        &self.names_path
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Writes both artifacts, truncating any previous contents.
    ///
    /// Both files are flushed before this returns.
    pub fn write(&self, report: &SweepReport) -> Result<(), Error> {
        self.write_names(&SweepReport::names())?;
        self.write_table(&report.sizes, &report.times)?;

        info!(
            names = %self.names_path().display(),
            data = %self.data_path().display(),
            "Results written"
        );
        Ok(())
    }

    fn write_names(&self, names: &[&str]) -> Result<(), Error> {
        let mut out = BufWriter::new(File::create(&self.names_path)?);
        for name in names {
            writeln!(out, "{}", name)?;
        }
        out.flush()?;
        Ok(())
    }

    fn write_table(&self, sizes: &[usize], times: &[Vec<f64>]) -> Result<(), Error> {
        let mut wtr = WriterBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_path(&self.data_path)?;

        wtr.write_record(sizes.iter().map(|size| size.to_string()))?;
        for row in times {
            wtr.write_record(row.iter().map(|micros| micros.to_string()))?;
        }
        wtr.flush()?;
        Ok(())
    }
}
