//! Result rows and tables produced by the benchmark loop

use std::fmt;
use std::fs::File;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use statrs::statistics::{Data, Median, Statistics};

use crate::error::Result;

/// CSV column names, in [`TrialResult`] field order
pub const COLUMNS: [&str; 7] = [
    "iteration",
    "distribution",
    "estimator",
    "bandwidth",
    "size",
    "elapsed_seconds",
    "integrated_squared_error",
];

/// Labels copied verbatim into every row of a run
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrialLabels {
    pub distribution: String,
    pub estimator: String,
    pub bandwidth: String,
}

impl TrialLabels {
    pub fn new(
        distribution: impl Into<String>,
        estimator: impl Into<String>,
        bandwidth: impl Into<String>,
    ) -> Self {
        Self {
            distribution: distribution.into(),
            estimator: estimator.into(),
            bandwidth: bandwidth.into(),
        }
    }
}

/// Outcome of one trial: one sample, one estimate, one error score
///
/// Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrialResult {
    /// 1-based iteration within the size block
    pub iteration: usize,
    pub distribution: String,
    pub estimator: String,
    pub bandwidth: String,
    pub size: usize,
    /// Wall-clock seconds spent inside the estimator call
    pub elapsed_seconds: f64,
    pub integrated_squared_error: f64,
}

impl TrialResult {
    pub fn new(
        labels: &TrialLabels,
        iteration: usize,
        size: usize,
        elapsed_seconds: f64,
        integrated_squared_error: f64,
    ) -> Self {
        Self {
            iteration,
            distribution: labels.distribution.clone(),
            estimator: labels.estimator.clone(),
            bandwidth: labels.bandwidth.clone(),
            size,
            elapsed_seconds,
            integrated_squared_error,
        }
    }
}

impl fmt::Display for TrialResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5} {:<10} {:<14} {:<10} {:>7} {:>12.6e} {:>12.6e}",
            self.iteration,
            self.distribution,
            self.estimator,
            self.bandwidth,
            self.size,
            self.elapsed_seconds,
            self.integrated_squared_error
        )
    }
}

/// Aggregated timing and accuracy for one (distribution, estimator,
/// bandwidth, size) group
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeSummary {
    pub distribution: String,
    pub estimator: String,
    pub bandwidth: String,
    pub size: usize,
    pub trials: usize,
    pub mean_seconds: f64,
    pub median_seconds: f64,
    pub mean_ise: f64,
    pub median_ise: f64,
}

impl fmt::Display for SizeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} / {} / {} n={}: {} trials, time mean={:.3e}s median={:.3e}s, ISE mean={:.4e} median={:.4e}",
            self.distribution,
            self.estimator,
            self.bandwidth,
            self.size,
            self.trials,
            self.mean_seconds,
            self.median_seconds,
            self.mean_ise,
            self.median_ise
        )
    }
}

/// Ordered, append-only table of trial results
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultTable {
    rows: Vec<TrialResult>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, row: TrialResult) {
        self.rows.push(row);
    }

    /// Append all rows of `other`, keeping both orders
    pub fn extend(&mut self, other: ResultTable) {
        self.rows.extend(other.rows);
    }

    pub fn rows(&self) -> &[TrialResult] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TrialResult> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<TrialResult> {
        self.rows
    }

    /// Group rows by labels and size, in order of first appearance
    pub fn summarize(&self) -> Vec<SizeSummary> {
        let mut groups: Vec<(SizeSummary, Vec<f64>, Vec<f64>)> = Vec::new();

        for row in &self.rows {
            let position = groups.iter().position(|(g, _, _)| {
                g.size == row.size
                    && g.distribution == row.distribution
                    && g.estimator == row.estimator
                    && g.bandwidth == row.bandwidth
            });
            let index = match position {
                Some(index) => index,
                None => {
                    groups.push((
                        SizeSummary {
                            distribution: row.distribution.clone(),
                            estimator: row.estimator.clone(),
                            bandwidth: row.bandwidth.clone(),
                            size: row.size,
                            trials: 0,
                            mean_seconds: 0.0,
                            median_seconds: 0.0,
                            mean_ise: 0.0,
                            median_ise: 0.0,
                        },
                        Vec::new(),
                        Vec::new(),
                    ));
                    groups.len() - 1
                }
            };
            let (_, times, errors) = &mut groups[index];
            times.push(row.elapsed_seconds);
            errors.push(row.integrated_squared_error);
        }

        groups
            .into_iter()
            .map(|(mut summary, times, errors)| {
                summary.trials = times.len();
                summary.mean_seconds = times.iter().mean();
                summary.mean_ise = errors.iter().mean();
                summary.median_seconds = Data::new(times).median();
                summary.median_ise = Data::new(errors).median();
                summary
            })
            .collect()
    }

    /// Write the table as CSV; the header is written even for an empty table
    pub fn write_csv<W: io::Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(COLUMNS)?;
        for row in &self.rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }

    /// Write the table as CSV to `path`, creating or truncating the file
    pub fn to_csv_path(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        self.write_csv(io::BufWriter::new(file))
    }

    /// Read a table previously written with [`ResultTable::write_csv`]
    pub fn read_csv<R: io::Read>(reader: R) -> Result<Self> {
        let mut reader = csv::Reader::from_reader(reader);
        let rows = reader
            .deserialize()
            .collect::<std::result::Result<Vec<TrialResult>, csv::Error>>()?;
        Ok(Self { rows })
    }
}

impl From<Vec<TrialResult>> for ResultTable {
    fn from(rows: Vec<TrialResult>) -> Self {
        Self { rows }
    }
}

impl IntoIterator for ResultTable {
    type Item = TrialResult;
    type IntoIter = std::vec::IntoIter<TrialResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = &'a TrialResult;
    type IntoIter = std::slice::Iter<'a, TrialResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl fmt::Display for ResultTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:>5} {:<10} {:<14} {:<10} {:>7} {:>12} {:>12}",
            "iter", "pdf", "estimator", "bw", "size", "time", "error"
        )?;
        for row in &self.rows {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn labels() -> TrialLabels {
        TrialLabels::new("gaussian", "kde", "silverman")
    }

    fn table() -> ResultTable {
        let labels = labels();
        let mut table = ResultTable::new();
        table.push(TrialResult::new(&labels, 1, 50, 0.1, 0.04));
        table.push(TrialResult::new(&labels, 2, 50, 0.3, 0.02));
        table.push(TrialResult::new(&labels, 3, 50, 0.2, 0.03));
        table.push(TrialResult::new(&labels, 1, 100, 0.4, 0.01));
        table
    }

    #[test]
    fn test_summarize_groups_by_size() {
        let summaries = table().summarize();
        assert_eq!(summaries.len(), 2);

        let first = &summaries[0];
        assert_eq!(first.size, 50);
        assert_eq!(first.trials, 3);
        assert_relative_eq!(first.mean_seconds, 0.2, epsilon = 1e-12);
        assert_relative_eq!(first.median_seconds, 0.2, epsilon = 1e-12);
        assert_relative_eq!(first.mean_ise, 0.03, epsilon = 1e-12);
        assert_relative_eq!(first.median_ise, 0.03, epsilon = 1e-12);

        assert_eq!(summaries[1].size, 100);
        assert_eq!(summaries[1].trials, 1);
    }

    #[test]
    fn test_summarize_empty() {
        assert!(ResultTable::new().summarize().is_empty());
    }

    #[test]
    fn test_extend_preserves_order() {
        let mut combined = table();
        let other = TrialLabels::new("gamma", "kde", "scott");
        combined.extend(ResultTable::from(vec![TrialResult::new(&other, 1, 50, 0.5, 0.5)]));

        assert_eq!(combined.len(), 5);
        assert_eq!(combined.rows()[4].distribution, "gamma");
        assert_eq!(combined.summarize().len(), 3);
    }

    #[test]
    fn test_csv_header_and_rows() {
        let mut buffer = Vec::new();
        table().write_csv(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(
            lines.next(),
            Some("iteration,distribution,estimator,bandwidth,size,elapsed_seconds,integrated_squared_error")
        );
        assert_eq!(lines.next(), Some("1,gaussian,kde,silverman,50,0.1,0.04"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn test_empty_csv_has_header() {
        let mut buffer = Vec::new();
        ResultTable::new().write_csv(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), format!("{}\n", COLUMNS.join(",")));
    }

    #[test]
    fn test_csv_read_back() {
        let original = table();
        let mut buffer = Vec::new();
        original.write_csv(&mut buffer).unwrap();
        let restored = ResultTable::read_csv(buffer.as_slice()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn test_display_lists_every_row() {
        let rendered = table().to_string();
        assert_eq!(rendered.lines().count(), 5);
        assert!(rendered.starts_with(" iter"));
    }
}
