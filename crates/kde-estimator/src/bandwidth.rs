//! Bandwidth selection rules

use kde_core::{Error, Result};
use statrs::statistics::{Data, OrderStatistics, Statistics};

use crate::config::BandwidthMethod;

/// Summary of a sample needed for bandwidth selection and grid limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    pub len: usize,
    pub min: f64,
    pub max: f64,
    /// Population standard deviation
    pub std_dev: f64,
    pub iqr: f64,
}

impl SampleSummary {
    /// Summarize a sample of at least two finite values
    pub fn new(sample: &[f64]) -> Result<Self> {
        if sample.len() < 2 {
            return Err(Error::InsufficientData {
                expected: 2,
                actual: sample.len(),
            });
        }
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample"));
        }

        let (min, max) = sample
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &x| {
                (lo.min(x), hi.max(x))
            });
        let std_dev = Statistics::population_std_dev(sample.iter());
        let iqr = Data::new(sample.to_vec()).interquartile_range();

        Ok(Self {
            len: sample.len(),
            min,
            max,
            std_dev,
            iqr,
        })
    }
}

/// Select a bandwidth for `summary` with `method`
///
/// # Errors
/// Returns [`Error::InvalidInput`] if the rule yields a non-positive
/// bandwidth, which happens for samples with no spread.
pub fn select(method: BandwidthMethod, summary: &SampleSummary) -> Result<f64> {
    let n_factor = (summary.len as f64).powf(-0.2);

    let bandwidth = match method {
        BandwidthMethod::Silverman => {
            let robust_spread = summary.iqr / 1.34;
            let spread = if robust_spread > 0.0 {
                summary.std_dev.min(robust_spread)
            } else {
                summary.std_dev
            };
            0.9 * spread * n_factor
        }
        BandwidthMethod::Scott => 1.06 * summary.std_dev * n_factor,
        BandwidthMethod::Fixed(h) => h,
    };

    if !(bandwidth.is_finite() && bandwidth > 0.0) {
        return Err(Error::InvalidInput(format!(
            "{} bandwidth is not positive ({bandwidth}); the sample has no spread",
            method.name()
        )));
    }
    Ok(bandwidth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_summary() {
        let summary = SampleSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(summary.len, 5);
        assert_eq!(summary.min, 1.0);
        assert_eq!(summary.max, 5.0);
        assert_relative_eq!(summary.std_dev, 2.0f64.sqrt(), epsilon = 1e-12);
        assert!(summary.iqr > 0.0);
    }

    #[test]
    fn test_summary_rejects_bad_samples() {
        assert_eq!(
            SampleSummary::new(&[1.0]),
            Err(Error::InsufficientData {
                expected: 2,
                actual: 1
            })
        );
        assert!(matches!(
            SampleSummary::new(&[1.0, f64::NAN]),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_scott_rule() {
        let summary = SampleSummary::new(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let expected = 1.06 * 2.0f64.sqrt() * 5.0f64.powf(-0.2);
        assert_relative_eq!(
            select(BandwidthMethod::Scott, &summary).unwrap(),
            expected,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_silverman_is_robust_to_outliers() {
        let mut data: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
        let clean = SampleSummary::new(&data).unwrap();
        data.push(1e4);
        let dirty = SampleSummary::new(&data).unwrap();

        let h_clean = select(BandwidthMethod::Silverman, &clean).unwrap();
        let h_dirty = select(BandwidthMethod::Silverman, &dirty).unwrap();
        let s_dirty = select(BandwidthMethod::Scott, &dirty).unwrap();
        assert!(h_dirty < 2.0 * h_clean);
        assert!(s_dirty > 100.0 * h_dirty);
    }

    #[test]
    fn test_zero_spread_fails() {
        let summary = SampleSummary::new(&[2.0; 10]).unwrap();
        assert!(matches!(
            select(BandwidthMethod::Silverman, &summary),
            Err(Error::InvalidInput(_))
        ));
        assert_eq!(select(BandwidthMethod::Fixed(0.5), &summary).unwrap(), 0.5);
    }
}
