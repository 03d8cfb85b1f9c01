//! Standard benchmark scenarios
//!
//! A fixed catalogue of ground-truth distributions covering the shapes that
//! stress density estimators differently: symmetric and multimodal mixtures,
//! skewed positive supports, heavy tails and a bounded support.

use kde_core::Result;

use crate::spec::DistributionSpec;

/// A named ground-truth distribution
#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    /// Short unique name, e.g. `"gmixture_bimodal"`
    pub name: &'static str,
    pub spec: DistributionSpec,
}

impl Scenario {
    fn new(name: &'static str, spec: DistributionSpec) -> Self {
        Self { name, spec }
    }
}

/// Standard scenarios
pub struct Scenarios;

impl Scenarios {
    /// N(0, 1)
    pub fn standard_normal() -> Result<Scenario> {
        let spec = DistributionSpec::gaussian_mixture(vec![0.0], vec![1.0], None)?;
        Ok(Scenario::new("gaussian_standard", spec))
    }

    /// Two well separated modes: N(-3, 0.8) and N(3, 0.8), equal weights
    pub fn bimodal_symmetric() -> Result<Scenario> {
        let spec = DistributionSpec::gaussian_mixture(vec![-3.0, 3.0], vec![0.8, 0.8], None)?;
        Ok(Scenario::new("gmixture_bimodal", spec))
    }

    /// 70% N(-2, 1) and 30% N(3, 0.5)
    pub fn bimodal_asymmetric() -> Result<Scenario> {
        let spec = DistributionSpec::gaussian_mixture(
            vec![-2.0, 3.0],
            vec![1.0, 0.5],
            Some(vec![0.7, 0.3]),
        )?;
        Ok(Scenario::new("gmixture_asymmetric", spec))
    }

    /// Three equal modes at -4, 0 and 4
    pub fn trimodal() -> Result<Scenario> {
        let spec =
            DistributionSpec::gaussian_mixture(vec![-4.0, 0.0, 4.0], vec![0.6, 0.6, 0.6], None)?;
        Ok(Scenario::new("gmixture_trimodal", spec))
    }

    /// Narrow spike on top of a broad component
    pub fn spike_and_slab() -> Result<Scenario> {
        let spec = DistributionSpec::gaussian_mixture(
            vec![0.0, 0.0],
            vec![3.0, 0.2],
            Some(vec![0.8, 0.2]),
        )?;
        Ok(Scenario::new("gmixture_spike", spec))
    }

    /// Right-skewed Gamma(2, 1)
    pub fn skewed_gamma() -> Scenario {
        Scenario::new("gamma_skewed", DistributionSpec::gamma(2.0, 1.0))
    }

    /// Exponential-like Gamma(1, 1), maximal density at the boundary
    pub fn boundary_gamma() -> Scenario {
        Scenario::new("gamma_boundary", DistributionSpec::gamma(1.0, 1.0))
    }

    /// Heavy right tail: standard log-normal with sigma 1
    pub fn heavy_tailed_lognormal() -> Scenario {
        Scenario::new("logn_heavy", DistributionSpec::log_normal(1.0))
    }

    /// Bounded, skewed Beta(2, 5)
    pub fn bounded_beta() -> Scenario {
        Scenario::new("beta_skewed", DistributionSpec::beta(2.0, 5.0))
    }

    /// Every standard scenario, mixtures first
    pub fn all() -> Result<Vec<Scenario>> {
        Ok(vec![
            Self::standard_normal()?,
            Self::bimodal_symmetric()?,
            Self::bimodal_asymmetric()?,
            Self::trimodal()?,
            Self::spike_and_slab()?,
            Self::skewed_gamma(),
            Self::boundary_gamma(),
            Self::heavy_tailed_lognormal(),
            Self::bounded_beta(),
        ])
    }

    /// Look up a scenario by name
    pub fn by_name(name: &str) -> Result<Option<Scenario>> {
        Ok(Self::all()?.into_iter().find(|s| s.name == name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_scenarios_bind() {
        let scenarios = Scenarios::all().unwrap();
        assert_eq!(scenarios.len(), 9);
        for scenario in &scenarios {
            assert!(scenario.spec.bind().is_ok(), "{} failed to bind", scenario.name);
        }
    }

    #[test]
    fn test_names_are_unique() {
        let scenarios = Scenarios::all().unwrap();
        let names: HashSet<_> = scenarios.iter().map(|s| s.name).collect();
        assert_eq!(names.len(), scenarios.len());
    }

    #[test]
    fn test_lookup() {
        let found = Scenarios::by_name("beta_skewed").unwrap().unwrap();
        assert_eq!(found.spec, DistributionSpec::beta(2.0, 5.0));
        assert!(Scenarios::by_name("missing").unwrap().is_none());
    }
}
