//! Session configuration.

use crate::error::{Error, Result};
use crate::geo::DistanceMetric;
use crate::kopt::KOptConfig;

/// Configuration for a full [`TourSolver`](super::TourSolver) session.
///
/// # Examples
///
/// ```
/// use u_tour::kopt::{KOptConfig, Strategy};
/// use u_tour::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_start(2)
///     .with_kopt(KOptConfig::default().with_strategy(Strategy::Sequential));
/// assert_eq!(config.start, 2);
/// assert!(config.validate().is_ok());
/// ```
///
/// With the `serde` feature, from TOML:
///
/// ```
/// # #[cfg(feature = "serde")]
/// # {
/// use u_tour::geo::DistanceUnit;
/// use u_tour::kopt::{FourOptSweep, Strategy};
/// use u_tour::solver::SolverConfig;
///
/// let config = SolverConfig::from_toml_str(r#"
///     start = 1
///
///     [metric]
///     formula = "haversine"
///     unit = "kilometers"
///
///     [kopt]
///     strategy = "sequential"
///     four_opt_sweep = "exhaustive"
/// "#).unwrap();
///
/// assert_eq!(config.start, 1);
/// assert_eq!(config.metric.unit, DistanceUnit::Kilometers);
/// assert_eq!(config.kopt.strategy, Strategy::Sequential);
/// assert_eq!(config.kopt.four_opt_sweep, FourOptSweep::Exhaustive);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SolverConfig {
    /// Index of the point the tour starts and ends at.
    pub start: usize,

    /// Distance formula and unit.
    pub metric: DistanceMetric,

    /// Local search settings.
    pub kopt: KOptConfig,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_start(mut self, start: usize) -> Self {
        self.start = start;
        self
    }

    pub fn with_metric(mut self, metric: DistanceMetric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_kopt(mut self, kopt: KOptConfig) -> Self {
        self.kopt = kopt;
        self
    }

    /// Validates the configuration.
    ///
    /// The start index is checked against the point set when solving.
    pub fn validate(&self) -> Result<()> {
        self.kopt.validate().map_err(Error::Config)
    }

    /// Parses configuration from a TOML string. Missing keys take defaults.
    #[cfg(feature = "serde")]
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[cfg(feature = "serde")]
    pub fn from_toml_file(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
