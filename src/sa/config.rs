//! Annealing parameters.

use crate::error::{ColoringError, ColoringResult};

/// The search stops once the temperature falls below this value.
pub const MIN_TEMPERATURE: f64 = 0.001;

/// Configuration for the annealing engine.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// consumed move.
///
/// # Examples
///
/// ```
/// use u_coloring::sa::AnnealConfig;
///
/// let config = AnnealConfig::default()
///     .with_max_iterations(5000)
///     .with_initial_temperature(20.0)
///     .with_cooling_rate(0.995)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnealConfig {
    /// Maximum number of moves. Must be positive.
    pub max_iterations: usize,

    /// Starting temperature. Higher values accept more worsening moves.
    pub initial_temperature: f64,

    /// Geometric cooling factor in (0, 1). Higher = slower cooling.
    ///
    /// Typical range: 0.95–0.999.
    pub cooling_rate: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Record temperature, current and best conflicts after every move.
    pub record_trace: bool,
}

impl Default for AnnealConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            initial_temperature: 10.0,
            cooling_rate: 0.99,
            seed: None,
            record_trace: false,
        }
    }
}

impl AnnealConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ColoringResult<()> {
        if self.max_iterations == 0 {
            return Err(ColoringError::InvalidConfig("max_iterations must be positive".into()));
        }
        // Written as a negated comparison so NaN is rejected too.
        if !(self.initial_temperature > 0.0) || !self.initial_temperature.is_finite() {
            return Err(ColoringError::InvalidConfig(format!(
                "initial_temperature must be positive and finite, got {}",
                self.initial_temperature
            )));
        }
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(ColoringError::InvalidConfig(format!(
                "cooling_rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnnealConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert!((config.initial_temperature - 10.0).abs() < 1e-12);
        assert!((config.cooling_rate - 0.99).abs() < 1e-12);
        assert!(config.seed.is_none());
        assert!(!config.record_trace);
    }

    #[test]
    fn test_validate_ok() {
        assert!(AnnealConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        let config = AnnealConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        for t in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let config = AnnealConfig::default().with_initial_temperature(t);
            assert!(config.validate().is_err(), "temperature {t} accepted");
        }
    }

    #[test]
    fn test_validate_bad_cooling_rate() {
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let config = AnnealConfig::default().with_cooling_rate(rate);
            assert!(config.validate().is_err(), "cooling rate {rate} accepted");
        }
    }
}
