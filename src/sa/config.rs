//! SA configuration and acceptance schedules.

/// Probability of accepting a non-improving neighbor at iteration `i`
/// (counted from 1).
///
/// # References
///
/// - InverseSqrt: iteration-indexed acceptance, no temperature
/// - Geometric: Metropolis criterion with exponential cooling,
///   Kirkpatrick et al. (1983)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Acceptance {
    /// Accept with probability `1 / sqrt(i)`, regardless of the cost delta.
    #[default]
    InverseSqrt,

    /// Accept with probability `exp(-Δ / T)` where
    /// `T = initial_temperature · alpha^(i-1)`.
    Geometric {
        /// Starting temperature, positive.
        initial_temperature: f64,
        /// Cooling factor in (0, 1].
        alpha: f64,
    },
}

impl Acceptance {
    /// Acceptance probability of a neighbor that is `delta` worse than the
    /// current solution.
    pub fn probability(&self, iteration: usize, delta: f64) -> f64 {
        match *self {
            Acceptance::InverseSqrt => 1.0 / (iteration.max(1) as f64).sqrt(),
            Acceptance::Geometric {
                initial_temperature,
                alpha,
            } => {
                let exponent = iteration.saturating_sub(1).min(i32::MAX as usize) as i32;
                let temperature = initial_temperature * alpha.powi(exponent);
                if temperature > 0.0 {
                    (-delta / temperature).exp()
                } else {
                    0.0
                }
            }
        }
    }
}

/// Configuration for the Simulated Annealing algorithm.
///
/// # Examples
///
/// ```
/// use u_openshop::sa::{Acceptance, SaConfig};
///
/// let config = SaConfig::default()
///     .with_max_iterations(20_000)
///     .with_acceptance(Acceptance::Geometric { initial_temperature: 50.0, alpha: 0.999 })
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SaConfig {
    /// Number of neighbor evaluations.
    pub max_iterations: usize,

    /// Acceptance rule for non-improving neighbors.
    pub acceptance: Acceptance,

    /// Best cost is recorded every this many iterations.
    pub history_interval: usize,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100_000,
            acceptance: Acceptance::default(),
            history_interval: 100,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    pub fn with_acceptance(mut self, acceptance: Acceptance) -> Self {
        self.acceptance = acceptance;
        self
    }

    pub fn with_history_interval(mut self, n: usize) -> Self {
        self.history_interval = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.history_interval == 0 {
            return Err("history_interval must be at least 1".into());
        }
        if let Acceptance::Geometric {
            initial_temperature,
            alpha,
        } = self.acceptance
        {
            if initial_temperature <= 0.0 {
                return Err("initial_temperature must be positive".into());
            }
            if alpha <= 0.0 || alpha > 1.0 {
                return Err(format!("geometric alpha must be in (0, 1], got {alpha}"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SaConfig::default();
        assert_eq!(config.max_iterations, 100_000);
        assert_eq!(config.acceptance, Acceptance::InverseSqrt);
        assert_eq!(config.history_interval, 100);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_inverse_sqrt_probability() {
        let a = Acceptance::InverseSqrt;
        assert!((a.probability(1, 10.0) - 1.0).abs() < 1e-12);
        assert!((a.probability(4, 0.0) - 0.5).abs() < 1e-12);
        assert!((a.probability(100, 3.0) - 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_geometric_probability() {
        let a = Acceptance::Geometric {
            initial_temperature: 10.0,
            alpha: 0.5,
        };
        // T = 10 at i = 1, 5 at i = 2
        assert!((a.probability(1, 10.0) - (-1.0f64).exp()).abs() < 1e-12);
        assert!((a.probability(2, 10.0) - (-2.0f64).exp()).abs() < 1e-12);
        assert!((a.probability(7, 0.0) - 1.0).abs() < 1e-12);
        assert!(a.probability(10_000, 1.0) < 1e-12);
    }

    #[test]
    fn test_validate_ok() {
        assert!(SaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_iterations() {
        assert!(SaConfig::default().with_max_iterations(0).validate().is_err());
        assert!(SaConfig::default().with_history_interval(0).validate().is_err());
    }

    #[test]
    fn test_validate_bad_temperature() {
        let config = SaConfig::default().with_acceptance(Acceptance::Geometric {
            initial_temperature: -1.0,
            alpha: 0.9,
        });
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_bad_alpha() {
        let config = SaConfig::default().with_acceptance(Acceptance::Geometric {
            initial_temperature: 10.0,
            alpha: 1.5,
        });
        assert!(config.validate().is_err());
    }
}
