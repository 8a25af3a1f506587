//! Tabu Search configuration.

/// Configuration parameters for Tabu Search.
///
/// # Examples
///
/// ```
/// use u_openshop::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_length(8);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_length, 8);
/// ```
#[derive(Debug, Clone)]
pub struct TabuConfig {
    /// Number of moves to make.
    pub max_iterations: usize,
    /// How many recently visited solutions stay forbidden.
    pub tabu_length: usize,
    /// Whether to evaluate neighborhoods in parallel using rayon.
    ///
    /// Has no effect without the `parallel` feature. Results are identical
    /// either way.
    pub parallel: bool,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 10_000,
            tabu_length: 6,
            parallel: true,
        }
    }
}

impl TabuConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the tabu memory length.
    pub fn with_tabu_length(mut self, length: usize) -> Self {
        self.tabu_length = length;
        self
    }

    /// Enables or disables parallel neighborhood evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_iterations == 0 {
            return Err("max_iterations must be at least 1".into());
        }
        if self.tabu_length == 0 {
            return Err("tabu_length must be at least 1".into());
        }
        Ok(())
    }
}
