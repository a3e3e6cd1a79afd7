//! Evaluation configuration.

/// Configuration for one scoring run.
///
/// # Examples
///
/// ```
/// use effirank::eval::EvalConfig;
///
/// let config = EvalConfig::default()
///     .with_alpha(0.05)
///     .with_beta(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Deviation guard constant for the at-or-below-mean branch.
    ///
    /// Keeps the deviation quotient finite when a normalized cell is
    /// exactly 0. Small relative to the [0, 1] data scale.
    pub alpha: f64,

    /// Deviation guard constant for the above-mean branch.
    ///
    /// Keeps the quotient finite when a column mean is exactly 0.
    pub beta: f64,

    /// Whether to evaluate the judgment-matrix chains in parallel
    /// using rayon.
    ///
    /// Has no effect unless the `parallel` cargo feature is enabled.
    /// Results are identical either way.
    pub parallel: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            alpha: 0.01,
            beta: 0.01,
            parallel: false,
        }
    }
}

impl EvalConfig {
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(format!(
                "alpha must be a positive finite number, got {}",
                self.alpha
            ));
        }
        if !self.beta.is_finite() || self.beta <= 0.0 {
            return Err(format!(
                "beta must be a positive finite number, got {}",
                self.beta
            ));
        }
        Ok(())
    }
}
