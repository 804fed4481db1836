/// Configuration for the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Maximum number of midpoint iterations.
    pub max_iters: usize,
    /// Residual magnitude below which a midpoint is accepted as the root.
    pub residual_tol: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_iters: 1000,
            residual_tol: 1e-9,
        }
    }
}

impl Config {
    /// Validates that the tolerance is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.residual_tol.is_finite() || self.residual_tol < 0.0 {
            return Err("residual_tol must be finite and non-negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_negative_tolerance() {
        let config = Config {
            residual_tol: -1e-9,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_finite_tolerance() {
        let config = Config {
            residual_tol: f64::NAN,
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
