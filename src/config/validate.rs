//! Configuration validation.

use crate::config::Config;
use crate::error::{Error, Result};

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    let defaults = &config.defaults;
    validate_seconds("threshold", defaults.threshold)?;
    validate_seconds("max_duration", defaults.max_duration)?;
    Ok(())
}

/// A duration setting must be a finite, non-negative number of seconds.
fn validate_seconds(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(Error::ConfigValidation {
            message: format!("{name} must be a non-negative number of seconds, got {value}"),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_zero_threshold_is_allowed() {
        let mut config = Config::default();
        config.defaults.threshold = 0.0;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validate_negative_threshold() {
        let mut config = Config::default();
        config.defaults.threshold = -0.5;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validate_non_finite_max_duration() {
        let mut config = Config::default();
        config.defaults.max_duration = f64::NAN;
        assert!(validate_config(&config).is_err());

        config.defaults.max_duration = f64::INFINITY;
        assert!(validate_config(&config).is_err());
    }
}
