//! CLI argument validators.

/// Parse and validate a non-negative, finite number of seconds.
pub fn parse_seconds(s: &str) -> Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;

    if !value.is_finite() {
        return Err(format!("seconds must be a finite number, got {value}"));
    }

    if value < 0.0 {
        return Err(format!("seconds cannot be negative, got {value}"));
    }

    Ok(value)
}
