use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{ChartError, ChartResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> ChartResult<f64> {
    value.to_f64().ok_or_else(|| {
        ChartError::InvalidInput(format!("{field_name} cannot be represented as f64"))
    })
}

/// Time-based x values are interpolated as unix seconds.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Rejects NaN and infinities for a named scalar parameter.
pub fn require_finite(value: f64, field_name: &str) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidInput(format!(
            "{field_name} must be finite, got {value}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn converts_time_to_fractional_seconds() {
        let time = Utc
            .timestamp_millis_opt(1_500)
            .single()
            .expect("valid timestamp");
        assert_eq!(datetime_to_unix_seconds(time), 1.5);
    }

    #[test]
    fn require_finite_rejects_nan() {
        assert!(require_finite(f64::NAN, "bound").is_err());
        assert_eq!(require_finite(-3.0, "bound").expect("finite"), -3.0);
    }
}
