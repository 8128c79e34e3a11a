use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;

use crate::shared::errors::{AppError, AppResult};

/// One geolocation sample from the device.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type)]
pub struct LocationFix {
    pub lat: f64,
    pub lng: f64,
    pub recorded_at: DateTime<Utc>,
}

impl LocationFix {
    pub fn new(lat: f64, lng: f64) -> AppResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(AppError::Validation(format!("Latitude {} is out of range", lat)));
        }
        if !lng.is_finite() || !(-180.0..=180.0).contains(&lng) {
            return Err(AppError::Validation(format!("Longitude {} is out of range", lng)));
        }
        Ok(Self {
            lat,
            lng,
            recorded_at: Utc::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_fix() {
        assert!(LocationFix::new(41.01, 28.97).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(LocationFix::new(91.0, 0.0).is_err());
        assert!(LocationFix::new(0.0, -181.0).is_err());
        assert!(LocationFix::new(f64::NAN, 0.0).is_err());
    }
}
