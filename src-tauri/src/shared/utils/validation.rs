use regex::Regex;
use std::sync::OnceLock;

use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    /// Non-empty free-text fields (job names, operator names, addresses).
    pub fn validate_required_text(field: &str, value: &str) -> Result<(), AppError> {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{} cannot be empty", field)));
        }
        if value.len() > 255 {
            return Err(AppError::Validation(format!(
                "{} too long (max 255 characters)",
                field
            )));
        }
        Ok(())
    }

    /// Pause and failure reasons must carry actual content.
    pub fn validate_reason(reason: &str) -> Result<(), AppError> {
        if reason.trim().is_empty() {
            return Err(AppError::Validation("A reason is required".to_string()));
        }
        Ok(())
    }

    /// Koli counts and request quantities are positive integers.
    pub fn validate_positive_count(field: &str, count: i32) -> Result<(), AppError> {
        if count <= 0 {
            return Err(AppError::Validation(format!("{} must be greater than zero", field)));
        }
        Ok(())
    }

    /// Paint amounts are positive, finite kilogram values.
    pub fn validate_positive_amount(field: &str, amount: f64) -> Result<(), AppError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(AppError::Validation(format!("{} must be greater than zero", field)));
        }
        Ok(())
    }

    /// Turkish vehicle plates: province code, letter group, number group.
    pub fn validate_vehicle_plate(plate: &str) -> Result<(), AppError> {
        static PLATE_RE: OnceLock<Regex> = OnceLock::new();
        let re = PLATE_RE.get_or_init(|| {
            Regex::new(r"^(0[1-9]|[1-7][0-9]|8[01])\s?[A-Z]{1,3}\s?\d{2,4}$").unwrap()
        });
        let normalized = plate.trim().to_uppercase();
        if !re.is_match(&normalized) {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid vehicle plate",
                plate
            )));
        }
        Ok(())
    }

    /// Pallet codes as printed on the QR labels (e.g. "PLT-2024-00123").
    pub fn validate_pallet_code(code: &str) -> Result<(), AppError> {
        static CODE_RE: OnceLock<Regex> = OnceLock::new();
        let re = CODE_RE.get_or_init(|| Regex::new(r"^[A-Z0-9][A-Z0-9\-]{2,31}$").unwrap());
        if !re.is_match(code.trim()) {
            return Err(AppError::Validation(format!(
                "'{}' is not a valid pallet code",
                code
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_text_rejects_blank() {
        assert!(Validator::validate_required_text("Name", "   ").is_err());
        assert!(Validator::validate_required_text("Name", "Mehmet").is_ok());
    }

    #[test]
    fn test_reason_rejects_whitespace_only() {
        assert!(Validator::validate_reason("\t \n").is_err());
        assert!(Validator::validate_reason("bobin bitti").is_ok());
    }

    #[test]
    fn test_positive_count() {
        assert!(Validator::validate_positive_count("Koli", 0).is_err());
        assert!(Validator::validate_positive_count("Koli", -5).is_err());
        assert!(Validator::validate_positive_count("Koli", 120).is_ok());
    }

    #[test]
    fn test_positive_amount_rejects_nan() {
        assert!(Validator::validate_positive_amount("Amount", f64::NAN).is_err());
        assert!(Validator::validate_positive_amount("Amount", 0.0).is_err());
        assert!(Validator::validate_positive_amount("Amount", 2.5).is_ok());
    }

    #[test]
    fn test_vehicle_plate_formats() {
        assert!(Validator::validate_vehicle_plate("34 ABC 123").is_ok());
        assert!(Validator::validate_vehicle_plate("06AB1234").is_ok());
        assert!(Validator::validate_vehicle_plate("99 ZZ 1").is_err());
        assert!(Validator::validate_vehicle_plate("not-a-plate").is_err());
    }

    #[test]
    fn test_pallet_code() {
        assert!(Validator::validate_pallet_code("PLT-2024-00123").is_ok());
        assert!(Validator::validate_pallet_code("x").is_err());
    }
}
