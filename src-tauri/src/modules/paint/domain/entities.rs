/// Domain entities for paint stock
///
/// Each named color carries a floating-point stock level in kilograms.
/// Every change is appended to an immutable movement log; the
/// `from_machine` kind computes the consumed amount from what was given
/// out and what came back. Non-negative stock is server-enforced; the
/// client only blocks clearly invalid submissions.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::HasId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum MovementKind {
    Add,
    Remove,
    ToMachine,
    FromMachine,
}

impl std::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MovementKind::Add => write!(f, "add"),
            MovementKind::Remove => write!(f, "remove"),
            MovementKind::ToMachine => write!(f, "to_machine"),
            MovementKind::FromMachine => write!(f, "from_machine"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PaintColor {
    pub id: Uuid,
    pub name: String,
    pub stock_kg: f64,
}

impl HasId for PaintColor {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// One entry in the immutable movement log.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct PaintMovement {
    pub id: Uuid,
    pub color_id: Uuid,
    pub color_name: String,
    pub kind: MovementKind,
    pub amount_kg: f64,
    pub given_kg: Option<f64>,
    pub returned_kg: Option<f64>,
    pub consumed_kg: Option<f64>,
    pub machine_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Movement as entered in the paint panel.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MovementRequest {
    Add { amount_kg: f64 },
    Remove { amount_kg: f64 },
    ToMachine { amount_kg: f64, machine_name: String },
    FromMachine { given_kg: f64, returned_kg: f64, machine_name: String },
}

/// Validated movement as sent to the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementSubmission {
    pub kind: MovementKind,
    pub amount_kg: f64,
    pub given_kg: Option<f64>,
    pub returned_kg: Option<f64>,
    pub consumed_kg: Option<f64>,
    pub machine_name: Option<String>,
}

impl MovementRequest {
    /// Validate against the color's known stock and build the submission.
    /// `from_machine` derives consumed = given − returned.
    pub fn submission(&self, color: &PaintColor) -> AppResult<MovementSubmission> {
        match self {
            MovementRequest::Add { amount_kg } => {
                require_positive(*amount_kg)?;
                Ok(MovementSubmission {
                    kind: MovementKind::Add,
                    amount_kg: *amount_kg,
                    given_kg: None,
                    returned_kg: None,
                    consumed_kg: None,
                    machine_name: None,
                })
            }
            MovementRequest::Remove { amount_kg } => {
                require_positive(*amount_kg)?;
                if *amount_kg > color.stock_kg {
                    return Err(AppError::Validation(format!(
                        "Only {:.2} kg of {} in stock",
                        color.stock_kg, color.name
                    )));
                }
                Ok(MovementSubmission {
                    kind: MovementKind::Remove,
                    amount_kg: *amount_kg,
                    given_kg: None,
                    returned_kg: None,
                    consumed_kg: None,
                    machine_name: None,
                })
            }
            MovementRequest::ToMachine { amount_kg, machine_name } => {
                require_positive(*amount_kg)?;
                require_machine(machine_name)?;
                if *amount_kg > color.stock_kg {
                    return Err(AppError::Validation(format!(
                        "Only {:.2} kg of {} in stock",
                        color.stock_kg, color.name
                    )));
                }
                Ok(MovementSubmission {
                    kind: MovementKind::ToMachine,
                    amount_kg: *amount_kg,
                    given_kg: Some(*amount_kg),
                    returned_kg: None,
                    consumed_kg: None,
                    machine_name: Some(machine_name.clone()),
                })
            }
            MovementRequest::FromMachine { given_kg, returned_kg, machine_name } => {
                require_positive(*given_kg)?;
                require_machine(machine_name)?;
                if !returned_kg.is_finite() || *returned_kg < 0.0 {
                    return Err(AppError::Validation(
                        "Returned amount cannot be negative".to_string(),
                    ));
                }
                if returned_kg > given_kg {
                    return Err(AppError::Validation(
                        "Returned amount cannot exceed what was given".to_string(),
                    ));
                }
                Ok(MovementSubmission {
                    kind: MovementKind::FromMachine,
                    amount_kg: *returned_kg,
                    given_kg: Some(*given_kg),
                    returned_kg: Some(*returned_kg),
                    consumed_kg: Some(given_kg - returned_kg),
                    machine_name: Some(machine_name.clone()),
                })
            }
        }
    }

    /// Predicted stock level once the movement is accepted.
    pub fn predicted_stock(&self, current: f64) -> f64 {
        match self {
            MovementRequest::Add { amount_kg } => current + amount_kg,
            MovementRequest::Remove { amount_kg } => current - amount_kg,
            MovementRequest::ToMachine { amount_kg, .. } => current - amount_kg,
            MovementRequest::FromMachine { returned_kg, .. } => current + returned_kg,
        }
    }
}

fn require_positive(amount: f64) -> AppResult<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::Validation(
            "Amount must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn require_machine(machine_name: &str) -> AppResult<()> {
    if machine_name.trim().is_empty() {
        return Err(AppError::Validation("A machine is required".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(stock: f64) -> PaintColor {
        PaintColor {
            id: Uuid::new_v4(),
            name: "Kırmızı".to_string(),
            stock_kg: stock,
        }
    }

    #[test]
    fn test_from_machine_computes_consumed() {
        let request = MovementRequest::FromMachine {
            given_kg: 10.0,
            returned_kg: 3.5,
            machine_name: "30x30".to_string(),
        };
        let submission = request.submission(&color(50.0)).unwrap();
        assert_eq!(submission.consumed_kg, Some(6.5));
        assert_eq!(submission.kind, MovementKind::FromMachine);
    }

    #[test]
    fn test_returned_more_than_given_rejected() {
        let request = MovementRequest::FromMachine {
            given_kg: 5.0,
            returned_kg: 7.0,
            machine_name: "30x30".to_string(),
        };
        assert!(request.submission(&color(50.0)).is_err());
    }

    #[test]
    fn test_remove_over_stock_blocked_client_side() {
        let request = MovementRequest::Remove { amount_kg: 80.0 };
        assert!(request.submission(&color(50.0)).is_err());
    }

    #[test]
    fn test_zero_amount_rejected() {
        assert!(MovementRequest::Add { amount_kg: 0.0 }.submission(&color(1.0)).is_err());
    }

    #[test]
    fn test_predicted_stock() {
        assert_eq!(MovementRequest::Add { amount_kg: 2.0 }.predicted_stock(3.0), 5.0);
        assert_eq!(
            MovementRequest::FromMachine {
                given_kg: 10.0,
                returned_kg: 4.0,
                machine_name: "x".to_string()
            }
            .predicted_stock(3.0),
            7.0
        );
    }
}
