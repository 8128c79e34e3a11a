/// Domain entities for the factory-wide shift
///
/// One shift is active at a time (server-enforced). Ending a shift while
/// jobs are running goes through end-of-shift reports, either authored by
/// the operators and approved by management, or filled by management
/// directly.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum ShiftStatus {
    NotStarted,
    Active,
    Ended,
}

impl std::fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShiftStatus::NotStarted => write!(f, "not_started"),
            ShiftStatus::Active => write!(f, "active"),
            ShiftStatus::Ended => write!(f, "ended"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    PendingApproval,
    Approved,
}

/// End-of-shift report for one machine's running job.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ShiftReport {
    pub id: Uuid,
    pub shift_id: Uuid,
    pub job_id: Uuid,
    pub machine_id: Uuid,
    pub machine_name: String,
    pub operator_name: Option<String>,
    pub target_koli: i32,
    pub produced_koli: i32,
    pub defect_weight_kg: f64,
    pub completed: bool,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Shift {
    pub id: Uuid,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
    pub status: ShiftStatus,
    #[serde(default)]
    pub reports: Vec<ShiftReport>,
}

impl Shift {
    pub fn pending_reports(&self) -> Vec<&ShiftReport> {
        self.reports
            .iter()
            .filter(|report| report.status == ReportStatus::PendingApproval)
            .collect()
    }
}

/// Report fields as entered by the reporter, before the numeric policy is
/// applied.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct ReportDraft {
    pub job_id: Uuid,
    pub produced_koli: i32,
    pub defect_weight_kg: f64,
    pub completed: bool,
}

impl ReportDraft {
    /// Apply the numeric policy against the job's target: a report marked
    /// completed is forced to the full target so a done job cannot be
    /// under-reported; otherwise the produced count must be positive.
    pub fn normalized(&self, target_koli: i32) -> AppResult<ReportDraft> {
        if !self.defect_weight_kg.is_finite() || self.defect_weight_kg < 0.0 {
            return Err(AppError::Validation(
                "Defect weight cannot be negative".to_string(),
            ));
        }

        let produced = if self.completed {
            target_koli
        } else {
            if self.produced_koli <= 0 {
                return Err(AppError::Validation(
                    "Produced koli must be a positive number".to_string(),
                ));
            }
            self.produced_koli.min(target_koli)
        };

        Ok(ReportDraft {
            produced_koli: produced,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(produced: i32, completed: bool) -> ReportDraft {
        ReportDraft {
            job_id: Uuid::new_v4(),
            produced_koli: produced,
            defect_weight_kg: 1.5,
            completed,
        }
    }

    #[test]
    fn test_completed_report_is_forced_to_target() {
        let normalized = draft(60, true).normalized(100).unwrap();
        assert_eq!(normalized.produced_koli, 100);
    }

    #[test]
    fn test_incomplete_report_requires_positive_produced() {
        assert!(draft(0, false).normalized(100).is_err());
        assert!(draft(-3, false).normalized(100).is_err());
        assert_eq!(draft(60, false).normalized(100).unwrap().produced_koli, 60);
    }

    #[test]
    fn test_produced_is_capped_at_target() {
        let normalized = draft(140, false).normalized(100).unwrap();
        assert_eq!(normalized.produced_koli, 100);
    }

    #[test]
    fn test_negative_defect_weight_rejected() {
        let mut bad = draft(10, false);
        bad.defect_weight_kg = -0.1;
        assert!(bad.normalized(100).is_err());
    }

    #[test]
    fn test_pending_reports_filter() {
        let report = ShiftReport {
            id: Uuid::new_v4(),
            shift_id: Uuid::new_v4(),
            job_id: Uuid::new_v4(),
            machine_id: Uuid::new_v4(),
            machine_name: "30x30".to_string(),
            operator_name: Some("Mehmet".to_string()),
            target_koli: 100,
            produced_koli: 60,
            defect_weight_kg: 0.0,
            completed: false,
            status: ReportStatus::PendingApproval,
            created_at: Utc::now(),
        };
        let approved = ShiftReport {
            id: Uuid::new_v4(),
            status: ReportStatus::Approved,
            ..report.clone()
        };

        let shift = Shift {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            ended_at: None,
            status: ShiftStatus::Active,
            reports: vec![report, approved],
        };

        assert_eq!(shift.pending_reports().len(), 1);
    }
}
