/// Domain entities for the job board
///
/// Jobs move through `pending → in_progress → completed`, with a
/// `in_progress ⇄ paused` side branch. The board also carries the machines
/// the jobs run on, including their maintenance state.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use crate::shared::infrastructure::HasId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Paused,
    Completed,
}

impl JobStatus {
    pub fn can_start(&self) -> bool {
        matches!(self, JobStatus::Pending)
    }

    pub fn can_pause(&self) -> bool {
        matches!(self, JobStatus::InProgress)
    }

    pub fn can_resume(&self) -> bool {
        matches!(self, JobStatus::Paused)
    }

    pub fn can_complete(&self) -> bool {
        matches!(self, JobStatus::InProgress)
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::InProgress => write!(f, "in_progress"),
            JobStatus::Paused => write!(f, "paused"),
            JobStatus::Completed => write!(f, "completed"),
        }
    }
}

impl std::str::FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(JobStatus::Pending),
            "in_progress" => Ok(JobStatus::InProgress),
            "paused" => Ok(JobStatus::Paused),
            "completed" => Ok(JobStatus::Completed),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Job {
    pub id: Uuid,
    pub name: String,
    /// Target koli count for the whole job.
    pub koli_count: i32,
    /// Koli produced so far, as last reported.
    #[serde(default)]
    pub produced_koli: i32,
    /// Work left; never exceeds `koli_count`.
    #[serde(default)]
    pub remaining_koli: i32,
    #[serde(default)]
    pub colors: Vec<String>,
    pub machine_id: Uuid,
    pub machine_name: String,
    pub operator_name: Option<String>,
    pub format: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<String>,
    pub status: JobStatus,
    pub pause_reason: Option<String>,
    pub produced_before_pause: Option<i32>,
    /// Position within the machine's pending queue.
    #[serde(default)]
    pub order: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl HasId for Job {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Job {
    /// Predicted state after a successful start.
    pub fn started(&self, operator_name: &str) -> Self {
        Self {
            status: JobStatus::InProgress,
            operator_name: Some(operator_name.to_string()),
            started_at: Some(Utc::now()),
            ..self.clone()
        }
    }

    /// Predicted state after a pause: the produced count so far is recorded
    /// and the remaining work carries forward to the resume.
    pub fn paused(&self, reason: &str, produced_so_far: i32) -> Self {
        let produced = produced_so_far.min(self.koli_count);
        Self {
            status: JobStatus::Paused,
            pause_reason: Some(reason.to_string()),
            produced_before_pause: Some(produced),
            produced_koli: produced,
            remaining_koli: self.koli_count - produced,
            ..self.clone()
        }
    }

    /// Predicted state after a resume. `produced_before_pause` is kept so
    /// the operator can see where the job was interrupted.
    pub fn resumed(&self) -> Self {
        Self {
            status: JobStatus::InProgress,
            pause_reason: None,
            ..self.clone()
        }
    }

    /// Predicted state after completion; the backend sets the completion
    /// count to the full target on this path.
    pub fn completed(&self) -> Self {
        Self {
            status: JobStatus::Completed,
            produced_koli: self.koli_count,
            remaining_koli: 0,
            completed_at: Some(Utc::now()),
            ..self.clone()
        }
    }
}

/// Payload for creating a job from the planning panel.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct NewJob {
    pub name: String,
    pub koli_count: i32,
    pub colors: Vec<String>,
    pub machine_id: Uuid,
    pub machine_name: String,
    pub format: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<String>,
}

/// Editable fields for `PUT /jobs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct JobUpdate {
    pub name: String,
    pub koli_count: i32,
    pub colors: Vec<String>,
    pub format: Option<String>,
    pub image_url: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<String>,
}

/// Field overrides applied when cloning a completed job into a new pending
/// one. Unset fields are pre-filled from the source job.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Type)]
pub struct CloneOverrides {
    pub name: Option<String>,
    pub koli_count: Option<i32>,
    pub colors: Option<Vec<String>>,
    pub machine_id: Option<Uuid>,
    pub machine_name: Option<String>,
    pub format: Option<String>,
    pub notes: Option<String>,
    pub delivery_date: Option<String>,
}

/// Server-side list filters for `GET /jobs`.
#[derive(Debug, Clone, Default)]
pub struct JobQuery {
    pub status: Option<JobStatus>,
    pub machine_id: Option<Uuid>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[serde(rename_all = "lowercase")]
pub enum MachineStatus {
    Idle,
    Working,
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct Machine {
    pub id: Uuid,
    pub name: String,
    pub status: MachineStatus,
    pub current_job_id: Option<Uuid>,
    #[serde(default)]
    pub maintenance: bool,
    pub maintenance_reason: Option<String>,
    pub maintenance_started: Option<DateTime<Utc>>,
}

impl HasId for Machine {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Machine {
    /// Format tags offered for this machine's pending queue filter.
    pub fn format_options(&self) -> Vec<&'static str> {
        match self.name.as_str() {
            "24x24" | "33x33 (Büyük)" => vec!["1/4", "1/8"],
            "33x33 ICM" => vec!["33x33", "33x24"],
            _ => vec![],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Type)]
pub struct MaintenanceLog {
    pub id: Uuid,
    pub machine_id: Uuid,
    pub machine_name: String,
    pub reason: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(status: JobStatus) -> Job {
        Job {
            id: Uuid::new_v4(),
            name: "Baskı 24x24".to_string(),
            koli_count: 100,
            produced_koli: 0,
            remaining_koli: 100,
            colors: vec!["kırmızı".to_string(), "mavi".to_string()],
            machine_id: Uuid::new_v4(),
            machine_name: "24x24".to_string(),
            operator_name: None,
            format: Some("1/4".to_string()),
            image_url: None,
            notes: None,
            delivery_date: None,
            status,
            pause_reason: None,
            produced_before_pause: None,
            order: 0,
            started_at: None,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_status_display_round_trip() {
        for status in [
            JobStatus::Pending,
            JobStatus::InProgress,
            JobStatus::Paused,
            JobStatus::Completed,
        ] {
            assert_eq!(status.to_string().parse::<JobStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_transition_predicates() {
        assert!(JobStatus::Pending.can_start());
        assert!(!JobStatus::Paused.can_start());
        assert!(JobStatus::InProgress.can_pause());
        assert!(JobStatus::Paused.can_resume());
        assert!(JobStatus::InProgress.can_complete());
        assert!(!JobStatus::Completed.can_complete());
    }

    #[test]
    fn test_pause_records_produced_and_carries_remaining() {
        let running = job(JobStatus::InProgress);
        let paused = running.paused("bobin bitti", 40);

        assert_eq!(paused.status, JobStatus::Paused);
        assert_eq!(paused.produced_before_pause, Some(40));
        assert_eq!(paused.remaining_koli, 60);
        assert_eq!(paused.koli_count, 100);
    }

    #[test]
    fn test_pause_clamps_produced_to_target() {
        let running = job(JobStatus::InProgress);
        let paused = running.paused("sayım hatası", 250);
        assert_eq!(paused.produced_before_pause, Some(100));
        assert_eq!(paused.remaining_koli, 0);
    }

    #[test]
    fn test_resume_preserves_produced_before_pause() {
        let paused = job(JobStatus::InProgress).paused("mola", 40);
        let resumed = paused.resumed();

        assert_eq!(resumed.status, JobStatus::InProgress);
        assert_eq!(resumed.produced_before_pause, Some(40));
        assert_eq!(resumed.koli_count, 100);
        assert!(resumed.pause_reason.is_none());
    }

    #[test]
    fn test_complete_fills_target() {
        let done = job(JobStatus::InProgress).completed();
        assert_eq!(done.produced_koli, 100);
        assert_eq!(done.remaining_koli, 0);
        assert!(done.completed_at.is_some());
    }

    #[test]
    fn test_format_options_per_machine() {
        let mut machine = Machine {
            id: Uuid::new_v4(),
            name: "24x24".to_string(),
            status: MachineStatus::Idle,
            current_job_id: None,
            maintenance: false,
            maintenance_reason: None,
            maintenance_started: None,
        };
        assert_eq!(machine.format_options(), vec!["1/4", "1/8"]);

        machine.name = "Dispanser".to_string();
        assert!(machine.format_options().is_empty());
    }
}
