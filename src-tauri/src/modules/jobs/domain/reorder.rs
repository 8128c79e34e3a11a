//! Pending-queue reordering.
//!
//! Recomputes the integer order of every pending job on a machine so the
//! moved job lands exactly at the requested index and all others keep
//! their relative order. The whole batch is sent in one request so a
//! partial update can never interleave with another writer.

use serde::{Deserialize, Serialize};
use specta::Type;
use uuid::Uuid;

use super::entities::Job;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Type)]
pub struct OrderAssignment {
    pub job_id: Uuid,
    pub order: i32,
}

/// Compute the dense order batch for moving `moved_job_id` to `new_index`.
///
/// The moved job is inserted, never swapped: every other job keeps its
/// relative position, and the resulting orders are unique by construction.
pub fn reorder(pending: &[Job], moved_job_id: Uuid, new_index: usize) -> AppResult<Vec<OrderAssignment>> {
    let mut queue: Vec<&Job> = pending.iter().collect();
    queue.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));

    let from = queue
        .iter()
        .position(|job| job.id == moved_job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {} is not in the pending queue", moved_job_id)))?;

    let moved = queue.remove(from);
    let target = new_index.min(queue.len());
    queue.insert(target, moved);

    Ok(queue
        .iter()
        .enumerate()
        .map(|(index, job)| OrderAssignment {
            job_id: job.id,
            order: index as i32,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::jobs::domain::entities::JobStatus;
    use chrono::Utc;

    fn pending_job(name: &str, order: i32) -> Job {
        Job {
            id: Uuid::new_v4(),
            name: name.to_string(),
            koli_count: 50,
            produced_koli: 0,
            remaining_koli: 50,
            colors: vec![],
            machine_id: Uuid::new_v4(),
            machine_name: "30x30".to_string(),
            operator_name: None,
            format: None,
            image_url: None,
            notes: None,
            delivery_date: None,
            status: JobStatus::Pending,
            pause_reason: None,
            produced_before_pause: None,
            order,
            started_at: None,
            completed_at: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_move_last_to_front() {
        let a = pending_job("A", 0);
        let b = pending_job("B", 1);
        let c = pending_job("C", 2);
        let queue = vec![a.clone(), b.clone(), c.clone()];

        let batch = reorder(&queue, c.id, 0).unwrap();

        assert_eq!(batch[0], OrderAssignment { job_id: c.id, order: 0 });
        assert_eq!(batch[1], OrderAssignment { job_id: a.id, order: 1 });
        assert_eq!(batch[2], OrderAssignment { job_id: b.id, order: 2 });
    }

    #[test]
    fn test_orders_are_unique_and_dense() {
        let jobs: Vec<Job> = (0..6).map(|i| pending_job(&format!("J{}", i), i)).collect();
        let batch = reorder(&jobs, jobs[4].id, 1).unwrap();

        let mut orders: Vec<i32> = batch.iter().map(|a| a.order).collect();
        orders.sort_unstable();
        assert_eq!(orders, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_target_index_is_clamped() {
        let a = pending_job("A", 0);
        let b = pending_job("B", 1);
        let queue = vec![a.clone(), b.clone()];

        let batch = reorder(&queue, a.id, 99).unwrap();
        assert_eq!(batch[0].job_id, b.id);
        assert_eq!(batch[1].job_id, a.id);
    }

    #[test]
    fn test_unknown_job_is_rejected() {
        let queue = vec![pending_job("A", 0)];
        assert!(reorder(&queue, Uuid::new_v4(), 0).is_err());
    }

    #[test]
    fn test_noop_move_keeps_relative_order() {
        let a = pending_job("A", 0);
        let b = pending_job("B", 1);
        let queue = vec![a.clone(), b.clone()];

        let batch = reorder(&queue, b.id, 1).unwrap();
        assert_eq!(batch[0].job_id, a.id);
        assert_eq!(batch[1].job_id, b.id);
    }
}
