//! Derived day summary, recomputed on demand from the published snapshot.

use serde::{Deserialize, Serialize};

use crate::model::snapshot::{CalendarEvent, DaySnapshot, Goal, TaskStatus};

/// Display-ready digest of one snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    /// Percentage of tasks done, rounded; 0 when there are no tasks.
    pub task_progress: u8,
    pub goals: Vec<Goal>,
    pub events: Vec<CalendarEvent>,
}

/// Computes the summary for `snapshot`. Pure.
pub fn summarize(snapshot: &DaySnapshot) -> DaySummary {
    let total = snapshot.tasks.len();
    let done = snapshot
        .tasks
        .iter()
        .filter(|task| task.status == TaskStatus::Done)
        .count();
    let task_progress = if total == 0 {
        0
    } else {
        ((done * 100 + total / 2) / total) as u8
    };

    DaySummary {
        task_progress,
        goals: snapshot.goals_today.clone(),
        events: snapshot.events.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::summarize;
    use crate::model::snapshot::{Task, TaskPriority, TaskStatus};
    use crate::model::template::{base_template, build_default_snapshot};
    use chrono::NaiveDate;

    fn snapshot_with_tasks(total: usize, done: usize) -> crate::model::snapshot::DaySnapshot {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        let mut snapshot = build_default_snapshot(date, &base_template());
        for i in 0..total {
            let mut task = Task::new(format!("task {i}"), TaskPriority::Medium, None);
            if i < done {
                task.status = TaskStatus::Done;
            }
            snapshot.tasks.push(task);
        }
        snapshot
    }

    #[test]
    fn no_tasks_is_zero_percent() {
        assert_eq!(summarize(&snapshot_with_tasks(0, 0)).task_progress, 0);
    }

    #[test]
    fn one_of_three_rounds_to_33() {
        assert_eq!(summarize(&snapshot_with_tasks(3, 1)).task_progress, 33);
    }

    #[test]
    fn two_of_four_is_50() {
        assert_eq!(summarize(&snapshot_with_tasks(4, 2)).task_progress, 50);
    }

    #[test]
    fn all_done_is_100() {
        assert_eq!(summarize(&snapshot_with_tasks(2, 2)).task_progress, 100);
    }
}
