//! Checklist template seed and the default snapshot builder.
//!
//! # Responsibility
//! - Provide the built-in reflection checklist definitions.
//! - Build a well-formed empty snapshot for any date.
//!
//! # Invariants
//! - A day's seeded checklist entries share identifiers with the template
//!   entries that produced them; template edits fan out by that shared id.
//! - Building a snapshot clones the template by value; later edits to the
//!   caller's template never reach snapshots that were already built.

use chrono::NaiveDate;

use super::snapshot::{ChecklistItem, DaySnapshot, Mood, ReflectionEntry};

/// Built-in reflection checklist definitions used until the user edits the
/// template. Fresh identifiers on every call.
pub fn base_template() -> Vec<ChecklistItem> {
    vec![
        ChecklistItem::new(
            "List three things that went well today",
            Some("reflection".to_string()),
        ),
        ChecklistItem::new(
            "Rate your energy level",
            Some("reflection".to_string()),
        ),
        ChecklistItem::new(
            "Name one concrete thing to improve",
            Some("reflection".to_string()),
        ),
        ChecklistItem::new(
            "Pick tomorrow's single focus point",
            Some("goal".to_string()),
        ),
    ]
}

/// Copies template items into checkable entries, keeping their identifiers
/// and resetting check state.
pub fn seed_checklist(template: &[ChecklistItem]) -> Vec<ChecklistItem> {
    template
        .iter()
        .map(|item| ChecklistItem {
            checked: false,
            ..item.clone()
        })
        .collect()
}

/// Builds an empty, well-formed snapshot for `date`.
///
/// Pure function of `date` and the template contents: empty task, event,
/// goal and projection lists, a default reflection (`mood = Ok`, empty
/// notes) whose checklist is seeded from `template`, and the template itself
/// cloned by value.
pub fn build_default_snapshot(date: NaiveDate, template: &[ChecklistItem]) -> DaySnapshot {
    DaySnapshot {
        date,
        events: Vec::new(),
        tasks: Vec::new(),
        external_tasks: Vec::new(),
        issues: Vec::new(),
        reflection: ReflectionEntry {
            mood: Mood::Ok,
            notes: String::new(),
            checklist: seed_checklist(template),
        },
        goals_today: Vec::new(),
        goals_tomorrow: Vec::new(),
        checklist_template: template.to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::{base_template, build_default_snapshot, seed_checklist};
    use crate::model::snapshot::Mood;
    use chrono::NaiveDate;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    #[test]
    fn seeding_keeps_ids_and_resets_check_state() {
        let mut template = base_template();
        template[0].checked = true;

        let seeded = seed_checklist(&template);
        assert_eq!(seeded.len(), template.len());
        for (entry, seed) in seeded.iter().zip(template.iter()) {
            assert_eq!(entry.id, seed.id);
            assert_eq!(entry.label, seed.label);
            assert_eq!(entry.category, seed.category);
            assert!(!entry.checked);
        }
    }

    #[test]
    fn default_snapshot_is_empty_except_checklist() {
        let template = base_template();
        let snapshot = build_default_snapshot(date(), &template);

        assert_eq!(snapshot.date, date());
        assert!(snapshot.tasks.is_empty());
        assert!(snapshot.events.is_empty());
        assert!(snapshot.external_tasks.is_empty());
        assert!(snapshot.issues.is_empty());
        assert!(snapshot.goals_today.is_empty());
        assert!(snapshot.goals_tomorrow.is_empty());
        assert_eq!(snapshot.reflection.mood, Mood::Ok);
        assert!(snapshot.reflection.notes.is_empty());
        assert_eq!(snapshot.reflection.checklist.len(), template.len());
        assert_eq!(snapshot.checklist_template, template);
    }

    #[test]
    fn later_template_edits_do_not_reach_built_snapshots() {
        let mut template = base_template();
        let snapshot = build_default_snapshot(date(), &template);

        template[0].label = "changed".to_string();
        assert_ne!(snapshot.checklist_template[0].label, "changed");
    }
}
