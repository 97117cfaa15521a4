// goal.rs — Goal records: the data model for active and completed goals.
//
// An active goal accumulates daily log entries until their summed
// progress reaches the total target; at that point the store stamps a
// completion date and moves the record to the completed collection.
// Completed goals are never mutated again.

use chrono::{Datelike, IsoWeek, NaiveDate};
use serde::{Deserialize, Serialize};

/// One progress entry: an amount logged on a calendar date.
///
/// Entries are append-only and kept in insertion order, i.e. the order
/// of logging, which is not guaranteed to be sorted by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLog {
    pub date: NaiveDate,
    pub progress: f64,
}

/// A day the user explicitly marked as missed, with their reason.
///
/// Missed days are informational only; they never affect completion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissedDay {
    pub date: NaiveDate,
    pub reason: String,
}

fn default_unit() -> String {
    "units".to_string()
}

/// An active goal.
///
/// `name` is a display label, not a key: the store permits duplicate
/// names and resolves lookups by linear scan (see [`crate::GoalStore`]).
/// Records persisted before `unit`, `daily_logs`, or `missed_days`
/// existed decode with defaults instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,

    /// Cumulative progress threshold for completion.
    pub total_target: f64,

    /// Informational threshold for weekly status display.
    pub weekly_target: f64,

    /// Free-text unit label, e.g. "pages" or "km".
    #[serde(default = "default_unit")]
    pub unit: String,

    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,

    #[serde(default)]
    pub missed_days: Vec<MissedDay>,
}

impl Goal {
    /// Create a new goal with no logs.
    pub fn new(
        name: impl Into<String>,
        total_target: f64,
        weekly_target: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            total_target,
            weekly_target,
            unit: unit.into(),
            daily_logs: Vec::new(),
            missed_days: Vec::new(),
        }
    }

    /// Sum of all logged progress.
    pub fn total_progress(&self) -> f64 {
        self.daily_logs.iter().map(|l| l.progress).sum()
    }

    /// Whether cumulative progress has reached the total target.
    pub fn target_reached(&self) -> bool {
        self.total_progress() >= self.total_target
    }

    /// Sum of progress over entries dated in the given ISO week.
    ///
    /// ISO weeks start on Monday; week 1 is the week containing the
    /// year's first Thursday. The comparison includes the week-based
    /// year, so week 1 entries never collide with week 1 of another year.
    pub fn progress_in_week(&self, week: IsoWeek) -> f64 {
        self.daily_logs
            .iter()
            .filter(|l| l.date.iso_week() == week)
            .map(|l| l.progress)
            .sum()
    }

    /// Freeze this goal with its completion date.
    pub fn into_completed(self, completion_date: NaiveDate) -> CompletedGoal {
        CompletedGoal {
            goal: self,
            completion_date,
        }
    }
}

/// A completed goal: an active goal frozen with its completion date.
///
/// Serializes flat: all `Goal` fields plus `completion_date` at the
/// same level, so completed records read like active ones on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletedGoal {
    #[serde(flatten)]
    pub goal: Goal,

    /// The date cumulative progress reached the total target.
    pub completion_date: NaiveDate,
}

impl CompletedGoal {
    /// Total progress logged over the goal's lifetime.
    pub fn total_logged(&self) -> f64 {
        self.goal.total_progress()
    }

    /// Number of progress entries it took to finish.
    pub fn days_taken(&self) -> usize {
        self.goal.daily_logs.len()
    }
}

/// The persisted document: both goal collections.
///
/// A goal is a member of exactly one collection at any time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GoalDocument {
    #[serde(default)]
    pub active_goals: Vec<Goal>,

    #[serde(default)]
    pub completed_goals: Vec<CompletedGoal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn goal_with_logs(logs: &[(NaiveDate, f64)]) -> Goal {
        let mut goal = Goal::new("Read books", 50.0, 5.0, "pages");
        for (date, progress) in logs {
            goal.daily_logs.push(DailyLog {
                date: *date,
                progress: *progress,
            });
        }
        goal
    }

    #[test]
    fn new_goal_has_no_logs() {
        let goal = Goal::new("Run", 100.0, 10.0, "km");
        assert!(goal.daily_logs.is_empty());
        assert!(goal.missed_days.is_empty());
        assert_eq!(goal.total_progress(), 0.0);
        assert!(!goal.target_reached());
    }

    #[test]
    fn total_progress_sums_all_entries() {
        let goal = goal_with_logs(&[
            (date(2025, 6, 2), 3.0),
            (date(2025, 6, 3), 4.5),
            (date(2025, 6, 4), 2.5),
        ]);
        assert_eq!(goal.total_progress(), 10.0);
    }

    #[test]
    fn target_reached_at_exact_total() {
        let mut goal = goal_with_logs(&[(date(2025, 6, 2), 50.0)]);
        assert!(goal.target_reached());
        goal.total_target = 50.5;
        assert!(!goal.target_reached());
    }

    #[test]
    fn week_sum_includes_monday_through_sunday() {
        // 2025-06-02 is a Monday, 2025-06-08 the Sunday of the same week.
        let goal = goal_with_logs(&[
            (date(2025, 6, 2), 2.0),
            (date(2025, 6, 8), 3.0),
            (date(2025, 6, 9), 7.0), // next Monday, different week
        ]);
        let week = date(2025, 6, 4).iso_week();
        assert_eq!(goal.progress_in_week(week), 5.0);
    }

    #[test]
    fn week_sum_respects_year_boundary() {
        // 2024-12-30 (Monday) already belongs to ISO week 1 of 2025;
        // 2024-12-29 (Sunday) closes ISO week 52 of 2024.
        let goal = goal_with_logs(&[
            (date(2024, 12, 29), 1.0),
            (date(2024, 12, 30), 2.0),
            (date(2025, 1, 5), 4.0),
        ]);
        let new_years_week = date(2025, 1, 1).iso_week();
        assert_eq!(goal.progress_in_week(new_years_week), 6.0);
        let old_week = date(2024, 12, 29).iso_week();
        assert_eq!(goal.progress_in_week(old_week), 1.0);
    }

    #[test]
    fn goal_record_defaults_missing_fields() {
        // Records written before unit/missed_days/daily_logs existed.
        let json = r#"{"name": "Read", "total_target": 12.0, "weekly_target": 2.0}"#;
        let goal: Goal = serde_json::from_str(json).unwrap();
        assert_eq!(goal.name, "Read");
        assert_eq!(goal.total_target, 12.0);
        assert_eq!(goal.weekly_target, 2.0);
        assert_eq!(goal.unit, "units");
        assert!(goal.daily_logs.is_empty());
        assert!(goal.missed_days.is_empty());
    }

    #[test]
    fn completed_goal_serializes_flat() {
        let goal = goal_with_logs(&[(date(2025, 6, 2), 50.0)]);
        let completed = goal.into_completed(date(2025, 6, 2));
        let json = serde_json::to_value(&completed).unwrap();
        // Goal fields and completion_date live at the same level.
        assert_eq!(json["name"], "Read books");
        assert_eq!(json["completion_date"], "2025-06-02");

        let restored: CompletedGoal = serde_json::from_value(json).unwrap();
        assert_eq!(restored, completed);
        assert_eq!(restored.total_logged(), 50.0);
        assert_eq!(restored.days_taken(), 1);
    }

    #[test]
    fn dates_serialize_as_iso_strings() {
        let log = DailyLog {
            date: date(2025, 6, 2),
            progress: 1.5,
        };
        let json = serde_json::to_string(&log).unwrap();
        assert!(json.contains("\"2025-06-02\""));
        let restored: DailyLog = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, log);
    }

    #[test]
    fn document_defaults_both_collections() {
        let doc: GoalDocument = serde_json::from_str("{}").unwrap();
        assert!(doc.active_goals.is_empty());
        assert!(doc.completed_goals.is_empty());
    }
}
