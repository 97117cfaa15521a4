// store.rs — GoalStore: the in-memory goal document and every operation on it.
//
// The whole document lives in memory and is written back to a single
// JSON file as the final step of each mutation, so the persisted state
// never lags the in-memory state across operation boundaries.
//
// Single-threaded and synchronous: the backing file is exclusively owned
// by one store instance for the lifetime of the process. There is no
// locking or conflict detection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde_json::Value;

use crate::clock::{Clock, SystemClock};
use crate::error::StoreError;
use crate::goal::{CompletedGoal, DailyLog, Goal, GoalDocument, MissedDay};

/// Owns the goal collections and persists them to one JSON file.
///
/// Goals are found by linear scan on `name`, and duplicate names are
/// allowed: `log_progress`, `log_missed_day`, and `weekly_progress` act
/// on the *first* match, while `delete_goal` removes *every* match.
/// Display access goes through [`GoalStore::active_goals`] and
/// [`GoalStore::completed_goals`]; all mutation goes through the
/// operations here.
pub struct GoalStore {
    path: PathBuf,
    document: GoalDocument,
    clock: Box<dyn Clock>,
}

impl GoalStore {
    /// Open a store backed by the given file, stamping dates from the
    /// local wall clock.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::open_with_clock(path, Box::new(SystemClock))
    }

    /// Open a store with an explicit date source.
    pub fn open_with_clock(
        path: impl AsRef<Path>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let document = Self::load(&path)?;
        Ok(Self {
            path,
            document,
            clock,
        })
    }

    /// Read and normalize the persisted document.
    ///
    /// A missing file or undecodable content yields the empty document:
    /// a recovery path, not an error. Any other read failure (e.g.
    /// permissions) is reported.
    fn load(path: &Path) -> Result<GoalDocument, StoreError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(GoalDocument::default()),
            Err(source) => {
                return Err(StoreError::IoError {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };

        match Self::decode(&text) {
            Ok(document) => Ok(document),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "unreadable goal document, starting empty"
                );
                Ok(GoalDocument::default())
            }
        }
    }

    /// Decode a document, migrating the legacy top-level `goals` key to
    /// `active_goals` before typed decoding. The rename only applies
    /// when `active_goals` is absent.
    fn decode(text: &str) -> Result<GoalDocument, serde_json::Error> {
        let mut value: Value = serde_json::from_str(text)?;
        if let Some(root) = value.as_object_mut() {
            if !root.contains_key("active_goals") {
                if let Some(legacy) = root.remove("goals") {
                    root.insert("active_goals".to_string(), legacy);
                }
            }
        }
        serde_json::from_value(value)
    }

    /// Write the full document back to the backing file, creating the
    /// parent directory if needed. Overwrites in full, not incrementally.
    fn save(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::IoError {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.document)?;
        fs::write(&self.path, json).map_err(|source| StoreError::IoError {
            path: self.path.clone(),
            source,
        })
    }

    /// Add a new active goal with no logs, then persist.
    ///
    /// Targets must be finite numbers; NaN or infinity is rejected
    /// loudly rather than corrupting the document. Sign is not checked
    /// here; callers that want to forbid negative targets validate
    /// before calling. Names are not checked for uniqueness: a second
    /// add with the same name creates a second, distinct goal.
    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        total_target: f64,
        weekly_target: f64,
        unit: impl Into<String>,
    ) -> Result<(), StoreError> {
        let name = name.into();
        if !total_target.is_finite() {
            return Err(StoreError::InvalidTarget {
                name,
                field: "total_target",
            });
        }
        if !weekly_target.is_finite() {
            return Err(StoreError::InvalidTarget {
                name,
                field: "weekly_target",
            });
        }

        tracing::debug!(goal = %name, total_target, weekly_target, "adding goal");
        self.document
            .active_goals
            .push(Goal::new(name, total_target, weekly_target, unit));
        self.save()
    }

    /// Remove every active goal with the given name, then persist.
    ///
    /// A name matching nothing is a no-op, not an error. Completed
    /// goals are never deleted.
    pub fn delete_goal(&mut self, name: &str) -> Result<(), StoreError> {
        let before = self.document.active_goals.len();
        self.document.active_goals.retain(|g| g.name != name);
        let removed = before - self.document.active_goals.len();
        tracing::debug!(goal = name, removed, "delete goal");
        self.save()
    }

    /// Append today's progress to the first active goal with the given
    /// name. Returns `Ok(false)`, leaving all state untouched, when no
    /// active goal matches.
    ///
    /// When the appended entry brings cumulative progress to or past
    /// the total target, the goal moves to the completed collection,
    /// stamped with today's date, in the same operation. A single
    /// write persists both steps.
    ///
    /// Any finite amount is accepted; callers that want to forbid
    /// negative logs enforce sign before calling.
    pub fn log_progress(&mut self, name: &str, amount: f64) -> Result<bool, StoreError> {
        let today = self.clock.today();
        let Some(index) = self
            .document
            .active_goals
            .iter()
            .position(|g| g.name == name)
        else {
            return Ok(false);
        };

        let goal = &mut self.document.active_goals[index];
        goal.daily_logs.push(DailyLog {
            date: today,
            progress: amount,
        });

        if goal.target_reached() {
            let goal = self.document.active_goals.remove(index);
            tracing::info!(
                goal = %goal.name,
                total = goal.total_progress(),
                target = goal.total_target,
                "goal completed"
            );
            self.document
                .completed_goals
                .push(goal.into_completed(today));
        }

        self.save()?;
        Ok(true)
    }

    /// Record a missed day with the user's reason against the first
    /// matching active goal, then persist. Missed days never affect
    /// completion. Returns `Ok(false)` when no active goal matches.
    pub fn log_missed_day(
        &mut self,
        name: &str,
        reason: impl Into<String>,
    ) -> Result<bool, StoreError> {
        let today = self.clock.today();
        let Some(goal) = self
            .document
            .active_goals
            .iter_mut()
            .find(|g| g.name == name)
        else {
            return Ok(false);
        };

        goal.missed_days.push(MissedDay {
            date: today,
            reason: reason.into(),
        });
        self.save()?;
        Ok(true)
    }

    /// Sum of progress logged in the current ISO week for the first
    /// matching active goal. Returns `0.0` when no goal matches: a
    /// default, not an error.
    pub fn weekly_progress(&self, name: &str) -> f64 {
        let week = self.clock.today().iso_week();
        self.document
            .active_goals
            .iter()
            .find(|g| g.name == name)
            .map(|g| g.progress_in_week(week))
            .unwrap_or(0.0)
    }

    /// Active goals, in insertion order, for display.
    pub fn active_goals(&self) -> &[Goal] {
        &self.document.active_goals
    }

    /// Completed goals, oldest completion first, for display.
    pub fn completed_goals(&self) -> &[CompletedGoal] {
        &self.document.completed_goals
    }

    /// Path to the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}
