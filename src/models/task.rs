use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A task as stored in the database.
///
/// The owning username is set at creation and never changes; only the owner
/// may mutate or delete the task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Task {
    /// Storage-assigned identifier.
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
    /// Username of the owning user.
    pub username: String,
}

/// A task about to be inserted; storage assigns the id, `completed` starts
/// false.
#[derive(Debug, Clone)]
pub struct NewTask {
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub username: String,
}

/// Input for creating a task.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    /// Required, non-empty.
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Partial update for a task.
///
/// Absent fields, and empty strings for `name`/`description`, leave the
/// stored value untouched.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub due_date: Option<NaiveDate>,
}

/// Optional filters for the task listing.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskQuery {
    pub completed: Option<bool>,
    /// Inclusive due-date cutoff.
    pub due_date: Option<NaiveDate>,
}

/// Response projection of a task. The owner is never exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub completed: bool,
    pub due_date: Option<NaiveDate>,
}

impl Task {
    /// Applies the partial-update policy: `name` and `description` only when
    /// present and non-empty, `due_date` when present. Id and owner are
    /// immutable.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(name) = &patch.name {
            if !name.is_empty() {
                self.name = name.clone();
            }
        }
        if let Some(description) = &patch.description {
            if !description.is_empty() {
                self.description = Some(description.clone());
            }
        }
        if let Some(due_date) = patch.due_date {
            self.due_date = Some(due_date);
        }
    }
}

impl From<Task> for TaskView {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            name: task.name,
            description: task.description,
            completed: task.completed,
            due_date: task.due_date,
        }
    }
}
