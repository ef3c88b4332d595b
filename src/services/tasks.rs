//!
//! # Task Engine and Query Dispatcher
//!
//! Ownership-aware task mutations and the filtered, paginated listings.
//!
//! Update, delete and complete all run the same authorization sequence:
//! look the task up, compare its owner against the acting username, then
//! apply the mutation. The sequence lives in [`TaskService::owned_task`] and
//! runs inside one storage transaction per operation, so the ownership
//! check and the write are observed as a unit.

use validator::Validate;

use crate::either::Either;
use crate::error::TaskError;
use crate::models::{NewTask, Task, TaskInput, TaskPatch, TaskQuery, TaskView};
use crate::pagination::{Page, PageRequest};
use crate::storage::{Storage, StorageTx};

pub struct TaskService<S> {
    storage: S,
}

impl<S: Storage> TaskService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Creates a task owned by `username`. An empty name is a `BadRequest`;
    /// an unknown owner is `UserNotExists`.
    pub async fn create_task(&self, input: TaskInput, username: &str) -> Result<(), TaskError> {
        if input.validate().is_err() {
            return Err(TaskError::BadRequest);
        }

        let mut tx = self.storage.begin().await.map_err(|error| {
            log::error!("Unexpected storage failure trying to save new task: {}", error);
            TaskError::Unexpected
        })?;
        let user = tx.find_user_by_username(username).await.map_err(|error| {
            log::error!("Unexpected storage failure trying to find user: {}", error);
            TaskError::Unexpected
        })?;
        let Some(user) = user else {
            return Err(TaskError::UserNotExists);
        };

        tx.insert_task(NewTask {
            name: input.name,
            description: input.description,
            due_date: input.due_date,
            username: user.username,
        })
        .await
        .map_err(|error| {
            log::error!("Unexpected storage failure trying to save new task: {}", error);
            TaskError::Unexpected
        })?;
        tx.commit().await.map_err(|error| {
            log::error!("Unexpected storage failure trying to save new task: {}", error);
            TaskError::Unexpected
        })?;
        Ok(())
    }

    /// Looks a task up by id. No principal: reads are not owner-scoped.
    pub async fn get_task(&self, id: i64) -> Either<TaskError, TaskView> {
        match self.storage.find_task_by_id(id).await {
            Ok(Some(task)) => Either::Right(TaskView::from(task)),
            Ok(None) => Either::Left(TaskError::NoTaskExists),
            Err(error) => {
                log::error!(
                    "Unexpected storage failure trying to find task with id '{}': {}",
                    id,
                    error
                );
                Either::Left(TaskError::Unexpected)
            }
        }
    }

    /// Lists tasks through one of four lookup strategies, picked by which
    /// filters are present, in strict priority order: both, completion
    /// only, due-date only, neither.
    pub async fn get_tasks(
        &self,
        query: TaskQuery,
        page: PageRequest,
    ) -> Either<TaskError, Page<TaskView>> {
        let fetched = match (query.completed, query.due_date) {
            (Some(completed), Some(cutoff)) => {
                self.storage
                    .find_tasks_by_completed_and_due_before(completed, cutoff, &page)
                    .await
            }
            (Some(completed), None) => self.storage.find_tasks_by_completed(completed, &page).await,
            (None, Some(cutoff)) => self.storage.find_tasks_due_before(cutoff, &page).await,
            (None, None) => self.storage.find_tasks(&page).await,
        };

        match fetched {
            Ok(tasks) => Either::Right(tasks.map(TaskView::from)),
            Err(error) => {
                log::error!("Unexpected storage failure trying to find all tasks: {}", error);
                Either::Left(TaskError::Unexpected)
            }
        }
    }

    /// Applies a partial update to a task owned by `username`.
    pub async fn update_task(
        &self,
        id: i64,
        patch: TaskPatch,
        username: &str,
    ) -> Result<(), TaskError> {
        let mut tx = self.storage.begin().await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to update task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        let mut task = Self::owned_task(&mut tx, id, username).await?;

        task.apply(&patch);
        tx.save_task(&task).await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to update task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        tx.commit().await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to update task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        Ok(())
    }

    /// Deletes a task owned by `username`.
    pub async fn delete_task(&self, id: i64, username: &str) -> Result<(), TaskError> {
        let mut tx = self.storage.begin().await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to delete task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        let task = Self::owned_task(&mut tx, id, username).await?;

        tx.delete_task(&task).await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to delete task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        tx.commit().await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to delete task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        Ok(())
    }

    /// Marks a task owned by `username` as completed. Completing an
    /// already-completed task succeeds again.
    pub async fn complete_task(&self, id: i64, username: &str) -> Result<(), TaskError> {
        let mut tx = self.storage.begin().await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to complete task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        let mut task = Self::owned_task(&mut tx, id, username).await?;

        task.completed = true;
        tx.save_task(&task).await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to complete task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        tx.commit().await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to complete task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        Ok(())
    }

    /// The shared authorization sequence: lookup, then ownership check.
    /// Absent task: `NoTaskExists`. Foreign owner: `UnauthorizedUser`.
    async fn owned_task(tx: &mut S::Tx, id: i64, username: &str) -> Result<Task, TaskError> {
        let task = tx.find_task_by_id(id).await.map_err(|error| {
            log::error!(
                "Unexpected storage failure trying to find task with id '{}': {}",
                id,
                error
            );
            TaskError::Unexpected
        })?;
        let Some(task) = task else {
            return Err(TaskError::NoTaskExists);
        };
        if task.username != username {
            return Err(TaskError::UnauthorizedUser);
        }
        Ok(task)
    }
}
