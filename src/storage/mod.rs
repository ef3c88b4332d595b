//!
//! # Storage Collaborator
//!
//! Explicit storage contract for users and tasks: point lookups, saves and
//! deletes, the four named paginated task listings, and a scoped unit of
//! work for the mutating flows.
//!
//! Every method reports infrastructure problems as [`StorageError`]; the
//! services catch it at their boundary and normalize it into their own
//! `Unexpected` variant, so raw storage failures never cross the core.

pub mod memory;
pub mod postgres;
#[cfg(test)]
pub mod testing;

use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt;

use crate::models::{NewTask, NewUser, Task, User};
use crate::pagination::{Page, PageRequest};

pub use memory::MemoryStorage;
pub use postgres::PgStorage;

/// An infrastructure failure raised by a storage backend.
#[derive(Debug)]
pub struct StorageError(pub String);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "storage error: {}", self.0)
    }
}

impl std::error::Error for StorageError {}

impl From<sqlx::Error> for StorageError {
    fn from(error: sqlx::Error) -> Self {
        StorageError(error.to_string())
    }
}

/// Read side of the storage contract, plus the transaction factory.
///
/// The listing operations are the four lookup strategies the query
/// dispatcher selects among. The due-date cutoff is inclusive; rows without
/// a due date never match a due-date filter.
#[async_trait]
pub trait Storage: Clone + Send + Sync + 'static {
    type Tx: StorageTx;

    /// Opens a unit of work for a mutating operation. Committing makes all
    /// of its writes visible at once; dropping it discards them.
    async fn begin(&self) -> Result<Self::Tx, StorageError>;

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, StorageError>;

    async fn find_tasks_by_completed_and_due_before(
        &self,
        completed: bool,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError>;

    async fn find_tasks_by_completed(
        &self,
        completed: bool,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError>;

    async fn find_tasks_due_before(
        &self,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError>;

    async fn find_tasks(&self, page: &PageRequest) -> Result<Page<Task>, StorageError>;
}

/// A scoped storage transaction: the reads and writes of one mutating
/// service operation, observed as a single unit.
#[async_trait]
pub trait StorageTx: Send {
    async fn find_user_by_username(&mut self, username: &str)
        -> Result<Option<User>, StorageError>;

    /// Inserts a new user; storage assigns the id.
    async fn insert_user(&mut self, user: NewUser) -> Result<User, StorageError>;

    /// Persists changes to an existing user row.
    async fn save_user(&mut self, user: &User) -> Result<(), StorageError>;

    async fn delete_user(&mut self, user: &User) -> Result<(), StorageError>;

    async fn find_task_by_id(&mut self, id: i64) -> Result<Option<Task>, StorageError>;

    /// Inserts a new task; storage assigns the id and `completed` starts
    /// false.
    async fn insert_task(&mut self, task: NewTask) -> Result<Task, StorageError>;

    /// Persists changes to an existing task row.
    async fn save_task(&mut self, task: &Task) -> Result<(), StorageError>;

    async fn delete_task(&mut self, task: &Task) -> Result<(), StorageError>;

    async fn commit(self) -> Result<(), StorageError>;
}
