//! Storage doubles for the service unit tests: a backend where every call
//! fails, and one where reads succeed but writes are refused.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::{NewTask, NewUser, Task, User};
use crate::pagination::{Page, PageRequest};
use crate::storage::memory::{MemoryStorage, MemoryTx};
use crate::storage::{Storage, StorageError, StorageTx};

fn refused() -> StorageError {
    StorageError("connection refused".to_string())
}

/// Every operation fails, including `begin`-adjacent reads.
#[derive(Clone, Default)]
pub struct FailingStorage;

pub struct FailingTx;

#[async_trait]
impl Storage for FailingStorage {
    type Tx = FailingTx;

    async fn begin(&self) -> Result<FailingTx, StorageError> {
        Ok(FailingTx)
    }

    async fn find_task_by_id(&self, _id: i64) -> Result<Option<Task>, StorageError> {
        Err(refused())
    }

    async fn find_tasks_by_completed_and_due_before(
        &self,
        _completed: bool,
        _cutoff: NaiveDate,
        _page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        Err(refused())
    }

    async fn find_tasks_by_completed(
        &self,
        _completed: bool,
        _page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        Err(refused())
    }

    async fn find_tasks_due_before(
        &self,
        _cutoff: NaiveDate,
        _page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        Err(refused())
    }

    async fn find_tasks(&self, _page: &PageRequest) -> Result<Page<Task>, StorageError> {
        Err(refused())
    }
}

#[async_trait]
impl StorageTx for FailingTx {
    async fn find_user_by_username(
        &mut self,
        _username: &str,
    ) -> Result<Option<User>, StorageError> {
        Err(refused())
    }

    async fn insert_user(&mut self, _user: NewUser) -> Result<User, StorageError> {
        Err(refused())
    }

    async fn save_user(&mut self, _user: &User) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn delete_user(&mut self, _user: &User) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn find_task_by_id(&mut self, _id: i64) -> Result<Option<Task>, StorageError> {
        Err(refused())
    }

    async fn insert_task(&mut self, _task: NewTask) -> Result<Task, StorageError> {
        Err(refused())
    }

    async fn save_task(&mut self, _task: &Task) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn delete_task(&mut self, _task: &Task) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn commit(self) -> Result<(), StorageError> {
        Err(refused())
    }
}

/// Reads delegate to the wrapped in-memory backend; every write fails.
#[derive(Clone, Default)]
pub struct WriteFailStorage(pub MemoryStorage);

pub struct WriteFailTx(MemoryTx);

#[async_trait]
impl Storage for WriteFailStorage {
    type Tx = WriteFailTx;

    async fn begin(&self) -> Result<WriteFailTx, StorageError> {
        Ok(WriteFailTx(self.0.begin().await?))
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, StorageError> {
        self.0.find_task_by_id(id).await
    }

    async fn find_tasks_by_completed_and_due_before(
        &self,
        completed: bool,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        self.0
            .find_tasks_by_completed_and_due_before(completed, cutoff, page)
            .await
    }

    async fn find_tasks_by_completed(
        &self,
        completed: bool,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        self.0.find_tasks_by_completed(completed, page).await
    }

    async fn find_tasks_due_before(
        &self,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        self.0.find_tasks_due_before(cutoff, page).await
    }

    async fn find_tasks(&self, page: &PageRequest) -> Result<Page<Task>, StorageError> {
        self.0.find_tasks(page).await
    }
}

#[async_trait]
impl StorageTx for WriteFailTx {
    async fn find_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<User>, StorageError> {
        self.0.find_user_by_username(username).await
    }

    async fn insert_user(&mut self, _user: NewUser) -> Result<User, StorageError> {
        Err(refused())
    }

    async fn save_user(&mut self, _user: &User) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn delete_user(&mut self, _user: &User) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn find_task_by_id(&mut self, id: i64) -> Result<Option<Task>, StorageError> {
        self.0.find_task_by_id(id).await
    }

    async fn insert_task(&mut self, _task: NewTask) -> Result<Task, StorageError> {
        Err(refused())
    }

    async fn save_task(&mut self, _task: &Task) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn delete_task(&mut self, _task: &Task) -> Result<(), StorageError> {
        Err(refused())
    }

    async fn commit(self) -> Result<(), StorageError> {
        Err(refused())
    }
}
