//! In-memory implementation of the storage contract.
//!
//! Backs the test suites and local demos with no database. Transactions
//! take a snapshot of the state on `begin` and swap it back in on `commit`,
//! so a dropped transaction discards its writes.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::{NewTask, NewUser, Task, User};
use crate::pagination::{Page, PageRequest};
use crate::storage::{Storage, StorageError, StorageTx};

#[derive(Clone, Default)]
pub struct MemoryStorage {
    state: Arc<Mutex<MemoryState>>,
}

#[derive(Clone, Default)]
struct MemoryState {
    users: BTreeMap<i64, User>,
    tasks: BTreeMap<i64, Task>,
    next_user_id: i64,
    next_task_id: i64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|_| StorageError("storage mutex poisoned".to_string()))
    }

    fn page_of(tasks: Vec<Task>, page: &PageRequest) -> Page<Task> {
        let total = tasks.len() as u64;
        let content = tasks
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.size as usize)
            .collect();
        Page::new(content, page, total)
    }
}

#[async_trait]
impl Storage for MemoryStorage {
    type Tx = MemoryTx;

    async fn begin(&self) -> Result<MemoryTx, StorageError> {
        let working = self.lock()?.clone();
        Ok(MemoryTx {
            shared: Arc::clone(&self.state),
            working,
        })
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, StorageError> {
        Ok(self.lock()?.tasks.get(&id).cloned())
    }

    async fn find_tasks_by_completed_and_due_before(
        &self,
        completed: bool,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        let matching = self
            .lock()?
            .tasks
            .values()
            .filter(|task| {
                task.completed == completed && task.due_date.is_some_and(|due| due <= cutoff)
            })
            .cloned()
            .collect();
        Ok(Self::page_of(matching, page))
    }

    async fn find_tasks_by_completed(
        &self,
        completed: bool,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        let matching = self
            .lock()?
            .tasks
            .values()
            .filter(|task| task.completed == completed)
            .cloned()
            .collect();
        Ok(Self::page_of(matching, page))
    }

    async fn find_tasks_due_before(
        &self,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        let matching = self
            .lock()?
            .tasks
            .values()
            .filter(|task| task.due_date.is_some_and(|due| due <= cutoff))
            .cloned()
            .collect();
        Ok(Self::page_of(matching, page))
    }

    async fn find_tasks(&self, page: &PageRequest) -> Result<Page<Task>, StorageError> {
        let all = self.lock()?.tasks.values().cloned().collect();
        Ok(Self::page_of(all, page))
    }
}

pub struct MemoryTx {
    shared: Arc<Mutex<MemoryState>>,
    working: MemoryState,
}

#[async_trait]
impl StorageTx for MemoryTx {
    async fn find_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<User>, StorageError> {
        Ok(self
            .working
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn insert_user(&mut self, user: NewUser) -> Result<User, StorageError> {
        if self
            .working
            .users
            .values()
            .any(|existing| existing.username == user.username)
        {
            return Err(StorageError(format!(
                "duplicate username '{}'",
                user.username
            )));
        }
        self.working.next_user_id += 1;
        let user = User {
            id: self.working.next_user_id,
            username: user.username,
            password: user.password,
            token: None,
        };
        self.working.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn save_user(&mut self, user: &User) -> Result<(), StorageError> {
        self.working.users.insert(user.id, user.clone());
        Ok(())
    }

    async fn delete_user(&mut self, user: &User) -> Result<(), StorageError> {
        self.working.users.remove(&user.id);
        Ok(())
    }

    async fn find_task_by_id(&mut self, id: i64) -> Result<Option<Task>, StorageError> {
        Ok(self.working.tasks.get(&id).cloned())
    }

    async fn insert_task(&mut self, task: NewTask) -> Result<Task, StorageError> {
        self.working.next_task_id += 1;
        let task = Task {
            id: self.working.next_task_id,
            name: task.name,
            description: task.description,
            completed: false,
            due_date: task.due_date,
            username: task.username,
        };
        self.working.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn save_task(&mut self, task: &Task) -> Result<(), StorageError> {
        self.working.tasks.insert(task.id, task.clone());
        Ok(())
    }

    async fn delete_task(&mut self, task: &Task) -> Result<(), StorageError> {
        self.working.tasks.remove(&task.id);
        Ok(())
    }

    async fn commit(self) -> Result<(), StorageError> {
        let mut shared = self
            .shared
            .lock()
            .map_err(|_| StorageError("storage mutex poisoned".to_string()))?;
        *shared = self.working;
        Ok(())
    }
}
