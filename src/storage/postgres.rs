//! Postgres implementation of the storage contract over `sqlx`.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::{PgPool, Postgres, Transaction};

use crate::models::{NewTask, NewUser, Task, User};
use crate::pagination::{Page, PageRequest};
use crate::storage::{Storage, StorageError, StorageTx};

const TASK_COLUMNS: &str = "id, name, description, completed, due_date, username";

#[derive(Clone)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Storage for PgStorage {
    type Tx = PgTx;

    async fn begin(&self) -> Result<PgTx, StorageError> {
        let tx = self.pool.begin().await?;
        Ok(PgTx { tx })
    }

    async fn find_task_by_id(&self, id: i64) -> Result<Option<Task>, StorageError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(task)
    }

    async fn find_tasks_by_completed_and_due_before(
        &self,
        completed: bool,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        let content = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE completed = $1 AND due_date <= $2 \
             ORDER BY id LIMIT $3 OFFSET $4",
            TASK_COLUMNS
        ))
        .bind(completed)
        .bind(cutoff)
        .bind(i64::from(page.size))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM tasks WHERE completed = $1 AND due_date <= $2",
        )
        .bind(completed)
        .bind(cutoff)
        .fetch_one(&self.pool)
        .await?;

        Ok(Page::new(content, page, total as u64))
    }

    async fn find_tasks_by_completed(
        &self,
        completed: bool,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        let content = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE completed = $1 ORDER BY id LIMIT $2 OFFSET $3",
            TASK_COLUMNS
        ))
        .bind(completed)
        .bind(i64::from(page.size))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE completed = $1")
            .bind(completed)
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(content, page, total as u64))
    }

    async fn find_tasks_due_before(
        &self,
        cutoff: NaiveDate,
        page: &PageRequest,
    ) -> Result<Page<Task>, StorageError> {
        let content = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE due_date <= $1 ORDER BY id LIMIT $2 OFFSET $3",
            TASK_COLUMNS
        ))
        .bind(cutoff)
        .bind(i64::from(page.size))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks WHERE due_date <= $1")
            .bind(cutoff)
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(content, page, total as u64))
    }

    async fn find_tasks(&self, page: &PageRequest) -> Result<Page<Task>, StorageError> {
        let content = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks ORDER BY id LIMIT $1 OFFSET $2",
            TASK_COLUMNS
        ))
        .bind(i64::from(page.size))
        .bind(i64::from(page.offset()))
        .fetch_all(&self.pool)
        .await?;

        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tasks")
            .fetch_one(&self.pool)
            .await?;

        Ok(Page::new(content, page, total as u64))
    }
}

pub struct PgTx {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl StorageTx for PgTx {
    async fn find_user_by_username(
        &mut self,
        username: &str,
    ) -> Result<Option<User>, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password, token FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(user)
    }

    async fn insert_user(&mut self, user: NewUser) -> Result<User, StorageError> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password) VALUES ($1, $2) \
             RETURNING id, username, password, token",
        )
        .bind(user.username)
        .bind(user.password)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(user)
    }

    async fn save_user(&mut self, user: &User) -> Result<(), StorageError> {
        sqlx::query("UPDATE users SET password = $2, token = $3 WHERE id = $1")
            .bind(user.id)
            .bind(&user.password)
            .bind(&user.token)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn delete_user(&mut self, user: &User) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user.id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn find_task_by_id(&mut self, id: i64) -> Result<Option<Task>, StorageError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "SELECT {} FROM tasks WHERE id = $1",
            TASK_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;
        Ok(task)
    }

    async fn insert_task(&mut self, task: NewTask) -> Result<Task, StorageError> {
        let task = sqlx::query_as::<_, Task>(&format!(
            "INSERT INTO tasks (name, description, due_date, username) \
             VALUES ($1, $2, $3, $4) RETURNING {}",
            TASK_COLUMNS
        ))
        .bind(task.name)
        .bind(task.description)
        .bind(task.due_date)
        .bind(task.username)
        .fetch_one(&mut *self.tx)
        .await?;
        Ok(task)
    }

    async fn save_task(&mut self, task: &Task) -> Result<(), StorageError> {
        sqlx::query(
            "UPDATE tasks SET name = $2, description = $3, completed = $4, due_date = $5 \
             WHERE id = $1",
        )
        .bind(task.id)
        .bind(&task.name)
        .bind(&task.description)
        .bind(task.completed)
        .bind(task.due_date)
        .execute(&mut *self.tx)
        .await?;
        Ok(())
    }

    async fn delete_task(&mut self, task: &Task) -> Result<(), StorageError> {
        sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(task.id)
            .execute(&mut *self.tx)
            .await?;
        Ok(())
    }

    async fn commit(self) -> Result<(), StorageError> {
        self.tx.commit().await?;
        Ok(())
    }
}
