use crate::db::models::{Filter, Todo};
use crate::db::schema::SQLITE_INIT;
use crate::error::TodoError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct TodoStorage {
    pool: SqlitePool,
}

impl TodoStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open the database behind `database_url`, creating the file if it
    /// does not exist yet, and make sure the schema is in place.
    pub async fn connect(database_url: &str) -> Result<Self, TodoError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        let storage = Self::new(pool);
        storage.init_schema().await?;
        Ok(storage)
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), TodoError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub async fn list(&self, filter: Filter) -> Result<Vec<Todo>, TodoError> {
        let query = match filter {
            Filter::All => "SELECT id, title, completed FROM todos ORDER BY id",
            Filter::Active => {
                "SELECT id, title, completed FROM todos WHERE completed = 0 ORDER BY id"
            }
            Filter::Completed => {
                "SELECT id, title, completed FROM todos WHERE completed = 1 ORDER BY id"
            }
        };
        let todos = sqlx::query_as::<_, Todo>(query).fetch_all(&self.pool).await?;
        Ok(todos)
    }

    pub async fn count_active(&self) -> Result<i64, TodoError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM todos WHERE completed = 0")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    /// Insert a new row, not yet completed. Returns the stored todo with
    /// its assigned id.
    pub async fn insert(&self, title: &str) -> Result<Todo, TodoError> {
        let result = sqlx::query("INSERT INTO todos (title, completed) VALUES (?, 0)")
            .bind(title)
            .execute(&self.pool)
            .await?;
        Ok(Todo {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            completed: false,
        })
    }

    pub async fn get(&self, id: i64) -> Result<Todo, TodoError> {
        sqlx::query_as::<_, Todo>("SELECT id, title, completed FROM todos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(TodoError::NotFound(id))
    }

    pub async fn update_title(&self, id: i64, title: &str) -> Result<(), TodoError> {
        let result = sqlx::query("UPDATE todos SET title = ? WHERE id = ?")
            .bind(title)
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id));
        }
        Ok(())
    }

    /// Read the current flag and write its negation. Two round trips; a
    /// concurrent toggle of the same id may interleave between them.
    pub async fn toggle(&self, id: i64) -> Result<Todo, TodoError> {
        let current = self.get(id).await?;
        let completed = !current.completed;
        sqlx::query("UPDATE todos SET completed = ? WHERE id = ?")
            .bind(completed)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(Todo { completed, ..current })
    }

    pub async fn delete(&self, id: i64) -> Result<(), TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(TodoError::NotFound(id));
        }
        Ok(())
    }

    /// Bulk delete of completed rows. Returns how many were removed.
    pub async fn delete_completed(&self) -> Result<u64, TodoError> {
        let result = sqlx::query("DELETE FROM todos WHERE completed = 1")
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}
