//! MySQL implementation of the PostRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ch_core::domain::entities::post::{NewPost, Post};
use ch_core::errors::DomainError;
use ch_core::repositories::PostRepository;

/// MySQL implementation of PostRepository
pub struct MySqlPostRepository {
    pool: MySqlPool,
}

impl MySqlPostRepository {
    /// Create a new MySQL post repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Post entity
    fn row_to_post(row: &sqlx::mysql::MySqlRow) -> Result<Post, DomainError> {
        Ok(Post {
            id: get(row, "id")?,
            tailleur_id: get(row, "tailleur_id")?,
            title: get(row, "title")?,
            content: get(row, "content")?,
            files: get(row, "files")?,
            count: get::<u32>(row, "count")?,
            categorie: get(row, "categorie")?,
            state: get(row, "state")?,
            share_nb: get(row, "share_nb")?,
            view_nb: get(row, "view_nb")?,
            created_at: get::<DateTime<Utc>>(row, "created_at")?,
            updated_at: get::<DateTime<Utc>>(row, "updated_at")?,
        })
    }
}

#[async_trait]
impl PostRepository for MySqlPostRepository {
    async fn count_free_in_window(
        &self,
        tailleur_id: i64,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<u64, DomainError> {
        let query = r#"
            SELECT COUNT(*) AS free_posts
            FROM posts
            WHERE tailleur_id = ?
              AND `count` = 0
              AND created_at >= ?
              AND created_at <= ?
        "#;

        let row = sqlx::query(query)
            .bind(tailleur_id)
            .bind(start)
            .bind(end)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Post count query failed: {}", e),
            })?;

        let count: i64 = get(&row, "free_posts")?;
        Ok(count.max(0) as u64)
    }

    async fn create(&self, draft: NewPost) -> Result<Post, DomainError> {
        let now = Utc::now();
        let query = r#"
            INSERT INTO posts (
                tailleur_id, title, content, files, `count`,
                categorie, state, share_nb, view_nb,
                created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, 0, 0, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(draft.tailleur_id)
            .bind(&draft.title)
            .bind(&draft.content)
            .bind(&draft.files)
            .bind(draft.count)
            .bind(&draft.categorie)
            .bind(&draft.state)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to create post: {}", e),
            })?;

        Ok(Post {
            id: result.last_insert_id() as i64,
            tailleur_id: draft.tailleur_id,
            title: draft.title,
            content: draft.content,
            files: draft.files,
            count: draft.count,
            categorie: draft.categorie,
            state: draft.state,
            share_nb: 0,
            view_nb: 0,
            created_at: now,
            updated_at: now,
        })
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let query = r#"
            SELECT id, tailleur_id, title, content, files, `count`,
                   categorie, state, share_nb, view_nb,
                   created_at, updated_at
            FROM posts
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Database query failed: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_post(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, post: Post) -> Result<Post, DomainError> {
        let query = r#"
            UPDATE posts SET
                title = ?,
                content = ?,
                updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&post.title)
            .bind(&post.content)
            .bind(post.updated_at)
            .bind(post.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to update post: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("post"));
        }
        Ok(post)
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Database {
                message: format!("Failed to delete post: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}

fn get<'r, T>(row: &'r sqlx::mysql::MySqlRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::MySql> + sqlx::Type<sqlx::MySql>,
{
    row.try_get(column).map_err(|e| DomainError::Database {
        message: format!("Failed to get {}: {}", column, e),
    })
}
