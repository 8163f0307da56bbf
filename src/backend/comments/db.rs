//! Database operations for comments
//!
//! Reads are scoped by trip only; writes are also scoped by author.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use crate::backend::db::{Database, StoreError};
use crate::shared::Comment;

fn comment_from_row(row: &SqliteRow) -> Result<Comment, sqlx::Error> {
    Ok(Comment {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        trip_id: row.try_get("trip_id")?,
        content: row.try_get("content")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Insert a new comment
pub async fn insert_comment(db: &Database, comment: &Comment) -> Result<(), StoreError> {
    db.run(
        "comments.insert",
        sqlx::query(
            r#"
            INSERT INTO comments (id, trip_id, user_id, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(comment.id)
        .bind(comment.trip_id)
        .bind(comment.user_id)
        .bind(&comment.content)
        .bind(comment.created_at)
        .bind(comment.updated_at)
        .execute(db.pool()),
    )
    .await?;

    Ok(())
}

/// Get all comments on a trip, oldest first
pub async fn list_comments(db: &Database, trip_id: Uuid) -> Result<Vec<Comment>, StoreError> {
    let rows = db
        .run(
            "comments.list",
            sqlx::query(
                r#"
                SELECT id, trip_id, user_id, content, created_at, updated_at
                FROM comments
                WHERE trip_id = ?
                ORDER BY created_at ASC
                "#,
            )
            .bind(trip_id)
            .fetch_all(db.pool()),
        )
        .await?;

    rows.iter()
        .map(comment_from_row)
        .collect::<Result<_, _>>()
        .map_err(StoreError::from)
}

/// Get a comment by trip and comment ID
pub async fn find_comment(db: &Database, trip_id: Uuid, comment_id: Uuid) -> Result<Option<Comment>, StoreError> {
    let row = db
        .run(
            "comments.find",
            sqlx::query(
                r#"
                SELECT id, trip_id, user_id, content, created_at, updated_at
                FROM comments
                WHERE id = ? AND trip_id = ?
                "#,
            )
            .bind(comment_id)
            .bind(trip_id)
            .fetch_optional(db.pool()),
        )
        .await?;

    row.as_ref()
        .map(comment_from_row)
        .transpose()
        .map_err(StoreError::from)
}

/// Replace the content of a comment the user wrote
///
/// Returns `None` when no comment by this author matched.
pub async fn update_comment(
    db: &Database,
    user_id: Uuid,
    trip_id: Uuid,
    comment_id: Uuid,
    content: &str,
) -> Result<Option<Comment>, StoreError> {
    let result = db
        .run(
            "comments.update",
            sqlx::query(
                r#"
                UPDATE comments
                SET content = ?, updated_at = ?
                WHERE id = ? AND trip_id = ? AND user_id = ?
                "#,
            )
            .bind(content)
            .bind(Utc::now())
            .bind(comment_id)
            .bind(trip_id)
            .bind(user_id)
            .execute(db.pool()),
        )
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find_comment(db, trip_id, comment_id).await
}

/// Delete a comment the user wrote
///
/// Returns whether a comment was deleted.
pub async fn delete_comment(
    db: &Database,
    user_id: Uuid,
    trip_id: Uuid,
    comment_id: Uuid,
) -> Result<bool, StoreError> {
    let result = db
        .run(
            "comments.delete",
            sqlx::query("DELETE FROM comments WHERE id = ? AND trip_id = ? AND user_id = ?")
                .bind(comment_id)
                .bind(trip_id)
                .bind(user_id)
                .execute(db.pool()),
        )
        .await?;

    Ok(result.rows_affected() > 0)
}
