//! Database operations for trips
//!
//! Every query except `trip_exists` is filtered by the owning user's ID, so
//! a trip owned by someone else behaves exactly like a missing one.

use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use uuid::Uuid;

use crate::backend::db::{Database, StoreError};
use crate::shared::{Trip, TripChanges};

fn trip_from_row(row: &SqliteRow) -> Result<Trip, sqlx::Error> {
    Ok(Trip {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        region: row.try_get("region")?,
        description: row.try_get("description")?,
        attractions: row.try_get("attractions")?,
        user_id: row.try_get("user_id")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

/// Insert a new trip
pub async fn insert_trip(db: &Database, trip: &Trip) -> Result<(), StoreError> {
    db.run(
        "trips.insert",
        sqlx::query(
            r#"
            INSERT INTO trips (id, user_id, name, category, region, description, attractions, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(trip.id)
        .bind(trip.user_id)
        .bind(&trip.name)
        .bind(&trip.category)
        .bind(&trip.region)
        .bind(&trip.description)
        .bind(&trip.attractions)
        .bind(trip.created_at)
        .bind(trip.updated_at)
        .execute(db.pool()),
    )
    .await?;

    Ok(())
}

/// Get all trips owned by a user, oldest first
pub async fn list_trips(db: &Database, user_id: Uuid) -> Result<Vec<Trip>, StoreError> {
    let rows = db
        .run(
            "trips.list",
            sqlx::query(
                r#"
                SELECT id, user_id, name, category, region, description, attractions, created_at, updated_at
                FROM trips
                WHERE user_id = ?
                ORDER BY created_at ASC
                "#,
            )
            .bind(user_id)
            .fetch_all(db.pool()),
        )
        .await?;

    rows.iter()
        .map(trip_from_row)
        .collect::<Result<_, _>>()
        .map_err(StoreError::from)
}

/// Get a trip by ID if the user owns it
pub async fn find_trip(db: &Database, user_id: Uuid, trip_id: Uuid) -> Result<Option<Trip>, StoreError> {
    let row = db
        .run(
            "trips.find",
            sqlx::query(
                r#"
                SELECT id, user_id, name, category, region, description, attractions, created_at, updated_at
                FROM trips
                WHERE id = ? AND user_id = ?
                "#,
            )
            .bind(trip_id)
            .bind(user_id)
            .fetch_optional(db.pool()),
        )
        .await?;

    row.as_ref()
        .map(trip_from_row)
        .transpose()
        .map_err(StoreError::from)
}

/// Whether a trip with this ID exists, whoever owns it
pub async fn trip_exists(db: &Database, trip_id: Uuid) -> Result<bool, StoreError> {
    let row = db
        .run(
            "trips.exists",
            sqlx::query("SELECT 1 FROM trips WHERE id = ?")
                .bind(trip_id)
                .fetch_optional(db.pool()),
        )
        .await?;

    Ok(row.is_some())
}

/// Apply changes to a trip the user owns and return the updated trip
///
/// Returns `None` when no owned trip matched.
pub async fn update_trip(
    db: &Database,
    user_id: Uuid,
    trip_id: Uuid,
    changes: &TripChanges,
) -> Result<Option<Trip>, StoreError> {
    let result = db
        .run(
            "trips.update",
            sqlx::query(
                r#"
                UPDATE trips
                SET name = COALESCE(?, name),
                    category = COALESCE(?, category),
                    region = COALESCE(?, region),
                    description = COALESCE(?, description),
                    attractions = COALESCE(?, attractions),
                    updated_at = ?
                WHERE id = ? AND user_id = ?
                "#,
            )
            .bind(changes.name.as_deref())
            .bind(changes.category.as_deref())
            .bind(changes.region.as_deref())
            .bind(changes.description.as_deref())
            .bind(changes.attractions.as_deref())
            .bind(Utc::now())
            .bind(trip_id)
            .bind(user_id)
            .execute(db.pool()),
        )
        .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    find_trip(db, user_id, trip_id).await
}

/// Delete a trip the user owns, along with its comments
///
/// Returns whether a trip was deleted.
pub async fn delete_trip(db: &Database, user_id: Uuid, trip_id: Uuid) -> Result<bool, StoreError> {
    let result = db
        .run(
            "trips.delete",
            sqlx::query("DELETE FROM trips WHERE id = ? AND user_id = ?")
                .bind(trip_id)
                .bind(user_id)
                .execute(db.pool()),
        )
        .await?;

    Ok(result.rows_affected() > 0)
}
