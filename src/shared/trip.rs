//! Trip Data Structures
//!
//! Represents a planned trip and the request bodies used to create and
//! edit one. Every trip belongs to exactly one user through `user_id`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::{require_non_empty, SharedError};

/// A trip owned by a single user
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    /// Unique trip ID
    pub id: Uuid,
    /// Display name of the trip
    pub name: String,
    /// Free-form category (e.g. "hiking", "city break")
    pub category: String,
    /// Region the trip takes place in
    pub region: String,
    /// Longer description
    pub description: String,
    /// Attractions the user wants to visit
    pub attractions: String,
    /// The user who owns this trip
    pub user_id: Uuid,
    /// When the trip was created
    pub created_at: DateTime<Utc>,
    /// When the trip was last changed
    pub updated_at: DateTime<Utc>,
}

impl Trip {
    /// Build a new trip for `user_id` from a validated create request
    pub fn new(user_id: Uuid, request: CreateTripRequest) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: request.name,
            category: request.category,
            region: request.region,
            description: request.description,
            attractions: request.attractions,
            user_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Body of `POST /trips`
///
/// Only `name` is required; the remaining fields default to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateTripRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub attractions: String,
}

impl CreateTripRequest {
    pub fn validate(&self) -> Result<(), SharedError> {
        require_non_empty("name", &self.name)
    }
}

/// Body of `PUT /trips/{id}`
///
/// Empty or missing fields are left untouched on the stored trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateTripRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attractions: Option<String>,
}

/// Set of column changes extracted from an update request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TripChanges {
    pub name: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub description: Option<String>,
    pub attractions: Option<String>,
}

impl TripChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.category.is_none()
            && self.region.is_none()
            && self.description.is_none()
            && self.attractions.is_none()
    }
}

impl UpdateTripRequest {
    /// Keep only the non-empty fields
    ///
    /// Fails when nothing would change.
    pub fn into_changes(self) -> Result<TripChanges, SharedError> {
        fn keep(value: Option<String>) -> Option<String> {
            value.filter(|v| !v.is_empty())
        }

        let changes = TripChanges {
            name: keep(self.name),
            category: keep(self.category),
            region: keep(self.region),
            description: keep(self.description),
            attractions: keep(self.attractions),
        };

        if changes.is_empty() {
            return Err(SharedError::validation("body", "No fields to update"));
        }
        Ok(changes)
    }
}
