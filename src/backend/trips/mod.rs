//! Trips Module
//!
//! This module handles creating, reading, updating and deleting trips.
//! A trip is visible only to the user who created it.

pub mod db;
pub mod handlers;

pub use handlers::*;
