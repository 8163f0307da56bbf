//! Comments Module
//!
//! This module handles comments attached to trips.

pub mod db;
pub mod handlers;

pub use handlers::*;
