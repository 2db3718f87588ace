//! Domain DTOs for the students API.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// Server-assigned student identifier.
pub type StudentId = i64;

/// A single student record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    /// Older records (and some fixtures) omit the creator.
    #[serde(default)]
    pub created_by: i64,
}

/// Request payload for both create and update. The server accepts partial
/// bodies on update, but the screen always sends every field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StudentInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub age: u32,
    pub created_by: i64,
}
