//! Persistence layer.
//!
//! One SQLite file holds the `tasks` table. [`tasks::Tasks`] is the store;
//! [`migrations`] keeps older files compatible with the current schema.

/// Per-call connection opening.
pub mod db;

/// Ordered, idempotent schema steps for the `tasks` table.
pub mod migrations;

/// Task CRUD operations.
pub mod tasks;
