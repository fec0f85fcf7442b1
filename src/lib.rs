//! liftlog - Bilingual gym plan tracker
//!
//! Resolves free-text exercise names against a curated catalog, keeps
//! per-user weight logs and derives progression stats from them.

pub mod db;
pub mod exercises;
pub mod logs;
pub mod matcher;
pub mod plan;
pub mod progression;
pub mod tui;

pub use db::{Database, KeyValueStore, MemoryStore, StoreError};
pub use exercises::{CatalogEntry, Category, Language};
pub use logs::{LogCollection, LogEntry, LogStore, Scope};
pub use matcher::match_exercise;
pub use plan::{Plan, PlanDay, PlanExercise};
