//! Core repository components
//!
//! - `database`: Loose object database (commit records)
//! - `refs`: Local branch references
//! - `repository`: Repository discovery and coordination

pub(crate) mod database;
pub(crate) mod refs;
pub mod repository;
