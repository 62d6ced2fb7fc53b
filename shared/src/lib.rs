//! Shared types for the Parish church-management system
//!
//! Common types used across the workspace: domain models, the unified
//! error system, and small utilities.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
