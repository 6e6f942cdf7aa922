//! Teams API Library
//!
//! REST backend for sports teams and their player rosters: domain rules,
//! repository ports, SQLite adapters and the axum HTTP layer.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
