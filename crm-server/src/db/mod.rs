//! Database layer - connection pool, migrations and repositories
//!
//! - Connection pool (max 5 connections by default)
//! - Repository traits so handlers can run against an in-memory store
//! - No transactions: each write commits on its own

pub mod memory;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use repos::*;
