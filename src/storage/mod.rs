//! Storage layer for promptq

pub mod db;
pub mod models;

pub use db::{Database, StoreError};
pub use models::*;
