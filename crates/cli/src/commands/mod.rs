//! CLI command implementations.

pub mod check;
pub mod export;
pub mod find;
pub mod ids;
pub mod library;
pub mod payload;
pub mod show;
