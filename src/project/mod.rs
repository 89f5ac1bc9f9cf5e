//! Projection module.
//!
//! This module handles column projection:
//! - Columns: The validated set of column names to retain
//! - Pipeline: Streaming reader-to-writer projection

pub mod columns;
pub mod pipeline;

pub use columns::ColumnSet;
pub use pipeline::*;
