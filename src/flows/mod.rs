//! Flows module - Multi-step operations over a directory tree
//!
//! Provides:
//! - transform: per-file content transforms (comment stripping, minify)
//! - flatten: the full scan → read → serialize-ready pipeline
//! - analyze: independent codebase metrics walk

pub mod analyze;
pub mod flatten;
pub mod transform;
