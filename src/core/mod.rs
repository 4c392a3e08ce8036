//! Core module - Data model and serialization
//!
//! This module provides:
//! - The immutable per-run configuration
//! - Result model types (FileStructure, ProcessedFile, FlattenResult, CodebaseAnalysis)
//! - Language classification by extension
//! - Path normalization utilities
//! - Output serialization (XML / JSON / Markdown)

pub mod config;
pub mod error;
pub mod language;
pub mod model;
pub mod paths;
pub mod render;
