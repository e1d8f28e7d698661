//! Common types and utilities for the jspector source rewriter.
//!
//! This crate provides foundational types used across all jspector crates:
//! - Source spans (`Span`)
//! - Line/column mapping (`LineMap`, `Position`)
//! - Recursion limits shared by the parser and the printer

// Span - Source location tracking (byte offsets)
pub mod span;
pub use span::Span;

// Position types for line/column source locations
pub mod position;
pub use position::{LineMap, Position};

// Centralized limits
pub mod limits;
