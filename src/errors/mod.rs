//! Error types and diagnostic reporting.
//!
//! This module defines the diagnostics raised by every phase of the
//! pipeline. It includes:
//!
//! - The `Error` structure with line and location information
//! - Specific error variants for lexing, parsing, resolution and evaluation
//! - The `Reporter` collaborator that presents diagnostics

pub mod errors;
pub mod report;
