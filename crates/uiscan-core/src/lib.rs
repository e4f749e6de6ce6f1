//! # uiscan-core
//!
//! Core types for uiscan.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other uiscan crates. It provides:
//!
//! - Geometry types (Point, BoundingBox)
//! - Element types (ElementKind, DetectedElement)
//! - Detection settings
//! - Error types
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other uiscan crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Re-export all modules
pub mod config;
pub mod element;
pub mod error;
pub mod geometry;

// Re-export commonly used types
pub use config::{DetectionSettings, EdgeScanSettings, FusionSettings, SymbolSettings};
pub use element::{DetectedElement, ElementKind};
pub use error::{Error, Result};
pub use geometry::{BoundingBox, Point};
