//! # Config Crate
//!
//! Centralized configuration constants for the mesh pipeline.
//! All magic numbers and default paths used by the pipeline crates are
//! defined here so the scripts and libraries agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_X_LENGTH, DEFAULT_Y_LENGTH, DEFAULT_SAMPLE_POINTS};
//!
//! // The meshing domain defaults to a 250 x 100 rectangle
//! assert_eq!(DEFAULT_X_LENGTH, 250.0);
//! assert_eq!(DEFAULT_Y_LENGTH, 100.0);
//!
//! // Mesh sampling draws 1e5 points unless told otherwise
//! assert_eq!(DEFAULT_SAMPLE_POINTS, 100_000);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Script Compatible**: Defaults match the paths the pipeline scripts have always used
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
