//! # Configuration Constants
//!
//! Centralized constants for the mesh pipeline. Domain sizes, sampling
//! defaults, logger defaults, file-format tags and default paths are
//! defined here.
//!
//! ## Categories
//!
//! - **Domain**: Meshing domain dimensions around the boundary point cloud
//! - **Sampling**: Surface sampling defaults
//! - **Logging**: Logger names, levels and format defaults
//! - **Formats**: File extensions and mesh file format tags
//! - **Paths**: Default script inputs and outputs

// =============================================================================
// DOMAIN CONSTANTS
// =============================================================================

/// Default width of the meshing domain around the boundary.
///
/// The padded rectangle produced by `bounding_box` is exactly this wide.
pub const DEFAULT_X_LENGTH: f64 = 250.0;

/// Default height of the meshing domain around the boundary.
///
/// The padded rectangle produced by `bounding_box` is exactly this tall.
pub const DEFAULT_Y_LENGTH: f64 = 100.0;

/// Gap kept between the lowest boundary point and the bottom edge of the
/// meshing domain.
///
/// # Example
///
/// ```rust
/// use config::constants::BOTTOM_MARGIN;
///
/// let ymin = 0.0;
/// let bottom = ymin - BOTTOM_MARGIN;
/// assert_eq!(bottom, -1.0);
/// ```
pub const BOTTOM_MARGIN: f64 = 1.0;

/// Name of the geometry model built by `gen_mesh`.
pub const DEFAULT_MODEL_NAME: &str = "my_model";

/// Topological dimension of the generated mesh.
pub const MESH_DIMENSION: u32 = 2;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Default number of points drawn from a mesh surface.
///
/// The per-face allocations are rounded independently, so the number of
/// points actually produced may differ slightly from this.
pub const DEFAULT_SAMPLE_POINTS: usize = 100_000;

// =============================================================================
// LOGGING CONSTANTS
// =============================================================================

/// Default logger name.
pub const DEFAULT_LOGGER_NAME: &str = "my_logger";

/// Default minimum log level name.
pub const DEFAULT_LOG_LEVEL: &str = "debug";

/// Default log file used by the file handler.
pub const DEFAULT_LOG_FILE: &str = "my_log.txt";

/// Default separator between the parts of a log line.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_LOG_JOIN;
///
/// let line = format!("INFO {} done", DEFAULT_LOG_JOIN);
/// assert_eq!(line, "INFO - done");
/// ```
pub const DEFAULT_LOG_JOIN: &str = "-";

/// Timestamp layout for log lines (`2024-01-31 12:00:00,123`).
pub const LOG_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

// =============================================================================
// FORMAT CONSTANTS
// =============================================================================

/// Extension of point cloud files.
pub const XYZ_EXTENSION: &str = "xyz";

/// Extension of OFF mesh files.
pub const OFF_EXTENSION: &str = "off";

/// Extension of OBJ mesh files.
pub const OBJ_EXTENSION: &str = "obj";

/// Extension of Gmsh mesh files.
pub const MSH_EXTENSION: &str = "msh";

/// Gmsh file format version written and accepted by the MSH codec.
pub const MSH_VERSION: &str = "2.2";

/// Size in bytes of the floating-point type recorded in the MSH header.
pub const MSH_DATA_SIZE: usize = 8;

// =============================================================================
// PATH CONSTANTS
// =============================================================================

/// Boundary point cloud read by `gen_mesh`.
pub const DEFAULT_BOUNDARY_FILE: &str = "../boundary.xyz";

/// Mesh file written by `gen_mesh`.
pub const DEFAULT_MSH_FILE: &str = "my_mesh.msh";

/// OBJ file written by `gen_mesh`.
pub const DEFAULT_OBJ_FILE: &str = "my_mesh.obj";

/// Mesh read by `sample_mesh`.
pub const DEFAULT_SAMPLE_INPUT: &str = "car/train/car_0001.off";

/// Point file written by `sample_mesh`.
pub const DEFAULT_SAMPLE_OUTPUT: &str = "points.xyz";

/// Mesh converted by `plot_fields`.
pub const DEFAULT_PLOT_MSH: &str = "../mesh.msh";

/// OBJ written and read by `plot_fields`.
pub const DEFAULT_PLOT_OBJ: &str = "../mesh.obj";

/// Results table read by `plot_fields`.
pub const DEFAULT_RESULTS_FILE: &str = "../result.csv";

/// Directory the colored meshes of `plot_fields` are written to.
pub const DEFAULT_PLOT_DIR: &str = "plots";

/// Name the plotted surface is registered under.
pub const PLOT_MESH_NAME: &str = "car";

/// Directory listed by `list_files`.
pub const DEFAULT_FILE_FOLDER: &str = "../src";
