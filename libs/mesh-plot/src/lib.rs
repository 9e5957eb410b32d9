//! # Mesh Plot
//!
//! Solver result fields painted onto the generated mesh.
//!
//! ## Pipeline
//!
//! ```text
//! .msh ─ msh_to_obj ─→ .obj
//!   └─ read_msh ─→ SurfaceView "car" (node order)
//! .csv ─ ResultsTable ─→ p, sqrt(u^2+v^2), u, v ─→ scalar quantities (jet)
//!                                          export_ply ─→ car_<field>.ply
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mesh_plot::{plot_results, PlotPaths};
//!
//! let written = plot_results(&PlotPaths::default(), None)?;
//! println!("{} files", written.len());
//! # Ok::<(), mesh_plot::PlotError>(())
//! ```

pub mod colormap;
pub mod error;
pub mod table;
pub mod view;

use std::path::PathBuf;

use config::constants::{
    DEFAULT_PLOT_DIR, DEFAULT_PLOT_MSH, DEFAULT_PLOT_OBJ, DEFAULT_RESULTS_FILE, PLOT_MESH_NAME,
};
use mesh_gen::msh_to_obj;
use mesh_io::read_msh;
use mesh_log::Logger;

pub use colormap::Colormap;
pub use error::PlotError;
pub use table::{ResultsTable, FIELD_COLUMNS};
pub use view::{sanitize, DefinedOn, ScalarQuantity, SurfaceView};

/// Files touched by [`plot_results`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPaths {
    /// Mesh produced by the generator
    pub msh: PathBuf,
    /// Converted mesh
    pub obj: PathBuf,
    /// Solver results table
    pub results: PathBuf,
    /// Output directory for the colored meshes
    pub out_dir: PathBuf,
}

impl Default for PlotPaths {
    fn default() -> Self {
        Self {
            msh: DEFAULT_PLOT_MSH.into(),
            obj: DEFAULT_PLOT_OBJ.into(),
            results: DEFAULT_RESULTS_FILE.into(),
            out_dir: DEFAULT_PLOT_DIR.into(),
        }
    }
}

/// Converts the mesh, attaches the four result fields with the jet
/// colormap, and exports one colored mesh per field.
pub fn plot_results(paths: &PlotPaths, logger: Option<&Logger>) -> Result<Vec<PathBuf>, PlotError> {
    msh_to_obj(&paths.msh, &paths.obj, logger)?;
    // Result rows follow node order, which the OBJ loader does not keep
    let mesh = read_msh(&paths.msh)?.to_mesh()?;
    let table = ResultsTable::read_csv(&paths.results)?;

    let mut view = SurfaceView::register(PLOT_MESH_NAME, mesh);
    for (name, values) in table.fields()? {
        let quantity = view.add_scalar_quantity(name, values, Colormap::Jet)?;
        if let Some(logger) = logger {
            logger.debug(format!("add {} on {:?}", quantity.name, quantity.defined_on));
        }
    }

    let written = view.export_ply(&paths.out_dir)?;
    if let Some(logger) = logger {
        logger.info(format!(
            "plot {} fields to {}",
            written.len(),
            paths.out_dir.display()
        ));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::DVec3;
    use mesh_io::{write_msh, CellKind, MshMesh};

    #[test]
    fn test_plot_results_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let mut msh = MshMesh::new();
        for p in [DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y] {
            msh.add_node(p);
        }
        msh.add_cell(CellKind::Triangle, 1, vec![0, 1, 2]);
        msh.add_cell(CellKind::Triangle, 1, vec![0, 2, 3]);

        let paths = PlotPaths {
            msh: dir.path().join("mesh.msh"),
            obj: dir.path().join("mesh.obj"),
            results: dir.path().join("result.csv"),
            out_dir: dir.path().join("plots"),
        };
        write_msh(&paths.msh, &msh).unwrap();
        // One row per vertex
        std::fs::write(
            &paths.results,
            "x,y,z,p,U,u,v\n0,0,0,1,0,0,0\n1,0,0,2,5,3,4\n1,1,0,3,1,1,0\n0,1,0,4,1,0,1\n",
        )
        .unwrap();

        let logger = Logger::console("plot", mesh_log::Level::Critical);
        let written = plot_results(&paths, Some(&logger)).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(
            names,
            vec!["car_p.ply", "car_sqrt_u_2_v_2.ply", "car_u.ply", "car_v.ply"]
        );
        assert!(paths.obj.exists());
    }

    #[test]
    fn test_plot_results_rejects_wrong_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let mut msh = MshMesh::new();
        for p in [DVec3::ZERO, DVec3::X, DVec3::Y] {
            msh.add_node(p);
        }
        msh.add_cell(CellKind::Triangle, 1, vec![0, 1, 2]);

        let paths = PlotPaths {
            msh: dir.path().join("mesh.msh"),
            obj: dir.path().join("mesh.obj"),
            results: dir.path().join("result.csv"),
            out_dir: dir.path().join("plots"),
        };
        write_msh(&paths.msh, &msh).unwrap();
        std::fs::write(&paths.results, "a,b,c,p,U,u,v\n0,0,0,1,1,1,1\n0,0,0,1,1,1,1\n").unwrap();

        assert!(matches!(
            plot_results(&paths, None),
            Err(PlotError::LengthMismatch { len: 2, .. })
        ));
    }
}
