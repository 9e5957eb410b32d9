//! # XYZ Point Files
//!
//! Whitespace-separated point rows. Boundary clouds carry six columns
//! (`x y z r g b`); only the coordinates are kept. Sampled points are
//! written back with three columns.

use std::fmt;
use std::io::Write;
use std::path::Path;

use config::constants::XYZ_EXTENSION;
use glam::DVec3;
use mesh_log::Logger;

use crate::format::require_extension;
use crate::text::{content_lines, parse_token, read_text, write_text};
use crate::{IoError, PointCloud};

/// Reads a point cloud, keeping the first three columns of every row.
///
/// All rows must have the same number of columns, and at least three.
pub fn read_point_cloud(
    path: impl AsRef<Path>,
    logger: Option<&Logger>,
) -> Result<PointCloud, IoError> {
    let path = path.as_ref();
    let text = read_text(path)?;

    let mut points = Vec::new();
    let mut columns = None;
    for (line_no, line) in content_lines(&text) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 3 {
            return Err(IoError::parse(
                path,
                line_no,
                format!("expected at least 3 columns, found {}", tokens.len()),
            ));
        }
        match columns {
            None => columns = Some(tokens.len()),
            Some(n) if n != tokens.len() => {
                return Err(IoError::parse(
                    path,
                    line_no,
                    format!("expected {} columns, found {}", n, tokens.len()),
                ));
            }
            Some(_) => {}
        }

        let mut values = [0.0; 3];
        for (value, token) in values.iter_mut().zip(&tokens) {
            *value = parse_token(token, path, line_no, "a coordinate")?;
        }
        // Remaining columns are colors; they must still be numeric
        for token in &tokens[3..] {
            parse_token::<f64>(token, path, line_no, "a number")?;
        }
        points.push(DVec3::from_array(values));
    }

    if let Some(logger) = logger {
        logger.info(format!("read point cloud from {} successfully!", path.display()));
    }
    Ok(PointCloud::new(points))
}

/// `{:.18e}` with a signed, two-digit exponent: `1.5` → `1.500000000000000000e+00`.
struct Sci(f64);

impl fmt::Display for Sci {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.18e}", self.0);
        match text.split_once('e') {
            Some((mantissa, exp)) => {
                let (sign, digits) = match exp.strip_prefix('-') {
                    Some(digits) => ('-', digits),
                    None => ('+', exp),
                };
                write!(f, "{}e{}{:0>2}", mantissa, sign, digits)
            }
            // inf and NaN
            None => f.write_str(&text),
        }
    }
}

/// Writes one point per line as three scientific-notation columns.
///
/// The path must end in `.xyz`.
pub fn save_xyz(
    path: impl AsRef<Path>,
    points: &[DVec3],
    logger: Option<&Logger>,
) -> Result<(), IoError> {
    let path = path.as_ref();
    require_extension(path, XYZ_EXTENSION, logger)?;

    write_text(path, |w| {
        for p in points {
            writeln!(w, "{} {} {}", Sci(p.x), Sci(p.y), Sci(p.z))?;
        }
        Ok(())
    })?;

    if let Some(logger) = logger {
        logger.info(format!("points are saved to {}", path.display()));
    }
    Ok(())
}
