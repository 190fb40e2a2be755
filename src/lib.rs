//! Multiplication table renderer.
//!
//! Renders an n×n multiplication table as two artifacts with equivalent
//! visual content: a raster PNG and a vector SVG. Row 0 and column 0 of
//! the grid carry the header indices, the top-left corner a `*` marker,
//! and every other cell the product of its row and column index.
//!
//! Grid-line coordinates and cell labels are computed once by a shared
//! painter and replayed against two [`render::Surface`] backends, so the
//! artifacts cannot drift apart in content.
//!
//! # Example
//!
//! ```no_run
//! use timestable::{render_table, TableConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = TableConfig::new(9)?;
//! let artifacts = render_table(&config, std::path::Path::new("."))?;
//! println!("wrote {}", artifacts.png.display());
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use log::{debug, info};

pub mod error;
pub use error::{Error, Result};

pub mod grid;
pub mod render;

use render::painter::paint_table;
use render::raster::RasterSurface;
use render::text::FontContext;
use render::vector::SvgSurface;
use render::Surface;

/// Fixed name of the raster artifact.
pub const PNG_FILENAME: &str = "multiplication_table.png";

/// Fixed name of the vector artifact.
pub const SVG_FILENAME: &str = "multiplication_table.svg";

/// Largest accepted table size.
pub const MAX_TABLE_SIZE: u32 = 512;

/// Immutable per-run configuration, shared read-only by both passes.
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    /// Table size; the grid is `(n+1)` cells on a side, headers included.
    pub n: u32,
    /// Edge length of one square cell, in pixels/points.
    pub cell_size: u32,
    /// Font size for cell labels.
    pub font_size: f32,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            n: 0,
            cell_size: 80,
            font_size: 20.0,
        }
    }
}

impl TableConfig {
    /// Build a validated configuration for a table of size `n`.
    pub fn new(n: u32) -> Result<Self> {
        if n > MAX_TABLE_SIZE {
            return Err(Error::ConfigError(format!(
                "table size {} exceeds the maximum of {}",
                n, MAX_TABLE_SIZE
            )));
        }
        Ok(Self {
            n,
            ..Self::default()
        })
    }

    /// Number of cells on each side of the grid.
    pub fn dimension(&self) -> u32 {
        self.n + 1
    }

    /// Canvas edge length in pixels/points; the canvas is square.
    pub fn canvas_size(&self) -> u32 {
        self.cell_size * self.dimension()
    }
}

/// Paths of the artifacts written by [`render_table`].
#[derive(Debug, Clone)]
pub struct TableArtifacts {
    pub png: PathBuf,
    pub svg: PathBuf,
}

/// Render the raster artifact for `config` to `path`.
pub fn render_png(config: &TableConfig, path: &Path) -> Result<()> {
    let fonts = FontContext::new();
    let size = config.canvas_size();
    debug!(
        "rasterizing a {0}x{0} grid onto a {1}x{1} px canvas",
        config.dimension(),
        size
    );
    let mut surface = RasterSurface::new(size, size, &fonts, config.font_size)?;
    paint_table(config, &mut surface)?;
    surface.save(path)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Render the vector artifact for `config` to `path`.
pub fn render_svg(config: &TableConfig, path: &Path) -> Result<()> {
    let fonts = FontContext::new();
    let size = config.canvas_size();
    debug!(
        "building an SVG document for a {0}x{0} grid at {1}x{1}",
        config.dimension(),
        size
    );
    let mut surface = SvgSurface::new(size, size, &fonts, config.font_size);
    paint_table(config, &mut surface)?;
    surface.save(path)?;
    info!("wrote {}", path.display());
    Ok(())
}

/// Render both artifacts into `dir`, raster first, and return their paths.
///
/// The passes run sequentially and share nothing beyond the read-only
/// `config`; each builds its own font context.
pub fn render_table(config: &TableConfig, dir: &Path) -> Result<TableArtifacts> {
    let png = dir.join(PNG_FILENAME);
    render_png(config, &png)?;
    let svg = dir.join(SVG_FILENAME);
    render_svg(config, &svg)?;
    Ok(TableArtifacts { png, svg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TableConfig::default();
        assert_eq!(config.cell_size, 80);
        assert_eq!(config.font_size, 20.0);
    }

    #[test]
    fn canvas_spans_all_cells() {
        let config = TableConfig::new(3).unwrap();
        assert_eq!(config.dimension(), 4);
        assert_eq!(config.canvas_size(), 320);
    }

    #[test]
    fn zero_table_still_has_corner_cell() {
        let config = TableConfig::new(0).unwrap();
        assert_eq!(config.dimension(), 1);
        assert_eq!(config.canvas_size(), 80);
    }

    #[test]
    fn oversized_table_is_rejected() {
        assert!(TableConfig::new(MAX_TABLE_SIZE).is_ok());
        assert!(TableConfig::new(MAX_TABLE_SIZE + 1).is_err());
    }
}
