//! Backend-independent painting of the table.

use crate::grid::cell_label;
use crate::render::Surface;
use crate::{Result, TableConfig};

/// Paint the full table onto `surface`: the ruled grid first, then every
/// cell label centered inside its cell using the backend's text metrics.
///
/// Centering subtracts the bearings reported by `measure_text`, so glyph
/// ink lands centered regardless of the font's internal offsets.
pub fn paint_table<S: Surface>(config: &TableConfig, surface: &mut S) -> Result<()> {
    let cell = config.cell_size as f32;
    let span = config.canvas_size() as f32;

    // (n+1) lines in each direction, at multiples of the cell size
    for k in 0..config.dimension() {
        let offset = k as f32 * cell;
        surface.draw_line(offset, 0.0, offset, span)?;
        surface.draw_line(0.0, offset, span, offset)?;
    }

    for i in 0..config.dimension() {
        for j in 0..config.dimension() {
            let label = cell_label(i, j);
            let ext = surface.measure_text(&label)?;
            let x = j as f32 * cell + (cell - ext.width) / 2.0 - ext.x_bearing;
            let y = i as f32 * cell + (cell - ext.height) / 2.0 - ext.y_bearing;
            surface.draw_text(&label, x, y)?;
        }
    }

    Ok(())
}
