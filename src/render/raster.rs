//! Pixmap-backed rendering surface saved as a PNG.

use std::path::Path;

use resvg::tiny_skia;
use resvg::usvg;

use crate::error::{Error, Result};
use crate::render::text::FontContext;
use crate::render::{Surface, TextExtents};

/// Grid-line stroke width in the raster output, in pixels.
const STROKE_WIDTH: f32 = 2.0;

/// Raster backend: draws onto an RGBA pixmap and encodes it as an RGB PNG.
///
/// Lines are stroked directly; labels are shaped by the text engine and
/// rasterized onto the pixmap at their translated baseline origin.
pub struct RasterSurface<'a> {
    pixmap: tiny_skia::Pixmap,
    fonts: &'a FontContext,
    font_size: f32,
}

impl<'a> RasterSurface<'a> {
    /// Allocate a white `width`×`height` canvas.
    pub fn new(width: u32, height: u32, fonts: &'a FontContext, font_size: f32) -> Result<Self> {
        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::RenderError(format!("cannot allocate a {}x{} canvas", width, height))
        })?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self {
            pixmap,
            fonts,
            font_size,
        })
    }
}

impl Surface for RasterSurface<'_> {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Result<()> {
        let mut pb = tiny_skia::PathBuilder::new();
        pb.move_to(x0, y0);
        pb.line_to(x1, y1);
        let path = pb
            .finish()
            .ok_or_else(|| Error::RenderError("degenerate grid line".into()))?;

        let mut paint = tiny_skia::Paint::default();
        paint.set_color(tiny_skia::Color::BLACK);
        paint.anti_alias = true;
        let stroke = tiny_skia::Stroke {
            width: STROKE_WIDTH,
            ..tiny_skia::Stroke::default()
        };
        self.pixmap.stroke_path(
            &path,
            &paint,
            &stroke,
            tiny_skia::Transform::identity(),
            None,
        );
        Ok(())
    }

    fn measure_text(&self, text: &str) -> Result<TextExtents> {
        self.fonts.measure(text, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<()> {
        let label = self.fonts.label_tree(text, self.font_size)?;
        let transform = usvg::Transform::from_translate(x - label.origin_x, y - label.origin_y);
        resvg::render(&label.tree, transform, &mut self.pixmap.as_mut());
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        let (width, height) = (self.pixmap.width(), self.pixmap.height());
        let img = image::RgbImage::from_raw(width, height, premul_to_rgb(&self.pixmap))
            .ok_or_else(|| Error::EncodeError("pixel buffer size mismatch".into()))?;
        img.save(path)
            .map_err(|e| Error::EncodeError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }
}

/// Convert the premultiplied pixmap to straight RGB rows.
///
/// The canvas is filled opaque white before any drawing, so fully
/// transparent pixels cannot normally occur; they fold into the
/// background color if they do.
fn premul_to_rgb(pixmap: &tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [255, 255, 255]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b]
            }
        })
        .collect()
}
