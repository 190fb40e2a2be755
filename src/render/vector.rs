//! SVG document rendering surface.

use std::fs;
use std::path::Path;

use crate::render::text::FontContext;
use crate::render::{xml_escape, Surface, TextExtents};
use crate::Result;

/// Grid-line stroke width in the vector output, in points.
const STROKE_WIDTH: f32 = 1.5;

/// Vector backend: accumulates SVG elements and writes a standalone
/// single-page document sized to the same dimensions as the raster canvas.
pub struct SvgSurface<'a> {
    width: u32,
    height: u32,
    body: String,
    fonts: &'a FontContext,
    font_size: f32,
}

impl<'a> SvgSurface<'a> {
    /// Start a document of `width`×`height` with a white background.
    pub fn new(width: u32, height: u32, fonts: &'a FontContext, font_size: f32) -> Self {
        let mut body = String::new();
        body.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
            width, height
        ));
        Self {
            width,
            height,
            body,
            fonts,
            font_size,
        }
    }

    /// Serialize the accumulated document.
    fn document(&self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }
}

impl Surface for SvgSurface<'_> {
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32) -> Result<()> {
        self.body.push_str(&format!(
            "  <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"#000000\" stroke-width=\"{}\"/>\n",
            x0, y0, x1, y1, STROKE_WIDTH
        ));
        Ok(())
    }

    fn measure_text(&self, text: &str) -> Result<TextExtents> {
        self.fonts.measure(text, self.font_size)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) -> Result<()> {
        self.body.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-family=\"sans-serif\" font-weight=\"bold\" font-size=\"{}\" fill=\"#000000\">{}</text>\n",
            x,
            y,
            self.font_size,
            xml_escape(text)
        ));
        Ok(())
    }

    fn save(&mut self, path: &Path) -> Result<()> {
        fs::write(path, self.document())?;
        Ok(())
    }
}
