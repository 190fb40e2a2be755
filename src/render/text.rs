//! Text shaping and measurement on top of the SVG text engine.
//!
//! Labels are shaped by parsing a minimal single-`<text>` document with
//! the system font database loaded, which yields both a renderable tree
//! (used by the raster backend) and cairo-style ink extents (used by both
//! backends to center labels inside their cells).

use resvg::usvg;

use crate::error::{Error, Result};
use crate::render::{xml_escape, TextExtents};

/// Font family requested for all labels; resolved against the system
/// font database by the text engine.
const FONT_FAMILY: &str = "sans-serif";

/// A shaped label, ready to rasterize.
///
/// The text baseline starts at `(origin_x, origin_y)` in the tree's own
/// coordinate space; callers translate by the difference to place it.
pub(crate) struct LabelTree {
    pub tree: usvg::Tree,
    pub origin_x: f32,
    pub origin_y: f32,
}

/// Shared font database and parsing options for one rendering pass.
pub struct FontContext {
    options: usvg::Options<'static>,
}

impl FontContext {
    /// Load the system fonts once for the lifetime of this context.
    pub fn new() -> Self {
        let mut options = usvg::Options::default();
        options.fontdb_mut().load_system_fonts();
        Self { options }
    }

    /// Shape `text` at `font_size` into a renderable tree.
    pub(crate) fn label_tree(&self, text: &str, font_size: f32) -> Result<LabelTree> {
        // Generous margins keep ascenders and bearings inside the viewport
        // regardless of which concrete font the family resolves to.
        let margin = (font_size * 2.0).ceil();
        let width = margin * 2.0 + (text.len() as f32 + 1.0) * font_size * 2.0;
        let height = margin * 2.0;
        let svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}"><text x="{x}" y="{y}" font-family="{family}" font-weight="bold" font-size="{size}">{body}</text></svg>"#,
            w = width,
            h = height,
            x = margin,
            y = margin,
            family = FONT_FAMILY,
            size = font_size,
            body = xml_escape(text),
        );
        let tree = usvg::Tree::from_str(&svg, &self.options)
            .map_err(|e| Error::FontError(format!("failed to shape '{}': {}", text, e)))?;
        Ok(LabelTree {
            tree,
            origin_x: margin,
            origin_y: margin,
        })
    }

    /// Measure the ink extents of `text` at `font_size`.
    pub fn measure(&self, text: &str, font_size: f32) -> Result<TextExtents> {
        let label = self.label_tree(text, font_size)?;
        let bbox = label.tree.root().bounding_box();
        if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return Err(Error::FontError(format!(
                "no glyphs produced for '{}'; is a {} font installed?",
                text, FONT_FAMILY
            )));
        }
        Ok(TextExtents {
            width: bbox.width(),
            height: bbox.height(),
            x_bearing: bbox.left() - label.origin_x,
            y_bearing: bbox.top() - label.origin_y,
        })
    }
}

impl Default for FontContext {
    fn default() -> Self {
        Self::new()
    }
}
