//! Export icon renderer
//!
//! The glyph is a purple rounded badge carrying a white document with
//! purple "table row" lines, overlaid by a white downward export arrow.
//! All geometry is derived from the output size with truncating integer
//! division, so a given size always yields the same pixels.
use image::RgbaImage;

use crate::constants::palette::{BRAND_PURPLE, TRANSPARENT, WHITE};
use crate::constants::sizes::DETAIL_THRESHOLD;
use crate::draw::{self, Point, Rect};

/// Geometry of every shape in the icon for one output size
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconLayout {
    pub size: u32,
    pub badge: Rect,
    pub badge_radius: u32,
    pub document: Rect,
    pub document_radius: u32,
    /// Inset of the accent lines from the document edges
    pub line_inset: u32,
    pub line_thickness: u32,
    pub accent_lines: Vec<Rect>,
    pub arrow_shaft: Rect,
    /// Point first, then the two back corners
    pub arrow_head: [Point; 3],
}

impl IconLayout {
    pub fn for_size(size: u32) -> Self {
        let detailed = size >= DETAIL_THRESHOLD;

        // Badge
        let padding = size / 8;
        let badge = rect(padding, padding, size - padding, size - padding);
        let badge_radius = size / 6;

        // Document; height is size / 1.8 floored, kept exact in integers
        let doc_width = size / 2;
        let doc_height = size * 5 / 9;
        let doc_left = (size - doc_width) / 2;
        let doc_top = size / 4;
        let document = rect(doc_left, doc_top, doc_left + doc_width, doc_top + doc_height);
        let document_radius = size / 20;

        // Accent lines
        let line_inset = size / 10;
        let line_count: u32 = if detailed { 3 } else { 2 };
        let line_thickness: u32 = if detailed { 2 } else { 1 };
        let spacing = doc_height.saturating_sub(2 * line_inset) / (line_count + 1);
        let accent_lines = (0..line_count)
            .map(|i| {
                let y = doc_top + line_inset + (i + 1) * spacing;
                rect(
                    doc_left + line_inset,
                    y,
                    (doc_left + doc_width).saturating_sub(line_inset),
                    y + line_thickness - 1,
                )
            })
            .collect();

        // Export arrow
        let arrow_size = (size / 4) as i32;
        let arrow_x = (size / 2) as i32;
        let arrow_y = (size - size / 4) as i32;
        let half_width = if detailed { (size / 16) as i32 } else { 2 };

        let arrow_shaft = Rect::new(
            arrow_x - half_width,
            arrow_y - arrow_size / 2,
            arrow_x + half_width,
            arrow_y,
        );
        let head_back = arrow_size / 4;
        let arrow_head = [
            Point::new(arrow_x, arrow_y + half_width),
            Point::new(arrow_x - head_back, arrow_y - head_back),
            Point::new(arrow_x + head_back, arrow_y - head_back),
        ];

        IconLayout {
            size,
            badge,
            badge_radius,
            document,
            document_radius,
            line_inset,
            line_thickness,
            accent_lines,
            arrow_shaft,
            arrow_head,
        }
    }

    pub fn line_count(&self) -> usize {
        self.accent_lines.len()
    }

    /// True if no shape reaches past the canvas edge
    pub fn fits_canvas(&self) -> bool {
        let s = self.size;
        let head_bounds = Rect::new(
            self.arrow_head.iter().map(|p| p.x).min().unwrap_or(0),
            self.arrow_head.iter().map(|p| p.y).min().unwrap_or(0),
            self.arrow_head.iter().map(|p| p.x).max().unwrap_or(0),
            self.arrow_head.iter().map(|p| p.y).max().unwrap_or(0),
        );

        self.badge.fits_within(s, s)
            && self.document.fits_within(s, s)
            && self.accent_lines.iter().all(|l| l.fits_within(s, s))
            && self.arrow_shaft.fits_within(s, s)
            && head_bounds.fits_within(s, s)
    }
}

fn rect(left: u32, top: u32, right: u32, bottom: u32) -> Rect {
    Rect::new(left as i32, top as i32, right as i32, bottom as i32)
}

/// Render the icon at `size x size` on a transparent background
pub fn render(size: u32) -> RgbaImage {
    let layout = IconLayout::for_size(size);
    log::debug!("Icon layout for {}px: {:?}", size, layout);
    render_layout(&layout)
}

/// Paint a precomputed layout; later shapes overwrite earlier ones
pub fn render_layout(layout: &IconLayout) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(layout.size, layout.size, TRANSPARENT);

    draw::fill_rounded_rect(&mut img, layout.badge, layout.badge_radius, BRAND_PURPLE);
    draw::fill_rounded_rect(&mut img, layout.document, layout.document_radius, WHITE);

    for line in &layout.accent_lines {
        draw::fill_rect(&mut img, *line, BRAND_PURPLE);
    }

    draw::fill_rect(&mut img, layout.arrow_shaft, WHITE);
    draw::fill_triangle(&mut img, layout.arrow_head, WHITE);

    img
}
