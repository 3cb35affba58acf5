//! Filled raster primitives on an RGBA buffer
//!
//! Every shape takes integer pixel coordinates with *inclusive* bounds: a
//! `Rect` from (2, 2) to (4, 4) covers a 3x3 block. Shapes overwrite the
//! pixels they cover and silently clip against the image edges, so callers
//! never need to check their geometry against the canvas.
use image::{Rgba, RgbaImage};

/// A pixel position; may lie outside the image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned box with inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect { left, top, right, bottom }
    }

    /// True if the box lies entirely inside a `width x height` image
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.left >= 0
            && self.top >= 0
            && self.left <= self.right
            && self.top <= self.bottom
            && (self.right as i64) < width as i64
            && (self.bottom as i64) < height as i64
    }

    /// Intersection with the image area, as unsigned pixel ranges
    fn clipped(&self, img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        let max_x = img.width() as i64 - 1;
        let max_y = img.height() as i64 - 1;

        let x0 = (self.left as i64).max(0);
        let y0 = (self.top as i64).max(0);
        let x1 = (self.right as i64).min(max_x);
        let y1 = (self.bottom as i64).min(max_y);

        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }
}

pub fn fill_rect(img: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = rect.clipped(img) else {
        return;
    };

    for py in y0..=y1 {
        for px in x0..=x1 {
            img.put_pixel(px, py, color);
        }
    }
}

/// Fill `rect` with quarter-circle corners of `radius`
///
/// The radius is clamped to half the shorter side. A radius of zero draws a
/// plain rectangle.
pub fn fill_rounded_rect(img: &mut RgbaImage, rect: Rect, radius: u32, color: Rgba<u8>) {
    let Some((x0, y0, x1, y1)) = rect.clipped(img) else {
        return;
    };

    let width = (rect.right - rect.left) as i64;
    let height = (rect.bottom - rect.top) as i64;
    let r = (radius as i64).min(width / 2).min(height / 2).max(0);
    let r_sq = r * r;

    // Corner circle centres
    let inner_left = rect.left as i64 + r;
    let inner_right = rect.right as i64 - r;
    let inner_top = rect.top as i64 + r;
    let inner_bottom = rect.bottom as i64 - r;

    for py in y0..=y1 {
        for px in x0..=x1 {
            let (x, y) = (px as i64, py as i64);

            let dx = if x < inner_left {
                inner_left - x
            } else if x > inner_right {
                x - inner_right
            } else {
                0
            };
            let dy = if y < inner_top {
                inner_top - y
            } else if y > inner_bottom {
                y - inner_bottom
            } else {
                0
            };

            if dx * dx + dy * dy <= r_sq {
                img.put_pixel(px, py, color);
            }
        }
    }
}

/// Fill the triangle spanned by `points`, edges included
pub fn fill_triangle(img: &mut RgbaImage, points: [Point; 3], color: Rgba<u8>) {
    let [a, b, c] = points;
    let bounds = Rect::new(
        a.x.min(b.x).min(c.x),
        a.y.min(b.y).min(c.y),
        a.x.max(b.x).max(c.x),
        a.y.max(b.y).max(c.y),
    );
    let Some((x0, y0, x1, y1)) = bounds.clipped(img) else {
        return;
    };

    for py in y0..=y1 {
        for px in x0..=x1 {
            if triangle_contains(points, Point::new(px as i32, py as i32)) {
                img.put_pixel(px, py, color);
            }
        }
    }
}

#[inline]
fn edge(a: Point, b: Point, p: Point) -> i64 {
    let (ax, ay) = (a.x as i64, a.y as i64);
    let (bx, by) = (b.x as i64, b.y as i64);
    let (px, py) = (p.x as i64, p.y as i64);
    (bx - ax) * (py - ay) - (by - ay) * (px - ax)
}

/// Point-in-triangle by edge signs; works for either winding
pub fn triangle_contains(points: [Point; 3], p: Point) -> bool {
    let [a, b, c] = points;
    let e1 = edge(a, b, p);
    let e2 = edge(b, c, p);
    let e3 = edge(c, a, p);

    let has_neg = e1 < 0 || e2 < 0 || e3 < 0;
    let has_pos = e1 > 0 || e2 > 0 || e3 > 0;
    !(has_neg && has_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);

    fn blank(size: u32) -> RgbaImage {
        RgbaImage::from_pixel(size, size, CLEAR)
    }

    fn filled_count(img: &RgbaImage) -> usize {
        img.pixels().filter(|p| p[3] != 0).count()
    }

    #[test]
    fn test_rect_bounds_are_inclusive() {
        let mut img = blank(8);
        fill_rect(&mut img, Rect::new(2, 2, 4, 4), RED);

        assert_eq!(filled_count(&img), 9);
        assert_eq!(*img.get_pixel(2, 2), RED);
        assert_eq!(*img.get_pixel(4, 4), RED);
        assert_eq!(*img.get_pixel(5, 4), CLEAR);
    }

    #[test]
    fn test_rect_clips_to_image() {
        let mut img = blank(4);
        fill_rect(&mut img, Rect::new(-3, -3, 1, 10), RED);

        // Columns 0..=1, all four rows
        assert_eq!(filled_count(&img), 8);
    }

    #[test]
    fn test_rect_entirely_outside_is_noop() {
        let mut img = blank(4);
        fill_rect(&mut img, Rect::new(10, 10, 12, 12), RED);
        fill_rect(&mut img, Rect::new(-5, 0, -1, 3), RED);
        assert_eq!(filled_count(&img), 0);
    }

    #[test]
    fn test_rounded_rect_cuts_corners() {
        let mut img = blank(20);
        fill_rounded_rect(&mut img, Rect::new(2, 2, 17, 17), 5, RED);

        assert_eq!(*img.get_pixel(2, 2), CLEAR);
        assert_eq!(*img.get_pixel(17, 17), CLEAR);
        assert_eq!(*img.get_pixel(17, 2), CLEAR);
        // Edge midpoints and centre are covered
        assert_eq!(*img.get_pixel(2, 10), RED);
        assert_eq!(*img.get_pixel(10, 2), RED);
        assert_eq!(*img.get_pixel(10, 10), RED);
    }

    #[test]
    fn test_rounded_rect_zero_radius_is_plain_rect() {
        let mut a = blank(10);
        let mut b = blank(10);
        fill_rounded_rect(&mut a, Rect::new(1, 2, 7, 8), 0, RED);
        fill_rect(&mut b, Rect::new(1, 2, 7, 8), RED);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rounded_rect_radius_is_clamped() {
        let mut img = blank(10);
        fill_rounded_rect(&mut img, Rect::new(0, 0, 9, 3), 100, RED);

        // Clamped to 1: the middle row spans the full width
        assert_eq!(*img.get_pixel(0, 1), RED);
        assert_eq!(*img.get_pixel(9, 1), RED);
        assert_eq!(*img.get_pixel(0, 0), CLEAR);
    }

    #[test]
    fn test_triangle_includes_vertices_and_edges() {
        let mut img = blank(16);
        let tri = [Point::new(8, 12), Point::new(4, 4), Point::new(12, 4)];
        fill_triangle(&mut img, tri, RED);

        for p in tri {
            assert_eq!(*img.get_pixel(p.x as u32, p.y as u32), RED);
        }
        // Back edge is fully drawn
        for x in 4..=12 {
            assert_eq!(*img.get_pixel(x, 4), RED);
        }
        assert_eq!(*img.get_pixel(4, 8), CLEAR);
        assert_eq!(*img.get_pixel(8, 13), CLEAR);
    }

    #[test]
    fn test_triangle_winding_does_not_matter() {
        let cw = [Point::new(0, 0), Point::new(6, 0), Point::new(3, 6)];
        let ccw = [Point::new(0, 0), Point::new(3, 6), Point::new(6, 0)];

        let mut a = blank(8);
        let mut b = blank(8);
        fill_triangle(&mut a, cw, RED);
        fill_triangle(&mut b, ccw, RED);
        assert_eq!(a, b);
        assert!(filled_count(&a) > 0);
    }

    #[test]
    fn test_fits_within() {
        assert!(Rect::new(0, 0, 15, 15).fits_within(16, 16));
        assert!(!Rect::new(0, 0, 16, 15).fits_within(16, 16));
        assert!(!Rect::new(-1, 0, 3, 3).fits_within(16, 16));
        assert!(!Rect::new(5, 0, 3, 3).fits_within(16, 16));
    }
}
