// ─────────────────────────────────────────────────────────────────────
// Matgeo Workbench — Raster Figure
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! World-coordinate drawing onto an RGB buffer, saved as PNG.

use std::path::Path;

use matgeo_types::error::{GeoError, GeoResult};
use matgeo_types::point::Point2;

use crate::config::{FigureConfig, Rgb};

/// A figure with a fixed world rectangle. Drawing ops take world
/// coordinates. Aspect ratio is not enforced; the rectangle is
/// stretched to the canvas minus margins.
pub struct Figure {
    cfg: FigureConfig,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    pixels: Vec<u8>, // RGB, row-major, top row first
}

impl Figure {
    /// New figure over the world rectangle `[x_min, x_max] × [y_min, y_max]`.
    ///
    /// DegenerateInput when the rectangle has no extent or the canvas is
    /// smaller than its margins.
    pub fn new(cfg: FigureConfig, x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> GeoResult<Self> {
        if !(x_max > x_min) || !(y_max > y_min) {
            return Err(GeoError::DegenerateInput(
                "world rectangle must have positive extent".into(),
            ));
        }
        if cfg.width <= 2 * cfg.margin || cfg.height <= 2 * cfg.margin {
            return Err(GeoError::DegenerateInput(
                "canvas smaller than its margins".into(),
            ));
        }
        let n = (cfg.width * cfg.height) as usize * 3;
        let mut pixels = vec![0u8; n];
        for px in pixels.chunks_exact_mut(3) {
            px.copy_from_slice(&cfg.background);
        }
        Ok(Figure {
            cfg,
            x_min,
            x_max,
            y_min,
            y_max,
            pixels,
        })
    }

    /// Figure sized to hold all of `points` with a 10 % world-space pad.
    pub fn around(cfg: FigureConfig, points: &[Point2]) -> GeoResult<Self> {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in points.iter().filter(|p| p.is_finite()) {
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(p.y);
            y_max = y_max.max(p.y);
        }
        if !x_min.is_finite() {
            return Err(GeoError::DegenerateInput("no finite points".into()));
        }
        let pad_x = 0.1 * (x_max - x_min).max(1e-6);
        let pad_y = 0.1 * (y_max - y_min).max(1e-6);
        Self::new(cfg, x_min - pad_x, x_max + pad_x, y_min - pad_y, y_max + pad_y)
    }

    pub fn config(&self) -> &FigureConfig {
        &self.cfg
    }

    /// World → pixel. y grows upward in world space, downward on the canvas.
    fn to_px(&self, p: Point2) -> (f64, f64) {
        let w = (self.cfg.width - 2 * self.cfg.margin) as f64;
        let h = (self.cfg.height - 2 * self.cfg.margin) as f64;
        let u = (p.x - self.x_min) / (self.x_max - self.x_min);
        let v = (p.y - self.y_min) / (self.y_max - self.y_min);
        (
            self.cfg.margin as f64 + u * w,
            self.cfg.margin as f64 + (1.0 - v) * h,
        )
    }

    fn put(&mut self, px: i64, py: i64, color: Rgb) {
        if px < 0 || py < 0 || px >= self.cfg.width as i64 || py >= self.cfg.height as i64 {
            return;
        }
        let idx = (py as usize * self.cfg.width as usize + px as usize) * 3;
        self.pixels[idx..idx + 3].copy_from_slice(&color);
    }

    fn pixel_at(&self, px: u32, py: u32) -> Rgb {
        let idx = (py as usize * self.cfg.width as usize + px as usize) * 3;
        [self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]]
    }

    /// Straight segment between two world points. NaN endpoints are skipped.
    pub fn segment(&mut self, a: Point2, b: Point2, color: Rgb) {
        if !a.is_finite() || !b.is_finite() {
            return;
        }
        let (x0, y0) = self.to_px(a);
        let (x1, y1) = self.to_px(b);
        let steps = ((x1 - x0).abs().max((y1 - y0).abs()).ceil() as usize).max(1);
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = x0 + t * (x1 - x0);
            let y = y0 + t * (y1 - y0);
            self.put(x.round() as i64, y.round() as i64, color);
        }
    }

    /// Connected polyline; non-finite vertices break the chain.
    pub fn polyline(&mut self, points: &[Point2], color: Rgb) {
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], color);
        }
    }

    /// Filled disc of `radius_px` pixels at a world point.
    pub fn marker(&mut self, p: Point2, radius_px: u32, color: Rgb) {
        if !p.is_finite() {
            return;
        }
        let (cx, cy) = self.to_px(p);
        let r = radius_px as i64;
        let (cx, cy) = (cx.round() as i64, cy.round() as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.put(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Filled polygon by even-odd scanline over pixel rows.
    pub fn polygon_fill(&mut self, vertices: &[Point2], color: Rgb) {
        if vertices.len() < 3 {
            return;
        }
        let px: Vec<(f64, f64)> = vertices.iter().map(|&v| self.to_px(v)).collect();
        let y_lo = px.iter().map(|p| p.1).fold(f64::INFINITY, f64::min).floor() as i64;
        let y_hi = px.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;

        for y in y_lo..=y_hi {
            let yc = y as f64 + 0.5;
            let mut crossings: Vec<f64> = Vec::new();
            for i in 0..px.len() {
                let (x0, y0) = px[i];
                let (x1, y1) = px[(i + 1) % px.len()];
                if (y0 <= yc && yc < y1) || (y1 <= yc && yc < y0) {
                    crossings.push(x0 + (yc - y0) / (y1 - y0) * (x1 - x0));
                }
            }
            crossings.sort_by(|a, b| a.total_cmp(b));
            for span in crossings.chunks_exact(2) {
                let x_start = span[0].round() as i64;
                let x_end = span[1].round() as i64;
                for x in x_start..=x_end {
                    self.put(x, y, color);
                }
            }
        }
    }

    /// Light grid at `grid_step` world spacing plus the two axes.
    ///
    /// A non-positive step, or one finer than a quarter-pixel of the
    /// larger canvas edge, draws no grid, only the axes. The cap keeps a
    /// config-supplied step from degenerating into millions of grid
    /// lines (and, below fp resolution, a non-advancing loop).
    pub fn grid_and_axes(&mut self) {
        let grid = self.cfg.grid_color;
        let axis = self.cfg.axis_color;
        let step = self.cfg.grid_step;
        let span = (self.x_max - self.x_min).max(self.y_max - self.y_min);
        let max_lines = 4.0 * self.cfg.width.max(self.cfg.height) as f64;
        if step > 0.0 && span / step <= max_lines {
            let mut x = (self.x_min / step).ceil() * step;
            while x <= self.x_max {
                self.segment(Point2::new(x, self.y_min), Point2::new(x, self.y_max), grid);
                x += step;
            }
            let mut y = (self.y_min / step).ceil() * step;
            while y <= self.y_max {
                self.segment(Point2::new(self.x_min, y), Point2::new(self.x_max, y), grid);
                y += step;
            }
        }
        if self.x_min <= 0.0 && 0.0 <= self.x_max {
            self.segment(Point2::new(0.0, self.y_min), Point2::new(0.0, self.y_max), axis);
        }
        if self.y_min <= 0.0 && 0.0 <= self.y_max {
            self.segment(Point2::new(self.x_min, 0.0), Point2::new(self.x_max, 0.0), axis);
        }
    }

    /// Write the buffer as an 8-bit RGB PNG.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> GeoResult<()> {
        if let Some(dir) = path.as_ref().parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }
        image::save_buffer(
            path.as_ref(),
            &self.pixels,
            self.cfg.width,
            self.cfg.height,
            image::ColorType::Rgb8,
        )
        .map_err(|e| GeoError::Render(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Figure {
        Figure::new(FigureConfig::square(100), -1.0, 1.0, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_new_starts_as_background() {
        let f = small();
        assert_eq!(f.pixel_at(50, 50), f.cfg.background);
        assert_eq!(f.pixel_at(0, 0), f.cfg.background);
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert!(Figure::new(FigureConfig::square(100), 1.0, 1.0, -1.0, 1.0).is_err());
        assert!(Figure::new(FigureConfig::square(100), -1.0, 1.0, 2.0, 1.0).is_err());
    }

    #[test]
    fn test_marker_paints_center() {
        let mut f = small();
        f.marker(Point2::ORIGIN, 2, [255, 0, 0]);
        let (cx, cy) = f.to_px(Point2::ORIGIN);
        assert_eq!(f.pixel_at(cx.round() as u32, cy.round() as u32), [255, 0, 0]);
    }

    #[test]
    fn test_segment_skips_nan() {
        let mut f = small();
        let before = f.pixels.clone();
        f.segment(Point2::new(f64::NAN, 0.0), Point2::new(0.5, 0.5), [0, 0, 255]);
        assert_eq!(f.pixels, before);
    }

    #[test]
    fn test_polygon_fill_covers_interior() {
        let mut f = small();
        f.polygon_fill(
            &[
                Point2::new(-0.8, -0.8),
                Point2::new(0.8, -0.8),
                Point2::new(0.8, 0.8),
                Point2::new(-0.8, 0.8),
            ],
            [0, 128, 0],
        );
        let (cx, cy) = f.to_px(Point2::ORIGIN);
        assert_eq!(f.pixel_at(cx.round() as u32, cy.round() as u32), [0, 128, 0]);
        // corners outside the square stay background
        assert_eq!(f.pixel_at(1, 1), f.cfg.background);
    }

    #[test]
    fn test_around_contains_all_points() {
        let pts = [
            Point2::new(-3.0, 2.0),
            Point2::new(4.0, -1.0),
            Point2::new(0.0, 5.0),
        ];
        let f = Figure::around(FigureConfig::default(), &pts).unwrap();
        for p in pts {
            let (x, y) = f.to_px(p);
            assert!(x >= 0.0 && x <= f.cfg.width as f64);
            assert!(y >= 0.0 && y <= f.cfg.height as f64);
        }
    }

    #[test]
    fn test_grid_step_below_resolution_draws_axes_only() {
        let mut cfg = FigureConfig::square(100);
        cfg.grid_step = 1e-300;
        let mut f = Figure::new(cfg, -1.0, 1.0, -1.0, 1.0).unwrap();
        f.grid_and_axes();
        let (cx, cy) = f.to_px(Point2::ORIGIN);
        assert_eq!(
            f.pixel_at(cx.round() as u32, cy.round() as u32),
            f.cfg.axis_color
        );
        // no grid line lands off-axis
        let (gx, gy) = f.to_px(Point2::new(0.5, 0.5));
        assert_eq!(
            f.pixel_at(gx.round() as u32, gy.round() as u32),
            f.cfg.background
        );
    }

    #[test]
    fn test_save_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fig.png");
        let mut f = small();
        f.grid_and_axes();
        f.save(&path).unwrap();
        assert!(path.exists());
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }
}
