//! Software rasterizer rendered with half-block glyphs.
//!
//! Each terminal cell shows two stacked pixels: the upper one as the
//! foreground of `▀`, the lower one as its background.

use bluesky_analog::GraphicsContext;
use bluesky_core::{Angle, Color, Point, Rect};
use ratatui::{
    style::{self, Style},
    text::{Line, Span},
};

#[derive(Debug, Clone)]
pub struct PixelSurface {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
    /// Translation applied to every primitive.
    origin: Point,
    fill: Color,
    stroke: Color,
    stroke_width: u8,
    antialiased: bool,
}

impl Default for PixelSurface {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl PixelSurface {
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![Color::Clear; (width * height) as usize],
            origin: Point::default(),
            fill: Color::Clear,
            stroke: Color::Clear,
            stroke_width: 1,
            antialiased: false,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Resize and clear. Keeps the contents when the size is unchanged.
    pub fn resize(&mut self, width: i32, height: i32) {
        if width != self.width || height != self.height {
            *self = Self::new(width, height);
        }
    }

    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    /// Clear `rect` in surface coordinates.
    pub fn clear_rect(&mut self, rect: Rect) {
        for y in rect.origin.y..rect.origin.y + rect.size.h {
            for x in rect.origin.x..rect.origin.x + rect.size.w {
                self.set(x, y, Color::Clear);
            }
        }
    }

    /// Pixel at surface coordinates, or `None` when out of range.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn antialiased(&self) -> bool {
        self.antialiased
    }

    /// Terminal rows, two pixel rows per line.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height)
            .step_by(2)
            .map(|y| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let top = self.pixel(x, y).unwrap_or_default();
                        let bottom = self.pixel(x, y + 1).unwrap_or_default();
                        cell(top, bottom)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let bounds = Rect::new(0, 0, self.width, self.height);
        bounds
            .contains(Point::new(x, y))
            .then(|| (y * self.width + x) as usize)
    }

    fn set(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Plot in layer coordinates.
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        self.set(x + self.origin.x, y + self.origin.y, color);
    }

    /// Square pen of the current stroke width centered on `(x, y)`.
    fn stamp(&mut self, x: i32, y: i32) {
        let width = i32::from(self.stroke_width.max(1));
        let lo = -(width - 1) / 2;
        let hi = width / 2;
        for dy in lo..=hi {
            for dx in lo..=hi {
                self.plot(x + dx, y + dy, self.stroke);
            }
        }
    }
}

fn cell(top: Color, bottom: Color) -> Span<'static> {
    match (top.is_clear(), bottom.is_clear()) {
        (true, true) => Span::raw(" "),
        (true, false) => Span::styled("▄", Style::new().fg(style::Color::from(bottom))),
        _ => Span::styled(
            "▀",
            Style::new()
                .fg(style::Color::from(top))
                .bg(style::Color::from(bottom)),
        ),
    }
}

/// Whether `(dx, dy)` lies within the ellipse of radii `rx`, `ry`.
fn in_ellipse(dx: f64, dy: f64, rx: f64, ry: f64) -> bool {
    let rx = rx.max(0.5);
    let ry = ry.max(0.5);
    (dx / rx).powi(2) + (dy / ry).powi(2) <= 1.0
}

impl GraphicsContext for PixelSurface {
    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_stroke_width(&mut self, width: u8) {
        self.stroke_width = width;
    }

    fn set_antialiased(&mut self, enabled: bool) {
        // Cells are too coarse to blend; the flag is only recorded.
        self.antialiased = enabled;
    }

    fn fill_rect(&mut self, rect: Rect) {
        for y in rect.origin.y..rect.origin.y + rect.size.h {
            for x in rect.origin.x..rect.origin.x + rect.size.w {
                self.plot(x, y, self.fill);
            }
        }
    }

    fn fill_radial(&mut self, rect: Rect, inset: i32, start: Angle, end: Angle) {
        if rect.is_empty() || inset <= 0 {
            return;
        }
        let (cx, cy, rx, ry) = rect.ellipse();
        let inner_rx = rx - f64::from(inset);
        let inner_ry = ry - f64::from(inset);
        let has_hole = inner_rx > 0.0 && inner_ry > 0.0;
        let sweep = (end - start).raw();

        for y in rect.origin.y..rect.origin.y + rect.size.h {
            for x in rect.origin.x..rect.origin.x + rect.size.w {
                let dx = f64::from(x) - cx;
                let dy = f64::from(y) - cy;
                if !in_ellipse(dx, dy, rx, ry) {
                    continue;
                }
                if has_hole && in_ellipse(dx, dy, inner_rx - 0.5, inner_ry - 0.5) {
                    continue;
                }
                if sweep < Angle::FULL.raw() {
                    let offset = (Angle::of_vector(dx, dy) - start).normalized();
                    if offset.raw() > sweep {
                        continue;
                    }
                }
                self.plot(x, y, self.fill);
            }
        }
    }

    fn draw_line(&mut self, p0: Point, p1: Point) {
        let dx = p1.x - p0.x;
        let dy = p1.y - p0.y;
        let steps = dx.abs().max(dy.abs());
        if steps == 0 {
            self.stamp(p0.x, p0.y);
            return;
        }
        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            let x = f64::from(p0.x) + f64::from(dx) * t;
            let y = f64::from(p0.y) + f64::from(dy) * t;
            self.stamp(x.round() as i32, y.round() as i32);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: i32) {
        let r2 = radius * radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= r2 {
                    self.plot(center.x + dx, center.y + dy, self.fill);
                }
            }
        }
    }

    fn draw_circle(&mut self, center: Point, radius: i32) {
        let half = f64::from(self.stroke_width.max(1)) / 2.0;
        let reach = radius + i32::from(self.stroke_width);
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let distance = f64::from(dx * dx + dy * dy).sqrt();
                if (distance - f64::from(radius)).abs() <= half {
                    self.plot(center.x + dx, center.y + dy, self.stroke);
                }
            }
        }
    }
}
