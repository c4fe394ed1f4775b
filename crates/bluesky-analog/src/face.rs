//! Clock face geometry and drawing.
//!
//! The face is laid out on a 24-hour dial: midnight sits at the bottom,
//! noon at the top, and the sun moves clockwise one full turn per day.

use bluesky_core::{Angle, Palette, Point, Rect, WallTime, point_from_polar};

use crate::host::GraphicsContext;

pub const HOURS_PER_DAY: i32 = 24;
pub const MINUTES_PER_DAY: i32 = HOURS_PER_DAY * 60;

/// Every `MAJOR_TICK_EVERY`th hour tick is drawn heavy.
pub const MAJOR_TICK_EVERY: i32 = 3;
pub const MAJOR_TICK_WIDTH: u8 = 3;
pub const MINOR_TICK_WIDTH: u8 = 1;
pub const SUN_STROKE_WIDTH: u8 = 2;

/// Dial position of midnight.
pub const MIDNIGHT: Angle = Angle::HALF;

/// Total thickness of the sky ring for the given bounds.
pub fn sky_thickness(bounds: Rect) -> i32 {
    bounds.min_side() / 6
}

/// Rectangle and inset of sky band `index` out of `count`.
pub fn sky_band(bounds: Rect, thickness: i32, index: i32, count: i32) -> (Rect, i32) {
    (bounds.trim(thickness * index / count), thickness / count)
}

pub fn hour_tick_angle(hour: i32) -> Angle {
    (MIDNIGHT + Angle::from_fraction(hour, HOURS_PER_DAY)).normalized()
}

pub fn hour_tick_width(hour: i32) -> u8 {
    if hour % MAJOR_TICK_EVERY == 0 {
        MAJOR_TICK_WIDTH
    } else {
        MINOR_TICK_WIDTH
    }
}

/// Dial angle of the sun, moving continuously between hour ticks.
pub fn sun_angle(wall: &WallTime) -> Angle {
    let hour = wall.hour as i32;
    let minute = wall.minute as i32;
    (MIDNIGHT
        + Angle::from_fraction(hour, HOURS_PER_DAY)
        + Angle::from_fraction(minute, MINUTES_PER_DAY))
    .normalized()
}

pub fn sun_diameter(thickness: i32) -> i32 {
    thickness * 3 / 4
}

/// Paint the whole face into `bounds`.
pub fn draw<G: GraphicsContext>(ctx: &mut G, bounds: Rect, wall: &WallTime, palette: &Palette) {
    ctx.set_fill_color(palette.background);
    ctx.fill_rect(bounds);

    let thickness = sky_thickness(bounds);
    draw_sky(ctx, bounds, thickness, palette);
    draw_hour_ticks(ctx, bounds, thickness, palette);
    draw_sun(ctx, bounds, thickness, wall, palette);
}

fn draw_sky<G: GraphicsContext>(ctx: &mut G, bounds: Rect, thickness: i32, palette: &Palette) {
    let count = palette.sky_fill.len() as i32;
    for (index, color) in palette.sky_fill.iter().enumerate() {
        let (band, inset) = sky_band(bounds, thickness, index as i32, count);
        ctx.set_fill_color(*color);
        ctx.fill_radial(band, inset, Angle::ZERO, Angle::FULL);
    }
}

fn draw_hour_ticks<G: GraphicsContext>(
    ctx: &mut G,
    bounds: Rect,
    thickness: i32,
    palette: &Palette,
) {
    let inner = bounds.trim(thickness);
    ctx.set_stroke_color(palette.sky_stroke);
    ctx.set_antialiased(true);
    for hour in 0..HOURS_PER_DAY {
        let angle = hour_tick_angle(hour);
        let p0 = point_from_polar(inner, angle);
        let p1 = point_from_polar(bounds, angle);
        ctx.set_stroke_width(hour_tick_width(hour));
        ctx.draw_line(p0, p1);
    }
}

fn draw_sun<G: GraphicsContext>(
    ctx: &mut G,
    bounds: Rect,
    thickness: i32,
    wall: &WallTime,
    palette: &Palette,
) {
    let orbit = bounds.trim(thickness / 2);
    let center: Point = point_from_polar(orbit, sun_angle(wall));
    let radius = sun_diameter(thickness) / 2;

    ctx.set_fill_color(palette.sun_fill);
    ctx.fill_circle(center, radius);
    ctx.set_stroke_color(palette.sun_stroke);
    ctx.set_stroke_width(SUN_STROKE_WIDTH);
    ctx.draw_circle(center, radius);
}
