//! Minimal raster drawing on an in-memory RGB buffer.

use std::io::Cursor;

use base64::Engine;
use image::{ImageFormat, Rgb, RgbImage};

use crate::error::ChartError;

pub(crate) const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub(crate) const AXIS: Rgb<u8> = Rgb([64, 64, 64]);
pub(crate) const GRID: Rgb<u8> = Rgb([225, 225, 225]);

/// Plot area insets, in pixels
pub(crate) const MARGIN_LEFT: u32 = 60;
pub(crate) const MARGIN_RIGHT: u32 = 20;
pub(crate) const MARGIN_TOP: u32 = 20;
pub(crate) const MARGIN_BOTTOM: u32 = 40;

pub(crate) struct Canvas {
    image: RgbImage,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, WHITE),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Left, top, right, bottom edges of the plot area.
    pub fn plot_area(&self) -> (f64, f64, f64, f64) {
        (
            MARGIN_LEFT as f64,
            MARGIN_TOP as f64,
            (self.width() - MARGIN_RIGHT) as f64,
            (self.height() - MARGIN_BOTTOM) as f64,
        )
    }

    pub fn set(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill the rectangle spanning the two corners, inclusive.
    pub fn fill_rect(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, color: Rgb<u8>) {
        let (left, right) = (x0.min(x1).round() as i64, x0.max(x1).round() as i64);
        let (top, bottom) = (y0.min(y1).round() as i64, y0.max(y1).round() as i64);
        for y in top..=bottom {
            for x in left..=right {
                self.set(x, y, color);
            }
        }
    }

    /// Bresenham line, stamped with a square brush `thickness` pixels wide.
    pub fn draw_line(&mut self, from: (f64, f64), to: (f64, f64), thickness: u32, color: Rgb<u8>) {
        let (mut x, mut y) = (from.0.round() as i64, from.1.round() as i64);
        let (x1, y1) = (to.0.round() as i64, to.1.round() as i64);
        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let half = thickness as i64 / 2;

        loop {
            for by in -half..=half {
                for bx in -half..=half {
                    self.set(x + bx, y + by, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    pub fn fill_circle(&mut self, center: (f64, f64), radius: f64, color: Rgb<u8>) {
        let r = radius.ceil() as i64;
        let (cx, cy) = (center.0.round() as i64, center.1.round() as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if ((dx * dx + dy * dy) as f64) <= radius * radius {
                    self.set(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Axes along the left and bottom of the plot area, with `ticks` horizontal
    /// grid lines evenly spaced above the x axis.
    pub fn draw_axes(&mut self, ticks: u32) {
        let (left, top, right, bottom) = self.plot_area();
        if ticks > 0 {
            let step = (bottom - top) / ticks as f64;
            for i in 1..=ticks {
                let y = bottom - step * i as f64;
                self.draw_line((left, y), (right, y), 1, GRID);
            }
        }
        self.draw_line((left, top), (left, bottom), 2, AXIS);
        self.draw_line((left, bottom), (right, bottom), 2, AXIS);
    }

    /// Call `shade` for every pixel; a returned colour replaces the pixel.
    pub fn shade(&mut self, mut shade: impl FnMut(u32, u32) -> Option<Rgb<u8>>) {
        for (x, y, pixel) in self.image.enumerate_pixels_mut() {
            if let Some(color) = shade(x, y) {
                *pixel = color;
            }
        }
    }

    /// Encode as PNG in memory and return the base64 text.
    pub fn into_png_base64(self) -> Result<String, ChartError> {
        let mut buf = Cursor::new(Vec::new());
        self.image.write_to(&mut buf, ImageFormat::Png)?;
        Ok(base64::engine::general_purpose::STANDARD.encode(buf.into_inner()))
    }
}

/// Round `value` up to 1, 2 or 5 times a power of ten, for axis maxima.
pub(crate) fn nice_max(value: i64) -> i64 {
    if value <= 1 {
        return 1;
    }
    let mut magnitude = 1;
    while magnitude * 10 < value {
        magnitude *= 10;
    }
    [1, 2, 5, 10]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|candidate| *candidate >= value)
        .unwrap_or(10 * magnitude)
}
