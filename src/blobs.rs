//! Metaball field for the `liquid-blobs` terminal demo
//!
//! Each blob contributes `r² / d²` to the field at a cell; cells above [`FIELD_CUTOFF`] are
//! drawn with a shade glyph picked by intensity and coloured by the influence-weighted hue of
//! the blobs around them.

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, Stylize};
use rand::Rng;
use std::io::{self, Write};

/// Shade ramp from empty to solid.
pub const GLYPHS: [char; 7] = [' ', '·', ':', '░', '▒', '▓', '█'];

/// Field strength below which a cell stays blank.
pub const FIELD_CUTOFF: f64 = 0.3;

/// Field strength that maps to full intensity.
pub const FIELD_SATURATION: f64 = 3.0;

const MIN_DIST_SQ: f64 = 0.01;

/// HSV to RGB with `h` in degrees (0..360) and `s`, `v` in 0..1.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (u8, u8, u8) {
    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match h {
        h if h < 60.0 => (c, x, 0.0),
        h if h < 120.0 => (x, c, 0.0),
        h if h < 180.0 => (0.0, c, x),
        h if h < 240.0 => (0.0, x, c),
        h if h < 300.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };

    let channel = |value: f64| ((value + m) * 255.0).clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

fn rgb(h: f64, s: f64, v: f64) -> Color {
    let (r, g, b) = hsv_to_rgb(h, s, v);
    Color::Rgb { r, g, b }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Blob {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub hue: f64,
    pub speed_x: f64,
    pub speed_y: f64,
    /// Degrees added to `hue` every update
    pub hue_shift: f64,
}

impl Blob {
    pub fn new(x: f64, y: f64, radius: f64, hue: f64, speed_x: f64, speed_y: f64) -> Self {
        Blob {
            x,
            y,
            radius,
            hue,
            speed_x,
            speed_y,
            hue_shift: 0.0,
        }
    }

    pub fn with_hue_shift(mut self, hue_shift: f64) -> Self {
        self.hue_shift = hue_shift;
        self
    }

    /// Move one step, bouncing off the field edges, and drift the hue.
    pub fn update(&mut self, width: f64, height: f64) {
        self.x += self.speed_x;
        self.y += self.speed_y;

        if self.x - self.radius < 0.0 || self.x + self.radius > width {
            self.speed_x = -self.speed_x;
            self.x = self.x.min(width - self.radius).max(self.radius);
        }
        if self.y - self.radius < 0.0 || self.y + self.radius > height {
            self.speed_y = -self.speed_y;
            self.y = self.y.min(height - self.radius).max(self.radius);
        }

        self.hue = (self.hue + self.hue_shift).rem_euclid(360.0);
    }
}

/// The five blobs of the demo, each with a random hue drift in -0.5..0.5.
pub fn default_blobs<R: Rng>(rng: &mut R) -> Vec<Blob> {
    [
        Blob::new(20.0, 10.0, 8.0, 0.0, 0.3, 0.2),
        Blob::new(60.0, 10.0, 6.0, 120.0, -0.2, 0.25),
        Blob::new(40.0, 15.0, 7.0, 240.0, 0.25, -0.3),
        Blob::new(30.0, 5.0, 5.0, 60.0, -0.15, 0.28),
        Blob::new(50.0, 18.0, 6.0, 300.0, 0.28, -0.22),
    ]
    .into_iter()
    .map(|blob| blob.with_hue_shift(rng.random_range(-0.5..0.5)))
    .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSample {
    pub strength: f64,
    pub hue: f64,
}

pub fn field_at(x: f64, y: f64, blobs: &[Blob]) -> FieldSample {
    let mut strength = 0.0;
    let mut hue_sum = 0.0;

    for blob in blobs {
        let dx = x - blob.x;
        let dy = y - blob.y;
        let dist_sq = (dx * dx + dy * dy).max(MIN_DIST_SQ);

        let influence = blob.radius * blob.radius / dist_sq;
        strength += influence;
        hue_sum += blob.hue * influence;
    }

    let hue = if strength > 0.0 { hue_sum / strength } else { 0.0 };
    FieldSample { strength, hue }
}

/// Glyph and colour for a lit cell, `None` when below the cutoff.
pub fn shade(sample: FieldSample) -> Option<(char, Color)> {
    if sample.strength < FIELD_CUTOFF {
        return None;
    }
    let intensity = (sample.strength / FIELD_SATURATION).min(1.0);
    let index = (intensity * (GLYPHS.len() - 1) as f64) as usize;
    Some((GLYPHS[index], rgb(sample.hue, 0.8, intensity)))
}

/// One ANSI-coloured string per row.
pub fn render_frame(width: usize, height: usize, blobs: &[Blob]) -> Vec<String> {
    (0..height)
        .map(|y| {
            let mut line = String::new();
            for x in 0..width {
                match shade(field_at(x as f64, y as f64, blobs)) {
                    Some((glyph, color)) => line.push_str(&glyph.with(color).to_string()),
                    None => line.push(' '),
                }
            }
            line
        })
        .collect()
}

pub fn center(text: &str, width: usize) -> String {
    format!("{:^width$}", text, width = width)
}

/// Status text under the field for frame `index` (0-based) of `total`.
pub fn status_text(index: usize, total: usize) -> String {
    let progress = index * 100 / total.max(1);
    format!(
        "✨ Liquid Blobs | Frame {}/{} | {}%",
        index + 1,
        total,
        progress
    )
}

/// Queue a bold, coloured line at `row`.
pub fn queue_banner_line<W: Write>(
    out: &mut W,
    row: u16,
    text: &str,
    hue: f64,
    width: usize,
) -> io::Result<()> {
    let styled = center(text, width)
        .with(rgb(hue.rem_euclid(360.0), 0.9, 1.0))
        .attribute(Attribute::Bold);
    queue!(out, MoveTo(0, row), Print(styled))
}

/// Queue a full frame: the field rows followed by the status line.
pub fn queue_frame<W: Write>(
    out: &mut W,
    lines: &[String],
    index: usize,
    total: usize,
    width: usize,
) -> io::Result<()> {
    for (row, line) in lines.iter().enumerate() {
        queue!(out, MoveTo(0, row as u16), Print(line))?;
    }
    let hue = (index * 3 % 360) as f64;
    let status = center(&status_text(index, total), width)
        .with(rgb(hue, 0.8, 1.0))
        .attribute(Attribute::Bold);
    queue!(out, MoveTo(0, lines.len() as u16), Print(status))
}
