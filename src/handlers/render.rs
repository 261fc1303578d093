use anyhow::{Context, Result, bail};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use qrcode::{Color, QrCode};
use std::io::Cursor;

use crate::models::qr_options::{DotType, QrOptions};
use crate::utils::color::Rgb;

const QUIET_ZONE: u32 = 4;

/// Module grid placed on a `size` x `size` canvas.
struct QrLayout {
    modules: Vec<Color>,
    width: u32,
    scale: u32,
    offset: u32,
    size: u32,
}

impl QrLayout {
    fn new(payload: &str, options: &QrOptions) -> Result<Self> {
        if payload.is_empty() {
            bail!("Nothing to render: payload is empty");
        }

        let code = QrCode::with_error_correction_level(
            payload.as_bytes(),
            options.error_correction_level.into(),
        )
        .context("QR code generation error")?;

        let width = code.width() as u32;
        let size = options.clamped_size();
        let total = width + 2 * QUIET_ZONE;
        let scale = (size / total).max(1);
        // Very dense symbols can outgrow the canvas; grow it rather than crop.
        let size = size.max(total * scale);
        let offset = (size - width * scale) / 2;

        log::debug!(
            "QR layout: {} modules, scale {}, canvas {}px, ec {:?}",
            width,
            scale,
            size,
            options.error_correction_level
        );

        Ok(Self {
            modules: code.to_colors(),
            width,
            scale,
            offset,
            size,
        })
    }

    /// Top-left pixel of every dark module.
    fn dark_cells(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.modules
            .iter()
            .enumerate()
            .filter(|(_, color)| **color == Color::Dark)
            .map(|(i, _)| {
                let x = (i as u32) % self.width;
                let y = (i as u32) / self.width;
                (self.offset + x * self.scale, self.offset + y * self.scale)
            })
    }
}

/// Render a payload as an SVG document.
pub fn render_svg(payload: &str, options: &QrOptions) -> Result<String> {
    let layout = QrLayout::new(payload, options)?;
    let (fg, bg) = options.colors();
    let size = layout.size;
    let s = layout.scale;

    let mut svg = format!(
        concat!(
            r#"<?xml version="1.0" standalone="yes"?>"#,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{size}" height="{size}" viewBox="0 0 {size} {size}" shape-rendering="crispEdges">"#,
            r#"<rect x="0" y="0" width="{size}" height="{size}" fill="{bg}"/>"#
        ),
        size = size,
        bg = bg.to_hex()
    );

    // Drawn by hand rather than through qrcode::render::svg so the canvas is
    // exactly size x size and both dot shapes share one layout.
    match options.dot_type {
        DotType::Square => {
            let mut d = String::new();
            for (x, y) in layout.dark_cells() {
                d.push_str(&format!("M{} {}h{}v{}h-{}z", x, y, s, s, s));
            }
            svg.push_str(&format!(r#"<path fill="{}" d="{}"/>"#, fg.to_hex(), d));
        }
        DotType::Rounded => {
            let r = s as f64 / 2.0;
            svg.push_str(&format!(r#"<g fill="{}">"#, fg.to_hex()));
            for (x, y) in layout.dark_cells() {
                svg.push_str(&format!(
                    r#"<circle cx="{}" cy="{}" r="{}"/>"#,
                    x as f64 + r,
                    y as f64 + r,
                    r
                ));
            }
            svg.push_str("</g>");
        }
    }

    svg.push_str("</svg>");
    Ok(svg)
}

/// Render a payload into an RGBA bitmap.
pub fn render_image(payload: &str, options: &QrOptions) -> Result<RgbaImage> {
    let layout = QrLayout::new(payload, options)?;
    let (fg, bg) = options.colors();
    let mut img = RgbaImage::from_pixel(layout.size, layout.size, to_rgba(bg));
    let fg = to_rgba(fg);
    let s = layout.scale;
    let r = s as f64 / 2.0;

    for (x0, y0) in layout.dark_cells() {
        for dy in 0..s {
            for dx in 0..s {
                let paint = match options.dot_type {
                    DotType::Square => true,
                    DotType::Rounded => {
                        // Pixel centre inside the disc inscribed in the cell.
                        let px = dx as f64 + 0.5 - r;
                        let py = dy as f64 + 0.5 - r;
                        px * px + py * py <= r * r
                    }
                };
                if paint {
                    img.put_pixel(x0 + dx, y0 + dy, fg);
                }
            }
        }
    }

    Ok(img)
}

/// Render a payload as PNG bytes.
pub fn render_png(payload: &str, options: &QrOptions) -> Result<Vec<u8>> {
    let img = render_image(payload, options)?;
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .context("PNG encoding error")?;
    Ok(buf)
}

fn to_rgba(c: Rgb) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, 255])
}
