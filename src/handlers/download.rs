use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::handlers::render::{render_png, render_svg};
use crate::models::qr_options::QrOptions;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DownloadFormat {
    #[default]
    Png,
    Svg,
}

impl DownloadFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            DownloadFormat::Png => "png",
            DownloadFormat::Svg => "svg",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            DownloadFormat::Png => "image/png",
            DownloadFormat::Svg => "image/svg+xml",
        }
    }
}

impl fmt::Display for DownloadFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for DownloadFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "png" => Ok(DownloadFormat::Png),
            "svg" => Ok(DownloadFormat::Svg),
            other => Err(format!("unsupported format '{}' (expected png or svg)", other)),
        }
    }
}

/// `qrcode-<unix millis>.<ext>`
pub fn download_file_name(format: DownloadFormat, at: DateTime<Utc>) -> String {
    format!("qrcode-{}.{}", at.timestamp_millis(), format.extension())
}

/// Render `payload` in the requested format.
pub fn render_bytes(payload: &str, options: &QrOptions, format: DownloadFormat) -> Result<Vec<u8>> {
    match format {
        DownloadFormat::Png => render_png(payload, options),
        DownloadFormat::Svg => render_svg(payload, options).map(String::into_bytes),
    }
}

/// Render the QR code and write it into `dir`, returning the file path.
pub fn save_qr_code(
    dir: &Path,
    payload: &str,
    options: &QrOptions,
    format: DownloadFormat,
) -> Result<PathBuf> {
    let bytes = render_bytes(payload, options, format)?;

    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;
    let path = dir.join(download_file_name(format, Utc::now()));
    fs::write(&path, &bytes).with_context(|| format!("Failed to write {}", path.display()))?;

    log::info!(
        "QR code downloaded as {} ({}, {} bytes) to {}",
        format.to_string().to_uppercase(),
        format.content_type(),
        bytes.len(),
        path.display()
    );
    Ok(path)
}
