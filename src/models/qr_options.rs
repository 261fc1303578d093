use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationError};

use crate::utils::color::Rgb;

pub const MIN_SIZE: u32 = 100;
pub const MAX_SIZE: u32 = 500;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DotType {
    #[default]
    Square,
    Rounded,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCorrectionLevel {
    L, // ~7% recovery
    #[default]
    M, // ~15%
    Q, // ~25%
    H, // ~30%
}

#[derive(Serialize, Deserialize, Validate, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QrOptions {
    #[validate(custom(function = "validate_color"))]
    pub foreground_color: String,
    #[validate(custom(function = "validate_color"))]
    pub background_color: String,
    #[validate(range(min = 100, max = 500, message = "Size must be between 100 and 500 pixels"))]
    pub size: u32,
    pub dot_type: DotType,
    pub error_correction_level: ErrorCorrectionLevel,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            foreground_color: "#000000".to_string(),
            background_color: "#FFFFFF".to_string(),
            size: 300,
            dot_type: DotType::Square,
            error_correction_level: ErrorCorrectionLevel::M,
        }
    }
}

impl QrOptions {
    /// Resolved colours; unparseable values fall back to black on white.
    pub fn colors(&self) -> (Rgb, Rgb) {
        let parse = |value: &str, fallback: Rgb| {
            value.parse::<Rgb>().unwrap_or_else(|e| {
                log::warn!("{}; using {}", e, fallback);
                fallback
            })
        };
        (
            parse(&self.foreground_color, Rgb::BLACK),
            parse(&self.background_color, Rgb::WHITE),
        )
    }

    /// Size clamped into the supported range.
    pub fn clamped_size(&self) -> u32 {
        self.size.clamp(MIN_SIZE, MAX_SIZE)
    }
}

fn validate_color(value: &str) -> Result<(), ValidationError> {
    value.parse::<Rgb>().map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("invalid_color");
        err.message = Some(e.to_string().into());
        err
    })
}

impl fmt::Display for DotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DotType::Square => write!(f, "square"),
            DotType::Rounded => write!(f, "rounded"),
        }
    }
}

impl FromStr for DotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "square" => Ok(DotType::Square),
            // "dots" is what the rendering library calls it
            "rounded" | "dots" => Ok(DotType::Rounded),
            other => Err(format!("unknown dot type '{}' (expected square or rounded)", other)),
        }
    }
}

impl fmt::Display for ErrorCorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCorrectionLevel::L => write!(f, "Low (7%)"),
            ErrorCorrectionLevel::M => write!(f, "Medium (15%)"),
            ErrorCorrectionLevel::Q => write!(f, "Quartile (25%)"),
            ErrorCorrectionLevel::H => write!(f, "High (30%)"),
        }
    }
}

impl FromStr for ErrorCorrectionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(ErrorCorrectionLevel::L),
            "M" => Ok(ErrorCorrectionLevel::M),
            "Q" => Ok(ErrorCorrectionLevel::Q),
            "H" => Ok(ErrorCorrectionLevel::H),
            other => Err(format!("unknown error correction level '{}' (expected L, M, Q or H)", other)),
        }
    }
}

impl From<ErrorCorrectionLevel> for qrcode::EcLevel {
    fn from(level: ErrorCorrectionLevel) -> Self {
        match level {
            ErrorCorrectionLevel::L => qrcode::EcLevel::L,
            ErrorCorrectionLevel::M => qrcode::EcLevel::M,
            ErrorCorrectionLevel::Q => qrcode::EcLevel::Q,
            ErrorCorrectionLevel::H => qrcode::EcLevel::H,
        }
    }
}
