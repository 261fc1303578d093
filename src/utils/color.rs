use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_COLOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^#([0-9A-F]{3}){1,2}$").expect("hex colour regex"));
static HSL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsl\(\s*([0-9]{1,3})\s*,\s*([0-9]{1,3})%\s*,\s*([0-9]{1,3})%\s*\)$")
        .expect("hsl colour regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Malformed(String),
    OutOfRange(String),
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::Malformed(s) => write!(
                f,
                "'{}' is not a colour (expected #rgb, #rrggbb or hsl(h, s%, l%))",
                s
            ),
            ColorError::OutOfRange(s) => write!(f, "'{}' has components out of range", s),
        }
    }
}

impl std::error::Error for ColorError {}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };
    pub const WHITE: Rgb = Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(value: &str) -> Result<Self, ColorError> {
        if !HEX_COLOR.is_match(value) {
            return Err(ColorError::Malformed(value.to_string()));
        }
        let digits = &value[1..];
        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorError::Malformed(value.to_string()))
        };
        if digits.len() == 3 {
            // #abc is shorthand for #aabbcc
            let expand = |i: usize| channel(digits[i..i + 1].repeat(2).as_str());
            Ok(Rgb::new(expand(0)?, expand(1)?, expand(2)?))
        } else {
            Ok(Rgb::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            ))
        }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_hsl(&self) -> Hsl {
        let r = self.r as f64 / 255.0;
        let g = self.g as f64 / 255.0;
        let b = self.b as f64 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;
        let (mut h, mut s) = (0.0, 0.0);

        if max != min {
            let d = max - min;
            s = if l > 0.5 {
                d / (2.0 - max - min)
            } else {
                d / (max + min)
            };
            h = if max == r {
                (g - b) / d + if g < b { 6.0 } else { 0.0 }
            } else if max == g {
                (b - r) / d + 2.0
            } else {
                (r - g) / d + 4.0
            };
            h *= 60.0;
        }

        Hsl {
            h: (h.round() as u16) % 360,
            s: (s * 100.0).round() as u8,
            l: (l * 100.0).round() as u8,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    /// Accepts `#rgb`, `#rrggbb` or `hsl(h, s%, l%)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.starts_with('#') {
            return Rgb::from_hex(s);
        }
        let caps = HSL_COLOR
            .captures(s)
            .ok_or_else(|| ColorError::Malformed(s.to_string()))?;
        let num = |i: usize| {
            caps[i]
                .parse::<u16>()
                .map_err(|_| ColorError::Malformed(s.to_string()))
        };
        let (h, sat, light) = (num(1)?, num(2)?, num(3)?);
        if h > 360 || sat > 100 || light > 100 {
            return Err(ColorError::OutOfRange(s.to_string()));
        }
        Ok(Hsl::new(h, sat as u8, light as u8).to_rgb())
    }
}

impl Hsl {
    pub fn new(h: u16, s: u8, l: u8) -> Self {
        Self { h, s, l }.clamped()
    }

    /// Wrap hue into 0..360 and cap saturation/lightness at 100.
    pub fn clamped(self) -> Self {
        Self {
            h: self.h % 360,
            s: self.s.min(100),
            l: self.l.min(100),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        let h = self.h as f64 / 360.0;
        let s = self.s as f64 / 100.0;
        let l = self.l as f64 / 100.0;

        let (r, g, b) = if s == 0.0 {
            (l, l, l)
        } else {
            let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
            let p = 2.0 * l - q;
            (
                hue_to_channel(p, q, h + 1.0 / 3.0),
                hue_to_channel(p, q, h),
                hue_to_channel(p, q, h - 1.0 / 3.0),
            )
        };

        let to_u8 = |c: f64| (c * 255.0).round().clamp(0.0, 255.0) as u8;
        Rgb::new(to_u8(r), to_u8(g), to_u8(b))
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.h, self.s, self.l)
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}
