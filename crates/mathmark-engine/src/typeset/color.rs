use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColorParseError {
    #[error("Invalid hex color '{0}': expected #rgb or #rrggbb")]
    InvalidHex(String),
    #[error("Invalid color component '{0}'")]
    InvalidComponent(String),
    #[error("Color component {0} is outside 0..=1")]
    OutOfRange(f64),
    #[error("Unrecognized color '{0}': expected #rrggbb, gray:<g> or r,g,b")]
    UnknownFormat(String),
}

/// Text color applied to typeset equations, components in `0.0..=1.0`.
///
/// Parses from `#rrggbb`, `#rgb`, `gray:<g>` or `r,g,b`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TextColor {
    Gray(f64),
    Rgb(f64, f64, f64),
}

impl TextColor {
    /// TeX prepended to each equation so it renders in this color.
    pub fn preamble(&self) -> String {
        let (r, g, b) = match *self {
            Self::Gray(g) => (g, g, g),
            Self::Rgb(r, g, b) => (r, g, b),
        };
        format!("\\definecolor{{custom}}{{rgb}}{{{r}, {g}, {b}}} \\color{{custom}}")
    }
}

fn component(s: &str) -> Result<f64, ColorParseError> {
    let v: f64 = s
        .trim()
        .parse()
        .map_err(|_| ColorParseError::InvalidComponent(s.to_string()))?;
    if !(0.0..=1.0).contains(&v) {
        return Err(ColorParseError::OutOfRange(v));
    }
    Ok(v)
}

fn parse_hex(hex: &str) -> Result<TextColor, ColorParseError> {
    let invalid = || ColorParseError::InvalidHex(format!("#{hex}"));
    if !hex.is_ascii() {
        return Err(invalid());
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

    let (r, g, b) = match hex.len() {
        3 => {
            let (r, g, b) = (&hex[0..1], &hex[1..2], &hex[2..3]);
            (
                channel(&r.repeat(2))?,
                channel(&g.repeat(2))?,
                channel(&b.repeat(2))?,
            )
        }
        6 => (
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        ),
        _ => return Err(invalid()),
    };
    Ok(TextColor::Rgb(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
    ))
}

impl FromStr for TextColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(gray) = s.strip_prefix("gray:") {
            return Ok(Self::Gray(component(gray)?));
        }
        match s.split(',').collect::<Vec<_>>().as_slice() {
            [r, g, b] => Ok(Self::Rgb(component(r)?, component(g)?, component(b)?)),
            _ => Err(ColorParseError::UnknownFormat(s.to_string())),
        }
    }
}

impl TryFrom<String> for TextColor {
    type Error = ColorParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TextColor> for String {
    fn from(color: TextColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for TextColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gray(g) => write!(f, "gray:{g}"),
            Self::Rgb(r, g, b) => write!(f, "{r},{g},{b}"),
        }
    }
}
