//! Color conversion and CSS color strings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{normalize_degrees, normalize_fraction};

/// Errors from parsing CSS color strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("unsupported color syntax: {0}")]
    Unsupported(String),
    #[error("invalid color component `{component}` in {input}")]
    InvalidComponent { input: String, component: String },
}

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Self = Self::new(255, 255, 255);
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// `rgb(r, g, b)`
    pub fn to_css(self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// `rgba(r, g, b, a)` with alpha in [0, 1].
    pub fn to_css_with_alpha(self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            normalize_fraction(alpha)
        )
    }
}

/// Convert HSL to RGB. Hue in degrees, saturation and lightness in [0, 1].
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let h = normalize_degrees(hue) / 360.0;
    let s = normalize_fraction(saturation);
    let l = normalize_fraction(lightness);
    let a = s * l.min(1.0 - l);
    let channel = |n: f64| {
        let k = (n + h * 12.0) % 12.0;
        let c = l - a * (k - 3.0).min(9.0 - k).min(1.0).max(-1.0);
        (255.0 * c).round().clamp(0.0, 255.0) as u8
    };
    Rgb::new(channel(0.0), channel(8.0), channel(4.0))
}

/// Fully saturated, half-lightness color for a hue. Used by the hue ring.
pub fn hue_color(hue: f64) -> Rgb {
    hsl_to_rgb(hue, 1.0, 0.5)
}

/// Parse a CSS color: `#rgb`, `#rrggbb`, `rgb()`, `rgba()` or `hsl()`.
///
/// Alpha in `rgba()` is accepted and discarded.
pub fn parse_css_color(input: &str) -> Result<Rgb, ColorError> {
    let text = input.trim();
    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(input, hex);
    }
    let lower = text.to_ascii_lowercase();
    if let Some(args) = function_args(&lower, "rgba").or_else(|| function_args(&lower, "rgb")) {
        let parts = split_args(args);
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorError::Unsupported(input.to_string()));
        }
        let r = parse_channel(input, parts[0])?;
        let g = parse_channel(input, parts[1])?;
        let b = parse_channel(input, parts[2])?;
        return Ok(Rgb::new(r, g, b));
    }
    if let Some(args) = function_args(&lower, "hsla").or_else(|| function_args(&lower, "hsl")) {
        let parts = split_args(args);
        if parts.len() != 3 && parts.len() != 4 {
            return Err(ColorError::Unsupported(input.to_string()));
        }
        let h = parse_number(input, parts[0].trim_end_matches("deg"))?;
        let s = parse_percent(input, parts[1])?;
        let l = parse_percent(input, parts[2])?;
        return Ok(hsl_to_rgb(h, s, l));
    }
    Err(ColorError::Unsupported(input.to_string()))
}

fn function_args<'a>(text: &'a str, name: &str) -> Option<&'a str> {
    text.strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

/// Split on commas, whitespace and the `/` alpha separator.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect()
}

fn invalid(input: &str, component: &str) -> ColorError {
    ColorError::InvalidComponent {
        input: input.to_string(),
        component: component.to_string(),
    }
}

fn parse_hex(input: &str, hex: &str) -> Result<Rgb, ColorError> {
    if !hex.is_ascii() {
        return Err(ColorError::Unsupported(input.to_string()));
    }
    let digit = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid(input, s));
    match hex.len() {
        6 => Ok(Rgb::new(digit(&hex[0..2])?, digit(&hex[2..4])?, digit(&hex[4..6])?)),
        3 => {
            let r = digit(&hex[0..1])?;
            let g = digit(&hex[1..2])?;
            let b = digit(&hex[2..3])?;
            Ok(Rgb::new(r * 17, g * 17, b * 17))
        }
        _ => Err(ColorError::Unsupported(input.to_string())),
    }
}

fn parse_number(input: &str, part: &str) -> Result<f64, ColorError> {
    part.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| invalid(input, part))
}

fn parse_channel(input: &str, part: &str) -> Result<u8, ColorError> {
    let value = match part.strip_suffix('%') {
        Some(pct) => parse_number(input, pct)? * 2.55,
        None => parse_number(input, part)?,
    };
    Ok(value.round().clamp(0.0, 255.0) as u8)
}

fn parse_percent(input: &str, part: &str) -> Result<f64, ColorError> {
    let pct = part.strip_suffix('%').ok_or_else(|| invalid(input, part))?;
    Ok(parse_number(input, pct)? / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Rgb::new(255, 0, 0));
        assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), Rgb::new(0, 255, 0));
        assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), Rgb::new(0, 0, 255));
        assert_eq!(hsl_to_rgb(180.0, 1.0, 0.5), Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_hsl_grey_and_extremes() {
        assert_eq!(hsl_to_rgb(77.0, 0.0, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(hsl_to_rgb(10.0, 1.0, 0.0), Rgb::BLACK);
        assert_eq!(hsl_to_rgb(10.0, 1.0, 1.0), Rgb::WHITE);
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(hue_color(360.0), hue_color(0.0));
        assert_eq!(hue_color(-120.0), hue_color(240.0));
    }

    #[test]
    fn test_css_output() {
        let c = Rgb::new(1, 2, 3);
        assert_eq!(c.to_css(), "rgb(1, 2, 3)");
        assert_eq!(c.to_css_with_alpha(0.5), "rgba(1, 2, 3, 0.5)");
        assert_eq!(c.to_css_with_alpha(2.0), "rgba(1, 2, 3, 1)");
    }

    #[test]
    fn test_parse_hex() {
        assert_eq!(parse_css_color("#6366f1"), Ok(Rgb::new(0x63, 0x66, 0xf1)));
        assert_eq!(parse_css_color("#fff"), Ok(Rgb::WHITE));
        assert!(parse_css_color("#ff").is_err());
        assert!(parse_css_color("#gg0000").is_err());
    }

    #[test]
    fn test_parse_functions() {
        assert_eq!(parse_css_color("rgb(10, 20, 30)"), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(parse_css_color("rgba(10, 20, 30, 0.4)"), Ok(Rgb::new(10, 20, 30)));
        assert_eq!(parse_css_color("RGB(100%, 0%, 0%)"), Ok(Rgb::new(255, 0, 0)));
        assert_eq!(parse_css_color("hsl(120 100% 50%)"), Ok(Rgb::new(0, 255, 0)));
        assert_eq!(parse_css_color("hsl(240, 100%, 50%)"), Ok(Rgb::new(0, 0, 255)));
    }

    #[test]
    fn test_parse_round_trips_css_output() {
        let c = hsl_to_rgb(33.0, 0.7, 0.4);
        assert_eq!(parse_css_color(&c.to_css()), Ok(c));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_css_color("oklch(0.2 0.03 264)"), Err(ColorError::Unsupported(_))));
        assert!(matches!(
            parse_css_color("rgb(a, 2, 3)"),
            Err(ColorError::InvalidComponent { .. })
        ));
        assert!(parse_css_color("hsl(10, 50, 50%)").is_err());
    }
}
