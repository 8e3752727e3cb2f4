use std::str::FromStr;

use crate::error::{ChartError, ChartResult};

/// RGBA color in normalized 0..=1 channel values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    #[must_use]
    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    #[must_use]
    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub fn validate(self) -> ChartResult<()> {
        for (channel, value) in [
            ("red", self.red),
            ("green", self.green),
            ("blue", self.blue),
            ("alpha", self.alpha),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ChartError::InvalidData(format!(
                    "color channel `{channel}` must be finite and in [0, 1]"
                )));
            }
        }
        Ok(())
    }

    /// Same hue with a replaced alpha channel.
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self {
            alpha: alpha.clamp(0.0, 1.0),
            ..self
        }
    }

    /// Formats as a CSS `rgba(r, g, b, a)` string with 8-bit color channels.
    #[must_use]
    pub fn to_css_rgba(self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue),
            format_alpha(self.alpha)
        )
    }

    /// Formats as `#rrggbb`, dropping alpha.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!(
            "#{:02x}{:02x}{:02x}",
            to_byte(self.red),
            to_byte(self.green),
            to_byte(self.blue)
        )
    }
}

impl FromStr for Color {
    type Err = ChartError;

    /// Parses `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(..)` and `rgba(..)`.
    fn from_str(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let color = if let Some(hex) = trimmed.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = strip_function(trimmed, "rgba") {
            parse_rgb_function(body, true)
        } else if let Some(body) = strip_function(trimmed, "rgb") {
            parse_rgb_function(body, false)
        } else {
            None
        };

        let color = color.ok_or_else(|| {
            ChartError::InvalidData(format!("unsupported color literal: `{input}`"))
        })?;
        color.validate()?;
        Ok(color)
    }
}

/// Returns a fully transparent variant of a CSS color.
///
/// Colors the parser does not understand (named colors, `hsl(..)`) map to
/// the CSS keyword `transparent`.
#[must_use]
pub fn transparent_variant(css: &str) -> String {
    alpha_variant(css, 0.0)
}

/// Returns `css` with its alpha replaced, or `transparent` for unparseable
/// input when `alpha == 0`, or the input unchanged otherwise.
#[must_use]
pub fn alpha_variant(css: &str, alpha: f64) -> String {
    match css.parse::<Color>() {
        Ok(color) => color.with_alpha(alpha).to_css_rgba(),
        Err(_) if alpha <= 0.0 => "transparent".to_owned(),
        Err(_) => css.to_owned(),
    }
}

fn strip_function<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    let lower = input.get(..name.len())?;
    if !lower.eq_ignore_ascii_case(name) {
        return None;
    }
    input[name.len()..]
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match hex.len() {
        3 | 4 => hex.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => hex.to_owned(),
        _ => return None,
    };
    let channel = |index: usize| -> Option<f64> {
        let byte = u8::from_str_radix(expanded.get(index * 2..index * 2 + 2)?, 16).ok()?;
        Some(f64::from(byte) / 255.0)
    };
    let alpha = if expanded.len() == 8 { channel(3)? } else { 1.0 };
    Some(Color::rgba(channel(0)?, channel(1)?, channel(2)?, alpha))
}

fn parse_rgb_function(body: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    let expected = if with_alpha { 4 } else { 3 };
    if parts.len() != expected {
        return None;
    }
    let channel = |raw: &str| -> Option<f64> {
        let value: f64 = raw.parse().ok()?;
        (0.0..=255.0).contains(&value).then_some(value / 255.0)
    };
    let alpha = if with_alpha {
        parts[3].parse::<f64>().ok()?
    } else {
        1.0
    };
    Some(Color::rgba(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
        alpha,
    ))
}

fn to_byte(channel: f64) -> u8 {
    (channel.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn format_alpha(alpha: f64) -> String {
    let rounded = (alpha.clamp(0.0, 1.0) * 1000.0).round() / 1000.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as u8)
    } else {
        format!("{rounded}")
    }
}
