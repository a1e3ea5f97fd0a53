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

    /// Resolves a CSS color string.
    ///
    /// Supports `#rgb`, `#rrggbb`, `#rrggbbaa`, `rgb(...)`, `rgba(...)` with
    /// 0..=255 channels, and a handful of named colors. Backends use this to
    /// turn series colors into paint; series keep the original string.
    pub fn from_css(input: &str) -> ChartResult<Self> {
        let trimmed = input.trim();
        let lowered = trimmed.to_ascii_lowercase();

        let color = if let Some(hex) = lowered.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(args) = function_args(&lowered, "rgba") {
            parse_rgb_args(args, true)
        } else if let Some(args) = function_args(&lowered, "rgb") {
            parse_rgb_args(args, false)
        } else {
            named(&lowered)
        };

        let color = color.ok_or_else(|| {
            ChartError::InvalidData(format!("unsupported css color `{trimmed}`"))
        })?;
        color.validate()?;
        Ok(color)
    }
}

fn function_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_rgb_args(args: &str, with_alpha: bool) -> Option<Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
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

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| f64::from(v) / 255.0);
    let nibble = |s: &str| {
        u8::from_str_radix(s, 16)
            .ok()
            .map(|v| f64::from(v * 17) / 255.0)
    };

    match hex.len() {
        3 => Some(Color::rgb(
            nibble(&hex[0..1])?,
            nibble(&hex[1..2])?,
            nibble(&hex[2..3])?,
        )),
        6 => Some(Color::rgb(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
        8 => Some(Color::rgba(
            byte(&hex[0..2])?,
            byte(&hex[2..4])?,
            byte(&hex[4..6])?,
            byte(&hex[6..8])?,
        )),
        _ => None,
    }
}

fn named(name: &str) -> Option<Color> {
    let (r, g, b, a) = match name {
        "transparent" => (0, 0, 0, 0.0),
        "black" => (0, 0, 0, 1.0),
        "white" => (255, 255, 255, 1.0),
        "red" => (255, 0, 0, 1.0),
        "darkred" => (139, 0, 0, 1.0),
        "green" => (0, 128, 0, 1.0),
        "darkgreen" => (0, 100, 0, 1.0),
        "blue" => (0, 0, 255, 1.0),
        "darkblue" => (0, 0, 139, 1.0),
        "orange" => (255, 165, 0, 1.0),
        "gray" | "grey" => (128, 128, 128, 1.0),
        _ => return None,
    };
    Some(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        a,
    ))
}

#[cfg(test)]
mod tests {
    use super::Color;
    use approx::assert_relative_eq;

    #[test]
    fn parses_default_palette_entry() {
        let color = Color::from_css("rgba(74, 222, 128, 1)").expect("palette color");
        assert_relative_eq!(color.red, 74.0 / 255.0);
        assert_relative_eq!(color.green, 222.0 / 255.0);
        assert_relative_eq!(color.blue, 128.0 / 255.0);
        assert_relative_eq!(color.alpha, 1.0);
    }

    #[test]
    fn parses_hex_and_named_colors() {
        assert_eq!(Color::from_css("#f00").expect("short hex"), Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(
            Color::from_css("#FF000080").expect("hex with alpha").alpha,
            128.0 / 255.0
        );
        let dark_red = Color::from_css("DarkRed").expect("named");
        assert_relative_eq!(dark_red.red, 139.0 / 255.0);
    }

    #[test]
    fn rejects_unknown_or_out_of_range_colors() {
        assert!(Color::from_css("chartreuse-ish").is_err());
        assert!(Color::from_css("rgb(300, 0, 0)").is_err());
        assert!(Color::from_css("rgba(0, 0, 0, 2)").is_err());
        assert!(Color::from_css("#12345").is_err());
    }
}
