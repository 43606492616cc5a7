//! Piecewise-linear color scales parsed from hex color stops.
//!
//! A scale spec is any string containing 3- or 6-digit hex colors, e.g.
//! `"#0F0 -> #F00"` or `"fff 00f f00"`. Everything that is not a hex digit
//! acts as a separator. Malformed tokens become black stops rather than
//! errors, so a typo degrades the gradient instead of aborting the run.

use log::debug;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channel-wise linear interpolation, truncating toward zero.
    ///
    /// `f` is expected in [0, 1]; `f = 0` yields `self`, `f = 1` yields `other`.
    pub fn lerp(self, other: Self, f: f64) -> Self {
        let inv = 1.0 - f;
        Self::new(
            (f64::from(self.r) * inv + f64::from(other.r) * f) as u8,
            (f64::from(self.g) * inv + f64::from(other.g) * f) as u8,
            (f64::from(self.b) * inv + f64::from(other.b) * f) as u8,
        )
    }
}

/// Power-curve remapping applied to the query value before interpolation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Curve {
    /// t²: compresses small values, stretches large ones
    Square,
    /// t³
    Cube,
    /// t^(1/2): stretches small values
    Sqrt,
    /// t^(1/3)
    Cbrt,
}

impl Curve {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Square => t * t,
            Self::Cube => t * t * t,
            Self::Sqrt => t.sqrt(),
            Self::Cbrt => t.cbrt(),
        }
    }
}

/// A color scale: maps [0, 1] onto a gradient through its stops
///
/// **Public** - used by the output templates via [`super::Palette`]
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    /// Ordered color stops, never empty
    stops: Vec<Rgb>,

    /// Curve wrappers, innermost first
    curves: Vec<Curve>,
}

impl Scale {
    /// Build a scale from explicit stops. An empty list yields a single black stop.
    pub fn new(mut stops: Vec<Rgb>) -> Self {
        if stops.is_empty() {
            stops.push(Rgb::BLACK);
        }
        Self {
            stops,
            curves: Vec::new(),
        }
    }

    /// Parse a scale spec string
    ///
    /// **Public** - main entry point for scale construction
    ///
    /// # Example
    /// ```ignore
    /// let scale = Scale::parse("#00F -> #F00");
    /// assert_eq!(scale.at(0.0), Rgb::new(0, 0, 255));
    /// ```
    pub fn parse(spec: &str) -> Self {
        let stops = parse_stops(spec);
        debug!("Parsed color scale {:?} into {} stops", spec, stops.len());
        Self::new(stops)
    }

    /// Wrap the scale in another curve. The wrapper added last transforms
    /// the query first.
    pub fn with_curve(mut self, curve: Curve) -> Self {
        self.curves.push(curve);
        self
    }

    pub fn stops(&self) -> &[Rgb] {
        &self.stops
    }

    /// Color at position `t`. Values outside [0, 1] are clamped.
    pub fn at(&self, t: f64) -> Rgb {
        let t = self
            .curves
            .iter()
            .rev()
            .fold(clamp_unit(t), |t, curve| curve.apply(t));
        interpolate(&self.stops, t)
    }
}

/// Parse every hex token of a scale spec into a color stop
///
/// **Public** - exposed for callers that want the raw stop list
pub fn parse_stops(spec: &str) -> Vec<Rgb> {
    let hex_only: String = spec
        .chars()
        .map(|c| {
            if c.is_ascii_hexdigit() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    let stops: Vec<Rgb> = hex_only.split_whitespace().map(parse_token).collect();
    if stops.is_empty() {
        vec![Rgb::BLACK]
    } else {
        stops
    }
}

/// Parse one hex token. Lengths other than 3 and 6 yield black.
///
/// **Private** - internal helper for parse_stops
fn parse_token(token: &str) -> Rgb {
    match token.len() {
        3 => {
            let nibble = |i: usize| {
                let n = u8::from_str_radix(&token[i..=i], 16).unwrap_or(0);
                (n << 4) | n
            };
            Rgb::new(nibble(0), nibble(1), nibble(2))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&token[i..i + 2], 16).unwrap_or(0);
            Rgb::new(byte(0), byte(2), byte(4))
        }
        _ => Rgb::BLACK,
    }
}

fn clamp_unit(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Piecewise-linear interpolation across `stops`
///
/// **Private** - the core of [`Scale::at`]
///
/// # Algorithm
/// 1. Clamp `t` to [0, 1] and scale by `N - 1`
/// 2. Split into segment index `i` and fractional offset `f`
/// 3. Blend `stops[i]` and `stops[i + 1]`, reusing `stops[i]` past the end
fn interpolate(stops: &[Rgb], t: f64) -> Rgb {
    let last = stops.len().saturating_sub(1);
    let x = last as f64 * clamp_unit(t);
    let i = (x as usize).min(last);
    let j = if i + 1 > last { i } else { i + 1 };
    let f = x - i as f64;
    stops[i].lerp(stops[j], f)
}
