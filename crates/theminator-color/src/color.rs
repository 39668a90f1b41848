// SPDX-License-Identifier: MIT
//
// theminator color system — sRGB channels with HSL and WCAG views.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// mathematical convention in color science. Renaming them would make the
// code harder to compare against reference formulas.
#![allow(clippy::many_single_char_names)]
//
// Channels are stored as f64 in [0, 255] rather than u8. HSL synthesis
// lands between integer steps, and keeping the fraction makes
// `Color::hsl` an exact inverse of `hue()`, `saturation()` and
// `lightness()`. The fraction is dropped only when a color is written out
// as "#rrggbb" (or explicitly snapped with `quantize`).
//
// Conversion pipeline:
//
//   "#rrggbb" ↔ sRGB channels ↔ HSL
//                    │
//                    └──→ linear sRGB → relative luminance → contrast ratio

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use thiserror::Error;

// ─── Errors ──────────────────────────────────────────────────────────────────

/// A string that is not a `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    /// Anything other than exactly seven characters.
    #[error("expected a 7 character color like \"#1e1e2e\", got {len} characters in {input:?}")]
    Length { input: String, len: usize },

    /// Seven characters, but no leading `#`.
    #[error("color {input:?} must start with '#'")]
    MissingHash { input: String },

    /// A character outside `0-9`, `a-f`, `A-F`.
    #[error("invalid hex digit {digit:?} in color {input:?}")]
    InvalidDigit { input: String, digit: char },
}

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color.
///
/// Each channel is clamped to [0, 255] on construction. All other views
/// are computed on demand:
///
/// - [`hue`](Self::hue), [`saturation`](Self::saturation),
///   [`lightness`](Self::lightness): the HSL cylinder
/// - [`luminance`](Self::luminance): WCAG relative luminance
/// - [`perceived_lightness`](Self::perceived_lightness): CIE L* scaled to 0–1
/// - [`contrast`](Self::contrast): WCAG contrast ratio, 1.0 to 21.0
///
/// # Examples
///
/// ```
/// use theminator_color::Color;
///
/// let sand = Color::hsl(42.0, 0.3, 0.7);
/// assert_eq!(sand.to_hex(), "#c9bc9c");
///
/// let parsed: Color = "#c9bc9c".parse().unwrap();
/// assert_eq!(parsed.to_string(), "#c9bc9c");
///
/// let ratio = Color::BLACK.contrast(Color::WHITE);
/// assert!((ratio - 21.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure black, `#000000`.
    pub const BLACK: Self = Self { r: 0.0, g: 0.0, b: 0.0 };

    /// Pure white, `#ffffff`.
    pub const WHITE: Self = Self { r: 255.0, g: 255.0, b: 255.0 };

    /// Create a color from channel values in [0, 255].
    ///
    /// Out-of-range values are clamped; NaN becomes 0.
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }

    /// Create a color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
        }
    }

    /// Parse a `#rrggbb` string. Hex digits may be upper- or lowercase.
    ///
    /// # Errors
    ///
    /// Returns [`ParseColorError`] on a wrong length, a missing `#`, or a
    /// non-hex digit.
    pub fn parse(s: &str) -> Result<Self, ParseColorError> {
        parse_hex(s)
    }

    /// Create a color from HSL coordinates.
    ///
    /// - `hue`: degrees, wrapped into [0, 360)
    /// - `saturation`: 0.0 to 1.0
    /// - `lightness`: 0.0 to 1.0
    ///
    /// For saturation > 0 and 0 < lightness < 1 this is the exact inverse
    /// of [`hue`](Self::hue), [`saturation`](Self::saturation) and
    /// [`lightness`](Self::lightness), up to floating point rounding.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn hsl(hue: f64, saturation: f64, lightness: f64) -> Self {
        let s = saturation.clamp(0.0, 1.0);
        let l = lightness.clamp(0.0, 1.0);

        if s == 0.0 {
            let v = l * 255.0;
            return Self::rgb(v, v, v);
        }

        let high = if l < 0.5 {
            l * (1.0 + s)
        } else {
            s.mul_add(-l, l + s)
        };
        let low = 2.0f64.mul_add(l, -high);
        let h = normalize_hue(hue) / 360.0;

        Self::rgb(
            hue_to_channel(low, high, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(low, high, h) * 255.0,
            hue_to_channel(low, high, h - 1.0 / 3.0) * 255.0,
        )
    }

    /// Draw a color with each channel uniform and independent over 0–255.
    #[must_use]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::rgb8(rng.random(), rng.random(), rng.random())
    }

    // ─── Channels ────────────────────────────────────────────────────────

    /// Red channel, 0.0 to 255.0.
    #[inline]
    #[must_use]
    pub const fn r(self) -> f64 {
        self.r
    }

    /// Green channel, 0.0 to 255.0.
    #[inline]
    #[must_use]
    pub const fn g(self) -> f64 {
        self.g
    }

    /// Blue channel, 0.0 to 255.0.
    #[inline]
    #[must_use]
    pub const fn b(self) -> f64 {
        self.b
    }

    #[inline]
    fn max(self) -> f64 {
        self.r.max(self.g).max(self.b)
    }

    #[inline]
    fn min(self) -> f64 {
        self.r.min(self.g).min(self.b)
    }

    /// Whether all three channels are equal (a shade of grey).
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_achromatic(self) -> bool {
        self.max() == self.min()
    }

    // ─── HSL ─────────────────────────────────────────────────────────────

    /// Hue angle in degrees, [0, 360). Achromatic colors report 0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn hue(self) -> f64 {
        let (max, min) = (self.max(), self.min());
        if max == min {
            return 0.0;
        }

        let delta = max - min;
        let sector = if max == self.r {
            (self.g - self.b) / delta
        } else if max == self.g {
            2.0 + (self.b - self.r) / delta
        } else {
            4.0 + (self.r - self.g) / delta
        };

        normalize_hue(sector * 60.0)
    }

    /// HSL saturation, 0.0 to 1.0.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn saturation(self) -> f64 {
        let l = self.lightness();
        if l == 0.0 {
            return 0.0;
        }

        let delta = (self.max() - self.min()) / 255.0;
        if delta == 0.0 {
            return 0.0;
        }

        delta / (1.0 - 2.0f64.mul_add(l, -1.0).abs())
    }

    /// HSL lightness: the midpoint of the largest and smallest channel,
    /// 0.0 to 1.0.
    ///
    /// This is a geometric coordinate, not a measure of brightness. Use
    /// [`luminance`](Self::luminance) for anything readability-related.
    #[must_use]
    pub fn lightness(self) -> f64 {
        (self.max() + self.min()) / 2.0 / 255.0
    }

    // ─── Luminance & Contrast ────────────────────────────────────────────

    /// WCAG 2.1 relative luminance, 0.0 (black) to 1.0 (white).
    ///
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    #[must_use]
    pub fn luminance(self) -> f64 {
        let r = srgb_to_linear(self.r / 255.0);
        let g = srgb_to_linear(self.g / 255.0);
        let b = srgb_to_linear(self.b / 255.0);
        0.2126f64.mul_add(r, 0.7152f64.mul_add(g, 0.0722 * b))
    }

    /// Perceived lightness (CIE L*) divided by 100, 0.0 to 1.0.
    #[must_use]
    pub fn perceived_lightness(self) -> f64 {
        let y = self.luminance();
        if y <= 216.0 / 24389.0 {
            y * (24389.0 / 27.0) / 100.0
        } else {
            y.cbrt().mul_add(1.16, -0.16)
        }
    }

    /// WCAG 2.1 contrast ratio against `other`, 1.0 to 21.0.
    ///
    ///   (`L_lighter` + 0.05) / (`L_darker` + 0.05)
    ///
    /// Symmetric in its arguments.
    #[must_use]
    pub fn contrast(self, other: Self) -> f64 {
        let la = self.luminance();
        let lb = other.luminance();
        let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
        (lighter + 0.05) / (darker + 0.05)
    }

    // ─── Mixing ──────────────────────────────────────────────────────────

    /// Linear per-channel interpolation toward `other`.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`; `t` is clamped.
    #[must_use]
    pub fn blend(self, other: Self, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let inv_t = 1.0 - t;
        Self::rgb(
            self.r.mul_add(inv_t, other.r * t),
            self.g.mul_add(inv_t, other.g * t),
            self.b.mul_add(inv_t, other.b * t),
        )
    }

    // ─── Output ──────────────────────────────────────────────────────────

    /// Round each channel to the nearest integer.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// Snap to the 8-bit grid, yielding exactly the color that
    /// [`to_hex`](Self::to_hex) describes.
    #[must_use]
    pub fn quantize(self) -> Self {
        let (r, g, b) = self.to_rgb8();
        Self::rgb8(r, g, b)
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color::rgb({:.3}, {:.3}, {:.3})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s)
    }
}

impl Default for Color {
    /// Default is black.
    fn default() -> Self {
        Self::BLACK
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

#[inline]
fn clamp_channel(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 255.0) }
}

/// Normalize a hue to [0, 360).
fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if h >= 360.0 { 0.0 } else { h }
}

/// One HSL channel from a hue parameter `t` (wrapped into [0, 1)).
///
/// Piecewise: rising ramp below 1/6, plateau at `high` until 1/2, falling
/// ramp until 2/3, `low` afterwards.
fn hue_to_channel(low: f64, high: f64, t: f64) -> f64 {
    let t = t.rem_euclid(1.0);
    if 6.0 * t < 1.0 {
        (high - low).mul_add(6.0 * t, low)
    } else if 2.0 * t < 1.0 {
        high
    } else if 3.0 * t < 2.0 {
        (high - low).mul_add((2.0 / 3.0 - t) * 6.0, low)
    } else {
        low
    }
}

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Round a channel to u8.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    v.round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Result<Color, ParseColorError> {
    let len = s.chars().count();
    if len != 7 {
        return Err(ParseColorError::Length {
            input: s.to_owned(),
            len,
        });
    }

    let Some(digits) = s.strip_prefix('#') else {
        return Err(ParseColorError::MissingHash { input: s.to_owned() });
    };

    let digits: Vec<char> = digits.chars().collect();
    let mut channels = [0u8; 3];
    for (channel, pair) in channels.iter_mut().zip(digits.chunks_exact(2)) {
        *channel = parse_hex_byte(pair[0], pair[1]).map_err(|digit| {
            ParseColorError::InvalidDigit {
                input: s.to_owned(),
                digit,
            }
        })?;
    }

    let [r, g, b] = channels;
    Ok(Color::rgb8(r, g, b))
}

#[inline]
const fn parse_hex_digit(c: char) -> Result<u8, char> {
    match c {
        '0'..='9' => Ok(c as u8 - b'0'),
        'a'..='f' => Ok(c as u8 - b'a' + 10),
        'A'..='F' => Ok(c as u8 - b'A' + 10),
        _ => Err(c),
    }
}

#[inline]
fn parse_hex_byte(hi: char, lo: char) -> Result<u8, char> {
    let hi = parse_hex_digit(hi)?;
    let lo = parse_hex_digit(lo)?;
    Ok(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
        (a - b).abs() < epsilon
    }

    // ── Hex Parsing ──────────────────────────────────────────────────────

    #[test]
    fn hex_parsing_rrggbb() {
        let color = Color::parse("#ff8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
    }

    #[test]
    fn hex_parsing_uppercase() {
        let color = Color::parse("#FF8000").unwrap();
        assert_eq!(color.to_rgb8(), (255, 128, 0));
        assert_eq!(color.to_hex(), "#ff8000");
    }

    #[test]
    fn hex_parsing_wrong_length() {
        assert_eq!(
            Color::parse("#12345"),
            Err(ParseColorError::Length {
                input: "#12345".into(),
                len: 6
            })
        );
        assert!(matches!(Color::parse(""), Err(ParseColorError::Length { len: 0, .. })));
        assert!(matches!(Color::parse("#1234567"), Err(ParseColorError::Length { .. })));
    }

    #[test]
    fn hex_parsing_missing_hash() {
        assert_eq!(
            Color::parse("0123456"),
            Err(ParseColorError::MissingHash {
                input: "0123456".into()
            })
        );
    }

    #[test]
    fn hex_parsing_invalid_digit() {
        assert_eq!(
            Color::parse("#12g456"),
            Err(ParseColorError::InvalidDigit {
                input: "#12g456".into(),
                digit: 'g'
            })
        );
    }

    #[test]
    fn hex_parsing_non_ascii_counts_characters() {
        let err = Color::parse("#ééé").unwrap_err();
        assert!(matches!(err, ParseColorError::Length { len: 4, .. }));
    }

    #[test]
    fn from_str_matches_parse() {
        let a: Color = "#1e1e2e".parse().unwrap();
        assert_eq!(a, Color::parse("#1e1e2e").unwrap());
    }

    #[test]
    fn hex_roundtrip() {
        let original = "#c86432";
        let color = Color::parse(original).unwrap();
        assert_eq!(color.to_hex(), original);
        assert_eq!(color.to_string(), original);
    }

    #[test]
    fn error_messages_name_the_input() {
        let msg = Color::parse("#zzzzzz").unwrap_err().to_string();
        assert!(msg.contains("#zzzzzz"), "{msg}");
    }

    // ── HSL ──────────────────────────────────────────────────────────────

    #[test]
    fn hsl_known_value() {
        let color = Color::hsl(42.0, 0.3, 0.7);
        let (r, g, b) = (color.r(), color.g(), color.b());
        assert!((0.0..256.0).contains(&r));
        assert!((0.0..256.0).contains(&g));
        assert!((0.0..256.0).contains(&b));

        assert!(approx_eq(color.hue().round(), 42.0, 1e-9));
        assert!(approx_eq(color.lightness(), 0.7, 1e-12), "{}", color.lightness());
        assert_eq!(color.to_string(), "#c9bc9c");
    }

    #[test]
    fn hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5).to_hex(), "#ff0000");
        assert_eq!(Color::hsl(120.0, 1.0, 0.5).to_hex(), "#00ff00");
        assert_eq!(Color::hsl(240.0, 1.0, 0.5).to_hex(), "#0000ff");
        assert_eq!(Color::hsl(60.0, 1.0, 0.5).to_hex(), "#ffff00");
    }

    #[test]
    fn hsl_achromatic_shortcut() {
        let grey = Color::hsl(200.0, 0.0, 0.5);
        assert!(grey.is_achromatic());
        assert!(approx_eq(grey.r(), 127.5, 1e-12));
        assert_eq!(Color::hsl(0.0, 0.0, 0.0).to_hex(), "#000000");
        assert_eq!(Color::hsl(0.0, 0.0, 1.0).to_hex(), "#ffffff");
    }

    #[test]
    fn hsl_wraps_hue() {
        let a = Color::hsl(400.0, 0.6, 0.4);
        let b = Color::hsl(40.0, 0.6, 0.4);
        assert_eq!(a.to_hex(), b.to_hex());
        let c = Color::hsl(-20.0, 0.6, 0.4);
        let d = Color::hsl(340.0, 0.6, 0.4);
        assert_eq!(c.to_hex(), d.to_hex());
    }

    #[test]
    fn hue_of_primaries() {
        assert!(approx_eq(Color::rgb8(255, 0, 0).hue(), 0.0, 1e-9));
        assert!(approx_eq(Color::rgb8(0, 255, 0).hue(), 120.0, 1e-9));
        assert!(approx_eq(Color::rgb8(0, 0, 255).hue(), 240.0, 1e-9));
        assert!(approx_eq(Color::rgb8(255, 0, 255).hue(), 300.0, 1e-9));
    }

    #[test]
    fn grey_has_no_hue_or_saturation() {
        let grey = Color::rgb8(90, 90, 90);
        assert!(approx_eq(grey.hue(), 0.0, 1e-12));
        assert!(approx_eq(grey.saturation(), 0.0, 1e-12));
    }

    #[test]
    fn black_has_zero_saturation() {
        assert!(approx_eq(Color::BLACK.saturation(), 0.0, 1e-12));
        assert!(approx_eq(Color::BLACK.lightness(), 0.0, 1e-12));
    }

    #[test]
    fn white_has_full_lightness() {
        assert!(approx_eq(Color::WHITE.lightness(), 1.0, 1e-12));
        assert!(approx_eq(Color::WHITE.saturation(), 0.0, 1e-12));
    }

    // ── Luminance ────────────────────────────────────────────────────────

    #[test]
    fn luminance_extremes() {
        assert!(approx_eq(Color::BLACK.luminance(), 0.0, 1e-12));
        assert!(approx_eq(Color::WHITE.luminance(), 1.0, 1e-12));
    }

    #[test]
    fn luminance_primaries() {
        assert!(approx_eq(Color::rgb8(255, 0, 0).luminance(), 0.2126, 1e-9));
        assert!(approx_eq(Color::rgb8(0, 255, 0).luminance(), 0.7152, 1e-9));
        assert!(approx_eq(Color::rgb8(0, 0, 255).luminance(), 0.0722, 1e-9));
    }

    #[test]
    fn luminance_is_not_lightness() {
        // Pure green and pure blue share HSL lightness but not luminance.
        let green = Color::rgb8(0, 255, 0);
        let blue = Color::rgb8(0, 0, 255);
        assert!(approx_eq(green.lightness(), blue.lightness(), 1e-12));
        assert!(green.luminance() > 5.0 * blue.luminance());
    }

    #[test]
    fn perceived_lightness_extremes_and_mid_grey() {
        assert!(approx_eq(Color::BLACK.perceived_lightness(), 0.0, 1e-12));
        assert!(approx_eq(Color::WHITE.perceived_lightness(), 1.0, 1e-9));
        // sRGB #777777 is close to L* 50.
        let mid = Color::rgb8(0x77, 0x77, 0x77).perceived_lightness();
        assert!(approx_eq(mid, 0.5, 0.01), "mid grey: {mid}");
    }

    #[test]
    fn perceived_lightness_linear_segment() {
        let near_black = Color::rgb8(1, 1, 1);
        let y = near_black.luminance();
        assert!(y <= 216.0 / 24389.0);
        assert!(approx_eq(near_black.perceived_lightness(), y * 24389.0 / 2700.0, 1e-15));
    }

    #[test]
    fn perceived_lightness_branches_meet() {
        let knee = 216.0 / 24389.0;
        let linear = knee * (24389.0 / 27.0) / 100.0;
        let cube = f64::cbrt(knee).mul_add(1.16, -0.16);
        assert!(approx_eq(linear, cube, 1e-12), "{linear} vs {cube}");
        assert!(approx_eq(linear, 0.08, 1e-12));
    }

    #[test]
    fn perceived_lightness_of_dark_greys_is_small() {
        assert!(Color::rgb8(16, 16, 16).perceived_lightness() < 0.1);
        let mut last = 0.0;
        for v in 0..=40u8 {
            let l = Color::rgb8(v, v, v).perceived_lightness();
            assert!((0.0..0.2).contains(&l), "#{v:02x}: {l}");
            assert!(l >= last, "not monotone at {v}");
            last = l;
        }
    }

    // ── Contrast ─────────────────────────────────────────────────────────

    #[test]
    fn contrast_black_white_is_21() {
        assert!(approx_eq(Color::BLACK.contrast(Color::WHITE), 21.0, 1e-9));
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn contrast_with_self_is_one() {
        let c = Color::rgb8(12, 200, 99);
        assert_eq!(c.contrast(c), 1.0);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn contrast_is_symmetric() {
        let a = Color::rgb8(200, 50, 70);
        let b = Color::rgb8(20, 20, 100);
        assert_eq!(a.contrast(b), b.contrast(a));
    }

    // ── Blend ────────────────────────────────────────────────────────────

    #[test]
    fn blend_endpoints() {
        let a = Color::rgb8(10, 20, 30);
        let b = Color::rgb8(200, 100, 0);
        assert_eq!(a.blend(b, 0.0), a);
        assert_eq!(a.blend(b, 1.0), b);
    }

    #[test]
    fn blend_midpoint() {
        let mid = Color::BLACK.blend(Color::WHITE, 0.5);
        assert!(approx_eq(mid.r(), 127.5, 1e-12));
        assert_eq!(mid.to_hex(), "#808080");
    }

    #[test]
    fn blend_clamps_t() {
        let a = Color::rgb8(10, 20, 30);
        let b = Color::rgb8(200, 100, 0);
        assert_eq!(a.blend(b, -1.0), a);
        assert_eq!(a.blend(b, 7.0), b);
    }

    // ── Construction ─────────────────────────────────────────────────────

    #[test]
    fn rgb_clamps_channels() {
        let c = Color::rgb(-10.0, 300.0, f64::NAN);
        assert_eq!(c.to_rgb8(), (0, 255, 0));
    }

    #[test]
    fn quantize_matches_hex() {
        let c = Color::rgb(10.4, 10.6, 254.5);
        let q = c.quantize();
        assert_eq!(q.to_rgb8(), (10, 11, 255));
        assert_eq!(Color::parse(&c.to_hex()).unwrap(), q);
    }

    #[test]
    fn random_is_seeded() {
        let mut a = SmallRng::seed_from_u64(7);
        let mut b = SmallRng::seed_from_u64(7);
        for _ in 0..16 {
            assert_eq!(Color::random(&mut a), Color::random(&mut b));
        }
    }

    #[test]
    fn random_produces_integer_channels() {
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..64 {
            let c = Color::random(&mut rng);
            assert_eq!(c.quantize(), c);
        }
    }

    #[test]
    fn default_is_black() {
        assert_eq!(Color::default(), Color::BLACK);
    }
}
