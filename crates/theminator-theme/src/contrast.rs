//! WCAG contrast solving. Finds colors at a requested contrast ratio.
//!
//! The contrast ratio between two colors depends only on their relative
//! luminances, so it can be inverted in closed form. Given a reference
//! luminance `L` and a ratio `C` there are at most two candidate
//! luminances, one brighter and one darker than the reference:
//!
//! ```text
//!   brighter = C * L + 0.05 * C - 0.05
//!   darker   = (L - 0.05 * C + 0.05) / C
//! ```
//!
//! Each is usable only if it lies in [0, 1]. Once a luminance is chosen,
//! [`synthesize`] finds the HSL lightness that produces it for a given hue
//! and saturation, so the hue of a category survives the contrast fix.
//!
//! When a ratio cannot be reached exactly, [`sample_in_range`] falls back
//! to bounded rejection sampling over random colors.

use std::fmt;

use rand::Rng;
use theminator_color::Color;
use thiserror::Error;

/// Attempts [`sample_in_range`] gets before giving up.
pub const RANGE_ATTEMPTS: usize = 30;

/// The largest contrast ratio two sRGB colors can have (black on white).
pub const MAX_CONTRAST: f64 = 21.0;

/// Roots this close outside [0, 1] are rounding noise and get clamped.
const ROOT_TOLERANCE: f64 = 1e-12;

// ---------------------------------------------------------------------------
// ContrastRange
// ---------------------------------------------------------------------------

/// An acceptable band of contrast ratios, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastRange {
    pub min: f64,
    /// `None` means "at least `min`".
    pub max: Option<f64>,
}

impl ContrastRange {
    /// Ratios of `min` or more.
    #[must_use]
    pub const fn at_least(min: f64) -> Self {
        Self { min, max: None }
    }

    /// Ratios between `min` and `max`.
    #[must_use]
    pub const fn between(min: f64, max: f64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    /// Whether `ratio` falls inside the band.
    #[must_use]
    pub fn contains(self, ratio: f64) -> bool {
        ratio >= self.min && self.max.is_none_or(|max| ratio <= max)
    }

    /// How far `ratio` is from the band; 0.0 inside it.
    #[must_use]
    pub fn distance(self, ratio: f64) -> f64 {
        if ratio < self.min {
            return self.min - ratio;
        }
        match self.max {
            Some(max) if ratio > max => ratio - max,
            _ => 0.0,
        }
    }

    /// Pick a ratio to aim for.
    ///
    /// Bounded bands draw uniformly from their middle half, which leaves
    /// room for the rounding that happens when a color is written as
    /// `#rrggbb`. Open bands aim 5% above their minimum.
    pub fn pick_target<R: Rng + ?Sized>(self, rng: &mut R) -> f64 {
        match self.max {
            Some(max) if max > self.min => {
                let quarter = (max - self.min) / 4.0;
                rng.random_range(self.min + quarter..=max - quarter)
            }
            Some(_) => self.min,
            None => (self.min * 1.05).min(MAX_CONTRAST),
        }
    }
}

impl fmt::Display for ContrastRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max {
            Some(max) => write!(f, "[{:.2}, {max:.2}]", self.min),
            None => write!(f, ">= {:.2}", self.min),
        }
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Why a contrast request could not be met.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ContrastError {
    /// Neither the brighter nor the darker root lies in [0, 1].
    #[error("contrast {ratio:.2} is unreachable against luminance {reference:.4}")]
    Unreachable { reference: f64, ratio: f64 },

    /// Rejection sampling ran out of attempts. `fallback` is the
    /// deterministic substitute: the reference color for an open band,
    /// the closest candidate seen for a bounded one.
    #[error("no color within contrast {range} after {attempts} attempts")]
    Exhausted {
        range: ContrastRange,
        attempts: usize,
        fallback: Color,
    },
}

impl ContrastError {
    /// The substitute color, if this error carries one.
    #[must_use]
    pub const fn fallback(&self) -> Option<Color> {
        match self {
            Self::Unreachable { .. } => None,
            Self::Exhausted { fallback, .. } => Some(*fallback),
        }
    }
}

// ---------------------------------------------------------------------------
// Exact solving
// ---------------------------------------------------------------------------

/// Luminance that is `ratio` times brighter than `reference` (may exceed 1).
#[must_use]
pub fn brighter_luminance(reference: f64, ratio: f64) -> f64 {
    ratio.mul_add(reference, 0.05f64.mul_add(ratio, -0.05))
}

/// Luminance that is `ratio` times darker than `reference` (may be negative).
#[must_use]
pub fn darker_luminance(reference: f64, ratio: f64) -> f64 {
    (0.05f64.mul_add(-ratio, reference) + 0.05) / ratio
}

/// Find a luminance with exactly `ratio` contrast against `reference`.
///
/// When both the brighter and the darker root are valid, one is chosen
/// uniformly at random.
///
/// # Errors
///
/// [`ContrastError::Unreachable`] if neither root lies in [0, 1], or if
/// `ratio` is below 1 or not finite.
pub fn solve_luminance<R: Rng + ?Sized>(
    reference: f64,
    ratio: f64,
    rng: &mut R,
) -> Result<f64, ContrastError> {
    if !ratio.is_finite() || ratio < 1.0 {
        return Err(ContrastError::Unreachable { reference, ratio });
    }

    let valid = |l: f64| {
        (-ROOT_TOLERANCE..=1.0 + ROOT_TOLERANCE)
            .contains(&l)
            .then(|| l.clamp(0.0, 1.0))
    };
    let brighter = valid(brighter_luminance(reference, ratio));
    let darker = valid(darker_luminance(reference, ratio));

    match (brighter, darker) {
        (Some(b), Some(d)) => Ok(if rng.random_bool(0.5) { b } else { d }),
        (Some(l), None) | (None, Some(l)) => Ok(l),
        (None, None) => Err(ContrastError::Unreachable { reference, ratio }),
    }
}

/// Build the color with the given hue and saturation whose luminance is
/// `luminance` (clamped to [0, 1]).
///
/// Luminance rises monotonically with HSL lightness at a fixed hue and
/// saturation, so a binary search on lightness converges to the target.
#[must_use]
pub fn synthesize(hue: f64, saturation: f64, luminance: f64) -> Color {
    let target = luminance.clamp(0.0, 1.0);

    let (mut lo, mut hi) = (0.0f64, 1.0f64);
    for _ in 0..64 {
        let mid = (lo + hi) * 0.5;
        if Color::hsl(hue, saturation, mid).luminance() < target {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Color::hsl(hue, saturation, (lo + hi) * 0.5)
}

// ---------------------------------------------------------------------------
// Range sampling
// ---------------------------------------------------------------------------

/// Draw up to `attempts` random colors and return the first whose contrast
/// against `reference` lies in `range`.
///
/// # Errors
///
/// [`ContrastError::Exhausted`] when no draw lands in range. Its fallback
/// is `reference` for an open band, or the draw closest to a bounded band
/// (the reference again if `attempts` is 0). No fresh color is drawn for
/// the fallback.
pub fn sample_in_range<R: Rng + ?Sized>(
    reference: Color,
    range: ContrastRange,
    attempts: usize,
    rng: &mut R,
) -> Result<Color, ContrastError> {
    let mut closest: Option<(f64, Color)> = None;

    for _ in 0..attempts {
        let candidate = Color::random(rng);
        let ratio = reference.contrast(candidate);
        if range.contains(ratio) {
            return Ok(candidate);
        }

        let distance = range.distance(ratio);
        if closest.is_none_or(|(best, _)| distance < best) {
            closest = Some((distance, candidate));
        }
    }

    let fallback = match (range.max, closest) {
        (Some(_), Some((_, candidate))) => candidate,
        _ => reference,
    };

    Err(ContrastError::Exhausted {
        range,
        attempts,
        fallback,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
