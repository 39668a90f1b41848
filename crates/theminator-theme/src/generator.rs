//! Theme color generation: one background in, a full key → color map out.
//!
//! Each call is one pure pass over the requested keys:
//!
//! 1. derive an editor foreground from the background
//! 2. give every distinct category one random hue
//! 3. color each key by its [`Role`]: copy, blend, or contrast-solve
//!
//! Randomness comes only from the caller's `Rng`, so a seeded generator
//! reproduces a theme exactly, and two seeds give two different but
//! equally valid themes.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;
use theminator_color::Color;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::contrast::{self, ContrastRange};
use crate::coverage::Coverage;
use crate::keys::{ColorKey, Role};

/// Key → `#rrggbb` for every key that received a color.
pub type ThemeMapping = BTreeMap<String, String>;

/// The result of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    pub colors: ThemeMapping,
    pub coverage: Coverage,
    /// The foreground the structural keys were blended toward.
    pub foreground: Color,
    /// The hue each category was given.
    pub hues: BTreeMap<String, f64>,
}

// ---------------------------------------------------------------------------
// ThemeGenerator
// ---------------------------------------------------------------------------

/// Maps a background color and a list of keys to a [`ThemeMapping`].
#[derive(Debug, Clone, Default)]
pub struct ThemeGenerator {
    config: GeneratorConfig,
}

impl ThemeGenerator {
    #[must_use]
    pub const fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate colors for `keys` against `background`.
    ///
    /// Duplicate keys are colored once. Keys whose contrast band cannot be
    /// met are left out of the mapping and listed in
    /// [`Generated::coverage`]; nothing here fails.
    pub fn generate<R, K>(&self, background: Color, keys: &[K], rng: &mut R) -> Generated
    where
        R: Rng + ?Sized,
        K: AsRef<str>,
    {
        let background = background.quantize();
        let foreground = derive_foreground(background, rng);

        let mut seen = HashSet::new();
        let keys: Vec<ColorKey<'_>> = keys
            .iter()
            .map(|key| key.as_ref())
            .filter(|key| seen.insert(*key))
            .map(ColorKey::parse)
            .collect();

        let mut hues = BTreeMap::new();
        for key in &keys {
            if !hues.contains_key(key.category()) {
                hues.insert(key.category().to_owned(), rng.random_range(0.0..360.0));
            }
        }

        let mut colors = ThemeMapping::new();
        let mut omitted = Vec::new();
        for key in &keys {
            let hue = hues[key.category()];
            match self.color_for(*key, hue, background, foreground, rng) {
                Some(color) => {
                    colors.insert(key.raw().to_owned(), color.to_hex());
                }
                None => {
                    debug!(key = key.raw(), "no color meets the contrast band; key left unset");
                    omitted.push(key.raw().to_owned());
                }
            }
        }

        let coverage = Coverage {
            total: keys.len(),
            filled: colors.len(),
            omitted,
        };
        debug!(
            background = %background,
            foreground = %foreground,
            filled = coverage.filled,
            total = coverage.total,
            "theme colors generated"
        );

        Generated {
            colors,
            coverage,
            foreground,
            hues,
        }
    }

    fn color_for<R: Rng + ?Sized>(
        &self,
        key: ColorKey<'_>,
        hue: f64,
        background: Color,
        foreground: Color,
        rng: &mut R,
    ) -> Option<Color> {
        let role = key.role();
        let band = match role {
            Role::ReuseBackground => return Some(background),
            Role::ReuseForeground => return Some(foreground),
            Role::DimmedBackground => {
                return Some(background.blend(foreground, self.config.dim_background));
            }
            Role::DimmedForeground => {
                return Some(background.blend(foreground, self.config.dim_foreground));
            }
            Role::Background | Role::Foreground | Role::Neutral => self.config.band(role)?,
        };

        let saturation = self.pick_saturation(role, background, rng);
        let candidate = self.solve(background, hue, saturation, band, rng).quantize();

        if band.contains(background.contrast(candidate)) {
            Some(candidate)
        } else if role == Role::Background {
            Some(background)
        } else {
            None
        }
    }

    /// Aim for a contrast inside `band`: exact solve first, sampling when
    /// the exact ratio is out of reach.
    fn solve<R: Rng + ?Sized>(
        &self,
        background: Color,
        hue: f64,
        saturation: f64,
        band: ContrastRange,
        rng: &mut R,
    ) -> Color {
        let target = band.pick_target(rng);
        match contrast::solve_luminance(background.luminance(), target, rng) {
            Ok(luminance) => contrast::synthesize(hue, saturation, luminance),
            Err(err) => {
                debug!(%err, "falling back to sampling");
                contrast::sample_in_range(background, band, self.config.range_attempts, rng)
                    .unwrap_or_else(|err| err.fallback().unwrap_or(background))
            }
        }
    }

    /// Background-like keys stay near the background's own saturation (and
    /// stay grey on a grey background); everything else is free.
    fn pick_saturation<R: Rng + ?Sized>(&self, role: Role, background: Color, rng: &mut R) -> f64 {
        if role != Role::Background {
            return rng.random_range(0.0..=1.0);
        }
        if background.is_achromatic() {
            return 0.0;
        }

        let radius = self.config.saturation_radius.abs();
        let s = background.saturation();
        rng.random_range(s - radius..=s + radius).clamp(0.0, 1.0)
    }
}

/// Generate with the default configuration.
pub fn generate<R, K>(background: Color, keys: &[K], rng: &mut R) -> Generated
where
    R: Rng + ?Sized,
    K: AsRef<str>,
{
    ThemeGenerator::default().generate(background, keys, rng)
}

/// The editor foreground for a background: a desaturated color on the
/// opposite side of the hue wheel (any hue for a grey background), light
/// on dark backgrounds and dark on light ones.
pub fn derive_foreground<R: Rng + ?Sized>(background: Color, rng: &mut R) -> Color {
    let hue = if background.is_achromatic() {
        rng.random_range(0.0..360.0)
    } else {
        (background.hue() + 180.0) % 360.0
    };
    let lightness = if background.perceived_lightness() > 0.5 {
        0.1
    } else {
        0.9
    };

    Color::hsl(hue, 0.1, lightness).quantize()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
