//! Generator tuning: contrast bands per role, structural blend ratios, and
//! the sampling budget.

use crate::contrast::{ContrastRange, RANGE_ATTEMPTS};
use crate::keys::Role;

/// Knobs for [`ThemeGenerator`](crate::ThemeGenerator).
///
/// The defaults keep the bands ordered background < neutral < foreground,
/// which is what makes a generated theme read as surfaces, chrome, and
/// text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeneratorConfig {
    /// Contrast against the background for background-like keys.
    pub background_band: ContrastRange,
    /// Contrast for keys that are neither backgrounds nor foregrounds.
    pub neutral_band: ContrastRange,
    /// Contrast for foreground-like keys.
    pub foreground_band: ContrastRange,
    /// Blend ratio (background → foreground) for dimmed backgrounds.
    pub dim_background: f64,
    /// Blend ratio (background → foreground) for dimmed foregrounds.
    pub dim_foreground: f64,
    /// How far a background-like key's saturation may stray from the
    /// background's own.
    pub saturation_radius: f64,
    /// Draw budget for rejection sampling.
    pub range_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            background_band: ContrastRange::between(1.3, 3.0),
            neutral_band: ContrastRange::between(2.0, 4.0),
            foreground_band: ContrastRange::between(7.0, 8.0),
            dim_background: 0.33,
            dim_foreground: 0.66,
            saturation_radius: 0.1,
            range_attempts: RANGE_ATTEMPTS,
        }
    }
}

impl GeneratorConfig {
    /// The contrast band for a solved role; `None` for copied and blended
    /// roles.
    #[must_use]
    pub const fn band(&self, role: Role) -> Option<ContrastRange> {
        match role {
            Role::Background => Some(self.background_band),
            Role::Neutral => Some(self.neutral_band),
            Role::Foreground => Some(self.foreground_band),
            Role::ReuseBackground
            | Role::ReuseForeground
            | Role::DimmedBackground
            | Role::DimmedForeground => None,
        }
    }
}
