// SPDX-License-Identifier: MIT
//
// theminator-color — the color model behind theminator's theme generator.
//
// A small, exact sRGB color type: channels live in [0, 255], every derived
// view (hue, saturation, lightness, luminance, perceived lightness) is a
// pure function of them, and the only serialized form is the 7-character
// lowercase "#rrggbb" string that editors store in their settings.
//
// Contrast is always computed from WCAG relative luminance. HSL lightness
// is a construction coordinate, never a readability measure.

pub mod color;

pub use color::{Color, ParseColorError};
