//! # theminator-theme — Contrast-Driven Theme Synthesis
//!
//! Generates a complete editor color theme from a single background color.
//! Every requested key is classified by its name, given a hue shared with
//! the rest of its category, and solved for a contrast ratio against the
//! background that suits what it paints.
//!
//! # Architecture
//!
//! ```text
//! background + keys + rng
//!     │
//!     ▼
//! keys.rs:      split keys, classify each into a Role
//!     │
//!     ▼
//! generator.rs: derive foreground, assign one hue per category
//!     │
//!     ▼
//! contrast.rs:  solve luminance for a target ratio, synthesize the color
//!     │
//!     ▼
//! coverage.rs:  report which keys were filled and which were left out
//! ```
//!
//! # Contrast
//!
//! Ratios follow the WCAG relative-luminance definition, so they range from
//! 1:1 to 21:1. A band that cannot be reached against the background is
//! never forced: background-like keys fall back to the background itself,
//! anything else is omitted.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/luminance variable names are inherently similar.
#![allow(clippy::similar_names)]

pub mod config;
pub mod contrast;
pub mod coverage;
pub mod generator;
pub mod keys;
pub mod vocabulary;

pub use config::GeneratorConfig;
pub use contrast::{ContrastError, ContrastRange};
pub use coverage::Coverage;
pub use generator::{Generated, ThemeGenerator, ThemeMapping, derive_foreground, generate};
pub use keys::{ColorKey, Role};
pub use vocabulary::WORKBENCH_KEYS;
