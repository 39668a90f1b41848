// SPDX-License-Identifier: MIT
//
// theminator — generate a complete editor color theme from one background.
//
// This is the main binary that wires together the crates:
//
//   theminator-color → hex parsing, HSL, luminance and contrast
//   theminator-theme → key classification, contrast solving, generation
//
// Data flows one way:
//
//   argv → background + key list → ThemeGenerator → JSON on stdout
//                                                 → coverage log on stderr
//
// stdout carries nothing but the theme, so the output can be piped
// straight into a theme file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use theminator_color::Color;
use theminator_theme::{ThemeGenerator, WORKBENCH_KEYS};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "theminator",
    about = "Generate a complete editor color theme from one background color",
    version
)]
struct Opts {
    /// Background color as `#rrggbb`
    background: Color,

    /// Newline-delimited color keys to fill (defaults to the builtin
    /// workbench keys)
    #[arg(long, value_name = "FILE")]
    keys: Option<PathBuf>,

    /// Seed for a reproducible theme
    #[arg(long, env = "THEMINATOR_SEED")]
    seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn", value_name = "LEVEL")]
    log_level: String,
}

fn main() -> Result<()> {
    let opts = Opts::parse();
    init_tracing(&opts.log_level);

    let keys = match &opts.keys {
        Some(path) => read_keys(path)?,
        None => WORKBENCH_KEYS.iter().map(ToString::to_string).collect(),
    };

    let mut rng = match opts.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    info!(background = %opts.background, keys = keys.len(), "generating theme");
    let generated = ThemeGenerator::default().generate(opts.background, &keys, &mut rng);
    debug!(foreground = %generated.foreground, "derived foreground");

    let json = serde_json::to_string_pretty(&generated.colors).context("serializing theme")?;
    println!("{json}");

    generated.coverage.log();
    Ok(())
}

/// One key per line; surrounding whitespace and blank lines are ignored.
fn read_keys(path: &Path) -> Result<Vec<String>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading key list {}", path.display()))?;
    Ok(parse_keys(&text))
}

fn parse_keys(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Logs go to stderr. `RUST_LOG` wins over `--log-level`.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // Fails only when a subscriber is already installed; keep that one.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
