// src/main.rs

use anyhow::Result;
use log::{debug, LevelFilter};
use std::env;

use pool_difficulty::pow;

/// Compact target taken from a real mainnet block header.
const DEMO_BITS: u32 = 0x1b15_a845;

fn main() -> Result<()> {
    let debug = env::var("DEBUG")
        .map(|v| v.to_lowercase() == "true")
        .unwrap_or(false);

    // Set up logging
    env_logger::Builder::new()
        .filter_level(if debug { LevelFilter::Debug } else { LevelFilter::Info })
        .init();

    debug!(
        "bits={DEMO_BITS:#010x} exponent={:#04x} significand={:#08x}",
        DEMO_BITS >> 24,
        DEMO_BITS & 0x00ff_ffff
    );

    println!("{}", pow::difficulty_from_bits(DEMO_BITS));
    Ok(())
}
