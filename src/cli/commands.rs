//! CLI Command Implementations
//!
//! Each command loads its input, runs one transform (or a recipe) and
//! writes the result.

use std::path::Path;

use log::info;

use crate::dsp::{Transform, TransformChain};
use crate::engine::{load_wav, write_wav, ExportFormat, Sound};
use crate::error::Result;

/// Load `input`, apply a single transform and write `output`.
pub fn run_transform(
    input: &Path,
    output: &Path,
    transform: Transform,
    format: ExportFormat,
) -> Result<()> {
    info!(
        "Running {} on: {}",
        transform.transform_type(),
        input.display()
    );

    let mut chain = TransformChain::new();
    chain.push(transform);
    run_chain(input, output, &chain, format)
}

/// Load `input`, run every step of the recipe and write `output`.
pub fn apply_recipe(input: &Path, output: &Path, recipe: &Path, format: ExportFormat) -> Result<()> {
    info!("Applying recipe {} to: {}", recipe.display(), input.display());

    let chain = TransformChain::load(recipe)?;
    run_chain(input, output, &chain, format)
}

fn run_chain(input: &Path, output: &Path, chain: &TransformChain, format: ExportFormat) -> Result<()> {
    let sound = load_wav(input)?;
    let result = chain.apply(&sound)?;
    write_wav(&result, output, format)?;

    let steps: Vec<&str> = chain.iter().map(Transform::transform_type).collect();
    println!(
        "{}: {} -> {} ({} frames)",
        steps.join(" > "),
        input.display(),
        output.display(),
        result.len()
    );
    Ok(())
}

/// Print rate, length and level of a WAV file.
pub fn show_info(input: &Path) -> Result<()> {
    info!("Inspecting: {}", input.display());

    let sound = load_wav(input)?;
    println!("{}", describe(&sound));
    Ok(())
}

fn describe(sound: &Sound) -> String {
    format!(
        "Sample rate: {} Hz\nFrames: {}\nDuration: {:.3}s\nPeak: {:.4}",
        sound.rate(),
        sound.len(),
        sound.duration_secs(),
        sound.peak()
    )
}
