use std::path::Path;

use anyhow::{Context, Result};
use colored::*;
use pipl_core::encoder::write_pipl_file;
use pipl_core::platform::HostPlatform;

use super::load_property_sets;
use crate::InputArgs;

pub fn execute(input: &InputArgs, output: &Path) -> Result<()> {
    let sets = load_property_sets(input)?;
    let platform = HostPlatform::current();

    write_pipl_file(output, &sets, platform)
        .with_context(|| format!("Failed to write PIPL: {}", output.display()))?;

    println!(
        "{} {} ({} plugin(s), {})",
        "Wrote".green().bold(),
        output.display(),
        sets.len(),
        platform
    );
    Ok(())
}
