use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use pipl_core::manifest::manifest_json;
use pipl_core::platform::HostPlatform;
use tracing::info;

use super::load_property_sets;
use crate::InputArgs;

pub fn execute(input: &InputArgs, output: Option<&Path>) -> Result<()> {
    let sets = load_property_sets(input)?;
    let json = manifest_json(&sets, HostPlatform::current())?;

    match output {
        Some(path) => {
            fs::write(path, &json)
                .with_context(|| format!("Failed to write manifest: {}", path.display()))?;
            info!(path = %path.display(), "Wrote PIPL manifest");
        }
        None => println!("{}", json),
    }
    Ok(())
}
