use anyhow::{Context, Result};
use colored::*;
use pipl_core::catalog::{load_catalog, PropertyDefinition};
use pipl_core::platform::PlatformScope;

pub fn execute() -> Result<()> {
    let catalog = load_catalog().context("Failed to load property catalog")?;

    println!("{}", "Properties".bold().underline());
    for definition in catalog.definitions() {
        println!("{}", describe(definition));
    }
    Ok(())
}

fn describe(definition: &PropertyDefinition) -> String {
    let scope = match definition.scope {
        PlatformScope::Universal => "all platforms",
        PlatformScope::WindowsOnly => "windows",
        PlatformScope::MacOnly => "mac",
    };
    format!(
        "{} {} {} {}",
        format!("{}/{}", definition.vendor, definition.key).cyan().bold(),
        definition.field.name(),
        format!("({}, id {})", definition.kind.name(), definition.id).dimmed(),
        format!("[{}]", scope).yellow()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_mentions_key_and_scope() {
        colored::control::set_override(false);
        let catalog = load_catalog().unwrap();
        let lines: Vec<String> = catalog.definitions().iter().map(describe).collect();

        assert_eq!(lines[0], "ADBE/pinm plugin name (string, id 0) [all platforms]");
        assert!(lines[1].contains("wx86") && lines[1].ends_with("[windows]"));
        assert!(lines[2].contains("mi32") && lines[2].ends_with("[mac]"));
    }
}
