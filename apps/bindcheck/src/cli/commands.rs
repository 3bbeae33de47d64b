//! # CLI Command Implementations
//!
//! Each command receives the registry built from the manifest at start-up.

use bindcheck::{CliError, Keymap, KeymapReport, Manifest, validate_keymap};
use bindcheck_core::{AuditReport, BehaviorDriver, BindingValidator, ParameterMetadata, Registry};
use std::path::Path;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// One-line description of a behavior's parameter metadata.
fn describe_metadata(driver: &dyn BehaviorDriver) -> String {
    match driver.parameter_metadata() {
        Ok(ParameterMetadata::Standard(standard)) => format!(
            "standard({:?}, {:?})",
            standard.param1_domain, standard.param2_domain
        ),
        Ok(ParameterMetadata::Custom(custom)) => match custom.sets {
            Some(sets) => format!("custom ({} sets)", sets.len()),
            None => "custom (no sets)".to_string(),
        },
        Ok(ParameterMetadata::Unrecognized) => "unrecognized".to_string(),
        Err(e) => format!("error: {}", e),
    }
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// VALIDATE COMMAND
// =============================================================================

/// Validate every binding of a keymap.
pub fn cmd_validate(
    registry: &Registry<'_>,
    manifest: &Manifest,
    keymap_path: &Path,
    layers: Option<u32>,
    json_mode: bool,
) -> Result<(), CliError> {
    let keymap = Keymap::load(keymap_path)?;
    let config = manifest
        .validation
        .with_layer_count(layers.unwrap_or_else(|| keymap.layer_count()));
    let validator = BindingValidator::new(registry, config);

    let report = validate_keymap(&keymap, &validator);

    if json_mode {
        print_json(&validation_json(keymap_path, config.keymap_layer_count, &report));
    } else {
        print_report(keymap_path, &report);
    }

    report.into_result().map(|_| ())
}

fn validation_json(
    keymap_path: &Path,
    layer_count: u32,
    report: &KeymapReport,
) -> serde_json::Value {
    serde_json::json!({
        "keymap": keymap_path.to_string_lossy(),
        "layer_count": layer_count,
        "valid": report.is_valid(),
        "checked": report.checked,
        "failures": report.failures,
    })
}

fn print_report(keymap_path: &Path, report: &KeymapReport) {
    println!("Keymap Validation");
    println!("=================");
    println!("Keymap:   {}", keymap_path.display());
    println!("Checked:  {}", report.checked);
    println!("Failures: {}", report.failures.len());

    if report.is_valid() {
        return;
    }

    println!();
    for failure in &report.failures {
        let layer = match &failure.layer_name {
            Some(name) => format!("{} ({})", failure.layer, name),
            None => failure.layer.to_string(),
        };
        println!(
            "  [layer {} key {}] {} {:#x} {:#x}: {}",
            layer,
            failure.position,
            failure.behavior,
            failure.param1,
            failure.param2,
            failure.message
        );
    }
}

// =============================================================================
// RESOLVE COMMAND
// =============================================================================

/// Resolve a behavior name.
pub fn cmd_resolve(registry: &Registry<'_>, name: &str, json_mode: bool) -> Result<(), CliError> {
    let driver = registry
        .resolve(name)
        .ok_or_else(|| CliError::NotFound(name.to_string()))?;
    let metadata = describe_metadata(driver);

    if json_mode {
        print_json(&serde_json::json!({
            "name": driver.name(),
            "metadata": metadata,
        }));
        return Ok(());
    }

    println!("{} -> {}", driver.name(), metadata);
    Ok(())
}

// =============================================================================
// AUDIT COMMAND
// =============================================================================

/// Print the start-up uniqueness audit.
///
/// Duplicates are reported but are not an error.
pub fn cmd_audit(report: &AuditReport, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        print_json(&serde_json::json!({
            "clean": report.is_clean(),
            "collisions": report.collisions,
        }));
        return Ok(());
    }

    if report.is_clean() {
        println!("All behavior names are unique.");
        return Ok(());
    }

    println!("Duplicate behavior names:");
    for collision in &report.collisions {
        println!(
            "  '{}' registered at {} and {} (lookups use {})",
            collision.name, collision.first, collision.second, collision.first
        );
    }
    Ok(())
}

// =============================================================================
// BEHAVIORS COMMAND
// =============================================================================

/// List every registered behavior.
pub fn cmd_behaviors(registry: &Registry<'_>, json_mode: bool) -> Result<(), CliError> {
    if json_mode {
        let entries: Vec<_> = registry
            .entries()
            .iter()
            .map(|driver| {
                serde_json::json!({
                    "name": driver.name(),
                    "ready": driver.is_ready(),
                    "metadata": describe_metadata(*driver),
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(entries));
        return Ok(());
    }

    println!("Registered Behaviors ({})", registry.len());
    println!("====================");
    for (index, driver) in registry.entries().iter().enumerate() {
        let ready = if driver.is_ready() { "ready" } else { "not ready" };
        println!(
            "  {:>3}  {:<24} {:<10} {}",
            index,
            driver.name(),
            ready,
            describe_metadata(*driver)
        );
    }
    Ok(())
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use bindcheck::BindingFailure;

    #[test]
    fn validation_json_shape() {
        let report = KeymapReport {
            checked: 2,
            failures: vec![BindingFailure {
                layer: 1,
                layer_name: Some("lower".to_string()),
                position: 0,
                behavior: "momentary_layer".to_string(),
                param1: 9,
                param2: 0,
                kind: "invalid",
                message: "layer 9 out of range".to_string(),
            }],
        };

        let value = validation_json(Path::new("keymap.toml"), 2, &report);

        assert_eq!(value["keymap"], "keymap.toml");
        assert_eq!(value["layer_count"], 2);
        assert_eq!(value["valid"], false);
        assert_eq!(value["checked"], 2);

        let failure = &value["failures"][0];
        assert_eq!(failure["layer"], 1);
        assert_eq!(failure["layer_name"], "lower");
        assert_eq!(failure["position"], 0);
        assert_eq!(failure["behavior"], "momentary_layer");
        assert_eq!(failure["param1"], 9);
        assert_eq!(failure["kind"], "invalid");
        assert_eq!(failure["message"], "layer 9 out of range");
    }

    #[test]
    fn clean_report_json_is_valid() {
        let report = KeymapReport {
            checked: 4,
            failures: Vec::new(),
        };
        let value = validation_json(Path::new("keymap.toml"), 1, &report);

        assert_eq!(value["valid"], true);
        assert_eq!(value["failures"].as_array().map(Vec::len), Some(0));
    }
}
