//! Integration tests for manifest + keymap loading and keymap-wide validation.

// Allow unwrap and panic in tests - these are standard for test code
#![allow(clippy::unwrap_used, clippy::panic)]

use bindcheck::{CliError, Keymap, Manifest, validate_keymap};
use bindcheck_core::{BindingValidator, audit_uniqueness};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

const MANIFEST: &str = r#"
[validation]
max_keyboard_usage = 0x67
consumer_usages = "basic"

[[behaviors]]
name = "key_press"
metadata = { type = "standard", param1_domain = "hid_usage", param2_domain = "null" }

[[behaviors]]
name = "momentary_layer"
metadata = { type = "standard", param1_domain = "layer_index", param2_domain = "null" }

[[behaviors]]
name = "transparent"
metadata = { type = "standard", param1_domain = "null", param2_domain = "null" }

[[behaviors]]
name = "bluetooth"

[behaviors.metadata]
type = "custom"

[[behaviors.metadata.sets]]
values = [{ position = 0, type = "exact", value = 0 }]

[[behaviors.metadata.sets]]
values = [
    { position = 0, type = "exact", value = 3 },
    { position = 1, type = "range", min = 0, max = 4 },
]

[[behaviors]]
name = "ext_power"
ready = false
metadata = { type = "standard", param1_domain = "null", param2_domain = "null" }
"#;

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn load_both(keymap: &str) -> (Manifest, Keymap) {
    let dir = TempDir::new().unwrap();
    let manifest_path = write_file(&dir, "behaviors.toml", MANIFEST);
    let keymap_path = write_file(&dir, "keymap.toml", keymap);

    (
        Manifest::load(&manifest_path).unwrap(),
        Keymap::load(&keymap_path).unwrap(),
    )
}

#[test]
fn valid_keymap_passes() {
    let (manifest, keymap) = load_both(
        r#"
        [[layers]]
        name = "base"
        bindings = [
            { behavior = "key_press", param1 = 0x00070004 },
            { behavior = "key_press", param1 = 0x000C00E9 },
            { behavior = "momentary_layer", param1 = 1 },
        ]

        [[layers]]
        name = "lower"
        bindings = [
            { behavior = "transparent" },
            { behavior = "bluetooth", param1 = 3, param2 = 2 },
            { behavior = "bluetooth" },
        ]
        "#,
    );
    let registry = manifest.registry();
    let config = manifest.validation.with_layer_count(keymap.layer_count());
    let report = validate_keymap(&keymap, &BindingValidator::new(&registry, config));

    assert_eq!(report.checked, 6);
    assert!(report.is_valid(), "unexpected failures: {:?}", report.failures);
}

#[test]
fn failures_carry_location_and_kind() {
    let (manifest, keymap) = load_both(
        r#"
        [[layers]]
        bindings = [
            { behavior = "key_press", param1 = 0x000C0100 },
            { behavior = "momentary_layer", param1 = 1 },
            { behavior = "ext_power" },
            { behavior = "bluetooth", param1 = 3, param2 = 5 },
            { behavior = "kp", param1 = 4 },
        ]
        "#,
    );
    let registry = manifest.registry();
    let config = manifest.validation.with_layer_count(keymap.layer_count());
    let report = validate_keymap(&keymap, &BindingValidator::new(&registry, config));

    let summary: Vec<_> = report
        .failures
        .iter()
        .map(|f| (f.position, f.kind))
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, "invalid"),
            (1, "invalid"),
            (2, "unknown_behavior"),
            (3, "invalid"),
            (4, "unknown_behavior"),
        ]
    );

    let err = report.into_result().unwrap_err();
    assert!(matches!(
        err,
        CliError::InvalidKeymap {
            failed: 5,
            checked: 5
        }
    ));
}

#[test]
fn manifest_audit_reports_duplicates() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "dupes.toml",
        r#"
        [[behaviors]]
        name = "reset"
        metadata = { type = "standard", param1_domain = "null", param2_domain = "null" }

        [[behaviors]]
        name = "reset"
        metadata = { type = "standard", param1_domain = "layer_index", param2_domain = "null" }
        "#,
    );
    let manifest = Manifest::load(&path).unwrap();
    let registry = manifest.registry();

    let audit = audit_uniqueness(&registry);
    assert_eq!(audit.collisions.len(), 1);
    assert_eq!(audit.collisions[0].first, 0);
    assert_eq!(audit.collisions[0].second, 1);

    // The first registration still answers lookups.
    let validator = BindingValidator::new(&registry, manifest.validation);
    let keymap = Keymap::from_toml_str(
        r#"
        [[layers]]
        bindings = [{ behavior = "reset", param1 = 1 }]
        "#,
        &path,
    )
    .unwrap();
    assert_eq!(validate_keymap(&keymap, &validator).failures.len(), 1);
}

#[test]
fn missing_manifest_is_io_error() {
    let dir = TempDir::new().unwrap();
    let result = Manifest::load(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(CliError::Io { .. })));
}

#[test]
fn malformed_manifest_is_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "broken.toml", "[[behaviors]]\nname = 42\n");
    let result = Manifest::load(&path);

    match result {
        Err(CliError::Config { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected config error, got {other:?}"),
    }
}
