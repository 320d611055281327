//! End-to-end tests for `kitchen-layout config` commands.

use std::fs;
use tempfile::TempDir;

mod fixtures;
use fixtures::*;

#[test]
fn test_config_show_default() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(
        output.status.code(),
        Some(0),
        "Show config should succeed. stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Kitchen Layout Configuration"));
    assert!(stdout.contains("(not saved yet, showing defaults)"));
    assert!(stdout.contains("Materials: (built-in)"));
    assert!(stdout.contains("Enabled: false"));
}

#[test]
fn test_config_show_after_save_reports_file() {
    let config_dir = TempDir::new().unwrap();
    let set = isolated_command(&["config", "set", "--center", "true"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    assert_eq!(set.status.code(), Some(0));

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    let config_file = config_dir.path().join("config.toml");
    assert!(stdout.contains(&format!("File: {}\n", config_file.display())));
    assert!(!stdout.contains("not saved yet"));
    assert!(stdout.contains("Enabled: true"));
}

#[test]
fn test_config_path_uses_config_dir() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "path"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(
        stdout.trim(),
        config_dir.path().join("config.toml").display().to_string()
    );
}

#[test]
fn test_config_set_and_show_json() {
    let config_dir = TempDir::new().unwrap();

    let output = isolated_command(
        &["config", "set", "--center", "true", "--offset-z", "-75"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let output = isolated_command(&["config", "show", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let config: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(config["centering"]["enabled"], true);
    assert_eq!(config["centering"]["offset_z"], -75.0);
    assert_eq!(config["output"]["pretty"], true);
}

#[test]
fn test_config_set_requires_option() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(&["config", "set"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("At least one"));
}

#[test]
fn test_config_set_rejects_missing_library() {
    let config_dir = TempDir::new().unwrap();
    let output = isolated_command(
        &["config", "set", "--materials", "/nonexistent/materials.json"],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_configured_library_replaces_builtin() {
    let config_dir = TempDir::new().unwrap();
    let (materials_path, _materials_dir) = create_temp_file(
        "materials.json5",
        r##"{
            facades: { "ink": { color: "#101820" } },
            countertops: {},
            handles: {},
        }"##,
    );

    let output = isolated_command(
        &["config", "set", "--materials", materials_path.to_str().unwrap()],
        config_dir.path(),
    )
    .output()
    .expect("Failed to execute command");
    assert_eq!(output.status.code(), Some(0));

    let output = isolated_command(&["library", "materials", "--json"], config_dir.path())
        .output()
        .expect("Failed to execute command");
    let materials: serde_json::Value =
        serde_json::from_str(&String::from_utf8_lossy(&output.stdout)).unwrap();

    assert_eq!(materials["facades"]["ink"]["color"], "#101820");
    assert!(materials["facades"].get("white-matte").is_none());
}

#[test]
fn test_broken_config_file_is_reported() {
    let config_dir = TempDir::new().unwrap();
    fs::write(config_dir.path().join("config.toml"), "[centering\n").unwrap();

    let output = isolated_command(&["config", "show"], config_dir.path())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to load configuration"));
}
