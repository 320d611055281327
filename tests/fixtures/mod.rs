//! Shared test fixtures for E2E CLI and pipeline tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use kitchen_layout::models::{
    Direction, HandleConfig, HangingModuleConfig, KitchenConfig, LayoutLine, MaterialOverrides,
    MismatchPolicy, ModuleConfig, ModuleWidth, RoomDimensions,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to the kitchen-layout binary
pub fn kitchen_bin() -> &'static str {
    env!("CARGO_BIN_EXE_kitchen-layout")
}

/// Creates a Command with an isolated config directory.
pub fn isolated_command(args: &[&str], config_dir: &Path) -> std::process::Command {
    let mut cmd = std::process::Command::new(kitchen_bin());
    cmd.env("KITCHEN_LAYOUT_CONFIG_DIR", config_dir);
    cmd.env_remove("RUST_LOG");
    cmd.args(args);
    cmd
}

/// A 3000 × 2000 × 2500 room.
pub fn test_room() -> RoomDimensions {
    RoomDimensions {
        side_a: 3000.0,
        side_b: 2000.0,
        height: 2500.0,
    }
}

/// An L-shaped kitchen using the embedded catalogs.
///
/// - Line 0 runs along +X (2400): sink 800, base auto, base 600 with a handle
/// - Line 1 runs along -Z (1800): tall 600 with a 2100 offset, base auto
/// - One wall cabinet hangs above the sink
pub fn test_kitchen_l_shaped() -> KitchenConfig {
    let line_a = LayoutLine::new(2400.0, Direction::POSITIVE_X)
        .with_module(ModuleConfig::new("sink-1", "sink", ModuleWidth::Fixed(800.0)))
        .with_module(ModuleConfig::new("base-1", "base", ModuleWidth::Auto))
        .with_module(
            ModuleConfig::new("base-2", "base", ModuleWidth::Fixed(600.0))
                .with_handle(HandleConfig::default())
                .with_overrides(MaterialOverrides {
                    facade: Some("graphite".to_string()),
                    ..MaterialOverrides::default()
                }),
        );
    let line_b = LayoutLine::new(1800.0, Direction::NEGATIVE_Z)
        .with_module(
            ModuleConfig::new("tall-1", "tall", ModuleWidth::Fixed(600.0)).with_offset_y(2100.0),
        )
        .with_module(ModuleConfig::new("base-3", "base", ModuleWidth::Auto));

    let mut config = KitchenConfig {
        kitchen_id: "kitchen-l".to_string(),
        name: "L-shaped test kitchen".to_string(),
        layout_lines: vec![line_a, line_b],
        ..KitchenConfig::default()
    };
    config.global_settings.dimensions = Some(test_room());
    config.default_materials.facade = Some("white-matte".to_string());
    config.default_materials.countertop = Some("oak".to_string());
    config.default_materials.handle = Some("steel-bar".to_string());
    config.hanging_modules.push(HangingModuleConfig::new(
        ModuleConfig::new("wall-1", "wall", ModuleWidth::Auto),
        "sink-1",
    ));
    config
}

/// A single line whose fixed modules overflow it by 200.
pub fn test_kitchen_overflowing(policy: MismatchPolicy) -> KitchenConfig {
    let line = LayoutLine::new(1000.0, Direction::POSITIVE_X)
        .with_module(ModuleConfig::new("b1", "base", ModuleWidth::Fixed(600.0)))
        .with_module(ModuleConfig::new("b2", "base", ModuleWidth::Fixed(600.0)))
        .with_module(ModuleConfig::new("b3", "base", ModuleWidth::Auto));

    let mut config = KitchenConfig {
        kitchen_id: "kitchen-overflow".to_string(),
        layout_lines: vec![line],
        ..KitchenConfig::default()
    };
    config.global_settings.dimensions = Some(test_room());
    config.global_settings.mismatch_policy = policy;
    config
}

/// Writes a kitchen config as JSON.
pub fn write_kitchen_file(config: &KitchenConfig, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(config).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

/// Creates a kitchen config file in a temp directory and returns the path.
pub fn create_temp_kitchen_file(config: &KitchenConfig) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("kitchen.json");
    write_kitchen_file(config, &path).expect("Failed to write kitchen file");
    (path, temp_dir)
}

/// Creates a raw file (e.g. JSON5 or a broken config) in a temp directory.
pub fn create_temp_file(name: &str, content: &str) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write file");
    (path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_l_shaped() {
        let config = test_kitchen_l_shaped();
        assert_eq!(config.layout_lines.len(), 2);
        assert_eq!(config.modules().count(), 5);
        assert!(config.has_module("sink-1"));
    }

    #[test]
    fn test_fixture_round_trips_through_json() {
        let config = test_kitchen_l_shaped();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = KitchenConfig::from_json_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
