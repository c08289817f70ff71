//! Config loading and merge order: defaults ← file ← CLI.

use clap::Parser;
use romdeck::config::{AppConfig, Cli, FileConfig, DEFAULT_CONFIG_TOML};

#[test]
fn embedded_example_config_parses() {
    let fc: FileConfig = toml::from_str(DEFAULT_CONFIG_TOML).unwrap();
    let player = fc.player.unwrap();
    assert_eq!(player.page.as_deref(), Some("player.html"));
    let connect = fc.connect.unwrap();
    assert_eq!(connect.enabled, Some(true));
    assert_eq!(connect.port, Some(8080));
}

#[test]
fn defaults_without_any_file() {
    let cfg = AppConfig::default();
    assert!(cfg.language.is_empty());
    assert_eq!(cfg.player_page, "player.html");
    assert!(cfg.connect_enabled);
    assert!(!cfg.catalog.is_empty());
}

#[test]
fn builtin_catalog_resolves_known_ids() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.catalog.get("sonic2").unwrap().title, "Sonic 2");
    assert!(cfg.catalog.get("tetris").is_none());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[general]
language = "en"

[player]
page = "emu/player.html"

[connect]
enabled = false
port = 9090

[[catalog.games]]
id = "sonic2"
title = "Sonic 2"
"#,
    )
    .unwrap();

    let cli = Cli::parse_from(["romdeck", "--config", path.to_str().unwrap()]);
    let cfg = AppConfig::load(&cli).unwrap();

    assert_eq!(cfg.language, "en");
    assert_eq!(cfg.player_page, "emu/player.html");
    assert!(!cfg.connect_enabled);
    assert_eq!(cfg.connect_port, 9090);
    assert_eq!(cfg.catalog.len(), 1);
}

#[test]
fn cli_overrides_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nlanguage = \"ru\"\n").unwrap();

    let cli = Cli::parse_from([
        "romdeck",
        "--config",
        path.to_str().unwrap(),
        "--lang",
        "en",
        "--no-connect",
    ]);
    let cfg = AppConfig::load(&cli).unwrap();

    assert_eq!(cfg.language, "en");
    assert!(!cfg.connect_enabled);
}

#[test]
fn missing_config_file_is_not_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.toml");
    let cli = Cli::parse_from(["romdeck", "--config", path.to_str().unwrap()]);
    let cfg = AppConfig::load(&cli).unwrap();
    assert_eq!(cfg.player_page, "player.html");
}

#[test]
fn empty_catalog_table_keeps_the_builtin_list() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[catalog]\ngames = []\n").unwrap();

    let cli = Cli::parse_from(["romdeck", "--config", path.to_str().unwrap()]);
    let cfg = AppConfig::load(&cli).unwrap();
    assert!(!cfg.catalog.is_empty());
}
