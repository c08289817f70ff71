// src/config.rs  —  Runtime configuration (CLI + TOML)
use anyhow::{Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::catalog::{Catalog, GameEntry};

/// The example config is embedded directly in the binary at compile time.
/// Users can write it out with:  romdeck --write-config
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../config.toml.example");

// ── CLI ───────────────────────────────────────────────────────────────────────
#[derive(Parser, Debug)]
#[command(
    name        = "romdeck",
    about       = "Retro-game front end — browse the catalog, play, switch language",
    version,
)]
pub struct Cli {
    /// Config file path (default: ~/.config/romdeck/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// UI language for this run: ru | en (also persisted as the preference)
    #[arg(long)]
    pub lang: Option<String>,

    /// Start a catalog game immediately (id from --list-games)
    #[arg(long)]
    pub game: Option<String>,

    /// Start a local ROM file immediately
    #[arg(long)]
    pub rom: Option<PathBuf>,

    /// Player page path the surface addresses (default: player.html)
    #[arg(long)]
    pub player_page: Option<String>,

    /// Skip the play-on-phone local-IP lookup
    #[arg(long, action)]
    pub no_connect: bool,

    /// Print the game catalog and exit
    #[arg(long, action)]
    pub list_games: bool,

    /// Write the built-in default config.toml to the config path and exit.
    /// Use --config <PATH> to write to a custom location.
    #[arg(long, action)]
    pub write_config: bool,

    /// Print the built-in default config.toml to stdout and exit
    #[arg(long, action)]
    pub print_config: bool,
}

// ── TOML file structure ───────────────────────────────────────────────────────
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    pub general: Option<GeneralCfg>,
    pub player:  Option<PlayerCfg>,
    pub connect: Option<ConnectCfg>,
    pub catalog: Option<CatalogCfg>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralCfg {
    /// Fixed language for every run; leave unset to follow the
    /// persisted preference.
    pub language: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCfg {
    pub page: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectCfg {
    pub enabled:  Option<bool>,
    /// Base URL of the host serving /api/ip
    pub endpoint: Option<String>,
    /// Port advertised in the play-on-phone URL
    pub port:     Option<u16>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogCfg {
    pub games: Option<Vec<GameEntry>>,
}

// ── Resolved / merged config ──────────────────────────────────────────────────
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Empty string means "no override — use the persisted preference"
    pub language:         String,
    pub player_page:      String,
    pub connect_enabled:  bool,
    pub connect_endpoint: String,
    pub connect_port:     u16,
    pub catalog:          Catalog,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            language:         String::new(),
            player_page:      "player.html".into(),
            connect_enabled:  true,
            connect_endpoint: "http://127.0.0.1:8080".into(),
            connect_port:     8080,
            catalog:          Catalog::builtin(),
        }
    }
}

// ── Config loader ─────────────────────────────────────────────────────────────
impl AppConfig {
    /// Write the embedded default config to disk.
    /// Returns the path it was written to.
    pub fn write_default_config(cli: &Cli) -> Result<PathBuf> {
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Creating config directory {:?}", parent))?;
        }
        std::fs::write(&path, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Writing config to {:?}", path))?;
        Ok(path)
    }

    pub fn load(cli: &Cli) -> Result<Self> {
        let mut cfg = Self::default();

        // 1. Load TOML file
        let path = cli.config.clone().unwrap_or_else(default_config_path);
        if path.exists() {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Reading config {:?}", path))?;
            let fc: FileConfig = toml::from_str(&raw)
                .with_context(|| format!("Parsing config {:?}", path))?;
            cfg.apply_file(&fc);
        } else {
            log::debug!(
                "No config file at {} — using built-in defaults",
                path.display()
            );
        }

        // 2. Apply CLI overrides
        cfg.apply_cli(cli);
        Ok(cfg)
    }

    fn apply_file(&mut self, fc: &FileConfig) {
        if let Some(g) = &fc.general {
            if let Some(v) = &g.language { self.language = v.clone(); }
        }
        if let Some(p) = &fc.player {
            if let Some(v) = &p.page { self.player_page = v.clone(); }
        }
        if let Some(c) = &fc.connect {
            if let Some(v) = c.enabled   { self.connect_enabled  = v; }
            if let Some(v) = &c.endpoint { self.connect_endpoint = v.clone(); }
            if let Some(v) = c.port      { self.connect_port     = v; }
        }
        if let Some(c) = &fc.catalog {
            if let Some(v) = &c.games {
                if !v.is_empty() {
                    self.catalog = Catalog::new(v.clone());
                }
            }
        }
    }

    fn apply_cli(&mut self, cli: &Cli) {
        if let Some(v) = &cli.lang        { self.language    = v.clone(); }
        if let Some(v) = &cli.player_page { self.player_page = v.clone(); }
        if cli.no_connect                 { self.connect_enabled = false; }
    }
}

pub fn default_config_path() -> PathBuf {
    config_dir().join("romdeck").join("config.toml")
}

pub fn config_dir() -> PathBuf {
    if let Ok(v) = std::env::var("XDG_CONFIG_HOME") { return PathBuf::from(v); }
    if let Ok(v) = std::env::var("APPDATA")          { return PathBuf::from(v); }
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_default();
    PathBuf::from(home).join(".config")
}
