// src/main.rs  —  romdeck entry point
use anyhow::Result;
use clap::Parser;

use romdeck::config::{self, AppConfig, Cli};
use romdeck::dom::Document;
use romdeck::i18n::Localizer;
use romdeck::player::{FramePlayer, LocalRom};
use romdeck::prefs::FilePrefStore;
use romdeck::session::SessionController;
#[cfg(feature = "tui")]
use romdeck::session::{fullscreen, FullscreenOutcome, SessionState};
#[cfg(feature = "tui")]
use romdeck::tui::{Tui, UiState};

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    // ── --print-config  ───────────────────────────────────────────────────────
    if cli.print_config {
        print!("{}", config::DEFAULT_CONFIG_TOML);
        return Ok(());
    }

    // ── --write-config  ───────────────────────────────────────────────────────
    if cli.write_config {
        let path = AppConfig::write_default_config(&cli)?;
        println!("Config written to: {}", path.display());
        return Ok(());
    }

    // ── Load config ───────────────────────────────────────────────────────────
    let cfg = AppConfig::load(&cli)?;

    // ── --list-games  ─────────────────────────────────────────────────────────
    if cli.list_games {
        for g in cfg.catalog.iter() {
            println!("  {:<18}  {}", g.id, g.title);
        }
        return Ok(());
    }

    // ── Document + localization ───────────────────────────────────────────────
    // The persisted preference is applied before anything is shown;
    // a --lang / config override then switches (and persists) on top.
    let mut doc = Document::front_page();
    let prefs = FilePrefStore::open(FilePrefStore::default_path());
    let mut localizer = Localizer::new(Box::new(prefs));
    localizer.init(&mut doc);
    if !cfg.language.is_empty() {
        localizer.set_language_tag(&mut doc, &cfg.language);
    }

    // ── Session controller ────────────────────────────────────────────────────
    let mut session =
        SessionController::new(Box::new(FramePlayer::new()), cfg.player_page.clone());

    // ── Play-on-phone lookup (one-shot, fire-and-forget) ─────────────────────
    #[cfg(all(feature = "connect", feature = "tui"))]
    let rx_connect = {
        use romdeck::connect;
        let (tx, rx) = std::sync::mpsc::channel::<connect::ConnectInfo>();
        if cfg.connect_enabled {
            connect::spawn_ip_lookup(cfg.connect_endpoint.clone(), cfg.connect_port, tx);
        }
        rx
    };
    #[cfg(all(feature = "connect", feature = "tui"))]
    let mut qr: Box<dyn romdeck::connect::QrRenderer> = Box::new(romdeck::connect::LogQr);

    // ── Immediate start from the command line ────────────────────────────────
    if let Some(id) = &cli.game {
        let title = cfg
            .catalog
            .get(id)
            .map(|g| g.title.clone())
            .unwrap_or_else(|| id.clone());
        session.start_catalog_game(&mut doc, id, &title);
    } else if let Some(path) = &cli.rom {
        session.start_local_file(&mut doc, LocalRom::from_path(path)?);
    }

    // ── Front end ─────────────────────────────────────────────────────────────
    #[cfg(not(feature = "tui"))]
    {
        // Headless build: show the localized page once and leave.
        println!("{}", doc.element("site-title").map(|e| e.text.as_str()).unwrap_or(""));
        for g in cfg.catalog.iter() {
            println!("  {:<18}  {}", g.id, g.title);
        }
        return Ok(());
    }

    #[cfg(feature = "tui")]
    {
        use crossterm::event::{self, Event, KeyCode, KeyEventKind};
        use std::time::Duration;

        let mut tui = Tui::new()?;
        let mut ui = UiState::default();
        let fs_providers = fullscreen::host_providers();
        let tick = Duration::from_millis(33);

        'main: loop {
            // ── Single crossterm event reader ─────────────────────────────
            // ALL events are read here — never anywhere else.
            while event::poll(Duration::from_millis(0))? {
                let Event::Key(k) = event::read()? else { continue };
                if k.kind == KeyEventKind::Release {
                    continue;
                }

                if ui.prompt_active {
                    // ── ROM-path prompt ────────────────────────────────
                    // Type a path, Enter confirms.  An empty confirm
                    // models a dismissed picker: nothing happens.
                    match k.code {
                        KeyCode::Esc => {
                            ui.prompt_active = false;
                            ui.prompt_buf.clear();
                        }
                        KeyCode::Backspace => {
                            ui.prompt_buf.pop();
                        }
                        KeyCode::Enter => {
                            ui.prompt_active = false;
                            let path = std::path::PathBuf::from(ui.prompt_buf.trim());
                            ui.prompt_buf.clear();
                            match LocalRom::from_path(&path) {
                                Ok(rom) => session.start_local_file(&mut doc, rom),
                                Err(e) => {
                                    log::warn!("upload: {e:#}");
                                    ui.status = format!(
                                        "{} {}",
                                        romdeck::i18n::lookup_or_primary(
                                            localizer.active(),
                                            "error_file_desc",
                                        )
                                        .unwrap_or(""),
                                        path.display()
                                    );
                                }
                            }
                        }
                        KeyCode::Char(c) => ui.prompt_buf.push(c),
                        _ => {}
                    }
                    continue;
                }

                match k.code {
                    KeyCode::Esc => {
                        if session.state() == SessionState::Playing {
                            session.end_session(&mut doc);
                            ui.status.clear();
                        } else {
                            break 'main;
                        }
                    }
                    KeyCode::Char('q') if session.state() == SessionState::Browsing => {
                        break 'main;
                    }
                    KeyCode::Up => {
                        ui.selected = ui.selected.saturating_sub(1);
                    }
                    KeyCode::Down => {
                        if ui.selected + 1 < cfg.catalog.len() {
                            ui.selected += 1;
                        }
                    }
                    KeyCode::Enter if session.state() == SessionState::Browsing => {
                        if let Some(g) = cfg.catalog.iter().nth(ui.selected) {
                            let (id, title) = (g.id.clone(), g.title.clone());
                            session.start_catalog_game(&mut doc, &id, &title);
                        }
                    }
                    KeyCode::Char('o') if session.state() == SessionState::Browsing => {
                        ui.prompt_active = true;
                    }
                    KeyCode::Char('f') if session.state() == SessionState::Playing => {
                        match session.request_fullscreen(&fs_providers, localizer.prefs()) {
                            FullscreenOutcome::Entered(name) => {
                                log::debug!("fullscreen entered via {name}");
                            }
                            FullscreenOutcome::Unsupported(warning) => {
                                ui.status = warning;
                            }
                        }
                    }
                    KeyCode::Char('l') | KeyCode::Tab => {
                        localizer.toggle_language(&mut doc);
                    }
                    _ => {}
                }
            }

            // ── Play-on-phone result, if it arrived ───────────────────────
            #[cfg(feature = "connect")]
            while let Ok(info) = rx_connect.try_recv() {
                if let Some(el) = doc.element_mut("local-ip") {
                    el.text = info.url.clone();
                }
                qr.render(&info.url);
                ui.connect_url = Some(info.url);
            }

            ui.player_address = session.player().address().map(str::to_string);

            tui.draw(&doc, &cfg.catalog, &ui)?;
            std::thread::sleep(tick);
        }

        tui.cleanup();
    }

    Ok(())
}
