// src/session/mod.rs  —  Game-session lifecycle
//
// Exactly one of two view states is ever visible: browsing the
// catalog, or playing inside the session container.  All transitions
// run synchronously off user events; the player surface is driven as
// a side effect and must never stay addressed while the session view
// is hidden.

pub mod fullscreen;

use crate::dom::Document;
use crate::i18n::{self, LanguageCode};
use crate::player::{self, LocalRom, PlayerSurface, RomHandle, RomStore};
use crate::prefs::PrefStore;
use fullscreen::FullscreenProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Browsing,
    Playing,
}

/// Result of a fullscreen request.  Not a state transition either way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullscreenOutcome {
    /// A capability resolved and was invoked.
    Entered(String),
    /// No capability on this host — carry the localized warning.
    Unsupported(String),
}

pub struct SessionController {
    state: SessionState,
    player: Box<dyn PlayerSurface>,
    roms: RomStore,
    active_rom: Option<RomHandle>,
    player_page: String,
}

impl SessionController {
    pub fn new(player: Box<dyn PlayerSurface>, player_page: String) -> Self {
        Self {
            state: SessionState::Browsing,
            player,
            roms: RomStore::new(),
            active_rom: None,
            player_page,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn player(&self) -> &dyn PlayerSurface {
        self.player.as_ref()
    }

    pub fn roms(&self) -> &RomStore {
        &self.roms
    }

    /// Browsing → Playing from a catalog entry.  Never fails locally:
    /// an unresolvable id is the player page's problem.
    pub fn start_catalog_game(&mut self, doc: &mut Document, game_id: &str, title: &str) {
        self.show_session_view(doc);
        doc.scroll_to_top();
        self.player
            .load(&player::catalog_url(&self.player_page, game_id));
        self.state = SessionState::Playing;
        log::info!("session: starting game {title} ({game_id})");
    }

    /// Browsing → Playing from a user-picked file.  `None` models a
    /// dismissed picker and is a silent no-op.
    pub fn start_local_file(&mut self, doc: &mut Document, rom: Option<LocalRom>) {
        let Some(rom) = rom else {
            log::debug!("session: no file selected");
            return;
        };
        let name = rom.name.clone();
        let handle = self.roms.create(rom);
        self.show_session_view(doc);
        self.player
            .load(&player::local_url(&self.player_page, &handle));
        self.active_rom = Some(handle);
        self.state = SessionState::Playing;
        log::info!("session: loading local file {name}");
    }

    /// Playing → Browsing.  The address is cleared before the view
    /// swap so the emulator can never keep running invisibly, and the
    /// local-ROM handle (if any) is released — it is not reusable
    /// across sessions.
    pub fn end_session(&mut self, doc: &mut Document) {
        self.player.clear();
        if let Some(handle) = self.active_rom.take() {
            self.roms.revoke(&handle);
        }
        doc.hide("game-container");
        doc.hide("game-status");
        doc.hide("close-game");
        doc.hide("fullscreen-game");
        doc.hide("lang-toggle-player");
        doc.show("game-list");
        doc.show("controls");
        self.state = SessionState::Browsing;
    }

    /// Probe `providers` in order and invoke the first available one.
    /// With no capability on the host, returns a warning in the
    /// persisted language (primary when nothing is persisted).  No
    /// state side effects in either case.
    pub fn request_fullscreen(
        &self,
        providers: &[Box<dyn FullscreenProvider>],
        prefs: &dyn PrefStore,
    ) -> FullscreenOutcome {
        if let Some(p) = fullscreen::detect(providers) {
            if let Err(e) = p.enter() {
                // Fire-and-forget like the start operations: the
                // capability exists, the attempt itself is best-effort.
                log::warn!("fullscreen: {} failed: {e}", p.name());
            }
            return FullscreenOutcome::Entered(p.name().to_string());
        }

        let lang = prefs
            .language()
            .as_deref()
            .and_then(LanguageCode::parse)
            .unwrap_or(LanguageCode::PRIMARY);
        let msg = i18n::lookup_or_primary(lang, "alert_fullscreen_error")
            .unwrap_or("Fullscreen is not supported on this host.");
        FullscreenOutcome::Unsupported(msg.to_string())
    }

    fn show_session_view(&mut self, doc: &mut Document) {
        doc.hide("game-list");
        doc.hide("controls");
        doc.show("game-container");
        doc.show("game-status");
        doc.show("close-game");
        doc.show("fullscreen-game");
        doc.show("lang-toggle-player");
    }
}
