//! Shared helpers for the test suite.
#![allow(dead_code)]

use romdeck::dom::Document;
use romdeck::i18n::Localizer;
use romdeck::player::FramePlayer;
use romdeck::prefs::MemPrefStore;
use romdeck::session::fullscreen::FullscreenProvider;
use romdeck::session::SessionController;

/// Localizer over an in-memory preference store (nothing persisted).
pub fn mem_localizer() -> Localizer {
    Localizer::new(Box::new(MemPrefStore::new()))
}

pub fn page() -> Document {
    Document::front_page()
}

pub fn controller() -> SessionController {
    SessionController::new(Box::new(FramePlayer::new()), "player.html".into())
}

/// Scriptable fullscreen capability for probe-order tests.
pub struct StubFullscreen {
    pub name: &'static str,
    pub available: bool,
}

impl FullscreenProvider for StubFullscreen {
    fn name(&self) -> &str {
        self.name
    }

    fn available(&self) -> bool {
        self.available
    }

    fn enter(&self) -> anyhow::Result<()> {
        Ok(())
    }
}

pub fn providers(specs: &[(&'static str, bool)]) -> Vec<Box<dyn FullscreenProvider>> {
    specs
        .iter()
        .map(|&(name, available)| {
            Box::new(StubFullscreen { name, available }) as Box<dyn FullscreenProvider>
        })
        .collect()
}
