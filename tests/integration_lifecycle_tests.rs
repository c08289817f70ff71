//! End-to-end flows across both components: language switching while
//! a session runs, and the persisted preference surviving a reload.

mod common;

use common::{controller, page, providers};
use romdeck::dom::Document;
use romdeck::i18n::{LanguageCode, Localizer};
use romdeck::prefs::{FilePrefStore, MemPrefStore};
use romdeck::session::{FullscreenOutcome, SessionState};

#[test]
fn language_switch_mid_session_relabels_the_session_view() {
    let mut doc = page();
    let mut loc = Localizer::new(Box::new(MemPrefStore::new()));
    let mut session = controller();

    loc.init(&mut doc);
    session.start_catalog_game(&mut doc, "sonic2", "Sonic 2");
    assert_eq!(doc.element("close-game").unwrap().text, "Закрыть игру");

    loc.toggle_language(&mut doc);
    assert_eq!(doc.element("close-game").unwrap().text, "Close Game");
    assert_eq!(doc.element("fullscreen-game").unwrap().text, "⛶ Fullscreen");
    // The session itself is untouched by a language change.
    assert_eq!(session.state(), SessionState::Playing);
    assert_eq!(session.player().address(), Some("player.html?game=sonic2"));
}

#[test]
fn fullscreen_warning_tracks_a_mid_session_toggle() {
    let mut doc = page();
    let mut loc = Localizer::new(Box::new(MemPrefStore::new()));
    let mut session = controller();

    loc.init(&mut doc);
    session.start_catalog_game(&mut doc, "sonic2", "Sonic 2");
    loc.toggle_language(&mut doc); // ru → en

    let outcome = session.request_fullscreen(&providers(&[]), loc.prefs());
    assert_eq!(
        outcome,
        FullscreenOutcome::Unsupported("Your browser does not support fullscreen mode.".into())
    );
}

#[test]
fn full_cycle_returns_to_a_localized_browse_view() {
    let mut doc = page();
    let mut loc = Localizer::new(Box::new(MemPrefStore::with_language("en")));
    let mut session = controller();

    loc.init(&mut doc);
    session.start_local_file(
        &mut doc,
        Some(romdeck::player::LocalRom {
            name: "homebrew.gen".into(),
            bytes: vec![0xDE, 0xAD],
        }),
    );
    session.end_session(&mut doc);

    assert_eq!(session.state(), SessionState::Browsing);
    assert!(session.player().address().is_none());
    assert!(session.roms().is_empty());
    assert!(doc.is_visible("game-list"));
    assert_eq!(doc.element("games-section").unwrap().text, "Games List");
}

#[test]
fn preference_set_in_one_run_localizes_the_next() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.toml");

    {
        let mut doc = page();
        let mut loc = Localizer::new(Box::new(FilePrefStore::open(path.clone())));
        loc.init(&mut doc);
        loc.toggle_language(&mut doc); // persists "en"
    }

    let mut doc = Document::front_page();
    let mut loc = Localizer::new(Box::new(FilePrefStore::open(path)));
    loc.init(&mut doc);

    assert_eq!(doc.lang(), LanguageCode::En);
    assert_eq!(doc.element("site-header").unwrap().text, "Sega Genesis Games");
    assert_eq!(doc.element("lang-toggle").unwrap().text, "RU");
}
