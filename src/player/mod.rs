// src/player/mod.rs  —  PlayerSurface seam + player-page addresses
//
// The emulator itself is an external page; this side only ever sets
// or clears the address of the surface embedding it.  Addresses carry
// exactly one of two query parameters: `game` (catalog id) or `url`
// (percent-encoded local ROM handle).

pub mod romstore;

pub use romstore::{LocalRom, RomHandle, RomStore};

/// The embedded player surface.  Starting a game means setting its
/// address; stopping means clearing it — a cleared surface unloads
/// whatever was running.
pub trait PlayerSurface {
    fn load(&mut self, url: &str);
    fn clear(&mut self);
    fn address(&self) -> Option<&str>;
    fn name(&self) -> &str;
}

/// Production surface: models the embedded frame.  Holds the current
/// address and logs transitions; resolution failures are the player
/// page's own concern.
#[derive(Debug, Default)]
pub struct FramePlayer {
    addr: Option<String>,
}

impl FramePlayer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PlayerSurface for FramePlayer {
    fn load(&mut self, url: &str) {
        log::info!("player: loading {url}");
        self.addr = Some(url.to_string());
    }

    fn clear(&mut self) {
        if self.addr.take().is_some() {
            log::info!("player: cleared");
        }
    }

    fn address(&self) -> Option<&str> {
        self.addr.as_deref()
    }

    fn name(&self) -> &str {
        "frame"
    }
}

/// Address for a catalog game: `<page>?game=<id>`.
pub fn catalog_url(page: &str, game_id: &str) -> String {
    format!("{page}?game={}", encode_query_value(game_id))
}

/// Address for a user-supplied ROM: `<page>?url=<handle>`.
pub fn local_url(page: &str, handle: &RomHandle) -> String {
    format!("{page}?url={}", encode_query_value(handle.as_str()))
}

/// Percent-encodes a query value.  Unreserved characters (RFC 3986)
/// pass through; everything else, byte by byte, becomes `%XX`.
pub fn encode_query_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for b in raw.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char)
            }
            _ => out.push_str(&format!("%{b:02X}")),
        }
    }
    out
}
