// src/tui/mod.rs  —  ratatui terminal interface
#[cfg(feature = "tui")]
mod inner;
#[cfg(feature = "tui")]
pub use inner::Tui;

#[cfg(not(feature = "tui"))]
use crate::catalog::Catalog;
#[cfg(not(feature = "tui"))]
use crate::dom::Document;

/// Per-run front-end state, owned by the main loop and handed to the
/// renderer each tick.
#[derive(Default, Clone)]
pub struct UiState {
    /// Selected row in the games list
    pub selected: usize,
    /// ROM-path prompt open (the `o` key)
    pub prompt_active: bool,
    pub prompt_buf: String,
    /// Transient status / warning line
    pub status: String,
    /// Play-on-phone URL once the lookup resolved
    pub connect_url: Option<String>,
    /// Current player surface address, for the session panel
    pub player_address: Option<String>,
}

#[cfg(not(feature = "tui"))]
pub struct Tui;
#[cfg(not(feature = "tui"))]
impl Tui {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self)
    }
    pub fn draw(
        &mut self,
        _doc: &Document,
        _catalog: &Catalog,
        _s: &UiState,
    ) -> anyhow::Result<()> {
        Ok(())
    }
    pub fn cleanup(&mut self) {}
}
