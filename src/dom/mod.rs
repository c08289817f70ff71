// src/dom/mod.rs  —  In-memory document of tagged elements
//
// The front end operates on a flat, ordered set of named elements.
// Elements opt into localization through two annotation channels:
// a text/value key and a placeholder key.  The session controller
// toggles visibility of the three view containers; nothing else
// mutates the element set after construction.

use std::collections::HashMap;

use crate::i18n::LanguageCode;

/// What kind of control an element renders as.  Submit- and
/// button-style form inputs take localized strings on their *value*;
/// every other kind takes them on its *text*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Text,
    Button,
    Link,
    TextInput,
    SubmitInput,
    ButtonInput,
}

impl ElementKind {
    pub fn rewrites_value(self) -> bool {
        matches!(self, ElementKind::SubmitInput | ElementKind::ButtonInput)
    }
}

#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub kind: ElementKind,
    /// Key for the text/value channel (at most one per element)
    pub text_key: Option<String>,
    /// Key for the placeholder channel (at most one per element)
    pub placeholder_key: Option<String>,
    pub text: String,
    pub value: String,
    pub placeholder: String,
    pub visible: bool,
}

impl Element {
    pub fn new(id: &str, kind: ElementKind) -> Self {
        Self {
            id: id.to_string(),
            kind,
            text_key: None,
            placeholder_key: None,
            text: String::new(),
            value: String::new(),
            placeholder: String::new(),
            visible: true,
        }
    }

    pub fn text_key(mut self, key: &str) -> Self {
        self.text_key = Some(key.to_string());
        self
    }

    pub fn placeholder_key(mut self, key: &str) -> Self {
        self.placeholder_key = Some(key.to_string());
        self
    }

    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }
}

/// The live document: ordered elements, language metadata and the
/// vertical scroll position of the page.
pub struct Document {
    lang: LanguageCode,
    elements: Vec<Element>,
    index: HashMap<String, usize>,
    pub scroll_top: u32,
}

/// Ids of the designated language-toggle controls.  Fixed set — the
/// localizer labels these with the inactive language's short code.
pub const TOGGLE_CONTROLS: &[&str] = &["lang-toggle", "lang-toggle-player"];

impl Document {
    pub fn new() -> Self {
        Self {
            lang: LanguageCode::PRIMARY,
            elements: Vec::new(),
            index: HashMap::new(),
            scroll_top: 0,
        }
    }

    pub fn push(&mut self, el: Element) {
        // Last write wins on a duplicate id, matching getElementById
        // semantics of resolving to a single node.
        if let Some(&i) = self.index.get(&el.id) {
            self.elements[i] = el;
        } else {
            self.index.insert(el.id.clone(), self.elements.len());
            self.elements.push(el);
        }
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.index.get(id).map(|&i| &self.elements[i])
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        let i = *self.index.get(id)?;
        Some(&mut self.elements[i])
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn elements_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    pub fn lang(&self) -> LanguageCode {
        self.lang
    }

    pub fn set_lang(&mut self, lang: LanguageCode) {
        self.lang = lang;
    }

    /// Show/hide are no-ops on an unknown id.
    pub fn show(&mut self, id: &str) {
        if let Some(el) = self.element_mut(id) {
            el.visible = true;
        }
    }

    pub fn hide(&mut self, id: &str) {
        if let Some(el) = self.element_mut(id) {
            el.visible = false;
        }
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.element(id).map(|el| el.visible).unwrap_or(false)
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll_top = 0;
    }

    /// The game page.  Three view containers — the games list and the
    /// controls panel (browse state), and the session container
    /// (playing state, hidden initially).  The feedback form lives on
    /// its own page; its tagged controls are part of the element set
    /// so language changes keep them current, but they start hidden.
    pub fn front_page() -> Self {
        use ElementKind::*;
        let mut doc = Document::new();

        // Header / navigation
        doc.push(Element::new("site-title", Text).text_key("site_title"));
        doc.push(Element::new("site-header", Text).text_key("site_header"));
        doc.push(Element::new("site-desc", Text).text_key("site_desc"));
        doc.push(Element::new("nav-home", Link).text_key("nav_home"));
        doc.push(Element::new("nav-feedback", Link).text_key("nav_feedback"));
        doc.push(Element::new("nav-chat", Link).text_key("nav_chat"));
        doc.push(Element::new("lang-toggle", Button));

        // Browse view
        doc.push(Element::new("games-section", Text).text_key("games_section"));
        doc.push(Element::new("game-list", Text));
        doc.push(Element::new("play-btn", Button).text_key("play_btn"));

        // Controls panel: upload + play-on-phone
        doc.push(Element::new("controls", Text));
        doc.push(Element::new("upload-label", Text).text_key("upload_label"));
        doc.push(Element::new("rom-path", TextInput));
        doc.push(Element::new("connect-mobile", Text).text_key("connect_mobile"));
        doc.push(Element::new("scan-qr", Text).text_key("scan_qr"));
        doc.push(Element::new("local-ip", Text));
        doc.push(Element::new("qrcode", Text));

        // Session view (hidden while browsing)
        doc.push(Element::new("game-container", Text).hidden());
        doc.push(
            Element::new("game-status", Text)
                .text_key("click_to_start")
                .hidden(),
        );
        doc.push(Element::new("close-game", Button).text_key("close_game").hidden());
        doc.push(
            Element::new("fullscreen-game", Button)
                .text_key("fullscreen")
                .hidden(),
        );
        doc.push(Element::new("lang-toggle-player", Button).hidden());

        // Feedback form (separate page — hidden here, still localized)
        doc.push(Element::new("feedback-title", Text).text_key("feedback_title").hidden());
        doc.push(
            Element::new("feedback-name", TextInput)
                .placeholder_key("feedback_placeholder_name")
                .hidden(),
        );
        doc.push(
            Element::new("feedback-text", TextInput)
                .placeholder_key("feedback_placeholder_text")
                .hidden(),
        );
        doc.push(
            Element::new("feedback-submit", SubmitInput)
                .text_key("feedback_submit")
                .hidden(),
        );

        doc.push(Element::new("footer", Text).text_key("footer_text"));
        doc
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
