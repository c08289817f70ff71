// src/i18n/mod.rs  —  Bilingual string tables + localization engine
use std::collections::HashMap;

use crate::dom::{Document, TOGGLE_CONTROLS};
use crate::prefs::PrefStore;

/// The two supported UI languages.  Russian is the primary code — it
/// is the default wherever no preference has been persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageCode {
    Ru,
    En,
}

impl LanguageCode {
    pub const PRIMARY: LanguageCode = LanguageCode::Ru;

    pub fn parse(tag: &str) -> Option<Self> {
        match tag {
            "ru" => Some(LanguageCode::Ru),
            "en" => Some(LanguageCode::En),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            LanguageCode::Ru => "ru",
            LanguageCode::En => "en",
        }
    }

    /// The other code of the fixed two-code set.
    pub fn other(self) -> Self {
        match self {
            LanguageCode::Ru => LanguageCode::En,
            LanguageCode::En => LanguageCode::Ru,
        }
    }

    /// Label for the language-toggle buttons: the short code of the
    /// language you would switch *to*.  A fixed inversion, not a
    /// table lookup.
    pub fn toggle_label(self) -> &'static str {
        match self {
            LanguageCode::Ru => "EN",
            LanguageCode::En => "RU",
        }
    }
}

/// One language's string table.
pub trait Lang: Send + Sync {
    /// `None` when the key is not in this table — callers must leave
    /// existing content untouched in that case.
    fn get(&self, key: &str) -> Option<&'static str>;
    fn name(&self) -> &str;
}

/// Table registry
pub struct I18n {
    inner: Box<dyn Lang>,
}

impl I18n {
    pub fn new(lang: LanguageCode) -> Self {
        let inner: Box<dyn Lang> = match lang {
            LanguageCode::Ru => Box::new(Ru::new()),
            LanguageCode::En => Box::new(En::new()),
        };
        Self { inner }
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.inner.get(key)
    }

    pub fn lang_name(&self) -> &str {
        self.inner.name()
    }
}

/// Looks a key up in `lang`, falling back to the primary table when
/// the key is absent there.  Used for user-facing warnings that must
/// always resolve to something.
pub fn lookup_or_primary(lang: LanguageCode, key: &str) -> Option<&'static str> {
    I18n::new(lang)
        .get(key)
        .or_else(|| I18n::new(LanguageCode::PRIMARY).get(key))
}

// ── The engine ────────────────────────────────────────────────────────────────

/// Owns the persisted language preference and rewrites the document's
/// tagged elements from the string tables.  The rewrite is total over
/// the fixed element set and idempotent, so it simply reruns on every
/// language change.
pub struct Localizer {
    prefs: Box<dyn PrefStore>,
}

impl Localizer {
    pub fn new(prefs: Box<dyn PrefStore>) -> Self {
        Self { prefs }
    }

    /// The currently active code: the persisted preference, or the
    /// primary code when none (or an unrecognized one) is stored.
    pub fn active(&self) -> LanguageCode {
        self.prefs
            .language()
            .as_deref()
            .and_then(LanguageCode::parse)
            .unwrap_or(LanguageCode::PRIMARY)
    }

    /// Read-only view of the preference store for collaborators that
    /// only consult the persisted value (the session controller's
    /// fullscreen warning).
    pub fn prefs(&self) -> &dyn PrefStore {
        self.prefs.as_ref()
    }

    /// Apply `lang`: persist it, set the document language metadata,
    /// rewrite every tagged element, and relabel the toggle controls.
    pub fn set_language(&mut self, doc: &mut Document, lang: LanguageCode) {
        self.prefs.set_language(lang.tag());
        doc.set_lang(lang);

        let table = I18n::new(lang);
        for el in doc.elements_mut() {
            if let Some(key) = el.text_key.as_deref() {
                if let Some(s) = table.get(key) {
                    if el.kind.rewrites_value() {
                        el.value = s.to_string();
                    } else {
                        el.text = s.to_string();
                    }
                }
            }
            if let Some(key) = el.placeholder_key.as_deref() {
                if let Some(s) = table.get(key) {
                    el.placeholder = s.to_string();
                }
            }
        }

        for id in TOGGLE_CONTROLS {
            if let Some(el) = doc.element_mut(id) {
                el.text = lang.toggle_label().to_string();
            }
        }
    }

    /// Like [`set_language`](Self::set_language) but from a raw tag.
    /// An unrecognized tag is a silent no-op — nothing is persisted
    /// and no element is touched.
    pub fn set_language_tag(&mut self, doc: &mut Document, tag: &str) {
        match LanguageCode::parse(tag) {
            Some(lang) => self.set_language(doc, lang),
            None => log::debug!("i18n: ignoring unknown language tag {tag:?}"),
        }
    }

    /// Switch to the other language of the two-code set.  An
    /// involution: toggling twice restores the original code.
    pub fn toggle_language(&mut self, doc: &mut Document) {
        let next = self.active().other();
        self.set_language(doc, next);
    }

    /// Startup: apply the persisted preference (primary if absent)
    /// before the page is used.
    pub fn init(&mut self, doc: &mut Document) {
        let lang = self.active();
        self.set_language(doc, lang);
    }
}

// ── Helper macro ──────────────────────────────────────────────────────────────
macro_rules! lang_map {
    ($name:ident, $display:literal, [ $( $k:literal => $v:literal ),* $(,)? ]) => {
        pub struct $name(HashMap<&'static str, &'static str>);
        impl $name {
            pub fn new() -> Self {
                let mut m = HashMap::new();
                $( m.insert($k, $v); )*
                Self(m)
            }
        }
        impl Lang for $name {
            fn get(&self, key: &str) -> Option<&'static str> {
                self.0.get(key).copied()
            }
            fn name(&self) -> &str { $display }
        }
    };
}

// ── Russian ───────────────────────────────────────────────────────────────────
lang_map!(Ru, "Русский", [
    "site_title"                => "Sega Online - Играйте в ретро игры",
    "site_header"               => "Sega Genesis Games",
    "nav_home"                  => "🎮 Игры",
    "nav_feedback"              => "📝 Отзывы",
    "nav_chat"                  => "💬 Чат",
    "upload_label"              => "📂 Загрузить свою игру (.md, .gen)",
    "fullscreen"                => "⛶ На весь экран",
    "close_game"                => "Закрыть игру",
    "click_to_start"            => "Нажмите на игру, чтобы начать.",
    "site_desc"                 => "Играйте в ретро игры прямо в браузере",
    "games_section"             => "Список игр",
    "play_btn"                  => "Играть",
    "footer_text"               => "Sega Online Emulator - 2026",
    "connect_mobile"            => "Играйте на телефоне:",
    "scan_qr"                   => "Сканируйте QR-код",
    "settings_title"            => "Настройки",
    "settings_size"             => "Размер контроллера:",
    "settings_save"             => "Сохранить",
    "feedback_title"            => "Отзывы и Предложения",
    "feedback_name"             => "Ваше имя:",
    "feedback_text"             => "Ваш отзыв:",
    "feedback_submit"           => "Отправить",
    "feedback_list"             => "Последние отзывы",
    "back_to_menu"              => "Вернуться в меню",
    "exit_game"                 => "Выход",
    "feedback_placeholder_name" => "Введите ваше имя",
    "feedback_placeholder_text" => "Напишите ваш отзыв здесь...",
    "error_file_not_found"      => "Ошибка: Файл игры не найден",
    "error_file_desc"           => "Не удалось загрузить:",
    "error_file_tip"            => "Убедитесь, что файл существует в папке <b>roms</b>.",
    "game_not_selected"         => "Игра не выбрана",
    "alert_fullscreen_error"    => "Ваш браузер не поддерживает полноэкранный режим.",
    "chat_header"               => "Чат Игроков",
    "chat_loading"              => "Загрузка сообщений...",
    "chat_disclaimer"           => "Сообщения удаляются автоматически через 24 часа.",
    "chat_send"                 => "Отправить",
    "chat_name_placeholder"     => "Ваше имя",
    "chat_text_placeholder"     => "Сообщение...",
]);

// ── English ───────────────────────────────────────────────────────────────────
lang_map!(En, "English", [
    "site_title"                => "Sega Online - Play Retro Games",
    "site_header"               => "Sega Genesis Games",
    "nav_home"                  => "🎮 Games",
    "nav_feedback"              => "📝 Feedback",
    "nav_chat"                  => "💬 Chat",
    "upload_label"              => "📂 Upload your ROM (.md, .gen)",
    "fullscreen"                => "⛶ Fullscreen",
    "close_game"                => "Close Game",
    "click_to_start"            => "Click on a game to start.",
    "site_desc"                 => "Play retro games directly in your browser",
    "games_section"             => "Games List",
    "play_btn"                  => "Play",
    "footer_text"               => "Sega Online Emulator - 2026",
    "connect_mobile"            => "Play on mobile:",
    "scan_qr"                   => "Scan QR Code",
    "settings_title"            => "Settings",
    "settings_size"             => "Controller Size:",
    "settings_save"             => "Save",
    "feedback_title"            => "Feedback & Suggestions",
    "feedback_name"             => "Your Name:",
    "feedback_text"             => "Your Feedback:",
    "feedback_submit"           => "Submit",
    "feedback_list"             => "Latest Reviews",
    "back_to_menu"              => "Back to Menu",
    "exit_game"                 => "Exit",
    "feedback_placeholder_name" => "Enter your name",
    "feedback_placeholder_text" => "Write your feedback here...",
    "error_file_not_found"      => "Error: Game file not found",
    "error_file_desc"           => "Could not load:",
    "error_file_tip"            => "Make sure the file exists in the <b>roms</b> folder.",
    "game_not_selected"         => "No game selected",
    "alert_fullscreen_error"    => "Your browser does not support fullscreen mode.",
    "chat_header"               => "Players Chat",
    "chat_loading"              => "Loading messages...",
    "chat_disclaimer"           => "Messages are automatically deleted after 24 hours.",
    "chat_send"                 => "Send",
    "chat_name_placeholder"     => "Your Name",
    "chat_text_placeholder"     => "Message...",
]);
