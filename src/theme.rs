//! Light/dark theme state machine.
//!
//! The theme lives in three places: the preference store, the root element
//! attribute and the toggle control's glyph. Every operation leaves all three
//! in agreement.

use crate::config::PageConfig;
use crate::dom::{Document, ListenerId, Region};
use crate::store::PreferenceStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

/// Assumed when the root element carries no readable theme.
pub const FALLBACK_THEME: Theme = Theme::Dark;

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Light => "\u{263C}",
            Self::Dark => "\u{263E}",
        }
    }
}

/// Whether the visiting environment prefers a light color scheme.
pub trait SchemeSignal {
    fn prefers_light(&self) -> bool;
}

#[derive(Debug, Clone, Copy)]
pub struct FixedScheme(pub bool);

impl SchemeSignal for FixedScheme {
    fn prefers_light(&self) -> bool {
        self.0
    }
}

impl<F: Fn() -> bool> SchemeSignal for F {
    fn prefers_light(&self) -> bool {
        self()
    }
}

pub struct ThemeController {
    key: String,
    attribute: String,
    listener: Option<ListenerId>,
}

impl ThemeController {
    pub fn new(config: &PageConfig) -> Self {
        Self {
            key: config.theme_key.clone(),
            attribute: config.theme_attribute.clone(),
            listener: None,
        }
    }

    /// Apply the persisted theme, or derive one from the scheme signal when
    /// nothing usable is stored.
    pub fn initialize(
        &self,
        doc: &mut dyn Document,
        store: &dyn PreferenceStore,
        scheme: &dyn SchemeSignal,
    ) -> Theme {
        let theme = match store.get(&self.key).as_deref().map(Theme::parse) {
            Some(Some(saved)) => saved,
            saved => {
                if let Some(None) = saved {
                    log::warn!("Ignoring unknown stored theme under '{}'", self.key);
                }
                if scheme.prefers_light() {
                    Theme::Light
                } else {
                    Theme::Dark
                }
            }
        };
        self.apply(doc, store, theme);
        theme
    }

    /// Flip whatever theme the root element currently shows.
    pub fn toggle(&self, doc: &mut dyn Document, store: &dyn PreferenceStore) -> Theme {
        let next = self.current(doc).flip();
        self.apply(doc, store, next);
        next
    }

    pub fn current(&self, doc: &dyn Document) -> Theme {
        doc.root_attribute(&self.attribute)
            .as_deref()
            .and_then(Theme::parse)
            .unwrap_or(FALLBACK_THEME)
    }

    /// Set the root attribute, persist the value and update the glyph.
    ///
    /// A failed store write is logged and the attribute and glyph still
    /// change, so the stored value can lag behind until the next successful
    /// apply. Every other path keeps all three in agreement.
    pub fn apply(&self, doc: &mut dyn Document, store: &dyn PreferenceStore, theme: Theme) {
        doc.set_root_attribute(&self.attribute, theme.as_str());
        if let Err(e) = store.set(&self.key, theme.as_str()) {
            log::warn!("Theme preference not saved: {}", e);
        }
        // Pages without a toggle control simply skip the glyph.
        doc.set_text(Region::ThemeToggle, theme.glyph());
        log::debug!("Theme applied: {}", theme.as_str());
    }

    /// Listen for clicks on the toggle control, if the page has one.
    pub fn bind(&mut self, doc: &mut dyn Document) -> Option<ListenerId> {
        if let Some(old) = self.listener.take() {
            doc.remove_click_listener(old);
        }
        self.listener = doc.add_click_listener(Region::ThemeToggle);
        self.listener
    }

    pub fn listener(&self) -> Option<ListenerId> {
        self.listener
    }
}
