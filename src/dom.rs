//! Document port: the handful of named regions the page reads and writes.
//!
//! The page never touches anything beyond these regions and the root element's
//! attributes. `MemoryDocument` is a headless implementation used for
//! pre-rendering and in tests; a browser binding implements the same trait.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::render::html_escape;

/// Regions addressed by stable element id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    ThemeToggle,
    Filters,
    ProjectsGrid,
    FooterYear,
}

impl Region {
    pub const ALL: [Region; 4] = [
        Region::ThemeToggle,
        Region::Filters,
        Region::ProjectsGrid,
        Region::FooterYear,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Self::ThemeToggle => "themeToggle",
            Self::Filters => "filters",
            Self::ProjectsGrid => "projectsGrid",
            Self::FooterYear => "year",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(pub u64);

/// The filter button a click landed in (nearest `button[data-tag]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickTarget {
    /// Decoded `data-tag` attribute.
    pub tag: String,
    /// True for the all-items button (`data-filter="all"`).
    pub sentinel: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub listener: ListenerId,
    pub target: Option<ClickTarget>,
}

pub trait Document {
    fn exists(&self, region: Region) -> bool;
    /// Replace a region's markup. Returns false when the region is absent.
    fn set_html(&mut self, region: Region, html: &str) -> bool;
    /// Replace a region's content with plain text. Returns false when the region is absent.
    fn set_text(&mut self, region: Region, text: &str) -> bool;
    fn root_attribute(&self, name: &str) -> Option<String>;
    fn set_root_attribute(&mut self, name: &str, value: &str);
    /// Register a click listener on a region; `None` when the region is absent.
    fn add_click_listener(&mut self, region: Region) -> Option<ListenerId>;
    fn remove_click_listener(&mut self, id: ListenerId);
}

/// Headless document: markup per region, root attributes and live listeners.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    regions: HashMap<Region, String>,
    root: HashMap<String, String>,
    listeners: HashMap<ListenerId, Region>,
    next_listener: u64,
}

impl MemoryDocument {
    /// A document with every region present and empty.
    pub fn new() -> Self {
        Self::with_regions(&Region::ALL)
    }

    pub fn with_regions(regions: &[Region]) -> Self {
        let mut doc = MemoryDocument::default();
        for r in regions {
            doc.regions.insert(*r, String::new());
        }
        doc
    }

    pub fn html(&self, region: Region) -> Option<&str> {
        self.regions.get(&region).map(|s| s.as_str())
    }

    /// Text content of a region, entities decoded.
    pub fn text(&self, region: Region) -> Option<String> {
        let markup = self.regions.get(&region)?;
        let fragment = Html::parse_fragment(markup);
        Some(fragment.root_element().text().collect())
    }

    pub fn listener_count(&self, region: Region) -> usize {
        self.listeners.values().filter(|r| **r == region).count()
    }

    /// Click the button in `region` whose text is `label`. Returns the event
    /// seen by the region's listener, or `None` when nothing listens there.
    /// A label matching no button produces an event without a target.
    pub fn click(&self, region: Region, label: &str) -> Option<ClickEvent> {
        let listener = self.live_listener(region)?;
        let markup = self.regions.get(&region)?;
        let fragment = Html::parse_fragment(markup);
        let target = Selector::parse("button")
            .ok()
            .and_then(|sel| {
                fragment
                    .select(&sel)
                    .find(|b| b.text().collect::<String>() == label)
            })
            .and_then(closest_tag_button);
        Some(ClickEvent { listener, target })
    }

    /// Click `region` itself, away from any filter button.
    pub fn click_region(&self, region: Region) -> Option<ClickEvent> {
        let listener = self.live_listener(region)?;
        Some(ClickEvent {
            listener,
            target: None,
        })
    }

    fn live_listener(&self, region: Region) -> Option<ListenerId> {
        self.listeners
            .iter()
            .filter(|(_, r)| **r == region)
            .map(|(id, _)| *id)
            .max_by_key(|id| id.0)
    }
}

fn closest_tag_button(el: ElementRef<'_>) -> Option<ClickTarget> {
    std::iter::once(el)
        .chain(el.ancestors().filter_map(ElementRef::wrap))
        .find(|e| e.value().name() == "button" && e.value().attr("data-tag").is_some())
        .map(|b| ClickTarget {
            tag: b.value().attr("data-tag").unwrap_or("").to_string(),
            sentinel: b.value().attr("data-filter") == Some("all"),
        })
}

impl Document for MemoryDocument {
    fn exists(&self, region: Region) -> bool {
        self.regions.contains_key(&region)
    }

    fn set_html(&mut self, region: Region, html: &str) -> bool {
        match self.regions.get_mut(&region) {
            Some(slot) => {
                *slot = html.to_string();
                true
            }
            None => false,
        }
    }

    fn set_text(&mut self, region: Region, text: &str) -> bool {
        self.set_html(region, &html_escape(text))
    }

    fn root_attribute(&self, name: &str) -> Option<String> {
        self.root.get(name).cloned()
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root.insert(name.to_string(), value.to_string());
    }

    fn add_click_listener(&mut self, region: Region) -> Option<ListenerId> {
        if !self.exists(region) {
            return None;
        }
        self.next_listener += 1;
        let id = ListenerId(self.next_listener);
        self.listeners.insert(id, region);
        Some(id)
    }

    fn remove_click_listener(&mut self, id: ListenerId) {
        self.listeners.remove(&id);
    }
}
