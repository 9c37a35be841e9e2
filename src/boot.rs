use crate::chrome;
use crate::config::PageConfig;
use crate::dom::{ClickEvent, Document};
use crate::page::{PageController, StartOutcome};
use crate::source::ProjectSource;
use crate::store::PreferenceStore;
use crate::theme::{SchemeSignal, Theme, ThemeController};

/// Install the env_logger backend. Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::try_init();
}

/// The whole page: theme first (no flash of the wrong theme), then footer,
/// then the portfolio section.
pub struct App<S: ProjectSource, P: PreferenceStore> {
    pub theme: ThemeController,
    pub page: PageController<S>,
    store: P,
}

impl<S: ProjectSource, P: PreferenceStore> App<S, P> {
    pub fn new(source: S, store: P, config: PageConfig) -> Self {
        Self {
            theme: ThemeController::new(&config),
            page: PageController::new(source, config),
            store,
        }
    }

    /// Run the boot sequence against `doc`. `year` fills the footer slot.
    pub fn run(
        &mut self,
        doc: &mut dyn Document,
        scheme: &dyn SchemeSignal,
        year: i32,
    ) -> StartOutcome {
        init_logging();
        log::info!("Portfolio page boot starting...");

        let theme = self.theme.initialize(doc, &self.store, scheme);
        self.theme.bind(doc);
        log::info!("  Theme: {}", theme.as_str());

        chrome::init_footer_year(doc, year);

        let outcome = self.page.start(doc);
        log::info!("  Portfolio section: {:?}", outcome);
        outcome
    }

    /// Route a click to the theme toggle or the filter bar.
    pub fn dispatch(&mut self, doc: &mut dyn Document, event: &ClickEvent) -> bool {
        if self.theme.listener() == Some(event.listener) {
            self.toggle_theme(doc);
            return true;
        }
        if self.page.owns_listener(event) {
            return self.page.handle_click(doc, event);
        }
        log::debug!("Ignoring click for unknown listener {:?}", event.listener);
        false
    }

    pub fn toggle_theme(&mut self, doc: &mut dyn Document) -> Theme {
        self.theme.toggle(doc, &self.store)
    }

    pub fn store(&self) -> &P {
        &self.store
    }
}
