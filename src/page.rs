//! Portfolio section controller: load once, index tags once, then redraw the
//! grid and filter bar whenever the active filter changes.

use crate::config::PageConfig;
use crate::designs::filters::{self, FilterListener};
use crate::designs::portfolio;
use crate::dom::{ClickEvent, Document, Region};
use crate::models::project::{ActiveFilter, Project};
use crate::models::tag::derive_tags;
use crate::source::{LoadError, ProjectSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartOutcome {
    /// The page has no project grid; nothing was fetched.
    NoGrid,
    Rendered,
    /// Fetch or decode failed; the grid shows the error card.
    Failed,
}

struct Loaded {
    projects: Vec<Project>,
    tags: Vec<String>,
    active: ActiveFilter,
    listener: Option<FilterListener>,
}

pub struct PageController<S: ProjectSource> {
    source: S,
    config: PageConfig,
    loaded: Option<Loaded>,
}

impl<S: ProjectSource> PageController<S> {
    pub fn new(source: S, config: PageConfig) -> Self {
        Self {
            source,
            config,
            loaded: None,
        }
    }

    pub fn start(&mut self, doc: &mut dyn Document) -> StartOutcome {
        if !doc.exists(Region::ProjectsGrid) {
            return StartOutcome::NoGrid;
        }

        match self.load() {
            Ok(()) => {
                self.rerender(doc);
                StartOutcome::Rendered
            }
            Err(e) => {
                log::warn!("{}", e);
                portfolio::render_load_error(doc, &self.config);
                StartOutcome::Failed
            }
        }
    }

    fn load(&mut self) -> Result<(), LoadError> {
        let projects = self.source.fetch()?;
        let tags = derive_tags(&projects);
        log::info!(
            "Loaded {} projects with {} distinct tags",
            projects.len(),
            tags.len()
        );
        self.loaded = Some(Loaded {
            projects,
            tags,
            active: ActiveFilter::All,
            listener: None,
        });
        Ok(())
    }

    /// Redraw grid and filter bar for the current filter. No-op before a
    /// successful start.
    pub fn rerender(&mut self, doc: &mut dyn Document) {
        let Some(state) = self.loaded.as_mut() else {
            return;
        };
        portfolio::render_grid(doc, &state.projects, &state.active, &self.config);
        state.listener = filters::render_filters(
            doc,
            &state.tags,
            &state.active,
            state.listener.take(),
            &self.config,
        );
    }

    /// Handle a click on the filter bar. Returns true when it changed the view.
    pub fn handle_click(&mut self, doc: &mut dyn Document, event: &ClickEvent) -> bool {
        let Some(state) = self.loaded.as_mut() else {
            return false;
        };
        let Some(next) = filters::pick(event, state.listener.as_ref(), &state.tags) else {
            return false;
        };
        log::debug!("Filter picked: {:?}", next);
        state.active = next;
        self.rerender(doc);
        true
    }

    pub fn owns_listener(&self, event: &ClickEvent) -> bool {
        self.loaded
            .as_ref()
            .and_then(|s| s.listener.as_ref())
            .is_some_and(|l| l.id == event.listener)
    }

    pub fn active(&self) -> Option<&ActiveFilter> {
        self.loaded.as_ref().map(|s| &s.active)
    }

    pub fn tags(&self) -> &[String] {
        self.loaded.as_ref().map(|s| s.tags.as_slice()).unwrap_or(&[])
    }

    pub fn projects(&self) -> &[Project] {
        self.loaded
            .as_ref()
            .map(|s| s.projects.as_slice())
            .unwrap_or(&[])
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }
}
