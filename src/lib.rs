//! Portfolio page: project cards, a single-tag filter bar and a persisted
//! light/dark theme, driven through injected document/storage/data ports.

pub mod boot;
pub mod chrome;
pub mod config;
pub mod designs;
pub mod dom;
pub mod models;
pub mod page;
pub mod render;
pub mod source;
pub mod store;
pub mod theme;


pub use boot::App;
pub use config::PageConfig;
pub use dom::{ClickEvent, ClickTarget, Document, ListenerId, MemoryDocument, Region};
pub use models::project::{ActiveFilter, Project};
pub use page::PageController;
pub use source::{FileSource, HttpSource, LoadError, ProjectSource};
pub use store::{FileStore, MemoryStore, PreferenceStore};
pub use theme::{FixedScheme, SchemeSignal, Theme, ThemeController};
