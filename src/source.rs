use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::models::project::Project;

#[derive(Debug)]
pub enum LoadError {
    /// Connection, DNS, timeout or URL errors.
    Transport(String),
    /// Non-success HTTP status.
    Status(u16),
    Io(String),
    /// Body was not a JSON array of project records.
    Decode(String),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadError::Transport(e) => write!(f, "project data request failed: {}", e),
            LoadError::Status(code) => write!(f, "project data returned HTTP {}", code),
            LoadError::Io(e) => write!(f, "project data could not be read: {}", e),
            LoadError::Decode(e) => write!(f, "project data is not valid: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Where the project collection comes from. Fetched once per page start.
pub trait ProjectSource {
    fn fetch(&self) -> Result<Vec<Project>, LoadError>;
}

/// Fetches the project list over HTTP, bypassing caches.
pub struct HttpSource {
    url: Url,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// `base` is the page URL; `data_path` is resolved against it the way a
    /// relative link would be.
    pub fn new(base: &str, data_path: &str) -> Result<Self, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| LoadError::Transport(format!("HTTP client error: {}", e)))?;
        Self::with_client(base, data_path, client)
    }

    pub fn with_client(
        base: &str,
        data_path: &str,
        client: reqwest::blocking::Client,
    ) -> Result<Self, LoadError> {
        let url = Url::parse(base)
            .and_then(|b| b.join(data_path))
            .map_err(|e| LoadError::Transport(format!("bad data URL: {}", e)))?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl ProjectSource for HttpSource {
    fn fetch(&self) -> Result<Vec<Project>, LoadError> {
        let resp = self
            .client
            .get(self.url.clone())
            .header("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0")
            .header("Pragma", "no-cache")
            .send()
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(LoadError::Status(resp.status().as_u16()));
        }

        let body = resp
            .text()
            .map_err(|e| LoadError::Transport(e.to_string()))?;
        Project::list_from_json(&body).map_err(|e| LoadError::Decode(e.to_string()))
    }
}

/// Reads the project list from a local JSON file (static export, previews).
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ProjectSource for FileSource {
    fn fetch(&self) -> Result<Vec<Project>, LoadError> {
        let raw = std::fs::read_to_string(&self.path)
            .map_err(|e| LoadError::Io(format!("{}: {}", self.path.display(), e)))?;
        Project::list_from_json(&raw).map_err(|e| LoadError::Decode(e.to_string()))
    }
}

impl<T: ProjectSource + ?Sized> ProjectSource for &T {
    fn fetch(&self) -> Result<Vec<Project>, LoadError> {
        (**self).fetch()
    }
}
