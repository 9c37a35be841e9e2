use serde::{Deserialize, Deserializer, Serialize};

/// One portfolio entry as published in the project data file.
/// Every field tolerates being absent or `null`.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Project {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kpis: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub actions: Vec<String>,
}

impl Project {
    pub fn new(title: &str) -> Self {
        Project {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Decode a JSON array of project records.
    pub fn list_from_json(raw: &str) -> Result<Vec<Self>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The currently selected filter: every project, or only those carrying one tag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveFilter {
    #[default]
    All,
    Tag(String),
}

impl ActiveFilter {
    /// Button text for this filter; `all_label` names the sentinel.
    pub fn label<'a>(&'a self, all_label: &'a str) -> &'a str {
        match self {
            ActiveFilter::All => all_label,
            ActiveFilter::Tag(t) => t,
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            ActiveFilter::All => true,
            ActiveFilter::Tag(t) => project.has_tag(t),
        }
    }

    /// Stable filter: keeps collection order.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}
