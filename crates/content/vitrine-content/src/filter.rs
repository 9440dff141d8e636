//! Portfolio category filter, as shown by the filter buttons.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;
use crate::model::{Category, Project};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ProjectFilter {
    #[default]
    All,
    Category(Category),
}

impl ProjectFilter {
    /// Button order on the page.
    pub const BUTTONS: [ProjectFilter; 4] = [
        ProjectFilter::All,
        ProjectFilter::Category(Category::Photo),
        ProjectFilter::Category(Category::Video),
        ProjectFilter::Category(Category::Graphic),
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Category(c) => c.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "Tout",
            ProjectFilter::Category(Category::Photo) => "Photos",
            ProjectFilter::Category(Category::Video) => "Vidéos",
            ProjectFilter::Category(Category::Graphic) => "Graphisme",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Category(c) => project.category == c,
        }
    }
}

impl fmt::Display for ProjectFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ProjectFilter {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProjectFilter::BUTTONS
            .into_iter()
            .find(|f| f.key() == s)
            .ok_or_else(|| ContentError::UnknownFilter(s.to_string()))
    }
}

impl TryFrom<String> for ProjectFilter {
    type Error = ContentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ProjectFilter> for String {
    fn from(value: ProjectFilter) -> Self {
        value.key().to_string()
    }
}

/// Projects matching `filter`, in their original order.
pub fn filter_projects(projects: &[Project], filter: ProjectFilter) -> Vec<&Project> {
    projects.iter().filter(|p| filter.matches(p)).collect()
}
