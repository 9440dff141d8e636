//! Static content for the Vitrine portfolio page.

pub mod builtin;
pub mod error;
pub mod filter;
pub mod model;

use std::collections::HashSet;

pub use builtin::{builtin_services, builtin_skills};
pub use error::ContentError;
pub use filter::{filter_projects, ProjectFilter};
pub use model::{Category, Project, Service, Skill};

fn ensure_unique_ids<'a>(
    kind: &'static str,
    ids: impl IntoIterator<Item = &'a str>,
) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Parse a project list. Ids must be unique.
pub fn load_projects(json: &str) -> Result<Vec<Project>, ContentError> {
    let projects: Vec<Project> = serde_json::from_str(json)?;
    ensure_unique_ids("project", projects.iter().map(|p| p.id.as_str()))?;
    log::debug!("loaded {} project(s)", projects.len());
    Ok(projects)
}

pub fn load_services(json: &str) -> Result<Vec<Service>, ContentError> {
    let services: Vec<Service> = serde_json::from_str(json)?;
    ensure_unique_ids("service", services.iter().map(|s| s.id.as_str()))?;
    Ok(services)
}

/// Parse a skill list, rejecting proficiencies outside `0..=100`.
pub fn load_skills(json: &str) -> Result<Vec<Skill>, ContentError> {
    Ok(serde_json::from_str(json)?)
}
