//! Services and skills shipped with the site.

use crate::error::ContentError;
use crate::model::{Service, Skill};

const SERVICES_JSON: &str = include_str!("../data/services.json");
const SKILLS_JSON: &str = include_str!("../data/skills.json");

pub fn builtin_services() -> Result<Vec<Service>, ContentError> {
    crate::load_services(SERVICES_JSON)
}

pub fn builtin_skills() -> Result<Vec<Skill>, ContentError> {
    crate::load_skills(SKILLS_JSON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_data_parses() {
        let services = builtin_services().unwrap();
        assert_eq!(services.len(), 4);
        assert!(services.iter().all(|s| s.features.len() == 5));
        let icons: Vec<_> = services.iter().map(|s| s.icon.as_str()).collect();
        assert_eq!(icons, ["camera", "video", "layers", "trending-up"]);

        let skills = builtin_skills().unwrap();
        assert_eq!(skills.len(), 8);
        assert_eq!(skills[0].name, "Adobe Photoshop");
        assert_eq!(skills[3].proficiency, 75);
    }
}
