//! Serde types for the static portfolio content.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Photo,
    Video,
    Graphic,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Photo, Category::Video, Category::Graphic];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Photo => "photo",
            Category::Video => "video",
            Category::Graphic => "graphic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub client: String,
    pub category: Category,
    #[serde(default)]
    pub tags: Vec<String>,
    pub thumbnail: String,
    pub description: String,
    pub year: u16,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name understood by the rendering layer (`camera`, `video`, ...).
    pub icon: String,
    pub features: Vec<String>,
}

/// A named skill with a proficiency percentage in `0..=100`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SkillRepr")]
pub struct Skill {
    pub name: String,
    pub proficiency: u8,
}

#[derive(Deserialize)]
struct SkillRepr {
    name: String,
    proficiency: i64,
}

impl TryFrom<SkillRepr> for Skill {
    type Error = ContentError;

    fn try_from(raw: SkillRepr) -> Result<Self, Self::Error> {
        Skill::new(raw.name, raw.proficiency)
    }
}

impl Skill {
    pub fn new(name: impl Into<String>, proficiency: i64) -> Result<Self, ContentError> {
        let name = name.into();
        match u8::try_from(proficiency) {
            Ok(p) if p <= 100 => Ok(Self {
                name,
                proficiency: p,
            }),
            _ => Err(ContentError::ProficiencyOutOfRange {
                name,
                value: proficiency,
            }),
        }
    }

    /// The value written to the bar's `data-width` attribute, e.g. `"85%"`.
    pub fn data_width(&self) -> String {
        format!("{}%", self.proficiency)
    }
}
