use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("skill '{name}' has proficiency {value}, expected 0..=100")]
    ProficiencyOutOfRange { name: String, value: i64 },
    #[error("unknown project filter '{0}'")]
    UnknownFilter(String),
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}
