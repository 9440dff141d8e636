use thiserror::Error;

use crate::values::Field;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("required field '{0}' is empty")]
    MissingField(Field),
    #[error("a submission is already in flight")]
    AlreadySending,
    #[error("form has been torn down")]
    TornDown,
    #[error("unknown form field '{0}'")]
    UnknownField(String),
}
