use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::CourseId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationErrorKind {
    NonNumericId,
    EmptyName,
    DuplicateId,
}

/// Rejected form submission. Never accompanied by a state change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("id must be numeric")]
    NonNumericId,
    #[error("name must not be empty")]
    EmptyName,
    #[error("duplicate id: a course with id {0} already exists")]
    DuplicateId(CourseId),
}

impl ValidationError {
    pub fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::NonNumericId => ValidationErrorKind::NonNumericId,
            Self::EmptyName => ValidationErrorKind::EmptyName,
            Self::DuplicateId(_) => ValidationErrorKind::DuplicateId,
        }
    }
}
